//! Testing utilities for cordial.
//!
//! # Features
//!
//! - [`RecordingHandler`]: A handler that records the events it receives
//! - [`settle`]: Run one handler against a cache and take its outcome
//! - Payload fixtures shaped like real gateway dispatches

use crate::{
    cache::Cache,
    parts::{Channel, Guild},
};
use cordial_core::{Deferred, Handler, Part, PartError, RawEvent, deferred};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every event it receives and resolves with a fixed
/// value.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingHandler::new(0usize);
/// let registry = RegistryBuilder::new().register("PING", recorder.clone()).build();
///
/// // Dispatch...
///
/// assert_eq!(recorder.names(), vec!["PING"]);
/// ```
pub struct RecordingHandler<T> {
    events: Arc<Mutex<Vec<RawEvent>>>,
    value: T,
}

impl<T: Clone> RecordingHandler<T> {
    /// Create a recorder that resolves every dispatch with `value`.
    pub fn new(value: T) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            value,
        }
    }

    /// Get a clone of the recorded events.
    pub fn events(&self) -> Vec<RawEvent> {
        self.events.lock().unwrap().clone()
    }

    /// The identifiers of the recorded events, in arrival order.
    pub fn names(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|event| event.name.clone())
            .collect()
    }

    /// Get the number of recorded events.
    pub fn count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Clear all recorded events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl<T: Clone> Clone for RecordingHandler<T> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
            value: self.value.clone(),
        }
    }
}

impl<S, T> Handler<S, T> for RecordingHandler<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn handle(&self, deferred: Deferred<T>, event: &RawEvent, _state: &mut S) {
        self.events.lock().unwrap().push(event.clone());
        deferred.resolve(self.value.clone());
    }
}

// ============================================================================
// Dispatch helpers
// ============================================================================

/// Run `handler` once and return what it settled with.
///
/// Handlers settle synchronously, so the outcome is available as soon as
/// `handle` returns.
pub fn settle<S, T, H: Handler<S, T>>(handler: &H, event: &RawEvent, state: &mut S) -> Result<T, PartError> {
    let (deferred, mut promise) = deferred();
    handler.handle(deferred, event, state);
    promise.try_take().unwrap_or(Err(PartError::Abandoned))
}

// ============================================================================
// Fixtures
// ============================================================================

/// A cache holding one bare guild.
pub fn cache_with_guild(guild_id: &str) -> Cache {
    let mut cache = Cache::new();
    let guild = Guild::hydrate(&json!({"id": guild_id, "name": format!("guild {guild_id}")}))
        .unwrap();
    cache.guilds.push(guild).unwrap();
    cache
}

/// A cache holding one guild with one text channel.
pub fn cache_with_channel(guild_id: &str, channel_id: &str) -> Cache {
    let mut cache = cache_with_guild(guild_id);
    let channel = Channel::hydrate(&json!({"id": channel_id, "type": 0, "guild_id": guild_id}))
        .unwrap();
    cache
        .guild_mut(guild_id)
        .unwrap()
        .channels
        .push(channel)
        .unwrap();
    cache
}

/// A wire role object.
pub fn role_payload(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "color": 0,
        "hoist": false,
        "position": 1,
        "permissions": 104_324_161,
        "managed": false,
        "mentionable": false
    })
}

/// A wire member object for user `user_id`.
pub fn member_payload(user_id: &str, name: &str) -> Value {
    json!({
        "user": {"id": user_id, "username": name, "discriminator": "0001"},
        "nick": name,
        "roles": [],
        "joined_at": "2016-05-14T12:00:00.000000+00:00",
        "deaf": false,
        "mute": false
    })
}

/// A `GUILD_CREATE` payload with two roles, one channel and one member.
pub fn guild_payload(guild_id: &str) -> Value {
    json!({
        "id": guild_id,
        "name": format!("guild {guild_id}"),
        "owner_id": "42",
        "region": "us-east",
        "member_count": 1,
        "large": false,
        "roles": [role_payload(guild_id, "@everyone"), role_payload("50", "mod")],
        "channels": [{"id": "51", "type": 0, "name": "general", "position": 0}],
        "members": [member_payload("42", "ada")]
    })
}

/// A `MESSAGE_CREATE` payload.
pub fn message_payload(id: &str, channel_id: &str, guild_id: Option<&str>) -> Value {
    let mut message = json!({
        "id": id,
        "channel_id": channel_id,
        "content": "hello",
        "timestamp": "2016-05-14T12:00:00.000000+00:00",
        "author": {"id": "42", "username": "ada", "discriminator": "0001"},
        "embeds": []
    });
    if let Some(guild_id) = guild_id {
        message["guild_id"] = json!(guild_id);
    }
    message
}

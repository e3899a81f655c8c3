//! Handlers for the standard gateway events.
//!
//! Every handler follows the same shape: pull the nested payload out of the
//! event, copy in the context the nested object lacks (its owner's id), hydrate
//! the part, write it into the owner's collection when the owner is cached,
//! and settle the deferred with the part. A missing owner is not an error; a
//! payload that cannot be hydrated rejects the deferred.

mod ban;
mod channel;
mod guild;
mod member;
mod message;
mod presence;
mod reaction;
mod role;
mod voice;

pub use ban::{BanAdd, BanRemove};
pub use channel::{ChannelCreate, ChannelDelete, ChannelPinsUpdate, ChannelUpdate};
pub use guild::{GuildCreate, GuildDelete, GuildUpdate};
pub use member::{MemberAdd, MemberRemove, MemberUpdate};
pub use message::{MessageCreate, MessageDelete, MessageDeleteBulk, MessageUpdate};
pub use presence::{PresenceUpdate, TypingStart};
pub use reaction::{ReactionAdd, ReactionRemove, ReactionRemoveAll};
pub use role::{RoleCreate, RoleDelete, RoleUpdate};
pub use voice::{VoiceServerUpdate, VoiceStateUpdate};

use crate::collection::Collection;
use cordial_core::{Field, HydrateError, Part, RawEvent, key_string};
use serde_json::Value;
use std::sync::Arc;

/// Fetch a nested object the event must carry.
pub(crate) fn nested<'a>(event: &'a RawEvent, key: &'static str) -> Result<&'a Value, HydrateError> {
    event
        .data
        .get(key)
        .filter(|value| !value.is_null())
        .ok_or_else(|| HydrateError::MissingPayload {
            event: event.name.clone(),
            key,
        })
}

/// A contextual identifier (payload first, then envelope) as a string.
pub(crate) fn context_id(event: &RawEvent, key: &str) -> Option<String> {
    event.context(key).and_then(key_string)
}

/// A contextual identifier the event cannot be handled without.
pub(crate) fn required_id(event: &RawEvent, key: &'static str) -> Result<String, HydrateError> {
    context_id(event, key).ok_or_else(|| HydrateError::MissingPayload {
        event: event.name.clone(),
        key,
    })
}

/// Copy `context` entries onto a clone of `payload`.
///
/// `None` entries are skipped. Non-object payloads are returned unchanged so
/// hydration reports them.
pub(crate) fn with_context(payload: &Value, context: &[(&str, Option<&Value>)]) -> Value {
    let mut payload = payload.clone();
    if let Some(object) = payload.as_object_mut() {
        for (key, value) in context {
            if let Some(value) = value {
                object.insert((*key).to_string(), (*value).clone());
            }
        }
    }
    payload
}

/// `payload` with the event's `guild_id` (payload first, then envelope)
/// copied in.
pub(crate) fn guild_context(event: &RawEvent, payload: &Value) -> Value {
    with_context(payload, &[("guild_id", event.context("guild_id"))])
}

/// Merge `payload` into the cached part with the same key, or push a new
/// part. Returns the part as cached afterwards.
pub(crate) fn upsert<P: Part>(
    collection: &mut Collection<P>,
    payload: &Value,
) -> Result<Arc<P>, HydrateError> {
    let part = P::hydrate(payload)?;
    let key_field = collection.key_field();
    let missing_key = move || HydrateError::MissingField {
        kind: P::KIND,
        field: key_field.name(),
    };
    let key = part
        .attributes()
        .get(key_field)
        .and_then(key_string)
        .ok_or_else(missing_key)?;

    match collection.get_mut(&key) {
        Some(cached) => cached.fill(payload)?,
        None => {
            collection.push(part)?;
        }
    }
    collection.get_key(&key).cloned().ok_or_else(missing_key)
}

/// Hydrate each object of `payload[key]` after passing it through `context`.
///
/// Entries that do not hydrate are skipped, so one malformed child never
/// costs the whole aggregate.
pub(crate) fn hydrate_each<P: Part>(
    payload: &Value,
    key: &str,
    context: impl Fn(&Value) -> Value,
) -> Vec<P> {
    let Some(items) = payload.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| match P::hydrate(&context(item)) {
            Ok(part) => Some(part),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(kind = P::KIND, error = %_err, "skipping malformed entry");
                None
            }
        })
        .collect()
}

/// An object carrying a nested `user` (member, presence, ban) with its key
/// (`user.id`) and owning guild copied in.
pub(crate) fn keyed_by_user(payload: &Value, guild_id: Option<&Value>) -> Value {
    let user_id = payload.get("user").and_then(|user| user.get("id"));
    with_context(payload, &[("id", user_id), ("guild_id", guild_id)])
}

/// Note that an event's owner is not cached, so no cache write happens.
pub(crate) fn missing_owner(event: &RawEvent, owner: &'static str, id: Option<&str>) {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        event = %event.name,
        owner,
        id = id.unwrap_or_default(),
        "owner not cached, skipping cache write"
    );
    #[cfg(not(feature = "tracing"))]
    let _ = (event, owner, id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_with_context_skips_none() {
        let merged = with_context(
            &json!({"id": "10"}),
            &[("guild_id", Some(&json!("5"))), ("channel_id", None)],
        );
        assert_eq!(merged, json!({"id": "10", "guild_id": "5"}));

        let untouched = with_context(&json!("role"), &[("guild_id", Some(&json!("5")))]);
        assert_eq!(untouched, json!("role"));
    }

    #[test]
    fn test_keyed_by_user_copies_user_id() {
        let member = keyed_by_user(&json!({"user": {"id": "42"}, "nick": "n"}), Some(&json!("5")));
        assert_eq!(
            member,
            json!({"user": {"id": "42"}, "nick": "n", "id": "42", "guild_id": "5"})
        );
    }

    #[test]
    fn test_upsert_merges_into_cached_part() {
        use crate::parts::Role;

        let mut roles = Collection::<Role>::new();
        let first = upsert(&mut roles, &json!({"id": "1", "name": "a", "hoist": true})).unwrap();
        let second = upsert(&mut roles, &json!({"id": "1", "name": "b"})).unwrap();

        assert_eq!(roles.len(), 1);
        assert_eq!(first.name(), Some("a"));
        assert_eq!(second.name(), Some("b"));
        assert!(second.hoist());
    }

    #[test]
    fn test_hydrate_each_skips_malformed() {
        use crate::parts::Role;

        let payload = json!({"roles": [{"id": "1"}, {"name": "no id"}, "junk", {"id": "2"}]});
        let roles: Vec<Role> = hydrate_each(&payload, "roles", Value::clone);

        assert_eq!(roles.len(), 2);
        assert!(hydrate_each::<Role>(&payload, "channels", Value::clone).is_empty());
    }

    #[test]
    fn test_nested_reports_missing_key() {
        let event = RawEvent::new("GUILD_ROLE_CREATE", json!({"guild_id": "5", "role": null}));
        let err = nested(&event, "role").unwrap_err();
        assert_eq!(
            err,
            HydrateError::MissingPayload {
                event: "GUILD_ROLE_CREATE".to_string(),
                key: "role"
            }
        );
    }
}

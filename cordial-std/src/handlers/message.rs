use super::{context_id, guild_context, missing_owner, required_id};
use crate::{
    cache::Cache,
    events::EventPart,
    parts::{ChannelField, Message},
};
use cordial_core::{Deferred, Handler, HydrateError, Part, PartError, RawEvent};
use serde_json::{Value, json};
use std::sync::Arc;

/// `MESSAGE_CREATE`: hydrate the message and record it on its channel.
///
/// The channel's `last_message_id` always advances; the message itself is
/// only kept when the cache stores messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageCreate;

impl Handler<Cache, EventPart> for MessageCreate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(message_create(event, cache));
    }
}

/// `MESSAGE_UPDATE`: merge a partial message into the cached one.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageUpdate;

impl Handler<Cache, EventPart> for MessageUpdate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(message_update(event, cache));
    }
}

/// `MESSAGE_DELETE`: drop a cached message.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageDelete;

impl Handler<Cache, EventPart> for MessageDelete {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        let outcome = required_id(event, "id")
            .and_then(|id| delete_one(event, cache, &id))
            .map(EventPart::Message);
        deferred.settle(outcome);
    }
}

/// `MESSAGE_DELETE_BULK`: drop every listed message.
#[derive(Debug, Clone, Copy, Default)]
pub struct MessageDeleteBulk;

impl Handler<Cache, EventPart> for MessageDeleteBulk {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(message_delete_bulk(event, cache));
    }
}

fn message_create(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let message = Arc::new(Message::hydrate(&guild_context(event, &event.data))?);
    let guild_id = context_id(event, "guild_id");
    let channel_id = required_id(event, "channel_id")?;
    let store = cache.store_messages;

    match cache.channel_mut(guild_id.as_deref(), &channel_id) {
        Some(channel) => {
            if let Some(id) = message.key() {
                channel.attributes_mut().set(ChannelField::LastMessageId, id);
            }
            if store {
                channel.messages.push(Arc::clone(&message))?;
            }
        }
        None => missing_owner(event, "channel", Some(&channel_id)),
    }
    Ok(EventPart::Message(message))
}

fn message_update(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let id = required_id(event, "id")?;
    let channel_id = required_id(event, "channel_id")?;
    let guild_id = context_id(event, "guild_id");
    let payload = guild_context(event, &event.data);

    if let Some(channel) = cache.channel_mut(guild_id.as_deref(), &channel_id) {
        if let Some(cached) = channel.messages.get_mut(&id) {
            cached.fill(&payload)?;
        }
        if let Some(cached) = channel.messages.get_key(&id) {
            return Ok(EventPart::Message(Arc::clone(cached)));
        }
    }
    Ok(EventPart::Message(Arc::new(Message::hydrate(&payload)?)))
}

fn message_delete_bulk(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let ids = event
        .data
        .get("ids")
        .and_then(Value::as_array)
        .ok_or_else(|| HydrateError::MissingPayload {
            event: event.name.clone(),
            key: "ids",
        })?;

    let messages = ids
        .iter()
        .filter_map(cordial_core::key_string)
        .map(|id| delete_one(event, cache, &id))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(EventPart::Messages(messages))
}

/// Remove message `id` from the event's channel, or hydrate a stub carrying
/// the identifiers the event provides.
fn delete_one(event: &RawEvent, cache: &mut Cache, id: &str) -> Result<Arc<Message>, HydrateError> {
    let channel_id = required_id(event, "channel_id")?;
    let guild_id = context_id(event, "guild_id");

    let removed = match cache.channel_mut(guild_id.as_deref(), &channel_id) {
        Some(channel) => channel.messages.remove(id),
        None => {
            missing_owner(event, "channel", Some(&channel_id));
            None
        }
    };
    if let Some(message) = removed {
        return Ok(message);
    }

    let stub = guild_context(event, &json!({"id": id, "channel_id": channel_id}));
    Ok(Arc::new(Message::hydrate(&stub)?))
}

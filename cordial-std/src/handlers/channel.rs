use super::{context_id, guild_context, missing_owner, required_id, upsert};
use crate::{cache::Cache, events::EventPart, parts::Channel};
use cordial_core::{Deferred, Handler, Part, PartError, RawEvent};
use serde_json::{Value, json};
use std::sync::Arc;

/// `CHANNEL_CREATE`: cache a guild or private channel.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelCreate;

impl Handler<Cache, EventPart> for ChannelCreate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(channel_upsert(event, cache));
    }
}

/// `CHANNEL_UPDATE`: merge into the cached channel, keeping its messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelUpdate;

impl Handler<Cache, EventPart> for ChannelUpdate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(channel_upsert(event, cache));
    }
}

/// `CHANNEL_DELETE`: drop the channel from its owner.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelDelete;

impl Handler<Cache, EventPart> for ChannelDelete {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(channel_delete(event, cache));
    }
}

/// `CHANNEL_PINS_UPDATE`: record when a channel's pins last changed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelPinsUpdate;

impl Handler<Cache, EventPart> for ChannelPinsUpdate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(channel_pins_update(event, cache));
    }
}

fn channel_upsert(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let payload = guild_context(event, &event.data);
    let channel = match context_id(event, "guild_id") {
        Some(guild_id) => match cache.guild_mut(&guild_id) {
            Some(guild) => upsert(&mut guild.channels, &payload)?,
            None => {
                missing_owner(event, "guild", Some(&guild_id));
                Arc::new(Channel::hydrate(&payload)?)
            }
        },
        None => upsert(&mut cache.private_channels, &payload)?,
    };
    Ok(EventPart::Channel(channel))
}

fn channel_delete(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let id = required_id(event, "id")?;
    let removed = match context_id(event, "guild_id") {
        Some(guild_id) => match cache.guild_mut(&guild_id) {
            Some(guild) => guild.channels.remove(&id),
            None => {
                missing_owner(event, "guild", Some(&guild_id));
                None
            }
        },
        None => cache.private_channels.remove(&id),
    };

    let channel = match removed {
        Some(channel) => channel,
        None => Arc::new(Channel::hydrate(&guild_context(event, &event.data))?),
    };
    Ok(EventPart::Channel(channel))
}

fn channel_pins_update(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let channel_id = required_id(event, "channel_id")?;
    let guild_id = context_id(event, "guild_id");
    // An unpin of the last message sends no timestamp.
    let pins = json!({
        "last_pin_timestamp": event.data.get("last_pin_timestamp").cloned().unwrap_or(Value::Null)
    });

    match cache.channel_mut(guild_id.as_deref(), &channel_id) {
        Some(channel) => channel.fill(&pins)?,
        None => missing_owner(event, "channel", Some(&channel_id)),
    }

    let channel = match cache.channel(guild_id.as_deref(), &channel_id) {
        Some(channel) => Arc::clone(channel),
        None => {
            let mut stub = guild_context(event, &json!({"id": channel_id}));
            if let (Some(stub), Some(pins)) = (stub.as_object_mut(), pins.as_object()) {
                stub.extend(pins.clone());
            }
            Arc::new(Channel::hydrate(&stub)?)
        }
    };
    Ok(EventPart::Channel(channel))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cache_with_guild, settle};
    use serde_json::json;

    #[test]
    fn test_guild_channel_lifecycle() {
        let mut cache = cache_with_guild("5");
        let create = RawEvent::new(
            "CHANNEL_CREATE",
            json!({"id": "60", "type": 0, "guild_id": "5", "name": "general"}),
        );
        settle(&ChannelCreate, &create, &mut cache).unwrap();
        assert!(cache.guild("5").unwrap().channels.contains("60"));

        let update = RawEvent::new(
            "CHANNEL_UPDATE",
            json!({"id": "60", "guild_id": "5", "topic": "chat"}),
        );
        let part = settle(&ChannelUpdate, &update, &mut cache).unwrap();
        let channel = part.as_channel().unwrap();
        assert_eq!(channel.name(), Some("general"));
        assert_eq!(channel.topic(), Some("chat"));

        let delete = RawEvent::new("CHANNEL_DELETE", json!({"id": "60", "guild_id": "5"}));
        let part = settle(&ChannelDelete, &delete, &mut cache).unwrap();
        assert_eq!(part.as_channel().unwrap().topic(), Some("chat"));
        assert!(cache.guild("5").unwrap().channels.is_empty());
    }

    #[test]
    fn test_envelope_guild_id_is_merged() {
        let mut cache = cache_with_guild("5");
        let create = RawEvent::new("CHANNEL_CREATE", json!({"id": "60", "type": 0}))
            .with_metadata("guild_id", "5");

        let part = settle(&ChannelCreate, &create, &mut cache).unwrap();

        assert_eq!(part.as_channel().unwrap().guild_id(), Some("5"));
        let cached = cache.guild("5").unwrap().channels.get_key("60").unwrap();
        assert_eq!(cached.guild_id(), Some("5"));
        assert!(cache.private_channels.is_empty());

        let delete = RawEvent::new("CHANNEL_DELETE", json!({"id": "61"}))
            .with_metadata("guild_id", "404");
        let part = settle(&ChannelDelete, &delete, &mut cache).unwrap();
        assert_eq!(part.as_channel().unwrap().guild_id(), Some("404"));
    }

    #[test]
    fn test_private_channel_goes_to_private_cache() {
        let mut cache = Cache::new();
        let create = RawEvent::new("CHANNEL_CREATE", json!({"id": "70", "type": 1}));

        let part = settle(&ChannelCreate, &create, &mut cache).unwrap();

        assert!(part.as_channel().unwrap().is_private());
        assert!(cache.private_channels.contains("70"));
    }

    #[test]
    fn test_channel_for_unknown_guild_is_not_cached() {
        let mut cache = Cache::new();
        let create = RawEvent::new("CHANNEL_CREATE", json!({"id": "60", "guild_id": "404"}));

        let part = settle(&ChannelCreate, &create, &mut cache).unwrap();

        assert_eq!(part.as_channel().unwrap().guild_id(), Some("404"));
        assert!(cache.private_channels.is_empty());
    }

    #[test]
    fn test_channel_without_id_rejects() {
        let mut cache = Cache::new();
        let create = RawEvent::new("CHANNEL_CREATE", json!({"name": "anon"}));

        assert!(settle(&ChannelCreate, &create, &mut cache).is_err());
        assert!(settle(&ChannelDelete, &create, &mut cache).is_err());
    }

    #[test]
    fn test_pins_update_sets_cached_timestamp() {
        let mut cache = cache_with_guild("5");
        let create = RawEvent::new("CHANNEL_CREATE", json!({"id": "60", "type": 0, "guild_id": "5"}));
        settle(&ChannelCreate, &create, &mut cache).unwrap();

        let pins = RawEvent::new(
            "CHANNEL_PINS_UPDATE",
            json!({"channel_id": "60", "last_pin_timestamp": "2018-01-01T00:00:00+00:00"}),
        );
        let part = settle(&ChannelPinsUpdate, &pins, &mut cache).unwrap();
        assert_eq!(part.as_channel().unwrap().last_pin_timestamp(), Some("2018-01-01T00:00:00+00:00"));

        let cached = cache.guild("5").unwrap().channels.get_key("60").unwrap();
        assert!(Arc::ptr_eq(cached, part.as_channel().unwrap()));

        let unpinned = RawEvent::new("CHANNEL_PINS_UPDATE", json!({"channel_id": "60"}));
        settle(&ChannelPinsUpdate, &unpinned, &mut cache).unwrap();
        let cached = cache.guild("5").unwrap().channels.get_key("60").unwrap();
        assert_eq!(cached.last_pin_timestamp(), None);
    }

    #[test]
    fn test_pins_update_for_unknown_channel() {
        let mut cache = Cache::new();
        let pins = RawEvent::new(
            "CHANNEL_PINS_UPDATE",
            json!({"channel_id": "70", "last_pin_timestamp": "2018-01-01T00:00:00+00:00"}),
        )
        .with_metadata("guild_id", "5");

        let part = settle(&ChannelPinsUpdate, &pins, &mut cache).unwrap();
        let channel = part.as_channel().unwrap();
        assert_eq!(channel.id(), Some("70"));
        assert_eq!(channel.guild_id(), Some("5"));

        let missing = RawEvent::new("CHANNEL_PINS_UPDATE", json!({}));
        assert!(settle(&ChannelPinsUpdate, &missing, &mut cache).is_err());
    }
}

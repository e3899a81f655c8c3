use super::{context_id, guild_context, missing_owner, required_id};
use crate::{cache::Cache, events::EventPart, parts::MessageReaction};
use cordial_core::{Deferred, Handler, Part, PartError, RawEvent};
use std::sync::Arc;

/// `MESSAGE_REACTION_ADD`: count the reaction on the cached message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionAdd;

impl Handler<Cache, EventPart> for ReactionAdd {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(reaction_changed(event, cache, Change::Add));
    }
}

/// `MESSAGE_REACTION_REMOVE`: uncount the reaction on the cached message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionRemove;

impl Handler<Cache, EventPart> for ReactionRemove {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(reaction_changed(event, cache, Change::Remove));
    }
}

/// `MESSAGE_REACTION_REMOVE_ALL`: clear the cached message's reactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactionRemoveAll;

impl Handler<Cache, EventPart> for ReactionRemoveAll {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(reaction_changed(event, cache, Change::Clear));
    }
}

#[derive(Debug, Clone, Copy)]
enum Change {
    Add,
    Remove,
    Clear,
}

fn reaction_changed(event: &RawEvent, cache: &mut Cache, change: Change) -> Result<EventPart, PartError> {
    let reaction = Arc::new(MessageReaction::hydrate(&guild_context(event, &event.data))?);
    let guild_id = context_id(event, "guild_id");
    let channel_id = required_id(event, "channel_id")?;
    let message_id = required_id(event, "message_id")?;

    let cached = cache
        .channel_mut(guild_id.as_deref(), &channel_id)
        .and_then(|channel| channel.messages.get_mut(&message_id));
    match (cached, change, reaction.emoji_value()) {
        (Some(message), Change::Add, Some(emoji)) => message.add_reaction(emoji),
        (Some(message), Change::Remove, Some(emoji)) => message.remove_reaction(emoji),
        (Some(message), Change::Clear, _) => message.clear_reactions(),
        (Some(_), _, None) => {}
        (None, _, _) => missing_owner(event, "message", Some(&message_id)),
    }
    Ok(EventPart::Reaction(reaction))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handlers::MessageCreate,
        testing::{cache_with_channel, message_payload, settle},
    };
    use serde_json::{Value, json};

    fn cache_with_message() -> Cache {
        let mut cache = cache_with_channel("5", "7");
        cache.store_messages = true;
        let create = RawEvent::new("MESSAGE_CREATE", message_payload("100", "7", Some("5")));
        settle(&MessageCreate, &create, &mut cache).unwrap();
        cache
    }

    fn reaction_event(name: &str, user_id: &str, emoji: Value) -> RawEvent {
        RawEvent::new(
            name,
            json!({
                "user_id": user_id,
                "channel_id": "7",
                "message_id": "100",
                "guild_id": "5",
                "emoji": emoji
            }),
        )
    }

    fn cached_counts(cache: &Cache) -> Vec<u64> {
        let channel = cache.guild("5").unwrap().channels.get_key("7").unwrap();
        let message = channel.messages.get_key("100").unwrap();
        message.reactions().iter().map(|reaction| reaction.count()).collect()
    }

    #[test]
    fn test_reactions_counted_on_cached_message() {
        let mut cache = cache_with_message();
        let wave = json!({"id": null, "name": "👋"});

        let part = settle(&ReactionAdd, &reaction_event("MESSAGE_REACTION_ADD", "42", wave.clone()), &mut cache).unwrap();
        settle(&ReactionAdd, &reaction_event("MESSAGE_REACTION_ADD", "43", wave.clone()), &mut cache).unwrap();
        assert_eq!(part.as_reaction().unwrap().user_id(), Some("42"));
        assert_eq!(cached_counts(&cache), vec![2]);

        settle(&ReactionRemove, &reaction_event("MESSAGE_REACTION_REMOVE", "43", wave), &mut cache).unwrap();
        assert_eq!(cached_counts(&cache), vec![1]);

        let clear = RawEvent::new(
            "MESSAGE_REACTION_REMOVE_ALL",
            json!({"channel_id": "7", "message_id": "100", "guild_id": "5"}),
        );
        let part = settle(&ReactionRemoveAll, &clear, &mut cache).unwrap();
        assert_eq!(part.as_reaction().unwrap().user_id(), None);
        assert!(cached_counts(&cache).is_empty());
    }

    #[test]
    fn test_reaction_on_uncached_message_resolves() {
        let mut cache = cache_with_channel("5", "7");
        let event = reaction_event("MESSAGE_REACTION_ADD", "42", json!({"id": "77", "name": "party"}));

        let part = settle(&ReactionAdd, &event, &mut cache).unwrap();

        assert_eq!(part.as_reaction().unwrap().message_id(), Some("100"));
        let channel = cache.guild("5").unwrap().channels.get_key("7").unwrap();
        assert!(channel.messages.is_empty());
    }

    #[test]
    fn test_reaction_without_message_rejects() {
        let mut cache = cache_with_message();
        let event = RawEvent::new("MESSAGE_REACTION_ADD", json!({"channel_id": "7", "user_id": "42"}));

        assert!(settle(&ReactionAdd, &event, &mut cache).is_err());
        assert!(cached_counts(&cache).is_empty());
    }
}

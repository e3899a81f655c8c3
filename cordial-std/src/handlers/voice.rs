use super::{context_id, guild_context, missing_owner};
use crate::{
    cache::Cache,
    events::EventPart,
    parts::{VoiceServer, VoiceState},
};
use cordial_core::{Deferred, Handler, Part, PartError, RawEvent};
use std::sync::Arc;

/// `VOICE_STATE_UPDATE`: track who is connected to the guild's voice
/// channels. A state without a channel means the user left.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoiceStateUpdate;

impl Handler<Cache, EventPart> for VoiceStateUpdate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(voice_state_update(event, cache));
    }
}

/// `VOICE_SERVER_UPDATE`: resolve the guild's voice server. Nothing is
/// cached; the voice connection consumes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct VoiceServerUpdate;

impl Handler<Cache, EventPart> for VoiceServerUpdate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, _cache: &mut Cache) {
        let outcome = VoiceServer::hydrate(&guild_context(event, &event.data))
            .map(|server| EventPart::VoiceServer(Arc::new(server)));
        deferred.settle(outcome);
    }
}

fn voice_state_update(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let state = Arc::new(VoiceState::hydrate(&guild_context(event, &event.data))?);
    let guild_id = context_id(event, "guild_id");

    match guild_id.as_deref().and_then(|id| cache.guild_mut(id)) {
        Some(guild) if state.connected() => {
            guild.voice_states.push(Arc::clone(&state))?;
        }
        Some(guild) => {
            if let Some(user_id) = state.key() {
                guild.voice_states.remove(&user_id);
            }
        }
        None => missing_owner(event, "guild", guild_id.as_deref()),
    }
    Ok(EventPart::VoiceState(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cache_with_guild, settle};
    use serde_json::json;

    fn voice_event(channel_id: Option<&str>) -> RawEvent {
        RawEvent::new(
            "VOICE_STATE_UPDATE",
            json!({
                "guild_id": "5",
                "channel_id": channel_id,
                "user_id": "42",
                "session_id": "s1",
                "self_mute": true
            }),
        )
    }

    #[test]
    fn test_voice_state_join_move_leave() {
        let mut cache = cache_with_guild("5");

        settle(&VoiceStateUpdate, &voice_event(Some("60")), &mut cache).unwrap();
        let part = settle(&VoiceStateUpdate, &voice_event(Some("61")), &mut cache).unwrap();
        assert!(part.as_voice_state().unwrap().muted());

        let states = &cache.guild("5").unwrap().voice_states;
        assert_eq!(states.len(), 1);
        assert_eq!(states.get_key("42").unwrap().channel_id(), Some("61"));

        let part = settle(&VoiceStateUpdate, &voice_event(None), &mut cache).unwrap();
        assert!(!part.as_voice_state().unwrap().connected());
        assert!(cache.guild("5").unwrap().voice_states.is_empty());
    }

    #[test]
    fn test_voice_state_without_user_rejects() {
        let mut cache = cache_with_guild("5");
        let event = RawEvent::new("VOICE_STATE_UPDATE", json!({"guild_id": "5", "channel_id": "60"}));

        assert!(settle(&VoiceStateUpdate, &event, &mut cache).is_err());
        assert!(cache.guild("5").unwrap().voice_states.is_empty());
    }

    #[test]
    fn test_voice_server_update() {
        let mut cache = Cache::new();
        let event = RawEvent::new(
            "VOICE_SERVER_UPDATE",
            json!({"token": "abc", "guild_id": "5", "endpoint": "voice.example:80"}),
        );

        let part = settle(&VoiceServerUpdate, &event, &mut cache).unwrap();
        let server = part.as_voice_server().unwrap();

        assert_eq!(server.endpoint(), Some("voice.example:80"));
        assert_eq!(server.guild_id(), Some("5"));
    }
}

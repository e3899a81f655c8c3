use super::{context_id, keyed_by_user, missing_owner, with_context};
use crate::{
    cache::Cache,
    collection::Collection,
    events::EventPart,
    parts::{Member, Presence, Typing},
};
use cordial_core::{Deferred, Handler, Part, PartError, RawEvent, key_string};
use serde_json::Value;
use std::sync::Arc;

/// `PRESENCE_UPDATE`: record a user's status, activity, roles and nickname on
/// their cached member.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresenceUpdate;

impl Handler<Cache, EventPart> for PresenceUpdate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(presence_update(event, cache));
    }
}

/// `TYPING_START`: resolve a typing notice, attaching the cached member when
/// there is one. Nothing is cached.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypingStart;

impl Handler<Cache, EventPart> for TypingStart {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(typing_start(event, cache));
    }
}

fn presence_update(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let payload = keyed_by_user(&event.data, event.context("guild_id"));
    let presence = Arc::new(Presence::hydrate(&payload)?);
    let guild_id = context_id(event, "guild_id");

    match guild_id.as_deref().and_then(|id| cache.guild_mut(id)) {
        Some(guild) => {
            if !apply_presence(&mut guild.members, &event.data) {
                missing_owner(event, "member", presence.id());
            }
        }
        None => missing_owner(event, "guild", guild_id.as_deref()),
    }
    Ok(EventPart::Presence(presence))
}

/// Copy a presence's status, activity, roles and nickname onto the cached
/// member it names. Returns whether a member was updated.
pub(crate) fn apply_presence(members: &mut Collection<Member>, presence: &Value) -> bool {
    let Some(user_id) = presence
        .get("user")
        .and_then(|user| user.get("id"))
        .and_then(key_string)
    else {
        return false;
    };
    let Some(member) = members.get_mut(&user_id) else {
        return false;
    };

    // The presence's user is usually partial and must not replace the
    // member's.
    let mut update = presence.clone();
    if let Some(update) = update.as_object_mut() {
        for key in ["user", "id", "guild_id"] {
            update.remove(key);
        }
    }
    member.fill(&update).is_ok()
}

fn typing_start(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let guild_id = context_id(event, "guild_id");
    let user_id = context_id(event, "user_id");

    let cached = guild_id
        .as_deref()
        .and_then(|id| cache.guild(id))
        .zip(user_id.as_deref())
        .and_then(|(guild, user_id)| guild.members.get_key(user_id))
        .map(|member| member.attributes().to_json());
    let member = cached.or_else(|| {
        event
            .data
            .get("member")
            .filter(|member| !member.is_null())
            .map(|member| keyed_by_user(member, event.context("guild_id")))
    });

    let payload = with_context(
        &event.data,
        &[
            ("guild_id", event.context("guild_id")),
            ("member", member.as_ref()),
        ],
    );
    Ok(EventPart::Typing(Arc::new(Typing::hydrate(&payload)?)))
}

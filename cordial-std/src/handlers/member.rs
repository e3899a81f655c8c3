use super::{context_id, keyed_by_user, missing_owner, upsert};
use crate::{cache::Cache, events::EventPart, parts::Member};
use cordial_core::{Deferred, Handler, Part, PartError, RawEvent};
use std::sync::Arc;

/// `GUILD_MEMBER_ADD`: cache the member and bump the guild's member count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberAdd;

impl Handler<Cache, EventPart> for MemberAdd {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(member_add(event, cache));
    }
}

/// `GUILD_MEMBER_UPDATE`: merge roles and nickname into the cached member.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberUpdate;

impl Handler<Cache, EventPart> for MemberUpdate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(member_update(event, cache));
    }
}

/// `GUILD_MEMBER_REMOVE`: drop the member and lower the member count.
#[derive(Debug, Clone, Copy, Default)]
pub struct MemberRemove;

impl Handler<Cache, EventPart> for MemberRemove {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(member_remove(event, cache));
    }
}

fn member_add(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let guild_id = context_id(event, "guild_id");
    let member = Arc::new(Member::hydrate(&keyed_by_user(
        &event.data,
        event.context("guild_id"),
    ))?);

    match guild_id.as_deref().and_then(|id| cache.guild_mut(id)) {
        Some(guild) => {
            // Redelivered adds replace the member without counting it twice.
            if guild.members.push(Arc::clone(&member))?.is_none() {
                guild.adjust_member_count(1);
            }
        }
        None => missing_owner(event, "guild", guild_id.as_deref()),
    }
    Ok(EventPart::Member(member))
}

fn member_update(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let guild_id = context_id(event, "guild_id");
    let payload = keyed_by_user(&event.data, event.context("guild_id"));

    let member = match guild_id.as_deref().and_then(|id| cache.guild_mut(id)) {
        Some(guild) => upsert(&mut guild.members, &payload)?,
        None => {
            missing_owner(event, "guild", guild_id.as_deref());
            Arc::new(Member::hydrate(&payload)?)
        }
    };
    Ok(EventPart::Member(member))
}

fn member_remove(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let guild_id = context_id(event, "guild_id");
    let stub = Member::hydrate(&keyed_by_user(&event.data, event.context("guild_id")))?;
    let Some(member_id) = stub.key() else {
        return Ok(EventPart::Member(Arc::new(stub)));
    };

    let removed = match guild_id.as_deref().and_then(|id| cache.guild_mut(id)) {
        Some(guild) => {
            let removed = guild.members.remove(&member_id);
            if removed.is_some() {
                guild.adjust_member_count(-1);
            }
            removed
        }
        None => {
            missing_owner(event, "guild", guild_id.as_deref());
            None
        }
    };
    Ok(EventPart::Member(removed.unwrap_or_else(|| Arc::new(stub))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{cache_with_guild, member_payload as member_fixture, settle};
    use serde_json::json;

    fn add_event(guild_id: &str, user_id: &str) -> RawEvent {
        let mut payload = member_fixture(user_id, "ada");
        payload["guild_id"] = json!(guild_id);
        RawEvent::new("GUILD_MEMBER_ADD", payload)
    }

    #[test]
    fn test_member_add_counts_once() {
        let mut cache = cache_with_guild("5");

        let part = settle(&MemberAdd, &add_event("5", "42"), &mut cache).unwrap();
        settle(&MemberAdd, &add_event("5", "42"), &mut cache).unwrap();

        let member = part.as_member().unwrap();
        assert_eq!(member.id(), Some("42"));
        assert_eq!(member.guild_id(), Some("5"));

        let guild = cache.guild("5").unwrap();
        assert_eq!(guild.members.len(), 1);
        assert_eq!(guild.member_count(), 1);
    }

    #[test]
    fn test_member_update_merges() {
        let mut cache = cache_with_guild("5");
        settle(&MemberAdd, &add_event("5", "42"), &mut cache).unwrap();

        let update = RawEvent::new(
            "GUILD_MEMBER_UPDATE",
            json!({"guild_id": "5", "user": {"id": "42"}, "roles": ["50"], "nick": "countess"}),
        );
        let part = settle(&MemberUpdate, &update, &mut cache).unwrap();
        let member = part.as_member().unwrap();

        assert_eq!(member.nick(), Some("countess"));
        assert_eq!(member.role_ids(), vec!["50"]);
        assert!(member.joined_at().is_some());
    }

    #[test]
    fn test_member_remove_decrements() {
        let mut cache = cache_with_guild("5");
        settle(&MemberAdd, &add_event("5", "42"), &mut cache).unwrap();

        let remove = RawEvent::new(
            "GUILD_MEMBER_REMOVE",
            json!({"guild_id": "5", "user": {"id": "42"}}),
        );
        let part = settle(&MemberRemove, &remove, &mut cache).unwrap();
        settle(&MemberRemove, &remove, &mut cache).unwrap();

        assert_eq!(part.as_member().unwrap().nick(), Some("ada"));
        let guild = cache.guild("5").unwrap();
        assert!(guild.members.is_empty());
        assert_eq!(guild.member_count(), 0);
    }

    #[test]
    fn test_member_without_user_rejects() {
        let mut cache = cache_with_guild("5");
        let event = RawEvent::new("GUILD_MEMBER_ADD", json!({"guild_id": "5", "nick": "ghost"}));

        assert!(settle(&MemberAdd, &event, &mut cache).is_err());
        assert!(cache.guild("5").unwrap().members.is_empty());
    }
}

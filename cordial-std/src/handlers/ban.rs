use super::{context_id, keyed_by_user, missing_owner};
use crate::{cache::Cache, events::EventPart, parts::Ban};
use cordial_core::{Deferred, Handler, Part, PartError, RawEvent};
use std::sync::Arc;

/// `GUILD_BAN_ADD`: record the ban on its guild.
///
/// The member itself is removed by the `GUILD_MEMBER_REMOVE` that follows.
#[derive(Debug, Clone, Copy, Default)]
pub struct BanAdd;

impl Handler<Cache, EventPart> for BanAdd {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(ban_add(event, cache));
    }
}

/// `GUILD_BAN_REMOVE`: drop the ban from its guild.
#[derive(Debug, Clone, Copy, Default)]
pub struct BanRemove;

impl Handler<Cache, EventPart> for BanRemove {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(ban_remove(event, cache));
    }
}

fn ban_add(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let ban = Arc::new(Ban::hydrate(&keyed_by_user(
        &event.data,
        event.context("guild_id"),
    ))?);
    let guild_id = context_id(event, "guild_id");

    match guild_id.as_deref().and_then(|id| cache.guild_mut(id)) {
        Some(guild) => {
            guild.bans.push(Arc::clone(&ban))?;
        }
        None => missing_owner(event, "guild", guild_id.as_deref()),
    }
    Ok(EventPart::Ban(ban))
}

fn ban_remove(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let stub = Ban::hydrate(&keyed_by_user(&event.data, event.context("guild_id")))?;
    let Some(user_id) = stub.key() else {
        return Ok(EventPart::Ban(Arc::new(stub)));
    };
    let guild_id = context_id(event, "guild_id");

    let removed = match guild_id.as_deref().and_then(|id| cache.guild_mut(id)) {
        Some(guild) => guild.bans.remove(&user_id),
        None => {
            missing_owner(event, "guild", guild_id.as_deref());
            None
        }
    };
    Ok(EventPart::Ban(removed.unwrap_or_else(|| Arc::new(stub))))
}

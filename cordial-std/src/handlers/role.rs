use super::{context_id, guild_context, missing_owner, nested, required_id, upsert};
use crate::{cache::Cache, events::EventPart, parts::Role};
use cordial_core::{Deferred, Handler, Part, PartError, RawEvent};
use serde_json::json;
use std::sync::Arc;

/// `GUILD_ROLE_CREATE`: hydrate the role and cache it on its guild.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleCreate;

impl Handler<Cache, EventPart> for RoleCreate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(role_upsert(event, cache));
    }
}

/// `GUILD_ROLE_UPDATE`: replace the cached role.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleUpdate;

impl Handler<Cache, EventPart> for RoleUpdate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(role_upsert(event, cache));
    }
}

/// `GUILD_ROLE_DELETE`: drop the role from its guild.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoleDelete;

impl Handler<Cache, EventPart> for RoleDelete {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(role_delete(event, cache));
    }
}

fn role_upsert(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let guild_id = context_id(event, "guild_id");
    let payload = guild_context(event, nested(event, "role")?);

    let role = match guild_id.as_deref().and_then(|id| cache.guild_mut(id)) {
        Some(guild) => upsert(&mut guild.roles, &payload)?,
        None => {
            let role = Arc::new(Role::hydrate(&payload)?);
            missing_owner(event, "guild", guild_id.as_deref());
            role
        }
    };
    Ok(EventPart::Role(role))
}

fn role_delete(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let guild_id = context_id(event, "guild_id");
    let role_id = required_id(event, "role_id")?;

    let removed = match guild_id.as_deref().and_then(|id| cache.guild_mut(id)) {
        Some(guild) => guild.roles.remove(&role_id),
        None => {
            missing_owner(event, "guild", guild_id.as_deref());
            None
        }
    };

    let role = match removed {
        Some(role) => role,
        None => Arc::new(Role::hydrate(&json!({"id": role_id, "guild_id": guild_id}))?),
    };
    Ok(EventPart::Role(role))
}

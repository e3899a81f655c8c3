use super::{hydrate_each, keyed_by_user, presence::apply_presence, required_id, upsert, with_context};
use crate::{
    cache::Cache,
    events::EventPart,
    parts::{Channel, Guild, GuildField, Member, Role, VoiceState},
};
use cordial_core::{Deferred, Handler, Part, PartError, RawEvent};
use serde_json::{Value, json};
use std::sync::Arc;

/// `GUILD_CREATE`: hydrate a guild together with its roles, channels,
/// members and voice states, apply its presences, and cache it.
///
/// A guild that was already cached (for example one coming back from an
/// outage) is replaced wholesale.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuildCreate;

impl Handler<Cache, EventPart> for GuildCreate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(guild_create(event, cache));
    }
}

/// `GUILD_UPDATE`: merge the payload into the cached guild, keeping its
/// collections.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuildUpdate;

impl Handler<Cache, EventPart> for GuildUpdate {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        let outcome = upsert(&mut cache.guilds, &event.data).map(EventPart::Guild);
        deferred.settle(outcome);
    }
}

/// `GUILD_DELETE`: drop the guild, or mark it unavailable during an outage.
#[derive(Debug, Clone, Copy, Default)]
pub struct GuildDelete;

impl Handler<Cache, EventPart> for GuildDelete {
    fn handle(&self, deferred: Deferred<EventPart>, event: &RawEvent, cache: &mut Cache) {
        deferred.settle(guild_delete(event, cache));
    }
}

fn guild_create(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let mut guild = Guild::hydrate(&event.data)?;
    let guild_id = event.data.get("id");
    let owned = |item: &Value| with_context(item, &[("guild_id", guild_id)]);

    guild
        .roles
        .extend(hydrate_each::<Role>(&event.data, "roles", owned))?;
    guild
        .channels
        .extend(hydrate_each::<Channel>(&event.data, "channels", owned))?;
    guild.members.extend(hydrate_each::<Member>(&event.data, "members", |item| {
        keyed_by_user(item, guild_id)
    }))?;
    guild
        .voice_states
        .extend(hydrate_each::<VoiceState>(&event.data, "voice_states", owned))?;

    let presences = event.data.get("presences").and_then(Value::as_array);
    for presence in presences.into_iter().flatten() {
        apply_presence(&mut guild.members, presence);
    }

    let guild = Arc::new(guild);
    cache.guilds.push(Arc::clone(&guild))?;
    Ok(EventPart::Guild(guild))
}

fn guild_delete(event: &RawEvent, cache: &mut Cache) -> Result<EventPart, PartError> {
    let id = required_id(event, "id")?;
    let outage = event
        .data
        .get("unavailable")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if outage {
        if let Some(guild) = cache.guild_mut(&id) {
            guild.attributes_mut().set(GuildField::Unavailable, true);
        }
        if let Some(guild) = cache.guilds.get_key(&id) {
            return Ok(EventPart::Guild(Arc::clone(guild)));
        }
    } else if let Some(guild) = cache.guilds.remove(&id) {
        return Ok(EventPart::Guild(guild));
    }

    let stub = Guild::hydrate(&json!({"id": id, "unavailable": outage}))?;
    Ok(EventPart::Guild(Arc::new(stub)))
}

#![allow(dead_code)]

use cordial::{Cache, DispatchOptions, GatewayDispatcher, RawEvent, testing};
use serde_json::{Value, json};

// ============================================================================
// Frames
// ============================================================================

/// Encode a dispatch frame the way the gateway sends it.
pub fn frame(sequence: u64, name: &str, data: Value) -> String {
    json!({"op": 0, "s": sequence, "t": name, "d": data}).to_string()
}

/// A heartbeat acknowledgement, which is not a dispatch.
pub fn heartbeat_ack() -> String {
    json!({"op": 11}).to_string()
}

pub fn role_create(guild_id: &str, role_id: &str, name: &str) -> RawEvent {
    RawEvent::new(
        "GUILD_ROLE_CREATE",
        json!({"guild_id": guild_id, "role": testing::role_payload(role_id, name)}),
    )
}

// ============================================================================
// Dispatchers
// ============================================================================

/// The default dispatcher with guild `guild_id` already cached.
pub fn dispatcher_with_guild(guild_id: &str, options: DispatchOptions) -> GatewayDispatcher {
    let mut dispatcher = cordial::dispatcher(options);
    let event = RawEvent::new("GUILD_CREATE", testing::guild_payload(guild_id));
    let mut promise = dispatcher.dispatch(&event).unwrap();
    promise.try_take().unwrap().unwrap();
    dispatcher
}

pub fn guild_role_names(cache: &Cache, guild_id: &str) -> Vec<String> {
    cache
        .guild(guild_id)
        .map(|guild| {
            guild
                .roles
                .iter()
                .filter_map(|role| role.name().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

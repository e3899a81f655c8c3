//! The standard handler set, wired up.

use cordial_std::{
    Cache, DispatchOptions, GatewayDispatcher, GatewayRegistry, RegistryBuilder,
    events::{
        CHANNEL_CREATE, CHANNEL_DELETE, CHANNEL_PINS_UPDATE, CHANNEL_UPDATE, GUILD_BAN_ADD,
        GUILD_BAN_REMOVE, GUILD_CREATE, GUILD_DELETE, GUILD_MEMBER_ADD, GUILD_MEMBER_REMOVE,
        GUILD_MEMBER_UPDATE, GUILD_ROLE_CREATE, GUILD_ROLE_DELETE, GUILD_ROLE_UPDATE,
        GUILD_UPDATE, MESSAGE_CREATE, MESSAGE_DELETE, MESSAGE_DELETE_BULK, MESSAGE_REACTION_ADD,
        MESSAGE_REACTION_REMOVE, MESSAGE_REACTION_REMOVE_ALL, MESSAGE_UPDATE, PRESENCE_UPDATE,
        TYPING_START, VOICE_SERVER_UPDATE, VOICE_STATE_UPDATE,
    },
    handlers::{
        BanAdd, BanRemove, ChannelCreate, ChannelDelete, ChannelPinsUpdate, ChannelUpdate,
        GuildCreate, GuildDelete, GuildUpdate, MemberAdd, MemberRemove, MemberUpdate,
        MessageCreate, MessageDelete, MessageDeleteBulk, MessageUpdate, PresenceUpdate,
        ReactionAdd, ReactionRemove, ReactionRemoveAll, RoleCreate, RoleDelete, RoleUpdate,
        TypingStart, VoiceServerUpdate, VoiceStateUpdate,
    },
};

/// Alternate identifier `MESSAGE_CREATE` is also reachable under.
pub const MESSAGE_ALTERNATE: &str = "message";

/// A registry with a handler for every standard wire event.
pub fn default_registry() -> GatewayRegistry {
    RegistryBuilder::new()
        // General
        .register(PRESENCE_UPDATE, PresenceUpdate)
        .register(TYPING_START, TypingStart)
        .register(VOICE_STATE_UPDATE, VoiceStateUpdate)
        .register(VOICE_SERVER_UPDATE, VoiceServerUpdate)
        // Guild
        .register(GUILD_CREATE, GuildCreate)
        .register(GUILD_DELETE, GuildDelete)
        .register(GUILD_UPDATE, GuildUpdate)
        // Channel
        .register(CHANNEL_CREATE, ChannelCreate)
        .register(CHANNEL_UPDATE, ChannelUpdate)
        .register(CHANNEL_DELETE, ChannelDelete)
        .register(CHANNEL_PINS_UPDATE, ChannelPinsUpdate)
        // Ban
        .register(GUILD_BAN_ADD, BanAdd)
        .register(GUILD_BAN_REMOVE, BanRemove)
        // Message
        .register_with_alternates(MESSAGE_CREATE, MessageCreate, [MESSAGE_ALTERNATE])
        .register(MESSAGE_DELETE, MessageDelete)
        .register(MESSAGE_DELETE_BULK, MessageDeleteBulk)
        .register(MESSAGE_UPDATE, MessageUpdate)
        .register(MESSAGE_REACTION_ADD, ReactionAdd)
        .register(MESSAGE_REACTION_REMOVE, ReactionRemove)
        .register(MESSAGE_REACTION_REMOVE_ALL, ReactionRemoveAll)
        // Member
        .register(GUILD_MEMBER_ADD, MemberAdd)
        .register(GUILD_MEMBER_REMOVE, MemberRemove)
        .register(GUILD_MEMBER_UPDATE, MemberUpdate)
        // Role
        .register(GUILD_ROLE_CREATE, RoleCreate)
        .register(GUILD_ROLE_DELETE, RoleDelete)
        .register(GUILD_ROLE_UPDATE, RoleUpdate)
        .build()
}

/// A dispatcher over the default registry and an empty cache.
pub fn dispatcher(options: DispatchOptions) -> GatewayDispatcher {
    let registry = default_registry();
    let cache = Cache::with_options(&options);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        handlers = registry.len(),
        disabled = options.disabled_events.len(),
        store_messages = options.store_messages,
        "built default dispatcher"
    );

    GatewayDispatcher::with_options(registry, cache, options)
}

//! Wire event identifiers and dispatch outcomes.
//!
//! Identifiers match the gateway's event names byte for byte.

use crate::parts::{
    Ban, Channel, Guild, Member, Message, MessageReaction, Presence, Role, Typing, VoiceServer,
    VoiceState,
};
use std::sync::Arc;

/// A user's status or activity changed.
pub const PRESENCE_UPDATE: &str = "PRESENCE_UPDATE";
/// A user started typing.
pub const TYPING_START: &str = "TYPING_START";
/// A user joined, left or changed state in a voice channel.
pub const VOICE_STATE_UPDATE: &str = "VOICE_STATE_UPDATE";
/// A guild's voice server was assigned or moved.
pub const VOICE_SERVER_UPDATE: &str = "VOICE_SERVER_UPDATE";

/// A guild became available, or the client joined one.
pub const GUILD_CREATE: &str = "GUILD_CREATE";
/// A guild's settings changed.
pub const GUILD_UPDATE: &str = "GUILD_UPDATE";
/// A guild became unavailable, or the client left it.
pub const GUILD_DELETE: &str = "GUILD_DELETE";

/// A role was created.
pub const GUILD_ROLE_CREATE: &str = "GUILD_ROLE_CREATE";
/// A role changed.
pub const GUILD_ROLE_UPDATE: &str = "GUILD_ROLE_UPDATE";
/// A role was deleted.
pub const GUILD_ROLE_DELETE: &str = "GUILD_ROLE_DELETE";

/// A channel was created.
pub const CHANNEL_CREATE: &str = "CHANNEL_CREATE";
/// A channel changed.
pub const CHANNEL_UPDATE: &str = "CHANNEL_UPDATE";
/// A channel was deleted.
pub const CHANNEL_DELETE: &str = "CHANNEL_DELETE";
/// A message was pinned or unpinned.
pub const CHANNEL_PINS_UPDATE: &str = "CHANNEL_PINS_UPDATE";

/// A user was banned.
pub const GUILD_BAN_ADD: &str = "GUILD_BAN_ADD";
/// A user was unbanned.
pub const GUILD_BAN_REMOVE: &str = "GUILD_BAN_REMOVE";

/// A user joined a guild.
pub const GUILD_MEMBER_ADD: &str = "GUILD_MEMBER_ADD";
/// A member's roles or nickname changed.
pub const GUILD_MEMBER_UPDATE: &str = "GUILD_MEMBER_UPDATE";
/// A user left or was removed from a guild.
pub const GUILD_MEMBER_REMOVE: &str = "GUILD_MEMBER_REMOVE";

/// A message was sent.
pub const MESSAGE_CREATE: &str = "MESSAGE_CREATE";
/// A message was edited.
pub const MESSAGE_UPDATE: &str = "MESSAGE_UPDATE";
/// A message was deleted.
pub const MESSAGE_DELETE: &str = "MESSAGE_DELETE";
/// Several messages were deleted at once.
pub const MESSAGE_DELETE_BULK: &str = "MESSAGE_DELETE_BULK";
/// A user reacted to a message.
pub const MESSAGE_REACTION_ADD: &str = "MESSAGE_REACTION_ADD";
/// A user removed a reaction.
pub const MESSAGE_REACTION_REMOVE: &str = "MESSAGE_REACTION_REMOVE";
/// Every reaction was removed from a message.
pub const MESSAGE_REACTION_REMOVE_ALL: &str = "MESSAGE_REACTION_REMOVE_ALL";

/// What a standard handler resolves its completion with.
///
/// Parts are shared with the cache; a later update replaces the cached `Arc`
/// instead of mutating the one handed out here.
#[derive(Debug, Clone)]
pub enum EventPart {
    /// Guild events.
    Guild(Arc<Guild>),
    /// Role events.
    Role(Arc<Role>),
    /// Channel events, including pin updates.
    Channel(Arc<Channel>),
    /// Member events.
    Member(Arc<Member>),
    /// Single-message events.
    Message(Arc<Message>),
    /// Bulk message deletes.
    Messages(Vec<Arc<Message>>),
    /// Presence updates.
    Presence(Arc<Presence>),
    /// Typing notices.
    Typing(Arc<Typing>),
    /// Voice state updates.
    VoiceState(Arc<VoiceState>),
    /// Voice server updates.
    VoiceServer(Arc<VoiceServer>),
    /// Ban events.
    Ban(Arc<Ban>),
    /// Reaction events.
    Reaction(Arc<MessageReaction>),
}

impl EventPart {
    /// The guild, if this outcome carries one.
    pub fn as_guild(&self) -> Option<&Arc<Guild>> {
        match self {
            EventPart::Guild(guild) => Some(guild),
            _ => None,
        }
    }

    /// The role, if this outcome carries one.
    pub fn as_role(&self) -> Option<&Arc<Role>> {
        match self {
            EventPart::Role(role) => Some(role),
            _ => None,
        }
    }

    /// The channel, if this outcome carries one.
    pub fn as_channel(&self) -> Option<&Arc<Channel>> {
        match self {
            EventPart::Channel(channel) => Some(channel),
            _ => None,
        }
    }

    /// The member, if this outcome carries one.
    pub fn as_member(&self) -> Option<&Arc<Member>> {
        match self {
            EventPart::Member(member) => Some(member),
            _ => None,
        }
    }

    /// The message, if this outcome carries one.
    pub fn as_message(&self) -> Option<&Arc<Message>> {
        match self {
            EventPart::Message(message) => Some(message),
            _ => None,
        }
    }

    /// The messages of a bulk delete.
    pub fn as_messages(&self) -> Option<&[Arc<Message>]> {
        match self {
            EventPart::Messages(messages) => Some(messages),
            _ => None,
        }
    }

    /// The presence, if this outcome carries one.
    pub fn as_presence(&self) -> Option<&Arc<Presence>> {
        match self {
            EventPart::Presence(presence) => Some(presence),
            _ => None,
        }
    }

    /// The typing notice, if this outcome carries one.
    pub fn as_typing(&self) -> Option<&Arc<Typing>> {
        match self {
            EventPart::Typing(typing) => Some(typing),
            _ => None,
        }
    }

    /// The voice state, if this outcome carries one.
    pub fn as_voice_state(&self) -> Option<&Arc<VoiceState>> {
        match self {
            EventPart::VoiceState(state) => Some(state),
            _ => None,
        }
    }

    /// The voice server, if this outcome carries one.
    pub fn as_voice_server(&self) -> Option<&Arc<VoiceServer>> {
        match self {
            EventPart::VoiceServer(server) => Some(server),
            _ => None,
        }
    }

    /// The ban, if this outcome carries one.
    pub fn as_ban(&self) -> Option<&Arc<Ban>> {
        match self {
            EventPart::Ban(ban) => Some(ban),
            _ => None,
        }
    }

    /// The reaction, if this outcome carries one.
    pub fn as_reaction(&self) -> Option<&Arc<MessageReaction>> {
        match self {
            EventPart::Reaction(reaction) => Some(reaction),
            _ => None,
        }
    }
}

use super::attribute_access;
use cordial_core::{Accessor, Attributes, Part, flag, key_string};
use cordial_macros::Field;
use serde_json::Value;

/// Fillable fields of a [`VoiceState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum VoiceStateField {
    /// The guild the connection belongs to.
    GuildId,
    /// The connected voice channel; `null` after leaving.
    ChannelId,
    /// The connected user.
    UserId,
    /// The voice session.
    SessionId,
    /// Whether the guild deafened the user.
    Deaf,
    /// Whether the guild muted the user.
    Mute,
    /// Whether the user deafened themselves.
    SelfDeaf,
    /// Whether the user muted themselves.
    SelfMute,
    /// Whether the user is suppressed.
    Suppress,
}

/// A user's voice connection in a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceState {
    attributes: Attributes<VoiceStateField>,
}

impl Part for VoiceState {
    type Field = VoiceStateField;
    const KIND: &'static str = "voice state";
    const KEY: VoiceStateField = VoiceStateField::UserId;

    fn from_attributes(attributes: Attributes<VoiceStateField>) -> Self {
        Self { attributes }
    }

    attribute_access!(VoiceStateField);

    fn accessor(field: VoiceStateField) -> Option<Accessor<VoiceStateField>> {
        match field {
            VoiceStateField::Deaf => Some(deaf),
            VoiceStateField::Mute => Some(mute),
            VoiceStateField::SelfDeaf => Some(self_deaf),
            VoiceStateField::SelfMute => Some(self_mute),
            VoiceStateField::Suppress => Some(suppress),
            _ => None,
        }
    }

    fn required() -> &'static [VoiceStateField] {
        &[VoiceStateField::UserId]
    }
}

fn deaf(attributes: &Attributes<VoiceStateField>) -> Value {
    flag(attributes, VoiceStateField::Deaf)
}

fn mute(attributes: &Attributes<VoiceStateField>) -> Value {
    flag(attributes, VoiceStateField::Mute)
}

fn self_deaf(attributes: &Attributes<VoiceStateField>) -> Value {
    flag(attributes, VoiceStateField::SelfDeaf)
}

fn self_mute(attributes: &Attributes<VoiceStateField>) -> Value {
    flag(attributes, VoiceStateField::SelfMute)
}

fn suppress(attributes: &Attributes<VoiceStateField>) -> Value {
    flag(attributes, VoiceStateField::Suppress)
}

impl VoiceState {
    /// The connected user's id.
    pub fn user_id(&self) -> Option<&str> {
        self.attributes.get_str(VoiceStateField::UserId)
    }

    /// The guild's id.
    pub fn guild_id(&self) -> Option<&str> {
        self.attributes.get_str(VoiceStateField::GuildId)
    }

    /// The connected channel's id; `None` once the user left.
    pub fn channel_id(&self) -> Option<&str> {
        self.attributes.get_str(VoiceStateField::ChannelId)
    }

    /// Whether the user is in a voice channel.
    pub fn connected(&self) -> bool {
        self.attributes
            .get(VoiceStateField::ChannelId)
            .and_then(key_string)
            .is_some()
    }

    /// The voice session id.
    pub fn session_id(&self) -> Option<&str> {
        self.attributes.get_str(VoiceStateField::SessionId)
    }

    /// Whether the user is deafened, by the guild or themselves.
    pub fn deafened(&self) -> bool {
        [VoiceStateField::Deaf, VoiceStateField::SelfDeaf]
            .into_iter()
            .any(|field| self.get_attribute(field) == Value::Bool(true))
    }

    /// Whether the user is muted, by the guild or themselves.
    pub fn muted(&self) -> bool {
        [VoiceStateField::Mute, VoiceStateField::SelfMute]
            .into_iter()
            .any(|field| self.get_attribute(field) == Value::Bool(true))
    }

    /// Whether the user is suppressed.
    pub fn suppress(&self) -> bool {
        self.get_attribute(VoiceStateField::Suppress) == Value::Bool(true)
    }
}

/// Fillable fields of a [`VoiceServer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum VoiceServerField {
    /// Connection token.
    Token,
    /// The guild the server serves.
    GuildId,
    /// Host of the voice server.
    Endpoint,
}

/// The voice server assigned to a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceServer {
    attributes: Attributes<VoiceServerField>,
}

impl Part for VoiceServer {
    type Field = VoiceServerField;
    const KIND: &'static str = "voice server";
    const KEY: VoiceServerField = VoiceServerField::GuildId;

    fn from_attributes(attributes: Attributes<VoiceServerField>) -> Self {
        Self { attributes }
    }

    attribute_access!(VoiceServerField);

    fn required() -> &'static [VoiceServerField] {
        &[VoiceServerField::GuildId]
    }
}

impl VoiceServer {
    /// The guild's id.
    pub fn guild_id(&self) -> Option<&str> {
        self.attributes.get_str(VoiceServerField::GuildId)
    }

    /// The connection token.
    pub fn token(&self) -> Option<&str> {
        self.attributes.get_str(VoiceServerField::Token)
    }

    /// Host of the voice server; `None` while the server is reallocated.
    pub fn endpoint(&self) -> Option<&str> {
        self.attributes.get_str(VoiceServerField::Endpoint)
    }
}

use super::{Member, User, attribute_access};
use cordial_core::{Attributes, HydrateError, Part};
use cordial_macros::Field;
use serde_json::Value;

/// Fillable fields of a [`Presence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum PresenceField {
    /// The user's id, copied in from `user.id`.
    Id,
    /// The nested (often partial) user object.
    User,
    /// Guild the presence was observed in.
    GuildId,
    /// `online`, `idle`, `dnd` or `offline`.
    Status,
    /// Current activity.
    Game,
    /// Ids of the member's roles.
    Roles,
    /// The member's nickname.
    Nick,
}

/// A user's status in a guild.
///
/// Keyed by user id like [`Member`]; handlers copy `user.id` into `id` before
/// hydrating.
#[derive(Debug, Clone, PartialEq)]
pub struct Presence {
    attributes: Attributes<PresenceField>,
}

impl Part for Presence {
    type Field = PresenceField;
    const KIND: &'static str = "presence";
    const KEY: PresenceField = PresenceField::Id;

    fn from_attributes(attributes: Attributes<PresenceField>) -> Self {
        Self { attributes }
    }

    attribute_access!(PresenceField);

    fn required() -> &'static [PresenceField] {
        &[PresenceField::Id]
    }
}

impl Presence {
    /// The user's id.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get_str(PresenceField::Id)
    }

    /// The guild's id.
    pub fn guild_id(&self) -> Option<&str> {
        self.attributes.get_str(PresenceField::GuildId)
    }

    /// The status string.
    pub fn status(&self) -> Option<&str> {
        self.attributes.get_str(PresenceField::Status)
    }

    /// Name of the current activity.
    pub fn game_name(&self) -> Option<&str> {
        self.attributes
            .get(PresenceField::Game)
            .and_then(|game| game.get("name"))
            .and_then(Value::as_str)
    }

    /// The nested user, if present.
    pub fn user(&self) -> Option<Result<User, HydrateError>> {
        self.attributes
            .get(PresenceField::User)
            .filter(|user| !user.is_null())
            .map(User::hydrate)
    }
}

/// Fillable fields of a [`Typing`] notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum TypingField {
    /// The typing user.
    UserId,
    /// The channel being typed in.
    ChannelId,
    /// The channel's guild, for guild channels.
    GuildId,
    /// Unix time in seconds when typing started.
    Timestamp,
    /// The typing member, for guild channels.
    Member,
}

/// A user started typing in a channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Typing {
    attributes: Attributes<TypingField>,
}

impl Part for Typing {
    type Field = TypingField;
    const KIND: &'static str = "typing";
    const KEY: TypingField = TypingField::UserId;

    fn from_attributes(attributes: Attributes<TypingField>) -> Self {
        Self { attributes }
    }

    attribute_access!(TypingField);

    fn required() -> &'static [TypingField] {
        &[TypingField::UserId, TypingField::ChannelId]
    }
}

impl Typing {
    /// The typing user's id.
    pub fn user_id(&self) -> Option<&str> {
        self.attributes.get_str(TypingField::UserId)
    }

    /// The channel's id.
    pub fn channel_id(&self) -> Option<&str> {
        self.attributes.get_str(TypingField::ChannelId)
    }

    /// The guild's id, for guild channels.
    pub fn guild_id(&self) -> Option<&str> {
        self.attributes.get_str(TypingField::GuildId)
    }

    /// Unix time in seconds when typing started.
    pub fn timestamp(&self) -> Option<u64> {
        self.attributes.get_u64(TypingField::Timestamp)
    }

    /// The typing member as cached, if the handler found one.
    pub fn member(&self) -> Option<Result<Member, HydrateError>> {
        self.attributes
            .get(TypingField::Member)
            .filter(|member| !member.is_null())
            .map(Member::hydrate)
    }
}

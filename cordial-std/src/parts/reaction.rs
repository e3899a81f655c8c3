use super::{Member, attribute_access};
use cordial_core::{Accessor, Attributes, HydrateError, Part, flag, key_string};
use cordial_macros::Field;
use serde_json::Value;

/// Fillable fields of an [`Emoji`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum EmojiField {
    /// Snowflake id; `null` for unicode emoji.
    Id,
    /// Name, or the unicode character itself.
    Name,
    /// Whether a custom emoji is animated.
    Animated,
}

/// An emoji as referenced by reactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Emoji {
    attributes: Attributes<EmojiField>,
}

impl Part for Emoji {
    type Field = EmojiField;
    const KIND: &'static str = "emoji";
    const KEY: EmojiField = EmojiField::Id;

    fn from_attributes(attributes: Attributes<EmojiField>) -> Self {
        Self { attributes }
    }

    attribute_access!(EmojiField);

    fn accessor(field: EmojiField) -> Option<Accessor<EmojiField>> {
        match field {
            EmojiField::Animated => Some(animated),
            _ => None,
        }
    }
}

fn animated(attributes: &Attributes<EmojiField>) -> Value {
    flag(attributes, EmojiField::Animated)
}

impl Emoji {
    /// The emoji name, or the unicode character itself.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get_str(EmojiField::Name)
    }

    /// Whether a custom emoji is animated.
    pub fn animated(&self) -> bool {
        self.get_attribute(EmojiField::Animated) == Value::Bool(true)
    }

    /// The id of a custom emoji, else its name.
    pub fn identifier(&self) -> Option<String> {
        self.key().or_else(|| self.name().map(str::to_string))
    }
}

/// The identifier reactions are matched by: the id of a custom emoji, else
/// its name.
pub(crate) fn emoji_identifier(emoji: &Value) -> Option<String> {
    emoji
        .get("id")
        .and_then(key_string)
        .or_else(|| emoji.get("name").and_then(Value::as_str).map(str::to_string))
}

/// Fillable fields of a [`Reaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum ReactionField {
    /// How many users reacted.
    Count,
    /// Whether the current user reacted.
    Me,
    /// The nested emoji object.
    Emoji,
}

/// One emoji's reaction count on a message.
#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    attributes: Attributes<ReactionField>,
}

impl Part for Reaction {
    type Field = ReactionField;
    const KIND: &'static str = "reaction";
    const KEY: ReactionField = ReactionField::Emoji;

    fn from_attributes(attributes: Attributes<ReactionField>) -> Self {
        Self { attributes }
    }

    attribute_access!(ReactionField);

    fn accessor(field: ReactionField) -> Option<Accessor<ReactionField>> {
        match field {
            ReactionField::Me => Some(me),
            _ => None,
        }
    }
}

fn me(attributes: &Attributes<ReactionField>) -> Value {
    flag(attributes, ReactionField::Me)
}

impl Reaction {
    /// How many users reacted.
    pub fn count(&self) -> u64 {
        self.attributes.get_u64(ReactionField::Count).unwrap_or(0)
    }

    /// Whether the current user reacted.
    pub fn me(&self) -> bool {
        self.get_attribute(ReactionField::Me) == Value::Bool(true)
    }

    /// The emoji reacted with.
    pub fn emoji(&self) -> Option<Result<Emoji, HydrateError>> {
        self.attributes
            .get(ReactionField::Emoji)
            .filter(|emoji| !emoji.is_null())
            .map(Emoji::hydrate)
    }
}

/// Fillable fields of a [`MessageReaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum MessageReactionField {
    /// The reacted-to message.
    MessageId,
    /// The message's channel.
    ChannelId,
    /// The channel's guild, for guild channels.
    GuildId,
    /// The reacting user; absent when all reactions are removed.
    UserId,
    /// The emoji; absent when all reactions are removed.
    Emoji,
    /// The reacting member, for guild channels.
    Member,
}

/// A reaction being added to or removed from a message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageReaction {
    attributes: Attributes<MessageReactionField>,
}

impl Part for MessageReaction {
    type Field = MessageReactionField;
    const KIND: &'static str = "message reaction";
    const KEY: MessageReactionField = MessageReactionField::MessageId;

    fn from_attributes(attributes: Attributes<MessageReactionField>) -> Self {
        Self { attributes }
    }

    attribute_access!(MessageReactionField);

    fn required() -> &'static [MessageReactionField] {
        &[MessageReactionField::MessageId, MessageReactionField::ChannelId]
    }
}

impl MessageReaction {
    /// The reacted-to message's id.
    pub fn message_id(&self) -> Option<&str> {
        self.attributes.get_str(MessageReactionField::MessageId)
    }

    /// The channel's id.
    pub fn channel_id(&self) -> Option<&str> {
        self.attributes.get_str(MessageReactionField::ChannelId)
    }

    /// The guild's id, for guild channels.
    pub fn guild_id(&self) -> Option<&str> {
        self.attributes.get_str(MessageReactionField::GuildId)
    }

    /// The reacting user's id.
    pub fn user_id(&self) -> Option<&str> {
        self.attributes.get_str(MessageReactionField::UserId)
    }

    /// The emoji object as sent.
    pub fn emoji_value(&self) -> Option<&Value> {
        self.attributes
            .get(MessageReactionField::Emoji)
            .filter(|emoji| !emoji.is_null())
    }

    /// The emoji reacted with.
    pub fn emoji(&self) -> Option<Result<Emoji, HydrateError>> {
        self.emoji_value().map(Emoji::hydrate)
    }

    /// The reacting member, for guild channels.
    pub fn member(&self) -> Option<Result<Member, HydrateError>> {
        let member = self
            .attributes
            .get(MessageReactionField::Member)
            .filter(|member| !member.is_null())?;
        let user_id = member.get("user").and_then(|user| user.get("id")).cloned();
        let mut member = member.clone();
        if let (Some(object), Some(user_id)) = (member.as_object_mut(), user_id) {
            object.insert("id".to_string(), user_id);
        }
        Some(Member::hydrate(&member))
    }
}

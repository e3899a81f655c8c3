use super::{Message, attribute_access};
use crate::collection::Collection;
use cordial_core::{Accessor, Attributes, Part, flag};
use cordial_macros::Field;
use serde_json::Value;

/// Fillable fields of a [`Channel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum ChannelField {
    /// Snowflake id.
    Id,
    /// Numeric channel kind, see [`ChannelType`].
    #[field(rename = "type")]
    Kind,
    /// Owning guild; absent for private channels.
    GuildId,
    /// Display name.
    Name,
    /// Channel topic.
    Topic,
    /// Sort position.
    Position,
    /// Whether the channel is age-restricted.
    Nsfw,
    /// Id of the newest message.
    LastMessageId,
    /// When a message was last pinned or unpinned.
    LastPinTimestamp,
}

/// Channel kinds as numbered on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelType {
    /// `0`, a guild text channel.
    Text,
    /// `1`, a direct message.
    Dm,
    /// `2`, a guild voice channel.
    Voice,
    /// `3`, a group direct message.
    GroupDm,
    /// `4`, a channel category.
    Category,
    /// `5`, an announcement channel.
    News,
    /// Any kind this crate does not know.
    Unknown(u64),
}

impl From<u64> for ChannelType {
    fn from(kind: u64) -> Self {
        match kind {
            0 => ChannelType::Text,
            1 => ChannelType::Dm,
            2 => ChannelType::Voice,
            3 => ChannelType::GroupDm,
            4 => ChannelType::Category,
            5 => ChannelType::News,
            other => ChannelType::Unknown(other),
        }
    }
}

/// A guild or private channel, owning its cached messages.
#[derive(Debug, Clone)]
pub struct Channel {
    attributes: Attributes<ChannelField>,
    /// Cached messages, keyed by id. Only filled when messages are stored.
    pub messages: Collection<Message>,
}

impl Part for Channel {
    type Field = ChannelField;
    const KIND: &'static str = "channel";
    const KEY: ChannelField = ChannelField::Id;

    fn from_attributes(attributes: Attributes<ChannelField>) -> Self {
        Self {
            attributes,
            messages: Collection::new(),
        }
    }

    attribute_access!(ChannelField);

    fn accessor(field: ChannelField) -> Option<Accessor<ChannelField>> {
        match field {
            ChannelField::Nsfw => Some(nsfw),
            _ => None,
        }
    }

    fn required() -> &'static [ChannelField] {
        &[ChannelField::Id]
    }
}

fn nsfw(attributes: &Attributes<ChannelField>) -> Value {
    flag(attributes, ChannelField::Nsfw)
}

impl Channel {
    /// The channel id.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get_str(ChannelField::Id)
    }

    /// The owning guild's id.
    pub fn guild_id(&self) -> Option<&str> {
        self.attributes.get_str(ChannelField::GuildId)
    }

    /// The channel name.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get_str(ChannelField::Name)
    }

    /// The channel topic.
    pub fn topic(&self) -> Option<&str> {
        self.attributes.get_str(ChannelField::Topic)
    }

    /// The channel kind; a missing `type` reads as a text channel.
    pub fn kind(&self) -> ChannelType {
        ChannelType::from(self.attributes.get_u64(ChannelField::Kind).unwrap_or(0))
    }

    /// Whether the channel is age-restricted.
    pub fn nsfw(&self) -> bool {
        self.get_attribute(ChannelField::Nsfw) == Value::Bool(true)
    }

    /// Id of the newest message.
    pub fn last_message_id(&self) -> Option<&str> {
        self.attributes.get_str(ChannelField::LastMessageId)
    }

    /// When a message was last pinned or unpinned.
    pub fn last_pin_timestamp(&self) -> Option<&str> {
        self.attributes.get_str(ChannelField::LastPinTimestamp)
    }

    /// Whether this is a direct or group message channel.
    pub fn is_private(&self) -> bool {
        matches!(self.kind(), ChannelType::Dm | ChannelType::GroupDm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_channel_kind() {
        let text = Channel::hydrate(&json!({"id": "1", "type": 0, "guild_id": "9"})).unwrap();
        let dm = Channel::hydrate(&json!({"id": "2", "type": 1})).unwrap();
        let odd = Channel::hydrate(&json!({"id": "3", "type": 42})).unwrap();

        assert_eq!(text.kind(), ChannelType::Text);
        assert!(!text.is_private());
        assert!(dm.is_private());
        assert_eq!(odd.kind(), ChannelType::Unknown(42));
        assert!(!text.nsfw());
    }
}

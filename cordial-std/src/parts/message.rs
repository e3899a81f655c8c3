use super::{Embed, Reaction, User, attribute_access, emoji_identifier};
use cordial_core::{Accessor, Attributes, HydrateError, Part, flag};
use cordial_macros::Field;
use serde_json::{Value, json};

/// Fillable fields of a [`Message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum MessageField {
    /// Snowflake id.
    Id,
    /// Channel the message was sent in.
    ChannelId,
    /// Guild of the channel; absent for private channels.
    GuildId,
    /// The nested author user.
    Author,
    /// Text content.
    Content,
    /// When the message was sent.
    Timestamp,
    /// When the message was last edited.
    EditedTimestamp,
    /// Whether the message was sent as text-to-speech.
    Tts,
    /// Whether the message mentions everyone.
    MentionEveryone,
    /// Whether the message is pinned.
    Pinned,
    /// Embed objects.
    Embeds,
    /// Reaction counts, one entry per emoji.
    Reactions,
}

/// A channel message.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    attributes: Attributes<MessageField>,
}

impl Part for Message {
    type Field = MessageField;
    const KIND: &'static str = "message";
    const KEY: MessageField = MessageField::Id;

    fn from_attributes(attributes: Attributes<MessageField>) -> Self {
        Self { attributes }
    }

    attribute_access!(MessageField);

    fn accessor(field: MessageField) -> Option<Accessor<MessageField>> {
        match field {
            MessageField::Tts => Some(tts),
            MessageField::MentionEveryone => Some(mention_everyone),
            MessageField::Pinned => Some(pinned),
            _ => None,
        }
    }

    fn required() -> &'static [MessageField] {
        &[MessageField::Id, MessageField::ChannelId]
    }
}

fn tts(attributes: &Attributes<MessageField>) -> Value {
    flag(attributes, MessageField::Tts)
}

fn mention_everyone(attributes: &Attributes<MessageField>) -> Value {
    flag(attributes, MessageField::MentionEveryone)
}

fn pinned(attributes: &Attributes<MessageField>) -> Value {
    flag(attributes, MessageField::Pinned)
}

impl Message {
    /// The message id.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get_str(MessageField::Id)
    }

    /// The channel's id.
    pub fn channel_id(&self) -> Option<&str> {
        self.attributes.get_str(MessageField::ChannelId)
    }

    /// The guild's id, for guild channels.
    pub fn guild_id(&self) -> Option<&str> {
        self.attributes.get_str(MessageField::GuildId)
    }

    /// The text content.
    pub fn content(&self) -> Option<&str> {
        self.attributes.get_str(MessageField::Content)
    }

    /// When the message was sent.
    pub fn timestamp(&self) -> Option<&str> {
        self.attributes.get_str(MessageField::Timestamp)
    }

    /// When the message was last edited.
    pub fn edited_timestamp(&self) -> Option<&str> {
        self.attributes.get_str(MessageField::EditedTimestamp)
    }

    /// Whether the message was sent as text-to-speech.
    pub fn tts(&self) -> bool {
        self.get_attribute(MessageField::Tts) == Value::Bool(true)
    }

    /// Whether the message is pinned.
    pub fn pinned(&self) -> bool {
        self.get_attribute(MessageField::Pinned) == Value::Bool(true)
    }

    /// Whether the message mentions everyone.
    pub fn mention_everyone(&self) -> bool {
        self.get_attribute(MessageField::MentionEveryone) == Value::Bool(true)
    }

    /// The author, if the payload carried one.
    pub fn author(&self) -> Option<Result<User, HydrateError>> {
        self.attributes
            .get(MessageField::Author)
            .filter(|author| !author.is_null())
            .map(User::hydrate)
    }

    /// The message's embeds, skipping entries that are not objects.
    pub fn embeds(&self) -> Vec<Embed> {
        self.attributes
            .get(MessageField::Embeds)
            .and_then(Value::as_array)
            .map(|embeds| {
                embeds
                    .iter()
                    .filter_map(|embed| Embed::hydrate(embed).ok())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// The message's reaction counts, skipping entries that are not objects.
    pub fn reactions(&self) -> Vec<Reaction> {
        self.reaction_entries()
            .iter()
            .filter_map(|reaction| Reaction::hydrate(reaction).ok())
            .collect()
    }

    /// Count one more reaction with `emoji`.
    ///
    /// An emoji with neither id nor name cannot be matched and is ignored.
    pub fn add_reaction(&mut self, emoji: &Value) {
        let Some(target) = emoji_identifier(emoji) else {
            return;
        };
        let mut reactions = self.reaction_entries();
        match reactions.iter_mut().find(|reaction| reacts_with(reaction, &target)) {
            Some(reaction) => {
                let count = reaction_count(reaction);
                if let Some(reaction) = reaction.as_object_mut() {
                    reaction.insert("count".to_string(), json!(count + 1));
                }
            }
            None => reactions.push(json!({"count": 1, "me": false, "emoji": emoji})),
        }
        self.attributes.set(MessageField::Reactions, reactions);
    }

    /// Count one reaction with `emoji` less, dropping the entry at zero.
    pub fn remove_reaction(&mut self, emoji: &Value) {
        let Some(target) = emoji_identifier(emoji) else {
            return;
        };
        let mut reactions = self.reaction_entries();
        let Some(index) = reactions.iter().position(|reaction| reacts_with(reaction, &target)) else {
            return;
        };
        let count = reaction_count(&reactions[index]);
        if count <= 1 {
            reactions.remove(index);
        } else if let Some(reaction) = reactions[index].as_object_mut() {
            reaction.insert("count".to_string(), json!(count - 1));
        }
        self.attributes.set(MessageField::Reactions, reactions);
    }

    /// Drop every reaction.
    pub fn clear_reactions(&mut self) {
        self.attributes.set(MessageField::Reactions, Vec::<Value>::new());
    }

    fn reaction_entries(&self) -> Vec<Value> {
        self.attributes
            .get(MessageField::Reactions)
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default()
    }
}

fn reacts_with(reaction: &Value, target: &str) -> bool {
    reaction
        .get("emoji")
        .and_then(emoji_identifier)
        .is_some_and(|identifier| identifier == target)
}

fn reaction_count(reaction: &Value) -> u64 {
    reaction.get("count").and_then(Value::as_u64).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_nested_parts() {
        let message = Message::hydrate(&json!({
            "id": "100",
            "channel_id": "7",
            "content": "hello",
            "author": {"id": "3", "username": "ana", "discriminator": "0001"},
            "embeds": [{"title": "t", "fields": [{"name": "n", "value": "v"}]}],
            "nonce": "ignored"
        }))
        .unwrap();

        let author = message.author().unwrap().unwrap();
        assert_eq!(author.tag(), Some("ana#0001".to_string()));
        assert!(!author.bot());
        assert_eq!(message.embeds()[0].fields()[0].value(), Some("v"));
        assert!(!message.pinned());
        assert!(!message.tts());
    }

    #[test]
    fn test_reaction_counts() {
        let mut message = Message::hydrate(&json!({"id": "1", "channel_id": "2"})).unwrap();
        let wave = json!({"id": null, "name": "👋"});
        let custom = json!({"id": "77", "name": "party"});

        message.add_reaction(&wave);
        message.add_reaction(&wave);
        message.add_reaction(&custom);
        message.add_reaction(&json!({}));

        let reactions = message.reactions();
        assert_eq!(reactions.len(), 2);
        assert_eq!(reactions[0].count(), 2);
        assert_eq!(reactions[1].emoji().unwrap().unwrap().identifier(), Some("77".to_string()));

        message.remove_reaction(&wave);
        message.remove_reaction(&custom);
        let reactions = message.reactions();
        assert_eq!(reactions.len(), 1);
        assert_eq!(reactions[0].count(), 1);

        message.clear_reactions();
        assert!(message.reactions().is_empty());
    }

    #[test]
    fn test_message_requires_channel() {
        let err = Message::hydrate(&json!({"id": "100"})).unwrap_err();
        assert_eq!(
            err,
            HydrateError::MissingField {
                kind: "message",
                field: "channel_id"
            }
        );
    }
}

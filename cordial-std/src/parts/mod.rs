//! Discord parts.
//!
//! Each part pairs a `#[derive(Field)]` enumeration (its fillable set) with a
//! struct holding the attributes, plus typed getters over them.

mod ban;
mod channel;
mod embed;
mod guild;
mod member;
mod message;
mod permissions;
mod presence;
mod reaction;
mod role;
mod user;
mod voice;

pub use ban::{Ban, BanField};
pub use channel::{Channel, ChannelField, ChannelType};
pub use embed::{Embed, EmbedEntry, EmbedEntryField, EmbedField};
pub use guild::{Guild, GuildField};
pub use member::{Member, MemberField};
pub use message::{Message, MessageField};
pub use permissions::Permissions;
pub use presence::{Presence, PresenceField, Typing, TypingField};
pub use reaction::{Emoji, EmojiField, MessageReaction, MessageReactionField, Reaction, ReactionField};
pub use role::{Role, RoleField};
pub use user::{User, UserField};
pub use voice::{VoiceServer, VoiceServerField, VoiceState, VoiceStateField};

pub(crate) use reaction::emoji_identifier;

/// Implements `Part::attributes` and `Part::attributes_mut` for a struct with
/// an `attributes` field.
macro_rules! attribute_access {
    ($field:ty) => {
        fn attributes(&self) -> &cordial_core::Attributes<$field> {
            &self.attributes
        }

        fn attributes_mut(&mut self) -> &mut cordial_core::Attributes<$field> {
            &mut self.attributes
        }
    };
}

pub(crate) use attribute_access;

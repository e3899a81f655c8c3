use super::{Ban, Channel, Member, Role, VoiceState, attribute_access};
use crate::collection::Collection;
use cordial_core::{Accessor, Attributes, Part, flag};
use cordial_macros::Field;
use serde_json::Value;

/// Fillable fields of a [`Guild`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum GuildField {
    /// Snowflake id.
    Id,
    /// Display name.
    Name,
    /// Icon hash.
    Icon,
    /// Id of the owning user.
    OwnerId,
    /// Voice region.
    Region,
    /// Number of members, kept current by member events.
    MemberCount,
    /// Whether the guild is over the large threshold.
    Large,
    /// Whether the guild is in an outage.
    Unavailable,
}

/// A guild, the aggregate that owns roles, channels and members.
///
/// The related collections are not attributes: `GUILD_CREATE` fills them from
/// the payload's arrays, and later events push into them directly.
#[derive(Debug, Clone)]
pub struct Guild {
    attributes: Attributes<GuildField>,
    /// Roles, keyed by id.
    pub roles: Collection<Role>,
    /// Guild channels, keyed by id.
    pub channels: Collection<Channel>,
    /// Members, keyed by user id.
    pub members: Collection<Member>,
    /// Bans seen since the guild was cached, keyed by user id.
    pub bans: Collection<Ban>,
    /// Voice connections, keyed by user id.
    pub voice_states: Collection<VoiceState>,
}

impl Part for Guild {
    type Field = GuildField;
    const KIND: &'static str = "guild";
    const KEY: GuildField = GuildField::Id;

    fn from_attributes(attributes: Attributes<GuildField>) -> Self {
        Self {
            attributes,
            roles: Collection::new(),
            channels: Collection::new(),
            members: Collection::new(),
            bans: Collection::new(),
            voice_states: Collection::new(),
        }
    }

    attribute_access!(GuildField);

    fn accessor(field: GuildField) -> Option<Accessor<GuildField>> {
        match field {
            GuildField::Unavailable => Some(unavailable),
            GuildField::Large => Some(large),
            _ => None,
        }
    }

    fn required() -> &'static [GuildField] {
        &[GuildField::Id]
    }
}

fn unavailable(attributes: &Attributes<GuildField>) -> Value {
    flag(attributes, GuildField::Unavailable)
}

fn large(attributes: &Attributes<GuildField>) -> Value {
    flag(attributes, GuildField::Large)
}

impl Guild {
    /// The guild id.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get_str(GuildField::Id)
    }

    /// The guild name.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get_str(GuildField::Name)
    }

    /// Id of the owning user.
    pub fn owner_id(&self) -> Option<&str> {
        self.attributes.get_str(GuildField::OwnerId)
    }

    /// The voice region.
    pub fn region(&self) -> Option<&str> {
        self.attributes.get_str(GuildField::Region)
    }

    /// The member count, `0` when never sent.
    pub fn member_count(&self) -> u64 {
        self.attributes.get_u64(GuildField::MemberCount).unwrap_or(0)
    }

    /// Whether the guild is in an outage.
    pub fn unavailable(&self) -> bool {
        self.get_attribute(GuildField::Unavailable) == Value::Bool(true)
    }

    /// Whether the guild is over the large threshold.
    pub fn large(&self) -> bool {
        self.get_attribute(GuildField::Large) == Value::Bool(true)
    }

    /// Adjust `member_count` by `delta`, saturating at zero.
    pub fn adjust_member_count(&mut self, delta: i64) {
        let count = self.member_count().saturating_add_signed(delta);
        self.attributes.set(GuildField::MemberCount, count);
    }
}

use super::{User, attribute_access};
use cordial_core::{Accessor, Attributes, HydrateError, Part, flag};
use cordial_macros::Field;
use serde_json::Value;

/// Fillable fields of a [`Member`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum MemberField {
    /// The member's user id.
    Id,
    /// The nested user object.
    User,
    /// Guild nickname.
    Nick,
    /// Ids of held roles.
    Roles,
    /// When the user joined the guild.
    JoinedAt,
    /// Whether the member is server-deafened.
    Deaf,
    /// Whether the member is server-muted.
    Mute,
    /// Owning guild.
    GuildId,
    /// Last known presence status (`online`, `idle`, ...).
    Status,
    /// Last known activity object.
    Game,
}

/// A guild member.
///
/// The wire object keys members by their nested `user.id`; handlers copy it
/// into `id` (and the owning `guild_id`) before hydrating.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    attributes: Attributes<MemberField>,
}

impl Part for Member {
    type Field = MemberField;
    const KIND: &'static str = "member";
    const KEY: MemberField = MemberField::Id;

    fn from_attributes(attributes: Attributes<MemberField>) -> Self {
        Self { attributes }
    }

    attribute_access!(MemberField);

    fn accessor(field: MemberField) -> Option<Accessor<MemberField>> {
        match field {
            MemberField::Deaf => Some(deaf),
            MemberField::Mute => Some(mute),
            _ => None,
        }
    }

    fn required() -> &'static [MemberField] {
        &[MemberField::Id]
    }
}

fn deaf(attributes: &Attributes<MemberField>) -> Value {
    flag(attributes, MemberField::Deaf)
}

fn mute(attributes: &Attributes<MemberField>) -> Value {
    flag(attributes, MemberField::Mute)
}

impl Member {
    /// The member's user id.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get_str(MemberField::Id)
    }

    /// The owning guild's id.
    pub fn guild_id(&self) -> Option<&str> {
        self.attributes.get_str(MemberField::GuildId)
    }

    /// The guild nickname.
    pub fn nick(&self) -> Option<&str> {
        self.attributes.get_str(MemberField::Nick)
    }

    /// When the user joined the guild.
    pub fn joined_at(&self) -> Option<&str> {
        self.attributes.get_str(MemberField::JoinedAt)
    }

    /// Last known presence status; `None` until a presence arrives.
    pub fn status(&self) -> Option<&str> {
        self.attributes.get_str(MemberField::Status)
    }

    /// Name of the last known activity.
    pub fn game_name(&self) -> Option<&str> {
        self.attributes
            .get(MemberField::Game)
            .and_then(|game| game.get("name"))
            .and_then(Value::as_str)
    }

    /// The nested user, if present.
    pub fn user(&self) -> Option<Result<User, HydrateError>> {
        self.attributes
            .get(MemberField::User)
            .filter(|user| !user.is_null())
            .map(User::hydrate)
    }

    /// Ids of the roles the member holds.
    pub fn role_ids(&self) -> Vec<&str> {
        self.attributes
            .get(MemberField::Roles)
            .and_then(Value::as_array)
            .map(|roles| roles.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Whether the member is server-deafened.
    pub fn deaf(&self) -> bool {
        self.get_attribute(MemberField::Deaf) == Value::Bool(true)
    }

    /// Whether the member is server-muted.
    pub fn mute(&self) -> bool {
        self.get_attribute(MemberField::Mute) == Value::Bool(true)
    }
}

use super::{Permissions, attribute_access};
use cordial_core::{Accessor, Attributes, Part, flag};
use cordial_macros::Field;
use serde_json::Value;

/// Fillable fields of a [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum RoleField {
    /// Snowflake id.
    Id,
    /// Display name.
    Name,
    /// RGB colour as an integer.
    Color,
    /// Whether members are listed separately.
    Hoist,
    /// Sort position.
    Position,
    /// Permission bit set.
    Permissions,
    /// Whether an integration manages the role.
    Managed,
    /// Whether the role can be mentioned.
    Mentionable,
    /// Owning guild, copied in from the event.
    GuildId,
}

/// A guild role.
///
/// `guild_id` is not part of the wire role object; handlers copy it in from
/// the surrounding event before hydrating.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    attributes: Attributes<RoleField>,
}

impl Part for Role {
    type Field = RoleField;
    const KIND: &'static str = "role";
    const KEY: RoleField = RoleField::Id;

    fn from_attributes(attributes: Attributes<RoleField>) -> Self {
        Self { attributes }
    }

    attribute_access!(RoleField);

    fn accessor(field: RoleField) -> Option<Accessor<RoleField>> {
        match field {
            RoleField::Hoist => Some(hoist),
            RoleField::Managed => Some(managed),
            RoleField::Mentionable => Some(mentionable),
            _ => None,
        }
    }

    fn required() -> &'static [RoleField] {
        &[RoleField::Id]
    }
}

fn hoist(attributes: &Attributes<RoleField>) -> Value {
    flag(attributes, RoleField::Hoist)
}

fn managed(attributes: &Attributes<RoleField>) -> Value {
    flag(attributes, RoleField::Managed)
}

fn mentionable(attributes: &Attributes<RoleField>) -> Value {
    flag(attributes, RoleField::Mentionable)
}

impl Role {
    /// The role id.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get_str(RoleField::Id)
    }

    /// The role name.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get_str(RoleField::Name)
    }

    /// The owning guild's id.
    pub fn guild_id(&self) -> Option<&str> {
        self.attributes.get_str(RoleField::GuildId)
    }

    /// The colour, `0` when unset or out of range.
    pub fn color(&self) -> u32 {
        self.attributes
            .get_u64(RoleField::Color)
            .and_then(|color| u32::try_from(color).ok())
            .unwrap_or(0)
    }

    /// The sort position.
    pub fn position(&self) -> Option<u64> {
        self.attributes.get_u64(RoleField::Position)
    }

    /// Whether members with this role are listed separately.
    pub fn hoist(&self) -> bool {
        self.get_attribute(RoleField::Hoist) == Value::Bool(true)
    }

    /// Whether an integration manages this role.
    pub fn managed(&self) -> bool {
        self.get_attribute(RoleField::Managed) == Value::Bool(true)
    }

    /// Whether the role can be mentioned.
    pub fn mentionable(&self) -> bool {
        self.get_attribute(RoleField::Mentionable) == Value::Bool(true)
    }

    /// The permission set; unknown bits are kept.
    pub fn permissions(&self) -> Permissions {
        Permissions::from_bits_retain(self.attributes.get_u64(RoleField::Permissions).unwrap_or(0))
    }
}

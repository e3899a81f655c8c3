use super::{User, attribute_access};
use cordial_core::{Attributes, HydrateError, Part};
use cordial_macros::Field;

/// Fillable fields of a [`Ban`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum BanField {
    /// The banned user's id, copied in from `user.id`.
    Id,
    /// Guild the ban applies to.
    GuildId,
    /// The nested banned user.
    User,
    /// Why the user was banned, when known.
    Reason,
}

/// A user banned from a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct Ban {
    attributes: Attributes<BanField>,
}

impl Part for Ban {
    type Field = BanField;
    const KIND: &'static str = "ban";
    const KEY: BanField = BanField::Id;

    fn from_attributes(attributes: Attributes<BanField>) -> Self {
        Self { attributes }
    }

    attribute_access!(BanField);

    fn required() -> &'static [BanField] {
        &[BanField::Id]
    }
}

impl Ban {
    /// The banned user's id.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get_str(BanField::Id)
    }

    /// The guild's id.
    pub fn guild_id(&self) -> Option<&str> {
        self.attributes.get_str(BanField::GuildId)
    }

    /// The ban reason.
    pub fn reason(&self) -> Option<&str> {
        self.attributes.get_str(BanField::Reason)
    }

    /// The banned user.
    pub fn user(&self) -> Option<Result<User, HydrateError>> {
        self.attributes
            .get(BanField::User)
            .filter(|user| !user.is_null())
            .map(User::hydrate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ban_requires_user_id() {
        let ban = Ban::hydrate(&json!({"id": "42", "user": {"id": "42", "username": "ada"}, "reason": null}))
            .unwrap();
        assert_eq!(ban.reason(), None);
        assert_eq!(ban.user().unwrap().unwrap().username(), Some("ada"));

        assert!(Ban::hydrate(&json!({"user": {"id": "42"}})).is_err());
    }
}

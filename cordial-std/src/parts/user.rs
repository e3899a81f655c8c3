use super::attribute_access;
use cordial_core::{Accessor, Attributes, Part, flag};
use cordial_macros::Field;
use serde_json::Value;

/// Fillable fields of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum UserField {
    /// Snowflake id.
    Id,
    /// Account name.
    Username,
    /// Four-digit tag.
    Discriminator,
    /// Avatar hash.
    Avatar,
    /// Whether the account is a bot.
    Bot,
}

/// A Discord user, as nested in members and message authors.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    attributes: Attributes<UserField>,
}

impl Part for User {
    type Field = UserField;
    const KIND: &'static str = "user";
    const KEY: UserField = UserField::Id;

    fn from_attributes(attributes: Attributes<UserField>) -> Self {
        Self { attributes }
    }

    attribute_access!(UserField);

    fn accessor(field: UserField) -> Option<Accessor<UserField>> {
        match field {
            UserField::Bot => Some(bot),
            _ => None,
        }
    }

    fn required() -> &'static [UserField] {
        &[UserField::Id]
    }
}

fn bot(attributes: &Attributes<UserField>) -> Value {
    flag(attributes, UserField::Bot)
}

impl User {
    /// The user id.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get_str(UserField::Id)
    }

    /// The account name.
    pub fn username(&self) -> Option<&str> {
        self.attributes.get_str(UserField::Username)
    }

    /// The four-digit tag.
    pub fn discriminator(&self) -> Option<&str> {
        self.attributes.get_str(UserField::Discriminator)
    }

    /// The avatar hash.
    pub fn avatar(&self) -> Option<&str> {
        self.attributes.get_str(UserField::Avatar)
    }

    /// Whether the account is a bot.
    pub fn bot(&self) -> bool {
        self.get_attribute(UserField::Bot) == Value::Bool(true)
    }

    /// `username#discriminator`, or the bare username when no discriminator
    /// is known.
    pub fn tag(&self) -> Option<String> {
        let username = self.username()?;
        Some(match self.discriminator() {
            Some(discriminator) => format!("{}#{}", username, discriminator),
            None => username.to_string(),
        })
    }
}

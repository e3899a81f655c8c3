use super::attribute_access;
use cordial_core::{Accessor, Attributes, Part, flag};
use cordial_macros::Field;
use serde_json::Value;

/// Fillable fields of an [`Embed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum EmbedField {
    /// Title line.
    Title,
    /// Embed kind (`rich`, `image`, ...).
    #[field(rename = "type")]
    Kind,
    /// Body text.
    Description,
    /// Link on the title.
    Url,
    /// Footer timestamp.
    Timestamp,
    /// Sidebar colour.
    Color,
    /// Name/value entries.
    Fields,
}

/// A message embed.
///
/// Embeds have no identifier of their own; collections of embeds key them by
/// title.
#[derive(Debug, Clone, PartialEq)]
pub struct Embed {
    attributes: Attributes<EmbedField>,
}

impl Part for Embed {
    type Field = EmbedField;
    const KIND: &'static str = "embed";
    const KEY: EmbedField = EmbedField::Title;

    fn from_attributes(attributes: Attributes<EmbedField>) -> Self {
        Self { attributes }
    }

    attribute_access!(EmbedField);
}

impl Embed {
    /// The title line.
    pub fn title(&self) -> Option<&str> {
        self.attributes.get_str(EmbedField::Title)
    }

    /// The body text.
    pub fn description(&self) -> Option<&str> {
        self.attributes.get_str(EmbedField::Description)
    }

    /// The link on the title.
    pub fn url(&self) -> Option<&str> {
        self.attributes.get_str(EmbedField::Url)
    }

    /// The embed's fields, skipping entries that are not objects.
    pub fn fields(&self) -> Vec<EmbedEntry> {
        self.attributes
            .get(EmbedField::Fields)
            .and_then(Value::as_array)
            .map(|fields| {
                fields
                    .iter()
                    .filter_map(|field| EmbedEntry::hydrate(field).ok())
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Fillable fields of an [`EmbedEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
#[field(crate = "cordial_core")]
pub enum EmbedEntryField {
    /// Entry heading.
    Name,
    /// Entry text.
    Value,
    /// Whether the entry sits beside its neighbours.
    Inline,
}

/// A field of an embed object.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedEntry {
    attributes: Attributes<EmbedEntryField>,
}

impl Part for EmbedEntry {
    type Field = EmbedEntryField;
    const KIND: &'static str = "embed field";
    const KEY: EmbedEntryField = EmbedEntryField::Name;

    fn from_attributes(attributes: Attributes<EmbedEntryField>) -> Self {
        Self { attributes }
    }

    attribute_access!(EmbedEntryField);

    fn accessor(field: EmbedEntryField) -> Option<Accessor<EmbedEntryField>> {
        match field {
            EmbedEntryField::Inline => Some(inline),
            _ => None,
        }
    }
}

fn inline(attributes: &Attributes<EmbedEntryField>) -> Value {
    flag(attributes, EmbedEntryField::Inline)
}

impl EmbedEntry {
    /// The entry heading.
    pub fn name(&self) -> Option<&str> {
        self.attributes.get_str(EmbedEntryField::Name)
    }

    /// The entry text.
    pub fn value(&self) -> Option<&str> {
        self.attributes.get_str(EmbedEntryField::Value)
    }

    /// Whether the field should be displayed in-line.
    pub fn inline(&self) -> bool {
        self.get_attribute(EmbedEntryField::Inline) == Value::Bool(true)
    }
}

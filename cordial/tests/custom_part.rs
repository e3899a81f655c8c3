//! Defining a part outside the standard set.

use cordial::{
    Accessor, Attributes, Collection, Deferred, Field, Part, RawEvent, RegistryBuilder, flag,
};
use serde_json::{Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
enum EmojiField {
    Id,
    Name,
    Animated,
    #[field(rename = "require_colons")]
    Colons,
}

#[derive(Debug, Clone)]
struct Emoji {
    attributes: Attributes<EmojiField>,
}

impl Part for Emoji {
    type Field = EmojiField;
    const KIND: &'static str = "emoji";
    const KEY: EmojiField = EmojiField::Id;

    fn from_attributes(attributes: Attributes<EmojiField>) -> Self {
        Self { attributes }
    }

    fn attributes(&self) -> &Attributes<EmojiField> {
        &self.attributes
    }

    fn attributes_mut(&mut self) -> &mut Attributes<EmojiField> {
        &mut self.attributes
    }

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

#[test]
fn test_derived_field_names() {
    assert_eq!(EmojiField::Colons.name(), "require_colons");
    assert_eq!(EmojiField::from_name("animated"), Some(EmojiField::Animated));
    assert_eq!(EmojiField::from_name("Animated"), None);
    assert_eq!(EmojiField::ALL.len(), 4);
}

#[test]
fn test_custom_part_with_custom_state() {
    let registry = RegistryBuilder::new()
        .register(
            "GUILD_EMOJIS_UPDATE",
            |deferred: Deferred<usize>, event: &RawEvent, emojis: &mut Collection<Emoji>| {
                let list = event.data.get("emojis").and_then(Value::as_array);
                for emoji in list.into_iter().flatten() {
                    if let Ok(emoji) = Emoji::hydrate(emoji) {
                        let _ = emojis.push(emoji);
                    }
                }
                deferred.resolve(emojis.len());
            },
        )
        .build();
    let mut dispatcher = cordial::Dispatcher::new(registry, Collection::<Emoji>::new());

    let event = RawEvent::new(
        "GUILD_EMOJIS_UPDATE",
        json!({"emojis": [
            {"id": "1", "name": "wave", "require_colons": true},
            {"id": "2", "name": "party", "animated": true, "url": "dropped"},
            {"name": "keyless"}
        ]}),
    );
    let count = dispatcher.dispatch(&event).unwrap().try_take().unwrap().unwrap();

    assert_eq!(count, 2);
    let wave = dispatcher.state().get_key("1").unwrap();
    assert_eq!(wave.get_attribute(EmojiField::Animated), Value::Bool(false));
    assert_eq!(wave.get_attribute_by_name("require_colons"), Value::Bool(true));
    let party = dispatcher.state().get(EmojiField::Name, "party").unwrap();
    assert_eq!(party.get_attribute(EmojiField::Animated), Value::Bool(true));
    assert_eq!(party.get_attribute_by_name("url"), Value::Null);
}

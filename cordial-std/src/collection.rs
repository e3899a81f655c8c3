//! Keyed, insertion-ordered part caches.

use cordial_core::{Field, HydrateError, Part, key_string};
use indexmap::IndexMap;
use std::sync::Arc;

/// An ordered cache of parts, keyed by one of their attributes.
///
/// Parts are stored behind `Arc` so the same instance can be handed to a
/// completion while it stays cached. [`Collection::get_mut`] copies on write,
/// which means a part that was already handed out never changes under its
/// holder.
#[derive(Clone)]
pub struct Collection<P: Part> {
    key: P::Field,
    items: IndexMap<String, Arc<P>>,
}

impl<P: Part> Collection<P> {
    /// Create an empty collection keyed by `P::KEY`.
    pub fn new() -> Self {
        Self::keyed_by(P::KEY)
    }

    /// Create an empty collection keyed by another field.
    pub fn keyed_by(key: P::Field) -> Self {
        Self {
            key,
            items: IndexMap::new(),
        }
    }

    /// The field parts are keyed by.
    pub fn key_field(&self) -> P::Field {
        self.key
    }

    /// Return the first part whose `field` equals `value`.
    ///
    /// Lookups on the key field are direct; any other field is scanned in
    /// insertion order.
    pub fn get(&self, field: P::Field, value: &str) -> Option<&Arc<P>> {
        if field == self.key {
            return self.items.get(value);
        }
        self.items.values().find(|part| {
            part.attributes()
                .get(field)
                .and_then(key_string)
                .is_some_and(|candidate| candidate == value)
        })
    }

    /// Return the part stored under `key`.
    pub fn get_key(&self, key: &str) -> Option<&Arc<P>> {
        self.items.get(key)
    }

    /// Mutable access to the part stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut P> {
        self.items.get_mut(key).map(Arc::make_mut)
    }

    /// Insert a part, replacing any part with the same key in place.
    ///
    /// Returns the replaced part.
    pub fn push(&mut self, part: impl Into<Arc<P>>) -> Result<Option<Arc<P>>, HydrateError> {
        let part = part.into();
        let key = self.key_of(&part)?;
        Ok(self.items.insert(key, part))
    }

    /// Push every part, stopping at the first one without a key.
    pub fn extend<I>(&mut self, parts: I) -> Result<(), HydrateError>
    where
        I: IntoIterator,
        I::Item: Into<Arc<P>>,
    {
        for part in parts {
            self.push(part)?;
        }
        Ok(())
    }

    /// Remove the part stored under `key`, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<Arc<P>> {
        self.items.shift_remove(key)
    }

    /// Whether a part is stored under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Iterate over the parts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<P>> {
        self.items.values()
    }

    /// Iterate mutably over the parts in insertion order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut P> {
        self.items.values_mut().map(Arc::make_mut)
    }

    /// Iterate over the keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// Number of cached parts.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every cached part.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn key_of(&self, part: &P) -> Result<String, HydrateError> {
        part.attributes()
            .get(self.key)
            .and_then(key_string)
            .ok_or(HydrateError::MissingField {
                kind: P::KIND,
                field: self.key.name(),
            })
    }
}

impl<P: Part> Default for Collection<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Part + std::fmt::Debug> std::fmt::Debug for Collection<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map().entries(self.items.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::{Role, RoleField};
    use serde_json::json;

    fn role(id: &str, name: &str) -> Role {
        Role::hydrate(&json!({"id": id, "name": name})).unwrap()
    }

    #[test]
    fn test_push_then_get() {
        let mut roles = Collection::<Role>::new();
        roles.push(role("10", "mod")).unwrap();

        let found = roles.get(RoleField::Id, "10").unwrap();
        assert_eq!(found.name(), Some("mod"));
        assert!(roles.get(RoleField::Id, "11").is_none());
    }

    #[test]
    fn test_push_replaces_in_place() {
        let mut roles = Collection::<Role>::new();
        roles.push(role("1", "a")).unwrap();
        roles.push(role("2", "b")).unwrap();
        roles.push(role("3", "c")).unwrap();

        let replaced = roles.push(role("2", "B")).unwrap();

        assert_eq!(replaced.unwrap().name(), Some("b"));
        assert_eq!(roles.len(), 3);
        assert_eq!(roles.keys().collect::<Vec<_>>(), vec!["1", "2", "3"]);
        assert_eq!(roles.get_key("2").unwrap().name(), Some("B"));
    }

    #[test]
    fn test_get_by_other_field_returns_first_match() {
        let mut roles = Collection::<Role>::new();
        roles.push(role("1", "dup")).unwrap();
        roles.push(role("2", "dup")).unwrap();

        let found = roles.get(RoleField::Name, "dup").unwrap();
        assert_eq!(found.id(), Some("1"));
    }

    #[test]
    fn test_numeric_keys_compare_as_strings() {
        let mut roles = Collection::<Role>::new();
        roles
            .push(Role::hydrate(&json!({"id": 10, "position": 3})).unwrap())
            .unwrap();

        assert!(roles.contains("10"));
        assert!(roles.get(RoleField::Position, "3").is_some());
    }

    #[test]
    fn test_push_without_key_fails() {
        let mut roles = Collection::<Role>::new();
        let keyless = Role::from_attributes(Default::default());

        let err = roles.push(keyless).unwrap_err();
        assert_eq!(
            err,
            HydrateError::MissingField {
                kind: "role",
                field: "id"
            }
        );
        assert!(roles.is_empty());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut roles = Collection::<Role>::new();
        roles
            .extend([role("1", "a"), role("2", "b"), role("3", "c")])
            .unwrap();

        let removed = roles.remove("2").unwrap();
        assert_eq!(removed.name(), Some("b"));
        assert_eq!(roles.keys().collect::<Vec<_>>(), vec!["1", "3"]);
        assert!(roles.remove("2").is_none());
    }

    #[test]
    fn test_get_mut_copies_shared_parts() {
        let mut roles = Collection::<Role>::new();
        roles.push(role("1", "before")).unwrap();
        let snapshot = roles.get_key("1").cloned().unwrap();

        roles
            .get_mut("1")
            .unwrap()
            .attributes_mut()
            .set(RoleField::Name, "after");

        assert_eq!(snapshot.name(), Some("before"));
        assert_eq!(roles.get_key("1").unwrap().name(), Some("after"));
    }

    #[test]
    fn test_keyed_by_other_field() {
        let mut roles = Collection::<Role>::keyed_by(RoleField::Name);
        roles.push(role("1", "mod")).unwrap();

        assert_eq!(roles.key_field(), RoleField::Name);
        assert!(roles.contains("mod"));
    }
}

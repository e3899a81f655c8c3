//! Registry mapping wire event identifiers to handlers.
//!
//! Built once with [`RegistryBuilder`] and owned by a
//! [`Dispatcher`](crate::Dispatcher). Runtime changes go through
//! [`Registry::register`] / [`Registry::unregister`], which take `&mut self`,
//! so there is only ever one writer.

use cordial_core::Handler;
use indexmap::IndexMap;
use std::{collections::HashMap, sync::Arc};

/// A registered handler and the alternate identifiers routed to it.
pub struct RegistryEntry<S: 'static, T: 'static> {
    handler: Arc<dyn Handler<S, T>>,
    alternates: Vec<String>,
}

impl<S: 'static, T: 'static> RegistryEntry<S, T> {
    /// The handler.
    pub fn handler(&self) -> &dyn Handler<S, T> {
        &*self.handler
    }

    /// Alternate identifiers that resolve to this entry.
    pub fn alternates(&self) -> &[String] {
        &self.alternates
    }
}

impl<S: 'static, T: 'static> Clone for RegistryEntry<S, T> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
            alternates: self.alternates.clone(),
        }
    }
}

/// Maps wire event identifiers to handlers for state `S` and outcome `T`.
///
/// Identifiers are unique: registering an identifier again, whether as a
/// primary or as an alternate, replaces whatever it pointed to before.
pub struct Registry<S: 'static, T: 'static> {
    entries: IndexMap<String, RegistryEntry<S, T>>,
    alternates: HashMap<String, String>,
}

impl<S: 'static, T: 'static> Registry<S, T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
            alternates: HashMap::new(),
        }
    }

    /// Register `handler` for `event` with no alternates.
    pub fn register<H: Handler<S, T>>(&mut self, event: impl Into<String>, handler: H) {
        self.register_with_alternates(event, handler, Vec::<String>::new());
    }

    /// Register `handler` for `event`, also routing every alternate to it.
    pub fn register_with_alternates<H, I>(&mut self, event: impl Into<String>, handler: H, alternates: I)
    where
        H: Handler<S, T>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let event = event.into();
        self.unregister(&event);

        let alternates: Vec<String> = alternates
            .into_iter()
            .map(Into::into)
            .filter(|alternate| *alternate != event)
            .collect();
        for alternate in &alternates {
            self.unregister(alternate);
            self.alternates.insert(alternate.clone(), event.clone());
        }

        self.entries.insert(
            event,
            RegistryEntry {
                handler: Arc::new(handler),
                alternates,
            },
        );
    }

    /// Remove an identifier.
    ///
    /// Removing a primary also removes its alternates; removing an alternate
    /// leaves its primary in place. Returns whether anything was removed.
    pub fn unregister(&mut self, event: &str) -> bool {
        if let Some(entry) = self.entries.shift_remove(event) {
            for alternate in &entry.alternates {
                self.alternates.remove(alternate);
            }
            return true;
        }
        if let Some(primary) = self.alternates.remove(event) {
            if let Some(entry) = self.entries.get_mut(&primary) {
                entry.alternates.retain(|alternate| alternate != event);
            }
            return true;
        }
        false
    }

    /// Resolve an identifier (primary or alternate) to its entry.
    pub fn lookup(&self, event: &str) -> Option<&RegistryEntry<S, T>> {
        self.entries.get(event).or_else(|| {
            self.alternates
                .get(event)
                .and_then(|primary| self.entries.get(primary))
        })
    }

    /// Whether an identifier resolves to a handler.
    pub fn contains(&self, event: &str) -> bool {
        self.lookup(event).is_some()
    }

    /// Primary identifiers in registration order.
    pub fn list_identifiers(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Number of primary identifiers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: 'static, T: 'static> Default for Registry<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static, T: 'static> Clone for Registry<S, T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            alternates: self.alternates.clone(),
        }
    }
}

impl<S: 'static, T: 'static> std::fmt::Debug for Registry<S, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(
                self.entries
                    .iter()
                    .map(|(event, entry)| (event, &entry.alternates)),
            )
            .finish()
    }
}

/// Builder for constructing a Registry.
pub struct RegistryBuilder<S: 'static, T: 'static> {
    registry: Registry<S, T>,
}

impl<S: 'static, T: 'static> Default for RegistryBuilder<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: 'static, T: 'static> RegistryBuilder<S, T> {
    /// Create a new empty registry builder.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    /// Register a handler.
    pub fn register<H: Handler<S, T>>(mut self, event: impl Into<String>, handler: H) -> Self {
        self.registry.register(event, handler);
        self
    }

    /// Register a handler reachable under alternate identifiers too.
    pub fn register_with_alternates<H, I>(
        mut self,
        event: impl Into<String>,
        handler: H,
        alternates: I,
    ) -> Self
    where
        H: Handler<S, T>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.registry
            .register_with_alternates(event, handler, alternates);
        self
    }

    /// Build the registry.
    pub fn build(self) -> Registry<S, T> {
        self.registry
    }
}

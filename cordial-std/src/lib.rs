//! # cordial-std
//!
//! Standard implementations for the cordial gateway event pipeline.
//!
//! This crate provides:
//! - **Collections**: [`Collection`], the keyed part cache
//! - **Routing**: [`Registry`], [`RegistryBuilder`] and the [`Dispatcher`] loop
//! - **Domain parts**: guilds, roles, channels, members, messages and friends
//! - **Standard handlers**: one per wire event, writing into a [`Cache`]
//! - **Configuration**: [`DispatchOptions`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use cordial_core;

// Modules
pub mod cache;
pub mod collection;
pub mod dispatcher;
pub mod events;
pub mod handlers;
pub mod options;
pub mod parts;
pub mod registry;
pub mod testing;

pub use cache::Cache;
pub use collection::Collection;
pub use dispatcher::{Dispatched, Dispatcher};
pub use events::EventPart;
pub use options::{DispatchOptions, OptionsError};
pub use registry::{Registry, RegistryBuilder, RegistryEntry};

/// A dispatcher wired for the standard cache and handler set.
pub type GatewayDispatcher = Dispatcher<Cache, EventPart>;

/// A registry of standard handlers.
pub type GatewayRegistry = Registry<Cache, EventPart>;

//! # cordial - Gateway Event Dispatch and Part Hydration
//!
//! `cordial` turns decoded gateway dispatches into typed domain objects
//! ("parts") and keeps an in-memory cache of them up to date. Each wire event
//! identifier is owned by exactly one handler; the handler hydrates the
//! payload, writes the result into the cache, and settles a single-use
//! completion that callers can await.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cordial::{DispatchOptions, Gateway};
//!
//! let mut gateway = Gateway::new(DispatchOptions::default().with_store_messages(true));
//! let mut outcomes = gateway.subscribe();
//!
//! // `frames` is any `Stream<Item = String>` of gateway text frames.
//! gateway.run(frames).await;
//!
//! let role = gateway.cache().guild("5").and_then(|guild| guild.roles.get_key("10"));
//! ```
//!
//! ## Custom parts
//!
//! The fillable set of a part is an enum deriving [`Field`]:
//!
//! ```rust
//! use cordial::{Attributes, Field, Part};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Field)]
//! enum EmojiField {
//!     Id,
//!     Name,
//!     #[field(rename = "require_colons")]
//!     Colons,
//! }
//!
//! #[derive(Debug, Clone)]
//! struct Emoji {
//!     attributes: Attributes<EmojiField>,
//! }
//!
//! impl Part for Emoji {
//!     type Field = EmojiField;
//!     const KIND: &'static str = "emoji";
//!     const KEY: EmojiField = EmojiField::Id;
//!
//!     fn from_attributes(attributes: Attributes<EmojiField>) -> Self {
//!         Self { attributes }
//!     }
//!
//!     fn attributes(&self) -> &Attributes<EmojiField> {
//!         &self.attributes
//!     }
//!
//!     fn attributes_mut(&mut self) -> &mut Attributes<EmojiField> {
//!         &mut self.attributes
//!     }
//! }
//!
//! let emoji = Emoji::from_attributes(Attributes::new());
//! assert_eq!(EmojiField::Colons.name(), "require_colons");
//! assert!(emoji.key().is_none());
//! ```
//!
//! ## Custom handlers
//!
//! Anything implementing [`Handler`] (including a plain closure) can be
//! registered next to, or instead of, the standard set:
//!
//! ```rust,ignore
//! let registry = cordial::default_registry();
//! let mut dispatcher = cordial::GatewayDispatcher::new(registry, Cache::new());
//! dispatcher.registry_mut().register("GUILD_EMOJIS_UPDATE", |deferred, event, cache| { ... });
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod gateway;
mod presets;

pub use cordial_core::{
    // Parts
    Accessor,
    Attributes,
    // Error types
    BoxError,
    // Completion
    Deferred,
    DISPATCH_OPCODE,
    Field,
    FrameError,
    // Handler
    Handler,
    HydrateError,
    Part,
    PartError,
    PartRequestFailed,
    Promise,
    // Events
    RawEvent,
    RequestAction,
    deferred,
    flag,
    key_string,
};

pub use cordial_std::{
    Cache, Collection, DispatchOptions, Dispatched, Dispatcher, EventPart, GatewayDispatcher,
    GatewayRegistry, OptionsError, Registry, RegistryBuilder, RegistryEntry,
};

pub use gateway::Gateway;
pub use presets::{MESSAGE_ALTERNATE, default_registry, dispatcher};

/// Domain parts and their field enumerations.
pub mod parts {
    #![allow(clippy::wildcard_imports)]
    pub use cordial_std::parts::*;
}

/// Standard handlers, one per wire event.
pub mod handlers {
    #![allow(clippy::wildcard_imports)]
    pub use cordial_std::handlers::*;
}

/// Wire event identifiers.
pub mod events {
    #![allow(clippy::wildcard_imports)]
    pub use cordial_std::events::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use cordial_std::testing::*;
}

/// Prelude module - common imports for cordial.
///
/// # Usage
///
/// ```rust,ignore
/// use cordial::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Cache,
        Collection,
        Deferred,
        DispatchOptions,
        EventPart,
        Field,
        Gateway,
        // Core traits
        Handler,
        Part,
        PartError,
        Promise,
        RawEvent,
    };
}

#[cfg(feature = "macros")]
pub use cordial_macros::Field;

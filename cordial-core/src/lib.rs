//! # cordial-core
//!
//! Core traits for the cordial gateway event pipeline.
//!
//! This crate has minimal dependencies and is meant to be imported by code
//! that defines its own parts or handlers without pulling in the standard
//! cache and handler set of `cordial-std`.
//!
//! # Pipeline
//!
//! A decoded event flows through four pieces:
//!
//! 1. [`RawEvent`] - wire identifier, payload and envelope metadata
//! 2. [`Handler`] - the one implementation responsible for that identifier
//! 3. [`Part`] - the typed, whitelisted entity the handler hydrates
//! 4. [`Deferred`] / [`Promise`] - the single-use completion the handler
//!    settles with the part (or an error)
//!
//! # Error Types
//!
//! - [`PartError`] - What a rejected promise yields
//! - [`HydrateError`] - Payload could not be hydrated
//! - [`PartRequestFailed`] - A save/delete request failed
//! - [`FrameError`] - A frame is not a usable dispatch

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Lets `#[derive(Field)]` expand to `::cordial_core` paths inside this crate.
extern crate self as cordial_core;

mod attributes;
mod deferred;
mod error;
mod event;
mod field;
mod handler;
mod part;

// Re-exports
pub use attributes::Attributes;
pub use deferred::{Deferred, Promise, deferred};
pub use error::{BoxError, FrameError, HydrateError, PartError, PartRequestFailed, RequestAction};
pub use event::{DISPATCH_OPCODE, RawEvent};
pub use field::Field;
pub use handler::Handler;
pub use part::{Accessor, Part, flag, key_string};

//! # Event handlers
//!
//! A handler owns the interpretation of exactly one wire event. It receives
//! the fresh [`Deferred`] of the current dispatch, the raw event, and mutable
//! access to the state it caches into, and it must settle the deferred before
//! returning.
//!
//! Handlers are synchronous: they only touch in-memory state, so a dispatch
//! runs to completion without suspending. Any I/O needed to enrich a payload
//! belongs to the caller, which can await the returned promise.

use crate::{deferred::Deferred, event::RawEvent};

/// Interprets one kind of wire event against state `S`, producing `T`.
///
/// A handler must not panic on bad input: a payload it cannot use is reported
/// by rejecting the deferred, so the dispatch loop carries on with the next
/// event.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle events against state `{S}`",
    label = "missing `Handler<{S}, {T}>` implementation",
    note = "Handlers must implement `handle` and settle the deferred they receive."
)]
pub trait Handler<S, T>: Send + Sync + 'static {
    /// Handle one event.
    fn handle(&self, deferred: Deferred<T>, event: &RawEvent, state: &mut S);
}

// Blanket impl for closures
impl<S, T, F> Handler<S, T> for F
where
    F: Fn(Deferred<T>, &RawEvent, &mut S) + Send + Sync + 'static,
{
    fn handle(&self, deferred: Deferred<T>, event: &RawEvent, state: &mut S) {
        (self)(deferred, event, state)
    }
}

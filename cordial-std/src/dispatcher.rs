//! # Dispatcher
//!
//! Routes decoded events to their handlers, one at a time, in arrival order.
//!
//! Each dispatch creates a fresh deferred/promise pair, hands the deferred to
//! the handler together with `&mut` access to the state, and returns the
//! promise. Handlers settle synchronously, so by the time
//! [`Dispatcher::dispatch`] returns the promise is already settled.
//!
//! Unknown and disabled identifiers are not errors: they produce no promise
//! and leave the state untouched.

use crate::{options::DispatchOptions, registry::Registry};
use cordial_core::{PartError, Promise, RawEvent, deferred};
use futures::{
    Stream, StreamExt,
    channel::mpsc::{UnboundedReceiver, UnboundedSender, unbounded},
};
use std::{pin::pin, sync::Arc};

/// A settled dispatch, as delivered to subscribers.
#[derive(Debug, Clone)]
pub struct Dispatched<T> {
    /// Identifier the event arrived under (possibly an alternate).
    pub event: String,
    /// Sequence number of the frame, if known.
    pub sequence: Option<u64>,
    /// The handler's outcome.
    pub outcome: Result<T, Arc<PartError>>,
}

/// Owns a registry and the state its handlers mutate.
pub struct Dispatcher<S: 'static, T: 'static> {
    registry: Registry<S, T>,
    state: S,
    options: DispatchOptions,
    subscribers: Vec<UnboundedSender<Dispatched<T>>>,
}

impl<S: 'static, T: 'static> Dispatcher<S, T> {
    /// Create a dispatcher with default options.
    pub fn new(registry: Registry<S, T>, state: S) -> Self {
        Self::with_options(registry, state, DispatchOptions::default())
    }

    /// Create a dispatcher with explicit options.
    pub fn with_options(registry: Registry<S, T>, state: S, options: DispatchOptions) -> Self {
        Self {
            registry,
            state,
            options,
            subscribers: Vec::new(),
        }
    }

    /// Dispatch one event.
    ///
    /// Returns `None` when no handler is registered for the identifier or the
    /// identifier is disabled.
    pub fn dispatch(&mut self, event: &RawEvent) -> Option<Promise<T>> {
        if self.options.is_disabled(&event.name) {
            #[cfg(feature = "tracing")]
            tracing::trace!(event = %event.name, "event disabled, skipping");
            return None;
        }

        let Some(entry) = self.registry.lookup(&event.name) else {
            #[cfg(feature = "tracing")]
            tracing::trace!(event = %event.name, "no handler registered, skipping");
            return None;
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(event = %event.name, sequence = ?event.sequence, "dispatching event");

        let (deferred, promise) = deferred();
        entry.handler().handle(deferred, event, &mut self.state);
        Some(promise)
    }

    /// Subscribe to every settled dispatch made through [`Dispatcher::run`].
    pub fn subscribe(&mut self) -> UnboundedReceiver<Dispatched<T>> {
        let (tx, rx) = unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Dispatch every event of `events` in order, publishing each outcome to
    /// subscribers.
    ///
    /// A rejected dispatch is logged and published like any other outcome; it
    /// never stops the loop. Returns the number of events that reached a
    /// handler.
    pub async fn run<St>(&mut self, events: St) -> usize
    where
        St: Stream<Item = RawEvent>,
        T: Clone,
    {
        let mut events = pin!(events);
        let mut handled = 0;

        while let Some(event) = events.next().await {
            let Some(promise) = self.dispatch(&event) else {
                continue;
            };
            handled += 1;

            let outcome = promise.await.map_err(Arc::new);
            if let Err(_err) = &outcome {
                #[cfg(feature = "tracing")]
                tracing::warn!(event = %event.name, error = %_err, "dispatch rejected");
            }

            self.publish(Dispatched {
                event: event.name,
                sequence: event.sequence,
                outcome,
            });
        }

        handled
    }

    fn publish(&mut self, dispatched: Dispatched<T>)
    where
        T: Clone,
    {
        self.subscribers
            .retain(|subscriber| subscriber.unbounded_send(dispatched.clone()).is_ok());
    }

    /// The cached state.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Mutable access to the cached state.
    pub fn state_mut(&mut self) -> &mut S {
        &mut self.state
    }

    /// The handler registry.
    pub fn registry(&self) -> &Registry<S, T> {
        &self.registry
    }

    /// Mutable access to the registry, for runtime (de)registration.
    pub fn registry_mut(&mut self) -> &mut Registry<S, T> {
        &mut self.registry
    }

    /// The dispatch options.
    pub fn options(&self) -> &DispatchOptions {
        &self.options
    }
}

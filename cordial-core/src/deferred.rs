//! # Completion primitive
//!
//! Every dispatch gets a fresh [`Deferred`]/[`Promise`] pair. The handler owns
//! the `Deferred` and settles it synchronously; whoever issued the request or
//! subscription awaits the `Promise`.
//!
//! Settling consumes the `Deferred`, so resolving or rejecting twice does not
//! compile. A `Deferred` dropped without settling rejects its promise with
//! [`PartError::Abandoned`], and a dropped `Promise` simply discards the value
//! once the handler settles.

use crate::error::PartError;
use futures::{FutureExt, channel::oneshot, future::Map};
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

/// Create a connected deferred/promise pair.
pub fn deferred<T>() -> (Deferred<T>, Promise<T>) {
    let (tx, rx) = oneshot::channel();
    (Deferred { sender: Some(tx) }, Promise { receiver: rx })
}

/// The settling half of a completion.
#[derive(Debug)]
pub struct Deferred<T> {
    sender: Option<oneshot::Sender<Result<T, PartError>>>,
}

impl<T> Deferred<T> {
    /// Resolve with a value.
    ///
    /// Returns `false` if the promise was already dropped.
    pub fn resolve(self, value: T) -> bool {
        self.settle(Ok::<T, PartError>(value))
    }

    /// Reject with an error, passing it through unchanged.
    ///
    /// Returns `false` if the promise was already dropped.
    pub fn reject(self, error: impl Into<PartError>) -> bool {
        self.settle(Err::<T, PartError>(error.into()))
    }

    /// Resolve or reject from a result.
    pub fn settle<E: Into<PartError>>(mut self, result: Result<T, E>) -> bool {
        match self.sender.take() {
            Some(sender) => sender.send(result.map_err(Into::into)).is_ok(),
            None => false,
        }
    }

    /// Whether the consuming promise has been dropped.
    pub fn is_abandoned(&self) -> bool {
        self.sender.as_ref().is_none_or(|sender| sender.is_canceled())
    }
}

impl<T> Drop for Deferred<T> {
    fn drop(&mut self) {
        if let Some(sender) = self.sender.take() {
            let _ = sender.send(Err(PartError::Abandoned));
        }
    }
}

/// The awaiting half of a completion.
///
/// Resolves to `Ok(value)` or to the error the handler rejected with.
#[derive(Debug)]
#[must_use = "a promise does nothing unless awaited or polled"]
pub struct Promise<T> {
    receiver: oneshot::Receiver<Result<T, PartError>>,
}

impl<T> Promise<T> {
    /// Attach a continuation that runs once the promise settles.
    pub fn then<F, U>(self, continuation: F) -> Map<Self, F>
    where
        F: FnOnce(Result<T, PartError>) -> U,
    {
        self.map(continuation)
    }

    /// Take the outcome if the deferred has already settled.
    ///
    /// Returns `None` while the deferred is still pending.
    pub fn try_take(&mut self) -> Option<Result<T, PartError>> {
        match self.receiver.try_recv() {
            Ok(Some(outcome)) => Some(outcome),
            Ok(None) => None,
            Err(oneshot::Canceled) => Some(Err(PartError::Abandoned)),
        }
    }
}

impl<T> Future for Promise<T> {
    type Output = Result<T, PartError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|received| match received {
                Ok(outcome) => outcome,
                Err(oneshot::Canceled) => Err(PartError::Abandoned),
            })
    }
}

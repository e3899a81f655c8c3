//! Error types for cordial.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`PartError`] - What a rejected [`Promise`](crate::Promise) yields
//! - [`HydrateError`] - A payload could not be turned into a part
//! - [`PartRequestFailed`] - A save/delete request issued for a part failed
//! - [`FrameError`] - A decoded gateway frame is not a usable dispatch

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error delivered through a rejected completion.
#[derive(Error, Debug)]
pub enum PartError {
    /// The payload could not be hydrated into the expected part.
    #[error("hydration failed: {0}")]
    Hydrate(#[from] HydrateError),

    /// A request executed on behalf of a part failed.
    #[error(transparent)]
    Request(#[from] PartRequestFailed),

    /// The deferred was dropped without being resolved or rejected.
    #[error("completion was abandoned before it settled")]
    Abandoned,

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised while hydrating a part from a raw payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HydrateError {
    /// The payload for a part was not a JSON object.
    #[error("{kind} payload is not an object")]
    NotAnObject {
        /// Kind of part being hydrated.
        kind: &'static str,
    },

    /// A field the part cannot exist without is absent or null.
    #[error("{kind} payload is missing required field `{field}`")]
    MissingField {
        /// Kind of part being hydrated.
        kind: &'static str,
        /// Wire name of the missing field.
        field: &'static str,
    },

    /// The event payload lacks a nested value the handler needs.
    #[error("{event} payload is missing `{key}`")]
    MissingPayload {
        /// Wire event identifier.
        event: String,
        /// Payload key that was expected.
        key: &'static str,
    },
}

/// The kind of request that was executed on behalf of a part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestAction {
    /// Creating or updating the part remotely.
    Save,
    /// Deleting the part remotely.
    Delete,
}

impl std::fmt::Display for RequestAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestAction::Save => f.write_str("save"),
            RequestAction::Delete => f.write_str("delete"),
        }
    }
}

/// Thrown when a request that was executed from a part failed.
///
/// The request layer builds this; the dispatch pipeline only carries it
/// through [`Deferred::reject`](crate::Deferred::reject) without touching it.
#[derive(Error, Debug)]
#[error("{action} request for {kind} failed")]
pub struct PartRequestFailed {
    /// Kind of part the request was issued for.
    pub kind: &'static str,
    /// What the request tried to do.
    pub action: RequestAction,
    /// The underlying failure.
    #[source]
    pub source: BoxError,
}

impl PartRequestFailed {
    /// Create a new request failure.
    pub fn new(kind: &'static str, action: RequestAction, source: impl Into<BoxError>) -> Self {
        Self {
            kind,
            action,
            source: source.into(),
        }
    }
}

/// Errors that can occur while reading a decoded gateway frame.
#[derive(Error, Debug)]
pub enum FrameError {
    /// The frame is not valid JSON or has the wrong shape.
    #[error("invalid frame: {0}")]
    Json(#[from] serde_json::Error),

    /// The frame carries an opcode other than dispatch (0).
    #[error("frame opcode {0} is not a dispatch")]
    NotDispatch(u8),

    /// A dispatch frame without an event name.
    #[error("dispatch frame has no event name")]
    MissingName,
}

// Convenience conversions
impl From<BoxError> for PartError {
    fn from(err: BoxError) -> Self {
        PartError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_failure_display() {
        let err = PartRequestFailed::new("role", RequestAction::Delete, "403 Forbidden");
        assert_eq!(err.to_string(), "delete request for role failed");
        assert_eq!(
            std::error::Error::source(&err).map(|s| s.to_string()),
            Some("403 Forbidden".to_string())
        );
    }

    #[test]
    fn test_part_error_is_transparent_for_requests() {
        let err: PartError =
            PartRequestFailed::new("guild", RequestAction::Save, "timeout").into();
        assert_eq!(err.to_string(), "save request for guild failed");
    }

    #[test]
    fn test_hydrate_error_display() {
        let err = HydrateError::MissingField {
            kind: "role",
            field: "id",
        };
        assert_eq!(err.to_string(), "role payload is missing required field `id`");
    }
}

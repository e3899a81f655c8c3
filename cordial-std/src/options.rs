//! Dispatcher configuration.

use serde::Deserialize;
use thiserror::Error;

/// Options that could not be loaded.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The document is not valid JSON for these options.
    #[error("invalid dispatch options: {0}")]
    Json(#[from] serde_json::Error),

    /// A disabled identifier is empty or padded with whitespace.
    #[error("disabled event identifier {0:?} is not a wire event name")]
    InvalidIdentifier(String),
}

/// Options controlling which events are dispatched and what gets cached.
///
/// Deserializable from any serde format; missing keys take their defaults.
///
/// # Example
///
/// ```rust,ignore
/// let options: DispatchOptions = serde_json::from_str(
///     r#"{"disabled_events": ["TYPING_START"], "store_messages": true}"#,
/// )?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DispatchOptions {
    /// Identifiers ignored even when a handler is registered for them.
    pub disabled_events: Vec<String>,
    /// Whether message events are written into channel caches.
    pub store_messages: bool,
}

impl DispatchOptions {
    /// Load options from a JSON document and validate them.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject identifiers that can never match a wire event name.
    pub fn validate(&self) -> Result<(), OptionsError> {
        match self
            .disabled_events
            .iter()
            .find(|event| event.is_empty() || event.trim() != event.as_str())
        {
            Some(event) => Err(OptionsError::InvalidIdentifier(event.clone())),
            None => Ok(()),
        }
    }

    /// Create the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore an event identifier.
    pub fn with_disabled_event(mut self, event: impl Into<String>) -> Self {
        self.disabled_events.push(event.into());
        self
    }

    /// Cache messages in their channels.
    pub fn with_store_messages(mut self, store: bool) -> Self {
        self.store_messages = store;
        self
    }

    /// Whether `event` has been disabled.
    pub fn is_disabled(&self, event: &str) -> bool {
        self.disabled_events.iter().any(|disabled| disabled == event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_defaults() {
        let options: DispatchOptions =
            serde_json::from_str(r#"{"disabled_events": ["TYPING_START"]}"#).unwrap();

        assert!(options.is_disabled("TYPING_START"));
        assert!(!options.is_disabled("MESSAGE_CREATE"));
        assert!(!options.store_messages);
    }

    #[test]
    fn test_from_json_validates() {
        let options = DispatchOptions::from_json(r#"{"store_messages": true}"#).unwrap();
        assert!(options.store_messages);

        let err = DispatchOptions::from_json(r#"{"disabled_events": [" TYPING_START"]}"#).unwrap_err();
        assert!(matches!(err, OptionsError::InvalidIdentifier(ref event) if event == " TYPING_START"));

        let err = DispatchOptions::from_json("{not json").unwrap_err();
        assert!(matches!(err, OptionsError::Json(_)));
    }

    #[test]
    fn test_builder() {
        let options = DispatchOptions::new()
            .with_store_messages(true)
            .with_disabled_event("PRESENCE_UPDATE");

        assert!(options.store_messages);
        assert_eq!(options.disabled_events, vec!["PRESENCE_UPDATE".to_string()]);
    }
}

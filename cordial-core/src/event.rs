//! Raw inbound events.

use crate::error::FrameError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Opcode of a gateway dispatch frame.
pub const DISPATCH_OPCODE: u8 = 0;

/// A decoded inbound event: the wire identifier, its payload, and whatever
/// envelope metadata the transport attached.
#[derive(Debug, Clone, PartialEq)]
pub struct RawEvent {
    /// Wire event identifier, e.g. `GUILD_ROLE_CREATE`.
    pub name: String,
    /// Decoded payload.
    pub data: Value,
    /// Sequence number of the frame, when the transport supplied one.
    pub sequence: Option<u64>,
    /// Envelope metadata (shard id, parent identifiers, ...).
    pub metadata: Map<String, Value>,
}

#[derive(Deserialize)]
struct Frame {
    op: u8,
    #[serde(default)]
    d: Value,
    #[serde(default)]
    s: Option<u64>,
    #[serde(default)]
    t: Option<String>,
}

impl RawEvent {
    /// Create an event without envelope metadata.
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self {
            name: name.into(),
            data,
            sequence: None,
            metadata: Map::new(),
        }
    }

    /// Attach a piece of envelope metadata.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Read a decoded gateway dispatch frame (`{"op":0,"t":..,"s":..,"d":..}`).
    pub fn from_frame(frame: &str) -> Result<Self, FrameError> {
        let frame: Frame = serde_json::from_str(frame)?;
        if frame.op != DISPATCH_OPCODE {
            return Err(FrameError::NotDispatch(frame.op));
        }
        let name = frame.t.ok_or(FrameError::MissingName)?;
        Ok(Self {
            name,
            data: frame.d,
            sequence: frame.s,
            metadata: Map::new(),
        })
    }

    /// Look up a contextual value: the payload first, then the envelope.
    pub fn context(&self, key: &str) -> Option<&Value> {
        self.data
            .get(key)
            .filter(|value| !value.is_null())
            .or_else(|| self.metadata.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_frame() {
        let event = RawEvent::from_frame(
            r#"{"op":0,"s":42,"t":"GUILD_ROLE_CREATE","d":{"guild_id":"5","role":{"id":"10"}}}"#,
        )
        .unwrap();

        assert_eq!(event.name, "GUILD_ROLE_CREATE");
        assert_eq!(event.sequence, Some(42));
        assert_eq!(event.data["role"]["id"], json!("10"));
    }

    #[test]
    fn test_from_frame_rejects_other_opcodes() {
        let err = RawEvent::from_frame(r#"{"op":11,"d":null}"#).unwrap_err();
        assert!(matches!(err, FrameError::NotDispatch(11)));

        let err = RawEvent::from_frame(r#"{"op":0,"d":{}}"#).unwrap_err();
        assert!(matches!(err, FrameError::MissingName));

        let err = RawEvent::from_frame("not json").unwrap_err();
        assert!(matches!(err, FrameError::Json(_)));
    }

    #[test]
    fn test_context_prefers_payload() {
        let event = RawEvent::new("GUILD_MEMBER_ADD", json!({"guild_id": "1"}))
            .with_metadata("guild_id", "2")
            .with_metadata("shard_id", 3);

        assert_eq!(event.context("guild_id"), Some(&json!("1")));
        assert_eq!(event.context("shard_id"), Some(&json!(3)));
        assert_eq!(event.context("missing"), None);
    }
}

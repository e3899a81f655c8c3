//! # Gateway frames
//!
//! [`Gateway`] sits between a transport and the dispatcher: it decodes raw
//! text frames, drops the ones that are not dispatches, and feeds the rest to
//! the standard handlers in arrival order.
//!
//! Connection management (heartbeats, identify, resume) is the transport's
//! job; frames with other opcodes are skipped here.

use crate::presets;
use cordial_core::{FrameError, Promise, RawEvent};
use cordial_std::{Cache, DispatchOptions, Dispatched, EventPart, GatewayDispatcher, GatewayRegistry};
use futures::{Stream, StreamExt, channel::mpsc::UnboundedReceiver, future};

/// Decodes gateway frames and dispatches them against a [`Cache`].
pub struct Gateway {
    dispatcher: GatewayDispatcher,
}

impl Gateway {
    /// A gateway over the default registry.
    pub fn new(options: DispatchOptions) -> Self {
        Self {
            dispatcher: presets::dispatcher(options),
        }
    }

    /// A gateway over a custom registry.
    pub fn with_registry(registry: GatewayRegistry, options: DispatchOptions) -> Self {
        let cache = Cache::with_options(&options);
        Self {
            dispatcher: GatewayDispatcher::with_options(registry, cache, options),
        }
    }

    /// Decode and dispatch one frame.
    ///
    /// Returns `Ok(None)` for frames that decode but reach no handler
    /// (unknown or disabled identifiers).
    pub fn handle_frame(&mut self, frame: &str) -> Result<Option<Promise<EventPart>>, FrameError> {
        let event = RawEvent::from_frame(frame)?;
        Ok(self.dispatcher.dispatch(&event))
    }

    /// Dispatch every frame of `frames` in order.
    ///
    /// Frames that do not decode to a dispatch are logged and skipped.
    /// Returns the number of events that reached a handler.
    pub async fn run<St>(&mut self, frames: St) -> usize
    where
        St: Stream<Item = String>,
    {
        let events = frames.filter_map(|frame| future::ready(decode(&frame)));
        self.dispatcher.run(events).await
    }

    /// Subscribe to every settled dispatch made through [`Gateway::run`].
    pub fn subscribe(&mut self) -> UnboundedReceiver<Dispatched<EventPart>> {
        self.dispatcher.subscribe()
    }

    /// The cached state.
    pub fn cache(&self) -> &Cache {
        self.dispatcher.state()
    }

    /// The underlying dispatcher.
    pub fn dispatcher(&self) -> &GatewayDispatcher {
        &self.dispatcher
    }

    /// Mutable access to the underlying dispatcher.
    pub fn dispatcher_mut(&mut self) -> &mut GatewayDispatcher {
        &mut self.dispatcher
    }
}

fn decode(frame: &str) -> Option<RawEvent> {
    match RawEvent::from_frame(frame) {
        Ok(event) => Some(event),
        Err(FrameError::NotDispatch(_op)) => {
            #[cfg(feature = "tracing")]
            tracing::trace!(op = _op, "skipping non-dispatch frame");
            None
        }
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!(error = %_err, "dropping undecodable frame");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_frame() {
        let mut gateway = Gateway::new(DispatchOptions::default());

        let mut promise = gateway
            .handle_frame(r#"{"op":0,"s":1,"t":"GUILD_CREATE","d":{"id":"5","name":"home"}}"#)
            .unwrap()
            .unwrap();
        let guild = promise.try_take().unwrap().unwrap();

        assert_eq!(guild.as_guild().unwrap().name(), Some("home"));
        assert!(gateway.cache().guild("5").is_some());
    }

    #[test]
    fn test_handle_frame_errors() {
        let mut gateway = Gateway::new(DispatchOptions::default());

        assert!(matches!(
            gateway.handle_frame(r#"{"op":11}"#),
            Err(FrameError::NotDispatch(11))
        ));
        assert!(matches!(
            gateway.handle_frame("{"),
            Err(FrameError::Json(_))
        ));
        assert!(
            gateway
                .handle_frame(r#"{"op":0,"t":"GUILD_INTEGRATIONS_UPDATE","d":{}}"#)
                .unwrap()
                .is_none()
        );
    }
}

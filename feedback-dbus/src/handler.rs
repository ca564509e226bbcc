//! Control protocol state machine
//!
//! One [`ControlHandler`] interprets every inbound message: `Play` allocates
//! a correlation id and hands a new request to the engine, `Stop` and
//! `Pause` resolve an id back to its request and drive the corresponding
//! lifecycle operation, and the bus `NameOwnerChanged` signal for the
//! watched upstream peer triggers an unconditional mass cancel.
//!
//! The handler never blocks. The ringtone delayed stop is the one
//! asynchronous piece: a detached timer task that captures the correlation
//! id, not the request, and re-resolves it when the timer fires, so a
//! request retired in the interim turns the stop into a no-op.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use feedback_core::{FeedbackEngine, Request, RequestRef};

use crate::codec::decode_properties;
use crate::config::{
    BridgeConfig, DBUS_SERVICE_INTERFACE, METHOD_PAUSE, METHOD_PLAY, METHOD_STOP,
    NAME_OWNER_CHANGED,
};
use crate::correlation::{lookup_request, EventId, EventIdAllocator};
use crate::error::ProtocolError;
use crate::wire::{BusMessage, MethodCall, Outbound, SignalMessage, WireValue};

/// Disposition of one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handling {
    /// The message was consumed by this bridge (reply sent if one was due).
    Handled,
    /// Not ours; leave it for other consumers on the connection.
    Pass,
}

/// The control protocol handler.
///
/// Must be driven from within a tokio runtime: delayed stops are spawned as
/// detached timer tasks.
pub struct ControlHandler {
    engine: Arc<dyn FeedbackEngine>,
    outbound: mpsc::UnboundedSender<Outbound>,
    ids: EventIdAllocator,
    config: BridgeConfig,
}

impl ControlHandler {
    /// Create a handler driving `engine`, replying through `outbound`.
    pub fn new(
        engine: Arc<dyn FeedbackEngine>,
        outbound: mpsc::UnboundedSender<Outbound>,
        config: BridgeConfig,
    ) -> Self {
        Self {
            engine,
            outbound,
            ids: EventIdAllocator::new(),
            config,
        }
    }

    /// Interpret one inbound message.
    pub fn handle(&self, message: &BusMessage) -> Handling {
        match message {
            BusMessage::Signal(signal) => self.handle_signal(signal),
            BusMessage::MethodCall(call) => {
                if call.interface != self.config.interface {
                    return Handling::Pass;
                }

                match call.member.as_str() {
                    METHOD_PLAY => self.handle_play(call),
                    METHOD_STOP => self.handle_stop(call),
                    METHOD_PAUSE => self.handle_pause(call),
                    // Recognized interface, unknown member: consumed, no reply.
                    _ => {}
                }

                Handling::Handled
            }
        }
    }

    fn handle_signal(&self, signal: &SignalMessage) -> Handling {
        if signal.interface == DBUS_SERVICE_INTERFACE && signal.member == NAME_OWNER_CHANGED {
            self.handle_name_owner_changed(signal);
        }

        // Signals are broadcast; always leave them for other consumers.
        Handling::Pass
    }

    fn handle_play(&self, call: &MethodCall) {
        let event = match call.args.first() {
            Some(WireValue::Str(event)) => event,
            _ => {
                self.send_error(call.serial, &ProtocolError::MalformedCall);
                return;
            }
        };

        let entries = match call.args.get(1) {
            Some(WireValue::Dict(entries)) => entries,
            _ => {
                self.send_error(call.serial, &ProtocolError::MalformedCall);
                return;
            }
        };

        let event_id = self.ids.allocate();

        tracing::info!(">> play received for event '{}' with id '{}'", event, event_id);

        // Ack carries the id and always precedes the engine handoff, so the
        // caller may legitimately observe the ack before playback starts.
        self.send_ack(call.serial, event_id);

        let mut properties = decode_properties(entries);
        properties.set_uint(&self.config.event_id_key, event_id.as_u32());

        let request: RequestRef = Arc::new(Request::new(event.clone(), properties));
        if let Err(error) = self.engine.play(&request) {
            tracing::warn!("play failed for event '{}': {}", event, error);
        }
    }

    fn handle_stop(&self, call: &MethodCall) {
        let event_id = match call.args.as_slice() {
            [WireValue::Uint32(id)] => EventId::new(*id),
            _ => {
                self.send_error(call.serial, &ProtocolError::MalformedCall);
                return;
            }
        };

        tracing::info!(">> stop received for id '{}'", event_id);

        let request =
            match lookup_request(self.engine.as_ref(), &self.config.event_id_key, event_id) {
                Some(request) => request,
                None => {
                    self.send_error(call.serial, &ProtocolError::UnknownEventId);
                    return;
                }
            };

        if request.name() == self.config.ringtone_event {
            tracing::debug!("mute ringtone for delayed stop");
            if let Err(error) = self.engine.pause(&request) {
                tracing::warn!("pause failed for id '{}': {}", event_id, error);
            }

            tracing::debug!(
                "setup stop timeout for ringtone in {} ms",
                self.config.ringtone_stop_timeout.as_millis()
            );
            self.schedule_delayed_stop(event_id);
        } else if let Err(error) = self.engine.stop(&request, Duration::ZERO) {
            tracing::warn!("stop failed for id '{}': {}", event_id, error);
        }

        self.send_ack(call.serial, event_id);
    }

    fn handle_pause(&self, call: &MethodCall) {
        let (event_id, pause) = match call.args.as_slice() {
            [WireValue::Uint32(id), WireValue::Bool(pause)] => (EventId::new(*id), *pause),
            _ => {
                self.send_error(call.serial, &ProtocolError::MalformedCall);
                return;
            }
        };

        tracing::info!(
            ">> {} received for id '{}'",
            if pause { "pause" } else { "resume" },
            event_id
        );

        let request =
            match lookup_request(self.engine.as_ref(), &self.config.event_id_key, event_id) {
                Some(request) => request,
                None => {
                    self.send_error(call.serial, &ProtocolError::UnknownEventId);
                    return;
                }
            };

        // Resume reuses the play entry point: the engine treats play on an
        // already-active request as resume.
        let result = if pause {
            self.engine.pause(&request)
        } else {
            self.engine.play(&request)
        };

        if let Err(error) = result {
            tracing::warn!(
                "{} failed for id '{}': {}",
                if pause { "pause" } else { "resume" },
                event_id,
                error
            );
        }

        self.send_ack(call.serial, event_id);
    }

    fn handle_name_owner_changed(&self, signal: &SignalMessage) {
        let component = match signal.args.as_slice() {
            [WireValue::Str(component), WireValue::Str(_), WireValue::Str(_)] => component,
            _ => {
                tracing::warn!("malformed {} signal", NAME_OWNER_CHANGED);
                return;
            }
        };

        if component == &self.config.watched_peer {
            tracing::info!("'{}' restarted, stopping all requests", component);
            self.stop_all();
        }
    }

    /// Stop every active request immediately. No ringtone exception: a peer
    /// restart is a full reset, not a user-initiated stop.
    fn stop_all(&self) {
        for request in self.engine.active_requests() {
            if let Err(error) = self.engine.stop(&request, Duration::ZERO) {
                tracing::warn!("stop failed for request '{}': {}", request.name(), error);
            }
        }
    }

    /// Arm the ringtone grace timer. The task re-resolves the id on firing;
    /// a lookup miss means the request already went away and nothing is due.
    fn schedule_delayed_stop(&self, event_id: EventId) {
        let engine = Arc::clone(&self.engine);
        let key = self.config.event_id_key.clone();
        let delay = self.config.ringtone_stop_timeout;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            match lookup_request(engine.as_ref(), &key, event_id) {
                Some(request) => {
                    if let Err(error) = engine.stop(&request, Duration::ZERO) {
                        tracing::warn!("delayed stop failed for id '{}': {}", event_id, error);
                    }
                }
                None => {
                    tracing::debug!("delayed stop for id '{}': request already gone", event_id);
                }
            }
        });
    }

    fn send_ack(&self, serial: u32, event_id: EventId) {
        let reply = Outbound::Ack {
            serial,
            event_id: event_id.as_u32(),
        };
        if self.outbound.send(reply).is_err() {
            tracing::warn!("failed to send ack for id '{}': transport gone", event_id);
        }
    }

    fn send_error(&self, serial: u32, error: &ProtocolError) {
        let message = error.to_string();
        tracing::debug!("reply error: {}", message);

        let reply = Outbound::Error { serial, message };
        if self.outbound.send(reply).is_err() {
            tracing::warn!("failed to send error reply: transport gone");
        }
    }
}

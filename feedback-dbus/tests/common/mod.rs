//! Shared test fixtures: a recording engine and message builders.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use feedback_core::{EngineResult, FeedbackEngine, RequestRef, SinkRef};
use feedback_dbus::{BusMessage, DictEntry, MethodCall, SignalMessage, WireValue};

/// Correlation property key matching `BridgeConfig::default()`.
pub const EVENT_ID_KEY: &str = "dbus.event.id";

/// One recorded engine invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCall {
    Play { name: String, event_id: u32 },
    Pause { event_id: u32 },
    Stop { event_id: u32, delay_ms: u64 },
}

/// Recording fake of the engine seam.
///
/// `play` adds the request to the active set, `stop` retires it; every call
/// is recorded in order for assertions.
#[derive(Default)]
pub struct MockEngine {
    active: Mutex<Vec<RequestRef>>,
    calls: Mutex<Vec<EngineCall>>,
    play_hook: Mutex<Option<Box<dyn Fn() + Send + Sync>>>,
}

impl MockEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Everything recorded so far, in call order.
    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Drop the recorded calls, keeping the active set.
    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn active_count(&self) -> usize {
        self.active.lock().unwrap().len()
    }

    /// Remove a request from the active set without recording anything,
    /// simulating the engine retiring it on its own.
    pub fn retire(&self, event_id: u32) {
        self.active
            .lock()
            .unwrap()
            .retain(|request| id_of(request) != event_id);
    }

    /// Install a hook invoked at the top of every `play` call.
    pub fn set_play_hook(&self, hook: impl Fn() + Send + Sync + 'static) {
        *self.play_hook.lock().unwrap() = Some(Box::new(hook));
    }
}

fn id_of(request: &RequestRef) -> u32 {
    request.properties().uint(EVENT_ID_KEY).unwrap_or(0)
}

impl FeedbackEngine for MockEngine {
    fn play(&self, request: &RequestRef) -> EngineResult<()> {
        if let Some(hook) = self.play_hook.lock().unwrap().as_ref() {
            hook();
        }

        self.calls.lock().unwrap().push(EngineCall::Play {
            name: request.name().to_string(),
            event_id: id_of(request),
        });

        let mut active = self.active.lock().unwrap();
        if !active.iter().any(|held| Arc::ptr_eq(held, request)) {
            active.push(Arc::clone(request));
        }

        Ok(())
    }

    fn pause(&self, request: &RequestRef) -> EngineResult<()> {
        self.calls.lock().unwrap().push(EngineCall::Pause {
            event_id: id_of(request),
        });
        Ok(())
    }

    fn stop(&self, request: &RequestRef, delay: Duration) -> EngineResult<()> {
        self.calls.lock().unwrap().push(EngineCall::Stop {
            event_id: id_of(request),
            delay_ms: delay.as_millis() as u64,
        });

        self.active
            .lock()
            .unwrap()
            .retain(|held| !Arc::ptr_eq(held, request));

        Ok(())
    }

    fn active_requests(&self) -> Vec<RequestRef> {
        self.active.lock().unwrap().clone()
    }

    fn sinks(&self) -> Vec<SinkRef> {
        Vec::new()
    }
}

/// Interface matching `BridgeConfig::default()`.
pub const INTERFACE: &str = "com.nokia.NonGraphicFeedback1";

pub fn play_call(serial: u32, event: WireValue, properties: WireValue) -> BusMessage {
    BusMessage::MethodCall(MethodCall {
        serial,
        interface: INTERFACE.to_string(),
        member: "Play".to_string(),
        args: vec![event, properties],
    })
}

pub fn simple_play(serial: u32, event: &str) -> BusMessage {
    play_call(
        serial,
        WireValue::Str(event.to_string()),
        WireValue::Dict(Vec::new()),
    )
}

pub fn play_with_properties(serial: u32, event: &str, entries: Vec<DictEntry>) -> BusMessage {
    play_call(
        serial,
        WireValue::Str(event.to_string()),
        WireValue::Dict(entries),
    )
}

pub fn stop_call(serial: u32, event_id: u32) -> BusMessage {
    BusMessage::MethodCall(MethodCall {
        serial,
        interface: INTERFACE.to_string(),
        member: "Stop".to_string(),
        args: vec![WireValue::Uint32(event_id)],
    })
}

pub fn pause_call(serial: u32, event_id: u32, pause: bool) -> BusMessage {
    BusMessage::MethodCall(MethodCall {
        serial,
        interface: INTERFACE.to_string(),
        member: "Pause".to_string(),
        args: vec![WireValue::Uint32(event_id), WireValue::Bool(pause)],
    })
}

pub fn name_owner_changed(component: &str) -> BusMessage {
    BusMessage::Signal(SignalMessage {
        interface: "org.freedesktop.DBus".to_string(),
        member: "NameOwnerChanged".to_string(),
        args: vec![
            WireValue::Str(component.to_string()),
            WireValue::Str(":1.7".to_string()),
            WireValue::Str(String::new()),
        ],
    })
}

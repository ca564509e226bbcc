//! D-Bus control protocol bridge for the feedback SDK
//!
//! This crate translates wire-level `Play` / `Stop` / `Pause` control
//! messages into lifecycle operations on an external feedback engine and
//! emits asynchronous `Status` notifications back toward the bus. It owns
//! the correlation-id space tying external event ids to engine requests,
//! applies the delayed-stop policy for ringtone-class events, and reacts to
//! upstream peer restarts with a mass cancel.
//!
//! Bus transport mechanics (connection setup, name registration, message
//! framing) stay outside this crate: a transport feeds decoded
//! [`BusMessage`]s in and drains [`Outbound`] replies and signals out, both
//! over unbounded channels.
//!
//! # Example
//!
//! ```rust,ignore
//! use feedback_dbus::{BridgeConfig, BridgeService};
//!
//! let (service, mut outbound) = BridgeService::start(engine, BridgeConfig::default())?;
//! let inbound = service.inbound();
//!
//! // transport side: push decoded messages, drain replies
//! inbound.send(message)?;
//! while let Some(reply) = outbound.recv().await { /* frame and send */ }
//! ```

pub mod codec;
pub mod config;
pub mod correlation;
pub mod error;
pub mod handler;
pub mod notifier;
pub mod service;
pub mod wire;

pub use config::BridgeConfig;
pub use correlation::{EventId, EventIdAllocator};
pub use error::{ProtocolError, ProtocolResult};
pub use handler::{ControlHandler, Handling};
pub use notifier::StatusNotifier;
pub use service::BridgeService;
pub use wire::{BusMessage, DictEntry, MethodCall, Outbound, SignalMessage, WireValue};

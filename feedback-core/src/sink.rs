//! Output sink seam
//!
//! A sink is one concrete output channel (audio, vibration, LED pattern,
//! backlight) capable of rendering part of a request. The engine registers
//! its sinks at startup; the core only ever needs their names and their
//! identity, so the seam is a name trait behind a shared pointer.

use std::sync::Arc;

/// Shared handle to a registered sink. Identity is pointer identity:
/// two `SinkRef`s refer to the same sink iff `Arc::ptr_eq` holds.
pub type SinkRef = Arc<dyn Sink>;

/// One output channel registered with the engine.
pub trait Sink: Send + Sync {
    /// Stable name the sink was registered under (e.g. "gst", "vibrator").
    fn name(&self) -> &str;
}

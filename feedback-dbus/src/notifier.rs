//! Outbound status notifications
//!
//! The engine reports settled requests back through [`EngineObserver`];
//! both the failure and completion paths funnel into one `Status` signal
//! correlated by the id stored in the request's property bag. Notifications
//! are fire-and-forget: no acknowledgement, no retry.

use tokio::sync::mpsc;

use feedback_core::{EngineObserver, RequestRef};

use crate::wire::Outbound;

/// Emits `Status` signals for settled requests.
#[derive(Clone)]
pub struct StatusNotifier {
    outbound: mpsc::UnboundedSender<Outbound>,
    event_id_key: String,
}

impl StatusNotifier {
    /// Create a notifier sending through `outbound`, reading the correlation
    /// id from `event_id_key`.
    pub fn new(outbound: mpsc::UnboundedSender<Outbound>, event_id_key: impl Into<String>) -> Self {
        Self {
            outbound,
            event_id_key: event_id_key.into(),
        }
    }

    fn send_status(&self, request: &RequestRef, code: u32) {
        let event_id = request
            .properties()
            .uint(&self.event_id_key)
            .unwrap_or(0);

        // A request that never went through Play carries no id; nothing to
        // correlate the signal to, so it is suppressed.
        if event_id == 0 {
            return;
        }

        tracing::debug!(
            "sending status for request '{}' (event.id={}) with code {}",
            request.name(),
            event_id,
            code
        );

        let signal = Outbound::Status { event_id, code };
        if self.outbound.send(signal).is_err() {
            tracing::warn!("failed to send status for id '{}': transport gone", event_id);
        }
    }
}

impl EngineObserver for StatusNotifier {
    fn on_request_failed(&self, request: &RequestRef, message: &str) {
        tracing::debug!(
            "error occurred for request '{}': {}",
            request.name(),
            message
        );

        self.send_status(request, 0);
    }

    fn on_request_completed(&self, request: &RequestRef, code: u32) {
        self.send_status(request, code);
    }
}

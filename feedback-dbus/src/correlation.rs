//! Correlation ids tying bus events to engine requests
//!
//! Every accepted `Play` gets a fresh id from a process-lifetime monotonic
//! counter; the id is stored in the request's property bag and doubles as
//! the lookup key for every later `Stop`/`Pause`. Id 0 is reserved and never
//! allocated. There is no release operation: an id disappears when the
//! engine retires its request, so lookups scan the engine's active set on
//! demand rather than maintaining a shadow index that could go stale.

use std::sync::atomic::{AtomicU32, Ordering};

use feedback_core::{FeedbackEngine, RequestRef};

/// Externally visible identifier of one active request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventId(u32);

impl EventId {
    /// Wrap a raw id value.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw id value.
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// Whether this is the reserved never-assigned id.
    pub fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic allocator for [`EventId`]s.
///
/// Pre-incrementing: the first allocation returns 1, so 0 stays reserved.
/// Backed by an atomic so a multi-threaded host cannot break the uniqueness
/// invariant; wrap-around of the u32 space is out of scope.
#[derive(Debug, Default)]
pub struct EventIdAllocator {
    next: AtomicU32,
}

impl EventIdAllocator {
    /// Create an allocator whose first id will be 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn allocate(&self) -> EventId {
        EventId(self.next.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

/// Find the active request carrying `id` under `key` in its property bag.
///
/// Linear scan over the engine's active set. Id 0 short-circuits to `None`
/// without scanning.
pub fn lookup_request(
    engine: &dyn FeedbackEngine,
    key: &str,
    id: EventId,
) -> Option<RequestRef> {
    if id.is_none() {
        return None;
    }

    engine
        .active_requests()
        .into_iter()
        .find(|request| request.properties().uint(key) == Some(id.as_u32()))
}

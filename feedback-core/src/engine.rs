//! Trait seams between the control bridge and a feedback engine
//!
//! [`FeedbackEngine`] is the surface the bridge drives: request lifecycle
//! operations plus read access to the engine's active set and registered
//! sinks. [`EngineObserver`] and [`SinkFilter`] point the other way: the
//! engine calls back into them after playback settles and before a request's
//! sinks are finalized.
//!
//! All seams are synchronous: the bridge confines protocol handling to one
//! control task and no engine call is allowed to block.

use std::time::Duration;

use crate::error::EngineResult;
use crate::request::RequestRef;
use crate::sink::SinkRef;

/// Playback surface of a feedback engine.
pub trait FeedbackEngine: Send + Sync {
    /// Start playing a request, or resume it if the engine already holds it.
    ///
    /// Resume reuses this entry point: playing an already-active request must
    /// be treated as resume by the engine.
    fn play(&self, request: &RequestRef) -> EngineResult<()>;

    /// Pause an active request.
    fn pause(&self, request: &RequestRef) -> EngineResult<()>;

    /// Stop a request, optionally after `delay` has elapsed engine-side.
    fn stop(&self, request: &RequestRef, delay: Duration) -> EngineResult<()>;

    /// Snapshot of every request the engine currently holds.
    ///
    /// The engine is the sole owner of this set; callers scan it on demand
    /// and never cache the result.
    fn active_requests(&self) -> Vec<RequestRef>;

    /// Every sink registered with the engine.
    fn sinks(&self) -> Vec<SinkRef>;
}

/// Callbacks the engine invokes once a request settles.
pub trait EngineObserver: Send + Sync {
    /// The request failed; `message` is the engine's diagnostic text.
    fn on_request_failed(&self, request: &RequestRef, message: &str);

    /// The request completed with the engine's result `code`.
    fn on_request_completed(&self, request: &RequestRef, code: u32);
}

/// Hook the engine invokes before finalizing which sinks render a request.
pub trait SinkFilter: Send + Sync {
    /// Return the subset of `candidates` that should render `request`.
    fn filter_sinks(&self, request: &RequestRef, candidates: Vec<SinkRef>) -> Vec<SinkRef>;
}

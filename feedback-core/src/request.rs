//! Feedback request handles
//!
//! A request is one instance of a feedback event being played: a
//! classification name (e.g. "ringtone") plus the property bag it was
//! submitted with. The bridge constructs a request and hands it to the
//! engine, which owns it for its entire life; everyone else holds
//! [`RequestRef`] clones.

use std::sync::Arc;

use crate::proplist::PropList;

/// Shared handle to an engine-owned request.
pub type RequestRef = Arc<Request>;

/// A feedback request: event name plus its properties.
///
/// Immutable after construction; anything that must be visible on the
/// request later (like the correlation id) goes into the property bag before
/// `Request::new`.
#[derive(Debug)]
pub struct Request {
    name: String,
    properties: PropList,
}

impl Request {
    /// Create a request from an event name and its decoded properties.
    pub fn new(name: impl Into<String>, properties: PropList) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    /// The classification name of the event ("ringtone", "alarm", ...).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read-only view of the request's properties.
    pub fn properties(&self) -> &PropList {
        &self.properties
    }
}

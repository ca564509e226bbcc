//! Logical wire message model
//!
//! The transport decodes bus frames into these types before they reach the
//! bridge, and frames [`Outbound`] values on the way back. Dispatch works on
//! closed enums rather than raw string comparison, but every string visible
//! on the wire (interface names, member names, error texts) is preserved
//! exactly by the layers above.

/// A single decoded argument value.
///
/// The variant set is wider than what property bags accept: `Uint64`,
/// `Double` and nested `Dict` values legitimately appear on the wire and are
/// skipped by the property codec rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// UTF-8 string
    Str(String),
    /// Unsigned 32-bit integer
    Uint32(u32),
    /// Signed 32-bit integer
    Int32(i32),
    /// Boolean
    Bool(bool),
    /// Unsigned 64-bit integer (not representable in a property bag)
    Uint64(u64),
    /// Double-precision float (not representable in a property bag)
    Double(f64),
    /// Dictionary of keyed variant entries
    Dict(Vec<DictEntry>),
}

/// One entry of a wire dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct DictEntry {
    /// Entry key
    pub key: String,
    /// Entry value, any wire type
    pub value: WireValue,
}

impl DictEntry {
    /// Create a dictionary entry.
    pub fn new(key: impl Into<String>, value: WireValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// An inbound method call awaiting a reply.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    /// Transport-assigned token correlating the eventual reply to this call
    pub serial: u32,
    /// Interface the call was addressed to
    pub interface: String,
    /// Method member name
    pub member: String,
    /// Decoded arguments in wire order
    pub args: Vec<WireValue>,
}

/// An inbound broadcast signal. Signals carry no reply expectation.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalMessage {
    /// Interface the signal belongs to
    pub interface: String,
    /// Signal member name
    pub member: String,
    /// Decoded arguments in wire order
    pub args: Vec<WireValue>,
}

/// Any message the transport hands to the bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum BusMessage {
    /// Method call expecting a reply
    MethodCall(MethodCall),
    /// Broadcast signal
    Signal(SignalMessage),
}

/// Everything the bridge sends back toward the bus.
///
/// Sends are fire-and-forget: the protocol state has already advanced by the
/// time one of these is emitted, so a transport failure is logged by the
/// sender and never retried.
#[derive(Debug, Clone, PartialEq)]
pub enum Outbound {
    /// Successful method reply carrying the event id
    Ack {
        /// Serial of the call being answered
        serial: u32,
        /// Correlation id assigned to (or echoed for) the request
        event_id: u32,
    },
    /// Error method reply
    Error {
        /// Serial of the call being answered
        serial: u32,
        /// Single-string error message
        message: String,
    },
    /// Asynchronous status signal for a settled request
    Status {
        /// Correlation id of the request
        event_id: u32,
        /// Result code: 0 for failures, engine-supplied otherwise
        code: u32,
    },
}

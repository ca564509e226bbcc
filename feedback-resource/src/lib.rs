//! Resource-flag based sink filtering
//!
//! Requests may carry up to four boolean resource flags (`media.audio`,
//! `media.vibra`, `media.leds`, `media.backlight`) declaring which output
//! classes they want. A [`ResourceFilter`] maps each flag to at most one
//! concrete sink (configured once at startup) and drops the sinks of
//! disabled flags from a request's candidate list before dispatch:
//!
//! 1. No flag present in the request: every sink stays enabled.
//! 2. Any flag present: the request switches to explicit mode, where only flags
//!    set to `true` stay enabled, everything else is forced disabled.
//!
//! Without any flag-to-sink mapping configured the filter stays permanently
//! disabled and passes every candidate list through untouched.

pub mod config;
pub mod filter;

pub use config::ResourceConfig;
pub use filter::ResourceFilter;

/// The closed set of resource flags a request may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Audible output
    Audio,
    /// Vibration output
    Vibra,
    /// LED patterns
    Leds,
    /// Display backlight
    Backlight,
}

impl ResourceKind {
    /// Every kind, in the canonical order used by mapping tables.
    pub const ALL: [ResourceKind; 4] = [
        ResourceKind::Audio,
        ResourceKind::Vibra,
        ResourceKind::Leds,
        ResourceKind::Backlight,
    ];

    /// The request property key carrying this flag.
    pub fn property_key(self) -> &'static str {
        match self {
            ResourceKind::Audio => "media.audio",
            ResourceKind::Vibra => "media.vibra",
            ResourceKind::Leds => "media.leds",
            ResourceKind::Backlight => "media.backlight",
        }
    }

    /// Position of this kind in [`ResourceKind::ALL`] and mapping tables.
    pub(crate) fn index(self) -> usize {
        match self {
            ResourceKind::Audio => 0,
            ResourceKind::Vibra => 1,
            ResourceKind::Leds => 2,
            ResourceKind::Backlight => 3,
        }
    }
}

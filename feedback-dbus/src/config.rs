//! Configuration for the control protocol bridge
//!
//! Defaults preserve the wire contract existing clients depend on: the
//! interface, bus and path names, the reserved correlation property key, and
//! the ringtone grace period. Hosts normally run with `BridgeConfig::default()`
//! and override individual fields only in tests or migrations.

use std::time::Duration;

use crate::error::{ProtocolError, ProtocolResult};

/// Method member name for starting a request.
pub const METHOD_PLAY: &str = "Play";
/// Method member name for stopping a request.
pub const METHOD_STOP: &str = "Stop";
/// Method member name for pausing or resuming a request.
pub const METHOD_PAUSE: &str = "Pause";

/// Interface and member carrying the `NameOwnerChanged` liveness signal.
pub const DBUS_SERVICE_INTERFACE: &str = "org.freedesktop.DBus";
/// Member name of the bus ownership-change signal.
pub const NAME_OWNER_CHANGED: &str = "NameOwnerChanged";

/// Configuration for a [`BridgeService`](crate::service::BridgeService).
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Interface the control methods live on
    /// Default: "com.nokia.NonGraphicFeedback1"
    pub interface: String,

    /// Well-known bus name the transport claims
    /// Default: "com.nokia.NonGraphicFeedback1.Backend"
    pub bus_name: String,

    /// Object path the control interface is exported at
    /// Default: "/com/nokia/NonGraphicFeedback1"
    pub object_path: String,

    /// Member name of the outbound status signal
    /// Default: "Status"
    pub status_member: String,

    /// Peer whose bus-name ownership changes trigger a mass cancel
    /// Default: "org.freedesktop.ohm"
    pub watched_peer: String,

    /// Reserved property key the correlation id is stored under
    /// Default: "dbus.event.id"
    pub event_id_key: String,

    /// Event class that stops via pause plus delayed stop
    /// Default: "ringtone"
    pub ringtone_event: String,

    /// Grace period between pausing a ringtone and stopping it
    /// Default: 200 ms
    pub ringtone_stop_timeout: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            interface: "com.nokia.NonGraphicFeedback1".to_string(),
            bus_name: "com.nokia.NonGraphicFeedback1.Backend".to_string(),
            object_path: "/com/nokia/NonGraphicFeedback1".to_string(),
            status_member: "Status".to_string(),
            watched_peer: "org.freedesktop.ohm".to_string(),
            event_id_key: "dbus.event.id".to_string(),
            ringtone_event: "ringtone".to_string(),
            ringtone_stop_timeout: Duration::from_millis(200),
        }
    }
}

impl BridgeConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the watched upstream peer name.
    pub fn with_watched_peer(mut self, peer: impl Into<String>) -> Self {
        self.watched_peer = peer.into();
        self
    }

    /// Override the ringtone grace period.
    pub fn with_ringtone_stop_timeout(mut self, timeout: Duration) -> Self {
        self.ringtone_stop_timeout = timeout;
        self
    }

    /// Override the correlation property key.
    pub fn with_event_id_key(mut self, key: impl Into<String>) -> Self {
        self.event_id_key = key.into();
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ProtocolResult<()> {
        if self.interface.is_empty() {
            return Err(ProtocolError::Configuration(
                "interface must not be empty".to_string(),
            ));
        }

        if self.event_id_key.is_empty() {
            return Err(ProtocolError::Configuration(
                "event id property key must not be empty".to_string(),
            ));
        }

        if self.ringtone_event.is_empty() {
            return Err(ProtocolError::Configuration(
                "ringtone event class must not be empty".to_string(),
            ));
        }

        if self.ringtone_stop_timeout == Duration::ZERO {
            return Err(ProtocolError::Configuration(
                "ringtone stop timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BridgeConfig::default();
        assert_eq!(config.interface, "com.nokia.NonGraphicFeedback1");
        assert_eq!(config.bus_name, "com.nokia.NonGraphicFeedback1.Backend");
        assert_eq!(config.object_path, "/com/nokia/NonGraphicFeedback1");
        assert_eq!(config.status_member, "Status");
        assert_eq!(config.watched_peer, "org.freedesktop.ohm");
        assert_eq!(config.event_id_key, "dbus.event.id");
        assert_eq!(config.ringtone_event, "ringtone");
        assert_eq!(config.ringtone_stop_timeout, Duration::from_millis(200));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_method_member_names() {
        assert_eq!(METHOD_PLAY, "Play");
        assert_eq!(METHOD_STOP, "Stop");
        assert_eq!(METHOD_PAUSE, "Pause");
        assert_eq!(NAME_OWNER_CHANGED, "NameOwnerChanged");
    }

    #[test]
    fn test_config_validation() {
        let invalid = BridgeConfig {
            interface: String::new(),
            ..Default::default()
        };
        assert!(invalid.validate().is_err());

        let invalid = BridgeConfig {
            event_id_key: String::new(),
            ..Default::default()
        };
        assert!(invalid.validate().is_err());

        let invalid = BridgeConfig {
            ringtone_stop_timeout: Duration::ZERO,
            ..Default::default()
        };
        assert!(invalid.validate().is_err());
    }

    #[test]
    fn test_builder_pattern() {
        let config = BridgeConfig::new()
            .with_watched_peer("org.example.policyd")
            .with_ringtone_stop_timeout(Duration::from_millis(500))
            .with_event_id_key("bridge.event.id");

        assert_eq!(config.watched_peer, "org.example.policyd");
        assert_eq!(config.ringtone_stop_timeout, Duration::from_millis(500));
        assert_eq!(config.event_id_key, "bridge.event.id");
        assert!(config.validate().is_ok());
    }
}

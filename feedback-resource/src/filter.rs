//! The sink filter itself
//!
//! Built once after startup, when the engine's sinks and the host's
//! flag-to-sink configuration are both available; consulted by the engine
//! for every request before its sinks are finalized. Decisions are computed
//! fresh per request; the filter keeps no cross-request state.

use std::sync::Arc;

use feedback_core::{RequestRef, SinkFilter, SinkRef};

use crate::config::ResourceConfig;
use crate::ResourceKind;

/// Drops the sinks of disabled resource flags from candidate lists.
pub struct ResourceFilter {
    sink_map: [Option<SinkRef>; 4],
    enabled: bool,
}

impl ResourceFilter {
    /// A filter that passes every candidate list through untouched.
    pub fn disabled() -> Self {
        Self {
            sink_map: [None, None, None, None],
            enabled: false,
        }
    }

    /// Resolve `config` against the registered `sinks`.
    ///
    /// An empty config leaves the filter permanently disabled. Otherwise the
    /// filter is enabled as soon as at least one flag resolves to a real
    /// sink; configured names that match no sink are logged and ignored.
    pub fn new(config: &ResourceConfig, sinks: &[SinkRef]) -> Self {
        if config.is_empty() {
            tracing::warn!(
                "filtering sinks by resources disabled, no mapping defined from flag to sink"
            );
            return Self::disabled();
        }

        let mut sink_map: [Option<SinkRef>; 4] = [None, None, None, None];
        let mut has_one = false;

        for kind in ResourceKind::ALL {
            let Some(name) = config.sink_name(kind) else {
                continue;
            };

            match lookup_sink_by_name(sinks, name) {
                Some(sink) => {
                    sink_map[kind.index()] = Some(sink);
                    has_one = true;
                }
                None => {
                    tracing::warn!(
                        "no sink named '{}' registered for resource '{}'",
                        name,
                        kind.property_key()
                    );
                }
            }
        }

        Self {
            sink_map,
            enabled: has_one,
        }
    }

    /// Whether any flag resolved to a sink at construction time.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

fn lookup_sink_by_name(sinks: &[SinkRef], name: &str) -> Option<SinkRef> {
    sinks.iter().find(|sink| sink.name() == name).cloned()
}

impl SinkFilter for ResourceFilter {
    fn filter_sinks(&self, request: &RequestRef, mut candidates: Vec<SinkRef>) -> Vec<SinkRef> {
        if !self.enabled {
            tracing::debug!("filtering sinks by resource is disabled");
            return candidates;
        }

        tracing::debug!("filter sinks for request '{}'", request.name());

        let properties = request.properties();
        let mut force_enabled = false;
        let mut enabled = [false; 4];

        for kind in ResourceKind::ALL {
            if properties.contains(kind.property_key()) {
                force_enabled = true;
                // A present flag with a non-boolean value counts as false.
                enabled[kind.index()] = properties.bool(kind.property_key()).unwrap_or(false);
            }
        }

        for kind in ResourceKind::ALL {
            let Some(sink) = &self.sink_map[kind.index()] else {
                continue;
            };

            tracing::debug!(
                "resource {}{} for '{}' with sink '{}'",
                if force_enabled { "forced " } else { "" },
                if force_enabled && !enabled[kind.index()] {
                    "disabled"
                } else {
                    "enabled"
                },
                kind.property_key(),
                sink.name()
            );

            if force_enabled && !enabled[kind.index()] {
                candidates.retain(|candidate| !Arc::ptr_eq(candidate, sink));
            }
        }

        candidates
    }
}

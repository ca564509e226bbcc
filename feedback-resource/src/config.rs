//! Flag-to-sink mapping configuration
//!
//! Hosts build a [`ResourceConfig`] from their configuration source (for
//! example a `[resource]` section mapping `media.audio` to a sink name) and
//! hand it to [`ResourceFilter::new`](crate::ResourceFilter::new) once the
//! engine's sinks are registered. An empty config disables filtering
//! entirely.

use std::collections::HashMap;

use crate::ResourceKind;

/// Mapping from resource flags to configured sink names.
#[derive(Debug, Clone, Default)]
pub struct ResourceConfig {
    mappings: HashMap<ResourceKind, String>,
}

impl ResourceConfig {
    /// Create an empty mapping (filtering disabled).
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `kind` to the sink registered under `sink_name`.
    pub fn map(mut self, kind: ResourceKind, sink_name: impl Into<String>) -> Self {
        self.mappings.insert(kind, sink_name.into());
        self
    }

    /// The sink name configured for `kind`, if any.
    pub fn sink_name(&self, kind: ResourceKind) -> Option<&str> {
        self.mappings.get(&kind).map(String::as_str)
    }

    /// Whether no flag is mapped at all.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

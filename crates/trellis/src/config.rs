//! Configuration types for Trellis processing.
//!
//! This module provides the configuration structure that controls the
//! metadata projection. All types implement [`serde::Deserialize`] for
//! loading from external sources (the CLI loads them from TOML).
//!
//! # Example
//!
//! ```
//! # use trellis::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert_eq!(config.meta_order().len(), 7);
//! ```

use serde::Deserialize;

/// The class-name priority order used by the metadata projection.
///
/// This ordering is an external contract with a downstream consumer of the
/// metadata file: records are emitted in exactly this order, classes absent
/// from the model are skipped, and classes outside this list are never
/// emitted.
pub const DEFAULT_CLASS_ORDER: [&str; 7] =
    ["MetricJob", "CPLANE", "MGMT", "RU", "HWE", "COMM", "BTS"];

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Class-name priority order for the metadata projection.
    #[serde(default = "default_meta_order")]
    meta_order: Vec<String>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified metadata order.
    pub fn new(meta_order: Vec<String>) -> Self {
        Self { meta_order }
    }

    /// Returns the metadata projection order.
    pub fn meta_order(&self) -> &[String] {
        &self.meta_order
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            meta_order: default_meta_order(),
        }
    }
}

fn default_meta_order() -> Vec<String> {
    DEFAULT_CLASS_ORDER.iter().map(|s| s.to_string()).collect()
}

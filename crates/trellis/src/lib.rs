//! Trellis - class-model processing and configuration snapshot deltas.
//!
//! Trellis ingests a UML-like class model expressed as XML and renders it as
//! a nested hierarchy rooted at the model's root class, plus an ordered
//! metadata projection of selected classes. Independently, it diffs and
//! patches flat JSON configuration snapshots.

pub mod config;
pub mod export;
pub mod snapshot;

mod error;

pub use trellis_core::{model, snapshot::ConfigMapping, snapshot::Delta};
pub use trellis_parser::ParseError;

pub use error::TrellisError;

use log::{debug, info, trace};

use config::AppConfig;
use export::meta::ClassMeta;
use trellis_core::model::ModelGraph;

/// Builder for processing Trellis class models.
///
/// This provides an API for turning model markup into a graph and the graph
/// into its two output artifacts.
///
/// # Examples
///
/// ```
/// use trellis::{ModelBuilder, config::AppConfig};
///
/// let markup = r#"
///     <Model>
///         <Class name="BTS" isRoot="true">
///             <Attribute name="id" type="uint32"/>
///         </Class>
///     </Model>"#;
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = ModelBuilder::new(config);
///
/// // Parse markup to a model graph
/// let graph = builder.parse(markup)
///     .expect("Failed to parse");
///
/// // Render the graph as a nested hierarchy
/// let hierarchy = builder.render_hierarchy(&graph)
///     .expect("Failed to render");
/// assert!(hierarchy.contains("<BTS>"));
///
/// // Or use default config
/// let builder = ModelBuilder::default();
/// ```
#[derive(Default)]
pub struct ModelBuilder {
    config: AppConfig,
}

impl ModelBuilder {
    /// Create a new model builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration, including the metadata
    ///   projection order
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// The configuration this builder was created with.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse model markup into a validated graph.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError` for malformed markup or a model with no root
    /// class.
    pub fn parse(&self, markup: &str) -> Result<ModelGraph, TrellisError> {
        info!("Parsing model");

        let graph = trellis_parser::parse(markup)?;

        debug!("Model parsed successfully");
        trace!(graph:?; "Parsed model graph");

        Ok(graph)
    }

    /// Render the graph as a nested hierarchy rooted at the model's root
    /// class.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError` if the root class is absent from the graph or
    /// the aggregation edges form a cycle.
    pub fn render_hierarchy(&self, graph: &ModelGraph) -> Result<String, TrellisError> {
        info!(root = graph.root(); "Rendering hierarchy");

        let rendered = export::xml::render(graph, graph.root())?;

        debug!("Hierarchy rendered successfully");
        Ok(rendered)
    }

    /// Project the graph into its metadata records, in the configured
    /// priority order.
    pub fn project_meta(&self, graph: &ModelGraph) -> Vec<ClassMeta> {
        export::meta::project(graph, self.config.meta_order())
    }

    /// Project the graph into metadata records and encode them as a
    /// pretty-printed JSON document.
    ///
    /// # Errors
    ///
    /// Returns `TrellisError` if JSON encoding fails.
    pub fn meta_json(&self, graph: &ModelGraph) -> Result<String, TrellisError> {
        let records = self.project_meta(graph);
        debug!(records = records.len(); "Projected metadata");

        Ok(snapshot::to_pretty_json(&records)?)
    }
}

//! Topogram - declarative architecture diagrams rendered through Graphviz.
//!
//! Diagrams are declared programmatically with the semantic model types
//! (nodes, edges, and nested clusters), validated, lowered to Graphviz DOT,
//! and rendered to PNG or SVG by the external `dot` binary.

pub mod config;

mod error;
mod export;
mod structure;

pub use topogram_core::{color, identifier, semantic, style};

pub use error::TopogramError;
pub use export::OutputFormat;

use std::{fs, path::Path};

use log::{debug, info};

use config::AppConfig;
use structure::DiagramHierarchy;

/// Renderer for semantic diagrams.
///
/// This provides an API for processing a declared diagram through the
/// validation, DOT export, and Graphviz rendering stages.
///
/// # Examples
///
/// ```rust,no_run
/// use topogram::{
///     DiagramRenderer, OutputFormat,
///     config::AppConfig,
///     identifier::Id,
///     semantic::{Diagram, Element, Node, Scope},
///     style::NodeKind,
/// };
///
/// let api = Id::new("api");
/// let diagram = Diagram::new(
///     "Service overview",
///     Scope::new(vec![Element::Node(Node::new(api, "API service", NodeKind::Service))]),
/// );
///
/// let renderer = DiagramRenderer::new(AppConfig::default());
///
/// // Inspect the generated DOT source
/// let dot = renderer.dot_source(&diagram).expect("Failed to export");
///
/// // Or render straight to a PNG file
/// renderer
///     .render_to_file(&diagram, OutputFormat::Png, "service_overview.png")
///     .expect("Failed to render");
/// ```
#[derive(Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Create a new renderer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Graph, node, edge, and style attribute settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Export a diagram as Graphviz DOT source text.
    ///
    /// This validates the diagram's structure and lowers it to DOT without
    /// invoking Graphviz, so it works with no Graphviz installation.
    ///
    /// # Errors
    ///
    /// Returns `TopogramError` for structural errors (duplicate node ids,
    /// edges referencing undeclared nodes) or invalid configured colors.
    pub fn dot_source(&self, diagram: &semantic::Diagram) -> Result<String, TopogramError> {
        info!(diagram_title = diagram.title(); "Building diagram structure");
        let hierarchy = DiagramHierarchy::from_diagram(diagram)?;
        debug!(
            nodes = hierarchy.node_count(),
            edges = hierarchy.edge_count();
            "Structure built"
        );

        let source = export::to_dot_source(&hierarchy, &self.config)?;
        debug!(source_len = source.len(); "DOT source generated");
        Ok(source)
    }

    /// Render a diagram to output bytes in the requested format.
    ///
    /// For [`OutputFormat::Dot`] this returns the DOT source; for PNG and
    /// SVG the external Graphviz `dot` binary performs layout and
    /// rasterization.
    ///
    /// # Errors
    ///
    /// Returns `TopogramError` for structural errors or a failed Graphviz
    /// invocation (for example, Graphviz not being installed).
    pub fn render(
        &self,
        diagram: &semantic::Diagram,
        format: OutputFormat,
    ) -> Result<Vec<u8>, TopogramError> {
        let source = self.dot_source(diagram)?;

        info!(format = format.extension(); "Rendering diagram");
        let bytes = export::render_bytes(source, format)?;
        info!(output_len = bytes.len(); "Diagram rendered");
        Ok(bytes)
    }

    /// Render a diagram and write it to a file.
    ///
    /// Exactly one output file is written; on error nothing is written.
    ///
    /// # Errors
    ///
    /// Returns `TopogramError` for rendering failures or file I/O errors.
    pub fn render_to_file(
        &self,
        diagram: &semantic::Diagram,
        format: OutputFormat,
        path: impl AsRef<Path>,
    ) -> Result<(), TopogramError> {
        let path = path.as_ref();
        let bytes = self.render(diagram, format)?;
        fs::write(path, bytes)?;

        info!(output_file = path.display().to_string(); "Output file written");
        Ok(())
    }
}

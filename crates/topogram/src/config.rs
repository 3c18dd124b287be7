//! Configuration types for Topogram diagram rendering.
//!
//! This module provides configuration structures that control the Graphviz
//! attributes applied to rendered diagrams. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining graph, node, edge, and style settings.
//! - [`GraphConfig`] - Graph-level layout attributes (`nodesep`, `ranksep`, ...).
//! - [`NodeConfig`] / [`EdgeConfig`] - Default attributes for all nodes / edges.
//! - [`StyleConfig`] - Background color and the cluster background palette.
//!
//! Attribute values are kept as strings because that is what the Graphviz
//! attribute grammar consumes; defaults reproduce the attribute set the
//! diagrams were originally published with.
//!
//! # Example
//!
//! ```
//! # use topogram::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.graph().nodesep(), "0.2");
//! assert!(config.style().background_color().expect("valid default").is_none());
//! ```

use serde::Deserialize;

use topogram_core::color::Color;

/// Top-level configuration combining graph, node, edge, and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Graph-level attribute section.
    #[serde(default)]
    graph: GraphConfig,

    /// Node default attribute section.
    #[serde(default)]
    node: NodeConfig,

    /// Edge default attribute section.
    #[serde(default)]
    edge: EdgeConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(graph: GraphConfig, node: NodeConfig, edge: EdgeConfig, style: StyleConfig) -> Self {
        Self {
            graph,
            node,
            edge,
            style,
        }
    }

    /// Returns the graph attribute configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }

    /// Returns the node attribute configuration.
    pub fn node(&self) -> &NodeConfig {
        &self.node
    }

    /// Returns the edge attribute configuration.
    pub fn edge(&self) -> &EdgeConfig {
        &self.edge
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Graph-level Graphviz attributes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Graph label. Empty by default so the image carries no caption.
    label: String,

    /// Minimum space between adjacent nodes in the same rank, in inches.
    nodesep: String,

    /// Padding between the drawing and the image border, in inches.
    pad: String,

    /// Minimum space between ranks, in inches.
    ranksep: String,

    /// Edge routing mode.
    splines: String,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            label: String::new(),
            nodesep: "0.2".to_string(),
            pad: "0.2".to_string(),
            ranksep: "0.75".to_string(),
            splines: "spline".to_string(),
        }
    }
}

impl GraphConfig {
    /// Creates a new [`GraphConfig`] from its attribute values.
    ///
    /// # Arguments
    ///
    /// * `label` - Graph caption; empty for none.
    /// * `nodesep` / `pad` / `ranksep` - Spacing attributes, in inches.
    /// * `splines` - Edge routing mode.
    pub fn new(
        label: impl Into<String>,
        nodesep: impl Into<String>,
        pad: impl Into<String>,
        ranksep: impl Into<String>,
        splines: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            nodesep: nodesep.into(),
            pad: pad.into(),
            ranksep: ranksep.into(),
            splines: splines.into(),
        }
    }

    /// The graph label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The `nodesep` attribute value.
    pub fn nodesep(&self) -> &str {
        &self.nodesep
    }

    /// The `pad` attribute value.
    pub fn pad(&self) -> &str {
        &self.pad
    }

    /// The `ranksep` attribute value.
    pub fn ranksep(&self) -> &str {
        &self.ranksep
    }

    /// The `splines` attribute value.
    pub fn splines(&self) -> &str {
        &self.splines
    }
}

/// Default Graphviz attributes applied to every node.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// Node label font size, in points.
    fontsize: String,

    /// Optional font name for node labels.
    fontname: Option<String>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            fontsize: "14.0".to_string(),
            fontname: None,
        }
    }
}

impl NodeConfig {
    /// Creates a new [`NodeConfig`] with the specified font settings.
    pub fn new(fontsize: impl Into<String>, fontname: Option<String>) -> Self {
        Self {
            fontsize: fontsize.into(),
            fontname,
        }
    }

    /// The node `fontsize` attribute value.
    pub fn fontsize(&self) -> &str {
        &self.fontsize
    }

    /// The node `fontname` attribute value, if configured.
    pub fn fontname(&self) -> Option<&str> {
        self.fontname.as_deref()
    }
}

/// Default Graphviz attributes applied to every edge.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EdgeConfig {
    /// Edge label font size, in points.
    fontsize: String,
}

impl Default for EdgeConfig {
    fn default() -> Self {
        Self {
            fontsize: "10.0".to_string(),
        }
    }
}

impl EdgeConfig {
    /// Creates a new [`EdgeConfig`] with the specified font size.
    pub fn new(fontsize: impl Into<String>) -> Self {
        Self {
            fontsize: fontsize.into(),
        }
    }

    /// The edge `fontsize` attribute value.
    pub fn fontsize(&self) -> &str {
        &self.fontsize
    }
}

/// Visual styling configuration for rendered diagrams.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Background color for the whole image, as a CSS color string.
    background_color: Option<String>,

    /// Background colors cycled through by cluster nesting depth.
    cluster_palette: Vec<String>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: None,
            cluster_palette: vec![
                "#E5F5FD".to_string(),
                "#EBF3E7".to_string(),
                "#ECE8F6".to_string(),
                "#FDF7E3".to_string(),
            ],
        }
    }
}

impl StyleConfig {
    /// Creates a new [`StyleConfig`] from a background color and a cluster palette.
    ///
    /// Colors are kept as strings and validated on access, matching the
    /// deserialized form.
    pub fn new(background_color: Option<String>, cluster_palette: Vec<String>) -> Self {
        Self {
            background_color,
            cluster_palette,
        }
    }

    /// Returns the validated background [`Color`], or `None` if not configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed into
    /// a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::new)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the validated cluster background palette.
    ///
    /// # Errors
    ///
    /// Returns an error if any palette entry cannot be parsed into a valid
    /// [`Color`], or if the palette is empty.
    pub fn cluster_palette(&self) -> Result<Vec<Color>, String> {
        if self.cluster_palette.is_empty() {
            return Err("Cluster palette in config must not be empty".to_string());
        }
        self.cluster_palette
            .iter()
            .map(|entry| Color::new(entry))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("Invalid cluster palette in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, EdgeConfig, GraphConfig, NodeConfig, StyleConfig};

    #[test]
    fn defaults_reproduce_published_attributes() {
        let config = AppConfig::default();
        assert_eq!(config.graph().label(), "");
        assert_eq!(config.graph().nodesep(), "0.2");
        assert_eq!(config.graph().pad(), "0.2");
        assert_eq!(config.graph().ranksep(), "0.75");
        assert_eq!(config.graph().splines(), "spline");
        assert_eq!(config.node().fontsize(), "14.0");
        assert_eq!(config.edge().fontsize(), "10.0");
    }

    #[test]
    fn config_is_constructible_programmatically() {
        let config = AppConfig::new(
            GraphConfig::new("Caption", "0.3", "0.1", "1.0", "ortho"),
            NodeConfig::new("12.0", Some("Helvetica".to_string())),
            EdgeConfig::new("9.0"),
            StyleConfig::new(Some("white".to_string()), vec!["#FFFFFF".to_string()]),
        );

        assert_eq!(config.graph().label(), "Caption");
        assert_eq!(config.graph().splines(), "ortho");
        assert_eq!(config.node().fontname(), Some("Helvetica"));
        assert_eq!(config.edge().fontsize(), "9.0");
        assert!(config.style().background_color().expect("valid").is_some());
        assert_eq!(config.style().cluster_palette().expect("valid").len(), 1);
    }

    #[test]
    fn default_palette_is_valid() {
        let palette = StyleConfig::default()
            .cluster_palette()
            .expect("default palette should parse");
        assert_eq!(palette.len(), 4);
    }

    #[test]
    fn invalid_background_color_is_reported() {
        let config: AppConfig = toml::from_str::<AppConfig>(
            r#"
            [style]
            background_color = "not-a-color"
            "#,
        )
        .expect("deserialization itself succeeds");
        assert!(config.style().background_color().is_err());
    }

    #[test]
    fn partial_config_fills_in_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [graph]
            ranksep = "1.5"
            "#,
        )
        .expect("partial config should deserialize");
        assert_eq!(config.graph().ranksep(), "1.5");
        assert_eq!(config.graph().nodesep(), "0.2");
    }
}

//! Visual style definitions for diagram elements.
//!
//! Nodes carry a [`NodeKind`] picking a visual category (shape and fill),
//! edges carry an [`EdgeDirection`] and an [`EdgeStyle`], and clusters carry
//! a [`ClusterStyle`]. The categories replace provider-specific icon sets:
//! each kind maps onto plain Graphviz shape and fill attributes, so no icon
//! assets are bundled.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Visual category for a node in an architecture diagram.
///
/// Kinds describe what the depicted infrastructure component *is* (a client,
/// a service, a database, ...) and determine the Graphviz shape and fill used
/// to draw it. The names match external configuration strings (snake_case).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// An external client or end user.
    Client,
    /// A deployed service or API (default).
    #[default]
    Service,
    /// A load balancer or ingress.
    LoadBalancer,
    /// A relational database.
    Database,
    /// An object or document store.
    Datastore,
    /// A persistent disk or volume.
    Disk,
}

impl NodeKind {
    /// Graphviz `shape` attribute for this kind.
    pub fn shape(self) -> &'static str {
        match self {
            NodeKind::Client => "oval",
            NodeKind::Service => "box",
            NodeKind::LoadBalancer => "hexagon",
            NodeKind::Database => "cylinder",
            NodeKind::Datastore => "folder",
            NodeKind::Disk => "box3d",
        }
    }

    /// Graphviz `style` attribute for this kind.
    pub fn draw_style(self) -> &'static str {
        match self {
            NodeKind::Service => "rounded,filled",
            _ => "filled",
        }
    }

    /// Graphviz `fillcolor` attribute for this kind.
    pub fn fill_color(self) -> &'static str {
        match self {
            NodeKind::Client => "#ECECEC",
            NodeKind::Service => "#C3D7EE",
            NodeKind::LoadBalancer => "#FAD8A1",
            NodeKind::Database => "#D5E8D4",
            NodeKind::Datastore => "#FFE6CC",
            NodeKind::Disk => "#E1D5E7",
        }
    }
}

impl FromStr for NodeKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "client" => Ok(Self::Client),
            "service" => Ok(Self::Service),
            "load_balancer" => Ok(Self::LoadBalancer),
            "database" => Ok(Self::Database),
            "datastore" => Ok(Self::Datastore),
            "disk" => Ok(Self::Disk),
            _ => Err("Unsupported node kind"),
        }
    }
}

impl From<NodeKind> for &'static str {
    fn from(val: NodeKind) -> Self {
        match val {
            NodeKind::Client => "client",
            NodeKind::Service => "service",
            NodeKind::LoadBalancer => "load_balancer",
            NodeKind::Database => "database",
            NodeKind::Datastore => "datastore",
            NodeKind::Disk => "disk",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s: &'static str = (*self).into();
        write!(f, "{s}")
    }
}

/// Direction of an edge between two nodes.
///
/// The variants mirror the connection operators of declarative diagram
/// scripts: forward (`>>`), reverse (`<<`), undirected (`-`), and
/// bidirectional.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeDirection {
    /// Arrowhead at the target (default).
    #[default]
    Forward,
    /// Arrowhead at the source.
    Reverse,
    /// No arrowheads.
    Undirected,
    /// Arrowheads at both ends.
    Bidirectional,
}

impl EdgeDirection {
    /// Graphviz `dir` attribute value, or `None` for the Graphviz default.
    pub fn dot_dir(self) -> Option<&'static str> {
        match self {
            EdgeDirection::Forward => None,
            EdgeDirection::Reverse => Some("back"),
            EdgeDirection::Undirected => Some("none"),
            EdgeDirection::Bidirectional => Some("both"),
        }
    }
}

/// Line style for an edge.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLine {
    /// Solid line (default).
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl EdgeLine {
    /// Graphviz `style` attribute value, or `None` for the Graphviz default.
    pub fn dot_style(self) -> Option<&'static str> {
        match self {
            EdgeLine::Solid => None,
            EdgeLine::Dashed => Some("dashed"),
            EdgeLine::Dotted => Some("dotted"),
        }
    }
}

/// Visual style for an edge: line style and optional stroke color.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EdgeStyle {
    line: EdgeLine,
    color: Option<Color>,
}

impl EdgeStyle {
    /// Creates a new edge style.
    pub fn new(line: EdgeLine, color: Option<Color>) -> Self {
        Self { line, color }
    }

    /// The line style.
    pub fn line(&self) -> EdgeLine {
        self.line
    }

    /// The stroke color, if one is set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

/// Visual style for a cluster grouping box.
///
/// When no background color is set, the renderer picks one from the
/// configured cluster palette based on nesting depth.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ClusterStyle {
    background_color: Option<Color>,
}

impl ClusterStyle {
    /// Creates a cluster style with an explicit background color.
    pub fn new(background_color: Option<Color>) -> Self {
        Self { background_color }
    }

    /// The explicit background color, if one is set.
    pub fn background_color(&self) -> Option<&Color> {
        self.background_color.as_ref()
    }
}

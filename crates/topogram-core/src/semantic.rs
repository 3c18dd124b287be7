//! Semantic diagram model types.
//!
//! This module contains the declarative representation of an architecture
//! diagram: labeled nodes grouped into nested clusters, connected by labeled
//! edges. The model is transient draw-time data; it carries no behavior of
//! the depicted systems and exists only to be validated, lowered to Graphviz
//! DOT, and rendered.
//!
//! # Pipeline Position
//!
//! ```text
//! Rust declarations (these types)
//!     ↓ structure
//! Validated hierarchy (DiagramHierarchy)
//!     ↓ export
//! DOT graph
//!     ↓ graphviz
//! PNG / SVG
//! ```

use std::fmt;

use crate::{
    identifier::Id,
    style::{ClusterStyle, EdgeDirection, EdgeStyle, NodeKind},
};

/// A scope containing a sequence of diagram elements.
///
/// A scope is the container for nodes, clusters, and edges, and forms the
/// building block for both the top-level diagram and nested clusters.
/// Elements keep their declaration order so exports are deterministic.
#[derive(Debug, Clone, Default)]
pub struct Scope {
    elements: Vec<Element>,
}

impl Scope {
    /// Create a new Scope from a list of elements.
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Borrow the elements contained in this scope.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

/// A single element of a diagram scope.
#[derive(Debug, Clone)]
pub enum Element {
    Node(Node),
    Cluster(Cluster),
    Edge(Edge),
}

/// A diagram node: a labeled box representing an infrastructure component.
#[derive(Debug, Clone)]
pub struct Node {
    id: Id,
    label: String,
    kind: NodeKind,
}

impl Node {
    /// Create a new Node with its identifier, display label, and visual kind.
    pub fn new(id: Id, label: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id,
            label: label.into(),
            kind,
        }
    }

    /// Get the node identifier.
    pub fn id(&self) -> Id {
        self.id
    }

    /// The display label drawn inside the node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The visual category of the node.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A named grouping box nesting related elements.
///
/// Clusters are purely visual: they affect the rendered layout but carry no
/// connectivity of their own. Clusters may nest arbitrarily.
#[derive(Debug, Clone)]
pub struct Cluster {
    label: String,
    style: ClusterStyle,
    scope: Scope,
}

impl Cluster {
    /// Create a new Cluster with its display label and contents.
    pub fn new(label: impl Into<String>, scope: Scope) -> Self {
        Self {
            label: label.into(),
            style: ClusterStyle::default(),
            scope,
        }
    }

    /// Replace the cluster's visual style.
    pub fn with_style(mut self, style: ClusterStyle) -> Self {
        self.style = style;
        self
    }

    /// The display label drawn on the grouping box.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The cluster's visual style.
    pub fn style(&self) -> &ClusterStyle {
        &self.style
    }

    /// Borrow the cluster's nested scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// An edge between two nodes, carrying direction, an optional label, and style.
#[derive(Debug, Clone)]
pub struct Edge {
    source: Id,
    target: Id,
    direction: EdgeDirection,
    label: Option<String>,
    style: EdgeStyle,
}

impl Edge {
    /// Create a new Edge between two node Ids with an optional label.
    pub fn new(source: Id, target: Id, direction: EdgeDirection, label: Option<String>) -> Self {
        Self {
            source,
            target,
            direction,
            label,
            style: EdgeStyle::default(),
        }
    }

    /// Replace the edge's visual style.
    pub fn with_style(mut self, style: EdgeStyle) -> Self {
        self.style = style;
        self
    }

    /// Get the source node Id of this edge.
    pub fn source(&self) -> Id {
        self.source
    }

    /// Get the target node Id of this edge.
    pub fn target(&self) -> Id {
        self.target
    }

    /// Get the direction of this edge.
    pub fn direction(&self) -> EdgeDirection {
        self.direction
    }

    /// The text label drawn along the edge, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The edge's visual style.
    pub fn style(&self) -> &EdgeStyle {
        &self.style
    }
}

/// A complete diagram: a title, an output stem, and a scope of elements.
///
/// The output stem names the file the rendered image is written to (without
/// extension). By default it is derived from the title the same way the
/// classic diagram scripting tools do: lowercased, whitespace joined with
/// underscores.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    output_stem: String,
    scope: Scope,
}

impl Diagram {
    /// Create a new Diagram with its title and content scope.
    pub fn new(title: impl Into<String>, scope: Scope) -> Self {
        let title = title.into();
        let output_stem = derive_output_stem(&title);
        Self {
            title,
            output_stem,
            scope,
        }
    }

    /// Replace the derived output stem with an explicit one.
    pub fn with_output_stem(mut self, stem: impl Into<String>) -> Self {
        self.output_stem = stem.into();
        self
    }

    /// The diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The output file stem (no extension).
    pub fn output_stem(&self) -> &str {
        &self.output_stem
    }

    /// Borrow the top-level scope.
    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

fn derive_output_stem(title: &str) -> String {
    title
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use crate::{
        identifier::Id,
        style::{EdgeDirection, NodeKind},
    };

    use super::{Diagram, Edge, Element, Node, Scope};

    #[test]
    fn output_stem_is_derived_from_title() {
        let diagram = Diagram::new("Image cutout service", Scope::default());
        assert_eq!(diagram.output_stem(), "image_cutout_service");
    }

    #[test]
    fn explicit_output_stem_overrides_derived() {
        let diagram =
            Diagram::new("Image cutout service", Scope::default()).with_output_stem("architecture");
        assert_eq!(diagram.output_stem(), "architecture");
        assert_eq!(diagram.title(), "Image cutout service");
    }

    #[test]
    fn scope_preserves_declaration_order() {
        let a = Id::new("a");
        let b = Id::new("b");
        let scope = Scope::new(vec![
            Element::Node(Node::new(a, "A", NodeKind::Service)),
            Element::Edge(Edge::new(a, b, EdgeDirection::Forward, None)),
            Element::Node(Node::new(b, "B", NodeKind::Database)),
        ]);

        let kinds: Vec<_> = scope
            .elements()
            .iter()
            .map(|element| match element {
                Element::Node(_) => "node",
                Element::Cluster(_) => "cluster",
                Element::Edge(_) => "edge",
            })
            .collect();
        assert_eq!(kinds, ["node", "edge", "node"]);
    }
}

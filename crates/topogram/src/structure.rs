//! Structural validation of the semantic model.
//!
//! Before a diagram is lowered to DOT, its scope tree is walked once to build
//! a flat, declaration-ordered index of nodes and edges. The walk enforces
//! the structural invariants the renderer relies on:
//!
//! - node identifiers are unique across the whole diagram, including inside
//!   nested clusters;
//! - every edge endpoint references a node that is declared somewhere in the
//!   diagram (edges may be declared before or after their endpoints);
//! - cluster labels are non-empty.
//!
//! Layout itself is Graphviz's job; no adjacency bookkeeping happens here.

use indexmap::IndexMap;

use topogram_core::{
    identifier::Id,
    semantic::{Diagram, Edge, Element, Node, Scope},
};

use crate::error::TopogramError;

/// A validated, flattened view of a diagram's scope tree.
///
/// Holds references into the diagram it was built from; the diagram must
/// outlive the hierarchy. Node order is declaration order, which keeps the
/// exported DOT deterministic.
#[derive(Debug)]
pub struct DiagramHierarchy<'a> {
    diagram: &'a Diagram,
    nodes: IndexMap<Id, &'a Node>,
    edges: Vec<&'a Edge>,
}

impl<'a> DiagramHierarchy<'a> {
    /// Build and validate the hierarchy for a diagram.
    ///
    /// # Errors
    ///
    /// Returns [`TopogramError::Graph`] for duplicate node identifiers,
    /// edges referencing undeclared nodes, or empty cluster labels.
    pub fn from_diagram(diagram: &'a Diagram) -> Result<Self, TopogramError> {
        let mut nodes = IndexMap::new();
        let mut edges = Vec::new();
        collect_scope(diagram.scope(), &mut nodes, &mut edges)?;

        for edge in &edges {
            for endpoint in [edge.source(), edge.target()] {
                if !nodes.contains_key(&endpoint) {
                    return Err(TopogramError::Graph(format!(
                        "edge references undeclared node '{endpoint}'"
                    )));
                }
            }
        }

        Ok(Self {
            diagram,
            nodes,
            edges,
        })
    }

    /// The diagram this hierarchy was built from.
    pub fn diagram(&self) -> &'a Diagram {
        self.diagram
    }

    /// Number of declared nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of declared edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

fn collect_scope<'a>(
    scope: &'a Scope,
    nodes: &mut IndexMap<Id, &'a Node>,
    edges: &mut Vec<&'a Edge>,
) -> Result<(), TopogramError> {
    for element in scope.elements() {
        match element {
            Element::Node(node) => {
                if nodes.insert(node.id(), node).is_some() {
                    return Err(TopogramError::Graph(format!(
                        "duplicate node identifier '{}'",
                        node.id()
                    )));
                }
            }
            Element::Cluster(cluster) => {
                if cluster.label().is_empty() {
                    return Err(TopogramError::Graph(
                        "cluster label must not be empty".to_string(),
                    ));
                }
                collect_scope(cluster.scope(), nodes, edges)?;
            }
            Element::Edge(edge) => edges.push(edge),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use topogram_core::{
        identifier::Id,
        semantic::{Cluster, Diagram, Edge, Element, Node, Scope},
        style::{EdgeDirection, NodeKind},
    };

    use crate::error::TopogramError;

    use super::DiagramHierarchy;

    fn node(name: &str) -> Element {
        Element::Node(Node::new(Id::new(name), name, NodeKind::Service))
    }

    #[test]
    fn collects_nodes_across_nested_clusters() {
        let inner = Cluster::new("Inner", Scope::new(vec![node("worker")]));
        let outer = Cluster::new(
            "Outer",
            Scope::new(vec![node("api"), Element::Cluster(inner)]),
        );
        let diagram = Diagram::new(
            "Nested",
            Scope::new(vec![
                node("user"),
                Element::Cluster(outer),
                Element::Edge(Edge::new(
                    Id::new("user"),
                    Id::new("worker"),
                    EdgeDirection::Forward,
                    None,
                )),
            ]),
        );

        let hierarchy = DiagramHierarchy::from_diagram(&diagram).expect("valid diagram");
        assert_eq!(hierarchy.node_count(), 3);
        assert_eq!(hierarchy.edge_count(), 1);
    }

    #[test]
    fn rejects_duplicate_node_ids() {
        let diagram = Diagram::new("Dup", Scope::new(vec![node("api"), node("api")]));

        let err = DiagramHierarchy::from_diagram(&diagram).unwrap_err();
        match err {
            TopogramError::Graph(msg) => assert!(msg.contains("duplicate")),
            other => panic!("expected Graph error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_edges_to_undeclared_nodes() {
        let diagram = Diagram::new(
            "Dangling",
            Scope::new(vec![
                node("api"),
                Element::Edge(Edge::new(
                    Id::new("api"),
                    Id::new("ghost"),
                    EdgeDirection::Forward,
                    None,
                )),
            ]),
        );

        let err = DiagramHierarchy::from_diagram(&diagram).unwrap_err();
        match err {
            TopogramError::Graph(msg) => assert!(msg.contains("ghost")),
            other => panic!("expected Graph error, got {other:?}"),
        }
    }

    #[test]
    fn edges_may_precede_their_endpoints() {
        let diagram = Diagram::new(
            "ForwardRef",
            Scope::new(vec![
                Element::Edge(Edge::new(
                    Id::new("a"),
                    Id::new("b"),
                    EdgeDirection::Forward,
                    None,
                )),
                node("a"),
                node("b"),
            ]),
        );

        assert!(DiagramHierarchy::from_diagram(&diagram).is_ok());
    }

    #[test]
    fn rejects_unlabeled_clusters() {
        let diagram = Diagram::new(
            "Anon",
            Scope::new(vec![Element::Cluster(Cluster::new(
                "",
                Scope::new(vec![node("api")]),
            ))]),
        );

        assert!(DiagramHierarchy::from_diagram(&diagram).is_err());
    }

    #[test]
    fn empty_diagrams_are_allowed() {
        let diagram = Diagram::new("Empty", Scope::default());
        let hierarchy = DiagramHierarchy::from_diagram(&diagram).expect("empty is fine");
        assert_eq!(hierarchy.node_count(), 0);
    }
}

//! Lowering of the semantic model to a Graphviz DOT graph.
//!
//! The lowering walks the diagram's scope tree in declaration order and
//! produces a `dot_structures::Graph`:
//!
//! - graph/node/edge default attributes come from [`AppConfig`];
//! - clusters become `subgraph cluster_N` blocks, numbered in encounter
//!   order, with a background color from the cluster's own style or the
//!   configured palette cycled by nesting depth;
//! - node kinds become `shape`/`style`/`fillcolor` attributes;
//! - edge directions become `dir` attributes.
//!
//! All labels and attribute values that can carry arbitrary text are emitted
//! as quoted DOT ids with `"` and `\` escaped, so identical input always
//! yields identical source.

use dot_generator::{attr, id};
use dot_structures::*;

use topogram_core::{color::Color, identifier, semantic, style::NodeKind};

use crate::{config::AppConfig, structure::DiagramHierarchy};

use super::Error;

/// Lower a validated hierarchy to a DOT graph.
pub(crate) fn lower(
    hierarchy: &DiagramHierarchy<'_>,
    config: &AppConfig,
) -> Result<Graph, Error> {
    let diagram = hierarchy.diagram();
    let background = config.style().background_color().map_err(Error::Render)?;
    let palette = config.style().cluster_palette().map_err(Error::Render)?;

    let mut stmts = Vec::new();

    let mut graph_attrs = vec![
        quoted_attr("label", config.graph().label()),
        quoted_attr("nodesep", config.graph().nodesep()),
        quoted_attr("pad", config.graph().pad()),
        quoted_attr("ranksep", config.graph().ranksep()),
        quoted_attr("splines", config.graph().splines()),
    ];
    if let Some(color) = &background {
        graph_attrs.push(quoted_attr("bgcolor", &color.to_string()));
    }
    stmts.push(Stmt::GAttribute(GraphAttributes::Graph(graph_attrs)));

    let mut node_attrs = vec![quoted_attr("fontsize", config.node().fontsize())];
    if let Some(fontname) = config.node().fontname() {
        node_attrs.push(quoted_attr("fontname", fontname));
    }
    stmts.push(Stmt::GAttribute(GraphAttributes::Node(node_attrs)));

    stmts.push(Stmt::GAttribute(GraphAttributes::Edge(vec![quoted_attr(
        "fontsize",
        config.edge().fontsize(),
    )])));

    let mut cluster_index = 0usize;
    lower_scope(
        diagram.scope(),
        &palette,
        0,
        &mut cluster_index,
        &mut stmts,
    );

    Ok(Graph::DiGraph {
        id: quoted(diagram.title()),
        strict: false,
        stmts,
    })
}

fn lower_scope(
    scope: &semantic::Scope,
    palette: &[Color],
    depth: usize,
    cluster_index: &mut usize,
    stmts: &mut Vec<Stmt>,
) {
    for element in scope.elements() {
        match element {
            semantic::Element::Node(node) => stmts.push(Stmt::Node(lower_node(node))),
            semantic::Element::Cluster(cluster) => {
                // Graphviz only treats subgraphs named cluster_* as clusters.
                let name = format!("cluster_{}", *cluster_index);
                *cluster_index += 1;

                let background = cluster
                    .style()
                    .background_color()
                    .cloned()
                    .unwrap_or_else(|| palette[depth % palette.len()].clone());

                let mut inner = vec![
                    Stmt::Attribute(quoted_attr("label", cluster.label())),
                    Stmt::Attribute(attr!("labeljust", "l")),
                    Stmt::Attribute(attr!("style", "rounded")),
                    Stmt::Attribute(quoted_attr("pencolor", "#AEB6BE")),
                    Stmt::Attribute(quoted_attr("fontsize", "12")),
                    Stmt::Attribute(quoted_attr("bgcolor", &background.to_string())),
                ];
                lower_scope(cluster.scope(), palette, depth + 1, cluster_index, &mut inner);

                stmts.push(Stmt::Subgraph(Subgraph {
                    id: id!(name),
                    stmts: inner,
                }));
            }
            semantic::Element::Edge(edge) => stmts.push(Stmt::Edge(lower_edge(edge))),
        }
    }
}

fn lower_node(node: &semantic::Node) -> Node {
    let kind: NodeKind = node.kind();
    Node {
        id: node_ref(node.id()),
        attributes: vec![
            quoted_attr("label", node.label()),
            attr!("shape", kind.shape()),
            quoted_attr("style", kind.draw_style()),
            quoted_attr("fillcolor", kind.fill_color()),
        ],
    }
}

fn lower_edge(edge: &semantic::Edge) -> Edge {
    let mut attributes = Vec::new();
    if let Some(label) = edge.label() {
        attributes.push(quoted_attr("label", label));
    }
    if let Some(dir) = edge.direction().dot_dir() {
        attributes.push(attr!("dir", dir));
    }
    if let Some(line) = edge.style().line().dot_style() {
        attributes.push(attr!("style", line));
    }
    if let Some(color) = edge.style().color() {
        attributes.push(quoted_attr("color", &color.to_string()));
    }

    Edge {
        ty: EdgeTy::Pair(
            Vertex::N(node_ref(edge.source())),
            Vertex::N(node_ref(edge.target())),
        ),
        attributes,
    }
}

fn node_ref(id: identifier::Id) -> NodeId {
    NodeId(quoted(&id.resolve()), None)
}

fn quoted_attr(key: &str, value: &str) -> Attribute {
    Attribute(id!(key), quoted(value))
}

fn quoted(value: &str) -> Id {
    Id::Escaped(format!("\"{}\"", escape(value)))
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

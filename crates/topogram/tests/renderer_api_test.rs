//! Integration tests for the DiagramRenderer API
//!
//! These tests verify that the public API works and is usable. They exercise
//! the DOT export path only, so no Graphviz installation is required.

use topogram::{
    DiagramRenderer, OutputFormat,
    color::Color,
    config::AppConfig,
    identifier::Id,
    semantic::{Cluster, Diagram, Edge, Element, Node, Scope},
    style::{ClusterStyle, EdgeDirection, EdgeLine, EdgeStyle, NodeKind},
};

fn service_diagram() -> Diagram {
    let client = Id::new("it_client");
    let api = Id::new("it_api");
    let db = Id::new("it_db");

    let backend = Cluster::new(
        "Backend",
        Scope::new(vec![
            Element::Node(Node::new(api, "API service", NodeKind::Service)),
            Element::Node(Node::new(db, "Metadata database", NodeKind::Database)),
        ]),
    );

    Diagram::new(
        "Service overview",
        Scope::new(vec![
            Element::Node(Node::new(client, "End user", NodeKind::Client)),
            Element::Cluster(backend),
            Element::Edge(Edge::new(client, api, EdgeDirection::Forward, None)),
            Element::Edge(Edge::new(
                api,
                db,
                EdgeDirection::Forward,
                Some("SQL".to_string()),
            )),
        ]),
    )
}

#[test]
fn test_renderer_api_exists() {
    // Just verify the API compiles and can be constructed
    let _renderer = DiagramRenderer::default();
}

#[test]
fn test_dot_source_contains_declared_elements() {
    let renderer = DiagramRenderer::default();
    let source = renderer
        .dot_source(&service_diagram())
        .expect("Failed to export diagram");

    assert!(source.starts_with("digraph"), "Output should be a digraph");
    assert!(source.contains("End user"));
    assert!(source.contains("API service"));
    assert!(source.contains("Metadata database"));
    assert!(source.contains("Backend"));
    assert!(source.contains("cluster_0"));
    assert!(source.contains("->"), "Edges should be emitted");
    assert!(source.contains("SQL"), "Edge labels should be emitted");
}

#[test]
fn test_default_config_attributes_are_applied() {
    let renderer = DiagramRenderer::default();
    let source = renderer
        .dot_source(&service_diagram())
        .expect("Failed to export diagram");

    assert!(source.contains("nodesep"));
    assert!(source.contains("ranksep"));
    assert!(source.contains("spline"));
}

#[test]
fn test_render_dot_format_matches_source() {
    let renderer = DiagramRenderer::default();
    let diagram = service_diagram();

    let source = renderer.dot_source(&diagram).expect("Failed to export");
    let bytes = renderer
        .render(&diagram, OutputFormat::Dot)
        .expect("Failed to render");

    assert_eq!(bytes, source.into_bytes());
}

#[test]
fn test_export_is_idempotent() {
    let renderer = DiagramRenderer::default();
    let diagram = service_diagram();

    let first = renderer.dot_source(&diagram).expect("first export");
    let second = renderer.dot_source(&diagram).expect("second export");
    assert_eq!(first, second, "Re-export should be byte-identical");
}

#[test]
fn test_explicit_styles_are_rendered() {
    let cache = Id::new("it_cache");
    let worker = Id::new("it_worker");

    let pool = Cluster::new(
        "Worker pool",
        Scope::new(vec![
            Element::Node(Node::new(worker, "Worker", NodeKind::Service)),
            Element::Node(Node::new(cache, "Cache", NodeKind::Disk)),
        ]),
    )
    .with_style(ClusterStyle::new(Some(
        Color::new("#FBE9E7").expect("valid cluster background"),
    )));

    let queue_edge = Edge::new(
        worker,
        cache,
        EdgeDirection::Undirected,
        Some("queue".to_string()),
    )
    .with_style(EdgeStyle::new(
        EdgeLine::Dashed,
        Some(Color::new("#37474F").expect("valid edge color")),
    ));

    let diagram = Diagram::new(
        "Styled pool",
        Scope::new(vec![Element::Cluster(pool), Element::Edge(queue_edge)]),
    );

    let renderer = DiagramRenderer::default();
    let source = renderer
        .dot_source(&diagram)
        .expect("Failed to export styled diagram");

    assert!(source.contains("#FBE9E7"), "Cluster background should be emitted");
    assert!(source.contains("dashed"), "Edge line style should be emitted");
    assert!(source.contains("#37474F"), "Edge color should be emitted");
}

#[test]
fn test_duplicate_node_ids_return_error() {
    let duplicate = Id::new("it_duplicate");
    let diagram = Diagram::new(
        "Broken",
        Scope::new(vec![
            Element::Node(Node::new(duplicate, "First", NodeKind::Service)),
            Element::Node(Node::new(duplicate, "Second", NodeKind::Service)),
        ]),
    );

    let renderer = DiagramRenderer::default();
    assert!(renderer.dot_source(&diagram).is_err());
}

#[test]
fn test_dangling_edge_returns_error() {
    let api = Id::new("it_dangling_api");
    let diagram = Diagram::new(
        "Broken",
        Scope::new(vec![
            Element::Node(Node::new(api, "API", NodeKind::Service)),
            Element::Edge(Edge::new(
                api,
                Id::new("it_missing"),
                EdgeDirection::Forward,
                None,
            )),
        ]),
    );

    let renderer = DiagramRenderer::default();
    let result = renderer.dot_source(&diagram);
    assert!(result.is_err(), "Should return error for dangling edge");
}

#[test]
fn test_renderer_reusability() {
    let renderer = DiagramRenderer::new(AppConfig::default());

    let first = renderer
        .dot_source(&service_diagram())
        .expect("Failed to export first diagram");

    let solo = Id::new("it_solo");
    let other = Diagram::new(
        "Solo",
        Scope::new(vec![Element::Node(Node::new(
            solo,
            "Lonely service",
            NodeKind::Service,
        ))]),
    );
    let second = renderer
        .dot_source(&other)
        .expect("Failed to export second diagram");

    assert!(first.contains("Service overview"));
    assert!(second.contains("Lonely service"));
}

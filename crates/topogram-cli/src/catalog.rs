//! Built-in diagram catalog.
//!
//! Each entry declares one architecture diagram as static data: nodes with
//! visual kinds, nested clusters, and labeled edges. Nothing here executes
//! the depicted systems; the declarations exist only to be rendered.

use topogram::{
    identifier::Id,
    semantic::{Cluster, Diagram, Edge, Element, Node, Scope},
    style::{EdgeDirection, NodeKind},
};

/// Names of all available diagrams, in catalog order.
pub fn names() -> &'static [&'static str] {
    &["architecture"]
}

/// Build the named diagram, or `None` if it is not in the catalog.
pub fn build(name: &str) -> Option<Diagram> {
    match name {
        "architecture" => Some(architecture()),
        _ => None,
    }
}

/// Deployment topology of the image cutout service.
///
/// End users reach the API service through the NGINX ingress, which also
/// routes authentication to Gafaelfawr. The API service hands cutout work to
/// the stack workers and job bookkeeping to the database workers over arq
/// queues in Redis. Job metadata lives in Wobbly's UWS database; cutout
/// results land in the cutout store, from which users retrieve them.
pub fn architecture() -> Diagram {
    let user = Id::new("user");
    let images = Id::new("images");
    let cutouts = Id::new("cutouts");

    let ingress = Id::new("ingress");
    let gafaelfawr = Id::new("gafaelfawr");
    let butler = Id::new("butler");

    let api = Id::new("api");
    let cutout_workers = Id::new("cutout_workers");
    let uws_workers = Id::new("uws_workers");
    let redis = Id::new("redis");

    let wobbly = Id::new("wobbly");
    let metadata = Id::new("metadata");

    let cutout_service = Cluster::new(
        "Cutout service",
        Scope::new(vec![
            Element::Node(Node::new(api, "API service", NodeKind::Service)),
            Element::Node(Node::new(cutout_workers, "Workers (stack)", NodeKind::Service)),
            Element::Node(Node::new(uws_workers, "Workers (database)", NodeKind::Service)),
            Element::Node(Node::new(redis, "Redis", NodeKind::Disk)),
        ]),
    );

    let wobbly_service = Cluster::new(
        "Wobbly",
        Scope::new(vec![
            Element::Node(Node::new(wobbly, "API", NodeKind::Service)),
            Element::Node(Node::new(metadata, "UWS database", NodeKind::Database)),
        ]),
    );

    let kubernetes = Cluster::new(
        "Kubernetes",
        Scope::new(vec![
            Element::Node(Node::new(ingress, "NGINX ingress", NodeKind::LoadBalancer)),
            Element::Node(Node::new(gafaelfawr, "Gafaelfawr", NodeKind::Service)),
            Element::Node(Node::new(butler, "Butler API", NodeKind::Service)),
            Element::Cluster(cutout_service),
            Element::Cluster(wobbly_service),
        ]),
    );

    let arq = || Some("arq".to_string());

    let elements = vec![
        Element::Node(Node::new(user, "End user", NodeKind::Client)),
        Element::Node(Node::new(images, "Image store", NodeKind::Datastore)),
        Element::Node(Node::new(cutouts, "Cutout store", NodeKind::Datastore)),
        Element::Cluster(kubernetes),
        Element::Edge(Edge::new(user, ingress, EdgeDirection::Forward, None)),
        Element::Edge(Edge::new(ingress, api, EdgeDirection::Forward, None)),
        Element::Edge(Edge::new(api, redis, EdgeDirection::Undirected, arq())),
        Element::Edge(Edge::new(api, wobbly, EdgeDirection::Forward, None)),
        Element::Edge(Edge::new(wobbly, uws_workers, EdgeDirection::Reverse, None)),
        Element::Edge(Edge::new(wobbly, metadata, EdgeDirection::Forward, None)),
        Element::Edge(Edge::new(ingress, gafaelfawr, EdgeDirection::Forward, None)),
        Element::Edge(Edge::new(redis, cutout_workers, EdgeDirection::Undirected, arq())),
        Element::Edge(Edge::new(cutout_workers, cutouts, EdgeDirection::Forward, None)),
        Element::Edge(Edge::new(cutout_workers, butler, EdgeDirection::Reverse, None)),
        Element::Edge(Edge::new(butler, images, EdgeDirection::Reverse, None)),
        Element::Edge(Edge::new(redis, uws_workers, EdgeDirection::Undirected, arq())),
        Element::Edge(Edge::new(user, cutouts, EdgeDirection::Reverse, None)),
    ];

    Diagram::new("Image cutout service", Scope::new(elements)).with_output_stem("architecture")
}

#![allow(dead_code)]
use anchor_propagation::prelude::*;

/// Vertex row; the `prelabelled` column is derived from `anchors`.
pub fn vert(id: &str, label: &str, anchors: &AnchorSet) -> VertexRecord {
    VertexRecord {
        id: id.into(),
        label: label.into(),
        prelabelled: anchors.contains(label),
    }
}

pub fn edge(src: &str, dst: &str, weight: i64) -> EdgeRecord {
    EdgeRecord {
        src: src.into(),
        dst: dst.into(),
        weight,
    }
}

/// Build a graph from `(id, label)` pairs and `(src, dst, weight)` triples.
pub fn graph_from(
    verts: &[(&str, &str)],
    edges: &[(&str, &str, i64)],
    anchors: &AnchorSet,
) -> Graph {
    let vs: Vec<_> = verts.iter().map(|&(i, l)| vert(i, l, anchors)).collect();
    let es: Vec<_> = edges.iter().map(|&(s, d, w)| edge(s, d, w)).collect();
    Graph::from_records(&vs, &es, anchors).expect("valid test graph")
}

/// Labels in dense vertex order.
pub fn labels(g: &Graph) -> Vec<String> {
    g.vertices().iter().map(|v| v.label().to_string()).collect()
}

/// Label of vertex `id`.
pub fn label_of(g: &Graph, id: &str) -> String {
    g.vertex(id).expect("vertex exists").label().to_string()
}

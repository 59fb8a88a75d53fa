//! Anchor policy: re-derive `prelabelled` after selection.
//!
//! A vertex that lands on an anchor label is frozen from the next round on and
//! doubles the weight of edges pointing at it. A vertex never leaves the anchor
//! set on its own, because selection does not move prelabelled vertices.

use crate::graph::{AnchorSet, Label, Vertex, VertexSet};

/// `vertex` with its selected label and a recomputed anchor flag.
#[inline]
pub fn reanchor(vertex: &Vertex, label: Label, anchors: &AnchorSet) -> Vertex {
    vertex.relabel(label, anchors)
}

/// Next snapshot from the current one and the selected labels (index-aligned).
pub fn apply_anchor_policy(vertices: &VertexSet, labels: Vec<Label>, anchors: &AnchorSet) -> VertexSet {
    debug_assert_eq!(vertices.len(), labels.len());
    VertexSet::from_vec(
        vertices
            .iter()
            .zip(labels)
            .map(|(v, l)| reanchor(v, l, anchors))
            .collect(),
    )
}

//! Vertices and per-round vertex snapshots.

use std::sync::Arc;

use super::anchor::AnchorSet;

/// Shared, immutable label string.
pub type Label = Arc<str>;

/// One account in the interaction graph.
///
/// `prelabelled` is not independently settable: it is derived from the label
/// whenever a vertex is built or relabelled.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Vertex {
    id: Arc<str>,
    label: Label,
    prelabelled: bool,
}

impl Vertex {
    pub fn new(id: impl Into<Arc<str>>, label: impl Into<Label>, anchors: &AnchorSet) -> Self {
        let label = label.into();
        let prelabelled = anchors.contains(&label);
        Self {
            id: id.into(),
            label,
            prelabelled,
        }
    }

    /// Same vertex with a new label and a recomputed anchor flag.
    pub fn relabel(&self, label: Label, anchors: &AnchorSet) -> Self {
        let prelabelled = anchors.contains(&label);
        Self {
            id: Arc::clone(&self.id),
            label,
            prelabelled,
        }
    }

    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Shared handle to the label, for building the next snapshot without copying.
    #[inline]
    pub fn label_handle(&self) -> &Label {
        &self.label
    }

    #[inline]
    pub fn prelabelled(&self) -> bool {
        self.prelabelled
    }
}

/// Immutable vertex snapshot for one round.
///
/// Positions are dense vertex indices shared with the edge set; they never
/// change between rounds, only the vertices stored at them are replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VertexSet {
    vertices: Arc<[Vertex]>,
}

impl VertexSet {
    pub(crate) fn from_vec(vertices: Vec<Vertex>) -> Self {
        Self {
            vertices: vertices.into(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn get(&self, idx: usize) -> Option<&Vertex> {
        self.vertices.get(idx)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Number of vertices currently prelabelled.
    pub fn anchor_count(&self) -> usize {
        self.vertices.iter().filter(|v| v.prelabelled()).count()
    }

    /// Number of positions whose label differs from `other`'s.
    pub fn label_changes(&self, other: &VertexSet) -> usize {
        self.vertices
            .iter()
            .zip(other.vertices.iter())
            .filter(|(a, b)| a.label() != b.label())
            .count()
    }
}

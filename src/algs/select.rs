//! Label selection.
//!
//! Prelabelled vertices keep their label. Every other vertex moves to the
//! candidate with the highest cumulative weight; ties go to the
//! lexicographically smallest label (byte order), so repeated runs agree.
//! A vertex with no candidates keeps its label.

use std::cmp::Ordering;
use std::sync::Arc;

use super::aggregate::LabelScores;
use crate::graph::{Label, Vertex, VertexSet};

/// Next label for `vertex` given its aggregated `scores`.
pub fn select_label(vertex: &Vertex, scores: &LabelScores<'_>) -> Label {
    if vertex.prelabelled() {
        return Arc::clone(vertex.label_handle());
    }
    scores
        .iter()
        .max_by(|a, b| preference(a.0, *a.1, b.0, *b.1))
        .map(|(label, _)| Arc::clone(label))
        .unwrap_or_else(|| Arc::clone(vertex.label_handle()))
}

/// `Greater` when `(la, wa)` is preferred over `(lb, wb)`.
#[inline]
fn preference(la: &Label, wa: u64, lb: &Label, wb: u64) -> Ordering {
    wa.cmp(&wb).then_with(|| lb.as_bytes().cmp(la.as_bytes()))
}

/// Next label of every vertex; `scores` is indexed like `vertices`.
pub fn select_labels(vertices: &VertexSet, scores: &[LabelScores<'_>]) -> Vec<Label> {
    vertices
        .iter()
        .zip(scores)
        .map(|(v, s)| select_label(v, s))
        .collect()
}

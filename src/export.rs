//! Result export: terminal snapshot → `(id, label)` rows.

use crate::graph::VertexSet;
use crate::io::LabelRecord;

/// Output rows in dense vertex order (the order vertices were loaded in),
/// with the anchor flag dropped.
pub fn export_labels(vertices: &VertexSet) -> Vec<LabelRecord> {
    vertices
        .iter()
        .map(|v| LabelRecord {
            id: v.id().to_string(),
            label: v.label().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AnchorSet, Vertex};

    #[test]
    fn strips_anchor_flag_and_keeps_order() {
        let anchors = AnchorSet::new(["A"]).unwrap();
        let snap = VertexSet::from_vec(vec![
            Vertex::new("z", "A", &anchors),
            Vertex::new("a", "b", &anchors),
        ]);
        let rows = export_labels(&snap);
        assert_eq!(
            rows,
            vec![
                LabelRecord { id: "z".into(), label: "A".into() },
                LabelRecord { id: "a".into(), label: "b".into() },
            ]
        );
    }
}

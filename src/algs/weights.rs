//! Weight adjustment: per-round effective edge weights.
//!
//! An edge pointing at a vertex that is prelabelled in the current snapshot
//! counts double. Effective weights live for one round only and are never
//! written back into the [`EdgeSet`].

use crate::graph::{EdgeSet, VertexSet};
use crate::partitioning::parallel::par_map_indexed;

/// Effective weights for one round, aligned with [`EdgeSet::targets`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveWeights(Vec<u64>);

impl EffectiveWeights {
    #[inline]
    pub fn as_slice(&self) -> &[u64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Effective weight of one edge given its destination's anchor status.
#[inline]
pub fn effective_weight(weight: u64, dst_prelabelled: bool) -> u64 {
    if dst_prelabelled {
        weight.saturating_mul(2)
    } else {
        weight
    }
}

/// Effective weight of every edge against the `vertices` snapshot.
pub fn adjust_weights(edges: &EdgeSet, vertices: &VertexSet) -> EffectiveWeights {
    let snapshot = vertices.as_slice();
    let raw = edges.weights();
    EffectiveWeights(par_map_indexed(edges.targets(), |slot, &dst| {
        effective_weight(raw[slot], snapshot[dst].prelabelled())
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{AnchorSet, Graph};
    use crate::io::{EdgeRecord, VertexRecord};

    #[test]
    fn doubles_only_into_prelabelled_destinations() {
        let anchors = AnchorSet::new(["Bernie"]).unwrap();
        let v = |id: &str, label: &str| VertexRecord {
            id: id.into(),
            label: label.into(),
            prelabelled: anchors.contains(label),
        };
        let e = |s: &str, d: &str, w| EdgeRecord {
            src: s.into(),
            dst: d.into(),
            weight: w,
        };
        let g = Graph::from_records(
            &[v("a", "Bernie"), v("b", ""), v("c", "X")],
            &[e("b", "a", 5), e("b", "c", 5), e("a", "b", 4)],
            &anchors,
        )
        .unwrap();
        let w = adjust_weights(g.edges(), g.vertices());
        // slot order: a's edges, then b's
        assert_eq!(w.as_slice(), &[4, 10, 5]);
        // raw weights untouched
        assert_eq!(g.edges().weights(), &[4, 5, 5]);
    }

    #[test]
    fn doubling_saturates() {
        assert_eq!(effective_weight(u64::MAX, true), u64::MAX);
        assert_eq!(effective_weight(7, false), 7);
        assert_eq!(effective_weight(0, true), 0);
    }
}

//! Frozen CSR (Compressed Sparse Row) edge set.
//!
//! Immutable, cache-friendly outgoing adjacency keyed by dense source index.
//! Topology and raw weights are fixed for the whole run; each round only derives
//! a parallel array of effective weights aligned with [`EdgeSet::targets`].
//! Within one source, edges keep the order in which they were loaded.

use std::ops::Range;
use std::sync::Arc;

/// One resolved edge: dense source index, dense destination index, raw weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedEdge {
    pub src: usize,
    pub dst: usize,
    pub weight: u64,
}

/// Outgoing-edge CSR over dense vertex indices.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSet {
    /// `offsets[v]..offsets[v + 1]` is the slot range of `v`'s outgoing edges.
    offsets: Arc<[usize]>,
    /// Destination index per slot.
    targets: Arc<[usize]>,
    /// Raw weight per slot.
    weights: Arc<[u64]>,
}

impl Default for EdgeSet {
    fn default() -> Self {
        Self {
            offsets: Arc::from([0usize]),
            targets: Arc::from([]),
            weights: Arc::from([]),
        }
    }
}

impl EdgeSet {
    /// Freeze `edges` over `n` vertices. Every endpoint must be `< n`.
    pub fn freeze(n: usize, edges: &[ResolvedEdge]) -> Self {
        // 1) degree counts
        let mut out_deg = vec![0usize; n];
        for e in edges {
            out_deg[e.src] += 1;
        }

        // prefix sums
        let mut offsets = vec![0usize; n + 1];
        for i in 0..n {
            offsets[i + 1] = offsets[i] + out_deg[i];
        }
        let m = offsets[n];

        // 2) populate; counting sort keeps load order within a source
        let mut targets = vec![0usize; m];
        let mut weights = vec![0u64; m];
        let mut write = offsets.clone();
        for e in edges {
            let pos = write[e.src];
            targets[pos] = e.dst;
            weights[pos] = e.weight;
            write[e.src] += 1;
        }

        Self {
            offsets: offsets.into(),
            targets: targets.into(),
            weights: weights.into(),
        }
    }

    /// Number of vertices the CSR was built over.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Slot range of `v`'s outgoing edges; empty for unknown indices.
    #[inline]
    pub fn slots(&self, v: usize) -> Range<usize> {
        match (self.offsets.get(v), self.offsets.get(v + 1)) {
            (Some(&lo), Some(&hi)) => lo..hi,
            _ => 0..0,
        }
    }

    #[inline]
    pub fn out_degree(&self, v: usize) -> usize {
        self.slots(v).len()
    }

    /// Destination per slot.
    #[inline]
    pub fn targets(&self) -> &[usize] {
        &self.targets
    }

    /// Raw weight per slot.
    #[inline]
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// `(dst, raw weight)` pairs leaving `v`.
    pub fn outgoing(&self, v: usize) -> impl Iterator<Item = (usize, u64)> + '_ {
        let r = self.slots(v);
        self.targets[r.clone()]
            .iter()
            .copied()
            .zip(self.weights[r].iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn e(src: usize, dst: usize, weight: u64) -> ResolvedEdge {
        ResolvedEdge { src, dst, weight }
    }

    #[test]
    fn freeze_groups_by_source_in_load_order() {
        let csr = EdgeSet::freeze(3, &[e(2, 0, 1), e(0, 1, 5), e(2, 1, 7), e(0, 2, 9)]);
        assert_eq!(csr.vertex_count(), 3);
        assert_eq!(csr.len(), 4);
        assert_eq!(csr.outgoing(0).collect::<Vec<_>>(), vec![(1, 5), (2, 9)]);
        assert!(csr.outgoing(1).next().is_none());
        assert_eq!(csr.outgoing(2).collect::<Vec<_>>(), vec![(0, 1), (1, 7)]);
    }

    #[test]
    fn unknown_index_has_no_edges() {
        let csr = EdgeSet::freeze(1, &[e(0, 0, 1)]);
        assert_eq!(csr.out_degree(42), 0);
        assert_eq!(EdgeSet::default().vertex_count(), 0);
    }
}

// Partition abstraction for the per-round reduce
use crate::graph::Graph;

/// Read-only view of one vertex partition of a round snapshot.
///
/// A partition owns a disjoint set of *source* vertices. Its only collective
/// operation is a group-by-key reduce over outgoing edges: each edge is joined
/// with its destination in the immutable snapshot, then edges are regrouped by
/// source and folded. Implementors never mutate the graph, so partitions of the
/// same round may run concurrently.
pub trait GraphPartition: Sync {
    /// Dense indices of the source vertices this partition owns.
    fn owned(&self) -> &[usize];

    /// Fold every outgoing edge of every owned vertex, grouped by source.
    ///
    /// `fold(acc, dst, weight)` sees the dense destination index and the
    /// per-slot weight from `slot_weights` (aligned with
    /// [`crate::graph::EdgeSet::targets`]). Owned vertices with no outgoing
    /// edges still yield `(v, init())`.
    fn reduce_by_source<A, I, F>(
        &self,
        graph: &Graph,
        slot_weights: &[u64],
        init: I,
        fold: F,
    ) -> Vec<(usize, A)>
    where
        I: Fn() -> A,
        F: Fn(A, usize, u64) -> A,
    {
        let edges = graph.edges();
        let targets = edges.targets();
        self.owned()
            .iter()
            .map(|&v| {
                let acc = edges
                    .slots(v)
                    .fold(init(), |acc, slot| fold(acc, targets[slot], slot_weights[slot]));
                (v, acc)
            })
            .collect()
    }
}

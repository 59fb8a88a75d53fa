//! One bulk-synchronous round, and the k-round driver built from it.
//!
//! A round reads only the previous snapshot: weights, aggregation and selection
//! for every partition are computed against the same immutable [`Graph`], each
//! partition emits a fragment for the vertices it owns, and the fragments are
//! merged into the next snapshot once all partitions have finished.

use super::aggregate::{aggregate, aggregate_partition};
use super::anchor_policy::{apply_anchor_policy, reanchor};
use super::select::{select_label, select_labels};
use super::weights::adjust_weights;
use crate::graph::{AnchorSet, Graph, Vertex, VertexSet};
use crate::partitioning::parallel::par_map;
use crate::partitioning::{PartitionPlan, Partitioner};

/// What one round did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundStats {
    /// 1-based round number.
    pub round: usize,
    /// Vertices whose label changed in this round.
    pub changed: usize,
    /// Prelabelled vertices after this round.
    pub anchors: usize,
}

/// Run round `round` over `graph` using `plan`, returning the next graph.
///
/// `plan` must be a disjoint cover of `graph`'s vertices, as produced by a
/// [`Partitioner`] for this graph.
pub fn superstep(
    graph: &Graph,
    plan: &PartitionPlan,
    anchors: &AnchorSet,
    round: usize,
) -> (Graph, RoundStats) {
    debug_assert!(
        plan.covers(graph.vertices().len()),
        "partition plan does not cover the {} vertices of this graph",
        graph.vertices().len()
    );
    let weights = adjust_weights(graph.edges(), graph.vertices());
    let snapshot = graph.vertices().as_slice();

    let fragments: Vec<Vec<(usize, Vertex)>> = par_map(plan.parts(), |part| {
        aggregate_partition(part, graph, &weights)
            .into_iter()
            .map(|(v, scores)| {
                let current = &snapshot[v];
                (v, reanchor(current, select_label(current, &scores), anchors))
            })
            .collect()
    });

    // barrier: every partition has finished; partitions own disjoint vertices
    let mut next = snapshot.to_vec();
    for (v, vertex) in fragments.into_iter().flatten() {
        next[v] = vertex;
    }
    let next = VertexSet::from_vec(next);
    let stats = RoundStats {
        round,
        changed: next.label_changes(graph.vertices()),
        anchors: next.anchor_count(),
    };
    (graph.with_vertices(next), stats)
}

/// One round as four explicitly composed whole-graph stages, single-threaded.
pub fn run_stages(graph: &Graph, anchors: &AnchorSet) -> VertexSet {
    let weights = adjust_weights(graph.edges(), graph.vertices());
    let scores = aggregate(graph, &weights);
    let labels = select_labels(graph.vertices(), &scores);
    apply_anchor_policy(graph.vertices(), labels, anchors)
}

/// Run exactly `rounds` rounds. `rounds == 0` returns `graph` unchanged.
pub fn propagate(
    graph: Graph,
    anchors: &AnchorSet,
    rounds: usize,
    partitioner: &dyn Partitioner,
) -> Graph {
    if rounds == 0 {
        return graph;
    }
    let plan = partitioner.plan(&graph);
    (1..=rounds).fold(graph, |g, round| superstep(&g, &plan, anchors, round).0)
}

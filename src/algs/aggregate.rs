//! Neighbor aggregation.
//!
//! Each vertex inherits influence from the accounts it points at: every
//! outgoing edge contributes its destination's current label, weighted by the
//! edge's effective weight, and contributions to the same label are summed.
//! Influence never flows against edge direction.

use hashbrown::HashMap;

use super::weights::EffectiveWeights;
use crate::graph::{Graph, Label};
use crate::partitioning::graph_traits::GraphPartition;

/// Cumulative effective weight per candidate label for one vertex.
///
/// Keys borrow the labels of the snapshot the scores were computed from.
pub type LabelScores<'a> = HashMap<&'a Label, u64>;

/// Scores of every owned vertex of `part`, as `(dense index, scores)`.
pub fn aggregate_partition<'a, P>(
    part: &P,
    graph: &'a Graph,
    weights: &EffectiveWeights,
) -> Vec<(usize, LabelScores<'a>)>
where
    P: GraphPartition + ?Sized,
{
    let snapshot = graph.vertices().as_slice();
    part.reduce_by_source(graph, weights.as_slice(), LabelScores::new, |mut acc, dst, w| {
        let total = acc.entry(snapshot[dst].label_handle()).or_insert(0);
        *total = total.saturating_add(w);
        acc
    })
}

/// Scores of every vertex, indexed by dense vertex index.
pub fn aggregate<'a>(graph: &'a Graph, weights: &EffectiveWeights) -> Vec<LabelScores<'a>> {
    let everything = AllVertices((0..graph.vertices().len()).collect());
    aggregate_partition(&everything, graph, weights)
        .into_iter()
        .map(|(_, scores)| scores)
        .collect()
}

struct AllVertices(Vec<usize>);

impl GraphPartition for AllVertices {
    fn owned(&self) -> &[usize] {
        &self.0
    }
}

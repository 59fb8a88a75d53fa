//! Entry-point for vertex partitioning of round work.
//!
//! A [`PartitionPlan`] splits the dense vertex range into disjoint partitions
//! that the round driver processes independently. Two planners are provided:
//! [`HashPartitioner`] (hash of vertex id modulo the partition count, for large
//! graphs) and [`SinglePartition`] (one in-memory partition, for modest ones).
//! The choice only affects how work is spread; round output is identical.

pub mod graph_traits;
pub mod parallel;

use std::hash::Hasher;

use ahash::AHasher;

use crate::graph::Graph;
use graph_traits::GraphPartition;

pub type PartitionId = usize;

/// One partition's owned source vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexPartition {
    pub id: PartitionId,
    vertices: Vec<usize>,
}

impl GraphPartition for VertexPartition {
    fn owned(&self) -> &[usize] {
        &self.vertices
    }
}

/// Disjoint cover of `0..n` by partitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionPlan {
    parts: Vec<VertexPartition>,
}

impl PartitionPlan {
    /// Build from a per-vertex assignment (`assign[v]` is `v`'s partition).
    pub fn from_assignment(n_parts: usize, assign: impl IntoIterator<Item = PartitionId>) -> Self {
        let n_parts = n_parts.max(1);
        let mut parts: Vec<VertexPartition> = (0..n_parts)
            .map(|id| VertexPartition {
                id,
                vertices: Vec::new(),
            })
            .collect();
        for (v, p) in assign.into_iter().enumerate() {
            parts[p % n_parts].vertices.push(v);
        }
        Self { parts }
    }

    pub fn num_parts(&self) -> usize {
        self.parts.len()
    }

    pub fn parts(&self) -> &[VertexPartition] {
        &self.parts
    }

    /// Vertices per partition.
    pub fn sizes(&self) -> Vec<usize> {
        self.parts.iter().map(|p| p.vertices.len()).collect()
    }

    /// Whether the plan is a disjoint cover of exactly `0..n`.
    pub fn covers(&self, n: usize) -> bool {
        let mut seen = vec![false; n];
        for &v in self.parts.iter().flat_map(|p| p.vertices.iter()) {
            match seen.get_mut(v) {
                Some(slot) if !*slot => *slot = true,
                _ => return false,
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// Largest partition over the mean partition size (1.0 is perfect balance).
    pub fn imbalance(&self) -> f64 {
        let sizes = self.sizes();
        let total: usize = sizes.iter().sum();
        if total == 0 {
            return 1.0;
        }
        let mean = total as f64 / sizes.len() as f64;
        sizes.iter().copied().max().unwrap_or(0) as f64 / mean
    }
}

/// Strategy that assigns vertices to partitions.
pub trait Partitioner: Send + Sync {
    fn plan(&self, graph: &Graph) -> PartitionPlan;
}

/// Hash partitioning on vertex id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashPartitioner {
    pub n_parts: usize,
}

impl HashPartitioner {
    pub fn new(n_parts: usize) -> Self {
        Self {
            n_parts: n_parts.max(1),
        }
    }

    /// Partition of vertex `id`.
    pub fn part_of(&self, id: &str) -> PartitionId {
        let mut hasher = AHasher::default();
        hasher.write(id.as_bytes());
        (hasher.finish() % self.n_parts as u64) as PartitionId
    }
}

impl Partitioner for HashPartitioner {
    fn plan(&self, graph: &Graph) -> PartitionPlan {
        let plan = PartitionPlan::from_assignment(
            self.n_parts,
            graph.vertices().iter().map(|v| self.part_of(v.id())),
        );
        log::debug!(
            "hash plan: {} parts, sizes {:?}, imbalance {:.3}",
            plan.num_parts(),
            plan.sizes(),
            plan.imbalance()
        );
        plan
    }
}

/// Everything in one partition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinglePartition;

impl Partitioner for SinglePartition {
    fn plan(&self, graph: &Graph) -> PartitionPlan {
        PartitionPlan::from_assignment(1, std::iter::repeat_n(0, graph.vertices().len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AnchorSet;
    use crate::io::VertexRecord;

    fn graph(n: usize) -> Graph {
        let verts: Vec<VertexRecord> = (0..n)
            .map(|i| VertexRecord {
                id: format!("v{i}"),
                label: String::new(),
                prelabelled: false,
            })
            .collect();
        Graph::from_records(&verts, &[], &AnchorSet::communities()).unwrap()
    }

    #[test]
    fn hash_plan_is_a_disjoint_cover() {
        let g = graph(500);
        let plan = HashPartitioner::new(7).plan(&g);
        assert_eq!(plan.num_parts(), 7);
        let mut all: Vec<usize> = plan
            .parts()
            .iter()
            .flat_map(|p| p.owned().iter().copied())
            .collect();
        all.sort_unstable();
        assert_eq!(all, (0..500).collect::<Vec<_>>());
    }

    #[test]
    fn hash_assignment_is_stable() {
        let h = HashPartitioner::new(16);
        assert_eq!(h.part_of("account-42"), h.part_of("account-42"));
        assert!(h.part_of("x") < 16);
    }

    #[test]
    fn single_partition_owns_everything() {
        let g = graph(10);
        let plan = SinglePartition.plan(&g);
        assert_eq!(plan.sizes(), vec![10]);
        assert_eq!(plan.imbalance(), 1.0);
    }

    #[test]
    fn covers_rejects_plans_for_other_sizes() {
        let g = graph(5);
        let plan = HashPartitioner::new(3).plan(&g);
        assert!(plan.covers(5));
        assert!(!plan.covers(4));
        assert!(!plan.covers(6));
        let overlapping = PartitionPlan {
            parts: vec![
                VertexPartition { id: 0, vertices: vec![0, 1] },
                VertexPartition { id: 1, vertices: vec![1] },
            ],
        };
        assert!(!overlapping.covers(2));
    }

    #[test]
    fn zero_parts_is_clamped() {
        let plan = PartitionPlan::from_assignment(0, [0, 0, 0]);
        assert_eq!(plan.num_parts(), 1);
        assert_eq!(HashPartitioner::new(0).n_parts, 1);
    }
}

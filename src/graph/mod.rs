//! Graph model: vertex snapshot + frozen edge set with referential integrity.
//!
//! A [`Graph`] is built once from input records. Construction is the single
//! pre-flight gate for the data model: duplicate ids, negative weights and edges
//! naming unknown vertices are rejected here, before any round can run.

pub mod anchor;
pub mod csr;
pub mod vertex;

use std::sync::Arc;

use hashbrown::HashMap;

pub use anchor::AnchorSet;
pub use csr::{EdgeSet, ResolvedEdge};
pub use vertex::{Label, Vertex, VertexSet};

use crate::io::{EdgeRecord, VertexRecord};
use crate::propagation_error::PropagationError;

/// Validated graph: current vertex snapshot plus the run-long edge set.
#[derive(Clone, Debug)]
pub struct Graph {
    vertices: VertexSet,
    edges: EdgeSet,
    index_of: Arc<HashMap<Arc<str>, usize>>,
}

impl Graph {
    /// Build and validate a graph from raw records.
    ///
    /// The `prelabelled` column is checked against `anchors` and always
    /// recomputed; disagreeing rows are logged, not trusted.
    ///
    /// # Errors
    /// - [`PropagationError::DuplicateVertex`] if an id repeats.
    /// - [`PropagationError::Schema`] for a negative edge weight.
    /// - [`PropagationError::ReferentialIntegrity`] for an edge endpoint that is
    ///   not a vertex id.
    pub fn from_records(
        vertex_records: &[VertexRecord],
        edge_records: &[EdgeRecord],
        anchors: &AnchorSet,
    ) -> Result<Self, PropagationError> {
        let mut index_of: HashMap<Arc<str>, usize> = HashMap::with_capacity(vertex_records.len());
        let mut vertices = Vec::with_capacity(vertex_records.len());
        let mut disagreements = 0usize;
        for (i, rec) in vertex_records.iter().enumerate() {
            let id: Arc<str> = Arc::from(rec.id.as_str());
            if index_of.insert(Arc::clone(&id), i).is_some() {
                return Err(PropagationError::DuplicateVertex { id: rec.id.clone() });
            }
            let v = Vertex::new(id, rec.label.as_str(), anchors);
            if v.prelabelled() != rec.prelabelled {
                disagreements += 1;
            }
            vertices.push(v);
        }
        if disagreements > 0 {
            log::warn!(
                "{disagreements} vertex record(s) carry a prelabelled flag that disagrees with the anchor set; recomputed"
            );
        }

        let mut resolved = Vec::with_capacity(edge_records.len());
        for (i, rec) in edge_records.iter().enumerate() {
            let weight = u64::try_from(rec.weight).map_err(|_| PropagationError::Schema {
                dataset: "edges",
                record: i + 1,
                message: format!("field `weight` must be non-negative, got {}", rec.weight),
            })?;
            let src = resolve(&index_of, &rec.src, i, "src")?;
            let dst = resolve(&index_of, &rec.dst, i, "dst")?;
            resolved.push(ResolvedEdge { src, dst, weight });
        }

        let edges = EdgeSet::freeze(vertices.len(), &resolved);
        log::debug!(
            "graph loaded: {} vertices, {} edges",
            vertices.len(),
            edges.len()
        );
        Ok(Self {
            vertices: VertexSet::from_vec(vertices),
            edges,
            index_of: Arc::new(index_of),
        })
    }

    /// Current vertex snapshot.
    #[inline]
    pub fn vertices(&self) -> &VertexSet {
        &self.vertices
    }

    /// Run-long edge set.
    #[inline]
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Dense index of vertex `id`.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_of.get(id).copied()
    }

    /// Vertex `id` in the current snapshot.
    pub fn vertex(&self, id: &str) -> Option<&Vertex> {
        self.index_of(id).and_then(|i| self.vertices.get(i))
    }

    /// Same topology with the next round's snapshot.
    pub(crate) fn with_vertices(&self, next: VertexSet) -> Self {
        debug_assert_eq!(next.len(), self.vertices.len());
        Self {
            vertices: next,
            edges: self.edges.clone(),
            index_of: Arc::clone(&self.index_of),
        }
    }
}

fn resolve(
    index_of: &HashMap<Arc<str>, usize>,
    id: &str,
    edge: usize,
    endpoint: &'static str,
) -> Result<usize, PropagationError> {
    index_of
        .get(id)
        .copied()
        .ok_or_else(|| PropagationError::ReferentialIntegrity {
            edge,
            endpoint,
            id: id.to_string(),
        })
}

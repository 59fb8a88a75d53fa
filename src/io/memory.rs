//! In-memory store for embedding and tests.

use parking_lot::Mutex;

use super::{EdgeRecord, GraphSource, LabelRecord, LabelSink, VertexRecord};
use crate::propagation_error::PropagationError;

/// Holds both input datasets and at most one published result.
#[derive(Debug, Default)]
pub struct MemoryStore {
    vertices: Vec<VertexRecord>,
    edges: Vec<EdgeRecord>,
    output: Mutex<Option<Vec<LabelRecord>>>,
}

impl MemoryStore {
    pub fn new(vertices: Vec<VertexRecord>, edges: Vec<EdgeRecord>) -> Self {
        Self {
            vertices,
            edges,
            output: Mutex::new(None),
        }
    }

    /// The published result, if any.
    pub fn output(&self) -> Option<Vec<LabelRecord>> {
        self.output.lock().clone()
    }
}

impl GraphSource for MemoryStore {
    fn read_vertices(&self) -> Result<Vec<VertexRecord>, PropagationError> {
        Ok(self.vertices.clone())
    }

    fn read_edges(&self) -> Result<Vec<EdgeRecord>, PropagationError> {
        Ok(self.edges.clone())
    }
}

impl LabelSink for MemoryStore {
    fn publish(&self, labels: &[LabelRecord]) -> Result<(), PropagationError> {
        let mut slot = self.output.lock();
        if slot.is_some() {
            return Err(PropagationError::Storage {
                location: "memory".into(),
                message: "a result has already been published".into(),
            });
        }
        *slot = Some(labels.to_vec());
        Ok(())
    }
}

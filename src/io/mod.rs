//! Dataset schemas and storage contracts.
//!
//! The engine never talks to a store directly. Inputs arrive through a
//! [`GraphSource`] and the result leaves through a [`LabelSink`]; the
//! implementations here are a JSON-Lines filesystem store ([`jsonl`]) and an
//! in-memory store ([`memory`]).

pub mod jsonl;
pub mod memory;

use serde::{Deserialize, Serialize};

use crate::propagation_error::PropagationError;

pub use jsonl::{JsonLinesSink, JsonLinesSource};
pub use memory::MemoryStore;

/// Vertex dataset row `{id, label, prelabelled}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub id: String,
    pub label: String,
    pub prelabelled: bool,
}

/// Edge dataset row `{src, dst, weight}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub src: String,
    pub dst: String,
    pub weight: i64,
}

/// Output dataset row `{id, label}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelRecord {
    pub id: String,
    pub label: String,
}

/// Read side of the storage contract.
pub trait GraphSource {
    /// All vertex rows, schema-checked.
    fn read_vertices(&self) -> Result<Vec<VertexRecord>, PropagationError>;
    /// All edge rows, schema-checked.
    fn read_edges(&self) -> Result<Vec<EdgeRecord>, PropagationError>;
}

/// Write side of the storage contract.
///
/// `publish` is all-or-nothing: after an error nothing is visible at the
/// destination, and publishing to a destination that already holds a result
/// fails instead of merging or overwriting.
pub trait LabelSink {
    fn publish(&self, labels: &[LabelRecord]) -> Result<(), PropagationError>;
}

//! PropagationError: Unified error type for anchor-propagation public APIs
//!
//! Every pre-flight check (schema, referential integrity, configuration) and
//! every storage operation reports through this type, so a failed run always
//! surfaces one descriptive error naming the offending id, field or location.

use thiserror::Error;

/// Unified error type for propagation runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PropagationError {
    /// A record in an input dataset is missing a column or has a mistyped one.
    #[error("Schema error in {dataset} dataset, record {record}: {message}")]
    Schema {
        /// `"vertices"` or `"edges"`.
        dataset: &'static str,
        /// 1-based record (line) number.
        record: usize,
        message: String,
    },
    /// An edge references a vertex id that is not in the vertex set.
    #[error("Referential integrity error: edge #{edge} {endpoint} `{id}` is not a known vertex")]
    ReferentialIntegrity {
        /// 0-based position of the edge in the edge dataset.
        edge: usize,
        /// `"src"` or `"dst"`.
        endpoint: &'static str,
        id: String,
    },
    /// Two vertex records share an id.
    #[error("Referential integrity error: vertex id `{id}` appears more than once")]
    DuplicateVertex { id: String },
    /// Invalid run configuration.
    #[error("Config error: {0}")]
    Config(String),
    /// Read or write failure against the external store.
    #[error("Storage error at `{location}`: {message}")]
    Storage { location: String, message: String },
    /// The iteration controller was driven out of order.
    #[error("Invalid controller state: expected {expected}, found {found}")]
    InvalidState {
        expected: &'static str,
        found: String,
    },
}

impl PropagationError {
    /// Wrap an I/O failure at `location`.
    pub fn storage(location: impl AsRef<std::path::Path>, err: impl std::fmt::Display) -> Self {
        PropagationError::Storage {
            location: location.as_ref().display().to_string(),
            message: err.to_string(),
        }
    }

    /// Process exit code for this error class. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            PropagationError::Config(_) => 2,
            PropagationError::Schema { .. } => 3,
            PropagationError::ReferentialIntegrity { .. }
            | PropagationError::DuplicateVertex { .. } => 4,
            PropagationError::Storage { .. } => 5,
            PropagationError::InvalidState { .. } => 70,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let e = PropagationError::ReferentialIntegrity {
            edge: 3,
            endpoint: "dst",
            id: "ghost".into(),
        };
        let msg = e.to_string();
        assert!(msg.contains("ghost") && msg.contains("dst") && msg.contains("#3"));

        let e = PropagationError::Schema {
            dataset: "edges",
            record: 7,
            message: "missing field `weight`".into(),
        };
        assert!(e.to_string().contains("record 7"));
    }

    #[test]
    fn exit_codes_are_nonzero_and_distinct_per_class() {
        let errs = [
            PropagationError::Config("rounds".into()),
            PropagationError::Schema { dataset: "vertices", record: 1, message: String::new() },
            PropagationError::DuplicateVertex { id: "a".into() },
            PropagationError::storage("/tmp/x", "denied"),
            PropagationError::InvalidState { expected: "Done", found: "Idle".into() },
        ];
        let mut codes: Vec<i32> = errs.iter().map(|e| e.exit_code()).collect();
        assert!(codes.iter().all(|&c| c != 0));
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
    }
}

#![cfg_attr(docsrs, feature(doc_cfg))]
//! # anchor-propagation
//!
//! anchor-propagation assigns community labels to the vertices of a large directed,
//! weighted interaction graph by spreading labels outward from a fixed set of anchor
//! labels, over a configured number of bulk-synchronous rounds.
//!
//! ## Features
//! - Validated graph model: unique ids, non-negative weights, and referential
//!   integrity are checked before any round runs
//! - Pure round stages (weight adjustment, aggregation, selection, anchor policy)
//!   over immutable snapshots
//! - Partitioned rounds on Rayon's worker pool (feature `rayon`, on by default) with
//!   output independent of partition count and scheduling
//! - Iteration controller with an explicit Idle/Running/Done/Failed lifecycle
//! - JSON-Lines and in-memory storage with all-or-nothing, no-overwrite publishing
//!
//! ## Determinism
//!
//! A run's output is a pure function of the input graph, the round count and the
//! anchor set. Ties between equally weighted labels go to the lexicographically
//! smallest label.
//!
//! ## Usage
//!
//! ```rust
//! use anchor_propagation::prelude::*;
//!
//! let anchors = AnchorSet::new(["Bernie"]).unwrap();
//! let store = MemoryStore::new(
//!     vec![
//!         VertexRecord { id: "A".into(), label: "Bernie".into(), prelabelled: true },
//!         VertexRecord { id: "B".into(), label: "".into(), prelabelled: false },
//!     ],
//!     vec![EdgeRecord { src: "B".into(), dst: "A".into(), weight: 5 }],
//! );
//! let config = PropagationConfig::new(1, anchors).unwrap();
//! run_with(&config, &store, &store).unwrap();
//! assert_eq!(store.output().unwrap()[1].label, "Bernie");
//! ```

pub mod algs;
pub mod config;
pub mod controller;
pub mod export;
pub mod graph;
pub mod io;
pub mod partitioning;
pub mod pipeline;
pub mod propagation_error;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::{RoundStats, propagate, superstep};
    pub use crate::config::{ConfigFile, PropagationConfig, RunConfig};
    pub use crate::controller::{IterationController, RunState};
    pub use crate::export::export_labels;
    pub use crate::graph::{AnchorSet, EdgeSet, Graph, Label, Vertex, VertexSet};
    pub use crate::io::{
        EdgeRecord, GraphSource, JsonLinesSink, JsonLinesSource, LabelRecord, LabelSink,
        MemoryStore, VertexRecord,
    };
    pub use crate::partitioning::graph_traits::GraphPartition;
    pub use crate::partitioning::{HashPartitioner, PartitionPlan, Partitioner, SinglePartition};
    pub use crate::pipeline::{RunSummary, run, run_with};
    pub use crate::propagation_error::PropagationError;
}

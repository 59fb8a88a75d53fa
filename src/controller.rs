//! Iteration controller: sequences rounds over an exclusively owned graph.
//!
//! ```text
//! Idle ──start──▶ Running(1 of k) ──step──▶ … ──step──▶ Done ──export──▶ rows
//!                        │                                 │
//!                        └──────────── fail ──▶ Failed ◀───┘
//! ```
//!
//! Rounds are strictly sequential; each step runs one complete round against
//! the previous snapshot. A failed controller drops its graph, so nothing can
//! be exported from it.

use std::fmt;

use itertools::Itertools;

use crate::algs::superstep::{RoundStats, superstep};
use crate::config::PropagationConfig;
use crate::export::export_labels;
use crate::graph::Graph;
use crate::io::LabelRecord;
use crate::partitioning::{HashPartitioner, PartitionPlan, Partitioner, SinglePartition};
use crate::propagation_error::PropagationError;

/// Controller lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    /// About to execute round `round` (1-based) of `of`.
    Running { round: usize, of: usize },
    Done,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunState::Idle => write!(f, "Idle"),
            RunState::Running { round, of } => write!(f, "Running(round {round} of {of})"),
            RunState::Done => write!(f, "Done"),
            RunState::Failed => write!(f, "Failed"),
        }
    }
}

/// Drives a validated graph through the configured number of rounds.
#[derive(Debug)]
pub struct IterationController {
    config: PropagationConfig,
    graph: Option<Graph>,
    plan: Option<PartitionPlan>,
    state: RunState,
    history: Vec<RoundStats>,
    exported: bool,
}

impl IterationController {
    /// Take ownership of `graph`. The graph must have been built with the same
    /// anchor set as `config`.
    pub fn new(graph: Graph, config: PropagationConfig) -> Self {
        Self {
            config,
            graph: Some(graph),
            plan: None,
            state: RunState::Idle,
            history: Vec::new(),
            exported: false,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn config(&self) -> &PropagationConfig {
        &self.config
    }

    /// Per-round statistics so far.
    pub fn history(&self) -> &[RoundStats] {
        &self.history
    }

    /// Current snapshot; `None` once failed.
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    /// Idle → Running.
    pub fn start(&mut self) -> Result<(), PropagationError> {
        if self.state != RunState::Idle {
            return Err(self.invalid("Idle"));
        }
        let graph = self.graph.as_ref().ok_or_else(|| self.invalid("a graph"))?;
        let plan = if self.config.partitions() > 1 {
            HashPartitioner::new(self.config.partitions()).plan(graph)
        } else {
            SinglePartition.plan(graph)
        };
        log::info!(
            "starting {} round(s) over {} vertices / {} edges in {} partition(s); anchors: {}",
            self.config.rounds(),
            graph.vertices().len(),
            graph.edges().len(),
            plan.num_parts(),
            self.config.anchors().iter().join(", ")
        );
        self.plan = Some(plan);
        self.state = RunState::Running {
            round: 1,
            of: self.config.rounds(),
        };
        Ok(())
    }

    /// Execute one round. Returns the state after the round.
    pub fn step(&mut self) -> Result<RunState, PropagationError> {
        let RunState::Running { round, of } = self.state else {
            return Err(self.invalid("Running"));
        };
        let (Some(graph), Some(plan)) = (self.graph.as_ref(), self.plan.as_ref()) else {
            return Err(self.invalid("a graph"));
        };
        let (next, stats) = superstep(graph, plan, self.config.anchors(), round);
        log::info!(
            "round {}/{}: {} label(s) changed, {} anchor(s)",
            stats.round,
            of,
            stats.changed,
            stats.anchors
        );
        self.graph = Some(next);
        self.history.push(stats);

        self.state = if round >= of {
            RunState::Done
        } else if self.config.stop_when_stable() && stats.changed == 0 {
            // a round that changes nothing leaves every later round's inputs unchanged
            log::info!("stable after round {round}; skipping {} remaining round(s)", of - round);
            RunState::Done
        } else {
            RunState::Running { round: round + 1, of }
        };
        Ok(self.state)
    }

    /// Start if idle, then step until Done.
    pub fn run(&mut self) -> Result<(), PropagationError> {
        if self.state == RunState::Idle {
            self.start()?;
        }
        while let RunState::Running { .. } = self.state {
            self.step()?;
        }
        match self.state {
            RunState::Done => Ok(()),
            _ => Err(self.invalid("Done")),
        }
    }

    /// The `(id, label)` result. Only from Done, and only once.
    pub fn export(&mut self) -> Result<Vec<LabelRecord>, PropagationError> {
        if self.state != RunState::Done {
            return Err(self.invalid("Done"));
        }
        if self.exported {
            return Err(PropagationError::InvalidState {
                expected: "Done (not yet exported)",
                found: "Done (already exported)".into(),
            });
        }
        let graph = self.graph.as_ref().ok_or_else(|| self.invalid("a graph"))?;
        let rows = export_labels(graph.vertices());
        self.exported = true;
        Ok(rows)
    }

    /// Record a failure from any stage: drop the graph and move to Failed.
    pub fn fail(&mut self, err: PropagationError) -> PropagationError {
        log::error!("run failed in state {}: {err}", self.state);
        self.state = RunState::Failed;
        self.graph = None;
        self.plan = None;
        err
    }

    fn invalid(&self, expected: &'static str) -> PropagationError {
        PropagationError::InvalidState {
            expected,
            found: self.state.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::AnchorSet;
    use crate::io::{EdgeRecord, VertexRecord};

    fn controller(rounds: i64, stop: bool) -> IterationController {
        let anchors = AnchorSet::new(["Bernie"]).unwrap();
        let g = Graph::from_records(
            &[
                VertexRecord { id: "A".into(), label: "Bernie".into(), prelabelled: true },
                VertexRecord { id: "B".into(), label: "".into(), prelabelled: false },
            ],
            &[EdgeRecord { src: "B".into(), dst: "A".into(), weight: 5 }],
            &anchors,
        )
        .unwrap();
        let cfg = PropagationConfig::new(rounds, anchors)
            .unwrap()
            .with_stop_when_stable(stop);
        IterationController::new(g, cfg)
    }

    #[test]
    fn walks_the_state_machine() {
        let mut c = controller(2, false);
        assert_eq!(c.state(), RunState::Idle);
        assert!(c.step().is_err());
        c.start().unwrap();
        assert_eq!(c.state(), RunState::Running { round: 1, of: 2 });
        assert!(c.export().is_err());
        assert_eq!(c.step().unwrap(), RunState::Running { round: 2, of: 2 });
        assert_eq!(c.step().unwrap(), RunState::Done);
        assert!(c.step().is_err());
        assert!(c.start().is_err());
        assert_eq!(c.history().len(), 2);
        assert_eq!(c.history()[0].changed, 1);
        assert_eq!(c.history()[1].changed, 0);
    }

    #[test]
    fn exports_exactly_once() {
        let mut c = controller(1, false);
        c.run().unwrap();
        let rows = c.export().unwrap();
        assert_eq!(rows[1].label, "Bernie");
        assert!(matches!(c.export(), Err(PropagationError::InvalidState { .. })));
    }

    #[test]
    fn stops_early_when_stable() {
        let mut c = controller(10, true);
        c.run().unwrap();
        // round 1 relabels B, round 2 changes nothing
        assert_eq!(c.history().len(), 2);
        assert_eq!(c.state(), RunState::Done);
    }

    #[test]
    fn failed_controller_cannot_export() {
        let mut c = controller(1, false);
        c.run().unwrap();
        let err = c.fail(PropagationError::storage("out", "disk full"));
        assert!(matches!(err, PropagationError::Storage { .. }));
        assert_eq!(c.state(), RunState::Failed);
        assert!(c.graph().is_none());
        assert!(c.export().is_err());
    }
}

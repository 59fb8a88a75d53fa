//! End-to-end run: read → validate → propagate → export → publish.

use crate::algs::superstep::RoundStats;
use crate::config::{PropagationConfig, RunConfig};
use crate::controller::IterationController;
use crate::graph::Graph;
use crate::io::{GraphSource, JsonLinesSink, JsonLinesSource, LabelSink};
use crate::propagation_error::PropagationError;

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub vertices: usize,
    pub edges: usize,
    pub rounds_requested: usize,
    /// Fewer than requested only when stopping early on a stable round.
    pub rounds_run: usize,
    /// Prelabelled vertices in the published result.
    pub anchors: usize,
    pub history: Vec<RoundStats>,
}

/// Run against arbitrary storage.
///
/// All validation happens before the first round; the sink is only called
/// after the last round, with the complete result.
pub fn run_with<S, K>(
    config: &PropagationConfig,
    source: &S,
    sink: &K,
) -> Result<RunSummary, PropagationError>
where
    S: GraphSource + ?Sized,
    K: LabelSink + ?Sized,
{
    let vertex_records = source.read_vertices()?;
    let edge_records = source.read_edges()?;
    let graph = Graph::from_records(&vertex_records, &edge_records, config.anchors())?;
    drop(vertex_records);
    drop(edge_records);

    let vertices = graph.vertices().len();
    let edges = graph.edges().len();
    let mut controller = IterationController::new(graph, config.clone());
    if let Err(e) = controller.run() {
        return Err(controller.fail(e));
    }
    let anchors = controller
        .graph()
        .map_or(0, |g| g.vertices().anchor_count());
    let rows = match controller.export() {
        Ok(rows) => rows,
        Err(e) => return Err(controller.fail(e)),
    };
    if let Err(e) = sink.publish(&rows) {
        return Err(controller.fail(e));
    }

    let history = controller.history().to_vec();
    Ok(RunSummary {
        vertices,
        edges,
        rounds_requested: config.rounds(),
        rounds_run: history.len(),
        anchors,
        history,
    })
}

/// Run against the JSON-Lines files named in `config`.
pub fn run(config: &RunConfig) -> Result<RunSummary, PropagationError> {
    if config.output_destination.exists() {
        return Err(PropagationError::storage(
            &config.output_destination,
            "output destination already exists; refusing to overwrite",
        ));
    }
    let source = JsonLinesSource::new(&config.vertices_source, &config.edges_source);
    let sink = JsonLinesSink::new(&config.output_destination);
    run_with(&config.engine, &source, &sink)
}

//! anchor-propagation CLI
//!
//! Usage:
//!   anchor-propagation <ROUNDS> --config run.json
//!   anchor-propagation <ROUNDS> --vertices v.jsonl --edges e.jsonl --output labels.jsonl
//!
//! Exits 0 on success; on failure prints the error and exits with the error
//! class's non-zero code.

use std::path::PathBuf;
use std::process;

use anchor_propagation::config::{ConfigFile, RunConfig};
use anchor_propagation::pipeline;
use anchor_propagation::propagation_error::PropagationError;
use clap::Parser;

#[derive(Parser)]
#[command(name = "anchor-propagation")]
#[command(version)]
#[command(about = "Anchor-seeded label propagation over a directed weighted graph")]
struct Cli {
    /// Number of synchronous rounds (positive integer)
    #[arg(value_name = "ROUNDS", allow_negative_numbers = true)]
    rounds: i64,

    /// JSON config file; flags below override its values
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Vertex dataset (JSON Lines: id, label, prelabelled)
    #[arg(long, value_name = "PATH")]
    vertices: Option<PathBuf>,

    /// Edge dataset (JSON Lines: src, dst, weight)
    #[arg(long, value_name = "PATH")]
    edges: Option<PathBuf>,

    /// Result location; must not exist yet
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Anchor label (repeatable); without any, the 17 default community labels are anchors
    #[arg(short, long = "anchor", value_name = "LABEL")]
    anchors: Vec<String>,

    /// Vertex partitions per round
    #[arg(short, long, value_name = "N")]
    partitions: Option<usize>,

    /// Stop early once a round changes no label
    #[arg(long)]
    stop_when_stable: bool,
}

impl Cli {
    fn overrides(&self) -> ConfigFile {
        ConfigFile {
            anchor_labels: (!self.anchors.is_empty()).then(|| self.anchors.clone()),
            vertices_source: self.vertices.clone(),
            edges_source: self.edges.clone(),
            output_destination: self.output.clone(),
            partitions: self.partitions,
            stop_when_stable: self.stop_when_stable.then_some(true),
        }
    }
}

fn resolve(cli: &Cli) -> Result<RunConfig, PropagationError> {
    let base = match &cli.config {
        Some(path) => ConfigFile::load(path)?,
        None => ConfigFile::default(),
    };
    RunConfig::resolve(cli.rounds, base.merge(cli.overrides()))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let result = resolve(&cli).and_then(|config| {
        pipeline::run(&config).map(|summary| (config, summary))
    });
    match result {
        Ok((config, summary)) => {
            println!(
                "labelled {} vertices over {}/{} round(s); {} anchored; written to {}",
                summary.vertices,
                summary.rounds_run,
                summary.rounds_requested,
                summary.anchors,
                config.output_destination.display()
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(e.exit_code());
        }
    }
}

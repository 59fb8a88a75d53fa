//! Run configuration.
//!
//! [`PropagationConfig`] is what the engine needs; [`RunConfig`] adds the
//! dataset locations used by the pipeline. Both are validated once at
//! construction and read-only afterwards.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::graph::AnchorSet;
use crate::partitioning::parallel::default_partitions;
use crate::propagation_error::PropagationError;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropagationConfig {
    rounds: usize,
    anchors: AnchorSet,
    partitions: usize,
    stop_when_stable: bool,
}

impl PropagationConfig {
    /// Validate `rounds >= 1`; the anchor set is non-empty by construction.
    pub fn new(rounds: i64, anchors: AnchorSet) -> Result<Self, PropagationError> {
        if rounds <= 0 {
            return Err(PropagationError::Config(format!(
                "rounds must be a positive integer, got {rounds}"
            )));
        }
        let rounds = usize::try_from(rounds)
            .map_err(|_| PropagationError::Config(format!("rounds {rounds} is too large")))?;
        Ok(Self {
            rounds,
            anchors,
            partitions: default_partitions(),
            stop_when_stable: false,
        })
    }

    /// Number of vertex partitions processed per round (clamped to at least 1).
    pub fn with_partitions(mut self, partitions: usize) -> Self {
        self.partitions = partitions.max(1);
        self
    }

    /// Stop as soon as a round changes no label.
    pub fn with_stop_when_stable(mut self, stop: bool) -> Self {
        self.stop_when_stable = stop;
        self
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn anchors(&self) -> &AnchorSet {
        &self.anchors
    }

    pub fn partitions(&self) -> usize {
        self.partitions
    }

    pub fn stop_when_stable(&self) -> bool {
        self.stop_when_stable
    }
}

/// On-disk configuration file (JSON). Every field is optional so command-line
/// flags can fill or override it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    pub anchor_labels: Option<Vec<String>>,
    pub vertices_source: Option<PathBuf>,
    pub edges_source: Option<PathBuf>,
    pub output_destination: Option<PathBuf>,
    pub partitions: Option<usize>,
    pub stop_when_stable: Option<bool>,
}

impl ConfigFile {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PropagationError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PropagationError::storage(path, e))?;
        serde_json::from_str(&text).map_err(|e| {
            PropagationError::Config(format!("invalid config file {}: {e}", path.display()))
        })
    }

    /// Field-wise override: values present in `other` win.
    pub fn merge(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            anchor_labels: other.anchor_labels.or(self.anchor_labels),
            vertices_source: other.vertices_source.or(self.vertices_source),
            edges_source: other.edges_source.or(self.edges_source),
            output_destination: other.output_destination.or(self.output_destination),
            partitions: other.partitions.or(self.partitions),
            stop_when_stable: other.stop_when_stable.or(self.stop_when_stable),
        }
    }
}

/// Complete pipeline configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub engine: PropagationConfig,
    pub vertices_source: PathBuf,
    pub edges_source: PathBuf,
    pub output_destination: PathBuf,
}

impl RunConfig {
    /// Resolve a merged [`ConfigFile`] and a round count into a run config.
    ///
    /// Without `anchor_labels` the canonical community set is used.
    pub fn resolve(rounds: i64, file: ConfigFile) -> Result<Self, PropagationError> {
        let anchors = match file.anchor_labels {
            Some(labels) => AnchorSet::new(labels)?,
            None => {
                let anchors = AnchorSet::communities();
                log::info!(
                    "no anchor_labels configured; using the {} default community labels",
                    anchors.len()
                );
                anchors
            }
        };
        let mut engine = PropagationConfig::new(rounds, anchors)?
            .with_stop_when_stable(file.stop_when_stable.unwrap_or(false));
        if let Some(p) = file.partitions {
            engine = engine.with_partitions(p);
        }
        Ok(Self {
            engine,
            vertices_source: required(file.vertices_source, "vertices_source")?,
            edges_source: required(file.edges_source, "edges_source")?,
            output_destination: required(file.output_destination, "output_destination")?,
        })
    }
}

fn required(value: Option<PathBuf>, name: &str) -> Result<PathBuf, PropagationError> {
    value.ok_or_else(|| PropagationError::Config(format!("`{name}` is required")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> ConfigFile {
        ConfigFile {
            vertices_source: Some("v.jsonl".into()),
            edges_source: Some("e.jsonl".into()),
            output_destination: Some("out.jsonl".into()),
            ..Default::default()
        }
    }

    #[test]
    fn non_positive_rounds_rejected() {
        for r in [0, -3] {
            let err = PropagationConfig::new(r, AnchorSet::communities()).unwrap_err();
            assert!(matches!(err, PropagationError::Config(_)), "{r}");
        }
    }

    #[test]
    fn empty_anchor_list_rejected() {
        let file = ConfigFile {
            anchor_labels: Some(vec![]),
            ..full()
        };
        assert!(matches!(
            RunConfig::resolve(3, file),
            Err(PropagationError::Config(_))
        ));
    }

    #[test]
    fn defaults_to_canonical_communities() {
        let rc = RunConfig::resolve(2, full()).unwrap();
        assert_eq!(rc.engine.rounds(), 2);
        assert!(rc.engine.anchors().contains("FOX"));
        assert!(!rc.engine.stop_when_stable());
        assert!(rc.engine.partitions() >= 1);
    }

    #[test]
    fn missing_location_is_named() {
        let file = ConfigFile {
            edges_source: None,
            ..full()
        };
        match RunConfig::resolve(1, file) {
            Err(PropagationError::Config(msg)) => assert!(msg.contains("edges_source")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn merge_prefers_override() {
        let base = ConfigFile {
            partitions: Some(4),
            anchor_labels: Some(vec!["A".into()]),
            ..full()
        };
        let merged = base.merge(ConfigFile {
            partitions: Some(9),
            ..Default::default()
        });
        assert_eq!(merged.partitions, Some(9));
        assert_eq!(merged.anchor_labels, Some(vec!["A".to_string()]));
        assert_eq!(merged.vertices_source, Some(PathBuf::from("v.jsonl")));
    }

    #[test]
    fn parses_json_file() {
        let parsed: ConfigFile = serde_json::from_str(
            r#"{"anchor_labels": ["Bernie"], "vertices_source": "v", "partitions": 3}"#,
        )
        .unwrap();
        assert_eq!(parsed.partitions, Some(3));
        assert!(serde_json::from_str::<ConfigFile>(r#"{"roundz": 3}"#).is_err());
    }
}

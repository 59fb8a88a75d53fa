//! JSON-Lines filesystem store.
//!
//! One JSON object per line. Columns beyond the schema are ignored; a missing
//! or mistyped column is a [`PropagationError::Schema`] naming the line.
//! Blank lines are skipped.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use super::{EdgeRecord, GraphSource, LabelRecord, LabelSink, VertexRecord};
use crate::propagation_error::PropagationError;

/// Reads the vertex and edge datasets from two JSON-Lines files.
#[derive(Clone, Debug)]
pub struct JsonLinesSource {
    vertices: PathBuf,
    edges: PathBuf,
}

impl JsonLinesSource {
    pub fn new(vertices: impl Into<PathBuf>, edges: impl Into<PathBuf>) -> Self {
        Self {
            vertices: vertices.into(),
            edges: edges.into(),
        }
    }
}

impl GraphSource for JsonLinesSource {
    fn read_vertices(&self) -> Result<Vec<VertexRecord>, PropagationError> {
        read_records(&self.vertices, "vertices")
    }

    fn read_edges(&self) -> Result<Vec<EdgeRecord>, PropagationError> {
        read_records(&self.edges, "edges")
    }
}

// Lines are split as raw bytes so bad encoding is reported against its record.
fn read_records<T: DeserializeOwned>(
    path: &Path,
    dataset: &'static str,
) -> Result<Vec<T>, PropagationError> {
    let file = File::open(path).map_err(|e| PropagationError::storage(path, e))?;
    let mut out = Vec::new();
    for (i, line) in BufReader::new(file).split(b'\n').enumerate() {
        let line = line.map_err(|e| PropagationError::storage(path, e))?;
        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        let rec = serde_json::from_slice(&line).map_err(|e| PropagationError::Schema {
            dataset,
            record: i + 1,
            message: e.to_string(),
        })?;
        out.push(rec);
    }
    log::debug!("read {} {dataset} records from {}", out.len(), path.display());
    Ok(out)
}

/// Publishes the result as a JSON-Lines file at a fresh destination.
#[derive(Clone, Debug)]
pub struct JsonLinesSink {
    destination: PathBuf,
}

impl JsonLinesSink {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    fn staging_dir(&self) -> &Path {
        self.destination
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."))
    }

    /// Write `labels` to a fresh, synced staging file next to the destination.
    ///
    /// The staging file is removed when the returned handle is dropped.
    fn stage(&self, labels: &[LabelRecord]) -> Result<NamedTempFile, PropagationError> {
        let dir = self.staging_dir();
        let mut prefix = self
            .destination
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        prefix.push(".partial-");
        let mut staged = tempfile::Builder::new()
            .prefix(&prefix)
            .tempfile_in(dir)
            .map_err(|e| PropagationError::storage(dir, e))?;
        write_lines(staged.as_file_mut(), labels)
            .map_err(|e| PropagationError::storage(staged.path(), e))?;
        Ok(staged)
    }

    /// Link the staged file into place; fails if the destination exists.
    fn commit(&self, staged: NamedTempFile) -> Result<(), PropagationError> {
        staged
            .persist_noclobber(&self.destination)
            .map(drop)
            .map_err(|e| PropagationError::storage(&self.destination, e.error))
    }
}

fn write_lines(file: &mut File, labels: &[LabelRecord]) -> std::io::Result<()> {
    let mut w = BufWriter::new(&mut *file);
    for rec in labels {
        serde_json::to_writer(&mut w, rec)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    drop(w);
    file.sync_all()
}

impl LabelSink for JsonLinesSink {
    fn publish(&self, labels: &[LabelRecord]) -> Result<(), PropagationError> {
        let dest = &self.destination;
        if dest.exists() {
            return Err(PropagationError::storage(
                dest,
                "output destination already exists; refusing to overwrite",
            ));
        }
        let dir = self.staging_dir();
        fs::create_dir_all(dir).map_err(|e| PropagationError::storage(dir, e))?;

        let staged = self.stage(labels)?;
        self.commit(staged)?;
        log::info!("published {} labels to {}", labels.len(), dest.display());
        Ok(())
    }
}

// CSV ingestion for the two dataset files.
//
// News text is full of quoted fields with embedded commas and newlines, so
// rows go through a real CSV reader rather than line splitting. Any bad
// row aborts the load; a partially loaded dataset would silently skew the
// feature matrix.

use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::dataset::models::{Bodies, BodyId, Stance, StanceLabel};
use crate::error::{Result, StandfirstError};

#[derive(Debug, Deserialize)]
struct BodyRow {
    #[serde(rename = "Body ID")]
    body_id: BodyId,
    #[serde(rename = "articleBody")]
    article_body: String,
}

#[derive(Debug, Deserialize)]
struct StanceRow {
    #[serde(rename = "Headline")]
    headline: String,
    #[serde(rename = "Body ID")]
    body_id: BodyId,
    #[serde(rename = "Stance")]
    stance: StanceLabel,
}

/// Read the bodies file into an id -> text map.
///
/// The id column is documented unique, so a duplicate only shows up in a
/// malformed export; the later row wins and the collision is logged.
pub fn load_bodies(path: &Path) -> Result<Bodies> {
    let mut reader = open(path)?;
    let mut bodies = Bodies::new();
    for row in reader.deserialize() {
        let row: BodyRow = row.map_err(|e| classify(path, e))?;
        if bodies.insert(row.body_id, row.article_body).is_some() {
            warn!(body_id = row.body_id, "duplicate body id, keeping the later row");
        }
    }
    info!(count = bodies.len(), path = %path.display(), "loaded bodies");
    Ok(bodies)
}

/// Read the stances file, preserving input row order. Row i of the file is
/// element i of the result and row i of every downstream collection.
pub fn load_stances(path: &Path) -> Result<Vec<Stance>> {
    let mut reader = open(path)?;
    let mut stances = Vec::new();
    for row in reader.deserialize() {
        let row: StanceRow = row.map_err(|e| classify(path, e))?;
        stances.push(Stance {
            headline: row.headline,
            body_id: row.body_id,
            stance: row.stance,
        });
    }
    info!(count = stances.len(), path = %path.display(), "loaded stances");
    Ok(stances)
}

fn open(path: &Path) -> Result<csv::Reader<std::fs::File>> {
    csv::Reader::from_path(path).map_err(|e| classify(path, e))
}

/// Fold a csv error into the crate taxonomy, keeping the file path and the
/// 1-based line where the bad record starts.
fn classify(path: &Path, err: csv::Error) -> StandfirstError {
    let line = err.position().map(|p| p.line()).unwrap_or(0);
    match err.into_kind() {
        csv::ErrorKind::Io(source) => StandfirstError::Io {
            path: path.to_path_buf(),
            source,
        },
        csv::ErrorKind::Utf8 { pos, .. } => StandfirstError::Decoding {
            path: path.to_path_buf(),
            line: pos.map(|p| p.line()).unwrap_or(line),
        },
        csv::ErrorKind::Deserialize { pos, err } => StandfirstError::Parse {
            path: path.to_path_buf(),
            line: pos.map(|p| p.line()).unwrap_or(line),
            message: err.to_string(),
        },
        csv::ErrorKind::UnequalLengths { pos, expected_len, len } => StandfirstError::Parse {
            path: path.to_path_buf(),
            line: pos.map(|p| p.line()).unwrap_or(line),
            message: format!("expected {expected_len} columns, found {len}"),
        },
        other => StandfirstError::Parse {
            path: path.to_path_buf(),
            line,
            message: format!("{other:?}"),
        },
    }
}

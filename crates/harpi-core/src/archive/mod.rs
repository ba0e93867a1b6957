//! Archive model: parsed HAR logs and the stored HAR artifact.

mod har;
mod parse;

pub use har::{DiagramId, Har, HarId, ProjectId, SpecId};
pub use parse::{ArchiveLog, Entry, NameValue, Request, Response};

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Top-level wrapper of a `.har` file on disk.
#[derive(Debug, Deserialize)]
struct HarFile {
    #[serde(default)]
    log: Option<ArchiveLog>,
}

/// Reads a `.har` file into a [`Har`] named (and identified) by the file stem.
///
/// Only JSON shape is checked here; an absent or empty log is left for the
/// orchestration layer to reject.
pub fn load_har_file(path: &Path, project: ProjectId) -> Result<Har> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read HAR file: {}", path.display()))?;
    let file: HarFile = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse HAR JSON: {}", path.display()))?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("har")
        .to_string();

    tracing::debug!(
        path = %path.display(),
        entries = file.log.as_ref().map_or(0, |l| l.entries.len()),
        "loaded HAR file"
    );

    Ok(Har::new(HarId::new(name.clone()), name, project, file.log))
}

//! `harpi spec <path>` – generate an API spec through the external transformer.

use anyhow::{Context, Result};
use harpi_core::archive::{load_har_file, ProjectId};
use harpi_core::config::{self, HarpiConfig};
use harpi_core::pipeline::{generate_spec, CommandTransformer};
use std::path::Path;

use super::emit;

pub fn run_spec(
    cfg: &HarpiConfig,
    path: &Path,
    project: ProjectId,
    command: Option<String>,
    args: Vec<String>,
    output: Option<&Path>,
) -> Result<()> {
    let transformer = match command {
        Some(program) => CommandTransformer::new(program, args),
        None => cfg.transformer().with_context(|| {
            let location = config::config_path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "config.toml".to_string());
            format!("no spec transformer configured; pass --command or set [transformer] in {location}")
        })?,
    };

    let har = load_har_file(path, project)?;
    let artifact = generate_spec(&har, &transformer)?;

    let mut json = serde_json::to_string_pretty(&artifact.draft)?;
    json.push('\n');
    emit(&json, output)
}

//! `harpi participants <path>` – show the participant registry.

use anyhow::{bail, Result};
use harpi_core::archive::{load_har_file, ProjectId};
use harpi_core::config::HarpiConfig;
use harpi_core::sequence::compile;
use std::path::Path;

pub fn run_participants(cfg: &HarpiConfig, path: &Path, project: ProjectId) -> Result<()> {
    let har = load_har_file(path, project)?;
    let Some(log) = har.log.as_ref() else {
        bail!("HAR file has no log: {}", path.display());
    };

    let compiled = compile(log, &cfg.naming());
    for p in compiled.registry.participants() {
        println!("{}\t{}", p.id, p.name);
    }
    Ok(())
}

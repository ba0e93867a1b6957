//! `harpi diagram <path>` – render a sequence diagram.

use anyhow::Result;
use harpi_core::archive::{load_har_file, ProjectId};
use harpi_core::config::HarpiConfig;
use harpi_core::pipeline::create_diagram;
use harpi_core::render::Notation;
use std::path::Path;

use super::emit;

pub fn run_diagram(
    cfg: &HarpiConfig,
    path: &Path,
    project: ProjectId,
    notation: Option<Notation>,
    output: Option<&Path>,
) -> Result<()> {
    let har = load_har_file(path, project)?;
    let mut options = cfg.diagram_options();
    if let Some(notation) = notation {
        options.notation = notation;
    }

    let artifact = create_diagram(&har, &options)?;
    tracing::debug!(
        participants = artifact.draft.participant_count,
        "diagram for {}",
        path.display()
    );
    emit(&artifact.draft.text, output)
}

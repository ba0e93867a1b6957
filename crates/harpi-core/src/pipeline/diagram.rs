//! Diagram path: compile a HAR's log and render it to diagram text.

use serde::{Deserialize, Serialize};

use super::{ArtifactKind, ArtifactLink};
use crate::archive::{ArchiveLog, Har, HarId, ProjectId};
use crate::error::HarpiError;
use crate::naming::NamingOptions;
use crate::render::Notation;
use crate::sequence;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagramOptions {
    pub naming: NamingOptions,
    pub notation: Notation,
}

/// Diagram text plus the number of declared participants (caller included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDiagram {
    pub text: String,
    pub participant_count: usize,
}

/// Diagram payload for the store to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramDraft {
    pub title: String,
    pub text: String,
    pub notation: Notation,
    pub participant_count: usize,
    pub har: HarId,
    pub project: ProjectId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagramArtifact {
    pub draft: DiagramDraft,
    pub link: ArtifactLink,
}

/// Compiles and renders `log`. An empty log renders the caller alone.
pub fn render_log(log: &ArchiveLog, options: &DiagramOptions) -> Result<RenderedDiagram, HarpiError> {
    let compiled = sequence::compile(log, &options.naming);
    let text = options.notation.renderer().render(&compiled)?;
    Ok(RenderedDiagram {
        text,
        participant_count: compiled.participant_count(),
    })
}

/// Builds a diagram draft for `har`. Fails only if the HAR has no log.
pub fn create_diagram(har: &Har, options: &DiagramOptions) -> Result<DiagramArtifact, HarpiError> {
    let log = har.log.as_ref().ok_or_else(|| {
        tracing::warn!(har = %har.id, "diagram requested for HAR without log");
        HarpiError::validation(format!("HAR {} has no log", har.id))
    })?;

    let rendered = render_log(log, options)?;
    tracing::info!(
        har = %har.id,
        notation = %options.notation,
        participants = rendered.participant_count,
        "diagram generated"
    );

    Ok(DiagramArtifact {
        draft: DiagramDraft {
            title: har.name.clone(),
            text: rendered.text,
            notation: options.notation,
            participant_count: rendered.participant_count,
            har: har.id.clone(),
            project: har.project.clone(),
        },
        link: ArtifactLink {
            har: har.id.clone(),
            kind: ArtifactKind::Diagram,
        },
    })
}

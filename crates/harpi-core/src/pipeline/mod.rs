//! Orchestration of the two artifact paths (spec and diagram) for a stored HAR.
//!
//! The core never persists anything. Each path returns a draft payload plus
//! an [`ArtifactLink`] the calling layer applies once it has stored the
//! draft and knows its id.

mod diagram;
mod spec;
mod transformer;

pub use diagram::{
    create_diagram, render_log, DiagramArtifact, DiagramDraft, DiagramOptions, RenderedDiagram,
};
pub use spec::{generate_spec, validate_har, SpecArtifact, SpecDraft, ValidatedHar};
pub use transformer::{CommandTransformer, SpecTransformer};

use serde::Serialize;

use crate::archive::{DiagramId, Har, HarId, SpecId};
use crate::error::HarpiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    Spec,
    Diagram,
}

/// Instruction to record a persisted artifact on its source HAR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactLink {
    pub har: HarId,
    pub kind: ArtifactKind,
}

impl ArtifactLink {
    /// Appends `artifact_id` to the matching id list on `har`.
    ///
    /// Returns `Ok(false)` if the id was already linked, and a validation
    /// error if `har` is not the HAR this link was produced for.
    pub fn apply(&self, har: &mut Har, artifact_id: &str) -> Result<bool, HarpiError> {
        if har.id != self.har {
            return Err(HarpiError::validation(format!(
                "link targets HAR {} but was applied to {}",
                self.har, har.id
            )));
        }
        let added = match self.kind {
            ArtifactKind::Spec => har.attach_spec(SpecId::new(artifact_id)),
            ArtifactKind::Diagram => har.attach_diagram(DiagramId::new(artifact_id)),
        };
        Ok(added)
    }
}

//! Spec path: validate a stored HAR, hand its log to the transformer, and
//! produce a spec draft linked back to the HAR.
//!
//! The phases are encoded in types. A [`Har`] is unvalidated;
//! [`validate_har`] yields a [`ValidatedHar`] or a validation error;
//! [`ValidatedHar::transform`] consumes it and yields a [`SpecArtifact`] or a
//! transform error. Both failures are terminal and nothing is retried.

use serde::Serialize;
use serde_json::Value;

use super::transformer::SpecTransformer;
use super::{ArtifactKind, ArtifactLink};
use crate::archive::{ArchiveLog, Har, HarId, ProjectId};
use crate::error::HarpiError;

/// Spec payload for the store to persist.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecDraft {
    pub title: String,
    pub swagger: Value,
    pub har: HarId,
    pub project: ProjectId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpecArtifact {
    pub draft: SpecDraft,
    pub link: ArtifactLink,
}

/// A HAR whose log is present and has at least one entry.
#[derive(Debug)]
pub struct ValidatedHar<'a> {
    har: &'a Har,
    log: &'a ArchiveLog,
}

#[derive(Serialize)]
struct Envelope<'a> {
    log: &'a ArchiveLog,
}

/// Checks that `har` carries a log with entries. No collaborator is called.
pub fn validate_har(har: &Har) -> Result<ValidatedHar<'_>, HarpiError> {
    let log = match har.log.as_ref() {
        Some(log) => log,
        None => {
            tracing::warn!(har = %har.id, "spec validation failed: no log");
            return Err(HarpiError::validation(format!("HAR {} has no log", har.id)));
        }
    };
    if log.entries.is_empty() {
        tracing::warn!(har = %har.id, "spec validation failed: no entries");
        return Err(HarpiError::validation(format!(
            "HAR {} log has no entries",
            har.id
        )));
    }
    Ok(ValidatedHar { har, log })
}

impl<'a> ValidatedHar<'a> {
    pub fn har(&self) -> &'a Har {
        self.har
    }

    pub fn log(&self) -> &'a ArchiveLog {
        self.log
    }

    /// The `{"log": ...}` JSON document sent to the transformer.
    pub fn envelope(&self) -> Result<String, HarpiError> {
        serde_json::to_string(&Envelope { log: self.log })
            .map_err(|e| HarpiError::transform(format!("serialize HAR envelope: {e}")))
    }

    /// Invokes `transformer` once and builds the spec draft from its output.
    pub fn transform(self, transformer: &dyn SpecTransformer) -> Result<SpecArtifact, HarpiError> {
        let envelope = self.envelope()?;

        let swagger = transformer.transform(&envelope).map_err(|e| {
            tracing::warn!(har = %self.har.id, error = %format!("{e:#}"), "spec transform failed");
            HarpiError::transform(format!("{e:#}"))
        })?;
        if swagger.is_null() {
            tracing::warn!(har = %self.har.id, "spec transform returned no document");
            return Err(HarpiError::transform("transformer returned no document"));
        }

        tracing::info!(
            har = %self.har.id,
            entries = self.log.entries.len(),
            "spec generated"
        );

        Ok(SpecArtifact {
            draft: SpecDraft {
                title: self.har.name.clone(),
                swagger,
                har: self.har.id.clone(),
                project: self.har.project.clone(),
            },
            link: ArtifactLink {
                har: self.har.id.clone(),
                kind: ArtifactKind::Spec,
            },
        })
    }
}

/// Validates `har` and, if valid, transforms it.
pub fn generate_spec(
    har: &Har,
    transformer: &dyn SpecTransformer,
) -> Result<SpecArtifact, HarpiError> {
    validate_har(har)?.transform(transformer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::Entry;
    use crate::error::ErrorKind;
    use anyhow::anyhow;
    use serde_json::json;
    use std::cell::Cell;

    fn har_with(log: Option<ArchiveLog>) -> Har {
        Har::new(HarId::new("h1"), "checkout flow", ProjectId::new("p1"), log)
    }

    fn one_entry_log() -> ArchiveLog {
        ArchiveLog {
            entries: vec![Entry::new("GET", "https://api.example.com/carts", 200)],
            ..ArchiveLog::default()
        }
    }

    #[test]
    fn null_log_fails_without_calling_transformer() {
        let calls = Cell::new(0);
        let t = |_: &str| -> anyhow::Result<Value> {
            calls.set(calls.get() + 1);
            Ok(json!({}))
        };
        let err = generate_spec(&har_with(None), &t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn empty_entries_fail_validation() {
        let err = validate_har(&har_with(Some(ArchiveLog::default()))).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("no entries"));
    }

    #[test]
    fn success_builds_linked_draft() {
        let seen = Cell::new(false);
        let t = |envelope: &str| -> anyhow::Result<Value> {
            let parsed: Value = serde_json::from_str(envelope)?;
            seen.set(parsed["log"]["entries"][0]["request"]["url"] == "https://api.example.com/carts");
            Ok(json!({ "swagger": "2.0", "paths": { "/carts": {} } }))
        };
        let artifact = generate_spec(&har_with(Some(one_entry_log())), &t).unwrap();
        assert!(seen.get());
        assert_eq!(artifact.draft.title, "checkout flow");
        assert_eq!(artifact.draft.har, HarId::new("h1"));
        assert_eq!(artifact.draft.project, ProjectId::new("p1"));
        assert_eq!(artifact.draft.swagger["paths"]["/carts"], json!({}));
        assert_eq!(artifact.link.kind, ArtifactKind::Spec);
        assert_eq!(artifact.link.har, HarId::new("h1"));
    }

    #[test]
    fn collaborator_failure_is_transform_error() {
        let t = |_: &str| -> anyhow::Result<Value> { Err(anyhow!("unsupported HAR version")) };
        let err = generate_spec(&har_with(Some(one_entry_log())), &t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transform);
        assert!(err.to_string().contains("unsupported HAR version"));
    }

    #[test]
    fn null_document_is_transform_error() {
        let t = |_: &str| -> anyhow::Result<Value> { Ok(Value::Null) };
        let err = generate_spec(&har_with(Some(one_entry_log())), &t).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transform);
    }

    #[test]
    fn envelope_wraps_log() {
        let har = har_with(Some(one_entry_log()));
        let validated = validate_har(&har).unwrap();
        let envelope: Value = serde_json::from_str(&validated.envelope().unwrap()).unwrap();
        assert_eq!(envelope["log"]["entries"][0]["request"]["method"], "GET");
        assert_eq!(validated.har().id, HarId::new("h1"));
        assert_eq!(validated.log().entries.len(), 1);
    }
}

//! The stored HAR artifact and the ids linking it to derived specs and diagrams.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::parse::ArchiveLog;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Store-assigned id of a HAR.
    HarId
);
string_id!(
    /// Id of the project a HAR belongs to.
    ProjectId
);
string_id!(SpecId);
string_id!(DiagramId);

/// A HAR as held by the external store.
///
/// `log` is optional because the store accepts documents whose log is
/// `null`; such a HAR fails validation before any transformation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Har {
    pub id: HarId,
    pub name: String,
    pub project: ProjectId,
    #[serde(default)]
    pub log: Option<ArchiveLog>,
    #[serde(default)]
    pub specs: Vec<SpecId>,
    #[serde(default)]
    pub diagrams: Vec<DiagramId>,
}

impl Har {
    pub fn new(
        id: HarId,
        name: impl Into<String>,
        project: ProjectId,
        log: Option<ArchiveLog>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            project,
            log,
            specs: Vec::new(),
            diagrams: Vec::new(),
        }
    }

    /// Records a persisted spec. Returns false if it was already linked.
    pub fn attach_spec(&mut self, id: SpecId) -> bool {
        if self.specs.contains(&id) {
            return false;
        }
        self.specs.push(id);
        true
    }

    /// Records a persisted diagram. Returns false if it was already linked.
    pub fn attach_diagram(&mut self, id: DiagramId) -> bool {
        if self.diagrams.contains(&id) {
            return false;
        }
        self.diagrams.push(id);
        true
    }
}

//! Ordered, name-deduplicated participant registry.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Sequential participant id; the caller is always `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ParticipantId(pub usize);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

/// Participants in first-occurrence order.
///
/// Only the compiler adds participants; once a [`super::CompiledSequence`]
/// is returned the registry is read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRegistry {
    participants: Vec<Participant>,
    by_name: HashMap<String, ParticipantId>,
}

impl ParticipantRegistry {
    /// Registry holding only the caller, as id 0.
    pub(crate) fn with_caller(caller_name: &str) -> Self {
        let mut registry = Self {
            participants: Vec::new(),
            by_name: HashMap::new(),
        };
        registry.intern(caller_name);
        registry
    }

    /// Returns the id for `name`, assigning the next one if unseen.
    /// The flag is true when the participant was newly declared.
    pub(crate) fn intern(&mut self, name: &str) -> (ParticipantId, bool) {
        if let Some(&id) = self.by_name.get(name) {
            return (id, false);
        }
        let id = ParticipantId(self.participants.len());
        self.participants.push(Participant {
            id,
            name: name.to_string(),
        });
        self.by_name.insert(name.to_string(), id);
        (id, true)
    }

    pub fn caller(&self) -> ParticipantId {
        ParticipantId(0)
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(id.0)
    }

    pub fn id_of(&self, name: &str) -> Option<ParticipantId> {
        self.by_name.get(name).copied()
    }

    /// All participants in id order, caller first.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}

//! Diagram renderers: serialize a [`CompiledSequence`] into diagram text.
//!
//! Participants are declared as `p<id>` with their display name as alias,
//! so arbitrary service names never clash with notation syntax.

mod mermaid;
mod plantuml;

pub use mermaid::MermaidRenderer;
pub use plantuml::PlantUmlRenderer;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::HarpiError;
use crate::sequence::{CompiledSequence, ParticipantId};

/// Text notation to render into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    #[default]
    Mermaid,
    PlantUml,
}

impl Notation {
    pub fn renderer(self) -> Box<dyn DiagramRenderer> {
        match self {
            Notation::Mermaid => Box::new(MermaidRenderer),
            Notation::PlantUml => Box::new(PlantUmlRenderer),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notation::Mermaid => f.write_str("mermaid"),
            Notation::PlantUml => f.write_str("plantuml"),
        }
    }
}

impl FromStr for Notation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mermaid" => Ok(Notation::Mermaid),
            "plantuml" | "puml" => Ok(Notation::PlantUml),
            other => Err(format!("unknown notation: {other} (expected mermaid or plantuml)")),
        }
    }
}

/// Serializes a compiled sequence. Implementations are pure: the same
/// input always yields byte-identical text.
pub trait DiagramRenderer {
    fn notation(&self) -> Notation;

    fn render(&self, compiled: &CompiledSequence) -> Result<String, HarpiError>;
}

/// Renders with the renderer for `notation`.
pub fn render(compiled: &CompiledSequence, notation: Notation) -> Result<String, HarpiError> {
    notation.renderer().render(compiled)
}

/// Rejects registries with repeated ids, names that collide once written
/// out by `declared`, and events that point at undeclared participants.
pub(crate) fn check_sequence(
    compiled: &CompiledSequence,
    declared: fn(&str) -> String,
) -> Result<(), HarpiError> {
    let mut ids: HashSet<ParticipantId> = HashSet::new();
    let mut names: HashSet<String> = HashSet::new();
    for p in compiled.registry.participants() {
        if !ids.insert(p.id) {
            return Err(HarpiError::render(format!("duplicate participant id {}", p.id)));
        }
        let name = declared(&p.name);
        if !names.insert(name.clone()) {
            return Err(HarpiError::render(format!(
                "participant {} ({:?}) is declared as {:?}, already in use",
                p.id, p.name, name
            )));
        }
    }
    for (index, event) in compiled.events.iter().enumerate() {
        if !ids.contains(&event.participant()) {
            return Err(HarpiError::render(format!(
                "event {} references unknown participant {}",
                index,
                event.participant()
            )));
        }
    }
    Ok(())
}

pub(crate) fn participant_ref(id: ParticipantId) -> String {
    format!("p{}", id.0)
}

/// Collapses line breaks and other control characters into spaces so a
/// label always stays on one line.
pub(crate) fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

//! PlantUML sequence output, for tools that still consume `@startuml` text.

use std::fmt::Write;

use super::{check_sequence, participant_ref, single_line, DiagramRenderer, Notation};
use crate::error::HarpiError;
use crate::sequence::{CompiledSequence, SequenceEvent};

#[derive(Debug, Default, Clone, Copy)]
pub struct PlantUmlRenderer;

impl DiagramRenderer for PlantUmlRenderer {
    fn notation(&self) -> Notation {
        Notation::PlantUml
    }

    fn render(&self, compiled: &CompiledSequence) -> Result<String, HarpiError> {
        check_sequence(compiled, declared_name)?;

        let caller = participant_ref(compiled.registry.caller());
        let mut out = String::from("@startuml\n");

        for p in compiled.registry.participants() {
            let _ = writeln!(
                out,
                "participant \"{}\" as {}",
                declared_name(&p.name),
                participant_ref(p.id)
            );
        }

        for event in &compiled.events {
            let target = participant_ref(event.participant());
            let _ = match event {
                SequenceEvent::Request { label, .. } => {
                    writeln!(out, "{} -> {}: {}", caller, target, single_line(label))
                }
                SequenceEvent::Note { text, .. } => {
                    writeln!(out, "note right of {}: {}", target, single_line(text))
                }
                SequenceEvent::Response { label, .. } => {
                    writeln!(out, "{} -> {}: {}", target, caller, single_line(label))
                }
            };
        }

        out.push_str("@enduml\n");
        Ok(out)
    }
}

/// Participant names sit inside double quotes.
fn declared_name(name: &str) -> String {
    single_line(name).replace('"', "'")
}

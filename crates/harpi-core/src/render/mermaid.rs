//! Mermaid `sequenceDiagram` output.

use std::fmt::Write;

use super::{check_sequence, participant_ref, single_line, DiagramRenderer, Notation};
use crate::error::HarpiError;
use crate::sequence::{CompiledSequence, SequenceEvent};

#[derive(Debug, Default, Clone, Copy)]
pub struct MermaidRenderer;

impl DiagramRenderer for MermaidRenderer {
    fn notation(&self) -> Notation {
        Notation::Mermaid
    }

    fn render(&self, compiled: &CompiledSequence) -> Result<String, HarpiError> {
        check_sequence(compiled, escape)?;

        let caller = participant_ref(compiled.registry.caller());
        let mut out = String::from("sequenceDiagram\n");

        for p in compiled.registry.participants() {
            let _ = writeln!(out, "    participant {} as {}", participant_ref(p.id), escape(&p.name));
        }

        for event in &compiled.events {
            let target = participant_ref(event.participant());
            let _ = match event {
                SequenceEvent::Request { label, .. } => {
                    writeln!(out, "    {}->>{}: {}", caller, target, escape(label))
                }
                SequenceEvent::Note { text, .. } => {
                    writeln!(out, "    Note right of {}: {}", target, escape(text))
                }
                SequenceEvent::Response { label, .. } => {
                    writeln!(out, "    {}->>{}: {}", target, caller, escape(label))
                }
            };
        }

        Ok(out)
    }
}

/// Mermaid reads `;` as a statement break and `#` as an entity start.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in single_line(text).chars() {
        match c {
            '#' => out.push_str("#35;"),
            ';' => out.push_str("#59;"),
            _ => out.push(c),
        }
    }
    out
}

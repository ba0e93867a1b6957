//! Sequence compiler: folds an archive log into a participant registry and
//! an ordered list of request, note and response events.

mod label;
mod registry;

pub use label::{argument_list, method_label, request_label, response_label};
pub use registry::{Participant, ParticipantId, ParticipantRegistry};

use serde::Serialize;
use url::Url;

use crate::archive::{ArchiveLog, Entry};
use crate::naming::{self, NamingOptions};

/// One compiled step of the diagram. Requests go from the caller to
/// `participant`; responses come back from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SequenceEvent {
    Request {
        participant: ParticipantId,
        label: String,
    },
    Note {
        participant: ParticipantId,
        text: String,
    },
    Response {
        participant: ParticipantId,
        label: String,
    },
}

impl SequenceEvent {
    pub fn participant(&self) -> ParticipantId {
        match self {
            SequenceEvent::Request { participant, .. }
            | SequenceEvent::Note { participant, .. }
            | SequenceEvent::Response { participant, .. } => *participant,
        }
    }
}

/// Result of one compilation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSequence {
    pub registry: ParticipantRegistry,
    pub events: Vec<SequenceEvent>,
}

impl CompiledSequence {
    pub fn participant_count(&self) -> usize {
        self.registry.len()
    }
}

/// Compiles `log` in capture order.
///
/// Total over its input: unparseable URLs and missing optional fields fall
/// back to default names rather than failing.
pub fn compile(log: &ArchiveLog, options: &NamingOptions) -> CompiledSequence {
    let initial = CompiledSequence {
        registry: ParticipantRegistry::with_caller(&options.caller_name),
        events: Vec::with_capacity(log.entries.len() * 3),
    };

    let compiled = log
        .entries
        .iter()
        .fold(initial, |acc, entry| compile_entry(acc, entry, options));

    tracing::debug!(
        entries = log.entries.len(),
        participants = compiled.registry.len(),
        events = compiled.events.len(),
        "compiled sequence"
    );
    compiled
}

fn compile_entry(
    mut acc: CompiledSequence,
    entry: &Entry,
    options: &NamingOptions,
) -> CompiledSequence {
    let url = Url::parse(&entry.request.url).ok();

    let service = naming::service_name_for(entry, url.as_ref());
    let (participant, declared) = acc.registry.intern(&service);
    if declared {
        tracing::trace!(id = %participant, name = %service, "declared participant");
    }

    let resource = naming::resource_name_for(entry, url.as_ref(), options);
    let arguments = argument_list(&entry.request.query_string, &entry.request.path_params);

    acc.events.push(SequenceEvent::Request {
        participant,
        label: request_label(&entry.request.method, &resource, &arguments),
    });

    if let Some(path) = url.as_ref().map(Url::path).filter(|p| !p.is_empty()) {
        acc.events.push(SequenceEvent::Note {
            participant,
            text: path.to_string(),
        });
    }

    acc.events.push(SequenceEvent::Response {
        participant,
        label: response_label(
            entry.response.status,
            &resource,
            entry.response.status_text.as_deref(),
        ),
    });

    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::NameValue;

    fn log(entries: Vec<Entry>) -> ArchiveLog {
        ArchiveLog {
            entries,
            ..ArchiveLog::default()
        }
    }

    #[test]
    fn empty_log_has_only_caller() {
        let compiled = compile(&ArchiveLog::default(), &NamingOptions::default());
        assert_eq!(compiled.participant_count(), 1);
        assert_eq!(compiled.registry.participants()[0].name, "User Agent");
        assert!(compiled.events.is_empty());
    }

    #[test]
    fn single_entry_widget_example() {
        let compiled = compile(
            &log(vec![Entry::new("GET", "https://svc.example.com/widgets/42", 200)]),
            &NamingOptions::default(),
        );
        assert_eq!(compiled.registry.id_of("svc.example.com"), Some(ParticipantId(1)));
        assert_eq!(
            compiled.events,
            vec![
                SequenceEvent::Request {
                    participant: ParticipantId(1),
                    label: "getWidgets()".into(),
                },
                SequenceEvent::Note {
                    participant: ParticipantId(1),
                    text: "/widgets/42".into(),
                },
                SequenceEvent::Response {
                    participant: ParticipantId(1),
                    label: "200(widgets)".into(),
                },
            ]
        );
    }

    #[test]
    fn annotated_and_inferred_names_share_participant() {
        let mut annotated = Entry::new("POST", "https://gateway.example.com/orders", 201);
        annotated.service_name = Some("orders".into());
        let inferred = Entry::new("GET", "https://orders/list", 200);
        let compiled = compile(&log(vec![annotated, inferred]), &NamingOptions::default());
        assert_eq!(compiled.participant_count(), 2);
        assert_eq!(compiled.registry.id_of("orders"), Some(ParticipantId(1)));

        let mut inferred = Entry::new("GET", "https://orders.internal/list", 200);
        inferred.request.service_name = Some("Orders".into());
        let mut annotated = Entry::new("POST", "https://gateway.example.com/orders", 201);
        annotated.service_name = Some("/Orders/".into());
        let compiled = compile(&log(vec![annotated, inferred]), &NamingOptions::default());
        assert_eq!(compiled.participant_count(), 2);
        assert!(compiled
            .events
            .iter()
            .all(|e| e.participant() == ParticipantId(1)));
    }

    #[test]
    fn participants_in_first_occurrence_order() {
        let compiled = compile(
            &log(vec![
                Entry::new("GET", "https://b.example.com/x", 200),
                Entry::new("GET", "https://a.example.com/y", 200),
                Entry::new("GET", "https://b.example.com/z", 200),
            ]),
            &NamingOptions::default(),
        );
        let names: Vec<&str> = compiled
            .registry
            .participants()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["User Agent", "b.example.com", "a.example.com"]);
        assert_eq!(compiled.events[6].participant(), ParticipantId(1));
    }

    #[test]
    fn arguments_and_status_text() {
        let mut entry = Entry::new("DELETE", "https://svc.example.com/carts/9", 404);
        entry.request.query_string = vec![NameValue::new("force", "true")];
        entry.request.path_params = vec![NameValue::new("cartId", "9")];
        entry.response.status_text = Some("Not Found".into());

        let compiled = compile(&log(vec![entry]), &NamingOptions::default());
        assert_eq!(
            compiled.events[0],
            SequenceEvent::Request {
                participant: ParticipantId(1),
                label: "deleteCarts(force, cartId)".into(),
            }
        );
        assert_eq!(
            compiled.events[2],
            SequenceEvent::Response {
                participant: ParticipantId(1),
                label: "404(carts Not Found)".into(),
            }
        );
    }

    #[test]
    fn unparseable_url_does_not_abort() {
        let compiled = compile(
            &log(vec![
                Entry::new("GET", "%%%", 0),
                Entry::new("GET", "https://svc.example.com/ok", 200),
            ]),
            &NamingOptions::default(),
        );
        assert_eq!(compiled.registry.participants()[1].name, "Service");
        // no note for the unparsed entry: request, response, then 3 for the second
        assert_eq!(compiled.events.len(), 5);
        assert_eq!(
            compiled.events[0],
            SequenceEvent::Request {
                participant: ParticipantId(1),
                label: "getResource()".into(),
            }
        );
        assert_eq!(
            compiled.events[1],
            SequenceEvent::Response {
                participant: ParticipantId(1),
                label: "0(resource)".into(),
            }
        );
    }

    #[test]
    fn compile_is_deterministic() {
        let entries = log(vec![
            Entry::new("GET", "https://a.example.com/x?y=1", 200),
            Entry::new("POST", "https://b.example.com/x", 500),
        ]);
        let opts = NamingOptions::default();
        assert_eq!(compile(&entries, &opts), compile(&entries, &opts));
    }

    #[test]
    fn custom_caller_name() {
        let opts = NamingOptions {
            caller_name: "Browser".into(),
            ..NamingOptions::default()
        };
        let compiled = compile(&ArchiveLog::default(), &opts);
        assert_eq!(compiled.registry.participants()[0].name, "Browser");
    }
}

//! The external spec-generation collaborator.

use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// Turns a JSON `{"log": ...}` envelope into a specification document.
///
/// Implementations may block; the orchestrator calls each one exactly
/// once per generation and never retries.
pub trait SpecTransformer {
    fn transform(&self, envelope: &str) -> Result<Value>;
}

impl<F> SpecTransformer for F
where
    F: Fn(&str) -> Result<Value>,
{
    fn transform(&self, envelope: &str) -> Result<Value> {
        self(envelope)
    }
}

/// Runs an external program (e.g. a har-to-swagger tool) with the envelope
/// on stdin and reads the document from stdout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTransformer {
    program: String,
    args: Vec<String>,
}

impl CommandTransformer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SpecTransformer for CommandTransformer {
    fn transform(&self, envelope: &str) -> Result<Value> {
        tracing::debug!(program = %self.program, bytes = envelope.len(), "running spec transformer");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawn transformer `{}`", self.program))?;

        // Feed stdin from a separate thread so a chatty child cannot fill
        // its stdout pipe while we are still writing.
        let mut stdin = child.stdin.take().context("transformer stdin unavailable")?;
        let input = envelope.as_bytes().to_vec();
        let writer = std::thread::spawn(move || stdin.write_all(&input));

        let output = child
            .wait_with_output()
            .with_context(|| format!("wait for transformer `{}`", self.program))?;

        match writer.join() {
            Ok(Ok(())) => {}
            // The child may exit without reading its input.
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => {
                return Err(e).with_context(|| format!("write envelope to `{}`", self.program))
            }
            Err(_) => bail!("stdin writer for `{}` panicked", self.program),
        }

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim();
            if stderr.is_empty() {
                bail!("`{}` exited with {}", self.program, output.status);
            }
            bail!("`{}` exited with {}: {}", self.program, output.status, stderr);
        }

        let document: Value = serde_json::from_slice(&output.stdout)
            .with_context(|| format!("parse output of `{}` as JSON", self.program))?;
        Ok(unwrap_swagger(document))
    }
}

/// Some tools reply `{"swagger": {...}}`; a bare Swagger 2.0 document also has
/// a `swagger` key, but its value is the version string.
fn unwrap_swagger(document: Value) -> Value {
    match document {
        Value::Object(mut map) if map.get("swagger").is_some_and(Value::is_object) => {
            map.remove("swagger").unwrap_or(Value::Null)
        }
        other => other,
    }
}

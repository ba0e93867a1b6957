//! CLI command handlers, one file per command.

mod diagram;
mod participants;
mod spec;

pub use diagram::run_diagram;
pub use participants::run_participants;
pub use spec::run_spec;

use anyhow::{Context, Result};
use std::path::Path;

/// Writes `text` to `output`, or to stdout when no path is given.
fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text).with_context(|| format!("write {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

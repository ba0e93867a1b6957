//! CLI for HARPI. Stands in for the web layer: loads a HAR from disk, calls
//! into the core, and prints the resulting artifact.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use harpi_core::archive::ProjectId;
use harpi_core::config;
use harpi_core::render::Notation;
use std::path::Path;

use commands::{run_diagram, run_participants, run_spec};

/// Top-level CLI for HARPI.
#[derive(Debug, Parser)]
#[command(name = "harpi")]
#[command(about = "HARPI: sequence diagrams and API specs from HTTP Archive captures", long_about = None)]
pub struct Cli {
    /// Project the HAR belongs to (recorded on generated artifacts).
    #[arg(long, global = true, default_value = "local", value_name = "ID")]
    pub project: String,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Render a sequence diagram from a HAR file.
    Diagram {
        /// Path to the HAR file.
        path: String,

        /// Diagram notation (mermaid or plantuml); defaults to the configured one.
        #[arg(long)]
        notation: Option<Notation>,

        /// Write the diagram text here instead of stdout.
        #[arg(long, short)]
        output: Option<String>,
    },

    /// Generate an API spec from a HAR file via the external transformer.
    Spec {
        /// Path to the HAR file.
        path: String,

        /// Transformer program; overrides `[transformer]` in config.toml.
        #[arg(long, value_name = "PROG")]
        command: Option<String>,

        /// Argument for the transformer program (repeatable).
        #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
        args: Vec<String>,

        /// Write the spec draft JSON here instead of stdout.
        #[arg(long, short)]
        output: Option<String>,
    },

    /// List the participants a HAR file compiles to, in id order.
    Participants {
        /// Path to the HAR file.
        path: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let project = ProjectId::new(cli.project);

        match cli.command {
            CliCommand::Diagram {
                path,
                notation,
                output,
            } => run_diagram(
                &cfg,
                Path::new(&path),
                project,
                notation,
                output.as_deref().map(Path::new),
            )?,
            CliCommand::Spec {
                path,
                command,
                args,
                output,
            } => run_spec(
                &cfg,
                Path::new(&path),
                project,
                command,
                args,
                output.as_deref().map(Path::new),
            )?,
            CliCommand::Participants { path } => {
                run_participants(&cfg, Path::new(&path), project)?
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;

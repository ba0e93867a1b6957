use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::naming::{NamingOptions, DEFAULT_CALLER};
use crate::pipeline::{CommandTransformer, DiagramOptions};
use crate::render::Notation;

/// External spec transformer (optional `[transformer]` table in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformerConfig {
    /// Program to run; receives the `{"log": ...}` envelope on stdin.
    pub command: String,
    /// Extra arguments passed to the program.
    #[serde(default)]
    pub args: Vec<String>,
}

/// Global configuration loaded from `~/.config/harpi/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarpiConfig {
    /// Display name of the originating participant in diagrams.
    pub caller_name: String,
    /// Diagram notation: "mermaid" (default) or "plantuml".
    #[serde(default)]
    pub notation: Notation,
    /// Name resources after the nearest non-numeric path segment (`/widgets/42` → `widgets`).
    pub skip_numeric_segments: bool,
    /// Optional spec transformer; spec generation is unavailable without one.
    #[serde(default)]
    pub transformer: Option<TransformerConfig>,
}

impl Default for HarpiConfig {
    fn default() -> Self {
        Self {
            caller_name: DEFAULT_CALLER.to_string(),
            notation: Notation::Mermaid,
            skip_numeric_segments: true,
            transformer: None,
        }
    }
}

impl HarpiConfig {
    pub fn naming(&self) -> NamingOptions {
        NamingOptions {
            caller_name: self.caller_name.clone(),
            skip_numeric_segments: self.skip_numeric_segments,
        }
    }

    pub fn diagram_options(&self) -> DiagramOptions {
        DiagramOptions {
            naming: self.naming(),
            notation: self.notation,
        }
    }

    pub fn transformer(&self) -> Option<CommandTransformer> {
        self.transformer
            .as_ref()
            .map(|t| CommandTransformer::new(t.command.clone(), t.args.clone()))
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("harpi")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<HarpiConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = HarpiConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        fs::write(&path, toml)
            .with_context(|| format!("write default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<HarpiConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let cfg: HarpiConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}

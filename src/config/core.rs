use crate::config::demos::{AnimationConfig, PointsConfig, TransformConfig};
use crate::config::rendering::{RenderConfig, WindowConfig};
use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "demos.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub log_level: Option<String>,
    pub window: WindowConfig,
    pub rendering: RenderConfig,
    pub points: PointsConfig,
    pub transform: TransformConfig,
    pub animation: AnimationConfig,
}

impl DemoConfig {
    /// Reads a config file that must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Reads `path`, writing the defaults there first if it does not exist.
    pub fn load_or_create_at(path: &Path) -> Result<Self> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).context("Failed to create config directory")?;
            }
            let default_config = Self::default();
            let toml_content = toml::to_string_pretty(&default_config)?;
            std::fs::write(path, toml_content).context("Failed to write default config")?;
            return Ok(default_config);
        }
        Self::load_from(path)
    }

    /// Explicit path if given, otherwise `demos.toml` in the platform
    /// config directory.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load_or_create_at(&default_config_path()?),
        }
    }

    pub fn level_filter(&self) -> Result<LevelFilter> {
        match &self.log_level {
            Some(level) => level
                .parse()
                .with_context(|| format!("Invalid log level {level:?}")),
            None => Ok(LevelFilter::Info),
        }
    }
}

pub fn default_config_path() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "MetroManDevTeam", "gl-primer")
        .context("Couldn't determine project directory")?;
    Ok(proj_dirs.config_dir().join(CONFIG_FILE))
}

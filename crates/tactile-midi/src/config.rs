//! Surface profile schema and loader
//!
//! Profiles are stored as YAML under the platform config directory,
//! e.g. `~/.config/tactile/surface.yaml` on Linux.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A saved surface profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    /// Port name substring to match (case-insensitive)
    pub device: String,

    /// Title shown by the UI adapter, if one is attached
    pub title: String,

    /// Log every hardware event and outgoing payload
    pub debug: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            device: String::new(),
            title: "tactile".to_string(),
            debug: false,
        }
    }
}

/// Default profile location under the platform config directory
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tactile")
        .join("surface.yaml")
}

/// Load a surface profile, falling back to defaults
///
/// A missing or malformed file is not fatal; the surface still comes up,
/// just unconfigured.
pub fn load_config(path: &Path) -> SurfaceConfig {
    if !path.exists() {
        log::info!("load_config: No profile at {:?}, using defaults", path);
        return SurfaceConfig::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<SurfaceConfig>(&contents) {
            Ok(config) => {
                log::info!(
                    "load_config: Loaded profile '{}' (device match: '{}')",
                    config.title,
                    config.device
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse profile: {}", e);
                SurfaceConfig::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: Failed to read profile: {}", e);
            SurfaceConfig::default()
        }
    }
}

/// Save a surface profile, creating parent directories as needed
pub fn save_config(config: &SurfaceConfig, path: &Path) -> anyhow::Result<()> {
    use anyhow::Context;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize profile to YAML")?;

    std::fs::write(path, yaml)
        .with_context(|| format!("Failed to write profile file: {:?}", path))?;

    log::info!("save_config: Wrote profile to {:?}", path);
    Ok(())
}

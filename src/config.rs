// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application settings.
//!
//! Settings are read from an optional YAML file named by the first command
//! line argument or the `HOTSPOTS_CONFIG` environment variable. A missing
//! file means defaults; a file that exists but does not parse is an error.
//!
//! ```yaml
//! text_layout: bilingual        # or: single
//! coordinate_origin: top-left   # or: bottom-left
//! export_directory: /home/me/scenes
//! ```

use crate::io::document::CoordinateOrigin;
use crate::models::text::TextLayout;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming the settings file.
pub const CONFIG_ENV_VAR: &str = "HOTSPOTS_CONFIG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Shape of new text fields.
    pub text_layout: TextLayout,
    /// Vertical convention used for export, and for importing untagged documents.
    pub coordinate_origin: CoordinateOrigin,
    /// Starting directory for file dialogs.
    pub export_directory: Option<PathBuf>,
}

impl Settings {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit; treat it as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings = serde_yaml::from_str(yaml)?;
        Ok(settings)
    }

    /// Load settings from `path`, or defaults when there is no such file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        let settings = Self::from_yaml(&yaml)
            .with_context(|| format!("Invalid settings file {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Resolve the settings file from the command line or environment.
    pub fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let path = args
            .nth(1)
            .or_else(|| std::env::var(CONFIG_ENV_VAR).ok())
            .map(PathBuf::from);
        match path {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }
}

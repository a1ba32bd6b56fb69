// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene document files.
//!
//! This module reads and writes scene documents as pretty-printed JSON.

use super::document::SceneDocument;
use anyhow::{Context, Result};
use std::path::Path;

/// Export a scene document to a JSON file.
pub fn export_json(doc: &SceneDocument, path: &Path) -> Result<()> {
    let json = doc.to_json_pretty()?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Import a scene document from a JSON file.
pub fn import_json(path: &Path) -> Result<SceneDocument> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let doc = SceneDocument::from_json(&json)?;
    Ok(doc)
}

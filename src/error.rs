// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for the hotspot core.
//!
//! Every variant is recoverable: the operation that produced it leaves the
//! previous session state untouched and the message is shown to the user.
//! Degenerate drags and unknown hotspot ids are not errors at all.

/// Failure of a user-facing session command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HotspotError {
    /// Image dimensions are zero or not close enough to 2:1.
    #[error("Please upload an image with approximately 2:1 aspect ratio (got {width}x{height})")]
    RejectedImage { width: u32, height: u32 },

    /// Export was requested without a scene name or without an image.
    #[error("{0}")]
    ExportPrecondition(String),

    /// Imported document is missing fields or has the wrong shape.
    #[error("Error importing JSON: {0}")]
    ImportFormat(String),
}

impl HotspotError {
    pub fn import_format(cause: impl std::fmt::Display) -> Self {
        Self::ImportFormat(cause.to_string())
    }
}

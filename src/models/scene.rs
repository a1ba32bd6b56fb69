// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene state.
//!
//! A scene is one image plus its hotspots and the scene-level text shown
//! alongside it. Scene and image metadata are replaced wholesale on load
//! and import, never patched field by field from outside the session.

use super::store::HotspotStore;
use super::text::{TextField, TextLayout};
use crate::error::HotspotError;

/// Required width:height ratio of scene images.
pub const TARGET_ASPECT_RATIO: f64 = 2.0;

/// Allowed deviation from [`TARGET_ASPECT_RATIO`].
pub const ASPECT_RATIO_TOLERANCE: f64 = 0.1;

/// Pixel size of the active scene image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageMetadata {
    width: u32,
    height: u32,
}

impl ImageMetadata {
    /// Accept only non-empty images whose aspect ratio is close to 2:1.
    pub fn validated(width: u32, height: u32) -> Result<Self, HotspotError> {
        if width == 0 || height == 0 {
            return Err(HotspotError::RejectedImage { width, height });
        }
        let ratio = f64::from(width) / f64::from(height);
        if (ratio - TARGET_ASPECT_RATIO).abs() > ASPECT_RATIO_TOLERANCE {
            return Err(HotspotError::RejectedImage { width, height });
        }
        Ok(Self { width, height })
    }

    /// Dimensions declared by an imported document. Only zero sizes are refused.
    pub fn declared(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Everything that gets exported for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub name: TextField,
    pub message: TextField,
    pub order: i64,
    /// File name of the source image; empty when unknown.
    pub image_file: String,
    pub image: Option<ImageMetadata>,
    pub store: HotspotStore,
}

impl Scene {
    pub fn new(layout: TextLayout) -> Self {
        Self {
            name: TextField::empty(layout),
            message: TextField::empty(layout),
            order: 0,
            image_file: String::new(),
            image: None,
            store: HotspotStore::new(),
        }
    }
}

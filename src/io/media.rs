// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene image loading.
//!
//! This module decodes image files into RGBA pixels suitable for display in
//! egui, and builds the placeholder bitmap shown after importing a document
//! whose image bytes are not available. The placeholder has a fixed size and
//! is stretched over the declared scene size by the canvas.

use anyhow::{Context, Result};
use std::path::Path;

/// Grey used for placeholder bitmaps.
const PLACEHOLDER_RGBA: [u8; 4] = [96, 96, 96, 255];

/// Placeholder bitmap size, 2:1 like every accepted scene image.
const PLACEHOLDER_SIZE: (u32, u32) = (2, 1);

/// Decoded image, RGBA8, row major.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode raw image bytes.
pub fn decode_image(bytes: &[u8]) -> Result<LoadedImage> {
    let rgba = image::load_from_memory(bytes)
        .context("Not a supported image")?
        .to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

/// Read and decode an image file.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    decode_image(&bytes).with_context(|| format!("Failed to decode {}", path.display()))
}

/// Flat grey bitmap shown in place of an imported scene's image.
///
/// Its size never depends on the document, so declared dimensions are
/// never used for an allocation.
pub fn placeholder_image() -> LoadedImage {
    let (width, height) = PLACEHOLDER_SIZE;
    let rgba = image::RgbaImage::from_pixel(width, height, image::Rgba(PLACEHOLDER_RGBA));
    LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    }
}

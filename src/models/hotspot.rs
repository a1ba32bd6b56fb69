// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hotspot data structures.
//!
//! This module defines the geometry and text of a single hotspot, plus the
//! transient draft box tracked while the user is dragging.

use super::text::{TextField, TextLayout};

/// Identity of a hotspot within its store. Never reused.
pub type HotspotId = u64;

/// A 2D point in canvas (image pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle with its origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// A labelled rectangular region on the scene image.
///
/// Geometry is fixed at creation; only the text fields change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotspot {
    pub id: HotspotId,
    pub label: TextField,
    pub message: TextField,
    pub rect: Rect,
}

impl Hotspot {
    /// A freshly drawn hotspot with the default label for `position`.
    pub fn new(id: HotspotId, rect: Rect, layout: TextLayout, position: usize) -> Self {
        Self {
            id,
            label: TextField::default_label(layout, position),
            message: TextField::empty(layout),
            rect,
        }
    }
}

/// Box being dragged out. `extent` may be negative on either axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraftBox {
    pub anchor: Point,
    pub extent: Point,
}

impl DraftBox {
    pub fn new(anchor: Point) -> Self {
        Self {
            anchor,
            extent: Point::new(0.0, 0.0),
        }
    }

    /// Stretch the box so its far corner sits at `pointer`.
    pub fn stretch_to(&mut self, pointer: Point) {
        self.extent = Point::new(pointer.x - self.anchor.x, pointer.y - self.anchor.y);
    }
}

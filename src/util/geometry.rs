// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides the coordinate transformations between display
//! pixels (where pointer events arrive) and canvas pixels (the native
//! resolution of the loaded image), plus drag-box normalization.

use crate::models::hotspot::{Point, Rect};

/// Drags whose width or height does not exceed this many canvas pixels are
/// treated as accidental clicks and discarded.
pub const MIN_DRAG_EXTENT: f64 = 5.0;

/// Where the canvas is drawn on screen, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Native pixel resolution of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution {
    pub width: f64,
    pub height: f64,
}

impl Resolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: f64::from(width),
            height: f64::from(height),
        }
    }
}

/// Convert a pointer position in display pixels to canvas coordinates.
///
/// Horizontal and vertical scale are corrected independently. A display
/// rect with zero width or height yields non-finite coordinates; the box
/// normalizer refuses those.
pub fn to_canvas_space(pointer: Point, display: &DisplayRect, resolution: &Resolution) -> Point {
    let scale_x = resolution.width / display.width;
    let scale_y = resolution.height / display.height;
    Point {
        x: (pointer.x - display.left) * scale_x,
        y: (pointer.y - display.top) * scale_y,
    }
}

/// Convert canvas coordinates back to display pixels.
pub fn to_display_space(point: Point, display: &DisplayRect, resolution: &Resolution) -> Point {
    let scale_x = display.width / resolution.width;
    let scale_y = display.height / resolution.height;
    Point {
        x: display.left + point.x * scale_x,
        y: display.top + point.y * scale_y,
    }
}

/// Turn a drag anchor and signed extent into a canonical rectangle.
///
/// Returns `None` for drags at or under [`MIN_DRAG_EXTENT`] on either axis
/// and for non-finite input.
pub fn normalize(anchor: Point, signed_extent: Point) -> Option<Rect> {
    let values = [anchor.x, anchor.y, signed_extent.x, signed_extent.y];
    if values.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let (dx, dy) = (signed_extent.x, signed_extent.y);
    if dx.abs() <= MIN_DRAG_EXTENT || dy.abs() <= MIN_DRAG_EXTENT {
        return None;
    }

    Some(Rect {
        x: if dx < 0.0 { anchor.x + dx } else { anchor.x },
        y: if dy < 0.0 { anchor.y + dy } else { anchor.y },
        width: dx.abs(),
        height: dy.abs(),
    })
}

/// Round to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

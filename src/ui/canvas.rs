// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for the scene image and its hotspots.
//!
//! This module shows the image scaled to fit the panel, turns pointer
//! input into canvas-space drag events and redraws every hotspot, the
//! selection and the draft box from the session overlay.

use crate::models::hotspot::{Point, Rect};
use crate::models::session::Overlay;
use crate::models::text::Language;
use crate::util::geometry::{self, DisplayRect, Resolution};

const SELECTED_COLOR: egui::Color32 = egui::Color32::from_rgb(0xFF, 0xD7, 0x00);
const HOTSPOT_COLOR: egui::Color32 = egui::Color32::from_rgb(0xAD, 0xFD, 0x6F);

/// Stroke width in image pixels.
const STROKE_WIDTH: f64 = 16.0;
/// Label font size in image pixels.
const LABEL_SIZE: f64 = 34.0;
/// Gap between a box and the label baseline below it, in image pixels.
const LABEL_GAP_BELOW: f64 = 40.0;
const LABEL_GAP_ABOVE: f64 = 10.0;

/// Result of canvas interaction, in canvas (image pixel) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasAction {
    None,
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerLeave,
}

/// Display the main canvas area and handle pointer interaction.
pub fn show(
    ui: &mut egui::Ui,
    overlay: Overlay<'_>,
    image_texture: Option<&egui::TextureHandle>,
    image_size: Option<(u32, u32)>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        let (Some(texture), Some((img_width, img_height))) = (image_texture, image_size) else {
            show_welcome(ui);
            return;
        };

        let image_rect = fit_rect(ui, img_width, img_height);
        ui.painter().image(
            texture.id(),
            image_rect,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            egui::Color32::WHITE,
        );

        let display = DisplayRect {
            left: f64::from(image_rect.min.x),
            top: f64::from(image_rect.min.y),
            width: f64::from(image_rect.width()),
            height: f64::from(image_rect.height()),
        };
        let resolution = Resolution::new(img_width, img_height);
        let to_canvas = |pos: egui::Pos2| {
            geometry::to_canvas_space(
                Point::new(f64::from(pos.x), f64::from(pos.y)),
                &display,
                &resolution,
            )
        };

        let response = ui.allocate_rect(image_rect, egui::Sense::drag());
        let hover = ui.input(|i| i.pointer.hover_pos());

        // Primary button only. egui reports the drag start once the pointer
        // has passed its drag threshold, so anchor at the press position.
        if response.drag_started_by(egui::PointerButton::Primary) {
            let press = ui.input(|i| i.pointer.press_origin());
            if let Some(pos) = press.or_else(|| response.interact_pointer_pos()) {
                action = CanvasAction::PointerDown(to_canvas(pos));
            }
        } else if response.drag_stopped_by(egui::PointerButton::Primary) {
            action = CanvasAction::PointerUp;
        } else if response.dragged_by(egui::PointerButton::Primary) {
            action = match hover {
                Some(pos) if image_rect.contains(pos) => CanvasAction::PointerMove(to_canvas(pos)),
                _ => CanvasAction::PointerLeave,
            };
        }

        let painter = ui.painter_at(image_rect);
        let scale = display.width / resolution.width;
        draw_overlay(&painter, overlay, &display, &resolution, scale);
    });

    ui.separator();
    ui.horizontal(|ui| match image_size {
        Some((w, h)) => {
            ui.label(format!("Image: {w}x{h}"));
            ui.separator();
            ui.label(format!("Areas: {}", overlay.hotspots.len()));
        }
        None => {
            ui.label("No image loaded");
        }
    });

    action
}

/// Largest rect with the image's aspect ratio that fits, centred.
fn fit_rect(ui: &egui::Ui, img_width: u32, img_height: u32) -> egui::Rect {
    let available = ui.available_size();
    let img_aspect = img_width as f32 / img_height as f32;
    let available_aspect = available.x / available.y;

    let (display_width, display_height) = if img_aspect > available_aspect {
        (available.x, available.x / img_aspect)
    } else {
        (available.y * img_aspect, available.y)
    };

    let x_offset = (available.x - display_width) / 2.0;
    let y_offset = (available.y - display_height) / 2.0;

    egui::Rect::from_min_size(
        ui.min_rect().min + egui::vec2(x_offset, y_offset),
        egui::vec2(display_width, display_height),
    )
}

fn draw_overlay(
    painter: &egui::Painter,
    overlay: Overlay<'_>,
    display: &DisplayRect,
    resolution: &Resolution,
    scale: f64,
) {
    let stroke_width = (STROKE_WIDTH * scale).max(1.0) as f32;
    let font = egui::FontId::proportional((LABEL_SIZE * scale).max(8.0) as f32);

    for hotspot in overlay.hotspots {
        let color = if overlay.selected == Some(hotspot.id) {
            SELECTED_COLOR
        } else {
            HOTSPOT_COLOR
        };
        let rect = screen_rect(&hotspot.rect, display, resolution);
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(stroke_width, color));

        // Label sits under the box unless it would run off the image.
        let below = hotspot.rect.bottom() + LABEL_GAP_BELOW;
        let baseline_y = if below > resolution.height {
            hotspot.rect.y - LABEL_GAP_ABOVE
        } else {
            below
        };
        let anchor = to_screen(
            Point::new(hotspot.rect.x + hotspot.rect.width / 2.0, baseline_y),
            display,
            resolution,
        );
        painter.text(
            anchor,
            egui::Align2::CENTER_BOTTOM,
            hotspot.label.get(Language::PRIMARY),
            font.clone(),
            color,
        );
    }

    if let Some(draft) = overlay.draft {
        let corner = Point::new(draft.anchor.x + draft.extent.x, draft.anchor.y + draft.extent.y);
        let rect = egui::Rect::from_two_pos(
            to_screen(draft.anchor, display, resolution),
            to_screen(corner, display, resolution),
        );
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(stroke_width, HOTSPOT_COLOR));
    }
}

fn to_screen(point: Point, display: &DisplayRect, resolution: &Resolution) -> egui::Pos2 {
    let p = geometry::to_display_space(point, display, resolution);
    egui::pos2(p.x as f32, p.y as f32)
}

fn screen_rect(rect: &Rect, display: &DisplayRect, resolution: &Resolution) -> egui::Rect {
    egui::Rect::from_min_max(
        to_screen(Point::new(rect.x, rect.y), display, resolution),
        to_screen(Point::new(rect.x + rect.width, rect.bottom()), display, resolution),
    )
}

fn show_welcome(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                egui::RichText::new("Hotspots")
                    .size(32.0)
                    .color(egui::Color32::from_gray(200)),
            );
            ui.add_space(20.0);
            ui.label(
                egui::RichText::new("Upload a 2:1 image or import a scene to begin")
                    .color(egui::Color32::from_gray(180)),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("File → Open Image...")
                    .weak()
                    .color(egui::Color32::from_gray(130)),
            );
        });
    });
}

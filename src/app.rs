// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the eframe::App trait. It forwards UI events to the editing session as
//! commands, applies finished background loads, and redraws every frame
//! from the session state.

use crate::config::Settings;
use crate::io::loader::{LoadOutcome, Loader};
use crate::io::media::LoadedImage;
use crate::io::serialization;
use crate::models::session::Session;
use crate::ui::{canvas, properties, toolbar};

/// Main application state.
pub struct HotspotApp {
    settings: Settings,

    /// Scene, selection and drag state
    session: Session,

    /// Texture of the active image (or import placeholder)
    image_texture: Option<egui::TextureHandle>,

    /// Background image/document loads
    loader: Loader,

    /// Validation or load message waiting to be acknowledged
    notice: Option<String>,
}

impl HotspotApp {
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(&settings),
            settings,
            image_texture: None,
            loader: Loader::new(),
            notice: None,
        }
    }

    fn file_dialog(&self) -> rfd::FileDialog {
        let dialog = rfd::FileDialog::new();
        match &self.settings.export_directory {
            Some(dir) => dialog.set_directory(dir),
            None => dialog,
        }
    }

    fn show_notice(&mut self, message: String) {
        log::warn!("{message}");
        self.notice = Some(message);
    }

    fn pick_image(&mut self) {
        if let Some(path) = self
            .file_dialog()
            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "gif", "webp", "tiff", "tif"])
            .pick_file()
        {
            log::info!("Loading image {}", path.display());
            self.loader.load_image(path);
        }
    }

    fn pick_document(&mut self) {
        if let Some(path) = self.file_dialog().add_filter("JSON", &["json"]).pick_file() {
            log::info!("Importing {}", path.display());
            self.loader.load_document(path);
        }
    }

    /// Export the scene to a file chosen by the user.
    fn export_document(&mut self) {
        let doc = match self.session.export() {
            Ok(doc) => doc,
            Err(e) => {
                self.show_notice(e.to_string());
                return;
            }
        };

        let Some(path) = self
            .file_dialog()
            .add_filter("JSON", &["json"])
            .set_file_name(self.session.export_file_name())
            .save_file()
        else {
            return;
        };

        match serialization::export_json(&doc, &path) {
            Ok(()) => log::info!("Exported scene to {}", path.display()),
            Err(e) => self.show_notice(format!("Failed to export scene: {e:#}")),
        }
    }

    /// Apply finished loads in the order they completed.
    fn apply_loads(&mut self, ctx: &egui::Context) {
        for outcome in self.loader.poll() {
            match outcome {
                LoadOutcome::Image { file_name, image } => {
                    match self
                        .session
                        .apply_loaded_image(&file_name, image.width, image.height)
                    {
                        Ok(()) => self.image_texture = Some(upload_texture(ctx, &image)),
                        Err(e) => self.show_notice(e.to_string()),
                    }
                }
                LoadOutcome::Document { doc, placeholder } => match self.session.import(&doc) {
                    Ok(()) => self.image_texture = Some(upload_texture(ctx, &placeholder)),
                    Err(e) => self.show_notice(e.to_string()),
                },
                LoadOutcome::Failed { message } => self.show_notice(message),
            }
        }
    }

    fn show_notice_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.notice.clone() else {
            return;
        };
        egui::Window::new("Notice")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    self.notice = None;
                }
            });
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.session.is_dragging() {
                self.session.cancel_drag();
            } else {
                self.session.select(None);
            }
        }

        // Only when no text field has focus, so Backspace still edits text.
        if !ctx.wants_keyboard_input()
            && ctx.input(|i| {
                i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace)
            })
        {
            if let Some(id) = self.session.scene().store.selected() {
                self.session.delete_hotspot(id);
            }
        }
    }
}

fn upload_texture(ctx: &egui::Context, image: &LoadedImage) -> egui::TextureHandle {
    let size = [image.width as usize, image.height as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &image.pixels);
    ctx.load_texture("scene_image", color_image, egui::TextureOptions::LINEAR)
}

impl eframe::App for HotspotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_loads(ctx);

        // Keep polling while workers are busy.
        if self.loader.in_flight() > 0 {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Image...").clicked() {
                        self.pick_image();
                        ui.close_menu();
                    }
                    if ui.button("Import JSON...").clicked() {
                        self.pick_document();
                        ui.close_menu();
                    }
                    if ui.button("Export JSON...").clicked() {
                        self.export_document();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    let selected = self.session.scene().store.selected();
                    if ui
                        .add_enabled(selected.is_some(), egui::Button::new("Delete Selected"))
                        .clicked()
                    {
                        if let Some(id) = selected {
                            self.session.delete_hotspot(id);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Clear Selection").clicked() {
                        self.session.select(None);
                        ui.close_menu();
                    }
                });

                if self.loader.in_flight() > 0 {
                    ui.separator();
                    ui.spinner();
                    ui.label("Loading...");
                }
            });
        });

        let toolbar_action = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| toolbar::show(ui, &mut self.session))
            .inner;

        match toolbar_action {
            toolbar::ToolbarAction::OpenImage => self.pick_image(),
            toolbar::ToolbarAction::ImportDocument => self.pick_document(),
            toolbar::ToolbarAction::ExportDocument => self.export_document(),
            toolbar::ToolbarAction::None => {}
        }

        let properties_action = egui::SidePanel::right("properties")
            .default_width(280.0)
            .show(ctx, |ui| properties::show(ui, &mut self.session))
            .inner;

        match properties_action {
            properties::PropertiesAction::Select(id) => self.session.select(Some(id)),
            properties::PropertiesAction::Delete(id) => {
                self.session.delete_hotspot(id);
            }
            properties::PropertiesAction::None => {}
        }

        self.handle_keys(ctx);

        let image_size = self.session.image().map(|image| (image.width(), image.height()));
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(
                    ui,
                    self.session.overlay(),
                    self.image_texture.as_ref(),
                    image_size,
                )
            })
            .inner;

        match canvas_action {
            canvas::CanvasAction::PointerDown(point) => self.session.pointer_down(point),
            canvas::CanvasAction::PointerMove(point) => self.session.pointer_move(point),
            canvas::CanvasAction::PointerUp => {
                self.session.pointer_up();
            }
            canvas::CanvasAction::PointerLeave => {
                self.session.pointer_leave();
            }
            canvas::CanvasAction::None => {}
        }

        self.show_notice_window(ctx);
    }
}


// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene toolbar.
//!
//! This module provides the scene name, message and order inputs together
//! with the upload, import and export buttons.

use crate::models::session::Session;
use crate::models::text::Language;

/// Button pressed in the toolbar.
pub enum ToolbarAction {
    None,
    OpenImage,
    ImportDocument,
    ExportDocument,
}

/// Display the scene inputs and file buttons.
pub fn show(ui: &mut egui::Ui, session: &mut Session) -> ToolbarAction {
    let mut action = ToolbarAction::None;
    let languages = session.text_layout().languages();

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.label("Scene Name");
            for &language in languages {
                let mut text = session.scene().name.get(language).to_string();
                let hint = format!("Enter scene name ({})", language.display_name());
                if ui.add(egui::TextEdit::singleline(&mut text).hint_text(hint)).changed() {
                    session.set_scene_name(language, &text);
                }
            }
        });

        ui.separator();

        ui.vertical(|ui| {
            ui.label("Scene Message");
            for &language in languages {
                let mut text = session.scene().message.get(language).to_string();
                let hint = format!("Enter scene message ({})", language.display_name());
                if ui.add(egui::TextEdit::singleline(&mut text).hint_text(hint)).changed() {
                    session.set_scene_message(language, &text);
                }
            }
        });

        ui.separator();

        ui.vertical(|ui| {
            ui.label("Order");
            let mut order = session.scene().order;
            if ui.add(egui::DragValue::new(&mut order)).changed() {
                session.set_order(order);
            }
        });

        ui.separator();

        ui.vertical(|ui| {
            if ui.button("⬆ Upload Image (2:1)").clicked() {
                action = ToolbarAction::OpenImage;
            }
            if ui.button("⬆ Import JSON").clicked() {
                action = ToolbarAction::ImportDocument;
            }
            let can_export = session.image().is_some()
                && !session.scene().name.get(Language::PRIMARY).is_empty();
            if ui
                .add_enabled(can_export, egui::Button::new("⬇ Export JSON"))
                .clicked()
            {
                action = ToolbarAction::ExportDocument;
            }
        });
    });

    action
}

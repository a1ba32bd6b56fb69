// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hotspot list panel.
//!
//! This module lists every hotspot with editors for its label and message
//! in each language slot, and a delete button. Clicking a row selects it.

use crate::models::hotspot::HotspotId;
use crate::models::session::Session;

/// Result of properties panel interaction.
pub enum PropertiesAction {
    None,
    Select(HotspotId),
    Delete(HotspotId),
}

/// Display the hotspot list.
pub fn show(ui: &mut egui::Ui, session: &mut Session) -> PropertiesAction {
    let mut action = PropertiesAction::None;

    ui.heading("Areas");
    ui.separator();

    if session.scene().store.is_empty() {
        ui.label(egui::RichText::new("Drag on the image to add an area").weak());
        return action;
    }

    let languages = session.text_layout().languages();
    let selected = session.scene().store.selected();
    let hotspots = session.scene().store.hotspots().to_vec();

    egui::ScrollArea::vertical().show(ui, |ui| {
        for hotspot in &hotspots {
            let is_selected = selected == Some(hotspot.id);
            let mut frame = egui::Frame::group(ui.style());
            if is_selected {
                frame = frame
                    .fill(egui::Color32::from_rgb(0x4a, 0x42, 0x10))
                    .stroke(egui::Stroke::new(1.5, egui::Color32::from_rgb(0xFF, 0xD7, 0x00)));
            }

            let row = frame.show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        for &language in languages {
                            let mut text = hotspot.label.get(language).to_string();
                            let hint = format!("Area Label ({})", language.display_name());
                            if ui
                                .add(egui::TextEdit::singleline(&mut text).hint_text(hint))
                                .changed()
                            {
                                session.update_label(hotspot.id, language, &text);
                            }
                        }
                    });
                    if ui.button("🗑").on_hover_text("Delete area").clicked() {
                        action = PropertiesAction::Delete(hotspot.id);
                    }
                });
                for &language in languages {
                    let mut text = hotspot.message.get(language).to_string();
                    let hint = format!("Message ({})", language.display_name());
                    if ui
                        .add(egui::TextEdit::singleline(&mut text).hint_text(hint))
                        .changed()
                    {
                        session.update_message(hotspot.id, language, &text);
                    }
                }
            });

            if row.response.interact(egui::Sense::click()).clicked()
                && !matches!(action, PropertiesAction::Delete(_))
            {
                action = PropertiesAction::Select(hotspot.id);
            }
            ui.add_space(4.0);
        }
    });

    action
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editing session.
//!
//! The session is the single owner of the scene, the selection and the
//! in-progress drag. Every user action is one synchronous command on it,
//! so the UI layer only translates events and redraws from [`Overlay`].

use super::hotspot::{DraftBox, Hotspot, HotspotId, Point};
use super::scene::{ImageMetadata, Scene};
use super::text::{Language, TextLayout};
use crate::config::Settings;
use crate::error::HotspotError;
use crate::io::document::{self, CoordinateOrigin, SceneDocument};
use crate::util::geometry;

/// Everything a renderer needs to redraw the canvas from scratch.
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
    pub hotspots: &'a [Hotspot],
    pub selected: Option<HotspotId>,
    pub draft: Option<DraftBox>,
}

/// Scene plus interaction state.
#[derive(Debug, Clone)]
pub struct Session {
    scene: Scene,
    /// `Some` while a drag gesture is in progress.
    draft: Option<DraftBox>,
    layout: TextLayout,
    origin: CoordinateOrigin,
}

impl Session {
    pub fn new(settings: &Settings) -> Self {
        Self {
            scene: Scene::new(settings.text_layout),
            draft: None,
            layout: settings.text_layout,
            origin: settings.coordinate_origin,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn text_layout(&self) -> TextLayout {
        self.layout
    }

    pub fn image(&self) -> Option<ImageMetadata> {
        self.scene.image
    }

    pub fn is_dragging(&self) -> bool {
        self.draft.is_some()
    }

    pub fn overlay(&self) -> Overlay<'_> {
        Overlay {
            hotspots: self.scene.store.hotspots(),
            selected: self.scene.store.selected(),
            draft: self.draft,
        }
    }

    // -- drag gesture ------------------------------------------------------

    /// Start a drag at `point` (canvas space). Ignored without an image or
    /// while a drag is already running.
    pub fn pointer_down(&mut self, point: Point) {
        if self.scene.image.is_none() || self.draft.is_some() {
            return;
        }
        self.draft = Some(DraftBox::new(point));
    }

    pub fn pointer_move(&mut self, point: Point) {
        if let Some(draft) = self.draft.as_mut() {
            draft.stretch_to(point);
        }
    }

    /// Finish the drag. Returns the id of the committed hotspot, if any.
    pub fn pointer_up(&mut self) -> Option<HotspotId> {
        let draft = self.draft.take()?;
        match geometry::normalize(draft.anchor, draft.extent) {
            Some(rect) => Some(self.scene.store.create(rect, self.layout).id),
            None => {
                log::debug!("Discarded drag {:?}", draft.extent);
                None
            }
        }
    }

    /// The pointer left the canvas mid-drag; same as releasing it.
    pub fn pointer_leave(&mut self) -> Option<HotspotId> {
        self.pointer_up()
    }

    /// Drop the in-progress drag without committing.
    pub fn cancel_drag(&mut self) {
        self.draft = None;
    }

    // -- text and selection -------------------------------------------------

    pub fn set_scene_name(&mut self, language: Language, text: &str) {
        self.scene.name.set(language, text);
    }

    pub fn set_scene_message(&mut self, language: Language, text: &str) {
        self.scene.message.set(language, text);
    }

    pub fn set_order(&mut self, order: i64) {
        self.scene.order = order;
    }

    pub fn update_label(&mut self, id: HotspotId, language: Language, text: &str) -> bool {
        self.scene.store.update_label(id, language, text)
    }

    pub fn update_message(&mut self, id: HotspotId, language: Language, text: &str) -> bool {
        self.scene.store.update_message(id, language, text)
    }

    pub fn delete_hotspot(&mut self, id: HotspotId) -> Option<Hotspot> {
        self.scene.store.delete(id)
    }

    pub fn select(&mut self, id: Option<HotspotId>) {
        self.scene.store.select(id);
    }

    // -- load / import / export ---------------------------------------------

    /// Completion of an image load.
    ///
    /// Off-ratio images are rejected and nothing changes. An accepted image
    /// replaces the previous one and starts an empty hotspot set; the scene
    /// text typed so far is kept.
    pub fn apply_loaded_image(
        &mut self,
        file_name: &str,
        width: u32,
        height: u32,
    ) -> Result<(), HotspotError> {
        let image = ImageMetadata::validated(width, height)?;
        self.scene.image = Some(image);
        self.scene.image_file = file_name.to_string();
        self.scene.store.replace_all(Vec::new());
        self.draft = None;
        log::info!("Active image: {file_name} ({width}x{height})");
        Ok(())
    }

    /// Replace the whole scene from an imported document. On error the
    /// session is left exactly as it was.
    ///
    /// The document's scene name decides the text layout from here on, so
    /// editors and new hotspots match the shape of the imported text.
    pub fn import(&mut self, doc: &SceneDocument) -> Result<(), HotspotError> {
        let scene = document::decode(doc, self.origin)?;
        log::info!(
            "Imported scene '{}' with {} hotspots",
            scene.name.primary(),
            scene.store.len()
        );
        self.layout = scene.name.layout();
        self.scene = scene;
        self.draft = None;
        Ok(())
    }

    pub fn export(&self) -> Result<SceneDocument, HotspotError> {
        document::encode(&self.scene, self.origin)
    }

    /// `<primary scene name>.json`, with path separators replaced.
    pub fn export_file_name(&self) -> String {
        let name: String = self
            .scene
            .name
            .primary()
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        format!("{name}.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hotspot::Rect;

    fn bilingual() -> Settings {
        Settings::default()
    }

    fn session_with_image() -> Session {
        let mut session = Session::new(&bilingual());
        session.apply_loaded_image("scene.png", 800, 400).unwrap();
        session
    }

    fn drag(session: &mut Session, from: (f64, f64), to: (f64, f64)) -> Option<HotspotId> {
        session.pointer_down(Point::new(from.0, from.1));
        session.pointer_move(Point::new(to.0, to.1));
        session.pointer_up()
    }

    #[test]
    fn test_drag_commits_normalized_hotspot() {
        let mut session = session_with_image();

        let id = drag(&mut session, (100.0, 300.0), (150.0, 240.0)).unwrap();

        let overlay = session.overlay();
        assert_eq!(overlay.selected, Some(id));
        assert_eq!(overlay.draft, None);
        assert_eq!(overlay.hotspots[0].rect, Rect::new(100.0, 240.0, 50.0, 60.0));
    }

    #[test]
    fn test_small_drag_is_discarded() {
        let mut session = session_with_image();

        assert_eq!(drag(&mut session, (10.0, 10.0), (15.0, 15.0)), None);
        assert!(session.scene().store.is_empty());
        assert!(!session.is_dragging());

        assert!(drag(&mut session, (10.0, 10.0), (16.0, 16.0)).is_some());
    }

    #[test]
    fn test_draft_visible_while_dragging() {
        let mut session = session_with_image();
        session.pointer_down(Point::new(50.0, 50.0));
        session.pointer_move(Point::new(20.0, 80.0));

        let draft = session.overlay().draft.unwrap();
        assert_eq!(draft.anchor, Point::new(50.0, 50.0));
        assert_eq!(draft.extent, Point::new(-30.0, 30.0));
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut session = session_with_image();
        session.pointer_down(Point::new(10.0, 10.0));
        session.pointer_down(Point::new(500.0, 300.0));
        session.pointer_move(Point::new(60.0, 60.0));

        let id = session.pointer_leave().unwrap();
        let hotspot = session.scene().store.get(id).unwrap();
        assert_eq!(hotspot.rect, Rect::new(10.0, 10.0, 50.0, 50.0));
    }

    #[test]
    fn test_no_drag_without_image() {
        let mut session = Session::new(&bilingual());
        session.pointer_down(Point::new(10.0, 10.0));
        assert!(!session.is_dragging());
        assert_eq!(session.pointer_up(), None);
    }

    #[test]
    fn test_cancel_drag() {
        let mut session = session_with_image();
        session.pointer_down(Point::new(10.0, 10.0));
        session.pointer_move(Point::new(100.0, 100.0));
        session.cancel_drag();
        assert_eq!(session.pointer_up(), None);
        assert!(session.scene().store.is_empty());
    }

    #[test]
    fn test_selection_follows_delete() {
        let mut session = session_with_image();
        let a = drag(&mut session, (0.0, 0.0), (20.0, 20.0)).unwrap();
        let b = drag(&mut session, (30.0, 30.0), (60.0, 60.0)).unwrap();
        assert_eq!(session.overlay().selected, Some(b));

        session.delete_hotspot(a);
        assert_eq!(session.overlay().selected, Some(b));

        session.delete_hotspot(b);
        assert_eq!(session.overlay().selected, None);
    }

    #[test]
    fn test_rejected_image_keeps_previous_state() {
        let mut session = session_with_image();
        drag(&mut session, (0.0, 0.0), (20.0, 20.0));
        let before = session.scene().clone();

        let err = session.apply_loaded_image("wide.png", 1920, 1080).unwrap_err();
        assert!(matches!(err, HotspotError::RejectedImage { width: 1920, height: 1080 }));
        assert_eq!(session.scene(), &before);
    }

    #[test]
    fn test_new_image_clears_hotspots_but_keeps_text() {
        let mut session = session_with_image();
        session.set_scene_name(Language::En, "Lobby");
        drag(&mut session, (0.0, 0.0), (20.0, 20.0));

        session.apply_loaded_image("other.png", 1000, 500).unwrap();
        assert!(session.scene().store.is_empty());
        assert_eq!(session.scene().name.primary(), "Lobby");
        assert_eq!(session.scene().image_file, "other.png");
    }

    #[test]
    fn test_export_requires_name() {
        let mut session = session_with_image();
        assert!(matches!(
            session.export(),
            Err(HotspotError::ExportPrecondition(_))
        ));

        session.set_scene_name(Language::En, "Lobby");
        session.set_order(4);
        let doc = session.export().unwrap();
        assert_eq!(doc.order, Some(4));
        assert_eq!(session.export_file_name(), "Lobby.json");
    }

    #[test]
    fn test_export_file_name_strips_separators() {
        let mut session = session_with_image();
        session.set_scene_name(Language::En, "floor/1\\lobby");
        assert_eq!(session.export_file_name(), "floor_1_lobby.json");
    }

    #[test]
    fn test_malformed_import_leaves_session_untouched() {
        let mut session = session_with_image();
        session.set_scene_name(Language::En, "Lobby");
        drag(&mut session, (0.0, 0.0), (20.0, 20.0));
        let before = session.scene().clone();

        let result = SceneDocument::from_json(r#"{"hotspots": "not-an-array"}"#)
            .and_then(|doc| session.import(&doc));
        assert!(matches!(result, Err(HotspotError::ImportFormat(_))));
        assert_eq!(session.scene(), &before);

        let mut doc = session.export().unwrap();
        doc.image_width = 0;
        assert!(session.import(&doc).is_err());
        assert_eq!(session.scene(), &before);
    }

    #[test]
    fn test_import_replaces_everything() {
        let mut source = session_with_image();
        source.set_scene_name(Language::En, "Lobby");
        source.set_scene_message(Language::Es, "Hola");
        let id = drag(&mut source, (10.0, 10.0), (110.0, 60.0)).unwrap();
        source.update_label(id, Language::En, "Desk");
        let doc = source.export().unwrap();

        let mut target = session_with_image();
        drag(&mut target, (0.0, 0.0), (20.0, 20.0));
        target.import(&doc).unwrap();

        let scene = target.scene();
        assert_eq!(scene.name.primary(), "Lobby");
        assert_eq!(scene.message.get(Language::Es), "Hola");
        assert_eq!(scene.store.len(), 1);
        assert_eq!(scene.store.hotspots()[0].id, id);
        assert_eq!(scene.store.hotspots()[0].label.primary(), "Desk");
        assert_eq!(scene.store.selected(), None);
        assert_eq!(target.export().unwrap(), doc);
    }

    #[test]
    fn test_import_adopts_document_text_layout() {
        let doc = SceneDocument::from_json(
            r#"{
                "sceneName": "Lobby",
                "imageWidth": 800,
                "imageHeight": 400,
                "hotspots": [
                    {
                        "id": 7,
                        "label": "Desk",
                        "position": {"x": 1, "y": 2, "width": 30, "height": 20}
                    }
                ]
            }"#,
        )
        .unwrap();

        let mut session = Session::new(&bilingual());
        assert_eq!(session.text_layout(), TextLayout::Bilingual);
        session.import(&doc).unwrap();
        assert_eq!(session.text_layout(), TextLayout::Single);

        let id = drag(&mut session, (100.0, 100.0), (200.0, 150.0)).unwrap();
        let created = session.scene().store.get(id).unwrap();
        assert_eq!(created.label.layout(), TextLayout::Single);
        assert_eq!(created.message.layout(), TextLayout::Single);

        let exported = serde_json::to_value(session.export().unwrap()).unwrap();
        assert!(exported["sceneName"].is_string());
        let hotspots = exported["hotspots"].as_array().unwrap();
        assert_eq!(hotspots.len(), 2);
        assert!(hotspots.iter().all(|h| h["label"].is_string()));
        assert_eq!(hotspots[1]["label"], "Area 2");
    }

    #[test]
    fn test_bilingual_import_restores_bilingual_layout() {
        let settings = Settings {
            text_layout: TextLayout::Single,
            ..Settings::default()
        };
        let mut source = Session::new(&bilingual());
        source.apply_loaded_image("scene.png", 800, 400).unwrap();
        source.set_scene_name(Language::En, "Lobby");
        let doc = source.export().unwrap();

        let mut session = Session::new(&settings);
        session.import(&doc).unwrap();
        assert_eq!(session.text_layout(), TextLayout::Bilingual);

        session.set_scene_name(Language::Es, "Vestíbulo");
        assert_eq!(session.scene().name.get(Language::Es), "Vestíbulo");
    }
}

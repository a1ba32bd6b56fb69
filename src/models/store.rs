// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Ordered hotspot collection with selection tracking.

use super::hotspot::{Hotspot, HotspotId, Rect};
use super::text::{Language, TextLayout};
use std::time::{SystemTime, UNIX_EPOCH};

/// Monotonic id source seeded from wall-clock milliseconds.
///
/// Ids strictly increase even when the clock stands still or jumps back.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    last: HotspotId,
}

impl IdSource {
    pub fn next(&mut self) -> HotspotId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as HotspotId)
            .unwrap_or(0);
        self.last = now.max(self.last.saturating_add(1));
        self.last
    }

    /// Make sure future ids are greater than `id`.
    pub fn observe(&mut self, id: HotspotId) {
        self.last = self.last.max(id);
    }
}

/// Hotspots in creation order, plus the currently focused one.
#[derive(Debug, Clone, Default)]
pub struct HotspotStore {
    hotspots: Vec<Hotspot>,
    selected: Option<HotspotId>,
    ids: IdSource,
}

impl PartialEq for HotspotStore {
    fn eq(&self, other: &Self) -> bool {
        self.hotspots == other.hotspots && self.selected == other.selected
    }
}

impl HotspotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hotspots(&self) -> &[Hotspot] {
        &self.hotspots
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    pub fn get(&self, id: HotspotId) -> Option<&Hotspot> {
        self.hotspots.iter().find(|h| h.id == id)
    }

    pub fn selected(&self) -> Option<HotspotId> {
        self.selected
    }

    /// Append a hotspot for `rect` and select it.
    pub fn create(&mut self, rect: Rect, layout: TextLayout) -> &Hotspot {
        let id = self.ids.next();
        let position = self.hotspots.len() + 1;
        self.hotspots.push(Hotspot::new(id, rect, layout, position));
        self.selected = Some(id);
        log::info!("Created hotspot {id}, total: {}", self.hotspots.len());
        &self.hotspots[self.hotspots.len() - 1]
    }

    /// Replace one language slot of a hotspot label. `false` if `id` is unknown.
    pub fn update_label(&mut self, id: HotspotId, language: Language, text: &str) -> bool {
        match self.get_mut(id) {
            Some(hotspot) => hotspot.label.set(language, text),
            None => false,
        }
    }

    /// Replace one language slot of a hotspot message. `false` if `id` is unknown.
    pub fn update_message(&mut self, id: HotspotId, language: Language, text: &str) -> bool {
        match self.get_mut(id) {
            Some(hotspot) => hotspot.message.set(language, text),
            None => false,
        }
    }

    /// Remove a hotspot, clearing the selection if it pointed there.
    pub fn delete(&mut self, id: HotspotId) -> Option<Hotspot> {
        let index = self.hotspots.iter().position(|h| h.id == id)?;
        let removed = self.hotspots.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        log::info!("Deleted hotspot {id}, total: {}", self.hotspots.len());
        Some(removed)
    }

    /// Focus a hotspot. The id is not checked; a dangling selection matches nothing.
    pub fn select(&mut self, id: Option<HotspotId>) {
        self.selected = id;
    }

    /// Swap in a whole new hotspot set and clear the selection.
    pub fn replace_all(&mut self, hotspots: Vec<Hotspot>) {
        for hotspot in &hotspots {
            self.ids.observe(hotspot.id);
        }
        self.hotspots = hotspots;
        self.selected = None;
    }

    fn get_mut(&mut self, id: HotspotId) -> Option<&mut Hotspot> {
        self.hotspots.iter_mut().find(|h| h.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn rect() -> Rect {
        Rect::new(10.0, 20.0, 30.0, 40.0)
    }

    #[test]
    fn test_create_selects_new_hotspot() {
        let mut store = HotspotStore::new();
        let first = store.create(rect(), TextLayout::Bilingual).id;
        assert_eq!(store.selected(), Some(first));

        let second = store.create(rect(), TextLayout::Bilingual).id;
        assert_eq!(store.selected(), Some(second));
        assert_eq!(store.hotspots()[1].label.get(Language::En), "Area 2");
        assert_eq!(store.hotspots()[1].label.get(Language::Es), "Área 2");
        assert_eq!(store.hotspots()[1].message.get(Language::En), "");
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut store = HotspotStore::new();
        let a = store.create(rect(), TextLayout::Bilingual).id;
        let b = store.create(rect(), TextLayout::Bilingual).id;

        store.delete(a);
        assert_eq!(store.selected(), Some(b));

        store.delete(b);
        assert_eq!(store.selected(), None);
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut store = HotspotStore::new();
        let id = store.create(rect(), TextLayout::Bilingual).id;
        let before = store.clone();

        assert!(!store.update_label(id + 1, Language::En, "x"));
        assert!(!store.update_message(id + 1, Language::Es, "x"));
        assert!(store.delete(id + 1).is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_update_keeps_geometry_and_other_slot() {
        let mut store = HotspotStore::new();
        let id = store.create(rect(), TextLayout::Bilingual).id;

        assert!(store.update_label(id, Language::Es, "Cocina"));
        assert!(store.update_message(id, Language::En, "Welcome"));

        let hotspot = store.get(id).unwrap();
        assert_eq!(hotspot.label.get(Language::En), "Area 1");
        assert_eq!(hotspot.label.get(Language::Es), "Cocina");
        assert_eq!(hotspot.message.get(Language::En), "Welcome");
        assert_eq!(hotspot.rect, rect());
    }

    #[test]
    fn test_dangling_selection_is_allowed() {
        let mut store = HotspotStore::new();
        store.select(Some(42));
        assert_eq!(store.selected(), Some(42));
        assert!(store.get(42).is_none());
    }

    #[test]
    fn test_replace_all_resets_selection_and_advances_ids() {
        let mut store = HotspotStore::new();
        store.create(rect(), TextLayout::Bilingual);

        let far_future = HotspotId::MAX / 2;
        store.replace_all(vec![Hotspot::new(far_future, rect(), TextLayout::Bilingual, 1)]);
        assert_eq!(store.selected(), None);
        assert_eq!(store.len(), 1);

        let created = store.create(rect(), TextLayout::Bilingual).id;
        assert!(created > far_future);
    }

    proptest! {
        #[test]
        fn created_ids_are_unique(count in 1usize..200) {
            let mut store = HotspotStore::new();
            let ids: HashSet<HotspotId> = (0..count)
                .map(|_| store.create(rect(), TextLayout::Single).id)
                .collect();
            prop_assert_eq!(ids.len(), count);
        }
    }
}

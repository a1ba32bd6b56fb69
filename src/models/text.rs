// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene and hotspot text.
//!
//! Text is carried as an opaque payload in either one language or two.
//! Nothing here translates or validates the content.

use serde::{Deserialize, Serialize};

/// Addressable language slot. `En` is the primary slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Es,
}

impl Language {
    pub const PRIMARY: Language = Language::En;

    /// Human readable name used in input placeholders.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Spanish",
        }
    }
}

/// Shape of newly created text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextLayout {
    Single,
    #[default]
    Bilingual,
}

impl TextLayout {
    /// Language slots a field of this layout carries.
    pub fn languages(self) -> &'static [Language] {
        match self {
            TextLayout::Single => &[Language::En],
            TextLayout::Bilingual => &[Language::En, Language::Es],
        }
    }
}

/// A text payload: plain string or an `{ en, es }` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TextField {
    Plain(String),
    Bilingual { en: String, es: String },
}

impl TextField {
    /// An empty field of the given layout.
    pub fn empty(layout: TextLayout) -> Self {
        match layout {
            TextLayout::Single => TextField::Plain(String::new()),
            TextLayout::Bilingual => TextField::Bilingual {
                en: String::new(),
                es: String::new(),
            },
        }
    }

    /// Default label for the hotspot at 1-based `position`.
    pub fn default_label(layout: TextLayout, position: usize) -> Self {
        match layout {
            TextLayout::Single => TextField::Plain(format!("Area {position}")),
            TextLayout::Bilingual => TextField::Bilingual {
                en: format!("Area {position}"),
                es: format!("Área {position}"),
            },
        }
    }

    pub fn layout(&self) -> TextLayout {
        match self {
            TextField::Plain(_) => TextLayout::Single,
            TextField::Bilingual { .. } => TextLayout::Bilingual,
        }
    }

    /// Text in the given slot; empty when the field has no such slot.
    pub fn get(&self, language: Language) -> &str {
        match (self, language) {
            (TextField::Plain(text), Language::En) => text.as_str(),
            (TextField::Plain(_), Language::Es) => "",
            (TextField::Bilingual { en, .. }, Language::En) => en.as_str(),
            (TextField::Bilingual { es, .. }, Language::Es) => es.as_str(),
        }
    }

    pub fn primary(&self) -> &str {
        self.get(Language::PRIMARY)
    }

    /// Replace one slot. Returns `false` when the field has no such slot.
    pub fn set(&mut self, language: Language, value: impl Into<String>) -> bool {
        let slot = match (self, language) {
            (TextField::Plain(text), Language::En) => text,
            (TextField::Plain(_), Language::Es) => return false,
            (TextField::Bilingual { en, .. }, Language::En) => en,
            (TextField::Bilingual { es, .. }, Language::Es) => es,
        };
        *slot = value.into();
        true
    }
}

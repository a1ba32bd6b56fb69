// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Scene document codec.
//!
//! Converts between the in-memory [`Scene`] and the portable JSON document
//! that is exported to and imported from disk. The document stores rounded
//! integer geometry and names the vertical convention it was written with.

use crate::error::HotspotError;
use crate::models::hotspot::{Hotspot, Rect};
use crate::models::scene::{ImageMetadata, Scene};
use crate::models::store::{HotspotStore, IdSource};
use crate::models::text::TextField;
use crate::util::geometry::round_half_up;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// Document format written by this version of the tool.
pub const FORMAT_VERSION: u32 = 1;

/// Message shown when export is attempted too early.
pub const EXPORT_PRECONDITION_MESSAGE: &str = "Please enter a scene name and upload an image";

/// Which image edge stored `position.y` values are measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CoordinateOrigin {
    /// `y` is the distance from the top edge to the box top (screen space).
    #[default]
    TopLeft,
    /// `y` is the distance from the bottom edge to the box bottom.
    BottomLeft,
}

impl CoordinateOrigin {
    fn encode_y(self, rect: &Rect, image_height: f64) -> f64 {
        match self {
            CoordinateOrigin::TopLeft => rect.y,
            CoordinateOrigin::BottomLeft => image_height - rect.bottom(),
        }
    }

    fn decode_y(self, position: &Position, image_height: f64) -> f64 {
        match self {
            CoordinateOrigin::TopLeft => position.y,
            CoordinateOrigin::BottomLeft => image_height - position.y - position.height,
        }
    }
}

/// Exported scene, as it appears on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_version: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate_origin: Option<CoordinateOrigin>,
    pub scene_name: TextField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene_message: Option<TextField>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub image_file: Option<String>,
    pub image_width: u32,
    pub image_height: u32,
    pub hotspots: Vec<DocumentHotspot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentHotspot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub label: TextField,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<TextField>,
    pub position: Position,
}

/// Hotspot box in document coordinates. Written as integers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(serialize_with = "serialize_rounded")]
    pub x: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub y: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub width: f64,
    #[serde(serialize_with = "serialize_rounded")]
    pub height: f64,
}

fn serialize_rounded<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_i64(round_half_up(*value) as i64)
}

impl SceneDocument {
    /// Parse a document, reporting any shape problem as an import error.
    pub fn from_json(json: &str) -> Result<Self, HotspotError> {
        serde_json::from_str(json).map_err(HotspotError::import_format)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the export document for `scene`.
///
/// Requires a primary-language scene name and a loaded image.
pub fn encode(scene: &Scene, origin: CoordinateOrigin) -> Result<SceneDocument, HotspotError> {
    let image = match scene.image {
        Some(image) if !scene.name.primary().is_empty() => image,
        _ => {
            return Err(HotspotError::ExportPrecondition(
                EXPORT_PRECONDITION_MESSAGE.to_string(),
            ))
        }
    };
    let image_height = f64::from(image.height());

    let hotspots = scene
        .store
        .hotspots()
        .iter()
        .map(|hotspot| DocumentHotspot {
            id: Some(hotspot.id),
            label: hotspot.label.clone(),
            message: Some(hotspot.message.clone()),
            position: Position {
                x: round_half_up(hotspot.rect.x),
                y: round_half_up(origin.encode_y(&hotspot.rect, image_height)),
                width: round_half_up(hotspot.rect.width),
                height: round_half_up(hotspot.rect.height),
            },
        })
        .collect();

    Ok(SceneDocument {
        format_version: Some(FORMAT_VERSION),
        coordinate_origin: Some(origin),
        scene_name: scene.name.clone(),
        scene_message: Some(scene.message.clone()),
        order: Some(scene.order),
        image_file: Some(scene.image_file.clone()),
        image_width: image.width(),
        image_height: image.height(),
        hotspots,
    })
}

/// Rebuild a scene from a document.
///
/// Documents without a `coordinateOrigin` tag are read with `fallback`.
/// Missing hotspot ids (and repeated ones) get fresh ids.
pub fn decode(doc: &SceneDocument, fallback: CoordinateOrigin) -> Result<Scene, HotspotError> {
    if let Some(version) = doc.format_version {
        if version != FORMAT_VERSION {
            return Err(HotspotError::import_format(format!(
                "unsupported formatVersion {version}"
            )));
        }
    }

    let image = ImageMetadata::declared(doc.image_width, doc.image_height).ok_or_else(|| {
        HotspotError::import_format(format!(
            "invalid image size {}x{}",
            doc.image_width, doc.image_height
        ))
    })?;
    let image_height = f64::from(image.height());
    let origin = doc.coordinate_origin.unwrap_or(fallback);

    let mut ids = IdSource::default();
    for id in doc.hotspots.iter().filter_map(|h| h.id) {
        ids.observe(id);
    }

    let mut seen = HashSet::new();
    let mut hotspots = Vec::with_capacity(doc.hotspots.len());
    for (index, entry) in doc.hotspots.iter().enumerate() {
        let position = &entry.position;
        if position.width < 0.0 || position.height < 0.0 {
            return Err(HotspotError::import_format(format!(
                "hotspot {} has a negative size",
                index + 1
            )));
        }

        // Id 0 counts as missing.
        let id = match entry.id.filter(|&id| id != 0) {
            Some(id) if seen.insert(id) => id,
            Some(id) => {
                let fresh = ids.next();
                log::warn!("Duplicate hotspot id {id} in document, reassigned {fresh}");
                seen.insert(fresh);
                fresh
            }
            None => {
                let fresh = ids.next();
                seen.insert(fresh);
                fresh
            }
        };

        hotspots.push(Hotspot {
            id,
            label: entry.label.clone(),
            message: entry
                .message
                .clone()
                .unwrap_or_else(|| TextField::empty(entry.label.layout())),
            rect: Rect {
                x: round_half_up(position.x),
                y: round_half_up(origin.decode_y(position, image_height)),
                width: round_half_up(position.width),
                height: round_half_up(position.height),
            },
        });
    }

    let mut store = HotspotStore::new();
    store.replace_all(hotspots);

    Ok(Scene {
        name: doc.scene_name.clone(),
        message: doc
            .scene_message
            .clone()
            .unwrap_or_else(|| TextField::empty(doc.scene_name.layout())),
        order: doc.order.unwrap_or(0),
        image_file: doc.image_file.clone().unwrap_or_default(),
        image: Some(image),
        store,
    })
}

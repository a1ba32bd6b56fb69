// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Background loading of images and scene documents.
//!
//! Reads and decodes run on worker threads. Their results come back over a
//! single channel and are drained by the UI thread once per frame, in the
//! order the workers finished. Loads cannot be cancelled; a later result
//! simply replaces the state set by an earlier one. Every started load sends
//! exactly one outcome, even when its worker panics.

use super::document::SceneDocument;
use super::media::{self, LoadedImage};
use super::serialization;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver, Sender};

/// Result of one background load.
#[derive(Debug)]
pub enum LoadOutcome {
    Image {
        file_name: String,
        image: LoadedImage,
    },
    Document {
        doc: SceneDocument,
        placeholder: LoadedImage,
    },
    Failed {
        message: String,
    },
}

pub struct Loader {
    sender: Sender<LoadOutcome>,
    receiver: Receiver<LoadOutcome>,
    in_flight: usize,
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl Loader {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            in_flight: 0,
        }
    }

    /// Number of loads started but not yet drained by [`Loader::poll`].
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Read and decode an image file in the background.
    pub fn load_image(&mut self, path: PathBuf) {
        self.spawn(move || {
            let file_name = file_name(&path);
            match media::load_image(&path) {
                Ok(image) => {
                    log::info!("Decoded {} ({}x{})", path.display(), image.width, image.height);
                    LoadOutcome::Image { file_name, image }
                }
                Err(e) => LoadOutcome::Failed {
                    message: format!("Failed to load image: {e:#}"),
                },
            }
        });
    }

    /// Read and parse a scene document in the background.
    pub fn load_document(&mut self, path: PathBuf) {
        self.spawn(move || match serialization::import_json(&path) {
            Ok(doc) => {
                log::info!("Parsed {} with {} hotspots", path.display(), doc.hotspots.len());
                LoadOutcome::Document {
                    doc,
                    placeholder: media::placeholder_image(),
                }
            }
            Err(e) => LoadOutcome::Failed {
                message: format!("{e:#}"),
            },
        });
    }

    /// Completed loads since the last call, oldest first.
    pub fn poll(&mut self) -> Vec<LoadOutcome> {
        let done: Vec<LoadOutcome> = self.receiver.try_iter().collect();
        self.in_flight = self.in_flight.saturating_sub(done.len());
        done
    }

    fn spawn<F>(&mut self, job: F)
    where
        F: FnOnce() -> LoadOutcome + Send + 'static,
    {
        self.in_flight += 1;
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            let outcome = panic::catch_unwind(AssertUnwindSafe(job)).unwrap_or_else(|payload| {
                let message = format!("Loading failed: {}", panic_message(payload.as_ref()));
                log::error!("{message}");
                LoadOutcome::Failed { message }
            });
            let _ = sender.send(outcome);
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "worker panicked"
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

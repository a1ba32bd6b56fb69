// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Hotspots - scene hotspot annotation tool
//!
//! A cross-platform desktop application for drawing labelled rectangular
//! hotspots over 2:1 scene images and exporting them as JSON documents.

mod app;
mod config;
mod error;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::HotspotApp;
use config::Settings;

fn main() -> Result<()> {
    // Initialize logging, honouring RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_args(std::env::args())?;
    log::info!(
        "Text layout: {:?}, coordinate origin: {:?}",
        settings.text_layout,
        settings.coordinate_origin
    );

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 860.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("Hotspots - Scene Annotation"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Hotspots",
        options,
        Box::new(|_cc| Ok(Box::new(HotspotApp::new(settings)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

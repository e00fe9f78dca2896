//! Messenger: a native desktop messenger prototype
//!
//! The application renders with egui and keeps all of its data in memory:
//! - seeded chats, channels and transcripts
//! - voice and video call screens with a live duration timer
//! - profile, premium, privacy and usage statistics panels

#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod coordinator;
mod services;
mod storage;
mod ui;

use anyhow::{Context, Result};
use std::sync::Arc;
use storage::settings::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("messenger=debug,warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Messenger v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config();

    // Runs the call timer ticks
    let runtime = Arc::new(
        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("Failed to create Tokio runtime")?,
    );

    // Configure native options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Мессенджер")
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([800.0, 600.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Messenger",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::MessengerApp::new(cc, config, runtime)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}

/// Read the config file, falling back to defaults when it is absent or broken
fn load_config() -> AppConfig {
    let Some(path) = AppConfig::default_path() else {
        tracing::warn!("No config directory available, using defaults");
        return AppConfig::default();
    };

    match AppConfig::load(&path) {
        Ok(config) => {
            tracing::debug!("Loaded config from {:?}", path);
            config
        }
        Err(e) => {
            tracing::warn!("{}; using defaults", e);
            AppConfig::default()
        }
    }
}

/// Load the application icon
fn load_icon() -> egui::IconData {
    let size = 64;
    let mut rgba = vec![0u8; size * size * 4];

    // Purple disc
    let center = size as f32 / 2.0;
    let radius = center * 0.8;

    for y in 0..size {
        for x in 0..size {
            let dx = x as f32 - center;
            let dy = y as f32 - center;
            let dist = (dx * dx + dy * dy).sqrt();

            let idx = (y * size + x) * 4;
            if dist <= radius {
                rgba[idx] = 0x8B;
                rgba[idx + 1] = 0x5C;
                rgba[idx + 2] = 0xF6;
                rgba[idx + 3] = 0xFF;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}

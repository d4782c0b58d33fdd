#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod grid_view;
mod run_worker;

use std::path::PathBuf;

use app::FieldLogApp;
use fl_acquire::{LogConfig, load_yaml};
use fl_host::{ConductorParams, SimOptions};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    // Optional first argument: log configuration YAML.
    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match load_yaml(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("failed to load {}: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => LogConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "fieldlog",
        options,
        Box::new(|cc| {
            Ok(Box::new(FieldLogApp::new(
                cc,
                config,
                ConductorParams::default(),
                SimOptions::default(),
            )))
        }),
    )
}

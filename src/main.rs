//! Corner-Connector Editor.
//!
//! Drei draggbare Punkte, verbunden durch zwei Strecken mit abgerundeter
//! Ecke. Geometrie engine-unabhängig, Darstellung mit egui/eframe.

use corner_connector_editor::EditorApp;
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!(
        "Corner-Connector Editor v{} startet...",
        env!("CARGO_PKG_VERSION")
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_title("Corner-Connector Editor"),
        multisampling: 4,
        ..Default::default()
    };

    eframe::run_native(
        "Corner-Connector Editor",
        options,
        Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
    )
}

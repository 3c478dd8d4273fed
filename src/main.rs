//! Blockwire - drag blocks onto a canvas and wire their ports together

use blockwire::constants::{panel, window};
use blockwire::{BlockEditor, EditorConfig};
use eframe::egui;

/// Application entry point.
fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EditorConfig::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(window::TITLE)
            .with_position(window::DEFAULT_POSITION)
            .with_inner_size(config.window_size)
            .with_min_inner_size([
                panel::PALETTE_WIDTH + panel::MIN_CANVAS_SIZE[0],
                panel::MIN_CANVAS_SIZE[1],
            ]),
        ..Default::default()
    };

    eframe::run_native(
        window::TITLE,
        options,
        Box::new(|cc| Ok(Box::new(BlockEditor::new(cc, config)))),
    )
}

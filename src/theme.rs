//! Centralized theme and styling constants for the block canvas
//!
//! This module provides a single source of truth for the colors and
//! stroke styles used by the palette and the drop area.

use egui::{Color32, Stroke};

/// Color palette for the editor
pub struct Colors {
    // Palette
    pub palette_background: Color32,
    pub palette_label: Color32,
    pub complete_pressed: Color32,
    pub undo_pressed: Color32,

    // Canvas
    pub canvas_background: Color32,
    pub canvas_border: Color32,
    pub canvas_drop_hover: Color32,

    // Blocks
    pub block_pressed: Color32,
    pub block_border: Color32,
    pub drag_area: Color32,
    pub port_input: Color32,
    pub port_output: Color32,
    pub label_text: Color32,

    // Connections
    pub connection: Color32,
}

impl Colors {
    /// Get the default color palette
    pub fn default() -> Self {
        Self {
            palette_background: Color32::LIGHT_GRAY,
            palette_label: Color32::from_rgb(173, 216, 230), // lightblue
            complete_pressed: Color32::from_rgb(144, 238, 144), // lightgreen
            undo_pressed: Color32::from_rgb(240, 128, 128), // lightcoral

            canvas_background: Color32::WHITE,
            canvas_border: Color32::BLACK,
            canvas_drop_hover: Color32::from_rgb(235, 245, 255),

            block_pressed: Color32::from_rgb(144, 238, 144),
            block_border: Color32::BLACK,
            drag_area: Color32::from_rgb(144, 238, 144),
            port_input: Color32::RED,
            port_output: Color32::BLUE,
            label_text: Color32::BLACK,

            connection: Color32::BLACK,
        }
    }
}

/// Complete theme containing all styling constants
pub struct Theme {
    pub colors: Colors,
}

impl Theme {
    /// Get the default theme
    pub fn default() -> Self {
        Self {
            colors: Colors::default(),
        }
    }

    /// Stroke used for connection lines
    pub fn connection_stroke(&self) -> Stroke {
        Stroke::new(crate::constants::block::CONNECTION_WIDTH, self.colors.connection)
    }

    /// Stroke used for block and canvas outlines
    pub fn border_stroke(&self) -> Stroke {
        Stroke::new(1.0, self.colors.block_border)
    }
}

/// Global theme instance
static GLOBAL_THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get the global theme
pub fn theme() -> &'static Theme {
    &GLOBAL_THEME
}

/// Convenience accessor for the color palette
pub fn colors() -> &'static Colors {
    &theme().colors
}

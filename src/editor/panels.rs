//! Palette side panel: draggable block labels and the complete/undo buttons

use crate::constants::panel;
use crate::nodes::DragPayload;
use crate::theme;
use egui::{Align2, Button, Color32, FontId, Id, RichText, Sense, Stroke, StrokeKind, Vec2};

/// Action requested from the palette this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteAction {
    None,
    Complete,
    Undo,
}

/// Held state of the palette buttons, used for their pressed colors
#[derive(Debug, Clone, Default)]
pub struct PalettePanel {
    complete_held: bool,
    undo_held: bool,
}

impl PalettePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the palette and returns the action requested this frame
    pub fn show(&mut self, ui: &mut egui::Ui, labels: &[String]) -> PaletteAction {
        for (index, label) in labels.iter().enumerate() {
            Self::draggable_label(ui, index, label);
            ui.add_space(4.0);
        }

        ui.add_space(8.0);
        let colors = theme::colors();
        let width = ui.available_width();

        let complete = ui.add(Self::button("完成", self.complete_held, colors.complete_pressed, width));
        self.complete_held = complete.is_pointer_button_down_on();

        let undo = ui.add(Self::button("上一步", self.undo_held, colors.undo_pressed, width));
        self.undo_held = undo.is_pointer_button_down_on();

        if complete.clicked() {
            PaletteAction::Complete
        } else if undo.clicked() {
            PaletteAction::Undo
        } else {
            PaletteAction::None
        }
    }

    fn button(text: &str, held: bool, held_fill: Color32, width: f32) -> Button<'_> {
        let button = Button::new(RichText::new(text).color(Color32::BLACK)).min_size(Vec2::new(width, 24.0));
        if held {
            button.fill(held_fill)
        } else {
            button
        }
    }

    /// A fixed-size light-blue label that starts a block drag
    fn draggable_label(ui: &mut egui::Ui, index: usize, label: &str) {
        let size = Vec2::new(panel::PALETTE_LABEL_SIZE[0], panel::PALETTE_LABEL_SIZE[1]);
        let id = Id::new(("palette_label", index));

        ui.dnd_drag_source(id, DragPayload::for_label(label), |ui| {
            let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
            let painter = ui.painter();
            painter.rect_filled(rect, 0.0, theme::colors().palette_label);
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::BLACK), StrokeKind::Inside);
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                label,
                FontId::proportional(13.0),
                theme::colors().label_text,
            );
        });
    }
}

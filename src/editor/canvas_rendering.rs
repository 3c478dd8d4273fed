//! Painting for the drop area: blocks, their ports, and connection lines

use crate::nodes::{Block, BlockGraph, BlockId};
use crate::theme;
use egui::{Align2, FontId, Painter, Pos2, Rect, Stroke, StrokeKind, Vec2};

/// Paints canvas-local geometry at an on-screen origin
pub struct CanvasRenderer<'a> {
    painter: &'a Painter,
    origin: Vec2,
}

impl<'a> CanvasRenderer<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            origin: canvas_rect.min.to_vec2(),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.origin
    }

    fn rect_to_screen(&self, rect: Rect) -> Rect {
        rect.translate(self.origin)
    }

    /// Canvas background and border, highlighted while an accepted drag hovers
    pub fn render_background(&self, canvas_rect: Rect, drop_hover: bool) {
        let colors = theme::colors();
        let fill = if drop_hover {
            colors.canvas_drop_hover
        } else {
            colors.canvas_background
        };
        self.painter.rect_filled(canvas_rect, 0.0, fill);
        self.painter.rect_stroke(
            canvas_rect,
            0.0,
            Stroke::new(1.0, colors.canvas_border),
            StrokeKind::Inside,
        );
    }

    /// Draws every block in drop order so later drops sit on top
    pub fn render_blocks(&self, graph: &BlockGraph, pressed: Option<BlockId>) {
        for block in graph.blocks() {
            self.render_block(block, pressed == Some(block.id));
        }
    }

    pub fn render_block(&self, block: &Block, pressed: bool) {
        let colors = theme::colors();
        let rect = self.rect_to_screen(block.rect());

        self.painter.rect_filled(self.rect_to_screen(block.drag_rect()), 0.0, colors.drag_area);
        self.painter.rect_filled(self.rect_to_screen(block.input_rect()), 0.0, colors.port_input);
        self.painter.rect_filled(self.rect_to_screen(block.output_rect()), 0.0, colors.port_output);

        let border = if pressed {
            Stroke::new(2.0, colors.block_pressed)
        } else {
            theme::theme().border_stroke()
        };
        self.painter.rect_stroke(rect, 0.0, border, StrokeKind::Outside);

        self.painter.text(
            self.to_screen(block.drag_rect().center()),
            Align2::CENTER_CENTER,
            &block.label,
            FontId::proportional(13.0),
            colors.label_text,
        );
    }

    /// Draws connections as straight lines, output anchor to input anchor
    pub fn render_connections(&self, graph: &BlockGraph) {
        let stroke = theme::theme().connection_stroke();
        for (from, to) in graph.connection_segments() {
            self.painter
                .line_segment([self.to_screen(from), self.to_screen(to)], stroke);
        }
    }
}

//! Block editor window: palette on the left, drop area on the right

pub mod canvas_rendering;
pub mod interaction;
pub mod panels;

pub use canvas_rendering::CanvasRenderer;
pub use interaction::InteractionManager;
pub use panels::{PaletteAction, PalettePanel};

use crate::config::EditorConfig;
use crate::constants::panel;
use crate::history::ConnectionHistory;
use crate::nodes::{BlockGraph, BlockId, DragPayload, PortSide};
use crate::{fonts, theme};
use egui::{Id, Pos2, Rect, Sense, Vec2};
use log::error;

/// Pointer events on a block, gathered before the graph is mutated
#[derive(Debug, Clone, Copy)]
enum BlockEvent {
    PortDown(BlockId, PortSide, bool),
    DragStarted(BlockId, Pos2),
    Dragged(Pos2),
    DragStopped,
    Pressed(BlockId, bool),
}

/// Main application state for the block editor
pub struct BlockEditor {
    config: EditorConfig,
    graph: BlockGraph,
    history: ConnectionHistory,
    interaction: InteractionManager,
    palette: PalettePanel,
}

impl BlockEditor {
    /// Creates the editor and installs fonts and visuals on the egui context
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        fonts::install_cjk_font(&cc.egui_ctx, &config);
        Self::with_config(config)
    }

    /// Creates the editor state without touching any egui context
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            graph: BlockGraph::new(),
            history: ConnectionHistory::new(),
            interaction: InteractionManager::new(),
            palette: PalettePanel::new(),
        }
    }

    /// Records the current connections and prints the report to stdout
    fn save_connections(&mut self) {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        if let Err(e) = self.history.complete(&self.graph, &mut out) {
            error!("Failed to write connection report: {}", e);
        }
    }

    fn show_palette(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::new()
            .fill(theme::colors().palette_background)
            .stroke(theme::theme().border_stroke())
            .inner_margin(8.0);

        egui::SidePanel::left("palette")
            .exact_width(panel::PALETTE_WIDTH)
            .resizable(false)
            .frame(frame)
            .show(ctx, |ui| {
                match self.palette.show(ui, &self.config.palette_labels) {
                    PaletteAction::Complete => self.save_connections(),
                    PaletteAction::Undo => {
                        self.graph.undo_last_connection();
                    }
                    PaletteAction::None => {}
                }
            });
    }

    fn show_canvas(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let min_size = Vec2::new(panel::MIN_CANVAS_SIZE[0], panel::MIN_CANVAS_SIZE[1]);
            let (response, painter) = ui.allocate_painter(ui.available_size().max(min_size), Sense::hover());
            let canvas_rect = response.rect;
            let origin = canvas_rect.min.to_vec2();
            let pointer = ui.ctx().pointer_latest_pos().map(|pos| pos - origin);

            // Accept drops that carry the block tag; anything else is ignored
            let drop_hover = response
                .dnd_hover_payload::<DragPayload>()
                .is_some_and(|payload| payload.has_block_format());
            if let Some(payload) = response.dnd_release_payload::<DragPayload>() {
                if let Some(pointer) = pointer {
                    self.graph.drop_payload(&payload, pointer, self.config.grid_size);
                }
            }

            let events = Self::collect_block_events(ui, &self.graph, origin);
            self.apply_block_events(events);

            let renderer = CanvasRenderer::new(&painter, canvas_rect);
            renderer.render_background(canvas_rect, drop_hover);
            renderer.render_connections(&self.graph);
            renderer.render_blocks(&self.graph, self.interaction.pressed_block());
        });
    }

    /// Registers interaction areas for every block's regions and gathers their events
    fn collect_block_events(ui: &egui::Ui, graph: &BlockGraph, origin: Vec2) -> Vec<BlockEvent> {
        let to_screen = |rect: Rect| rect.translate(origin);
        let mut events = Vec::new();

        for block in graph.blocks() {
            for side in [PortSide::Input, PortSide::Output] {
                let id = Id::new(("block_port", block.id, side));
                let response = ui.interact(to_screen(block.port_rect(side)), id, Sense::click_and_drag());
                events.push(BlockEvent::PortDown(block.id, side, response.is_pointer_button_down_on()));
            }

            let id = Id::new(("block_drag", block.id));
            let response = ui.interact(to_screen(block.drag_rect()), id, Sense::click_and_drag());
            let pointer = response.interact_pointer_pos().map(|pos| pos - origin);

            events.push(BlockEvent::Pressed(block.id, response.is_pointer_button_down_on()));
            if let Some(pointer) = pointer {
                if response.drag_started() {
                    events.push(BlockEvent::DragStarted(block.id, pointer));
                }
                if response.dragged() {
                    events.push(BlockEvent::Dragged(pointer));
                }
            }
            if response.drag_stopped() {
                events.push(BlockEvent::DragStopped);
            }
        }

        events
    }

    fn apply_block_events(&mut self, events: Vec<BlockEvent>) {
        for event in events {
            match event {
                BlockEvent::PortDown(block_id, side, down) => {
                    if self.interaction.port_down(block_id, side, down) {
                        self.graph.press_port(block_id, side);
                    }
                }
                BlockEvent::DragStarted(block_id, pointer) => {
                    self.interaction.start_drag(block_id, pointer, &self.graph);
                }
                BlockEvent::Dragged(pointer) => {
                    self.interaction.update_drag(pointer, &mut self.graph);
                }
                BlockEvent::DragStopped => self.interaction.end_drag(),
                BlockEvent::Pressed(block_id, pressed) => {
                    self.interaction.set_pressed(block_id, pressed);
                }
            }
        }
    }
}

impl eframe::App for BlockEditor {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show_palette(ctx);
        self.show_canvas(ctx);
    }
}

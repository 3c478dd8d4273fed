//! Block interaction handling (pressing ports, pressing and dragging blocks)

use crate::nodes::{BlockGraph, BlockId, PortSide};
use egui::{Pos2, Vec2};

/// Tracks what the pointer is holding down on the canvas
#[derive(Debug, Clone, Default)]
pub struct InteractionManager {
    /// Block whose drag area is currently pressed
    pressed_block: Option<BlockId>,
    /// Port currently held down; a port fires once per press
    pressed_port: Option<(BlockId, PortSide)>,
    /// Block being moved and the offset from the pointer to its top-left corner
    drag: Option<(BlockId, Vec2)>,
}

impl InteractionManager {
    /// Creates a new interaction manager
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pressed_block(&self) -> Option<BlockId> {
        self.pressed_block
    }

    /// Marks a block's drag area as pressed or released
    pub fn set_pressed(&mut self, block_id: BlockId, pressed: bool) {
        if pressed {
            self.pressed_block = Some(block_id);
        } else if self.pressed_block == Some(block_id) {
            self.pressed_block = None;
        }
    }

    /// Records the held state of a port and returns true on the frame it goes down.
    ///
    /// Ports act on press, so a press that turns into a drag still counts.
    pub fn port_down(&mut self, block_id: BlockId, side: PortSide, down: bool) -> bool {
        let port = (block_id, side);
        if down {
            if self.pressed_port == Some(port) {
                return false;
            }
            self.pressed_port = Some(port);
            true
        } else {
            if self.pressed_port == Some(port) {
                self.pressed_port = None;
            }
            false
        }
    }

    /// Start dragging a block, remembering where inside it the pointer grabbed it
    pub fn start_drag(&mut self, block_id: BlockId, pointer: Pos2, graph: &BlockGraph) {
        if let Some(block) = graph.block(block_id) {
            self.drag = Some((block_id, block.position - pointer));
            self.pressed_block = Some(block_id);
        }
    }

    /// Move the dragged block so it stays under the pointer
    pub fn update_drag(&mut self, pointer: Pos2, graph: &mut BlockGraph) {
        if let Some((block_id, offset)) = self.drag {
            graph.move_block(block_id, pointer + offset);
        }
    }

    /// End dragging
    pub fn end_drag(&mut self) {
        if let Some((block_id, _)) = self.drag.take() {
            self.set_pressed(block_id, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut graph = BlockGraph::new();
        let id = graph.add_block("方塊 1", Pos2::new(40.0, 40.0));
        let mut interaction = InteractionManager::new();

        interaction.start_drag(id, Pos2::new(70.0, 55.0), &graph);
        assert_eq!(interaction.drag.map(|(dragged, _)| dragged), Some(id));
        assert_eq!(interaction.pressed_block(), Some(id));

        interaction.update_drag(Pos2::new(103.0, 61.0), &mut graph);
        // moves are not snapped
        assert_eq!(graph.block(id).unwrap().position, Pos2::new(73.0, 46.0));

        interaction.end_drag();
        assert!(interaction.drag.is_none());
        assert_eq!(interaction.pressed_block(), None);

        interaction.update_drag(Pos2::ZERO, &mut graph);
        assert_eq!(graph.block(id).unwrap().position, Pos2::new(73.0, 46.0));
    }

    #[test]
    fn test_start_drag_on_unknown_block() {
        let graph = BlockGraph::new();
        let mut interaction = InteractionManager::new();
        interaction.start_drag(3, Pos2::ZERO, &graph);
        assert!(interaction.drag.is_none());
    }

    #[test]
    fn test_release_other_block_keeps_pressed() {
        let mut interaction = InteractionManager::new();
        interaction.set_pressed(1, true);
        interaction.set_pressed(2, false);
        assert_eq!(interaction.pressed_block(), Some(1));
        interaction.set_pressed(1, false);
        assert_eq!(interaction.pressed_block(), None);
    }

    #[test]
    fn test_port_fires_once_on_press_even_while_held() {
        let mut interaction = InteractionManager::new();
        assert!(interaction.port_down(0, PortSide::Output, true));
        // held across frames, including while the pointer wanders
        assert!(!interaction.port_down(0, PortSide::Output, true));
        assert!(!interaction.port_down(0, PortSide::Output, true));
        // other ports report up in the same frames
        assert!(!interaction.port_down(1, PortSide::Input, false));

        assert!(!interaction.port_down(0, PortSide::Output, false));
        assert!(interaction.port_down(0, PortSide::Output, true));
    }

    #[test]
    fn test_pressing_another_port_fires_immediately() {
        let mut interaction = InteractionManager::new();
        assert!(interaction.port_down(0, PortSide::Output, true));
        assert!(interaction.port_down(1, PortSide::Input, true));
        // the earlier port's release does not clear the newer press
        assert!(!interaction.port_down(0, PortSide::Output, false));
        assert!(!interaction.port_down(1, PortSide::Input, true));
    }
}

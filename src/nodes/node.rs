//! Block type and hit-testing against its regions

use super::port::PortSide;
use crate::constants::block::{PORT_WIDTH, SIZE};
use egui::{Pos2, Rect, Vec2};

/// Unique identifier for a block
pub type BlockId = usize;

/// Region of a block under a point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockRegion {
    /// One of the two port strips
    Port(PortSide),
    /// The labelled middle area that moves the block
    DragArea,
}

/// A placed block with an input port on the left and an output port on the right
#[derive(Debug, Clone)]
pub struct Block {
    pub id: BlockId,
    pub label: String,
    pub position: Pos2,
}

impl Block {
    /// Creates a new block with its top-left corner at `position`
    pub fn new(id: BlockId, label: impl Into<String>, position: Pos2) -> Self {
        Self {
            id,
            label: label.into(),
            position,
        }
    }

    /// Fixed block size
    pub fn size() -> Vec2 {
        Vec2::new(SIZE[0], SIZE[1])
    }

    /// Returns the bounding rectangle of the block
    pub fn rect(&self) -> Rect {
        Rect::from_min_size(self.position, Self::size())
    }

    pub fn input_rect(&self) -> Rect {
        Rect::from_min_size(self.position, Vec2::new(PORT_WIDTH, SIZE[1]))
    }

    pub fn output_rect(&self) -> Rect {
        Rect::from_min_size(
            self.position + Vec2::new(SIZE[0] - PORT_WIDTH, 0.0),
            Vec2::new(PORT_WIDTH, SIZE[1]),
        )
    }

    pub fn drag_rect(&self) -> Rect {
        Rect::from_min_max(
            self.position + Vec2::new(PORT_WIDTH, 0.0),
            self.position + Vec2::new(SIZE[0] - PORT_WIDTH, SIZE[1]),
        )
    }

    /// Rectangle of the port on the given side
    pub fn port_rect(&self, side: PortSide) -> Rect {
        match side {
            PortSide::Input => self.input_rect(),
            PortSide::Output => self.output_rect(),
        }
    }

    /// Point where incoming connections end
    pub fn input_anchor(&self) -> Pos2 {
        self.input_rect().center()
    }

    /// Point where outgoing connections start
    pub fn output_anchor(&self) -> Pos2 {
        self.output_rect().center()
    }

    /// Check if a point is inside the block
    pub fn contains(&self, point: Pos2) -> bool {
        self.rect().contains(point)
    }

    /// Finds the region of this block under `point`, if any.
    ///
    /// Ports are checked before the drag area so their shared edges belong to the port.
    pub fn hit_test(&self, point: Pos2) -> Option<BlockRegion> {
        if !self.contains(point) {
            return None;
        }
        if self.input_rect().contains(point) {
            Some(BlockRegion::Port(PortSide::Input))
        } else if self.output_rect().contains(point) {
            Some(BlockRegion::Port(PortSide::Output))
        } else {
            Some(BlockRegion::DragArea)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_at_origin() -> Block {
        Block::new(0, "方塊 1", Pos2::new(100.0, 40.0))
    }

    #[test]
    fn test_region_layout() {
        let block = block_at_origin();
        assert_eq!(block.rect(), Rect::from_min_max(Pos2::new(100.0, 40.0), Pos2::new(220.0, 90.0)));
        assert_eq!(block.input_rect().width(), 20.0);
        assert_eq!(block.output_rect().min.x, 200.0);
        assert_eq!(block.drag_rect().width(), 80.0);
        assert_eq!(block.input_anchor(), Pos2::new(110.0, 65.0));
        assert_eq!(block.output_anchor(), Pos2::new(210.0, 65.0));
    }

    #[test]
    fn test_hit_test_regions() {
        let block = block_at_origin();
        assert_eq!(block.hit_test(Pos2::new(105.0, 50.0)), Some(BlockRegion::Port(PortSide::Input)));
        assert_eq!(block.hit_test(Pos2::new(215.0, 85.0)), Some(BlockRegion::Port(PortSide::Output)));
        assert_eq!(block.hit_test(Pos2::new(160.0, 65.0)), Some(BlockRegion::DragArea));
        assert_eq!(block.hit_test(Pos2::new(99.0, 65.0)), None);
        assert_eq!(block.hit_test(Pos2::new(160.0, 91.0)), None);
    }
}

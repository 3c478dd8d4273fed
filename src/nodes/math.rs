//! Geometry helpers for block placement and connection drawing

use crate::constants::block::STACKED_CONNECTION_SPACING;
use egui::{Pos2, Vec2};

/// Snaps a position to the nearest lower multiple of `grid_size` on both axes.
///
/// Uses floor division, so negative coordinates snap away from zero.
pub fn snap_to_grid(pos: Pos2, grid_size: f32) -> Pos2 {
    if grid_size <= 0.0 {
        return pos;
    }
    Pos2::new(
        (pos.x / grid_size).floor() * grid_size,
        (pos.y / grid_size).floor() * grid_size,
    )
}

/// Top-left corner for a block dropped with its centre under `pointer`
pub fn drop_origin(pointer: Pos2, block_size: Vec2, grid_size: f32) -> Pos2 {
    snap_to_grid(pointer - block_size / 2.0, grid_size)
}

/// Offset for the `repeat`-th duplicate of a connection, shifting it upwards
pub fn stacked_offset(repeat: usize) -> Vec2 {
    Vec2::new(0.0, -(repeat as f32) * STACKED_CONNECTION_SPACING)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_grid_floors_both_axes() {
        assert_eq!(snap_to_grid(Pos2::new(0.0, 0.0), 20.0), Pos2::new(0.0, 0.0));
        assert_eq!(snap_to_grid(Pos2::new(19.9, 39.0), 20.0), Pos2::new(0.0, 20.0));
        assert_eq!(snap_to_grid(Pos2::new(40.0, 41.0), 20.0), Pos2::new(40.0, 40.0));
        assert_eq!(snap_to_grid(Pos2::new(137.0, 73.5), 25.0), Pos2::new(125.0, 50.0));
    }

    #[test]
    fn test_snap_to_grid_negative_coordinates() {
        assert_eq!(snap_to_grid(Pos2::new(-1.0, -20.0), 20.0), Pos2::new(-20.0, -20.0));
        assert_eq!(snap_to_grid(Pos2::new(-21.0, 5.0), 20.0), Pos2::new(-40.0, 0.0));
    }

    #[test]
    fn test_snap_to_grid_ignores_degenerate_grid() {
        let pos = Pos2::new(13.0, 7.0);
        assert_eq!(snap_to_grid(pos, 0.0), pos);
    }

    #[test]
    fn test_drop_origin_centres_then_snaps() {
        // pointer (200, 100) minus half of 120x50 is (140, 75), snapped to (140, 60)
        let origin = drop_origin(Pos2::new(200.0, 100.0), Vec2::new(120.0, 50.0), 20.0);
        assert_eq!(origin, Pos2::new(140.0, 60.0));
    }

    #[test]
    fn test_stacked_offset() {
        assert_eq!(stacked_offset(0), Vec2::ZERO);
        assert_eq!(stacked_offset(1), Vec2::new(0.0, -10.0));
        assert_eq!(stacked_offset(3), Vec2::new(0.0, -30.0));
    }
}

//! Block graph data structures and operations

use super::math::{drop_origin, stacked_offset};
use super::node::{Block, BlockId, BlockRegion};
use super::payload::DragPayload;
use super::port::PortSide;
use egui::Pos2;
use log::{debug, info};
use std::collections::HashMap;

/// A directed connection from one block's output port to another block's input port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Connection {
    pub from_block: BlockId,
    pub to_block: BlockId,
}

impl Connection {
    /// Creates a new connection
    pub fn new(from_block: BlockId, to_block: BlockId) -> Self {
        Self {
            from_block,
            to_block,
        }
    }
}

/// Placed blocks in drop order plus the connections drawn between them
#[derive(Debug, Clone, Default)]
pub struct BlockGraph {
    blocks: Vec<Block>,
    connections: Vec<Connection>,
    /// Output port clicked last, waiting for an input port
    pending_start: Option<BlockId>,
    next_block_id: BlockId,
}

impl BlockGraph {
    /// Creates a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Blocks in the order they were dropped
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Connections in the order they were made
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    pub fn pending_start(&self) -> Option<BlockId> {
        self.pending_start
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id == id)
    }

    /// Appends a block and returns its ID
    pub fn add_block(&mut self, label: impl Into<String>, position: Pos2) -> BlockId {
        let id = self.next_block_id;
        self.next_block_id += 1;
        let block = Block::new(id, label, position);
        info!(
            "Placed block {} '{}' at ({:.0}, {:.0})",
            id, block.label, position.x, position.y
        );
        self.blocks.push(block);
        id
    }

    /// Places a block for a dropped payload centred on `pointer` and snapped to the grid.
    ///
    /// Payloads without the block format tag, or with an undecodable label, are ignored.
    pub fn drop_payload(&mut self, payload: &DragPayload, pointer: Pos2, grid_size: f32) -> Option<BlockId> {
        match payload.label() {
            Ok(label) => {
                let position = drop_origin(pointer, Block::size(), grid_size);
                Some(self.add_block(label, position))
            }
            Err(e) => {
                debug!("Ignoring drop: {}", e);
                None
            }
        }
    }

    /// Moves a block without snapping
    pub fn move_block(&mut self, id: BlockId, position: Pos2) {
        if let Some(block) = self.blocks.iter_mut().find(|block| block.id == id) {
            block.position = position;
        }
    }

    /// Topmost block containing `point`; later drops sit above earlier ones
    pub fn block_at(&self, point: Pos2) -> Option<&Block> {
        self.blocks.iter().rev().find(|block| block.contains(point))
    }

    /// Handles a click on one of a block's ports.
    ///
    /// An output click arms the block as the connection start. An input click on a
    /// different block completes the connection; any other input click is ignored
    /// and leaves the armed start in place.
    pub fn press_port(&mut self, block_id: BlockId, side: PortSide) -> Option<Connection> {
        if self.block(block_id).is_none() {
            return None;
        }
        debug!("Pressed {} port of block {}", side, block_id);

        match side {
            PortSide::Output => {
                self.pending_start = Some(block_id);
                None
            }
            PortSide::Input => {
                let start = self.pending_start.filter(|&start| start != block_id)?;
                let connection = Connection::new(start, block_id);
                self.connections.push(connection);
                self.pending_start = None;
                info!("Connected block {} -> block {}", start, block_id);
                Some(connection)
            }
        }
    }

    /// Hit-tests `point` and forwards port hits to [`Self::press_port`]
    pub fn click(&mut self, point: Pos2) -> Option<Connection> {
        let (block_id, region) = {
            let block = self.block_at(point)?;
            (block.id, block.hit_test(point)?)
        };
        match region {
            BlockRegion::Port(side) => self.press_port(block_id, side),
            BlockRegion::DragArea => None,
        }
    }

    /// Removes the most recently added connection
    pub fn undo_last_connection(&mut self) -> Option<Connection> {
        let removed = self.connections.pop();
        if let Some(connection) = removed {
            info!(
                "Undid connection block {} -> block {}",
                connection.from_block, connection.to_block
            );
        }
        removed
    }

    /// One-based position of a block in drop order
    pub fn display_index(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id == id).map(|i| i + 1)
    }

    /// Connections as one-based drop-order index pairs
    pub fn indexed_connections(&self) -> Vec<(usize, usize)> {
        self.connections
            .iter()
            .filter_map(|conn| {
                Some((
                    self.display_index(conn.from_block)?,
                    self.display_index(conn.to_block)?,
                ))
            })
            .collect()
    }

    /// Line segments for every connection, from output anchor to input anchor.
    ///
    /// Repeats of the same pair are shifted upward so they do not overlap.
    pub fn connection_segments(&self) -> Vec<(Pos2, Pos2)> {
        let mut repeats: HashMap<Connection, usize> = HashMap::new();
        let mut segments = Vec::with_capacity(self.connections.len());

        for connection in &self.connections {
            let (Some(from), Some(to)) = (self.block(connection.from_block), self.block(connection.to_block)) else {
                continue;
            };
            let count = repeats.entry(*connection).or_insert(0);
            let offset = stacked_offset(*count);
            *count += 1;
            segments.push((from.output_anchor() + offset, to.input_anchor() + offset));
        }

        segments
    }
}

//! Block system - core data structures for placed blocks and their connections

pub mod graph;
pub mod math;
pub mod node;
pub mod payload;
pub mod port;

// Re-export core types
pub use graph::{BlockGraph, Connection};
pub use node::{Block, BlockId, BlockRegion};
pub use payload::{DragPayload, PayloadError};
pub use port::PortSide;

//! Blockwire core library
//!
//! Blocks are dragged from a palette onto a canvas and wired together by
//! clicking an output port and then another block's input port. Completed
//! connection sets are recorded and reported by drop-order index.

pub mod config;
pub mod constants;
pub mod editor;
pub mod fonts;
pub mod history;
pub mod nodes;
pub mod theme;

// Re-export commonly used types
pub use config::EditorConfig;
pub use editor::BlockEditor;
pub use history::ConnectionHistory;
pub use nodes::{Block, BlockGraph, BlockId, Connection, DragPayload, PortSide};

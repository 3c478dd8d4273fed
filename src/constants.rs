//! Application-wide constants and default values
//!
//! Centralized location for all hard-coded values to improve maintainability

/// Data tag carried by palette drags; drops without it are ignored
pub const BLOCK_PAYLOAD_FORMAT: &str = "application/x-dnditemdata";

/// Default grid the dropped blocks snap to
pub const DEFAULT_GRID_SIZE: f32 = 20.0;

/// Window title and geometry
pub mod window {
    pub const TITLE: &str = "拖拽按鈕介面";

    pub const DEFAULT_POSITION: [f32; 2] = [100.0, 100.0];

    pub const DEFAULT_SIZE: [f32; 2] = [800.0, 600.0];
}

/// Block sizing constants
pub mod block {
    /// Fixed size of a placed block
    pub const SIZE: [f32; 2] = [120.0, 50.0];

    /// Width of the input and output port strips at either end of a block
    pub const PORT_WIDTH: f32 = 20.0;

    /// Vertical shift applied per repeated connection between the same pair
    pub const STACKED_CONNECTION_SPACING: f32 = 10.0;

    /// Stroke width of connection lines
    pub const CONNECTION_WIDTH: f32 = 2.0;
}

/// Panel sizing constants
pub mod panel {
    /// Fixed width of the palette side panel
    pub const PALETTE_WIDTH: f32 = 150.0;

    /// Size of a draggable palette label
    pub const PALETTE_LABEL_SIZE: [f32; 2] = [80.0, 30.0];

    /// Minimum size of the drop area canvas
    pub const MIN_CANVAS_SIZE: [f32; 2] = [400.0, 400.0];

    /// Number of blocks offered in the palette by default
    pub const DEFAULT_PALETTE_BLOCKS: usize = 3;
}

/// Console output constants
pub mod output {
    /// Prefix of the accumulated history line printed on completion
    pub const HISTORY_PREFIX: &str = "所有連接紀錄:";
}

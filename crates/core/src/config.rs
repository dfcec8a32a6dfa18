//! Game configuration - board geometry and tick cadence
//!
//! The board size is not set directly. Like a canvas game, it follows from a
//! canvas size in pixels divided by the block size. The configuration is
//! validated once at startup and never changes afterwards.

use thiserror::Error;

use crate::shapes::max_shape_width;
use crate::types::{BLOCK_SIZE_PX, CANVAS_HEIGHT_PX, CANVAS_WIDTH_PX, TICK_MS};

/// Startup configuration problems
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("block size must be greater than zero")]
    ZeroBlockSize,
    #[error("canvas {width}x{height}px is not a whole number of {block}px blocks")]
    UnevenCanvas { width: u16, height: u16, block: u16 },
    #[error("board of {columns} columns is too narrow, need at least {needed}")]
    BoardTooNarrow { columns: usize, needed: usize },
    #[error("board of {rows} rows cannot hold the tallest piece ({needed})")]
    BoardTooShort { rows: usize, needed: usize },
    #[error("tick interval must be greater than zero")]
    ZeroTick,
}

/// Board geometry and gravity cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub canvas_width_px: u16,
    pub canvas_height_px: u16,
    pub block_size_px: u16,
    /// Milliseconds between gravity ticks
    pub tick_ms: u32,
}

impl GameConfig {
    /// Board width in cells
    pub fn columns(&self) -> usize {
        self.canvas_width_px
            .checked_div(self.block_size_px)
            .unwrap_or(0) as usize
    }

    /// Board height in cells
    pub fn rows(&self) -> usize {
        self.canvas_height_px
            .checked_div(self.block_size_px)
            .unwrap_or(0) as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.block_size_px == 0 {
            return Err(ConfigError::ZeroBlockSize);
        }
        if self.canvas_width_px % self.block_size_px != 0
            || self.canvas_height_px % self.block_size_px != 0
        {
            return Err(ConfigError::UnevenCanvas {
                width: self.canvas_width_px,
                height: self.canvas_height_px,
                block: self.block_size_px,
            });
        }

        let needed = min_columns();
        if self.columns() < needed {
            return Err(ConfigError::BoardTooNarrow {
                columns: self.columns(),
                needed,
            });
        }
        // The bar has to fit standing up as well.
        let tallest = max_shape_width();
        if self.rows() < tallest {
            return Err(ConfigError::BoardTooShort {
                rows: self.rows(),
                needed: tallest,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}

/// Narrowest board on which every shape fits at the game-over probe column
/// `floor(columns / 2) - 1`.
///
/// The widest mask (`w` cells) fits there iff `ceil(columns / 2) + 1 >= w`,
/// so the minimum is `2w - 3`, and never less than `w`.
pub fn min_columns() -> usize {
    let widest = max_shape_width();
    widest.max((2 * widest).saturating_sub(3))
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width_px: CANVAS_WIDTH_PX,
            canvas_height_px: CANVAS_HEIGHT_PX,
            block_size_px: BLOCK_SIZE_PX,
            tick_ms: TICK_MS,
        }
    }
}

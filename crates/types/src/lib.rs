//! Core types module - shared constants and command types
//!
//! Everything here is plain data with no dependencies, so the engine, the
//! terminal view and the input mapping can all agree on the same vocabulary.
//!
//! # Board Dimensions
//!
//! The playfield is sized the way a canvas game sizes it: a fixed canvas
//! (in pixels) divided by a fixed block size.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CANVAS_WIDTH_PX` | 200 | Canvas width |
//! | `CANVAS_HEIGHT_PX` | 400 | Canvas height |
//! | `BLOCK_SIZE_PX` | 20 | Edge length of one cell |
//! | `BOARD_COLUMNS` | 10 | `CANVAS_WIDTH_PX / BLOCK_SIZE_PX` |
//! | `BOARD_ROWS` | 20 | `CANVAS_HEIGHT_PX / BLOCK_SIZE_PX` |
//!
//! # Timing
//!
//! Gravity advances one row per tick. The default cadence is two ticks per
//! second (`TICK_MS` = 500).
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, BOARD_COLUMNS, BOARD_ROWS};
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::MoveLeft);
//!
//! assert_eq!(BOARD_COLUMNS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

/// Default canvas width in pixels
pub const CANVAS_WIDTH_PX: u16 = 200;

/// Default canvas height in pixels
pub const CANVAS_HEIGHT_PX: u16 = 400;

/// Default block (cell) size in pixels
pub const BLOCK_SIZE_PX: u16 = 20;

/// Board width in cells for the default canvas
pub const BOARD_COLUMNS: u16 = CANVAS_WIDTH_PX / BLOCK_SIZE_PX;

/// Board height in cells for the default canvas
pub const BOARD_ROWS: u16 = CANVAS_HEIGHT_PX / BLOCK_SIZE_PX;

/// Gravity tick interval in milliseconds (2 ticks per second)
pub const TICK_MS: u32 = 500;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Level a new game starts at
pub const STARTING_LEVEL: u32 = 1;

/// Number of entries in the shape catalog
pub const SHAPE_COUNT: usize = 7;

/// Largest edge of any shape mask (the 4-wide bar)
pub const MAX_MASK_DIM: usize = 4;

/// Line clear scoring table, indexed by lines cleared in one event.
///
/// Points are multiplied by the current level (which starts at 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A grid or mask cell: `EMPTY` or a colour id in `1..=7`.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;


/// Commands the presentation layer can issue against the game state
///
/// The four movement commands are silent no-ops when blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down (never locks)
    SoftDrop,
    /// Rotate piece a quarter turn, rejected on collision
    Rotate,
    /// Discard the session and start a fresh game
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
    /// assert_eq!(GameAction::from_str("SOFTDROP"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Restart => "restart",
        }
    }
}

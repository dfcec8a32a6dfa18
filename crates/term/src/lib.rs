//! Terminal rendering for the game.
//!
//! The view maps a core snapshot into a framebuffer of styled characters, and
//! the renderer flushes that framebuffer to the terminal through `crossterm`,
//! redrawing only the rows that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{block_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! Terminal input - maps `crossterm` key events onto game commands.
//!
//! Each key press yields at most one discrete command. There is no
//! auto-repeat handling here; the terminal's own key repeat is enough for
//! a game that only falls twice a second.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, should_quit};

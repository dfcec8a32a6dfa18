//! Core game logic - grid, pieces, collision, line clears and scoring
//!
//! Everything in this crate is synchronous and free of I/O. The caller owns a
//! [`GameState`], feeds it gravity ticks at a fixed cadence and player
//! commands in between, and reads a [`GameSnapshot`] to draw each frame.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven piece masks, rotation, random sampling
//! - [`piece`]: the active piece: spawn, move, rotate
//! - [`grid`]: the playfield cell array
//! - [`collision`]: the one placement predicate everything shares
//! - [`lock`]: committing a piece and clearing complete rows
//! - [`scoring`]: line-clear points and level progression
//! - [`config`]: board geometry and tick cadence
//! - [`game_state`]: the owning context and gravity state machine
//! - [`rng`]: seedable random source
//! - [`snapshot`]: render-facing copy of the state
//!
//! # Rules
//!
//! - Pieces are drawn uniformly at random, repeats allowed
//! - Rotation is a plain quarter turn with no wall kicks; it is rejected if
//!   the turned mask does not fit at the same anchor
//! - A piece locks on the tick where it can no longer fall
//! - Clearing 1/2/3/4 lines scores 40/100/300/1200 times the level
//! - The level starts at 1 and rises every 10 lines
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, TickOutcome};
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert_eq!(game.tick(), TickOutcome::Moved);
//!
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.level(), 1);
//! ```

pub mod collision;
pub mod config;
pub mod game_state;
pub mod grid;
pub mod lock;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use collision::collides;
pub use config::{min_columns, ConfigError, GameConfig};
pub use game_state::{GamePhase, GameState, TickOutcome};
pub use grid::Grid;
pub use lock::{clear_completed_rows, lock};
pub use piece::{move_piece, rotate_piece, spawn, ActivePiece};
pub use rng::SimpleRng;
pub use scoring::{line_clear_points, ScoreEvent, ScoreTracker};
pub use shapes::{sample, ShapeMask, SHAPES};
pub use snapshot::{ActiveSnapshot, GameSnapshot};

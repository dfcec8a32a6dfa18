//! Blockfall (workspace facade crate).
//!
//! Re-exports the member crates under one roof so the binaries, tests and
//! benchmarks can write `blockfall::core::GameState` and friends.

pub mod cli;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

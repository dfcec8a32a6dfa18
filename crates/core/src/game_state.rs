//! Game state module - the owning context for one session
//!
//! `GameState` holds the grid, the falling piece, the score counters and the
//! random source. Gravity is driven from outside: the caller invokes
//! [`GameState::tick`] at a fixed cadence and forwards player commands via
//! [`GameState::apply_action`] between ticks. Every call runs to completion
//! before the next one starts.

use crate::collision::collides;
use crate::config::{ConfigError, GameConfig};
use crate::grid::Grid;
use crate::lock::{clear_completed_rows, lock};
use crate::piece::{move_piece, rotate_piece, spawn, ActivePiece};
use crate::rng::SimpleRng;
use crate::scoring::{ScoreEvent, ScoreTracker};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::GameAction;

/// Gravity state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    Falling,
    /// Only observable while a tick is committing a piece
    Locking,
    /// Terminal; only a restart leaves it
    GameOver,
}

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece advanced one row
    Moved,
    /// The piece locked and a new one spawned
    Locked(ScoreEvent),
    /// The piece locked and the next one had no room; reported once
    GameOver(ScoreEvent),
    /// Nothing happened (game already over)
    Idle,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    active: ActivePiece,
    scores: ScoreTracker,
    rng: SimpleRng,
    phase: GamePhase,
    /// Seed this session was started with
    seed: u32,
    pieces_locked: u32,
}

impl GameState {
    /// New game on the default 10x20 board
    pub fn new(seed: u32) -> Self {
        Self::fresh(GameConfig::default(), seed)
    }

    /// New game with an explicit configuration, validated first
    pub fn with_config(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::fresh(config, seed))
    }

    fn fresh(config: GameConfig, seed: u32) -> Self {
        let grid = Grid::new(config.rows(), config.columns());
        let mut rng = SimpleRng::new(seed);
        let active = spawn(grid.columns(), &mut rng);

        Self {
            config,
            grid,
            active,
            scores: ScoreTracker::new(),
            rng,
            phase: GamePhase::Falling,
            seed,
            pieces_locked: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn level(&self) -> u32 {
        self.scores.level()
    }

    pub fn lines(&self) -> u32 {
        self.scores.total_lines()
    }

    pub fn scores(&self) -> &ScoreTracker {
        &self.scores
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Column probed for room after each spawn: `floor(columns / 2) - 1`.
    ///
    /// This is deliberately not the new piece's own spawn column.
    pub fn game_over_probe_column(&self) -> i32 {
        (self.grid.columns() / 2) as i32 - 1
    }

    /// Advance gravity by one row, locking and respawning on contact.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase == GamePhase::GameOver {
            return TickOutcome::Idle;
        }

        let advanced = ActivePiece {
            row: self.active.row + 1,
            ..self.active
        };
        if !advanced.collides(&self.grid) {
            self.active = advanced;
            return TickOutcome::Moved;
        }

        // Contact: the piece stays on its last valid row and locks there.
        self.phase = GamePhase::Locking;
        let event = self.lock_active();

        self.active = spawn(self.grid.columns(), &mut self.rng);
        if collides(
            0,
            self.game_over_probe_column(),
            &self.active.shape,
            &self.grid,
        ) {
            self.phase = GamePhase::GameOver;
            log::info!(
                "game over: score {} level {} lines {} after {} pieces",
                self.score(),
                self.level(),
                self.lines(),
                self.pieces_locked
            );
            return TickOutcome::GameOver(event);
        }

        self.phase = GamePhase::Falling;
        TickOutcome::Locked(event)
    }

    /// Commit the active piece, clear rows and update the score.
    fn lock_active(&mut self) -> ScoreEvent {
        lock(&self.active, &mut self.grid);
        self.pieces_locked = self.pieces_locked.wrapping_add(1);

        let lines = clear_completed_rows(&mut self.grid);
        let event = self.scores.on_lines_cleared(lines);
        log::debug!(
            "locked piece #{} at ({}, {}): {} line(s), +{} points",
            self.pieces_locked,
            self.active.row,
            self.active.col,
            event.lines,
            event.points
        );
        event
    }

    /// Apply a player command. Returns whether anything changed.
    ///
    /// Blocked moves and rotations are silent no-ops. Once the game is over
    /// only `Restart` has an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if action == GameAction::Restart {
            self.restart();
            return true;
        }
        if self.phase == GamePhase::GameOver {
            return false;
        }

        let next = match action {
            GameAction::MoveLeft => move_piece(&self.active, -1, 0, &self.grid),
            GameAction::MoveRight => move_piece(&self.active, 1, 0, &self.grid),
            GameAction::SoftDrop => move_piece(&self.active, 0, 1, &self.grid),
            GameAction::Rotate => rotate_piece(&self.active, &self.grid),
            GameAction::Restart => return false,
        };

        let changed = next != self.active;
        self.active = next;
        changed
    }

    /// Throw the whole session away and start over on the same board size.
    pub fn restart(&mut self) {
        let seed = self.rng.next_u32();
        log::info!("restarting with seed {}", seed);
        *self = Self::fresh(self.config, seed);
    }

    /// Copy the render-facing state into `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.grid.rows();
        out.columns = self.grid.columns();
        out.grid.clear();
        out.grid.extend_from_slice(self.grid.cells());
        out.active = if self.game_over() {
            None
        } else {
            Some(ActiveSnapshot::from(&self.active))
        };
        out.score = self.score();
        out.level = self.level();
        out.lines = self.lines();
        out.pieces_locked = self.pieces_locked;
        out.game_over = self.game_over();
        out.seed = self.seed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

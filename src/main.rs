//! Terminal runner (default binary).
//!
//! Drives the core with a fixed gravity cadence, forwards key presses between
//! ticks and redraws through the framebuffer renderer.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::cli::{parse_args, USAGE};
use blockfall::core::{GameSnapshot, GameState, TickOutcome};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;
    if options.help {
        println!("usage: blockfall [options]\n{}", USAGE);
        return Ok(());
    }

    let seed = options.seed.unwrap_or_else(clock_seed);
    let game = GameState::with_config(options.config, seed)
        .context("failed to create game")?;
    log::info!(
        "starting {}x{} board, seed {}, tick {}ms",
        game.grid().columns(),
        game.grid().rows(),
        seed,
        game.config().tick_ms
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState) -> Result<()> {
    let view = GameView::default();
    let tick_duration = Duration::from_millis(u64::from(game.config().tick_ms));

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_tick = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            game.snapshot_into(&mut snap);
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        log::trace!("action {}", action.as_str());
                        if game.apply_action(action) {
                            dirty = true;
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            match game.tick() {
                TickOutcome::Idle => {}
                TickOutcome::GameOver(_) => {
                    log::info!("final score {}", game.score());
                    dirty = true;
                }
                TickOutcome::Moved | TickOutcome::Locked(_) => dirty = true,
            }
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

//! Headless simulator.
//!
//! Plays one game with a seeded random "player" and prints the final state as
//! JSON. Useful for checking that a seed reproduces the same game.

use anyhow::Result;
use serde_json::json;

use blockfall::cli::{parse_args, USAGE};
use blockfall::core::{GameState, SimpleRng, TickOutcome};
use blockfall::types::GameAction;

/// Player moves between two gravity ticks
const ACTIONS_PER_TICK: u32 = 2;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;
    if options.help {
        println!("usage: simulate [options]\n{}", USAGE);
        return Ok(());
    }

    let seed = options.seed.unwrap_or(1);
    let mut game = GameState::with_config(options.config, seed)?;
    // Player choices come from their own stream so they do not shift the
    // piece sequence.
    let mut player = SimpleRng::new(seed ^ 0x9e37_79b9);

    let mut ticks = 0u32;
    while ticks < options.ticks {
        for _ in 0..ACTIONS_PER_TICK {
            if let Some(action) = pick_action(&mut player) {
                game.apply_action(action);
            }
        }

        ticks += 1;
        if let TickOutcome::GameOver(_) = game.tick() {
            break;
        }
    }
    log::info!("simulation stopped after {} ticks", ticks);

    let report = json!({
        "ticks": ticks,
        "snapshot": game.snapshot(),
    });
    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}

fn pick_action(rng: &mut SimpleRng) -> Option<GameAction> {
    match rng.next_range(5) {
        0 => Some(GameAction::MoveLeft),
        1 => Some(GameAction::MoveRight),
        2 => Some(GameAction::Rotate),
        3 => Some(GameAction::SoftDrop),
        _ => None,
    }
}

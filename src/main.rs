use anyhow::{Context, Result};
use combat::Combatant;
use tracing_subscriber::EnvFilter;

use combat_game::{AutoPilot, GameConfig, GameSession, LogView};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path))?,
        None => GameConfig::default(),
    };
    config.apply_env();

    let mut session = match GameSession::from_config(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", error::handle_error(&e));
            return Err(e).context("Failed to start game");
        }
    };
    let mut input = AutoPilot::new();
    let mut view = LogView;

    loop {
        input.restock(&mut session);
        let outcome = session.run_battle(&mut input, &mut view);
        if outcome.end_game {
            println!(
                "{} fell after {} battles with {} gold.",
                session.player().name(),
                session.battles(),
                outcome.final_gold
            );
            break;
        }
        if outcome.game_completed {
            println!(
                "{} slew the dragon after {} battles with {} gold.",
                session.player().name(),
                session.battles(),
                outcome.final_gold
            );
            break;
        }
    }

    Ok(())
}

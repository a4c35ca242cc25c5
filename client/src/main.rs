mod audio;
mod config;
mod input;
mod renderer;
mod terminal;

use std::path::PathBuf;

use clap::Parser;
use snake_engine::logger::{self, LogTarget};
use snake_engine::persistence::{FileHighScoreStore, HighScoreStore, MemoryHighScoreStore};
use snake_engine::{Difficulty, EngineSettings, GameSession, SessionRng, log, run_game_loop};
use tokio::sync::mpsc;

use audio::TerminalBell;
use input::{InputMapper, spawn_input_thread};
use renderer::TerminalRenderer;
use terminal::TerminalGuard;

#[derive(Parser)]
#[command(name = "neo_snake")]
struct Args {
    /// YAML config file; defaults to one next to the executable.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for food placement, for reproducible games.
    #[arg(long)]
    seed: Option<u64>,

    /// slow, normal or fast; overrides the config file.
    #[arg(long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Keep the high score in memory only.
    #[arg(long)]
    no_persist: bool,
}

fn parse_difficulty(name: &str) -> Result<Difficulty, String> {
    Difficulty::from_name(name).ok_or_else(|| format!("unknown difficulty '{}'", name))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut game_config = config::get_config_manager(args.config.as_deref()).get_config()?;
    if let Some(difficulty) = args.difficulty {
        game_config.difficulty = difficulty;
    }

    let prefix = if args.use_log_prefix {
        Some("Client".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, LogTarget::File(config::log_path(&game_config)));

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting neo_snake with seed {} on {} difficulty", rng.seed(), game_config.difficulty);

    let store: Box<dyn HighScoreStore> = if args.no_persist {
        Box::new(MemoryHighScoreStore::default())
    } else {
        Box::new(FileHighScoreStore::new(config::high_score_path(&game_config)))
    };

    let guard = TerminalGuard::enter()?;

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let mapper = InputMapper::new(
        game_config.audio.sound_enabled,
        game_config.controls.swipe_threshold,
    );
    spawn_input_thread(mapper, command_tx);

    let session = GameSession::new(
        EngineSettings::from(&game_config),
        rng,
        TerminalRenderer::stdout(),
        TerminalBell::stdout(),
        store,
        game_config.audio.sound_enabled,
    );
    let session = run_game_loop(session, command_rx).await;

    drop(guard);
    log!("Leaving neo_snake, high score {}", session.engine().high_score());
    println!("High score: {}", session.engine().high_score());

    Ok(())
}

pub mod config;
pub mod game;
pub mod input;
pub mod logger;
pub mod persistence;
pub mod runtime;

pub use game::{
    CollisionKind, Difficulty, Direction, EngineSettings, GameEngine, GameOverReport, GameState,
    Position, SessionRng, TickOutcome,
};
pub use runtime::{Command, GameSession, run_game_loop};

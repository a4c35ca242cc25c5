mod difficulty;
mod direction_queue;
mod game_engine;
mod session_rng;
mod settings;
mod snake;
mod types;

pub use difficulty::{Difficulty, SpeedModel};
pub use direction_queue::DirectionQueue;
pub use game_engine::{GameEngine, Snapshot};
pub use session_rng::SessionRng;
pub use settings::EngineSettings;
pub use snake::Snake;
pub use types::{
    CollisionKind, Direction, FieldSize, GameOverReport, GameState, Position, TickOutcome,
};

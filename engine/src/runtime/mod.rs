mod collaborators;
mod game_loop;
mod scheduler;
mod session;

pub use collaborators::{AudioCue, AudioSink, Frame, GameRenderer, NullRenderer, SilentAudio};
pub use game_loop::run_game_loop;
pub use scheduler::TickScheduler;
pub use session::{Command, GameSession, SessionControl};

mod file_store;
mod high_score_store;
mod memory_store;

pub use file_store::FileHighScoreStore;
pub use high_score_store::{HighScoreError, HighScoreStore};
pub use memory_store::MemoryHighScoreStore;

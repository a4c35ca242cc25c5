use super::{HighScoreError, HighScoreStore};

#[derive(Debug, Default, Clone)]
pub struct MemoryHighScoreStore {
    score: u32,
    saves: usize,
}

impl MemoryHighScoreStore {
    pub fn new(score: u32) -> Self {
        Self { score, saves: 0 }
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load_high_score(&self) -> Result<u32, HighScoreError> {
        Ok(self.score)
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), HighScoreError> {
        self.score = score;
        self.saves += 1;
        Ok(())
    }
}

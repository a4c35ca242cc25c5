use std::fmt;

#[derive(Debug)]
pub enum HighScoreError {
    Io(std::io::Error),
    Parse(String),
}

impl fmt::Display for HighScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HighScoreError::Io(e) => write!(f, "High score IO error: {}", e),
            HighScoreError::Parse(content) => {
                write!(f, "High score is not a number: {:?}", content)
            }
        }
    }
}

impl std::error::Error for HighScoreError {}

impl From<std::io::Error> for HighScoreError {
    fn from(e: std::io::Error) -> Self {
        HighScoreError::Io(e)
    }
}

pub trait HighScoreStore: Send {
    fn load_high_score(&self) -> Result<u32, HighScoreError>;
    fn save_high_score(&mut self, score: u32) -> Result<(), HighScoreError>;
}

impl<T> HighScoreStore for Box<T>
where
    T: HighScoreStore + ?Sized,
{
    fn load_high_score(&self) -> Result<u32, HighScoreError> {
        (**self).load_high_score()
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), HighScoreError> {
        (**self).save_high_score(score)
    }
}

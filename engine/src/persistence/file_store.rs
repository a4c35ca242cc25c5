use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{HighScoreError, HighScoreStore};

/// Keeps the record as a bare decimal number in a text file.
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load_high_score(&self) -> Result<u32, HighScoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(0),
            Err(err) => return Err(err.into()),
        };

        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Ok(0);
        }
        trimmed
            .parse::<u32>()
            .map_err(|_| HighScoreError::Parse(trimmed.to_string()))
    }

    fn save_high_score(&mut self, score: u32) -> Result<(), HighScoreError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, score.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_neo_snake_high_score_{}.txt", random_number));
        path
    }

    #[test]
    fn test_missing_file_loads_zero() {
        let store = FileHighScoreStore::new(get_temp_file_path());
        assert_eq!(store.load_high_score().unwrap(), 0);
    }

    #[test]
    fn test_saved_score_is_loaded_back() {
        let path = get_temp_file_path();
        let mut store = FileHighScoreStore::new(path.clone());
        store.save_high_score(340).unwrap();

        let reopened = FileHighScoreStore::new(path);
        assert_eq!(reopened.load_high_score().unwrap(), 340);
    }

    #[test]
    fn test_garbage_content_is_a_parse_error() {
        let path = get_temp_file_path();
        std::fs::write(&path, "lots").unwrap();
        let store = FileHighScoreStore::new(path);
        assert!(matches!(store.load_high_score(), Err(HighScoreError::Parse(_))));
    }

    #[test]
    fn test_directory_path_is_an_io_error() {
        let store = FileHighScoreStore::new(std::env::temp_dir());
        assert!(matches!(store.load_high_score(), Err(HighScoreError::Io(_))));
    }
}

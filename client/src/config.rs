use std::path::{Path, PathBuf};

use snake_engine::config::{ConfigManager, FileContentConfigProvider, GameConfig, YamlConfigSerializer};

const CONFIG_FILE_NAME: &str = "neo_snake_config.yaml";
const HIGH_SCORE_FILE_NAME: &str = "neo_snake_high_score.txt";
const LOG_FILE_NAME: &str = "neo_snake.log";

pub type GameConfigManager = ConfigManager<FileContentConfigProvider, GameConfig, YamlConfigSerializer>;

fn next_to_executable(file_name: &str) -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(file_name);
    }
    PathBuf::from(file_name)
}

pub fn get_config_manager(override_path: Option<&Path>) -> GameConfigManager {
    match override_path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(next_to_executable(CONFIG_FILE_NAME)),
    }
}

pub fn high_score_path(config: &GameConfig) -> PathBuf {
    config
        .storage
        .high_score_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| next_to_executable(HIGH_SCORE_FILE_NAME))
}

pub fn log_path(config: &GameConfig) -> PathBuf {
    config
        .storage
        .log_file
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| next_to_executable(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_engine::config::StorageConfig;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_neo_snake_client_config_{}.yaml", random_number));
        path
    }

    #[test]
    fn test_override_path_is_used() {
        let path = get_temp_file_path();
        let manager = get_config_manager(Some(&path));
        let config = GameConfig {
            difficulty: snake_engine::Difficulty::Slow,
            ..GameConfig::default()
        };
        manager.set_config(&config).unwrap();
        assert!(path.exists());

        let reloaded = get_config_manager(Some(&path)).get_config().unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_storage_paths_default_next_to_executable() {
        let config = GameConfig::default();
        assert!(high_score_path(&config).ends_with(HIGH_SCORE_FILE_NAME));
        assert!(log_path(&config).ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn test_storage_paths_follow_config() {
        let config = GameConfig {
            storage: StorageConfig {
                high_score_file: Some("scores/best.txt".to_string()),
                log_file: Some("logs/snake.log".to_string()),
            },
            ..GameConfig::default()
        };
        assert_eq!(high_score_path(&config), PathBuf::from("scores/best.txt"));
        assert_eq!(log_path(&config), PathBuf::from("logs/snake.log"));
    }
}

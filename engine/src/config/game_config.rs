use serde::{Deserialize, Serialize};

use crate::game::Difficulty;
use super::Validate;

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub grid: GridConfig,
    pub scoring: ScoringConfig,
    pub speed: SpeedConfig,
    pub difficulty: Difficulty,
    pub controls: ControlsConfig,
    pub audio: AudioConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GridConfig {
    pub cell_size: u32,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl GridConfig {
    pub fn grid_width(&self) -> u32 {
        self.canvas_width / self.cell_size.max(1)
    }

    pub fn grid_height(&self) -> u32 {
        self.canvas_height / self.cell_size.max(1)
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ScoringConfig {
    pub score_increment: u32,
    pub points_per_level: u32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct SpeedConfig {
    pub speed_increment_ms: u32,
    /// Shortest allowed tick interval.
    pub max_speed_ms: u32,
    pub presets: DifficultyPresets,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct DifficultyPresets {
    pub slow_ms: u32,
    pub normal_ms: u32,
    pub fast_ms: u32,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct ControlsConfig {
    /// Minimum drag distance, in cells, before a drag counts as a swipe.
    pub swipe_threshold: u16,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct AudioConfig {
    pub sound_enabled: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct StorageConfig {
    pub high_score_file: Option<String>,
    pub log_file: Option<String>,
}

impl Validate for GridConfig {
    fn validate(&self) -> Result<(), String> {
        if self.cell_size == 0 {
            return Err("cell_size must be greater than 0".to_string());
        }
        if self.grid_width() < 5 || self.grid_height() < 5 {
            return Err("grid must be at least 5x5 cells".to_string());
        }
        if self.grid_width() > 200 || self.grid_height() > 200 {
            return Err("grid must not exceed 200x200 cells".to_string());
        }
        Ok(())
    }
}

impl Validate for ScoringConfig {
    fn validate(&self) -> Result<(), String> {
        if self.score_increment == 0 {
            return Err("score_increment must be greater than 0".to_string());
        }
        if self.points_per_level == 0 {
            return Err("points_per_level must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for SpeedConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_speed_ms < 10 {
            return Err("max_speed_ms must be at least 10".to_string());
        }
        let presets = [
            ("slow_ms", self.presets.slow_ms),
            ("normal_ms", self.presets.normal_ms),
            ("fast_ms", self.presets.fast_ms),
        ];
        for (name, value) in presets {
            if value < self.max_speed_ms {
                return Err(format!("{} must not be below max_speed_ms", name));
            }
            if value > 5000 {
                return Err(format!("{} must not exceed 5000", name));
            }
        }
        Ok(())
    }
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.high_score_file
            && path.is_empty()
        {
            return Err("high_score_file must not be empty if provided".to_string());
        }
        if let Some(path) = &self.log_file
            && path.is_empty()
        {
            return Err("log_file must not be empty if provided".to_string());
        }
        Ok(())
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        self.grid.validate()?;
        self.scoring.validate()?;
        self.speed.validate()?;
        self.storage.validate()?;
        if self.controls.swipe_threshold == 0 {
            return Err("swipe_threshold must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                cell_size: 20,
                canvas_width: 600,
                canvas_height: 400,
            },
            scoring: ScoringConfig {
                score_increment: 10,
                points_per_level: 50,
            },
            speed: SpeedConfig {
                speed_increment_ms: 10,
                max_speed_ms: 80,
                presets: DifficultyPresets {
                    slow_ms: 250,
                    normal_ms: 200,
                    fast_ms: 150,
                },
            },
            difficulty: Difficulty::Normal,
            controls: ControlsConfig { swipe_threshold: 2 },
            audio: AudioConfig { sound_enabled: true },
            storage: StorageConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        ConfigContentProvider, ConfigError, ConfigManager, ConfigSerializer,
        FileContentConfigProvider, YamlConfigSerializer,
    };

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_neo_snake_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_is_valid_and_maps_to_30x20_grid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid.grid_width(), 30);
        assert_eq!(config.grid.grid_height(), 20);
    }

    #[test]
    fn test_default_config_survives_yaml_serialization() {
        let default_config = GameConfig::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: GameConfig = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_manager_saves_and_reloads_config() {
        let config = GameConfig {
            difficulty: Difficulty::Fast,
            storage: StorageConfig {
                high_score_file: Some("scores.txt".to_string()),
                log_file: None,
            },
            ..GameConfig::default()
        };
        let manager = ConfigManager::new(
            FileContentConfigProvider::new(get_temp_file_path()),
            YamlConfigSerializer::new(),
        );

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);
        assert_eq!(manager.get_config().unwrap(), config);
    }

    #[test]
    fn test_missing_config_file_returns_default_config() {
        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::from_yaml_file("this_neo_snake_config_does_not_exist.yaml");
        assert_eq!(manager.get_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_invalid_config_cant_be_read() {
        let invalid_config_content = r#"
            grid:
              cell_size: 20
              canvas_width: 60
              canvas_height: 400
            scoring:
              score_increment: 10
              points_per_level: 50
            speed:
              speed_increment_ms: 10
              max_speed_ms: 80
              presets:
                slow_ms: 250
                normal_ms: 200
                fast_ms: 150
            difficulty: Normal
            controls:
              swipe_threshold: 2
            audio:
              sound_enabled: true
        "#;

        let content_provider = FileContentConfigProvider::new(get_temp_file_path());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        let result = manager.get_config();
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_malformed_yaml_is_a_serialization_error() {
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());
        content_provider.set_config_content("grid: [1, 2").unwrap();

        let manager: ConfigManager<_, GameConfig, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert!(matches!(manager.get_config(), Err(ConfigError::Serialization(_))));
    }

    #[test]
    fn test_preset_below_max_speed_is_rejected() {
        let mut config = GameConfig::default();
        config.speed.presets.fast_ms = 50;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_set_config_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.scoring.points_per_level = 0;
        let manager = ConfigManager::new(
            FileContentConfigProvider::new(get_temp_file_path()),
            YamlConfigSerializer::new(),
        );
        assert!(matches!(manager.set_config(&config), Err(ConfigError::Invalid(_))));
    }
}

use std::time::Duration;

use crate::config::GameConfig;
use super::difficulty::{Difficulty, SpeedModel};
use super::types::FieldSize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineSettings {
    pub field_size: FieldSize,
    pub score_increment: u32,
    pub speed: SpeedModel,
    pub difficulty: Difficulty,
}

impl From<&GameConfig> for EngineSettings {
    fn from(config: &GameConfig) -> Self {
        let presets = &config.speed.presets;
        Self {
            field_size: FieldSize {
                width: config.grid.grid_width() as i32,
                height: config.grid.grid_height() as i32,
            },
            score_increment: config.scoring.score_increment,
            speed: SpeedModel {
                slow: Duration::from_millis(presets.slow_ms as u64),
                normal: Duration::from_millis(presets.normal_ms as u64),
                fast: Duration::from_millis(presets.fast_ms as u64),
                speed_increment: Duration::from_millis(config.speed.speed_increment_ms as u64),
                max_speed: Duration::from_millis(config.speed.max_speed_ms as u64),
                points_per_level: config.scoring.points_per_level.max(1),
            },
            difficulty: config.difficulty,
        }
    }
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

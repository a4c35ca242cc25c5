use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Difficulty {
    pub fn from_name(name: &str) -> Option<Difficulty> {
        match name.to_ascii_lowercase().as_str() {
            "slow" => Some(Difficulty::Slow),
            "normal" => Some(Difficulty::Normal),
            "fast" => Some(Difficulty::Fast),
            _ => None,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Slow => "slow",
            Difficulty::Normal => "normal",
            Difficulty::Fast => "fast",
        };
        write!(f, "{}", name)
    }
}

/// Level and tick-interval progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpeedModel {
    pub slow: Duration,
    pub normal: Duration,
    pub fast: Duration,
    pub speed_increment: Duration,
    /// Floor for the tick interval.
    pub max_speed: Duration,
    pub points_per_level: u32,
}

impl SpeedModel {
    pub fn base_interval(&self, difficulty: Difficulty) -> Duration {
        match difficulty {
            Difficulty::Slow => self.slow,
            Difficulty::Normal => self.normal,
            Difficulty::Fast => self.fast,
        }
    }

    pub fn level_for_score(&self, score: u32) -> u32 {
        score / self.points_per_level.max(1) + 1
    }

    pub fn interval_for(&self, difficulty: Difficulty, level: u32) -> Duration {
        let offset = self.speed_increment.saturating_mul(level.saturating_sub(1));
        self.base_interval(difficulty)
            .saturating_sub(offset)
            .max(self.max_speed)
    }

    /// How much faster than the preset base the game currently runs.
    pub fn multiplier(&self, difficulty: Difficulty, interval: Duration) -> f64 {
        if interval.is_zero() {
            return 1.0;
        }
        self.base_interval(difficulty).as_secs_f64() / interval.as_secs_f64()
    }
}

impl Default for SpeedModel {
    fn default() -> Self {
        Self {
            slow: Duration::from_millis(250),
            normal: Duration::from_millis(200),
            fast: Duration::from_millis(150),
            speed_increment: Duration::from_millis(10),
            max_speed: Duration::from_millis(80),
            points_per_level: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_score() {
        let model = SpeedModel::default();
        assert_eq!(model.level_for_score(0), 1);
        assert_eq!(model.level_for_score(40), 1);
        assert_eq!(model.level_for_score(50), 2);
        assert_eq!(model.level_for_score(120), 3);
    }

    #[test]
    fn test_interval_decreases_with_level() {
        let model = SpeedModel::default();
        assert_eq!(model.interval_for(Difficulty::Normal, 1), Duration::from_millis(200));
        assert_eq!(model.interval_for(Difficulty::Normal, 2), Duration::from_millis(190));
        assert_eq!(model.interval_for(Difficulty::Slow, 3), Duration::from_millis(230));
    }

    #[test]
    fn test_interval_is_clamped_at_max_speed() {
        let model = SpeedModel::default();
        assert_eq!(model.interval_for(Difficulty::Fast, 8), Duration::from_millis(80));
        assert_eq!(model.interval_for(Difficulty::Fast, 500), Duration::from_millis(80));
    }

    #[test]
    fn test_multiplier() {
        let model = SpeedModel::default();
        let multiplier = model.multiplier(Difficulty::Normal, Duration::from_millis(100));
        assert!((multiplier - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::from_name("FAST"), Some(Difficulty::Fast));
        assert_eq!(Difficulty::from_name("insane"), None);
        assert_eq!(Difficulty::Slow.to_string(), "slow");
    }
}

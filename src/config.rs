//! Session configuration
//!
//! Every layout and tuning constant the simulation reads. Built once at
//! startup (defaults or a JSON file) and passed by reference; never mutated
//! during a session.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration loading/validation failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// One lane of cars or logs sharing a y-coordinate, width and speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaneConfig {
    /// Top edge of every entity in the lane
    pub y: f32,
    pub width: f32,
    /// Horizontal speed (pixels per tick, negative = leftward)
    pub speed: f32,
    /// Starting x of each entity; the entity count is the length
    pub xs: Vec<f32>,
}

impl LaneConfig {
    fn new(y: f32, width: f32, speed: f32, xs: &[f32]) -> Self {
        Self {
            y,
            width,
            speed,
            xs: xs.to_vec(),
        }
    }
}

/// Goal slot row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalConfig {
    pub y: f32,
    pub width: f32,
    pub xs: Vec<f32>,
}

/// Full session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Square playfield edge length (wrap modulus on both axes)
    pub canvas_size: f32,
    pub frog_start: Vec2,
    pub frog_width: f32,
    pub frog_height: f32,
    pub frog_lives: i32,
    /// Height of cars, logs and goal slots
    pub object_height: f32,
    /// Car lanes A, B, C
    pub car_lanes: [LaneConfig; 3],
    /// Log lanes A, B, C
    pub log_lanes: [LaneConfig; 3],
    pub goals: GoalConfig,
    pub base_score: u64,
    pub horizontal_step: f32,
    pub vertical_step: f32,
    pub tick_period_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            frog_start: Vec2::new(FROG_START_X, FROG_START_Y),
            frog_width: FROG_WIDTH,
            frog_height: FROG_HEIGHT,
            frog_lives: FROG_LIVES,
            object_height: OBJECT_HEIGHT,
            car_lanes: [
                LaneConfig::new(CAR_LANE_Y[0], CAR_WIDTH[0], CAR_SPEED[0], CAR_POS_A),
                LaneConfig::new(CAR_LANE_Y[1], CAR_WIDTH[1], CAR_SPEED[1], CAR_POS_B),
                LaneConfig::new(CAR_LANE_Y[2], CAR_WIDTH[2], CAR_SPEED[2], CAR_POS_C),
            ],
            log_lanes: [
                LaneConfig::new(LOG_LANE_Y[0], LOG_WIDTH[0], LOG_SPEED[0], LOG_POS_A),
                LaneConfig::new(LOG_LANE_Y[1], LOG_WIDTH[1], LOG_SPEED[1], LOG_POS_B),
                LaneConfig::new(LOG_LANE_Y[2], LOG_WIDTH[2], LOG_SPEED[2], LOG_POS_C),
            ],
            goals: GoalConfig {
                y: GOAL_Y,
                width: GOAL_WIDTH,
                xs: GOAL_POS.to_vec(),
            },
            base_score: BASE_SCORE,
            horizontal_step: HORIZONTAL_STEP,
            vertical_step: VERTICAL_STEP,
            tick_period_ms: TICK_PERIOD_MS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the effective configuration
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a config file from disk (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config ({} goals)", config.goals.xs.len());
        Ok(config)
    }

    /// Replace the canvas size (e.g. with the host page's) and re-check the layout
    pub fn with_canvas_size(mut self, size: f32) -> Result<Self, ConfigError> {
        self.canvas_size = size;
        self.validate()?;
        Ok(self)
    }

    /// Reject layouts the simulation cannot run
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        let size = self.canvas_size;
        if !positive(size) {
            return Err(ConfigError::Invalid(format!(
                "canvas_size must be positive, got {size}"
            )));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::Invalid("tick_period_ms must be non-zero".into()));
        }
        if self.frog_lives < 0 {
            return Err(ConfigError::Invalid(format!(
                "frog_lives must not be negative, got {}",
                self.frog_lives
            )));
        }
        if !(positive(self.frog_width) && positive(self.frog_height) && positive(self.object_height))
        {
            return Err(ConfigError::Invalid("entity sizes must be positive".into()));
        }
        if !(self.horizontal_step.is_finite() && self.vertical_step.is_finite()) {
            return Err(ConfigError::Invalid("move steps must be finite".into()));
        }
        // NaN fails the range check too
        let inside = |v: f32| (0.0..size).contains(&v);
        if !self.frog_start.is_finite() || !inside(self.frog_start.x) || !inside(self.frog_start.y) {
            return Err(ConfigError::Invalid(format!(
                "frog_start {} lies outside the canvas",
                self.frog_start
            )));
        }

        let lanes = self
            .car_lanes
            .iter()
            .map(|l| ("car", l))
            .chain(self.log_lanes.iter().map(|l| ("log", l)));
        for (i, (kind, lane)) in lanes.enumerate() {
            if !positive(lane.width) {
                return Err(ConfigError::Invalid(format!(
                    "{kind} lane {} width must be positive",
                    i % 3
                )));
            }
            if !lane.speed.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{kind} lane {} speed must be finite, got {}",
                    i % 3,
                    lane.speed
                )));
            }
            if !inside(lane.y) || lane.xs.iter().any(|&x| !inside(x)) {
                return Err(ConfigError::Invalid(format!(
                    "{kind} lane {} has positions outside the canvas",
                    i % 3
                )));
            }
        }

        if !positive(self.goals.width) {
            return Err(ConfigError::Invalid("goal width must be positive".into()));
        }
        if !inside(self.goals.y) || self.goals.xs.iter().any(|&x| !inside(x)) {
            return Err(ConfigError::Invalid(
                "goal positions lie outside the canvas".into(),
            ));
        }
        Ok(())
    }

    /// Speed of a log lane (0, 1, 2 = A, B, C)
    pub fn log_speed(&self, lane: usize) -> f32 {
        self.log_lanes[lane].speed
    }

    /// Total number of cars, logs and goal slots at session start
    pub fn object_count(&self) -> usize {
        let lanes: usize = self
            .car_lanes
            .iter()
            .chain(self.log_lanes.iter())
            .map(|l| l.xs.len())
            .sum();
        lanes + self.goals.xs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.object_count(), 2 + 1 + 3 + 1 + 3 + 2 + 5);
        assert_eq!(config.log_speed(2), -2.2);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "base_score": 250, "frog_lives": 5 }"#)
            .expect("partial config should parse");
        assert_eq!(config.base_score, 250);
        assert_eq!(config.frog_lives, 5);
        assert_eq!(config.canvas_size, CANVAS_SIZE);
        assert_eq!(config.goals.xs.len(), 5);
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let config = GameConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(GameConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_rejects_bad_json() {
        assert!(matches!(
            GameConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_layout() {
        let err = GameConfig::from_json(r#"{ "canvas_size": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let mut config = GameConfig::default();
        config.log_lanes[1].xs.push(700.0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = GameConfig::default();
        config.tick_period_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_infinite_speed() {
        // 1e39 overflows f32 to infinity while parsing
        let json = r#"{ "car_lanes": [
            { "y": 470, "width": 70, "speed": 1e39, "xs": [30, 120] },
            { "y": 405, "width": 120, "speed": -1, "xs": [400] },
            { "y": 338, "width": 50, "speed": 3, "xs": [50, 300, 380] }
        ] }"#;
        let err = GameConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let mut config = GameConfig::default();
        config.log_lanes[2].speed = f32::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_non_finite_sizes() {
        let mut config = GameConfig::default();
        config.frog_width = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.car_lanes[1].width = f32::INFINITY;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.frog_start.x = f32::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_negative_lives() {
        let err = GameConfig::from_json(r#"{ "frog_lives": -1 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(GameConfig::from_json(r#"{ "frog_lives": 0 }"#).is_ok());
    }

    #[test]
    fn test_with_canvas_size() {
        let config = GameConfig::default().with_canvas_size(800.0).unwrap();
        assert_eq!(config.canvas_size, 800.0);

        // A zero-width host canvas, or one smaller than the default layout
        assert!(GameConfig::default().with_canvas_size(0.0).is_err());
        assert!(GameConfig::default().with_canvas_size(f32::NAN).is_err());
        assert!(GameConfig::default().with_canvas_size(300.0).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

use std::fs;
use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use crate::controller::KeyBindings;
use crate::error::ConfigError;

/// Session and window settings. Every field has a default, so a config file
/// only needs the keys it wants to change.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub obstacle_count: usize,
    /// Song tempo; sets the spacing of obstacles along the corridor.
    pub bpm: f32,
    /// Beats of empty corridor before the first obstacle.
    pub offset_beats: f32,
    pub starting_lives: i32,
    /// Units per second.
    pub forward_speed: f32,
    /// Added to forward speed per boost key press.
    pub speed_boost: f32,
    pub start_position: [f32; 3],
    /// Track RNG seed; a fresh random track every run when unset.
    pub seed: Option<u64>,
    pub window_width: u32,
    pub window_height: u32,
    pub max_frame_dt: f32,
    pub key_bindings: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            obstacle_count: 1000,
            bpm: 200.0,
            offset_beats: 4.0,
            starting_lives: 100,
            forward_speed: 4.0,
            speed_boost: 1.0,
            start_position: [0.0, 0.3, 3.0],
            seed: None,
            window_width: 1280,
            window_height: 768,
            max_frame_dt: 0.1,
            key_bindings: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.obstacle_count == 0 {
            return Err(ConfigError::Invalid("obstacle_count must be at least 1".into()));
        }
        if !self.bpm.is_finite() || self.bpm <= 0.0 {
            return Err(ConfigError::Invalid(format!("bpm must be positive, got {}", self.bpm)));
        }
        if !self.offset_beats.is_finite() {
            return Err(ConfigError::Invalid("offset_beats must be finite".into()));
        }
        if self.starting_lives <= 0 {
            return Err(ConfigError::Invalid(format!(
                "starting_lives must be positive, got {}",
                self.starting_lives
            )));
        }
        if !self.forward_speed.is_finite() || self.forward_speed < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "forward_speed must be non-negative, got {}",
                self.forward_speed
            )));
        }
        if !self.max_frame_dt.is_finite() || self.max_frame_dt <= 0.0 {
            return Err(ConfigError::Invalid("max_frame_dt must be positive".into()));
        }
        if self.window_width == 0 || self.window_height == 0 {
            return Err(ConfigError::Invalid("window size must be non-zero".into()));
        }
        Ok(())
    }

    pub fn start(&self) -> Vec3 {
        Vec3::from_array(self.start_position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.start(), Vec3::new(0.0, 0.3, 3.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "bpm": 120.0, "seed": 42, "key_bindings": { "left": "j" } }"#)
            .expect("valid config");
        assert_eq!(config.bpm, 120.0);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.obstacle_count, 1000);
        assert_eq!(config.key_bindings.left, "j");
        assert_eq!(config.key_bindings.right, "d");
    }

    #[test]
    fn test_rejects_invalid_values() {
        for json in [
            r#"{ "obstacle_count": 0 }"#,
            r#"{ "bpm": 0.0 }"#,
            r#"{ "bpm": -60.0 }"#,
            r#"{ "starting_lives": 0 }"#,
            r#"{ "forward_speed": -1.0 }"#,
            r#"{ "max_frame_dt": 0.0 }"#,
        ] {
            assert!(
                matches!(GameConfig::from_json(json), Err(ConfigError::Invalid(_))),
                "accepted {json}"
            );
        }
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(GameConfig::from_json("{ bpm: "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let err = GameConfig::load("/nonexistent/lanerunner.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}

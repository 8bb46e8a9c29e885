use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{ArenaBounds, Params, Side};

/// Reasons a configuration cannot produce a playable arena
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("viewport must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },
    #[error("actor radius must be finite and positive, got {0}")]
    InvalidRadius(f32),
    #[error("move speed must be finite and positive, got {0}")]
    InvalidSpeed(f32),
    #[error("viewport {width}x{height} cannot fit an actor of radius {radius}")]
    ViewportTooSmall { width: f32, height: f32, radius: f32 },
    #[error("joystick stick size {stick} must be smaller than base size {base}")]
    InvalidJoystick { base: f32, stick: f32 },
    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub actor_radius: f32,
    pub move_speed: f32,
    pub joystick_size: f32,
    pub joystick_stick_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            viewport_width: Params::VIEWPORT_WIDTH,
            viewport_height: Params::VIEWPORT_HEIGHT,
            actor_radius: Params::BALL_RADIUS,
            move_speed: Params::MOVE_SPEED,
            joystick_size: Params::JOYSTICK_SIZE,
            joystick_stick_size: Params::JOYSTICK_STICK_SIZE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default tuning for a viewport of the given size
    pub fn with_viewport(width: f32, height: f32) -> Self {
        Self {
            viewport_width: width,
            viewport_height: height,
            ..Self::default()
        }
    }

    /// Parse a JSON document; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.viewport_width, self.viewport_height);
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidViewport { width, height });
        }
        if !(self.actor_radius.is_finite() && self.actor_radius > 0.0) {
            return Err(ConfigError::InvalidRadius(self.actor_radius));
        }
        if !(self.move_speed.is_finite() && self.move_speed > 0.0) {
            return Err(ConfigError::InvalidSpeed(self.move_speed));
        }
        let diameter = self.actor_radius * 2.0;
        if width < diameter || height < diameter {
            return Err(ConfigError::ViewportTooSmall {
                width,
                height,
                radius: self.actor_radius,
            });
        }
        let (base, stick) = (self.joystick_size, self.joystick_stick_size);
        if !(base.is_finite() && stick.is_finite() && stick > 0.0 && stick < base) {
            return Err(ConfigError::InvalidJoystick { base, stick });
        }
        Ok(())
    }

    /// Region an actor center may occupy
    pub fn arena_bounds(&self) -> ArenaBounds {
        ArenaBounds::from_viewport(self.viewport_width, self.viewport_height, self.actor_radius)
    }

    /// Starting position: left actor at a quarter width, right at three quarters
    pub fn spawn_position(&self, side: Side) -> glam::Vec2 {
        let x = match side {
            Side::Left => self.viewport_width / 4.0,
            Side::Right => 3.0 * self.viewport_width / 4.0,
        };
        glam::Vec2::new(x, self.viewport_height / 2.0)
    }

    /// Center of a joystick base, anchored to the bottom corners
    pub fn joystick_center(&self, side: Side) -> glam::Vec2 {
        let half = self.joystick_size / 2.0;
        let y = self.viewport_height - Params::JOYSTICK_BOTTOM_OFFSET - half;
        let x = match side {
            Side::Left => Params::JOYSTICK_SIDE_OFFSET + half,
            Side::Right => self.viewport_width - Params::JOYSTICK_SIDE_OFFSET - half,
        };
        glam::Vec2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_valid() {
        let config = Config::new();
        assert_eq!(config.actor_radius, 25.0);
        assert_eq!(config.move_speed, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_spawn_positions() {
        let config = Config::with_viewport(400.0, 800.0);
        assert_eq!(config.spawn_position(Side::Left), glam::Vec2::new(100.0, 400.0));
        assert_eq!(config.spawn_position(Side::Right), glam::Vec2::new(300.0, 400.0));
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = Config::from_json(r#"{ "viewport_width": 400, "viewport_height": 800 }"#)
            .expect("partial config should parse");
        assert_eq!(config.viewport_width, 400.0);
        assert_eq!(config.viewport_height, 800.0);
        assert_eq!(config.move_speed, Params::MOVE_SPEED);
    }

    #[test]
    fn test_config_from_json_malformed() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let mut config = Config::new();
        config.viewport_width = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidViewport { .. })
        ));

        let mut config = Config::new();
        config.move_speed = 0.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidSpeed(0.0)));

        let mut config = Config::new();
        config.actor_radius = -1.0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidRadius(-1.0)));

        let config = Config::with_viewport(40.0, 600.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ViewportTooSmall { .. })
        ));

        let mut config = Config::new();
        config.joystick_stick_size = 200.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidJoystick { .. })
        ));
    }

    #[test]
    fn test_config_joystick_centers() {
        let config = Config::with_viewport(400.0, 800.0);
        assert_eq!(config.joystick_center(Side::Left), glam::Vec2::new(100.0, 640.0));
        assert_eq!(config.joystick_center(Side::Right), glam::Vec2::new(300.0, 640.0));
    }
}

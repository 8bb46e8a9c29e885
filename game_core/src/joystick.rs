//! Joystick drag normalization
//!
//! Converts a pointer offset from the joystick base center into the
//! normalized vector consumed by the simulation.

use glam::Vec2;

use crate::Config;

/// Geometry of one on-screen joystick
#[derive(Debug, Clone, Copy)]
pub struct Joystick {
    pub size: f32,
    pub stick_size: f32,
}

impl Joystick {
    pub fn new(size: f32, stick_size: f32) -> Self {
        Self { size, stick_size }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.joystick_size, config.joystick_stick_size)
    }

    /// Radius of the circle the drag is limited to
    pub fn max_travel(&self) -> f32 {
        self.size / 2.0
    }

    /// Whether a press at this offset from the base center grabs the stick
    pub fn contains(&self, offset: Vec2) -> bool {
        offset.is_finite() && offset.length() <= self.max_travel()
    }

    /// Normalized vector for a drag offset in pixels
    pub fn normalize(&self, offset: Vec2) -> Vec2 {
        let travel = self.max_travel();
        if !offset.is_finite() || travel <= 0.0 {
            return Vec2::ZERO;
        }
        let limited = offset.clamp_length_max(travel);
        (limited / travel).clamp(Vec2::NEG_ONE, Vec2::ONE)
    }

    /// Vector emitted when the drag ends
    pub fn release(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Where to draw the stick knob, relative to the base center
    pub fn knob_offset(&self, vector: Vec2) -> Vec2 {
        let reach = (self.size - self.stick_size) / 2.0;
        vector.clamp_length_max(1.0) * reach
    }
}

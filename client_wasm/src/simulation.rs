use game_core::{Arena, Color, ConfigError, Config, Joystick, Params, Side};
use glam::Vec2;

use crate::input::{key_binding, KeyState};

/// A filled circle in viewport pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

pub struct LocalGame {
    pub arena: Arena,
    joystick: Joystick,
    // Last vector per side, mirrored for drawing the stick knob
    sticks: [Vec2; 2],
    keys: [KeyState; 2],
}

impl LocalGame {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        let joystick = Joystick::from_config(&config);
        Ok(Self {
            arena: Arena::new(config)?,
            joystick,
            sticks: [Vec2::ZERO; 2],
            keys: [KeyState::default(); 2],
        })
    }

    /// Normalized joystick callback
    pub fn joystick_move(&mut self, side: Side, x: f32, y: f32) {
        self.sticks[side.index()] = Vec2::new(x, y);
        self.arena.on_move(side, x, y);
    }

    /// Raw drag offset in pixels from the joystick base center
    pub fn joystick_drag(&mut self, side: Side, dx: f32, dy: f32) {
        let v = self.joystick.normalize(Vec2::new(dx, dy));
        self.joystick_move(side, v.x, v.y);
    }

    /// Joystick whose base circle contains a point in viewport pixels
    pub fn joystick_at(&self, point: Vec2) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.joystick.contains(point - self.joystick_center(side)))
    }

    pub fn joystick_center(&self, side: Side) -> Vec2 {
        self.arena.config.joystick_center(side)
    }

    /// Radius of the base circle a drag is limited to
    pub fn joystick_radius(&self) -> f32 {
        self.joystick.max_travel()
    }

    /// Pointer position in viewport pixels while a stick is held
    pub fn joystick_pointer(&mut self, side: Side, point: Vec2) {
        let offset = point - self.joystick_center(side);
        self.joystick_drag(side, offset.x, offset.y);
    }

    pub fn joystick_release(&mut self, side: Side) {
        let v = self.joystick.release();
        self.joystick_move(side, v.x, v.y);
    }

    /// Returns false when the key is not bound
    pub fn key_event(&mut self, key: &str, pressed: bool) -> bool {
        let Some((side, dir)) = key_binding(key) else {
            return false;
        };
        let keys = &mut self.keys[side.index()];
        keys.set(dir, pressed);
        if keys.any() {
            let v = keys.vector();
            self.joystick_move(side, v.x, v.y);
        } else {
            self.joystick_release(side);
        }
        true
    }

    pub fn step(&mut self) {
        self.arena.tick();
    }

    /// Everything to draw this frame, back to front
    pub fn scene(&self) -> Vec<Circle> {
        let snapshot = self.arena.snapshot();
        let mut circles: Vec<Circle> = snapshot
            .actors
            .iter()
            .map(|view| Circle {
                center: Vec2::new(view.x, view.y),
                radius: view.radius,
                color: view.color,
            })
            .collect();

        let config = &self.arena.config;
        for side in Side::ALL {
            circles.push(Circle {
                center: config.joystick_center(side),
                radius: self.joystick_radius(),
                color: Params::JOYSTICK_BASE_RGBA.into(),
            });
        }
        for side in Side::ALL {
            let knob = self.joystick.knob_offset(self.sticks[side.index()]);
            circles.push(Circle {
                center: config.joystick_center(side) + knob,
                radius: self.joystick.stick_size / 2.0,
                color: Params::JOYSTICK_STICK_RGBA.into(),
            });
        }
        circles
    }
}

//! Keyboard fallback for the on-screen joysticks
//!
//! WASD drives the left actor, the arrow keys drive the right one.

use game_core::Side;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Map a `KeyboardEvent.key` value to the joystick it steers
pub fn key_binding(key: &str) -> Option<(Side, Direction)> {
    match key {
        "w" | "W" => Some((Side::Left, Direction::Up)),
        "s" | "S" => Some((Side::Left, Direction::Down)),
        "a" | "A" => Some((Side::Left, Direction::Left)),
        "d" | "D" => Some((Side::Left, Direction::Right)),
        "ArrowUp" => Some((Side::Right, Direction::Up)),
        "ArrowDown" => Some((Side::Right, Direction::Down)),
        "ArrowLeft" => Some((Side::Right, Direction::Left)),
        "ArrowRight" => Some((Side::Right, Direction::Right)),
        _ => None,
    }
}

/// Held direction keys for one side
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyState {
    up: bool,
    down: bool,
    left: bool,
    right: bool,
}

impl KeyState {
    pub fn set(&mut self, dir: Direction, pressed: bool) {
        match dir {
            Direction::Up => self.up = pressed,
            Direction::Down => self.down = pressed,
            Direction::Left => self.left = pressed,
            Direction::Right => self.right = pressed,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Joystick-equivalent vector (y grows downwards); opposite keys cancel
    pub fn vector(&self) -> Vec2 {
        let axis = |neg: bool, pos: bool| (pos as i8 - neg as i8) as f32;
        Vec2::new(axis(self.left, self.right), axis(self.up, self.down))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_binding() {
        assert_eq!(key_binding("W"), Some((Side::Left, Direction::Up)));
        assert_eq!(key_binding("ArrowRight"), Some((Side::Right, Direction::Right)));
        assert_eq!(key_binding("q"), None);
    }

    #[test]
    fn test_key_state_vector() {
        let mut keys = KeyState::default();
        assert_eq!(keys.vector(), Vec2::ZERO);
        keys.set(Direction::Up, true);
        keys.set(Direction::Right, true);
        assert_eq!(keys.vector(), Vec2::new(1.0, -1.0));
        keys.set(Direction::Down, true);
        assert_eq!(keys.vector(), Vec2::new(1.0, 0.0));
        keys.set(Direction::Right, false);
        keys.set(Direction::Up, false);
        keys.set(Direction::Down, false);
        assert!(!keys.any());
    }
}

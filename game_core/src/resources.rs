use glam::Vec2;

use crate::Side;

/// Latest joystick vector per side (0 = left, 1 = right)
///
/// Written by the joystick callbacks at any cadence, read once per tick.
/// A newer write simply replaces the older one.
#[derive(Debug, Clone, Copy, Default)]
pub struct JoystickInputs {
    latest: [Vec2; 2],
}

impl JoystickInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, side: Side, x: f32, y: f32) {
        self.latest[side.index()] = Vec2::new(x, y);
    }

    pub fn release(&mut self, side: Side) {
        self.latest[side.index()] = Vec2::ZERO;
    }

    pub fn get(&self, side: Side) -> Vec2 {
        self.latest[side.index()]
    }
}

/// Frame counter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Frame(pub u64);

impl Frame {
    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub moved: [bool; 2],
    pub hit_wall: [bool; 2],
    pub input_sanitized: [bool; 2],
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn moved(&self, side: Side) -> bool {
        self.moved[side.index()]
    }

    pub fn hit_wall(&self, side: Side) -> bool {
        self.hit_wall[side.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joystick_inputs_last_write_wins() {
        let mut inputs = JoystickInputs::new();
        assert_eq!(inputs.get(Side::Left), Vec2::ZERO);
        inputs.set(Side::Left, 0.5, 0.5);
        inputs.set(Side::Left, -1.0, 0.25);
        assert_eq!(inputs.get(Side::Left), Vec2::new(-1.0, 0.25));
        assert_eq!(inputs.get(Side::Right), Vec2::ZERO);
    }

    #[test]
    fn test_joystick_inputs_release() {
        let mut inputs = JoystickInputs::new();
        inputs.set(Side::Right, 1.0, 1.0);
        inputs.release(Side::Right);
        assert_eq!(inputs.get(Side::Right), Vec2::ZERO);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.moved[0] = true;
        events.hit_wall[1] = true;
        events.input_sanitized[0] = true;

        events.clear();

        assert!(!events.moved(Side::Left));
        assert!(!events.hit_wall(Side::Right));
        assert!(!events.input_sanitized[0]);
    }

    #[test]
    fn test_frame_advance() {
        let mut frame = Frame::default();
        frame.advance();
        frame.advance();
        assert_eq!(frame, Frame(2));
    }
}

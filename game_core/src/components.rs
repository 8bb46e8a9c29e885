use glam::Vec2;
use serde::Serialize;

/// Which joystick (and which half of the screen) an actor belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Left, Side::Right];

    /// Index into per-side arrays (0 = left, 1 = right)
    pub fn index(self) -> usize {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }
}

/// Linear RGBA color, components in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a 0xRRGGBB value
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Self::rgba(channel(16), channel(8), channel(0), 1.0)
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[f32; 4]> for Color {
    fn from(c: [f32; 4]) -> Self {
        Self::rgba(c[0], c[1], c[2], c[3])
    }
}

/// Actor component - one joystick-driven ball
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    pub side: Side,
    pub color: Color,
}

impl Actor {
    pub fn new(side: Side, color: Color) -> Self {
        Self { side, color }
    }
}

/// Center of the actor in viewport coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position(pub Vec2);

/// Latest joystick vector applied to the actor, each axis in [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Velocity(pub Vec2);

impl Velocity {
    pub fn is_rest(&self) -> bool {
        self.0 == Vec2::ZERO
    }
}

/// Fixed physical properties of an actor
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub radius: f32,
    pub speed: f32,
}

impl Body {
    pub fn new(radius: f32, speed: f32) -> Self {
        Self { radius, speed }
    }
}

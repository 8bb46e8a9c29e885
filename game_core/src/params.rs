/// Game tuning parameters for the joystick arena
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Viewport (used when the host does not report its size)
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;

    // Actor
    pub const BALL_SIZE: f32 = 50.0;
    pub const BALL_RADIUS: f32 = Self::BALL_SIZE / 2.0;
    pub const MOVE_SPEED: f32 = 5.0; // units per tick at full deflection

    // Colors (RGB hex)
    pub const LEFT_COLOR: u32 = 0xFF5555; // red
    pub const RIGHT_COLOR: u32 = 0x5555FF; // blue
    pub const BACKGROUND_COLOR: u32 = 0xE8F5E9;

    // Joystick
    pub const JOYSTICK_SIZE: f32 = 160.0;
    pub const JOYSTICK_STICK_SIZE: f32 = 60.0;
    pub const JOYSTICK_BASE_RGBA: [f32; 4] = [100.0 / 255.0, 100.0 / 255.0, 100.0 / 255.0, 0.3];
    pub const JOYSTICK_STICK_RGBA: [f32; 4] = [50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 0.7];

    // Joystick layout (distance of the base's outer edge from the viewport edges)
    pub const JOYSTICK_BOTTOM_OFFSET: f32 = 80.0;
    pub const JOYSTICK_SIDE_OFFSET: f32 = 20.0;
}

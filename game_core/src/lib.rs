pub mod arena;
pub mod components;
pub mod config;
pub mod joystick;
pub mod params;
pub mod resources;
pub mod snapshot;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use joystick::*;
pub use params::*;
pub use resources::*;
pub use snapshot::*;

use glam::Vec2;
use hecs::World;
use systems::*;
use tracing::debug;

/// Run one frame of the arena simulation
pub fn tick(
    world: &mut World,
    bounds: &ArenaBounds,
    inputs: &JoystickInputs,
    events: &mut Events,
    frame: &mut Frame,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Latest joystick vectors become velocities
    ingest_joysticks(world, inputs, events);

    // 2. Integrate and clamp
    move_actors(world, bounds, events);

    frame.advance();
}

/// Helper to create an actor entity
pub fn create_actor(world: &mut World, side: Side, pos: Vec2, config: &Config) -> hecs::Entity {
    let color = match side {
        Side::Left => Color::from_hex(Params::LEFT_COLOR),
        Side::Right => Color::from_hex(Params::RIGHT_COLOR),
    };
    debug!(?side, x = pos.x, y = pos.y, "spawning actor");
    world.spawn((
        Actor::new(side, color),
        Position(pos),
        Velocity::default(),
        Body::new(config.actor_radius, config.move_speed),
    ))
}

/// Spawn both actors at their starting positions
pub fn spawn_actors(world: &mut World, config: &Config) -> [hecs::Entity; 2] {
    Side::ALL.map(|side| create_actor(world, side, config.spawn_position(side), config))
}

/// One arena session: both actors, their joystick cells, and the bounds
pub struct Arena {
    pub world: World,
    pub config: Config,
    pub bounds: ArenaBounds,
    pub inputs: JoystickInputs,
    pub events: Events,
    pub frame: Frame,
    actors: [hecs::Entity; 2],
}

impl Arena {
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut world = World::new();
        let actors = spawn_actors(&mut world, &config);
        Ok(Self {
            world,
            bounds: config.arena_bounds(),
            config,
            inputs: JoystickInputs::new(),
            events: Events::new(),
            frame: Frame::default(),
            actors,
        })
    }

    /// Joystick callback: record the latest vector for `side`
    pub fn on_move(&mut self, side: Side, x: f32, y: f32) {
        self.inputs.set(side, x, y);
    }

    /// Joystick released
    pub fn on_release(&mut self, side: Side) {
        self.inputs.release(side);
    }

    pub fn tick(&mut self) {
        tick(
            &mut self.world,
            &self.bounds,
            &self.inputs,
            &mut self.events,
            &mut self.frame,
        );
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.world, self.frame.0)
    }

    pub fn position(&self, side: Side) -> Option<Vec2> {
        self.world
            .get::<&Position>(self.actors[side.index()])
            .ok()
            .map(|pos| pos.0)
    }

    /// Place an actor directly; the point is clamped into the arena
    pub fn set_position(&mut self, side: Side, pos: Vec2) {
        if let Ok(mut current) = self.world.get::<&mut Position>(self.actors[side.index()]) {
            current.0 = self.bounds.clamp(pos);
        }
    }

    pub fn joystick(&self) -> Joystick {
        Joystick::from_config(&self.config)
    }
}

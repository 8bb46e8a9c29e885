use glam::Vec2;
use hecs::World;
use tracing::warn;

use crate::components::*;
use crate::resources::*;

/// Force a joystick vector into the [-1, 1] square
///
/// Non-finite components read as 0. Returns the vector and whether it changed.
pub fn sanitize_vector(raw: Vec2) -> (Vec2, bool) {
    let axis = |v: f32| if v.is_finite() { v.clamp(-1.0, 1.0) } else { 0.0 };
    let clean = Vec2::new(axis(raw.x), axis(raw.y));
    // NaN != NaN, so compare bit patterns
    let changed = clean.x.to_bits() != raw.x.to_bits() || clean.y.to_bits() != raw.y.to_bits();
    (clean, changed)
}

/// Copy the latest joystick vectors onto the actors they drive
pub fn ingest_joysticks(world: &mut World, inputs: &JoystickInputs, events: &mut Events) {
    for (_entity, (actor, velocity)) in world.query_mut::<(&Actor, &mut Velocity)>() {
        let raw = inputs.get(actor.side);
        let (clean, changed) = sanitize_vector(raw);
        if changed {
            warn!(side = ?actor.side, x = raw.x, y = raw.y, "joystick vector out of range, sanitized");
            events.input_sanitized[actor.side.index()] = true;
        }
        velocity.0 = clean;
    }
}

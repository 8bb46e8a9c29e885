use crate::{Actor, ArenaBounds, Body, Events, Position, Velocity};
use hecs::World;

/// Advance every actor by its velocity and clamp it to the arena
///
/// One tick moves `speed` units per unit of deflection, independent of wall-clock time.
pub fn move_actors(world: &mut World, bounds: &ArenaBounds, events: &mut Events) {
    for (_entity, (actor, pos, vel, body)) in
        world.query_mut::<(&Actor, &mut Position, &Velocity, &Body)>()
    {
        if vel.is_rest() {
            continue;
        }

        let candidate = pos.0 + vel.0 * body.speed;
        let clamped = bounds.clamp(candidate);

        let side = actor.side.index();
        events.moved[side] = clamped != pos.0;
        events.hit_wall[side] = clamped != candidate;
        pos.0 = clamped;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Side};
    use glam::Vec2;

    fn spawn(world: &mut World, side: Side, pos: Vec2, vel: Vec2) -> hecs::Entity {
        world.spawn((
            Actor::new(side, Color::from_hex(0xFFFFFF)),
            Position(pos),
            Velocity(vel),
            Body::new(25.0, 5.0),
        ))
    }

    #[test]
    fn test_move_linear_step() {
        let mut world = World::new();
        let bounds = ArenaBounds::from_viewport(400.0, 800.0, 25.0);
        let mut events = Events::new();
        let e = spawn(&mut world, Side::Left, Vec2::new(100.0, 400.0), Vec2::new(1.0, 0.0));

        move_actors(&mut world, &bounds, &mut events);

        assert_eq!(world.get::<&Position>(e).unwrap().0, Vec2::new(105.0, 400.0));
        assert!(events.moved(Side::Left));
        assert!(!events.hit_wall(Side::Left));
    }

    #[test]
    fn test_move_clamps_at_wall() {
        let mut world = World::new();
        let bounds = ArenaBounds::from_viewport(400.0, 800.0, 25.0);
        let mut events = Events::new();
        let e = spawn(&mut world, Side::Right, Vec2::new(374.0, 400.0), Vec2::new(1.0, 0.0));

        move_actors(&mut world, &bounds, &mut events);

        assert_eq!(world.get::<&Position>(e).unwrap().0.x, 375.0);
        assert!(events.hit_wall(Side::Right));
    }

    #[test]
    fn test_move_rest_skips() {
        let mut world = World::new();
        let bounds = ArenaBounds::from_viewport(400.0, 800.0, 25.0);
        let mut events = Events::new();
        let e = spawn(&mut world, Side::Left, Vec2::new(120.5, 333.25), Vec2::ZERO);

        for _ in 0..10 {
            move_actors(&mut world, &bounds, &mut events);
        }

        assert_eq!(world.get::<&Position>(e).unwrap().0, Vec2::new(120.5, 333.25));
        assert!(!events.moved(Side::Left));
    }
}

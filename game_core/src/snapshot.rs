//! Render boundary
//!
//! Immutable per-frame view of the actors; the presentation layer reads the
//! latest one on each redraw and never touches the world directly.

use hecs::World;
use serde::Serialize;

use crate::{Actor, Body, Color, Position, Side};

/// What the renderer needs to draw one actor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActorView {
    pub side: Side,
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Color,
}

/// Positions published by one tick
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub frame: u64,
    pub actors: Vec<ActorView>,
}

impl RenderSnapshot {
    /// Capture every actor, ordered left then right
    pub fn capture(world: &World, frame: u64) -> Self {
        let mut actors: Vec<ActorView> = world
            .query::<(&Actor, &Position, &Body)>()
            .iter()
            .map(|(_e, (actor, pos, body))| ActorView {
                side: actor.side,
                x: pos.0.x,
                y: pos.0.y,
                radius: body.radius,
                color: actor.color,
            })
            .collect();
        actors.sort_by_key(|view| view.side.index());
        Self { frame, actors }
    }

    pub fn actor(&self, side: Side) -> Option<&ActorView> {
        self.actors.iter().find(|view| view.side == side)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Velocity;
    use glam::Vec2;

    #[test]
    fn test_snapshot_orders_by_side() {
        let mut world = World::new();
        world.spawn((
            Actor::new(Side::Right, Color::from_hex(0x5555FF)),
            Position(Vec2::new(300.0, 400.0)),
            Velocity::default(),
            Body::new(25.0, 5.0),
        ));
        world.spawn((
            Actor::new(Side::Left, Color::from_hex(0xFF5555)),
            Position(Vec2::new(100.0, 400.0)),
            Velocity::default(),
            Body::new(25.0, 5.0),
        ));

        let snapshot = RenderSnapshot::capture(&world, 7);

        assert_eq!(snapshot.frame, 7);
        assert_eq!(snapshot.actors.len(), 2);
        assert_eq!(snapshot.actors[0].side, Side::Left);
        assert_eq!(snapshot.actor(Side::Right).map(|a| a.x), Some(300.0));
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = RenderSnapshot {
            frame: 1,
            actors: vec![ActorView {
                side: Side::Left,
                x: 100.0,
                y: 400.0,
                radius: 25.0,
                color: Color::rgba(1.0, 0.0, 0.0, 1.0),
            }],
        };
        let json = snapshot.to_json().expect("snapshot should serialize");
        assert!(json.contains(r#""side":"left""#));
        assert!(json.contains(r#""frame":1"#));
    }
}

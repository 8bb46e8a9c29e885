use glam::Vec2;

/// Inclusive rectangle an actor center may occupy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl ArenaBounds {
    /// Inset the viewport by the actor radius on every side
    pub fn from_viewport(width: f32, height: f32, radius: f32) -> Self {
        Self {
            min: Vec2::splat(radius),
            max: Vec2::new(width - radius, height - radius),
        }
    }

    /// Clamp each axis independently
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.max(self.min.x).min(self.max.x),
            point.y.max(self.min.y).min(self.max.y),
        )
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// True if the point lies on any edge of the bounds
    pub fn touches_edge(&self, point: Vec2) -> bool {
        point.x == self.min.x
            || point.x == self.max.x
            || point.y == self.min.y
            || point.y == self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_from_viewport() {
        let bounds = ArenaBounds::from_viewport(400.0, 800.0, 25.0);
        assert_eq!(bounds.min, Vec2::new(25.0, 25.0));
        assert_eq!(bounds.max, Vec2::new(375.0, 775.0));
    }

    #[test]
    fn test_bounds_clamp_per_axis() {
        let bounds = ArenaBounds::from_viewport(400.0, 800.0, 25.0);
        assert_eq!(bounds.clamp(Vec2::new(-10.0, 900.0)), Vec2::new(25.0, 775.0));
        assert_eq!(bounds.clamp(Vec2::new(500.0, 100.0)), Vec2::new(375.0, 100.0));
        let inside = Vec2::new(200.0, 400.0);
        assert_eq!(bounds.clamp(inside), inside);
    }

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = ArenaBounds::from_viewport(400.0, 800.0, 25.0);
        assert!(bounds.contains(Vec2::new(25.0, 775.0)));
        assert!(!bounds.contains(Vec2::new(24.9, 400.0)));
        assert!(bounds.touches_edge(Vec2::new(375.0, 400.0)));
        assert!(!bounds.touches_edge(Vec2::new(200.0, 400.0)));
    }
}

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// World-space placement of a bone's start point and heading.
///
/// `rotation` is the absolute rotation in degrees, counter-clockwise from +X.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec2::ZERO,
        rotation: 0.0,
    };

    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    pub fn from_position(position: Vec2) -> Self {
        Self {
            position,
            ..Self::IDENTITY
        }
    }

    /// Unit vector along the heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.rotation.to_radians())
    }

    /// Point `length` units along the heading from `position`.
    pub fn point_along(&self, length: f32) -> Vec2 {
        self.position + self.direction() * length
    }

    /// Child transform starting at `position` with `local_rotation` added to this heading.
    pub fn child(&self, position: Vec2, local_rotation: f32) -> Self {
        Self {
            position,
            rotation: self.rotation + local_rotation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_along_follows_heading() {
        let t = Transform::new(Vec2::new(1.0, 1.0), 90.0);
        let p = t.point_along(2.0);
        assert!((p.x - 1.0).abs() < 1e-5);
        assert!((p.y - 3.0).abs() < 1e-5);
    }

    #[test]
    fn child_accumulates_rotation() {
        let parent = Transform::new(Vec2::ZERO, 30.0);
        let child = parent.child(Vec2::X, 45.0);
        assert_eq!(child.rotation, 75.0);
        assert_eq!(child.position, Vec2::X);
    }
}

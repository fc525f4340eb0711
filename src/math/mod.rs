//! Math utilities module
//!
//! Provides convenient re-exports from glam plus the 2D transform and angle
//! helpers shared by forward and inverse kinematics. All angles are degrees.

mod angle;
mod transform;

pub use angle::{normalize_degrees, signed_angle_degrees};
pub use transform::Transform;

// Re-export commonly used glam types
pub use glam::Vec2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::math::Transform;
use crate::rig::Bone;

/// A bone together with its evaluated world placement.
///
/// `bone.rotation` holds the constrained local rotation actually used, not the
/// raw authored value. Produced fresh by every evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedBone {
    #[serde(flatten)]
    pub bone: Bone,
    pub world_start: Vec2,
    pub world_end: Vec2,
    /// Absolute rotation in degrees.
    pub world_rotation: f32,
}

impl DerivedBone {
    pub fn id(&self) -> &str {
        &self.bone.id
    }

    /// World transform at the bone's start, the frame its children hang from.
    pub fn world_transform(&self) -> Transform {
        Transform::new(self.world_start, self.world_rotation)
    }

    /// Transform a child of this bone starts from.
    pub fn tip_transform(&self) -> Transform {
        Transform::new(self.world_end, self.world_rotation)
    }
}

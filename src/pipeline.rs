//! Full per-frame evaluation: keyframes, then drivers, then forward kinematics.

use crate::animation::{AnimationClip, AnimationSampler};
use crate::drivers::DriverEvaluator;
use crate::kinematics::{DerivedBone, ForwardKinematics};
use crate::rig::Bone;

/// One evaluated frame: the local bone state and its world-space projection.
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    pub bones: Vec<Bone>,
    pub derived: Vec<DerivedBone>,
}

pub struct PosePipeline;

impl PosePipeline {
    /// Rest pose with drivers applied.
    pub fn pose(bones: &[Bone]) -> Pose {
        Self::finish(DriverEvaluator::evaluate(bones))
    }

    /// Pose of `clip` at `frame`: sampled, driven, then placed in world space.
    pub fn pose_at(bones: &[Bone], clip: &AnimationClip, frame: f32) -> Pose {
        let sampled = AnimationSampler::evaluate(bones, clip, frame);
        Self::finish(DriverEvaluator::evaluate(&sampled))
    }

    fn finish(bones: Vec<Bone>) -> Pose {
        let derived = ForwardKinematics::evaluate(&bones);
        Pose { bones, derived }
    }
}

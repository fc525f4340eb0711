use super::clip::AnimationClip;
use crate::kinematics::ForwardKinematics;
use crate::rig::{Bone, Property};

pub struct AnimationSampler;

impl AnimationSampler {
    /// Pose of `bones` at `frame` of `clip`, with rotation limits already applied.
    pub fn evaluate(bones: &[Bone], clip: &AnimationClip, frame: f32) -> Vec<Bone> {
        let sampled = Self::sample_tracks(bones, clip, frame);
        Self::reconcile(&sampled)
    }

    /// Overrides each bone property that has a keyed track; everything else
    /// keeps its rest value.
    pub fn sample_tracks(bones: &[Bone], clip: &AnimationClip, frame: f32) -> Vec<Bone> {
        bones
            .iter()
            .map(|bone| {
                let mut sampled = bone.clone();
                for property in Property::ALL {
                    if let Some(value) = clip
                        .track(&bone.id, property)
                        .and_then(|track| track.evaluate(frame))
                    {
                        sampled.set(property, value);
                    }
                }
                sampled
            })
            .collect()
    }

    /// Runs forward kinematics over `sampled` and copies the constrained local
    /// values back. Bones forward kinematics cannot reach keep their sampled values.
    pub fn reconcile(sampled: &[Bone]) -> Vec<Bone> {
        let derived = ForwardKinematics::evaluate_indexed(sampled);

        sampled
            .iter()
            .zip(&derived)
            .map(|(bone, slot)| {
                let mut out = bone.clone();
                if let Some(d) = slot {
                    for property in Property::ALL {
                        out.set(property, d.bone.get(property));
                    }
                }
                out
            })
            .collect()
    }
}

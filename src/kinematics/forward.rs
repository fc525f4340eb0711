use glam::Vec2;

use super::derived::DerivedBone;
use crate::math::Transform;
use crate::rig::{Bone, Rig};

pub struct ForwardKinematics;

impl ForwardKinematics {
    /// World-space pose of every bone reachable from a root, in pre-order.
    ///
    /// Bones with a dangling parent (or caught in a parent cycle) are dropped.
    pub fn evaluate(bones: &[Bone]) -> Vec<DerivedBone> {
        Self::evaluate_rig(&Rig::new(bones))
    }

    pub fn evaluate_rig(rig: &Rig<'_>) -> Vec<DerivedBone> {
        let (order, mut slots) = Self::walk(rig);
        let derived: Vec<DerivedBone> = order.into_iter().filter_map(|i| slots[i].take()).collect();

        if derived.len() < rig.len() {
            log::debug!(
                "forward kinematics dropped {} unreachable bone(s)",
                rig.len() - derived.len()
            );
        }
        derived
    }

    /// Same pose, laid out by input position: slot `i` belongs to `bones[i]`
    /// and is `None` for unreachable bones.
    pub fn evaluate_indexed(bones: &[Bone]) -> Vec<Option<DerivedBone>> {
        Self::walk(&Rig::new(bones)).1
    }

    fn walk(rig: &Rig<'_>) -> (Vec<usize>, Vec<Option<DerivedBone>>) {
        let bones = rig.bones();
        let visits = rig.pre_order();
        let mut slots: Vec<Option<DerivedBone>> = vec![None; bones.len()];
        let mut order = Vec::with_capacity(visits.len());

        for (i, parent) in visits {
            let parent_tip = parent.and_then(|p| slots[p].as_ref().map(DerivedBone::tip_transform));
            slots[i] = Some(Self::derive(&bones[i], parent_tip));
            order.push(i);
        }
        (order, slots)
    }

    /// Places one bone relative to its parent's tip (or at its own x/y for roots).
    pub fn derive(bone: &Bone, parent_tip: Option<Transform>) -> DerivedBone {
        let local_rotation = bone.effective_rotation();
        let base =
            parent_tip.unwrap_or_else(|| Transform::from_position(Vec2::new(bone.x, bone.y)));
        let world = base.child(base.position, local_rotation);
        let world_end = world.point_along(bone.length);

        let mut projected = bone.clone();
        projected.rotation = local_rotation;

        DerivedBone {
            bone: projected,
            world_start: world.position,
            world_end,
            world_rotation: world.rotation,
        }
    }
}

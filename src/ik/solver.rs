use glam::Vec2;

use super::chain::{IkChain, IkConfig};
use crate::kinematics::ForwardKinematics;
use crate::math::signed_angle_degrees;
use crate::rig::{Bone, Rig};

#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    pub bones: Vec<Bone>,
    /// Ids of the bones the solver was allowed to rotate, effector first.
    pub chain: Vec<String>,
    pub iterations: u32,
    /// Effector tip to target after the last iteration; infinite if the effector
    /// was unknown or not placed by forward kinematics.
    pub final_distance: f32,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CcdSolver {
    config: IkConfig,
}

impl CcdSolver {
    pub fn new(config: IkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IkConfig {
        &self.config
    }

    /// Rotates the effector's chain so its tip approaches `target`.
    ///
    /// Runs the full iteration budget with no early exit. Every joint step
    /// re-evaluates forward kinematics on the working pose. Locked bones are
    /// skipped and rotation limits clamp each step as it is written.
    pub fn solve(&self, bones: &[Bone], effector_id: &str, target: Vec2) -> SolveResult {
        let mut working = bones.to_vec();

        let Some(chain) = IkChain::build(&Rig::new(bones), effector_id, self.config.max_chain_len)
        else {
            log::warn!("ik: unknown effector '{effector_id}'");
            return SolveResult {
                bones: working,
                chain: Vec::new(),
                iterations: 0,
                final_distance: f32::INFINITY,
            };
        };
        log::debug!(
            "ik: solving '{effector_id}' over {} bone(s) toward ({}, {})",
            chain.len(),
            target.x,
            target.y
        );

        let effector = chain.effector();
        for iteration in 0..self.config.iterations {
            for &joint in chain.bones() {
                let pose = ForwardKinematics::evaluate_indexed(&working);
                let (Some(tip), Some(pivot)) = (&pose[effector], &pose[joint]) else {
                    continue;
                };
                let delta = signed_angle_degrees(
                    tip.world_end - pivot.world_start,
                    target - pivot.world_start,
                );

                let bone = &mut working[joint];
                if bone.locked {
                    continue;
                }
                let rotated = bone.rotation + delta;
                bone.rotation = match bone.rotation_limit() {
                    Some(limit) => limit.apply(rotated),
                    None => rotated,
                };
            }
            log::trace!("ik: iteration {iteration} done");
        }

        let final_distance = ForwardKinematics::evaluate_indexed(&working)[effector]
            .as_ref()
            .map_or(f32::INFINITY, |tip| tip.world_end.distance(target));
        log::debug!("ik: final distance {final_distance}");

        SolveResult {
            chain: chain.bones().iter().map(|&i| working[i].id.clone()).collect(),
            bones: working,
            iterations: self.config.iterations,
            final_distance,
        }
    }
}

/// Solves with the default limits and returns only the new bone set.
pub fn solve(bones: &[Bone], effector_id: &str, target: Vec2) -> Vec<Bone> {
    CcdSolver::default().solve(bones, effector_id, target).bones
}

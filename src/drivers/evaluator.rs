use crate::rig::{Bone, Property, Rig};

/// Number of full sweeps over the rig. Driver chains longer than this many
/// links are only partially resolved.
pub const DRIVER_PASSES: usize = 2;

pub struct DriverEvaluator;

impl DriverEvaluator {
    /// Returns a copy of `bones` with every driven property overwritten.
    ///
    /// Each pass reads sources from the bone set as it stood when the pass
    /// began, so a write only becomes visible to other drivers on the next
    /// pass. A driver whose source bone is missing does nothing, and rotation
    /// writes to locked bones are skipped.
    pub fn evaluate(bones: &[Bone]) -> Vec<Bone> {
        let mut current = bones.to_vec();
        if bones.iter().all(|b| b.drivers.is_empty()) {
            return current;
        }

        for pass in 0..DRIVER_PASSES {
            let snapshot = current.clone();
            let rig = Rig::new(&snapshot);
            let mut writes = 0usize;

            for (bone, before) in current.iter_mut().zip(&snapshot) {
                for driver in &before.drivers {
                    let Some(source) = rig.get(&driver.source_bone_id) else {
                        log::trace!(
                            "driver on '{}' skipped: source '{}' not found",
                            bone.id,
                            driver.source_bone_id
                        );
                        continue;
                    };
                    if bone.locked && driver.target_property == Property::Rotation {
                        continue;
                    }
                    bone.set(
                        driver.target_property,
                        driver.output(source.get(driver.source_property)),
                    );
                    writes += 1;
                }
            }

            log::trace!("driver pass {pass}: {writes} write(s)");
        }

        current
    }
}

//! Rig model
//!
//! Bones, their rotation constraints and drivers, plus [`Rig`], an id-keyed
//! view over a bone slice. Parent links are ids resolved at lookup time, so a
//! malformed hierarchy (dangling parent, cycle) can never be traversed forever.

pub mod bone;
pub mod constraint;
pub mod driver;
pub mod property;

pub use bone::Bone;
pub use constraint::{clamp_rotation, Constraint, ConstraintKind};
pub use driver::Driver;
pub use property::Property;

use std::collections::{HashMap, HashSet};
use std::fmt;

/// Index over an ordered bone slice.
///
/// Duplicate ids resolve to the first bone carrying that id.
#[derive(Debug)]
pub struct Rig<'a> {
    bones: &'a [Bone],
    index: HashMap<&'a str, usize>,
    children: HashMap<&'a str, Vec<usize>>,
    roots: Vec<usize>,
}

impl<'a> Rig<'a> {
    pub fn new(bones: &'a [Bone]) -> Self {
        let mut index = HashMap::with_capacity(bones.len());
        let mut children: HashMap<&'a str, Vec<usize>> = HashMap::new();
        let mut roots = Vec::new();

        for (i, bone) in bones.iter().enumerate() {
            index.entry(bone.id.as_str()).or_insert(i);
            match bone.parent_id.as_deref() {
                Some(parent) => children.entry(parent).or_default().push(i),
                None => roots.push(i),
            }
        }

        Self {
            bones,
            index,
            children,
            roots,
        }
    }

    pub fn bones(&self) -> &'a [Bone] {
        self.bones
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&'a Bone> {
        self.index_of(id).map(|i| &self.bones[i])
    }

    /// Indices of parentless bones, in slice order.
    pub fn roots(&self) -> &[usize] {
        &self.roots
    }

    /// Indices of the bones whose parent id equals `id`, in slice order.
    pub fn children_of(&self, id: &str) -> &[usize] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn parent_of(&self, index: usize) -> Option<usize> {
        self.bones[index]
            .parent_id
            .as_deref()
            .and_then(|p| self.index_of(p))
    }

    /// Pre-order traversal from every root as `(bone, reached_from)` pairs.
    /// Each bone is visited at most once; bones unreachable from a root are left out.
    pub fn pre_order(&self) -> Vec<(usize, Option<usize>)> {
        let mut order = Vec::with_capacity(self.bones.len());
        let mut visited = vec![false; self.bones.len()];
        let mut stack: Vec<(usize, Option<usize>)> =
            self.roots.iter().rev().map(|&r| (r, None)).collect();

        while let Some((i, parent)) = stack.pop() {
            if visited[i] {
                continue;
            }
            visited[i] = true;
            order.push((i, parent));
            for &child in self.children_of(&self.bones[i].id).iter().rev() {
                if !visited[child] {
                    stack.push((child, Some(i)));
                }
            }
        }
        order
    }

    /// Walks parent links upward from `id`, effector first, taking at most
    /// `max_len` bones. Stops early at a root, a dangling parent or a cycle.
    pub fn ancestry(&self, id: &str, max_len: usize) -> Vec<usize> {
        let mut chain = Vec::with_capacity(max_len);
        let mut current = self.index_of(id);

        while let Some(i) = current {
            if chain.len() >= max_len || chain.contains(&i) {
                break;
            }
            chain.push(i);
            current = self.parent_of(i);
        }
        chain
    }

    /// Data-quality problems evaluation silently tolerates.
    pub fn issues(&self) -> Vec<RigIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::with_capacity(self.bones.len());

        for bone in self.bones {
            if !seen.insert(bone.id.as_str()) {
                issues.push(RigIssue::DuplicateId {
                    bone: bone.id.clone(),
                });
            }
        }

        let mut reachable = vec![false; self.bones.len()];
        for (i, _) in self.pre_order() {
            reachable[i] = true;
        }

        for (i, bone) in self.bones.iter().enumerate() {
            if let Some(parent) = bone.parent_id.as_deref() {
                if self.index_of(parent).is_none() {
                    issues.push(RigIssue::DanglingParent {
                        bone: bone.id.clone(),
                        parent: parent.to_string(),
                    });
                } else if !reachable[i] {
                    issues.push(RigIssue::Unreachable {
                        bone: bone.id.clone(),
                    });
                }
            }

            for driver in &bone.drivers {
                if self.index_of(&driver.source_bone_id).is_none() {
                    issues.push(RigIssue::MissingDriverSource {
                        bone: bone.id.clone(),
                        source: driver.source_bone_id.clone(),
                    });
                }
            }

            for constraint in bone.constraints.iter().filter(|c| c.is_rotation_limit()) {
                if let (Some(min), Some(max)) = (constraint.min, constraint.max) {
                    if min > max {
                        issues.push(RigIssue::InvertedLimit {
                            bone: bone.id.clone(),
                            min,
                            max,
                        });
                    }
                }
            }
        }

        issues
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RigIssue {
    DuplicateId { bone: String },
    DanglingParent { bone: String, parent: String },
    /// Parent exists but the bone sits on a parent cycle or below one.
    Unreachable { bone: String },
    MissingDriverSource { bone: String, source: String },
    InvertedLimit { bone: String, min: f32, max: f32 },
}

impl fmt::Display for RigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RigIssue::DuplicateId { bone } => write!(f, "duplicate bone id '{bone}'"),
            RigIssue::DanglingParent { bone, parent } => {
                write!(f, "bone '{bone}' has unknown parent '{parent}'")
            }
            RigIssue::Unreachable { bone } => {
                write!(f, "bone '{bone}' is not reachable from any root")
            }
            RigIssue::MissingDriverSource { bone, source } => {
                write!(f, "driver on '{bone}' reads unknown bone '{source}'")
            }
            RigIssue::InvertedLimit { bone, min, max } => {
                write!(f, "rotation limit on '{bone}' has min {min} > max {max}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(depth: usize) -> Vec<Bone> {
        (0..depth)
            .map(|i| {
                let bone = Bone::new(format!("b{i}"), 10.0);
                if i == 0 {
                    bone
                } else {
                    bone.with_parent(format!("b{}", i - 1))
                }
            })
            .collect()
    }

    #[test]
    fn pre_order_visits_parents_first() {
        let bones = vec![
            Bone::new("hand", 1.0).with_parent("arm"),
            Bone::new("arm", 1.0).with_parent("root"),
            Bone::new("root", 1.0),
            Bone::new("leg", 1.0).with_parent("root"),
        ];
        let rig = Rig::new(&bones);
        let ids: Vec<&str> = rig.pre_order().iter().map(|&(i, _)| bones[i].id.as_str()).collect();
        assert_eq!(ids, ["root", "arm", "hand", "leg"]);
    }

    #[test]
    fn ancestry_is_capped_and_effector_first() {
        let bones = chain(6);
        let rig = Rig::new(&bones);
        let ids: Vec<&str> = rig.ancestry("b5", 4).iter().map(|&i| bones[i].id.as_str()).collect();
        assert_eq!(ids, ["b5", "b4", "b3", "b2"]);
        assert!(rig.ancestry("missing", 4).is_empty());
    }

    #[test]
    fn cycles_terminate() {
        let bones = vec![
            Bone::new("a", 1.0).with_parent("b"),
            Bone::new("b", 1.0).with_parent("a"),
        ];
        let rig = Rig::new(&bones);
        assert!(rig.pre_order().is_empty());
        assert_eq!(rig.ancestry("a", 10).len(), 2);
        assert_eq!(
            rig.issues(),
            vec![
                RigIssue::Unreachable { bone: "a".into() },
                RigIssue::Unreachable { bone: "b".into() },
            ]
        );
    }

    #[test]
    fn reports_data_quality_issues() {
        let bones = vec![
            Bone::new("root", 1.0)
                .with_constraint(Constraint::limit_rotation(Some(10.0), Some(-10.0))),
            Bone::new("root", 1.0),
            Bone::new("orphan", 1.0).with_parent("ghost"),
            Bone::new("driven", 1.0)
                .with_parent("root")
                .with_driver(Driver::new("nobody", Property::X, Property::Y)),
        ];
        let issues = Rig::new(&bones).issues();
        assert!(issues.contains(&RigIssue::DuplicateId { bone: "root".into() }));
        assert!(issues.contains(&RigIssue::DanglingParent {
            bone: "orphan".into(),
            parent: "ghost".into()
        }));
        assert!(issues.contains(&RigIssue::MissingDriverSource {
            bone: "driven".into(),
            source: "nobody".into()
        }));
        assert!(issues.contains(&RigIssue::InvertedLimit {
            bone: "root".into(),
            min: 10.0,
            max: -10.0
        }));
        assert_eq!(issues.len(), 4);
    }
}

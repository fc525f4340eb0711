//! # rig-pose
//!
//! Pose evaluation for 2D skeletal rigs.
//!
//! ## Features
//! - Forward kinematics over a bone forest with rotation limits
//! - Affine drivers between bone properties (two fixed passes)
//! - Keyframe tracks with linear and quadratic easing, sampled per clip
//! - Cyclic coordinate descent IK over the nearest ancestors of an effector
//!
//! Every evaluation is a pure function from a bone slice to fresh values.
//!
//! ## Example
//! ```rust
//! use rig_pose::{ik, Bone, ForwardKinematics};
//! use glam::Vec2;
//!
//! let bones = vec![
//!     Bone::new("upper", 70.0),
//!     Bone::new("lower", 60.0).with_parent("upper"),
//! ];
//!
//! let solved = ik::solve(&bones, "lower", Vec2::new(60.0, 80.0));
//! let pose = ForwardKinematics::evaluate(&solved);
//! assert!(pose[1].world_end.distance(Vec2::new(60.0, 80.0)) < 2.0);
//! ```

pub mod animation;
pub mod drivers;
pub mod error;
pub mod ik;
pub mod kinematics;
pub mod math;
pub mod pipeline;
pub mod project;
pub mod rig;

pub use animation::{
    interpolate, AnimationClip, AnimationSampler, BezierHandle, Easing, Keyframe, Track,
    TrackProperty,
};
pub use drivers::{DriverEvaluator, DRIVER_PASSES};
pub use error::{RigError, RigResult};
pub use ik::{CcdSolver, IkChain, IkConfig, IkConfigBuilder, SolveResult};
pub use kinematics::{DerivedBone, ForwardKinematics};
pub use math::Transform;
pub use pipeline::{Pose, PosePipeline};
pub use project::Project;
pub use rig::{clamp_rotation, Bone, Constraint, ConstraintKind, Driver, Property, Rig, RigIssue};

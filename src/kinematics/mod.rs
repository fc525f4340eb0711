//! Forward kinematics
//!
//! Composes local bone transforms top-down into world space.

pub mod derived;
pub mod forward;

pub use derived::DerivedBone;
pub use forward::ForwardKinematics;

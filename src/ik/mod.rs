//! Inverse Kinematics module
//!
//! Cyclic-coordinate-descent solving over a short chain of ancestor bones.
//! The solver only rewrites local rotations; root positions are left to the caller.

pub mod chain;
pub mod solver;

pub use chain::{IkChain, IkConfig, IkConfigBuilder};
pub use solver::{solve, CcdSolver, SolveResult};

//! Driver evaluation
//!
//! Applies each bone's affine drivers (`target = source * factor + offset`).

mod evaluator;

pub use evaluator::{DriverEvaluator, DRIVER_PASSES};

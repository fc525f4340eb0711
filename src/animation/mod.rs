//! Keyframe animation
//!
//! Tracks of eased keyframes, the scalar interpolator over a single track, and
//! the sampler that turns a whole clip into a constrained bone set at a frame.

pub mod clip;
pub mod easing;
pub mod keyframe;
pub mod sampler;
pub mod track;

pub use clip::AnimationClip;
pub use easing::Easing;
pub use keyframe::{BezierHandle, Keyframe};
pub use sampler::AnimationSampler;
pub use track::{interpolate, Track, TrackProperty};

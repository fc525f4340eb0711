use serde::{Deserialize, Serialize};

use super::track::{Track, TrackProperty};
use crate::rig::Property;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationClip {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Length in frames.
    pub duration: f32,
    pub fps: f32,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl AnimationClip {
    pub fn new(id: impl Into<String>, duration: f32, fps: f32) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            duration,
            fps,
            tracks: Vec::new(),
        }
    }

    pub fn with_track(mut self, track: Track) -> Self {
        self.tracks.push(track);
        self
    }

    /// First track animating `property` of `bone_id`.
    pub fn track(&self, bone_id: &str, property: Property) -> Option<&Track> {
        let wanted = TrackProperty::from(property);
        self.tracks
            .iter()
            .find(|t| t.property == wanted && t.bone_id == bone_id)
    }

    /// Playback time in seconds to a fractional frame.
    ///
    /// Looping wraps into `[0, duration)`; otherwise the frame is clamped to
    /// `[0, duration]`. Degenerate clips (non-positive fps or duration) sit at frame 0.
    pub fn frame_at_seconds(&self, seconds: f32, looping: bool) -> f32 {
        if self.fps <= 0.0 || self.duration <= 0.0 || !seconds.is_finite() {
            return 0.0;
        }
        let frame = seconds * self.fps;
        if looping {
            frame.rem_euclid(self.duration)
        } else {
            frame.clamp(0.0, self.duration)
        }
    }
}

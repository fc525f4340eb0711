use serde::{Deserialize, Serialize};

use super::keyframe::Keyframe;
use crate::rig::Property;

/// Property a track animates. `Variant` tracks swap sprites and are never
/// interpolated numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackProperty {
    Rotation,
    X,
    Y,
    Variant,
}

impl TrackProperty {
    pub fn numeric(self) -> Option<Property> {
        match self {
            TrackProperty::Rotation => Some(Property::Rotation),
            TrackProperty::X => Some(Property::X),
            TrackProperty::Y => Some(Property::Y),
            TrackProperty::Variant => None,
        }
    }
}

impl From<Property> for TrackProperty {
    fn from(property: Property) -> Self {
        match property {
            Property::Rotation => TrackProperty::Rotation,
            Property::X => TrackProperty::X,
            Property::Y => TrackProperty::Y,
        }
    }
}

/// Keyframes for one property of one bone.
///
/// At most one keyframe per time is expected; [`Track::upsert_keyframe`] keeps that true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub bone_id: String,
    pub property: TrackProperty,
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
}

impl Track {
    pub fn new(bone_id: impl Into<String>, property: TrackProperty) -> Self {
        Self {
            bone_id: bone_id.into(),
            property,
            keyframes: Vec::new(),
        }
    }

    pub fn with_keyframe(mut self, keyframe: Keyframe) -> Self {
        self.upsert_keyframe(keyframe);
        self
    }

    /// Inserts `keyframe` in time order, replacing any keyframe already at that time.
    pub fn upsert_keyframe(&mut self, keyframe: Keyframe) {
        match self
            .keyframes
            .iter_mut()
            .find(|k| k.time == keyframe.time)
        {
            Some(existing) => *existing = keyframe,
            None => {
                let at = self.keyframes.partition_point(|k| k.time < keyframe.time);
                self.keyframes.insert(at, keyframe);
            }
        }
    }

    pub fn has_duplicate_times(&self) -> bool {
        let mut times: Vec<f32> = self.keyframes.iter().map(|k| k.time).collect();
        times.sort_by(f32::total_cmp);
        times.windows(2).any(|w| w[0] == w[1])
    }

    pub fn evaluate(&self, frame: f32) -> Option<f32> {
        interpolate(self, frame)
    }
}

/// Value of `track` at `frame`, or `None` when the track has no keyframes.
///
/// Holds the first/last value outside the keyed range. Between two keyframes
/// the departing keyframe's easing shapes the blend. Keyframes at a non-finite
/// time are ignored.
pub fn interpolate(track: &Track, frame: f32) -> Option<f32> {
    let mut keys: Vec<&Keyframe> = track
        .keyframes
        .iter()
        .filter(|k| k.time.is_finite())
        .collect();
    keys.sort_by(|a, b| a.time.total_cmp(&b.time));

    let first = *keys.first()?;
    let last = *keys.last()?;
    if frame.is_nan() || frame <= first.time {
        return Some(first.value);
    }
    if frame >= last.time {
        return Some(last.value);
    }

    // first.time < frame < last.time, so 1 <= idx < keys.len().
    let idx = keys.partition_point(|k| k.time <= frame);
    let (k1, k2) = (keys[idx - 1], keys[idx]);
    let t = (frame - k1.time) / (k2.time - k1.time);
    Some(k1.value + (k2.value - k1.value) * k1.easing.apply(t))
}

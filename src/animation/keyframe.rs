use serde::{Deserialize, Serialize};

use super::easing::Easing;

/// Bezier control point, kept for the authoring layer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BezierHandle {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyframe {
    /// Frame number; conventionally integral.
    pub time: f32,
    pub value: f32,
    /// Easing toward the next keyframe.
    #[serde(default)]
    pub easing: Easing,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_in: Option<BezierHandle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handle_out: Option<BezierHandle>,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self {
            time,
            value,
            easing: Easing::Linear,
            handle_in: None,
            handle_out: None,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

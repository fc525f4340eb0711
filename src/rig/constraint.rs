use serde::{Deserialize, Serialize};

use crate::math::normalize_degrees;

const LIMIT_ROTATION: &str = "LIMIT_ROTATION";

/// Constraint type tag. Only rotation limits take part in evaluation; any other
/// tag is kept verbatim so it survives a load/save round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConstraintKind {
    LimitRotation,
    Other(String),
}

impl From<String> for ConstraintKind {
    fn from(tag: String) -> Self {
        if tag == LIMIT_ROTATION {
            ConstraintKind::LimitRotation
        } else {
            ConstraintKind::Other(tag)
        }
    }
}

impl From<ConstraintKind> for String {
    fn from(kind: ConstraintKind) -> Self {
        match kind {
            ConstraintKind::LimitRotation => LIMIT_ROTATION.to_string(),
            ConstraintKind::Other(tag) => tag,
        }
    }
}

fn default_influence() -> f32 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constraint {
    #[serde(rename = "type")]
    pub kind: ConstraintKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f32>,
    /// Carried for the authoring layer. The rotation clamp is always hard.
    #[serde(default = "default_influence")]
    pub influence: f32,
}

impl Constraint {
    pub fn limit_rotation(min: Option<f32>, max: Option<f32>) -> Self {
        Self {
            kind: ConstraintKind::LimitRotation,
            min,
            max,
            influence: 1.0,
        }
    }

    pub fn is_rotation_limit(&self) -> bool {
        self.kind == ConstraintKind::LimitRotation
    }

    /// Clamps `rotation` if this is a rotation limit; other kinds pass it through.
    pub fn apply(&self, rotation: f32) -> f32 {
        match self.kind {
            ConstraintKind::LimitRotation => clamp_rotation(rotation, self.min, self.max),
            ConstraintKind::Other(_) => rotation,
        }
    }
}

/// Normalizes `rotation` into `(-180, 180]`, then clamps it to whichever bounds are set.
pub fn clamp_rotation(rotation: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    let mut r = normalize_degrees(rotation);
    if let Some(min) = min {
        if r < min {
            r = min;
        }
    }
    if let Some(max) = max {
        if r > max {
            r = max;
        }
    }
    r
}

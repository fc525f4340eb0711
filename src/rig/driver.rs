use serde::{Deserialize, Serialize};

use super::property::Property;

fn default_factor() -> f32 {
    1.0
}

/// Ties a property of the owning bone to a property of another bone:
/// `target = source * factor + offset`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub source_bone_id: String,
    pub source_property: Property,
    pub target_property: Property,
    #[serde(default = "default_factor")]
    pub factor: f32,
    #[serde(default)]
    pub offset: f32,
}

impl Driver {
    pub fn new(source_bone_id: impl Into<String>, source: Property, target: Property) -> Self {
        Self {
            source_bone_id: source_bone_id.into(),
            source_property: source,
            target_property: target,
            factor: 1.0,
            offset: 0.0,
        }
    }

    pub fn with_factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    pub fn output(&self, input: f32) -> f32 {
        input * self.factor + self.offset
    }
}

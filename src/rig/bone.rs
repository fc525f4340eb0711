use serde::{Deserialize, Serialize};

use super::constraint::Constraint;
use super::driver::Driver;
use super::property::Property;

fn default_visible() -> bool {
    true
}

/// A bone in the rig, with its local transform.
///
/// `x`/`y` only place root bones; a parented bone starts at its parent's end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bone {
    pub id: String,
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Local rotation in degrees.
    #[serde(default)]
    pub rotation: f32,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub length: f32,
    #[serde(default)]
    pub locked: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub constraints: Vec<Constraint>,
    #[serde(default)]
    pub drivers: Vec<Driver>,
}

impl Bone {
    pub fn new(id: impl Into<String>, length: f32) -> Self {
        Self {
            id: id.into(),
            parent_id: None,
            rotation: 0.0,
            x: 0.0,
            y: 0.0,
            length,
            locked: false,
            visible: true,
            constraints: Vec::new(),
            drivers: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_driver(mut self, driver: Driver) -> Self {
        self.drivers.push(driver);
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    pub fn get(&self, property: Property) -> f32 {
        match property {
            Property::Rotation => self.rotation,
            Property::X => self.x,
            Property::Y => self.y,
        }
    }

    pub fn set(&mut self, property: Property, value: f32) {
        match property {
            Property::Rotation => self.rotation = value,
            Property::X => self.x = value,
            Property::Y => self.y = value,
        }
    }

    /// The first rotation limit on this bone, if any. Later limits are ignored.
    pub fn rotation_limit(&self) -> Option<&Constraint> {
        self.constraints.iter().find(|c| c.is_rotation_limit())
    }

    /// Local rotation after applying the rotation limit.
    pub fn effective_rotation(&self) -> f32 {
        match self.rotation_limit() {
            Some(limit) => limit.apply(self.rotation),
            None => self.rotation,
        }
    }
}

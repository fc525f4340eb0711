use serde::{Deserialize, Serialize};

/// One of the three numeric bone properties that drivers and tracks address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    Rotation,
    X,
    Y,
}

impl Property {
    pub const ALL: [Property; 3] = [Property::Rotation, Property::X, Property::Y];

    pub fn as_str(self) -> &'static str {
        match self {
            Property::Rotation => "rotation",
            Property::X => "x",
            Property::Y => "y",
        }
    }
}

impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

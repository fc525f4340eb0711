//! Project document: the rig plus its clips, as exchanged with the editor.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::animation::AnimationClip;
use crate::error::{RigError, RigResult};
use crate::rig::{Bone, Rig, RigIssue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub bones: Vec<Bone>,
    #[serde(default, alias = "animations")]
    pub clips: Vec<AnimationClip>,
}

impl Project {
    pub fn from_json(json: &str) -> RigResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> RigResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn to_json_pretty(&self) -> RigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn rig(&self) -> Rig<'_> {
        Rig::new(&self.bones)
    }

    pub fn issues(&self) -> Vec<RigIssue> {
        self.rig().issues()
    }

    /// Clip by id, falling back to name.
    pub fn clip(&self, key: &str) -> RigResult<&AnimationClip> {
        self.clips
            .iter()
            .find(|c| c.id == key)
            .or_else(|| self.clips.iter().find(|c| c.name == key))
            .ok_or_else(|| RigError::UnknownClip(key.to_string()))
    }

    pub fn bone(&self, id: &str) -> RigResult<&Bone> {
        self.rig()
            .get(id)
            .ok_or_else(|| RigError::UnknownBone(id.to_string()))
    }
}

use crate::rig::Rig;

/// Solver limits. Defaults: 4-bone chains, 10 outer iterations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IkConfig {
    pub(crate) max_chain_len: usize,
    pub(crate) iterations: u32,
}

impl Default for IkConfig {
    fn default() -> Self {
        Self {
            max_chain_len: 4,
            iterations: 10,
        }
    }
}

impl IkConfig {
    pub fn builder() -> IkConfigBuilder {
        IkConfigBuilder::new()
    }

    pub fn max_chain_len(&self) -> usize {
        self.max_chain_len
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }
}

pub struct IkConfigBuilder {
    config: IkConfig,
}

impl IkConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: IkConfig::default(),
        }
    }

    /// Bones taken from the effector upward, effector included. At least 1.
    pub fn max_chain_len(mut self, max_chain_len: usize) -> Self {
        self.config.max_chain_len = max_chain_len.max(1);
        self
    }

    pub fn iterations(mut self, iterations: u32) -> Self {
        self.config.iterations = iterations;
        self
    }

    pub fn build(self) -> IkConfig {
        self.config
    }
}

impl Default for IkConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Bone indices the solver may rotate, effector first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IkChain {
    bones: Vec<usize>,
}

impl IkChain {
    /// Walks parent links up from `effector_id`. `None` if the effector is unknown.
    pub fn build(rig: &Rig<'_>, effector_id: &str, max_len: usize) -> Option<Self> {
        let bones = rig.ancestry(effector_id, max_len);
        if bones.is_empty() {
            None
        } else {
            Some(Self { bones })
        }
    }

    pub fn bones(&self) -> &[usize] {
        &self.bones
    }

    pub fn effector(&self) -> usize {
        self.bones[0]
    }

    pub fn len(&self) -> usize {
        self.bones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rig::Bone;

    #[test]
    fn builder_overrides_defaults() {
        let config = IkConfig::builder().max_chain_len(0).iterations(3).build();
        assert_eq!(config.max_chain_len(), 1);
        assert_eq!(config.iterations(), 3);
        assert_eq!(IkConfig::default().max_chain_len(), 4);
        assert_eq!(IkConfig::default().iterations(), 10);
    }

    #[test]
    fn chain_stops_at_root() {
        let bones = vec![Bone::new("root", 1.0), Bone::new("arm", 1.0).with_parent("root")];
        let rig = Rig::new(&bones);
        let chain = IkChain::build(&rig, "arm", 4).unwrap();
        assert_eq!(chain.bones(), &[1, 0]);
        assert_eq!(chain.effector(), 1);
        assert!(IkChain::build(&rig, "nope", 4).is_none());
    }
}

pub type RigResult<T> = Result<T, RigError>;

/// Failures at the crate's boundary. Pose evaluation itself never fails.
#[derive(thiserror::Error, Debug)]
pub enum RigError {
    #[error("invalid project JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown bone '{0}'")]
    UnknownBone(String),

    #[error("unknown clip '{0}'")]
    UnknownClip(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(RigError::UnknownBone("arm".into())
            .to_string()
            .contains("unknown bone 'arm'"));
        assert!(RigError::UnknownClip("walk".into())
            .to_string()
            .contains("unknown clip 'walk'"));
        let json = serde_json::from_str::<u8>("nope").unwrap_err();
        assert!(RigError::from(json).to_string().starts_with("invalid project JSON"));
    }
}

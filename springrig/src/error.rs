use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("node index {index} is out of bounds")]
    UnknownNode { index: usize },

    #[error("humanoid-role matching requested but no humanoid binding is available")]
    MissingHumanoidBinding,

    #[error("invalid profile for part '{part}': {message}")]
    InvalidProfile { part: &'static str, message: String },

    #[error("rig text does not start with the '{}' marker", crate::codec::RIG_TEXT_PREFIX)]
    RigTextPrefix,

    #[error("failed to parse rig record {record}: {message}")]
    RigTextRecord { record: usize, message: String },

    #[cfg(feature = "json")]
    #[error("failed to parse rig config JSON: {message}")]
    ConfigJson { message: String },
}

use thiserror::Error;

use crate::FloatValue;

/// Error type for invalid arguments and configuration.
///
/// Mathematical domain problems (e.g. `log10` of a non-positive moment) are not
/// reported here: the formulas return whatever IEEE-754 arithmetic produces.
#[derive(Error, Debug)]
pub enum EqPhysicsError {
    #[error("Motion must be one of ['disp', 'vel', 'acc'], got '{0}'")]
    InvalidMotion(String),
    #[error("{parameter} must be in range {constraint}, got {value}")]
    OutOfRange {
        parameter: &'static str,
        value: FloatValue,
        constraint: &'static str,
    },
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Could not serialise configuration: {0}")]
    Serialise(#[from] toml::ser::Error),
}

/// Convenience type for `Result<T, EqPhysicsError>`.
pub type EqPhysicsResult<T> = Result<T, EqPhysicsError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum VStarError {
    #[error("chi and kappa must be positive and non-zero (chi={chi}, kappa={kappa})")]
    InvalidDomain { chi: f64, kappa: f64 },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Self-test failed: {0}")]
    SelfTestFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type VStarResult<T> = Result<T, VStarError>;

use thiserror::Error;

/// Failures at the boundary between the site and the host document.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("script evaluation failed: {0}")]
    Eval(String),

    #[error("failed to encode script argument: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;

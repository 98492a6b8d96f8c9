use crate::config::ConfigError;
use crate::web::error::WebError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

/// Errors that prevent the app from starting.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("The configuration is invalid.")]
    Config(#[from] ConfigError),
    #[error("An error has been encountered while preparing requests onto another server.")]
    Web(#[from] WebError),
}

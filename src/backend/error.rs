use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum BackendError {
    #[error("The script service can't be reached.")]
    ConnectionFailed,
    #[error("The script service answered with an unexpected content.")]
    InvalidResponse,
    #[error("The script service rejected the request: {0}")]
    Rejected(String),
}

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WebError {
    #[error("Client couldn't be created.")]
    CantCreateClient,
    #[error("The connection to the other server failed.")]
    ConnectionFailed,
    #[error("The file that has been downloaded doesn't provide any content.")]
    CantReadPageContent,
    #[error("The requested page or file has not been found.")]
    NotFound,
}

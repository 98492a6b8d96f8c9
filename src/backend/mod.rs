use crate::backend::error::BackendError;
use crate::backend::mock::MockBackend;
use crate::backend::script::ScriptBackend;
use crate::config::AppConfig;
use dto::document_links::DocumentLinks;
use dto::key_validation::KeyValidation;
use dto::submission_payload::SubmissionPayload;
use std::sync::Arc;

pub mod error;
pub mod mock;
pub mod script;

/// The service that knows about access keys and generates documents.
/// The UI never cares about the transport behind it.
#[rocket::async_trait]
pub trait RegistrationBackend: Send + Sync {
    async fn validate_key(&self, key: &str) -> Result<KeyValidation, BackendError>;

    async fn submit_form(&self, payload: &SubmissionPayload)
    -> Result<DocumentLinks, BackendError>;
}

/// Shared, so that a backend call can outlive the request that started it.
pub type Backend = Arc<dyn RegistrationBackend>;

pub fn build_backend(config: &AppConfig) -> crate::error::Result<Backend> {
    match config.backend_url() {
        Some(url) => {
            info!("Using script service [url: {url}]");
            Ok(Arc::new(ScriptBackend::new(url.clone())?))
        }
        None => {
            warn!("No backend URL provided, using the mock backend");
            Ok(Arc::new(MockBackend::new(
                *config.validation_delay(),
                *config.submission_delay(),
            )))
        }
    }
}

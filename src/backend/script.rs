use crate::backend::RegistrationBackend;
use crate::backend::error::BackendError;
use crate::backend::error::BackendError::{ConnectionFailed, InvalidResponse, Rejected};
use crate::tools::log_message_and_return;
use crate::tools::web::build_client;
use crate::web::error::WebError;
use dto::document_links::DocumentLinks;
use dto::key_validation::KeyValidation;
use dto::submission_payload::SubmissionPayload;
use log::{error, info, warn};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

const VALIDATE_KEY_ACTION: &str = "validateKey";
const SUBMIT_FORM_ACTION: &str = "processFormWithImage";

/// Client for a live script service, deployed as a web app behind a single URL.
/// Every call is a JSON `POST` whose `action` field names the function to run.
pub struct ScriptBackend {
    client: Client,
    url: Url,
}

impl ScriptBackend {
    pub fn new(url: Url) -> Result<Self, WebError> {
        Ok(Self {
            client: build_client()?,
            url,
        })
    }

    async fn call<T: DeserializeOwned>(&self, body: &Value) -> Result<T, BackendError> {
        let response = self
            .client
            .post(self.url.clone())
            .json(body)
            .send()
            .await
            .map_err(log_message_and_return(
                "Can't reach the script service",
                ConnectionFailed,
            ))?;

        let status = response.status();
        if !status.is_success() {
            error!("The script service answered with an error status [status: {status}]");
            return Err(ConnectionFailed);
        }

        let value: Value = response.json().await.map_err(log_message_and_return(
            "The script service answered with something else than JSON",
            InvalidResponse,
        ))?;
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            warn!("The script service rejected the request [message: {message}]");
            return Err(Rejected(message.to_owned()));
        }

        serde_json::from_value(value).map_err(log_message_and_return(
            "The script service answer doesn't match what was expected",
            InvalidResponse,
        ))
    }
}

#[rocket::async_trait]
impl RegistrationBackend for ScriptBackend {
    async fn validate_key(&self, key: &str) -> Result<KeyValidation, BackendError> {
        info!("Validating key with the script service");
        self.call(&json!({"action": VALIDATE_KEY_ACTION, "key": key}))
            .await
    }

    async fn submit_form(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<DocumentLinks, BackendError> {
        info!("Submitting form to the script service [payload: {payload:?}]");
        let mut body = serde_json::to_value(payload).map_err(log_message_and_return(
            "Can't serialize the payload",
            InvalidResponse,
        ))?;
        body["action"] = json!(SUBMIT_FORM_ACTION);
        self.call(&body).await
    }
}

use crate::tools::env_args::{retrieve_arg_value, retrieve_parsed_arg_value};
use derive_getters::Getters;
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

const PORT_ARG: &str = "--port";
const BACKEND_URL_ARG: &str = "--backend-url";
const VALIDATION_DELAY_ARG: &str = "--validation-delay-ms";
const SUBMISSION_DELAY_ARG: &str = "--submission-delay-ms";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_VALIDATION_DELAY_MS: u64 = 1000;
const DEFAULT_SUBMISSION_DELAY_MS: u64 = 2000;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("The backend URL is malformed [url: {0}]")]
    MalformedBackendUrl(String),
}

/// Everything that can be tuned when starting the app.
///
/// Without `--backend-url`, the app talks to an in-process mock of the script service,
/// answering after the configured delays.
#[derive(Debug, Getters, PartialEq, Clone)]
pub struct AppConfig {
    port: u16,
    backend_url: Option<Url>,
    validation_delay: Duration,
    submission_delay: Duration,
}

impl AppConfig {
    pub fn from_args() -> Result<Self, ConfigError> {
        let backend_url = retrieve_arg_value(BACKEND_URL_ARG)
            .filter(|url| !url.trim().is_empty())
            .map(|url| Url::parse(url.trim()).map_err(|_| ConfigError::MalformedBackendUrl(url)))
            .transpose()?;

        Ok(Self {
            port: retrieve_parsed_arg_value(PORT_ARG, DEFAULT_PORT),
            backend_url,
            validation_delay: Duration::from_millis(retrieve_parsed_arg_value(
                VALIDATION_DELAY_ARG,
                DEFAULT_VALIDATION_DELAY_MS,
            )),
            submission_delay: Duration::from_millis(retrieve_parsed_arg_value(
                SUBMISSION_DELAY_ARG,
                DEFAULT_SUBMISSION_DELAY_MS,
            )),
        })
    }
}


#[cfg(test)]
impl AppConfig {
    pub fn new_test(backend_url: Option<Url>) -> Self {
        Self {
            port: DEFAULT_PORT,
            backend_url,
            validation_delay: Duration::ZERO,
            submission_delay: Duration::ZERO,
        }
    }
}

use crate::tools::log_message_and_return;
use crate::web::error::WebError;
use crate::web::error::WebError::{CantReadPageContent, ConnectionFailed, NotFound};
use log::{error, warn};
use reqwest::{Client, StatusCode};
use rocket::http::{Header, RawStr};

const FALLBACK_FILENAME: &str = "document.pdf";

/// Fetch a generated document, so that it can be served as an attachment.
pub async fn fetch_document(client: &Client, url: &str) -> Result<Vec<u8>, WebError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(log_message_and_return(
            "Can't reach document host",
            ConnectionFailed,
        ))?;

    match response.status() {
        StatusCode::NOT_FOUND => {
            warn!("Document not found [url: {url}]");
            Err(NotFound)
        }
        status if !status.is_success() => {
            error!("Document host answered with an error status [url: {url}, status: {status}]");
            Err(ConnectionFailed)
        }
        _ => {
            let content = response.bytes().await.map_err(log_message_and_return(
                "Can't read document content",
                CantReadPageContent,
            ))?;
            Ok(content.to_vec())
        }
    }
}

#[derive(Responder)]
#[response(content_type = "application/pdf")]
pub struct DocumentDownload {
    content: Vec<u8>,
    disposition: Header<'static>,
}

impl DocumentDownload {
    pub fn new(content: Vec<u8>, filename: &str) -> Self {
        Self {
            content,
            disposition: content_disposition(filename),
        }
    }
}

/// Names are Arabic: the UTF-8 `filename*` is used by browsers,
/// the plain `filename` is only there for those that don't understand it.
fn content_disposition(filename: &str) -> Header<'static> {
    Header::new(
        "Content-Disposition",
        format!(
            "attachment; filename=\"{FALLBACK_FILENAME}\"; filename*=UTF-8''{}",
            RawStr::new(filename).percent_encode()
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[async_test]
    async fn should_fetch_document() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/pdf1"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF-1.4".to_vec()))
            .mount(&mock_server)
            .await;

        let content = fetch_document(&Client::new(), &format!("{}/pdf1", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(b"%PDF-1.4".to_vec(), content);
    }

    #[async_test]
    async fn should_not_find_missing_document() {
        let mock_server = MockServer::start().await;

        let error = fetch_document(&Client::new(), &format!("{}/pdf1", mock_server.uri()))
            .await
            .unwrap_err();

        assert_eq!(NotFound, error);
    }

    #[async_test]
    async fn should_fail_when_host_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let error = fetch_document(&Client::new(), &format!("{}/pdf1", mock_server.uri()))
            .await
            .unwrap_err();

        assert_eq!(ConnectionFailed, error);
    }

    #[test]
    fn should_encode_arabic_filename() {
        let header = content_disposition("البطاقة_خالد علي.pdf");

        assert_eq!("Content-Disposition", header.name().as_str());
        assert!(
            header
                .value()
                .starts_with("attachment; filename=\"document.pdf\"; filename*=UTF-8''%D8%A7%D9%84")
        );
        assert!(header.value().is_ascii());
    }
}

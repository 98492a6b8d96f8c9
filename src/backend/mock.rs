use crate::backend::RegistrationBackend;
use crate::backend::error::BackendError;
use dto::document_links::DocumentLinks;
use dto::gender::Gender;
use dto::history_record::HistoryRecord;
use dto::key_validation::KeyValidation;
use dto::rank::Rank;
use dto::submission_payload::SubmissionPayload;
use rocket::tokio::time::sleep;
use std::time::Duration;

/// The only key the mock considers fresh. Any other key has already been used.
pub const UNUSED_KEY: &str = "123456";

/// Stand-in for the script service: canned answers after fixed delays.
pub struct MockBackend {
    validation_delay: Duration,
    submission_delay: Duration,
}

impl MockBackend {
    pub fn new(validation_delay: Duration, submission_delay: Duration) -> Self {
        Self {
            validation_delay,
            submission_delay,
        }
    }
}

#[rocket::async_trait]
impl RegistrationBackend for MockBackend {
    async fn validate_key(&self, key: &str) -> Result<KeyValidation, BackendError> {
        sleep(self.validation_delay).await;

        if key == UNUSED_KEY {
            Ok(KeyValidation::new(
                true,
                Some(Rank::Leader),
                false,
                vec![
                    HistoryRecord::new(
                        key.to_owned(),
                        "محمد أحمد".to_owned(),
                        DocumentLinks::new(
                            Some("https://example.com/pdf1".to_owned()),
                            Some("https://example.com/pdf2".to_owned()),
                            Some("https://example.com/pdf3".to_owned()),
                        ),
                        "2025/04/01".to_owned(),
                        Some(Rank::Leader),
                        Some("5".to_owned()),
                        Some("101".to_owned()),
                        Some(Gender::LeaderMale),
                    ),
                    HistoryRecord::new(
                        key.to_owned(),
                        "أحمد علي".to_owned(),
                        DocumentLinks::new(
                            Some("https://example.com/pdf1_2".to_owned()),
                            None,
                            Some("https://example.com/pdf3_2".to_owned()),
                        ),
                        "2025/03/20".to_owned(),
                        Some(Rank::Leader),
                        Some("6".to_owned()),
                        Some("102".to_owned()),
                        Some(Gender::LeaderMale),
                    ),
                ],
            ))
        } else {
            Ok(KeyValidation::new(
                true,
                Some(Rank::Scout),
                true,
                vec![HistoryRecord::new(
                    key.to_owned(),
                    "خالد علي".to_owned(),
                    DocumentLinks::new(
                        Some("https://example.com/pdf1".to_owned()),
                        Some("https://example.com/pdf2".to_owned()),
                        None,
                    ),
                    "2025/04/05".to_owned(),
                    Some(Rank::Scout),
                    Some("7".to_owned()),
                    Some("103".to_owned()),
                    None,
                )],
            ))
        }
    }

    async fn submit_form(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<DocumentLinks, BackendError> {
        sleep(self.submission_delay).await;

        let committee_certificate = match payload.rank() {
            Rank::Committee | Rank::Leader => Some("https://example.com/pdf3".to_owned()),
            Rank::Scout => None,
        };
        Ok(DocumentLinks::new(
            Some("https://example.com/pdf1".to_owned()),
            Some("https://example.com/pdf2".to_owned()),
            committee_certificate,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::history_record::tests::{leader_record, older_leader_record, scout_record};
    use parameterized::{ide, parameterized};
    use rocket::tokio::runtime::Runtime;

    ide!();

    fn backend() -> MockBackend {
        MockBackend::new(Duration::ZERO, Duration::ZERO)
    }

    #[async_test]
    async fn should_validate_unused_key() {
        let validation = backend().validate_key(UNUSED_KEY).await.unwrap();

        assert_eq!(
            KeyValidation::new(
                true,
                Some(Rank::Leader),
                false,
                vec![leader_record(), older_leader_record()]
            ),
            validation
        );
    }

    #[async_test]
    async fn should_validate_any_other_key_as_used() {
        let validation = backend().validate_key("abcdef").await.unwrap();

        assert_eq!(
            KeyValidation::new(true, Some(Rank::Scout), true, vec![scout_record("abcdef")]),
            validation
        );
    }

    #[parameterized(
        rank = {Rank::Scout, Rank::Leader, Rank::Committee},
        expect_committee_certificate = {false, true, true}
    )]
    fn should_generate_documents(rank: Rank, expect_committee_certificate: bool) {
        let payload = SubmissionPayload::new("اسم".to_owned(), UNUSED_KEY.to_owned(), rank);

        let links = Runtime::new()
            .unwrap()
            .block_on(backend().submit_form(&payload))
            .unwrap();

        assert_eq!(Some("https://example.com/pdf1"), links.pdf1().as_deref());
        assert_eq!(Some("https://example.com/pdf2"), links.pdf2().as_deref());
        assert_eq!(expect_committee_certificate, links.pdf3().is_some());
    }

    #[async_test]
    async fn should_wait_before_answering() {
        let backend = MockBackend::new(Duration::from_millis(20), Duration::ZERO);
        let start = std::time::Instant::now();

        backend.validate_key(UNUSED_KEY).await.unwrap();

        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}

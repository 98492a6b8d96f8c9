pub mod document_links;
pub mod gender;
pub mod history_record;
pub mod key_validation;
pub mod rank;
pub mod submission_payload;

mod serde_tools;

pub mod applicant;
pub mod error;
mod form_collector;
mod key_validator;
pub mod notification;
pub mod photo;
pub mod progress;
pub mod result_presenter;
pub mod session;
pub mod step;

use crate::backend::error::BackendError;
use crate::registration::error::RegistrationError;
use crate::registration::error::RegistrationError::{EmptyKey, InvalidKey, KeyValidationFailed};
use crate::registration::progress::Operation;
use crate::registration::session::Session;
use crate::registration::step::Step;
use crate::tools::log_message_and_return;
use dto::history_record::HistoryRecord;
use dto::key_validation::KeyValidation;

impl Session {
    /// Check the key typed by the visitor and mark the session as waiting for the backend.
    /// Return the key to validate.
    pub fn begin_key_validation(&mut self, raw_key: &str) -> Result<String, RegistrationError> {
        self.ensure_step(Step::Key)?;
        if self.is_loading() {
            return Err(RegistrationError::OperationPending);
        }

        let key = raw_key.trim().to_owned();
        self.set_access_key(key.clone());
        if key.is_empty() {
            return Err(EmptyKey);
        }

        self.clear_error_message();
        self.start_operation(Operation::KeyValidation)?;
        Ok(key)
    }

    /// Apply what the backend said about the key, and return the step the visitor lands on.
    ///
    /// A key that has already been used and comes with history goes straight to the result step,
    /// showing the documents of the newest record.
    pub fn finish_key_validation(
        &mut self,
        outcome: Result<KeyValidation, BackendError>,
    ) -> Result<Step, RegistrationError> {
        self.end_operation(Operation::KeyValidation)?;

        let (is_valid, rank, used, previous_files) = outcome
            .map_err(log_message_and_return(
                "Can't validate key",
                KeyValidationFailed,
            ))?
            .dissolve();
        if !is_valid {
            debug!("Key is invalid [key: {}]", self.access_key());
            return Err(InvalidKey);
        }

        let newest = HistoryRecord::newest(&previous_files)
            .filter(|_| used)
            .map(|newest| (newest.name().clone(), newest.documents()));
        if let Some((name, documents)) = newest {
            debug!("Key has already been used, showing newest documents [name: {name}]");
            self.adopt_previous_submission(name, documents);
            self.set_rank(rank);
            self.set_history(previous_files);
            return self.move_to(Step::Result);
        }

        if rank.is_none() {
            error!("Valid key comes without rank [key: {}]", self.access_key());
            return Err(KeyValidationFailed);
        }
        self.set_rank(rank);
        self.set_history(previous_files);
        self.move_to(Step::Form)
    }
}

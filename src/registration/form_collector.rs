use crate::backend::error::BackendError;
use crate::registration::applicant::ApplicantFields;
use crate::registration::error::RegistrationError;
use crate::registration::error::RegistrationError::{
    MissingRank, OperationPending, SubmissionFailed, SubmissionRejected,
};
use crate::registration::notification::Notification;
use crate::registration::photo::Photo;
use crate::registration::progress::Operation;
use crate::registration::session::Session;
use crate::registration::step::Step;
use dto::document_links::DocumentLinks;
use dto::submission_payload::SubmissionPayload;

const SUBMISSION_SUCCEEDED: &str = "تم إنشاء الملفات بنجاح";

impl Session {
    /// Keep what the visitor typed, whether or not it is complete.
    pub fn update_fields(&mut self, fields: ApplicantFields) -> Result<(), RegistrationError> {
        self.ensure_editable()?;

        self.set_applicant(fields);
        Ok(())
    }

    /// Replace the pending photo with the outcome of the intake.
    /// A rejected selection leaves the session without photo.
    pub fn select_photo(
        &mut self,
        selection: Result<Photo, RegistrationError>,
    ) -> Result<(), RegistrationError> {
        self.ensure_editable()?;

        match selection {
            Ok(photo) => {
                debug!("Photo selected [photo: {photo:?}]");
                self.set_photo(Some(photo));
                Ok(())
            }
            Err(error) => {
                self.set_photo(None);
                Err(error)
            }
        }
    }

    /// Check the form and mark the session as waiting for the backend.
    /// Return what has to be submitted.
    pub fn begin_submission(&mut self) -> Result<SubmissionPayload, RegistrationError> {
        self.ensure_editable()?;
        let rank = self.rank().ok_or(MissingRank)?;

        let payload =
            self.applicant()
                .to_payload(self.access_key(), rank, self.photo().as_ref())?;
        self.start_operation(Operation::Submission)?;
        Ok(payload)
    }

    /// Apply the submission outcome, and return the step the visitor lands on.
    /// On failure, the form stays as filled so the visitor can fix it.
    pub fn finish_submission(
        &mut self,
        outcome: Result<DocumentLinks, BackendError>,
    ) -> Result<Step, RegistrationError> {
        self.end_operation(Operation::Submission)?;

        let documents = outcome.map_err(|error| match error {
            BackendError::Rejected(message) => SubmissionRejected(message),
            error => {
                error!("Can't submit form\n{error:#?}");
                SubmissionFailed
            }
        })?;
        info!("Documents generated [documents: {documents:?}]");
        self.set_results(documents);
        self.notify(Notification::success(SUBMISSION_SUCCEEDED));
        self.move_to(Step::Result)
    }

    fn ensure_editable(&self) -> Result<(), RegistrationError> {
        self.ensure_step(Step::Form)?;
        if self.is_loading() {
            return Err(OperationPending);
        }

        Ok(())
    }
}

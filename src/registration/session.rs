use crate::registration::applicant::ApplicantFields;
use crate::registration::error::RegistrationError;
use crate::registration::error::RegistrationError::{NoPendingOperation, OperationPending, WrongStep};
use crate::registration::notification::Notification;
use crate::registration::photo::Photo;
use crate::registration::progress::{Operation, Progress};
use crate::registration::step::Step;
use derive_getters::Getters;
use dto::document_links::DocumentLinks;
use dto::history_record::HistoryRecord;
use dto::rank::Rank;

/// Everything known about one visitor going through the registration.
///
/// The session is only mutated through its methods: the key validator, the form collector
/// and the result presenter each own the methods of their step.
/// A backend call is surrounded by a `begin_*` and a `finish_*` method, so that the session
/// doesn't have to be locked while waiting for the backend.
#[derive(Debug, Getters, Default, Clone)]
pub struct Session {
    step: Step,
    access_key: String,
    /// Shown under the key input.
    error_message: Option<String>,
    rank: Option<Rank>,
    history: Vec<HistoryRecord>,
    history_open: bool,
    applicant: ApplicantFields,
    photo: Option<Photo>,
    results: Option<DocumentLinks>,
    #[getter(skip)]
    notification: Option<Notification>,
    progress: Option<Progress>,
}

impl Session {
    pub fn is_loading(&self) -> bool {
        self.progress.is_some()
    }

    /// Forget everything and go back to the key step.
    /// A pending operation can't be abandoned: its outcome would land on a blank session.
    pub fn restart(&mut self) -> Result<(), RegistrationError> {
        if self.is_loading() {
            return Err(OperationPending);
        }

        debug!("Restarting session [step: {}]", self.step);
        *self = Session::default();
        Ok(())
    }

    /// The notification to display, if any. It won't be returned twice.
    pub fn take_notification(&mut self) -> Option<Notification> {
        self.notification.take()
    }

    pub fn peek_notification(&self) -> Option<&Notification> {
        self.notification.as_ref()
    }

    pub fn toggle_history(&mut self) {
        self.history_open = !self.history_open;
    }

    /// Show an error to the visitor: under the key input on the key step, as a notification elsewhere.
    pub fn report(&mut self, error: &RegistrationError) {
        if error.is_local() {
            debug!("Reporting error [step: {}, error: {error:?}]", self.step);
        } else {
            warn!("Reporting error [step: {}, error: {error:?}]", self.step);
        }

        match self.step {
            Step::Key => self.error_message = Some(error.to_string()),
            Step::Form | Step::Result => self.notification = Some(Notification::error(error.to_string())),
        }
    }

    pub(super) fn notify(&mut self, notification: Notification) {
        self.notification = Some(notification);
    }

    pub(super) fn start_operation(&mut self, operation: Operation) -> Result<(), RegistrationError> {
        if self.is_loading() {
            return Err(OperationPending);
        }

        self.progress = Some(Progress::start(operation));
        Ok(())
    }

    /// Ends `operation`. Fails when it isn't the pending one,
    /// e.g. when the session has been dropped while the backend was answering.
    pub(super) fn end_operation(&mut self, operation: Operation) -> Result<(), RegistrationError> {
        match &self.progress {
            Some(progress) if progress.operation() == operation => {
                self.progress = None;
                Ok(())
            }
            _ => Err(NoPendingOperation),
        }
    }

    pub(super) fn ensure_step(&self, expected: Step) -> Result<(), RegistrationError> {
        if self.step == expected {
            Ok(())
        } else {
            Err(WrongStep {
                current: self.step,
                expected,
            })
        }
    }

    pub(super) fn move_to(&mut self, next: Step) -> Result<Step, RegistrationError> {
        if !self.step.can_move_to(next) {
            return Err(WrongStep {
                current: self.step,
                expected: next,
            });
        }

        debug!("Moving to next step [from: {}, to: {next}]", self.step);
        self.step = next;
        Ok(next)
    }

    pub(super) fn set_access_key(&mut self, access_key: String) {
        self.access_key = access_key;
    }

    pub(super) fn clear_error_message(&mut self) {
        self.error_message = None;
    }

    pub(super) fn set_rank(&mut self, rank: Option<Rank>) {
        self.rank = rank;
    }

    pub(super) fn set_history(&mut self, history: Vec<HistoryRecord>) {
        self.history = history;
    }

    pub(super) fn set_applicant(&mut self, applicant: ApplicantFields) {
        self.applicant = applicant;
    }

    pub(super) fn set_photo(&mut self, photo: Option<Photo>) {
        self.photo = photo;
    }

    pub(super) fn set_results(&mut self, results: DocumentLinks) {
        self.results = Some(results);
    }
}

use crate::registration::applicant::ApplicantFields;
use crate::registration::notification::Notification;
use crate::registration::progress::{Operation, Progress};
use crate::registration::result_presenter::{DocumentSlot, present_documents};
use crate::registration::session::Session;
use crate::registration::step::Step;
use dto::history_record::HistoryRecord;
use dto::rank::Rank;
use serde::Serialize;

/// Read-only projection of a session, as rendered by the templates and the API.
#[derive(Debug, Serialize, PartialEq)]
pub struct SessionView {
    step: Step,
    access_key: String,
    loading: bool,
    error_message: Option<String>,
    rank: Option<Rank>,
    shows_team_fields: bool,
    shows_photo: bool,
    shows_gender: bool,
    shows_history: bool,
    history_open: bool,
    history: Vec<HistoryEntryView>,
    applicant: ApplicantFields,
    has_photo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_preview: Option<String>,
    documents: Vec<DocumentSlot>,
    progress: Option<ProgressView>,
    notification: Option<Notification>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct HistoryEntryView {
    name: String,
    date: String,
    documents: Vec<DocumentSlot>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct ProgressView {
    operation: Operation,
    percent: u8,
    text: &'static str,
    quote: &'static str,
}

impl SessionView {
    /// View of a rendered page: the notification has been taken from the session,
    /// and the photo preview is embedded.
    pub fn for_page(session: &Session, notification: Option<Notification>) -> Self {
        let mut view = Self::new(session, notification);
        view.photo_preview = session.photo().as_ref().map(|photo| photo.preview());
        view
    }

    /// View served as JSON. The notification is left in the session for the next page.
    pub fn for_api(session: &Session) -> Self {
        Self::new(session, session.peek_notification().cloned())
    }

    fn new(session: &Session, notification: Option<Notification>) -> Self {
        let rank = *session.rank();
        let history: Vec<HistoryEntryView> = session.history().iter().map(HistoryEntryView::from).collect();

        Self {
            step: *session.step(),
            access_key: session.access_key().clone(),
            loading: session.is_loading(),
            error_message: session.error_message().clone(),
            rank,
            shows_team_fields: rank.is_some_and(|rank| rank.requires_team_details()),
            shows_photo: rank.is_some_and(|rank| rank.requires_photo()),
            shows_gender: rank.is_some_and(|rank| rank.requires_gender()),
            shows_history: rank == Some(Rank::Leader) && !history.is_empty(),
            history_open: *session.history_open(),
            history,
            applicant: session.applicant().clone(),
            has_photo: session.photo().is_some(),
            photo_preview: None,
            documents: session.documents(),
            progress: session.progress().as_ref().map(ProgressView::from),
            notification,
        }
    }
}

impl From<&HistoryRecord> for HistoryEntryView {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            name: record.name().clone(),
            date: record.display_date().to_owned(),
            documents: present_documents(&record.documents(), record.name()),
        }
    }
}

impl From<&Progress> for ProgressView {
    fn from(progress: &Progress) -> Self {
        Self {
            operation: progress.operation(),
            percent: progress.percent(),
            text: progress.text(),
            quote: progress.quote(),
        }
    }
}

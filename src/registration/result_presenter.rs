use crate::registration::applicant::ApplicantFields;
use crate::registration::error::RegistrationError;
use crate::registration::error::RegistrationError::DocumentNotFound;
use crate::registration::session::Session;
use crate::registration::step::Step;
use derive_getters::Getters;
use dto::document_links::{DocumentKind, DocumentLinks};
use serde::Serialize;

/// A generated document, ready to be opened or downloaded.
#[derive(Debug, Serialize, Getters, PartialEq, Clone)]
pub struct DocumentSlot {
    kind: DocumentKind,
    slot: &'static str,
    label: &'static str,
    url: String,
    filename: String,
}

/// One slot per present document, in display order. Missing documents have no slot.
pub fn present_documents(documents: &DocumentLinks, full_name: &str) -> Vec<DocumentSlot> {
    documents
        .present()
        .into_iter()
        .map(|(kind, url)| DocumentSlot {
            kind,
            slot: kind.slot(),
            label: kind.label(),
            url: url.to_owned(),
            filename: download_filename(kind, full_name),
        })
        .collect()
}

fn download_filename(kind: DocumentKind, full_name: &str) -> String {
    let full_name: String = full_name
        .trim()
        .chars()
        .map(|c| if matches!(c, '/' | '\\' | '"') { '_' } else { c })
        .collect();
    if full_name.is_empty() {
        format!("{}.pdf", kind.label())
    } else {
        format!("{}_{full_name}.pdf", kind.label())
    }
}

impl Session {
    pub fn documents(&self) -> Vec<DocumentSlot> {
        self.results()
            .as_ref()
            .map(|results| present_documents(results, self.applicant().full_name()))
            .unwrap_or_default()
    }

    pub fn document(&self, kind: DocumentKind) -> Result<DocumentSlot, RegistrationError> {
        self.ensure_step(Step::Result)?;

        self.documents()
            .into_iter()
            .find(|document| document.kind == kind)
            .ok_or(DocumentNotFound)
    }

    /// Show the documents of a previous submission as if they had just been generated.
    pub(super) fn adopt_previous_submission(&mut self, full_name: String, documents: DocumentLinks) {
        self.set_applicant(ApplicantFields::new(
            full_name,
            String::new(),
            String::new(),
            None,
        ));
        self.set_results(documents);
    }
}

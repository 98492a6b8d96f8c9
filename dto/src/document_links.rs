use crate::serde_tools::empty_string_as_none;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// The three documents the script service may generate, in display order.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    Certificate,
    Card,
    CommitteeCertificate,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [
        DocumentKind::Certificate,
        DocumentKind::Card,
        DocumentKind::CommitteeCertificate,
    ];

    /// Name of the field carrying this document on the wire.
    pub fn slot(&self) -> &'static str {
        match self {
            DocumentKind::Certificate => "pdf1",
            DocumentKind::Card => "pdf2",
            DocumentKind::CommitteeCertificate => "pdf3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Certificate => "الشهادة",
            DocumentKind::Card => "البطاقة",
            DocumentKind::CommitteeCertificate => "شهادة اللجان",
        }
    }

    pub fn from_slot(slot: &str) -> Option<DocumentKind> {
        DocumentKind::ALL
            .into_iter()
            .find(|kind| kind.slot() == slot)
    }
}

/// Links to generated documents. Read-only once received.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
pub struct DocumentLinks {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pdf1: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pdf2: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pdf3: Option<String>,
}

impl DocumentLinks {
    pub fn new(pdf1: Option<String>, pdf2: Option<String>, pdf3: Option<String>) -> Self {
        Self { pdf1, pdf2, pdf3 }
    }

    pub fn into_parts(self) -> (Option<String>, Option<String>, Option<String>) {
        (self.pdf1, self.pdf2, self.pdf3)
    }

    pub fn get(&self, kind: DocumentKind) -> Option<&str> {
        match kind {
            DocumentKind::Certificate => self.pdf1.as_deref(),
            DocumentKind::Card => self.pdf2.as_deref(),
            DocumentKind::CommitteeCertificate => self.pdf3.as_deref(),
        }
    }

    /// Present documents only, in display order.
    pub fn present(&self) -> Vec<(DocumentKind, &str)> {
        DocumentKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|url| (kind, url)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.present().is_empty()
    }
}

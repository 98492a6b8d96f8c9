use serde::Serialize;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A one-shot message shown on the next rendered page, then forgotten.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Notification {
    level: NotificationLevel,
    message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn level(&self) -> NotificationLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

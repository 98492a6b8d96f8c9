use crate::history_record::HistoryRecord;
use crate::rank::Rank;
use crate::serde_tools::{empty_string_as_none, null_as_default};
use derive_getters::{Dissolve, Getters};
use serde::{Deserialize, Serialize};

/// What the script service tells about an access key.
#[derive(Debug, Serialize, Deserialize, Getters, Dissolve, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct KeyValidation {
    is_valid: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    rank: Option<Rank>,
    #[serde(default)]
    used: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    previous_files: Vec<HistoryRecord>,
}

impl KeyValidation {
    pub fn new(
        is_valid: bool,
        rank: Option<Rank>,
        used: bool,
        previous_files: Vec<HistoryRecord>,
    ) -> Self {
        Self {
            is_valid,
            rank,
            used,
            previous_files,
        }
    }

    #[cfg(any(test, feature = "test"))]
    pub fn invalid() -> Self {
        Self::new(false, None, false, vec![])
    }
}

use crate::gender::Gender;
use crate::rank::Rank;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Formatter};

/// Everything the script service needs to generate the documents of an applicant.
/// Optional fields are left out of the JSON body when they don't apply to the rank.
#[derive(Serialize, Deserialize, Getters, PartialEq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    name: String,
    key: String,
    rank: Rank,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    team_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    serial_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_base64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mime_type: Option<String>,
}

impl SubmissionPayload {
    pub fn new(name: String, key: String, rank: Rank) -> Self {
        Self {
            name,
            key,
            rank,
            team_number: None,
            serial_number: None,
            gender: None,
            image_base64: None,
            mime_type: None,
        }
    }

    pub fn with_team_details(mut self, team_number: String, serial_number: String) -> Self {
        self.team_number = Some(team_number);
        self.serial_number = Some(serial_number);
        self
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_image(mut self, image_base64: String, mime_type: String) -> Self {
        self.image_base64 = Some(image_base64);
        self.mime_type = Some(mime_type);
        self
    }
}

/// The encoded image can weigh megabytes: only its length is shown.
impl Debug for SubmissionPayload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SubmissionPayload {{name={}, key={}, rank={}, team_number={:?}, serial_number={:?}, gender={:?}, image_base64={}, mime_type={:?}}}",
            self.name,
            self.key,
            self.rank,
            self.team_number,
            self.serial_number,
            self.gender,
            self.image_base64
                .as_ref()
                .map(|image| format!("<{} chars>", image.len()))
                .unwrap_or_else(|| "None".to_owned()),
            self.mime_type,
        )
    }
}

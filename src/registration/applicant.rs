use crate::registration::error::RegistrationError;
use crate::registration::error::RegistrationError::{
    MissingGender, MissingName, MissingPhoto, MissingSerialNumber, MissingTeamNumber,
};
use crate::registration::photo::Photo;
use derive_getters::Getters;
use dto::gender::Gender;
use dto::rank::Rank;
use dto::submission_payload::SubmissionPayload;
use serde::Serialize;

/// What the visitor typed in the form, kept as typed so it can be shown back after a failure.
#[derive(Debug, Serialize, Getters, PartialEq, Clone, Default)]
pub struct ApplicantFields {
    full_name: String,
    team_number: String,
    serial_number: String,
    gender: Option<Gender>,
}

impl ApplicantFields {
    pub fn new(
        full_name: String,
        team_number: String,
        serial_number: String,
        gender: Option<Gender>,
    ) -> Self {
        Self {
            full_name,
            team_number,
            serial_number,
            gender,
        }
    }

    /// Check the fields required by `rank`, in the order the form shows them.
    /// Only the first missing field is reported.
    pub fn validate(&self, rank: Rank, photo: Option<&Photo>) -> Result<(), RegistrationError> {
        if self.full_name.trim().is_empty() {
            return Err(MissingName);
        }
        if rank.requires_photo() && photo.is_none() {
            return Err(MissingPhoto);
        }
        if rank.requires_team_details() {
            if self.team_number.trim().is_empty() {
                return Err(MissingTeamNumber);
            }
            if self.serial_number.trim().is_empty() {
                return Err(MissingSerialNumber);
            }
        }
        if rank.requires_gender() && self.gender.is_none() {
            return Err(MissingGender);
        }

        Ok(())
    }

    /// Build what is sent to the backend. Fields that don't apply to `rank` are left out,
    /// even when the visitor filled them.
    pub fn to_payload(
        &self,
        key: &str,
        rank: Rank,
        photo: Option<&Photo>,
    ) -> Result<SubmissionPayload, RegistrationError> {
        self.validate(rank, photo)?;

        let mut payload =
            SubmissionPayload::new(self.full_name.trim().to_owned(), key.to_owned(), rank);
        if rank.requires_team_details() {
            payload = payload.with_team_details(
                self.team_number.trim().to_owned(),
                self.serial_number.trim().to_owned(),
            );
        }
        if let Some(gender) = self.gender.filter(|_| rank.requires_gender()) {
            payload = payload.with_gender(gender);
        }
        if let Some(photo) = photo.filter(|_| rank.requires_photo()) {
            payload = payload.with_image(photo.to_base64(), photo.mime_type().to_owned());
        }

        Ok(payload)
    }
}

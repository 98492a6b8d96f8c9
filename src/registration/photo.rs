use crate::registration::error::RegistrationError;
use crate::registration::error::RegistrationError::{PhotoTooLarge, UnsupportedPhotoType};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt::{Debug, Formatter};

pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];
pub const MAX_PHOTO_SIZE: u64 = 20 * 1024 * 1024;

/// Check a selected file before reading it.
pub fn check_selection(mime_type: &str, size: u64) -> Result<(), RegistrationError> {
    if !ACCEPTED_MIME_TYPES.contains(&mime_type) {
        debug!("Rejecting photo [mime_type: {mime_type}]");
        return Err(UnsupportedPhotoType);
    }
    if size > MAX_PHOTO_SIZE {
        debug!("Rejecting photo [size: {size}]");
        return Err(PhotoTooLarge);
    }

    Ok(())
}

/// A photo that went through intake and waits for the form to be submitted.
#[derive(PartialEq, Clone)]
pub struct Photo {
    bytes: Vec<u8>,
    mime_type: String,
}

impl Photo {
    pub fn accept(bytes: Vec<u8>, mime_type: &str) -> Result<Self, RegistrationError> {
        check_selection(mime_type, bytes.len() as u64)?;

        Ok(Self {
            bytes,
            mime_type: mime_type.to_owned(),
        })
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    /// URL an `<img>` can display without asking the server again.
    pub fn preview(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.to_base64())
    }
}

impl Debug for Photo {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Photo {{mime_type={}, size={}}}",
            self.mime_type,
            self.bytes.len()
        )
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const LEADER_MALE: &str = "قائد";
const LEADER_FEMALE: &str = "قائدة";

/// Only leaders pick a gender, hence the values.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Gender {
    #[serde(rename = "قائد")]
    LeaderMale,
    #[serde(rename = "قائدة")]
    LeaderFemale,
}

impl Gender {
    #[cfg(any(test, feature = "test"))]
    pub const ALL: [Gender; 2] = [Gender::LeaderMale, Gender::LeaderFemale];

    pub fn label(&self) -> &'static str {
        match self {
            Gender::LeaderMale => LEADER_MALE,
            Gender::LeaderFemale => LEADER_FEMALE,
        }
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, PartialEq)]
pub struct UnknownGender(String);

impl Display for UnknownGender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown gender [gender: {}]", self.0)
    }
}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            LEADER_MALE => Ok(Gender::LeaderMale),
            LEADER_FEMALE => Ok(Gender::LeaderFemale),
            other => Err(UnknownGender(other.to_owned())),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const SCOUT: &str = "كشاف";
const LEADER: &str = "قائد";
const COMMITTEE: &str = "لجان";

/// The role attached to an access key. It decides which fields the form asks for.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Rank {
    #[serde(rename = "كشاف")]
    Scout,
    #[serde(rename = "قائد")]
    Leader,
    #[serde(rename = "لجان")]
    Committee,
}

impl Rank {
    /// Name of the rank, as displayed and as spoken by the script service.
    pub fn label(&self) -> &'static str {
        match self {
            Rank::Scout => SCOUT,
            Rank::Leader => LEADER,
            Rank::Committee => COMMITTEE,
        }
    }

    pub fn requires_photo(&self) -> bool {
        match self {
            Rank::Scout | Rank::Leader => true,
            Rank::Committee => false,
        }
    }

    /// Team number and serial number go together.
    pub fn requires_team_details(&self) -> bool {
        match self {
            Rank::Scout | Rank::Leader => true,
            Rank::Committee => false,
        }
    }

    pub fn requires_gender(&self) -> bool {
        match self {
            Rank::Leader => true,
            Rank::Scout | Rank::Committee => false,
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, PartialEq)]
pub struct UnknownRank(String);

impl Display for UnknownRank {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown rank [rank: {}]", self.0)
    }
}

impl FromStr for Rank {
    type Err = UnknownRank;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            SCOUT => Ok(Rank::Scout),
            LEADER => Ok(Rank::Leader),
            COMMITTEE => Ok(Rank::Committee),
            other => Err(UnknownRank(other.to_owned())),
        }
    }
}

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Life status reported by the upstream API. The upstream spells the last
/// variant in lower case, so serialization follows suit; decoding funnels
/// any unrecognized spelling into `Unknown` instead of failing the page.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl From<String> for CharacterStatus {
    fn from(value: String) -> Self {
        Self::from_param(&value).unwrap_or(CharacterStatus::Unknown)
    }
}

impl CharacterStatus {
    pub const ALL: [CharacterStatus; 3] = [
        CharacterStatus::Alive,
        CharacterStatus::Dead,
        CharacterStatus::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }

    /// Parses a filter parameter. Anything that is not a known status is
    /// treated as an absent filter rather than a constraint nothing matches.
    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl Display for CharacterStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Gender reported by the upstream API.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String")]
pub enum CharacterGender {
    Female,
    Male,
    Genderless,
    #[serde(rename = "unknown")]
    Unknown,
}

impl From<String> for CharacterGender {
    fn from(value: String) -> Self {
        Self::from_param(&value).unwrap_or(CharacterGender::Unknown)
    }
}

impl CharacterGender {
    pub const ALL: [CharacterGender; 4] = [
        CharacterGender::Female,
        CharacterGender::Male,
        CharacterGender::Genderless,
        CharacterGender::Unknown,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CharacterGender::Female => "Female",
            CharacterGender::Male => "Male",
            CharacterGender::Genderless => "Genderless",
            CharacterGender::Unknown => "unknown",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.as_str() == value)
    }
}

impl Display for CharacterGender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Named reference to the location a character was last seen at.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct LocationRef {
    pub name: String,
}

/// One catalog entry, sourced verbatim from the upstream listing and
/// immutable once fetched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Character {
    pub id: u64,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    /// Free-text subtype, frequently empty. Named `type` upstream.
    pub kind: String,
    pub gender: CharacterGender,
    pub location: LocationRef,
    pub image: String,
    /// Ordered episode resource URLs, first appearance first.
    pub episode: Vec<String>,
}

/// One decoded page of the upstream listing together with the total page
/// count the upstream reports for the walk.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterPage {
    pub pages: u32,
    pub characters: Vec<Character>,
}

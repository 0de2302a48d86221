use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// One guest of the responding family, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct PartyMember {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_adult: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub accommodation: bool,
}

impl PartyMember {
    pub fn new(name: impl Into<String>, is_adult: bool, accommodation: bool) -> Self {
        Self {
            name: name.into(),
            is_adult,
            accommodation,
        }
    }
}

/// Trip logistics shared by the whole party.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Overall {
    #[serde(deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transport: String,
}

/// The persisted snapshot of the RSVP form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct RsvpDraft {
    #[serde(deserialize_with = "null_as_default")]
    pub family_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub contact_phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub selected_events: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub overall: Overall,
    #[serde(deserialize_with = "null_as_default")]
    pub members: Vec<PartyMember>,
}

// A `null` field reads as empty, same as a missing one.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl RsvpDraft {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    pub fn attends(&self, event: &str) -> bool {
        self.selected_events.iter().any(|e| e == event)
    }
}

/// The two-valued age choice of a member row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgeGroup {
    #[default]
    Adult,
    Child,
}

impl AgeGroup {
    pub fn from_is_adult(is_adult: bool) -> Self {
        if is_adult {
            AgeGroup::Adult
        } else {
            AgeGroup::Child
        }
    }

    pub fn is_adult(self) -> bool {
        self == AgeGroup::Adult
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeGroup::Adult => write!(f, "adult"),
            AgeGroup::Child => write!(f, "child"),
        }
    }
}

impl FromStr for AgeGroup {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adult" => Ok(AgeGroup::Adult),
            "child" => Ok(AgeGroup::Child),
            other => Err(format!("expected 'adult' or 'child', got '{}'", other)),
        }
    }
}

/// Raw, unfiltered contents of one editable member row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MemberRow {
    pub name: String,
    pub age: AgeGroup,
    pub accommodation: bool,
}

impl MemberRow {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn to_member(&self) -> PartyMember {
        PartyMember {
            name: self.name.trim().to_string(),
            is_adult: self.age.is_adult(),
            accommodation: self.accommodation,
        }
    }
}

impl From<&PartyMember> for MemberRow {
    fn from(member: &PartyMember) -> Self {
        Self {
            name: member.name.clone(),
            age: AgeGroup::from_is_adult(member.is_adult),
            accommodation: member.accommodation,
        }
    }
}

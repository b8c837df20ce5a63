//! The tutor application record and its enumerated field types.
//!
//! `NewTutorApplication` is what the validator produces from raw client
//! input; `TutorApplication` is the stored shape with the server-generated
//! `id` and `created_at`. Enum tags are fixed; parsing accepts any casing
//! but the canonical lowercase/kebab-case form is what gets stored and
//! serialized back out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TeachingMode {
    Online,
    Physical,
    Both,
}

impl TeachingMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "online" => Some(Self::Online),
            "physical" => Some(Self::Physical),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::Physical => "physical",
            Self::Both => "both",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PreferredStudents {
    MaleStudents,
    FemaleStudents,
    Both,
}

impl PreferredStudents {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male-students" => Some(Self::MaleStudents),
            "female-students" => Some(Self::FemaleStudents),
            "both" => Some(Self::Both),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaleStudents => "male-students",
            Self::FemaleStudents => "female-students",
            Self::Both => "both",
        }
    }
}

/// Islamic teaching qualification tags. Free text goes into
/// `other_qualification` when the tag is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Qualification {
    Hafiz,
    Qari,
    Alim,
    Mufti,
    DarseNizami,
    Other,
}

impl Qualification {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hafiz" => Some(Self::Hafiz),
            "qari" => Some(Self::Qari),
            "alim" => Some(Self::Alim),
            "mufti" => Some(Self::Mufti),
            "darse-nizami" => Some(Self::DarseNizami),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hafiz => "hafiz",
            Self::Qari => "qari",
            Self::Alim => "alim",
            Self::Mufti => "mufti",
            Self::DarseNizami => "darse-nizami",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DemoClass {
    Yes,
    No,
    UponRequest,
}

impl DemoClass {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yes" => Some(Self::Yes),
            "no" => Some(Self::No),
            "upon-request" => Some(Self::UponRequest),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::UponRequest => "upon-request",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "monday" => Some(Self::Monday),
            "tuesday" => Some(Self::Tuesday),
            "wednesday" => Some(Self::Wednesday),
            "thursday" => Some(Self::Thursday),
            "friday" => Some(Self::Friday),
            "saturday" => Some(Self::Saturday),
            "sunday" => Some(Self::Sunday),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
}

impl TimeSlot {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "morning" => Some(Self::Morning),
            "afternoon" => Some(Self::Afternoon),
            "evening" => Some(Self::Evening),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

/// A validated application as produced by the validator, before the store
/// assigns `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewTutorApplication {
    pub full_name: String,
    pub gender: Gender,
    pub city: String,
    pub area: String,
    pub subjects: Vec<String>,
    pub teaching_mode: TeachingMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travel_distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_students: Option<PreferredStudents>,
    pub islamic_qualification: Qualification,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_qualification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institute_name: Option<String>,
    pub experience_years: i32,
    pub demo_class_available: DemoClass,
    pub days_available: Vec<Weekday>,
    pub preferred_time_slots: Vec<TimeSlot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_per_month: Option<String>,
    pub short_bio: String,
    pub confirm_accuracy: bool,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnic_file: Option<String>,
}

/// A stored application. `id` and `created_at` are assigned exactly once,
/// by the store, never by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TutorApplication {
    pub id: i32,
    #[serde(flatten)]
    pub record: NewTutorApplication,
    pub created_at: DateTime<Utc>,
}

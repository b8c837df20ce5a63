//! Application input validation.
//!
//! Takes arbitrary client JSON and either produces a normalized
//! [`NewTutorApplication`] or fails with the first violation encountered,
//! attributed to the offending field. Per-field rules run in record order;
//! cross-field rules run only once every per-field rule has passed. No I/O
//! happens here, so the store is never touched for a rejected submission.

use crate::domain::application::{
    DemoClass, Gender, NewTutorApplication, PreferredStudents, Qualification, TeachingMode,
    TimeSlot, Weekday,
};
use crate::domain::legacy;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

/// A single field-attributed violation. The field path uses the wire
/// (camelCase) name; an empty path means the input as a whole was malformed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

type Fields = Map<String, JsonValue>;

pub fn validate(input: &JsonValue) -> Result<NewTutorApplication, ValidationError> {
    let adapted = legacy::adapt_time_slots(input);
    let obj = match adapted.as_object() {
        Some(o) => o,
        None => return Err(ValidationError::new("", "Application must be a JSON object")),
    };

    let full_name = required_str(obj, "fullName", "Full name")?;
    let gender = required_tag(
        obj,
        "gender",
        "Gender is required",
        "Please select a valid gender",
        Gender::parse,
    )?;
    let city = required_str(obj, "city", "City")?;
    let area = required_str(obj, "area", "Area")?;
    let subjects = required_string_array(obj, "subjects", "Select at least one subject")?;
    let teaching_mode = required_tag(
        obj,
        "teachingMode",
        "Teaching mode is required",
        "Please select a valid teaching mode",
        TeachingMode::parse,
    )?;
    // Optional for every teaching mode; the physical-mode form still asks
    // for it but older submissions omit it entirely.
    let travel_distance = optional_str(obj, "travelDistance", "Travel distance")?;
    let preferred_students = optional_tag(
        obj,
        "preferredStudents",
        "Please select a valid student preference",
        PreferredStudents::parse,
    )?;
    let islamic_qualification = required_tag(
        obj,
        "islamicQualification",
        "Qualification is required",
        "Please select a valid qualification",
        Qualification::parse,
    )?;
    let other_qualification = optional_str(obj, "otherQualification", "Other qualification")?;
    let institute_name = optional_str(obj, "instituteName", "Institute name")?;
    let experience_years = coerce_experience_years(obj.get("experienceYears"))?;
    let demo_class_available = required_tag(
        obj,
        "demoClassAvailable",
        "Demo class availability is required",
        "Please select a valid demo class option",
        DemoClass::parse,
    )?;
    let days_available = match parse_tag_list(
        obj.get("daysAvailable"),
        "daysAvailable",
        "Days available must be a list of weekdays",
        Weekday::parse,
    )? {
        Some(days) if !days.is_empty() => days,
        _ => return Err(ValidationError::new("daysAvailable", "Select at least one day")),
    };
    // Emptiness is a cross-field concern: the legacy adapter may have
    // synthesized this list from the old boolean flags.
    let preferred_time_slots = parse_tag_list(
        obj.get("preferredTimeSlots"),
        "preferredTimeSlots",
        "Preferred time slots must be a list of time slots",
        TimeSlot::parse,
    )?
    .unwrap_or_default();
    let rate_per_hour = optional_str(obj, "ratePerHour", "Rate per hour")?;
    let rate_per_month = optional_str(obj, "ratePerMonth", "Rate per month")?;
    let short_bio = required_str(obj, "shortBio", "Short bio")?;
    let bio_len = short_bio.chars().count();
    if bio_len < 20 || bio_len > 500 {
        return Err(ValidationError::new(
            "shortBio",
            "Short bio must be between 20 and 500 characters",
        ));
    }
    let confirm_accuracy = coerce_confirmation(obj.get("confirmAccuracy"))?;
    let phone_number = required_str(obj, "phoneNumber", "Phone number")?;
    if phone_number.chars().count() < 10 {
        return Err(ValidationError::new(
            "phoneNumber",
            "Phone number must be at least 10 digits",
        ));
    }
    let email = optional_str(obj, "email", "Email")?;
    if let Some(email) = &email {
        if !is_valid_email(email) {
            return Err(ValidationError::new("email", "Invalid email address"));
        }
    }
    let cnic_file = optional_str(obj, "cnicFile", "CNIC file")?;

    // Cross-field rules.
    if islamic_qualification == Qualification::Other && other_qualification.is_none() {
        return Err(ValidationError::new(
            "otherQualification",
            "Please specify your qualification",
        ));
    }
    if preferred_time_slots.is_empty() {
        return Err(ValidationError::new(
            "preferredTimeSlots",
            "Select at least one preferred time slot",
        ));
    }
    if !confirm_accuracy {
        return Err(ValidationError::new(
            "confirmAccuracy",
            "You must confirm that the information provided is accurate",
        ));
    }

    Ok(NewTutorApplication {
        full_name,
        gender,
        city,
        area,
        subjects,
        teaching_mode,
        travel_distance,
        preferred_students,
        islamic_qualification,
        other_qualification,
        institute_name,
        experience_years,
        demo_class_available,
        days_available,
        preferred_time_slots,
        rate_per_hour,
        rate_per_month,
        short_bio,
        confirm_accuracy,
        phone_number,
        email,
        cnic_file,
    })
}

fn required_str(obj: &Fields, field: &str, label: &str) -> Result<String, ValidationError> {
    match obj.get(field) {
        Some(JsonValue::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Err(ValidationError::new(field, format!("{} is required", label)))
            } else {
                Ok(trimmed.to_string())
            }
        }
        None | Some(JsonValue::Null) => {
            Err(ValidationError::new(field, format!("{} is required", label)))
        }
        Some(_) => Err(ValidationError::new(field, format!("{} must be a string", label))),
    }
}

/// Missing, null and empty-string values all normalize to `None`.
fn optional_str(obj: &Fields, field: &str, label: &str) -> Result<Option<String>, ValidationError> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(None)
            } else {
                Ok(Some(trimmed.to_string()))
            }
        }
        Some(_) => Err(ValidationError::new(field, format!("{} must be a string", label))),
    }
}

fn required_tag<T>(
    obj: &Fields,
    field: &str,
    required_message: &str,
    invalid_message: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<T, ValidationError> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => Err(ValidationError::new(field, required_message)),
        Some(JsonValue::String(s)) if s.trim().is_empty() => {
            Err(ValidationError::new(field, required_message))
        }
        Some(JsonValue::String(s)) => {
            parse(s).ok_or_else(|| ValidationError::new(field, invalid_message))
        }
        Some(_) => Err(ValidationError::new(field, invalid_message)),
    }
}

fn optional_tag<T>(
    obj: &Fields,
    field: &str,
    invalid_message: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<T>, ValidationError> {
    match obj.get(field) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::String(s)) if s.trim().is_empty() => Ok(None),
        Some(JsonValue::String(s)) => parse(s)
            .map(Some)
            .ok_or_else(|| ValidationError::new(field, invalid_message)),
        Some(_) => Err(ValidationError::new(field, invalid_message)),
    }
}

fn required_string_array(
    obj: &Fields,
    field: &str,
    empty_message: &str,
) -> Result<Vec<String>, ValidationError> {
    let items = match obj.get(field) {
        None | Some(JsonValue::Null) => return Err(ValidationError::new(field, empty_message)),
        Some(JsonValue::Array(items)) => items,
        Some(_) => {
            return Err(ValidationError::new(
                field,
                format!("{} must be an array of strings", field),
            ))
        }
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            JsonValue::String(s) if !s.trim().is_empty() => out.push(s.trim().to_string()),
            _ => {
                return Err(ValidationError::new(
                    field,
                    format!("{} must be an array of non-empty strings", field),
                ))
            }
        }
    }
    if out.is_empty() {
        return Err(ValidationError::new(field, empty_message));
    }
    Ok(out)
}

/// Parses an array of enum tags. Absent/null keys map to `None`; emptiness
/// is left for the caller to judge.
fn parse_tag_list<T>(
    value: Option<&JsonValue>,
    field: &str,
    type_message: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Result<Option<Vec<T>>, ValidationError> {
    let items = match value {
        None | Some(JsonValue::Null) => return Ok(None),
        Some(JsonValue::Array(items)) => items,
        Some(_) => return Err(ValidationError::new(field, type_message)),
    };
    let mut out = Vec::with_capacity(items.len());
    for item in items {
        let tag = match item {
            JsonValue::String(s) => s,
            _ => return Err(ValidationError::new(field, type_message)),
        };
        match parse(tag) {
            Some(parsed) => out.push(parsed),
            None => {
                return Err(ValidationError::new(
                    field,
                    format!("Unrecognized value '{}' in {}", tag, field),
                ))
            }
        }
    }
    Ok(Some(out))
}

/// Permissive coercion: non-numeric input defaults to 0 instead of failing,
/// since the form re-displays the value before submission. Negative years
/// are still rejected.
fn coerce_experience_years(value: Option<&JsonValue>) -> Result<i32, ValidationError> {
    let years = match value {
        Some(JsonValue::Number(n)) => match n.as_i64() {
            Some(i) => i,
            None => n.as_f64().map(|f| f.trunc() as i64).unwrap_or(0),
        },
        Some(JsonValue::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    };
    if years < 0 {
        return Err(ValidationError::new(
            "experienceYears",
            "Experience years cannot be negative",
        ));
    }
    Ok(years.min(i32::MAX as i64) as i32)
}

/// Absent counts as unconfirmed rather than malformed; the cross-field rule
/// turns that into the reported violation.
fn coerce_confirmation(value: Option<&JsonValue>) -> Result<bool, ValidationError> {
    match value {
        None | Some(JsonValue::Null) => Ok(false),
        Some(JsonValue::Bool(b)) => Ok(*b),
        Some(JsonValue::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "t" | "1" => Ok(true),
            "false" | "f" | "0" | "" => Ok(false),
            _ => Err(ValidationError::new(
                "confirmAccuracy",
                "Confirmation must be a boolean",
            )),
        },
        Some(_) => Err(ValidationError::new(
            "confirmAccuracy",
            "Confirmation must be a boolean",
        )),
    }
}

fn is_valid_email(s: &str) -> bool {
    if s.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    let mut parts = s.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    true
}

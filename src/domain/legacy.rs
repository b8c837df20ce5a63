//! Compatibility adapter for the older form shape.
//!
//! Early form revisions submitted availability as three independent boolean
//! flags instead of a `preferredTimeSlots` array. The adapter rewrites such
//! a record into the canonical shape before validation, so the validator
//! never branches on which form revision sent the input.

use crate::domain::application::TimeSlot;
use serde_json::Value as JsonValue;

const LEGACY_SLOT_FLAGS: [(&str, TimeSlot); 3] = [
    ("morningAvailable", TimeSlot::Morning),
    ("afternoonAvailable", TimeSlot::Afternoon),
    ("eveningAvailable", TimeSlot::Evening),
];

fn flag_is_set(value: &JsonValue) -> bool {
    match value {
        JsonValue::Bool(b) => *b,
        JsonValue::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Maps the legacy time-slot flags into a `preferredTimeSlots` array when
/// the canonical key is absent. Input without legacy flags passes through
/// unchanged.
pub fn adapt_time_slots(input: &JsonValue) -> JsonValue {
    let obj = match input.as_object() {
        Some(o) => o,
        None => return input.clone(),
    };

    let has_canonical = obj.contains_key("preferredTimeSlots");
    let has_legacy = LEGACY_SLOT_FLAGS.iter().any(|(key, _)| obj.contains_key(*key));
    if has_canonical || !has_legacy {
        return input.clone();
    }

    let slots: Vec<JsonValue> = LEGACY_SLOT_FLAGS
        .iter()
        .filter(|(key, _)| obj.get(*key).map(flag_is_set).unwrap_or(false))
        .map(|(_, slot)| JsonValue::from(slot.as_str()))
        .collect();

    let mut adapted = obj.clone();
    for (key, _) in LEGACY_SLOT_FLAGS.iter() {
        adapted.remove(*key);
    }
    adapted.insert("preferredTimeSlots".to_string(), JsonValue::Array(slots));
    JsonValue::Object(adapted)
}

//! Typed request shape consumed by `generate`, whatever the entry point.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A loosely typed scalar from the request. Numbers may arrive as JSON
/// numbers or as strings; callers decide what to do when they don't parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(i) => Some(*i),
            FieldValue::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            FieldValue::Float(_) => None,
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

/// Text fields accept `null` and read it as empty.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BreakInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub start: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub end: String,
}

impl BreakInput {
    pub fn new(name: &str, start: &str, end: &str) -> Self {
        Self {
            name: name.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub day: String,
    #[serde(default)]
    pub period: Option<FieldValue>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub duration: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub info: String,
}

impl ScheduleItem {
    pub fn new(subject: &str, day: &str, period: &str, duration: &str) -> Self {
        Self {
            subject: subject.to_string(),
            day: day.to_string(),
            period: Some(FieldValue::from(period)),
            duration: duration.to_string(),
            ..Default::default()
        }
    }

    pub fn with_info(mut self, info: &str) -> Self {
        self.info = info.to_string();
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn period_text(&self) -> String {
        self.period.as_ref().map(FieldValue::to_string).unwrap_or_default()
    }
}

/// The whole timetable description: slot table, breaks and classes.
///
/// `slot_settings` holds `slot_<k>` → `HH:MM` and `duration_<k>` → minutes.
/// A bare `<k>` key is also accepted as the start of slot `k`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimetableRequest {
    #[serde(default)]
    pub total_slots: Option<FieldValue>,
    #[serde(default)]
    pub slot_settings: BTreeMap<String, FieldValue>,
    #[serde(default)]
    pub breaks: Vec<BreakInput>,
    #[serde(default)]
    pub schedule_items: Vec<ScheduleItem>,
}

impl TimetableRequest {
    pub fn with_slots(total_slots: i64) -> Self {
        Self {
            total_slots: Some(FieldValue::Int(total_slots)),
            ..Default::default()
        }
    }

    pub fn slot(mut self, k: u32, start: &str, minutes: i64) -> Self {
        self.slot_settings
            .insert(format!("slot_{k}"), FieldValue::from(start));
        self.slot_settings
            .insert(format!("duration_{k}"), FieldValue::Int(minutes));
        self
    }

    pub fn add_break(mut self, b: BreakInput) -> Self {
        self.breaks.push(b);
        self
    }

    pub fn add_item(mut self, item: ScheduleItem) -> Self {
        self.schedule_items.push(item);
        self
    }

    pub fn slot_start(&self, k: u32) -> Option<String> {
        self.slot_settings
            .get(&format!("slot_{k}"))
            .or_else(|| self.slot_settings.get(&k.to_string()))
            .map(FieldValue::to_string)
    }

    pub fn slot_duration(&self, k: u32) -> Option<&FieldValue> {
        self.slot_settings.get(&format!("duration_{k}"))
    }
}

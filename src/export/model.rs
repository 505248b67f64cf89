// src/export/model.rs

use crate::config::defaults::DAYS_ORDER;
use crate::models::{Break, DayTable, DurationType, ScheduleEvent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat, serializable view of a placed class, as carried by `export_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportEvent {
    pub subject: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub info: String,
    pub period: String,
    pub duration_type: DurationType,
    pub color: String,
    pub bg_color: String,
    #[serde(default = "default_colspan")]
    pub colspan: u32,
}

fn default_colspan() -> u32 {
    1
}

impl From<&ScheduleEvent> for ExportEvent {
    fn from(ev: &ScheduleEvent) -> Self {
        Self {
            subject: ev.subject.clone(),
            day: ev.day.clone(),
            start: ev.start.clone(),
            end: ev.end.clone(),
            info: ev.info.clone(),
            period: ev.period.clone(),
            duration_type: ev.duration_type,
            color: ev.color.clone(),
            bg_color: ev.bg_color.clone(),
            colspan: ev.colspan,
        }
    }
}

impl ExportEvent {
    /// `subject\nstart - end[\ninfo]`, the text of a spreadsheet cell.
    pub fn cell_text(&self) -> String {
        let mut text = format!("{}\n{} - {}", self.subject, self.start, self.end);
        if !self.info.is_empty() {
            text.push('\n');
            text.push_str(&self.info);
        }
        text
    }
}

/// Everything the exporters need, taken from a `generate` payload.
/// Unknown payload fields are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub export_data: BTreeMap<String, Vec<ExportEvent>>,
    #[serde(default)]
    pub breaks: Vec<Break>,
    #[serde(default)]
    pub slot_starts: BTreeMap<u32, String>,
    #[serde(default)]
    pub slot_durations: BTreeMap<u32, i64>,
}

impl ExportRequest {
    /// `export_data` in Monday..Saturday order; days outside the week are
    /// dropped.
    pub fn days(&self) -> DayTable<Vec<ExportEvent>> {
        let mut table: DayTable<Vec<ExportEvent>> = DayTable::default();
        for day in DAYS_ORDER {
            if let (Some(slot), Some(events)) = (table.get_mut(day), self.export_data.get(day)) {
                slot.clone_from(events);
            }
        }
        table
    }
}

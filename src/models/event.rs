use crate::models::period::{DurationType, PeriodToken};
use chrono::NaiveTime;
use serde::Serialize;

/// One class occurrence, with its display times and grid span resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleEvent {
    pub subject: String,
    pub day: String,
    pub start: String,
    pub end: String,
    pub info: String,
    pub period: String,
    pub duration_type: DurationType,
    pub color: String,
    pub bg_color: String,
    pub colspan: u32,

    /// Start time, only used to order the list view.
    #[serde(skip)]
    pub sort_key: NaiveTime,
    /// First slot covered.
    #[serde(skip)]
    pub start_slot: u32,
    /// Slots and breaks covered after the first slot.
    #[serde(skip)]
    pub covers: Vec<PeriodToken>,
}

impl ScheduleEvent {
    pub fn token(&self) -> PeriodToken {
        PeriodToken::Slot(self.start_slot)
    }

    /// Folds a second class starting in the same cell into this one.
    /// Subjects are joined, infos joined when present, and the widest span
    /// wins.
    pub fn merge(&mut self, other: &ScheduleEvent) {
        self.subject = format!("{} + {}", self.subject, other.subject);

        if !other.info.is_empty() {
            if self.info.is_empty() {
                self.info = other.info.clone();
            } else {
                self.info = format!("{} + {}", self.info, other.info);
            }
        }

        self.colspan = self.colspan.max(other.colspan);
    }
}

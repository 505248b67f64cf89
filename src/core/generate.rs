//! The generate operation: request in, display and export payload out.

use crate::config::defaults::DAYS_ORDER;
use crate::core::grid::{build_event, list_view, mark_gaps, place_events};
use crate::core::resolver::resolve;
use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportEvent, ExportRequest};
use crate::models::{
    Break, DayGrid, DayTable, Notice, PeriodToken, ScheduleEvent, TimetableRequest,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything needed to display the timetable or export it.
#[derive(Debug, Clone, Serialize)]
pub struct Timetable {
    pub schedule: DayTable<Vec<ScheduleEvent>>,
    pub grid_schedule: DayTable<DayGrid>,
    pub days: [&'static str; 6],
    pub export_data: DayTable<Vec<ExportEvent>>,
    pub breaks: Vec<Break>,
    pub header_times: BTreeMap<u32, String>,
    pub slot_starts: BTreeMap<u32, String>,
    pub slot_durations: BTreeMap<u32, i64>,
    pub periods_order: Vec<PeriodToken>,
}

impl Timetable {
    /// The subset of this payload the exporters consume.
    pub fn export_request(&self) -> ExportRequest {
        ExportRequest {
            export_data: self
                .export_data
                .iter()
                .map(|(day, events)| (day.to_string(), events.clone()))
                .collect(),
            breaks: self.breaks.clone(),
            slot_starts: self.slot_starts.clone(),
            slot_durations: self.slot_durations.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub timetable: Timetable,
    pub notices: Vec<Notice>,
}

/// Builds the timetable for `request`. Any failure is reported as a single
/// [`AppError::Generation`].
pub fn generate(request: &TimetableRequest) -> AppResult<GenerateOutcome> {
    build(request).map_err(AppError::generation)
}

fn build(request: &TimetableRequest) -> AppResult<GenerateOutcome> {
    let mut notices = Vec::new();
    let layout = resolve(request, &mut notices);

    let mut events = Vec::with_capacity(request.schedule_items.len());
    for item in &request.schedule_items {
        if let Some(ev) = build_event(item, &layout, &mut notices)? {
            events.push(ev);
        }
    }

    let mut grid = place_events(&events);
    mark_gaps(&mut grid, &layout.periods_order);

    let export_data: DayTable<Vec<ExportEvent>> =
        grid.map(|day| day.events().map(ExportEvent::from).collect());

    let timetable = Timetable {
        schedule: list_view(&events),
        grid_schedule: grid,
        days: DAYS_ORDER,
        export_data,
        breaks: layout.breaks,
        header_times: layout.header_times,
        slot_starts: layout.slot_starts,
        slot_durations: layout.slot_durations,
        periods_order: layout.periods_order,
    };

    Ok(GenerateOutcome { timetable, notices })
}

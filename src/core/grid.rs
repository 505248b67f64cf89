//! Grid layout engine: places classes on the day-by-period grid, merges
//! classes that start in the same cell, marks covered periods as occupied and
//! fills whatever is left with gaps.

use crate::config::defaults::{DEFAULT_EVENT_COLOR, EVENT_BG_OPACITY, is_known_day};
use crate::core::resolver::SlotLayout;
use crate::errors::{AppError, AppResult};
use crate::models::{
    DayGrid, DayTable, DurationType, GridCell, Notice, PeriodToken, ScheduleEvent, ScheduleItem,
};
use crate::utils::colors::hex_to_rgba;
use crate::utils::time::{add_minutes, format_12h};

/// Reads the starting slot from the raw period text. Non-numeric input falls
/// back to slot 1 and the result is clamped to `1..=total_slots`; numbers too
/// large to parse land in the last slot.
pub fn start_slot(raw: &str, total_slots: u32) -> u32 {
    let parsed = if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_digit()) {
        raw.parse::<u32>().unwrap_or(u32::MAX)
    } else {
        1
    };
    parsed.clamp(1, total_slots.max(1))
}

/// Walks the span of a class from `start` to `end` (inclusive) and returns
/// its visual width plus every period it covers after the first slot.
/// Breaks between two covered slots widen the span by one column each.
pub fn span(layout: &SlotLayout, start: u32, end: u32) -> (u32, Vec<PeriodToken>) {
    let mut colspan = 0;
    let mut covers = Vec::new();

    for slot in start..=end {
        colspan += 1;
        if slot > start {
            covers.push(PeriodToken::Slot(slot));
        }

        if slot < end {
            for (i, _) in layout.breaks_after(slot) {
                colspan += 1;
                covers.push(PeriodToken::Break(i));
            }
        }
    }

    (colspan, covers)
}

/// Builds one event from a submitted row. Returns `None` for blank subjects.
pub fn build_event(
    item: &ScheduleItem,
    layout: &SlotLayout,
    notices: &mut Vec<Notice>,
) -> AppResult<Option<ScheduleEvent>> {
    if item.subject.trim().is_empty() {
        return Ok(None);
    }

    if !is_known_day(&item.day) {
        return Err(AppError::InvalidDay(item.day.clone()));
    }

    let raw_period = item.period_text();
    let start_p = start_slot(&raw_period, layout.total_slots);
    if raw_period != start_p.to_string() {
        notices.push(Notice::PeriodClamped {
            subject: item.subject.clone(),
            raw: raw_period,
            slot: start_p,
        });
    }

    let duration_type = DurationType::from_input(&item.duration);
    let end_p = start_p
        .saturating_add(duration_type.num_slots() - 1)
        .clamp(1, layout.total_slots);

    let t_start = layout.start_time(start_p)?;
    let t_end = add_minutes(layout.start_time(end_p)?, layout.duration(end_p));

    let color = item
        .color
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(DEFAULT_EVENT_COLOR)
        .to_string();

    let (colspan, covers) = span(layout, start_p, end_p);

    Ok(Some(ScheduleEvent {
        subject: item.subject.clone(),
        day: item.day.clone(),
        start: format_12h(t_start),
        end: format_12h(t_end),
        info: item.info.clone(),
        period: start_p.to_string(),
        duration_type,
        bg_color: hex_to_rgba(&color, EVENT_BG_OPACITY),
        color,
        colspan,
        sort_key: t_start,
        start_slot: start_p,
        covers,
    }))
}

/// Places `events` on a fresh grid, in input order.
///
/// A class always owns its starting cell: it merges into a class already
/// starting there and replaces an `Occupied` marker. Covered periods become
/// `Occupied` unless a class starts in them.
pub fn place_events(events: &[ScheduleEvent]) -> DayTable<DayGrid> {
    let mut grid: DayTable<DayGrid> = DayTable::default();

    for ev in events {
        let Some(day) = grid.get_mut(&ev.day) else {
            continue;
        };

        match day.get_mut(ev.token()) {
            Some(GridCell::Event(existing)) => existing.merge(ev),
            _ => day.set(ev.token(), GridCell::Event(ev.clone())),
        }

        for token in &ev.covers {
            if !day.get(*token).is_some_and(GridCell::is_event) {
                day.set(*token, GridCell::Occupied);
            }
        }
    }

    grid
}

/// Marks every teaching period without a cell as a gap.
pub fn mark_gaps(grid: &mut DayTable<DayGrid>, periods_order: &[PeriodToken]) {
    for (_, day) in grid.iter_mut() {
        for token in periods_order.iter().filter(|t| !t.is_break()) {
            if day.get(*token).is_none() {
                day.set(*token, GridCell::Gap);
            }
        }
    }
}

/// Unmerged classes per day, ordered by start time.
pub fn list_view(events: &[ScheduleEvent]) -> DayTable<Vec<ScheduleEvent>> {
    let mut schedule: DayTable<Vec<ScheduleEvent>> = DayTable::default();

    for ev in events {
        if let Some(list) = schedule.get_mut(&ev.day) {
            list.push(ev.clone());
        }
    }

    for (_, list) in schedule.iter_mut() {
        list.sort_by_key(|ev| ev.sort_key);
    }

    schedule
}

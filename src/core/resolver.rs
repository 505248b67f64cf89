//! Turns the raw slot table and break rows into the canonical day layout:
//! slot starts and durations, resolved breaks, the ordered list of periods
//! and the header time ranges.

use crate::config::defaults::{
    DEFAULT_SLOT_DURATION, DEFAULT_TOTAL_SLOTS, MAX_TOTAL_SLOTS, default_slot_start,
};
use crate::errors::AppResult;
use crate::models::{Break, BreakInput, Notice, PeriodToken, TimetableRequest};
use crate::utils::time::{format_12h, format_range, minute_of_day, parse_time, parse_time_strict};
use chrono::NaiveTime;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct SlotLayout {
    pub total_slots: u32,
    /// Start strings as submitted (`HH:MM`), not validated.
    pub slot_starts: BTreeMap<u32, String>,
    pub slot_durations: BTreeMap<u32, i64>,
    pub breaks: Vec<Break>,
    pub periods_order: Vec<PeriodToken>,
    pub header_times: BTreeMap<u32, String>,
}

impl SlotLayout {
    pub fn duration(&self, slot: u32) -> i64 {
        self.slot_durations
            .get(&slot)
            .copied()
            .unwrap_or(DEFAULT_SLOT_DURATION)
    }

    pub fn start_time(&self, slot: u32) -> AppResult<NaiveTime> {
        let raw = self
            .slot_starts
            .get(&slot)
            .map(String::as_str)
            .unwrap_or_else(|| default_slot_start(slot));
        parse_time_strict(raw)
    }

    /// Minute of day at which `slot` ends, without wrapping past midnight.
    fn end_minute(&self, slot: u32) -> AppResult<i64> {
        Ok(minute_of_day(self.start_time(slot)?) + self.duration(slot))
    }

    /// Indices and values of the breaks that follow `slot`, in input order.
    pub fn breaks_after(&self, slot: u32) -> impl Iterator<Item = (usize, &Break)> {
        self.breaks
            .iter()
            .enumerate()
            .filter(move |(_, b)| b.after == slot)
    }
}

pub fn resolve_total_slots(request: &TimetableRequest, notices: &mut Vec<Notice>) -> u32 {
    let Some(raw) = &request.total_slots else {
        return DEFAULT_TOTAL_SLOTS;
    };

    match raw.as_int() {
        Some(n) if n > i64::from(MAX_TOTAL_SLOTS) => {
            notices.push(Notice::TotalSlotsCapped {
                raw: raw.to_string(),
                max: MAX_TOTAL_SLOTS,
            });
            MAX_TOTAL_SLOTS
        }
        Some(n) if n >= 1 => u32::try_from(n).unwrap_or(MAX_TOTAL_SLOTS),
        _ => {
            notices.push(Notice::TotalSlotsDefaulted {
                raw: raw.to_string(),
            });
            DEFAULT_TOTAL_SLOTS
        }
    }
}

/// Builds the full day layout for `request`.
pub fn resolve(request: &TimetableRequest, notices: &mut Vec<Notice>) -> SlotLayout {
    let total_slots = resolve_total_slots(request, notices);

    let mut slot_starts = BTreeMap::new();
    let mut slot_durations = BTreeMap::new();

    for k in 1..=total_slots {
        let start = request
            .slot_start(k)
            .unwrap_or_else(|| default_slot_start(k).to_string());
        slot_starts.insert(k, start);

        let minutes = match request.slot_duration(k) {
            None => DEFAULT_SLOT_DURATION,
            Some(raw) => raw.as_int().unwrap_or_else(|| {
                notices.push(Notice::DurationDefaulted {
                    slot: k,
                    raw: raw.to_string(),
                });
                DEFAULT_SLOT_DURATION
            }),
        };
        slot_durations.insert(k, minutes);
    }

    let mut layout = SlotLayout {
        total_slots,
        slot_starts,
        slot_durations,
        breaks: Vec::new(),
        periods_order: Vec::new(),
        header_times: BTreeMap::new(),
    };

    // ---------------------------
    // Breaks
    // ---------------------------
    for (index, row) in request.breaks.iter().enumerate() {
        match resolve_break(&layout, row, layout.breaks.len()) {
            Ok(b) => layout.breaks.push(b),
            Err(reason) => notices.push(Notice::BreakSkipped {
                index,
                name: row.name.clone(),
                reason,
            }),
        }
    }

    layout.periods_order = periods_order(&layout);
    layout.header_times = header_times(&layout);
    layout
}

/// Resolves one break row, or explains why it has to be skipped.
fn resolve_break(layout: &SlotLayout, row: &BreakInput, id: usize) -> Result<Break, String> {
    let start = parse_time(&row.start).ok_or_else(|| format!("invalid start '{}'", row.start))?;
    let end = parse_time(&row.end).ok_or_else(|| format!("invalid end '{}'", row.end))?;

    let break_minute = minute_of_day(start);
    let mut after = 0;

    for slot in 1..=layout.total_slots {
        let slot_end = layout.end_minute(slot).map_err(|e| e.to_string())?;
        if break_minute >= slot_end {
            after = slot;
        }
    }

    Ok(Break {
        id: PeriodToken::Break(id).to_string(),
        name: row.name.clone(),
        start: format_12h(start),
        end: format_12h(end),
        after,
    })
}

/// Slots in order, each followed by the breaks placed after it; breaks
/// before the first slot come first.
pub fn periods_order(layout: &SlotLayout) -> Vec<PeriodToken> {
    let mut order: Vec<PeriodToken> = layout
        .breaks_after(0)
        .map(|(i, _)| PeriodToken::Break(i))
        .collect();

    for slot in 1..=layout.total_slots {
        order.push(PeriodToken::Slot(slot));
        order.extend(layout.breaks_after(slot).map(|(i, _)| PeriodToken::Break(i)));
    }

    order
}

/// `"08:15 AM - 09:10 AM"` per slot; unparseable starts are passed through.
pub fn header_times(layout: &SlotLayout) -> BTreeMap<u32, String> {
    layout
        .slot_starts
        .iter()
        .map(|(slot, raw)| {
            let text = match parse_time(raw) {
                Some(start) => format_range(start, layout.duration(*slot)),
                None => raw.clone(),
            };
            (*slot, text)
        })
        .collect()
}

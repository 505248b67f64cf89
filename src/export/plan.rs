// src/export/plan.rs

//! Spreadsheet layout, computed independently of the writer library.
//!
//! Column 0 holds the day name; every slot gets one column and each break
//! placed after a slot gets an extra column right after it. Rows and columns
//! are 0-based.

use crate::config::Config;
use crate::config::defaults::{DEFAULT_SLOT_DURATION, DEFAULT_TOTAL_SLOTS};
use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportEvent, ExportRequest};
use crate::models::Break;
use crate::utils::colors::pastel_hex;
use crate::utils::time::{format_range, parse_time};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub enum CellStyle {
    Header,
    Day,
    Break,
    /// Event cell; `fill` is an `RRGGBB` pastel, when the event has a colour.
    Event { fill: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedCell {
    pub row: u32,
    pub col: u16,
    pub text: String,
    pub style: CellStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRange {
    pub row: u32,
    pub first_col: u16,
    pub last_col: u16,
}

impl MergeRange {
    pub fn contains(&self, row: u32, col: u16) -> bool {
        self.row == row && (self.first_col..=self.last_col).contains(&col)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan {
    pub sheet_name: String,
    pub cells: Vec<PlannedCell>,
    /// Event cells that span more than one column. The event text lives in
    /// the matching `cells` entry at `first_col`.
    pub merges: Vec<MergeRange>,
    pub column_widths: Vec<(u16, f64)>,
    pub last_row: u32,
    pub last_col: u16,
}

impl SheetPlan {
    pub fn cell(&self, row: u32, col: u16) -> Option<&PlannedCell> {
        self.cells.iter().find(|c| c.row == row && c.col == col)
    }

    pub fn merge_at(&self, row: u32, col: u16) -> Option<&MergeRange> {
        self.merges.iter().find(|m| m.contains(row, col))
    }
}

/// Highest numeric slot key, never below the default slot count.
pub fn export_total_slots(slot_starts: &BTreeMap<u32, String>) -> u32 {
    slot_starts
        .keys()
        .copied()
        .max()
        .unwrap_or(0)
        .max(DEFAULT_TOTAL_SLOTS)
}

/// Slot key → column index.
pub fn column_map(total_slots: u32, breaks: &[Break]) -> AppResult<(BTreeMap<String, u16>, u16)> {
    let mut p_map = BTreeMap::new();
    let mut col: u16 = 1;

    for slot in 1..=total_slots {
        p_map.insert(slot.to_string(), col);
        let width = 1 + breaks.iter().filter(|b| b.after == slot).count();
        col = u16::try_from(width)
            .ok()
            .and_then(|w| col.checked_add(w))
            .ok_or_else(|| AppError::Export("timetable is too wide for a worksheet".into()))?;
    }

    Ok((p_map, col))
}

fn header_row(request: &ExportRequest, total_slots: u32) -> AppResult<Vec<String>> {
    let mut headers = vec!["Day".to_string()];

    for slot in 1..=total_slots {
        match request.slot_starts.get(&slot) {
            Some(raw) => {
                let start = parse_time(raw).ok_or_else(|| {
                    AppError::Export(format!("slot {slot} has an invalid start time '{raw}'"))
                })?;
                let minutes = request
                    .slot_durations
                    .get(&slot)
                    .copied()
                    .unwrap_or(DEFAULT_SLOT_DURATION);
                headers.push(format_range(start, minutes));
            }
            None => headers.push(format!("Period {slot}")),
        }

        headers.extend(
            request
                .breaks
                .iter()
                .filter(|b| b.after == slot)
                .map(Break::time_range),
        );
    }

    Ok(headers)
}

pub fn plan_sheet(request: &ExportRequest, cfg: &Config) -> AppResult<SheetPlan> {
    let total_slots = export_total_slots(&request.slot_starts);
    let (p_map, next_col) = column_map(total_slots, &request.breaks)?;
    let last_col = next_col - 1;

    let mut cells = Vec::new();
    let mut merges = Vec::new();

    // ---------------------------
    // Header
    // ---------------------------
    for (col, text) in header_row(request, total_slots)?.into_iter().enumerate() {
        cells.push(PlannedCell {
            row: 0,
            col: u16::try_from(col).map_err(AppError::export)?,
            text,
            style: CellStyle::Header,
        });
    }

    // ---------------------------
    // One row per day
    // ---------------------------
    let mut row: u32 = 1;
    for (day, events) in request.days().iter() {
        cells.push(PlannedCell {
            row,
            col: 0,
            text: day.to_string(),
            style: CellStyle::Day,
        });

        // break labels
        for slot in 1..=total_slots {
            let Some(&slot_col) = p_map.get(&slot.to_string()) else {
                continue;
            };
            for (offset, b) in (1u16..).zip(request.breaks.iter().filter(|b| b.after == slot)) {
                cells.push(PlannedCell {
                    row,
                    col: slot_col + offset,
                    text: b.name.clone(),
                    style: CellStyle::Break,
                });
            }
        }

        // events: a later event on the same column replaces the earlier one
        let mut placed: BTreeMap<u16, &ExportEvent> = BTreeMap::new();
        for ev in events {
            if let Some(&col) = p_map.get(&ev.period) {
                placed.insert(col, ev);
            }
        }

        let starts: Vec<u16> = placed.keys().copied().collect();
        for (i, (&col, ev)) in placed.iter().enumerate() {
            cells.push(PlannedCell {
                row,
                col,
                text: ev.cell_text(),
                style: CellStyle::Event {
                    fill: (!ev.color.is_empty()).then(|| pastel_hex(&ev.color)),
                },
            });

            if ev.colspan > 1 {
                let span = u16::try_from(ev.colspan - 1).unwrap_or(u16::MAX);
                let next_start = starts.get(i + 1).map(|c| c - 1).unwrap_or(last_col);
                let end = col.saturating_add(span).min(last_col).min(next_start);
                if end > col {
                    merges.push(MergeRange {
                        row,
                        first_col: col,
                        last_col: end,
                    });
                }
            }
        }

        row += 1;
    }

    // cells hidden under a merge keep no content of their own
    cells.retain(|c| {
        !merges
            .iter()
            .any(|m| m.contains(c.row, c.col) && c.col != m.first_col)
    });

    let mut column_widths = vec![(0, cfg.day_column_width)];
    column_widths.extend((1..=last_col).map(|c| (c, cfg.slot_column_width)));

    Ok(SheetPlan {
        sheet_name: cfg.sheet_name.clone(),
        cells,
        merges,
        column_widths,
        last_row: row - 1,
        last_col,
    })
}

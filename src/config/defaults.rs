//! Fixed tables shared by the resolver, the grid engine and the exporters.

/// Slot count used when `total_slots` is missing, unparseable or below 1.
pub const DEFAULT_TOTAL_SLOTS: u32 = 2;

/// Upper bound on `total_slots`: one worksheet column per slot after the
/// day column.
pub const MAX_TOTAL_SLOTS: u32 = 16_383;

/// Length of a slot in minutes when `duration_<k>` is missing or invalid.
pub const DEFAULT_SLOT_DURATION: i64 = 55;

/// Start times for the first six slots.
pub const DEFAULT_SLOT_STARTS: [&str; 6] = ["08:15", "09:10", "10:05", "11:30", "12:25", "13:20"];

/// Start time for any slot past the default table.
pub const FALLBACK_SLOT_START: &str = "00:00";

pub const DEFAULT_EVENT_COLOR: &str = "#007bff";

pub const DAYS_ORDER: [&str; 6] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// `HH:MM`, 24-hour.
pub const INPUT_TIME_FORMAT: &str = "%H:%M";

/// `08:15 AM`
pub const DISPLAY_TIME_FORMAT: &str = "%I:%M %p";

/// Opacity of the rgba background attached to every event.
pub const EVENT_BG_OPACITY: f64 = 0.15;

/// Weight of the event colour when blending it with white for XLSX fills.
pub const PASTEL_ALPHA: f64 = 0.25;

/// XLSX fill used when the event colour is not a 6-digit hex value.
pub const FALLBACK_PASTEL: &str = "E3F2FD";

pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

pub const DEFAULT_EXPORT_FILENAME: &str = "timetable.xlsx";

pub fn default_slot_start(slot: u32) -> &'static str {
    usize::try_from(slot)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| DEFAULT_SLOT_STARTS.get(i))
        .copied()
        .unwrap_or(FALLBACK_SLOT_START)
}

pub fn is_known_day(day: &str) -> bool {
    DAYS_ORDER.contains(&day)
}

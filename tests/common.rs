#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chronosync::models::{BreakInput, ScheduleItem, TimetableRequest};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn chronosync() -> Command {
    cargo_bin_cmd!("chronosync")
}

/// Create a temporary file path inside the system temp dir and remove any
/// existing file with that name
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("chronosync_{}.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Config path that is never created, so defaults are used
pub fn temp_config(name: &str) -> String {
    temp_out(&format!("{name}_config"), "conf")
}

/// Two back-to-back 55-minute slots at 08:15 and 09:10, no breaks
pub fn two_slot_request() -> TimetableRequest {
    TimetableRequest::with_slots(2)
        .slot(1, "08:15", 55)
        .slot(2, "09:10", 55)
}

/// Four slots with a break after slot 2
pub fn four_slot_request() -> TimetableRequest {
    TimetableRequest::with_slots(4)
        .slot(1, "08:00", 50)
        .slot(2, "08:50", 50)
        .slot(3, "10:00", 50)
        .slot(4, "10:50", 50)
        .add_break(BreakInput::new("Recess", "09:40", "10:00"))
}

pub fn item(subject: &str, day: &str, period: &str, duration: &str) -> ScheduleItem {
    ScheduleItem::new(subject, day, period, duration)
}

/// Write a request as JSON to a temp file and return its path
pub fn write_request(name: &str, request: &TimetableRequest) -> String {
    let path = temp_out(name, "json");
    let json = serde_json::to_string_pretty(request).expect("serialize request");
    fs::write(&path, json).expect("write request");
    path
}

mod common;

use chronosync::core::generate;
use chronosync::errors::{AppError, ErrorStatus};
use chronosync::models::{FieldValue, TimetableRequest};
use common::{four_slot_request, item, two_slot_request};
use serde_json::{Value, json};

fn payload(request: &TimetableRequest) -> Value {
    let outcome = generate(request).expect("generate");
    serde_json::to_value(&outcome.timetable).expect("serialize")
}

#[test]
fn test_payload_carries_all_sections() {
    let v = payload(&two_slot_request());

    for key in [
        "schedule",
        "grid_schedule",
        "days",
        "export_data",
        "breaks",
        "header_times",
        "slot_starts",
        "slot_durations",
        "periods_order",
    ] {
        assert!(v.get(key).is_some(), "missing {key}");
    }

    assert_eq!(
        v["days"],
        json!(["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"])
    );
    assert_eq!(v["slot_starts"], json!({"1": "08:15", "2": "09:10"}));
    assert_eq!(v["slot_durations"], json!({"1": 55, "2": 55}));
    assert_eq!(v["header_times"]["2"], "09:10 AM - 10:05 AM");
}

#[test]
fn test_grid_cells_serialize_as_event_marker_or_gap() {
    let request = four_slot_request().add_item(item("Physics", "Monday", "2", "lab"));
    let v = payload(&request);
    let monday = &v["grid_schedule"]["Monday"];

    assert_eq!(monday["1"], json!({"is_gap": true, "colspan": 1}));
    assert_eq!(monday["2"]["subject"], "Physics");
    assert_eq!(monday["2"]["colspan"], 3);
    assert_eq!(monday["2"]["duration_type"], "lab");
    assert_eq!(monday["break_0"], "occupied");
    assert_eq!(monday["3"], "occupied");
    assert_eq!(monday["4"], json!({"is_gap": true, "colspan": 1}));
    assert!(monday["2"].get("sort_key").is_none());
}

#[test]
fn test_lab_example_exports_single_entry() {
    let request = two_slot_request().add_item(item("Math", "Monday", "1", "lab"));
    let v = payload(&request);

    let monday = v["export_data"]["Monday"].as_array().unwrap();
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0]["subject"], "Math");
    assert_eq!(monday[0]["period"], "1");
    assert_eq!(monday[0]["colspan"], 2);
    assert_eq!(monday[0]["end"], "10:05 AM");
    assert!(monday[0].get("sort_key").is_none());

    assert_eq!(v["export_data"]["Tuesday"], json!([]));
}

#[test]
fn test_export_data_follows_grid_insertion_order() {
    let request = four_slot_request()
        .add_item(item("Third", "Monday", "3", "single"))
        .add_item(item("First", "Monday", "1", "single"));
    let v = payload(&request);

    let subjects: Vec<&str> = v["export_data"]["Monday"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["subject"].as_str().unwrap())
        .collect();
    assert_eq!(subjects, vec!["Third", "First"]);

    let listed: Vec<&str> = v["schedule"]["Monday"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["subject"].as_str().unwrap())
        .collect();
    assert_eq!(listed, vec!["First", "Third"]);
}

#[test]
fn test_numeric_period_is_accepted() {
    let mut entry = item("Chemistry", "Friday", "", "single");
    entry.period = Some(FieldValue::Int(2));
    let v = payload(&two_slot_request().add_item(entry));

    assert_eq!(v["grid_schedule"]["Friday"]["2"]["subject"], "Chemistry");
}

#[test]
fn test_request_parses_from_loose_json() {
    let raw = json!({
        "total_slots": "3",
        "slot_settings": {"slot_1": "08:00", "duration_1": "45", "duration_2": "abc"},
        "breaks": [{"name": "Snack", "start": "08:45", "end": "09:00"}, {"name": "Odd"}],
        "schedule_items": [
            {"subject": "History", "color": "#ff8800", "day": "Monday", "period": "1", "duration": "lecture", "info": ""}
        ]
    });
    let request: TimetableRequest = serde_json::from_value(raw).unwrap();
    let outcome = generate(&request).unwrap();
    let t = &outcome.timetable;

    assert_eq!(t.slot_durations[&1], 45);
    assert_eq!(t.slot_durations[&2], 55);
    assert_eq!(t.breaks.len(), 1);
    assert_eq!(t.breaks[0].after, 1);
    assert_eq!(outcome.notices.len(), 2);

    let ev = &t.export_data.get("Monday").unwrap()[0];
    assert_eq!(ev.start, "08:00 AM");
    assert_eq!(ev.end, "08:45 AM");
}

#[test]
fn test_null_optional_fields_are_read_as_empty() {
    let raw = r##"{
        "total_slots": 2,
        "breaks": [{"name": null, "start": "09:10", "end": "09:15"}],
        "schedule_items": [
            {"subject": "Math", "color": null, "day": "Monday", "period": null, "duration": null, "info": null}
        ]
    }"##;
    let request: TimetableRequest = serde_json::from_str(raw).unwrap();
    assert_eq!(request.schedule_items[0].info, "");
    assert_eq!(request.breaks[0].name, "");

    let outcome = generate(&request).unwrap();
    let ev = &outcome.timetable.export_data.get("Monday").unwrap()[0];
    assert_eq!(ev.info, "");
    assert_eq!(ev.period, "1");
    assert_eq!(ev.colspan, 1);
    assert_eq!(ev.color, "#007bff");
    assert_eq!(outcome.timetable.breaks[0].after, 1);
}

#[test]
fn test_bad_slot_start_for_an_event_is_a_client_error() {
    let mut request = two_slot_request().add_item(item("Math", "Monday", "2", "single"));
    request
        .slot_settings
        .insert("slot_2".into(), FieldValue::from("half past nine"));

    let err = generate(&request).unwrap_err();
    assert!(matches!(err, AppError::Generation(_)));
    assert_eq!(err.status(), ErrorStatus::ClientError);
    assert_eq!(err.exit_code(), 2);
}

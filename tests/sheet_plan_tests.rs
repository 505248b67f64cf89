mod common;

use chronosync::config::Config;
use chronosync::config::defaults::DAYS_ORDER;
use chronosync::core::generate;
use chronosync::errors::AppError;
use chronosync::export::plan::{CellStyle, MergeRange, plan_sheet};
use chronosync::export::{ExportEvent, ExportFormat, ExportLogic, ExportRequest};
use chronosync::models::TimetableRequest;
use common::{four_slot_request, item, two_slot_request};
use std::collections::BTreeMap;

fn export_request(request: &TimetableRequest) -> ExportRequest {
    generate(request).unwrap().timetable.export_request()
}

fn event(subject: &str, period: &str, colspan: u32) -> ExportEvent {
    ExportEvent {
        subject: subject.into(),
        day: "Monday".into(),
        start: "08:00 AM".into(),
        end: "08:50 AM".into(),
        period: period.into(),
        colspan,
        ..Default::default()
    }
}

fn bare_request(slots: &[(u32, &str)], monday: Vec<ExportEvent>) -> ExportRequest {
    ExportRequest {
        export_data: BTreeMap::from([("Monday".to_string(), monday)]),
        slot_starts: slots.iter().map(|(k, s)| (*k, s.to_string())).collect(),
        ..Default::default()
    }
}

#[test]
fn test_header_has_slot_and_break_columns() {
    let plan = plan_sheet(&export_request(&four_slot_request()), &Config::default()).unwrap();

    let header: Vec<&str> = (0..=plan.last_col)
        .map(|c| plan.cell(0, c).unwrap().text.as_str())
        .collect();
    assert_eq!(
        header,
        vec![
            "Day",
            "08:00 AM - 08:50 AM",
            "08:50 AM - 09:40 AM",
            "09:40 AM - 10:00 AM",
            "10:00 AM - 10:50 AM",
            "10:50 AM - 11:40 AM",
        ]
    );
    assert!(
        (0..=plan.last_col).all(|c| plan.cell(0, c).unwrap().style == CellStyle::Header)
    );
}

#[test]
fn test_one_row_per_day_with_break_labels() {
    let plan = plan_sheet(&export_request(&four_slot_request()), &Config::default()).unwrap();

    assert_eq!(plan.last_row, 6);
    for (row, day) in (1u32..).zip(DAYS_ORDER) {
        let day_cell = plan.cell(row, 0).unwrap();
        assert_eq!(day_cell.text, day);
        assert_eq!(day_cell.style, CellStyle::Day);

        let label = plan.cell(row, 3).unwrap();
        assert_eq!(label.text, "Recess");
        assert_eq!(label.style, CellStyle::Break);
    }
}

#[test]
fn test_lab_across_break_is_merged_over_the_break_label() {
    let request = four_slot_request()
        .add_item(item("Physics", "Monday", "2", "lab").with_info("Lab B"));
    let plan = plan_sheet(&export_request(&request), &Config::default()).unwrap();

    assert_eq!(
        plan.merges,
        vec![MergeRange {
            row: 1,
            first_col: 2,
            last_col: 4
        }]
    );

    let cell = plan.cell(1, 2).unwrap();
    assert_eq!(cell.text, "Physics\n08:50 AM - 10:50 AM\nLab B");
    // covered by the merge
    assert!(plan.cell(1, 3).is_none());
    // other days keep their label
    assert_eq!(plan.cell(2, 3).unwrap().text, "Recess");
}

#[test]
fn test_event_fill_is_pastel_of_its_colour() {
    let request = two_slot_request().add_item(item("Math", "Tuesday", "1", "single"));
    let plan = plan_sheet(&export_request(&request), &Config::default()).unwrap();

    let cell = plan.cell(2, 1).unwrap();
    assert_eq!(
        cell.style,
        CellStyle::Event {
            fill: Some("BFDEFF".into())
        }
    );
}

#[test]
fn test_invalid_colour_falls_back_to_light_blue() {
    let mut ev = event("Odd", "1", 1);
    ev.color = "not a colour".into();
    let plan = plan_sheet(&bare_request(&[(1, "08:00")], vec![ev]), &Config::default()).unwrap();

    assert_eq!(
        plan.cell(1, 1).unwrap().style,
        CellStyle::Event {
            fill: Some("E3F2FD".into())
        }
    );
}

#[test]
fn test_merge_stops_before_next_event() {
    let request = bare_request(
        &[(1, "08:00"), (2, "08:50"), (3, "09:40"), (4, "10:30")],
        vec![event("Long", "1", 3), event("Next", "3", 1)],
    );
    let plan = plan_sheet(&request, &Config::default()).unwrap();

    assert_eq!(
        plan.merges,
        vec![MergeRange {
            row: 1,
            first_col: 1,
            last_col: 2
        }]
    );
    assert!(plan.cell(1, 3).unwrap().text.starts_with("Next"));
}

#[test]
fn test_merge_is_clamped_to_last_column() {
    let request = bare_request(&[(1, "08:00"), (2, "08:50")], vec![event("Wide", "2", 3)]);
    let plan = plan_sheet(&request, &Config::default()).unwrap();

    assert_eq!(plan.last_col, 2);
    assert!(plan.merges.is_empty());
    assert!(plan.cell(1, 2).is_some());
}

#[test]
fn test_later_event_on_same_column_wins() {
    let request = bare_request(
        &[(1, "08:00"), (2, "08:50")],
        vec![event("First", "1", 1), event("Second", "1", 1)],
    );
    let plan = plan_sheet(&request, &Config::default()).unwrap();

    assert!(plan.cell(1, 1).unwrap().text.starts_with("Second"));
}

#[test]
fn test_missing_slot_gets_placeholder_header() {
    let request = bare_request(&[(1, "08:00"), (3, "10:00")], vec![]);
    let plan = plan_sheet(&request, &Config::default()).unwrap();

    assert_eq!(plan.last_col, 3);
    assert_eq!(plan.cell(0, 2).unwrap().text, "Period 2");
}

#[test]
fn test_invalid_slot_start_is_an_export_error() {
    let request = bare_request(&[(1, "nine o'clock")], vec![]);
    let err = plan_sheet(&request, &Config::default()).unwrap_err();

    assert!(matches!(err, AppError::Export(_)));
}

#[test]
fn test_column_widths_and_sheet_name_come_from_config() {
    let cfg = Config {
        sheet_name: "Term 1".into(),
        day_column_width: 12.0,
        slot_column_width: 25.0,
        ..Default::default()
    };
    let plan = plan_sheet(&export_request(&two_slot_request()), &cfg).unwrap();

    assert_eq!(plan.sheet_name, "Term 1");
    assert_eq!(plan.column_widths, vec![(0, 12.0), (1, 25.0), (2, 25.0)]);
}

#[test]
fn test_payload_json_is_accepted_as_export_request() {
    let request = four_slot_request().add_item(item("Physics", "Monday", "2", "lab"));
    let outcome = generate(&request).unwrap();
    let payload = serde_json::to_string(&outcome.timetable).unwrap();

    let parsed: ExportRequest = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed.breaks, outcome.timetable.breaks);
    assert_eq!(parsed.slot_starts, outcome.timetable.slot_starts);
    assert_eq!(parsed.export_data["Monday"][0].colspan, 3);

    let direct = plan_sheet(&outcome.timetable.export_request(), &Config::default()).unwrap();
    let reparsed = plan_sheet(&parsed, &Config::default()).unwrap();
    assert_eq!(direct, reparsed);
}

#[test]
fn test_render_json_and_csv() {
    let request = two_slot_request().add_item(item("Math", "Wednesday", "1", "lab"));
    let export = export_request(&request);
    let cfg = Config::default();

    let json = ExportLogic::render(&export, ExportFormat::Json, &cfg).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
    assert_eq!(value["Wednesday"][0]["subject"], "Math");
    assert_eq!(value["Monday"], serde_json::json!([]));

    let csv = ExportLogic::render(&export, ExportFormat::Csv, &cfg).unwrap();
    let text = String::from_utf8(csv).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("subject,day,start,end,info,period,duration_type,color,bg_color,colspan")
    );
    let row = lines.next().unwrap();
    assert!(row.starts_with("Math,Wednesday,08:15 AM,10:05 AM,,1,lab,#007bff,"));
    assert!(row.ends_with(",2"));
    assert!(lines.next().is_none());
}

#[cfg(feature = "xlsx")]
#[test]
fn test_render_xlsx_produces_a_zip_container() {
    let request = four_slot_request().add_item(item("Physics", "Monday", "2", "lab"));
    let bytes =
        ExportLogic::render(&export_request(&request), ExportFormat::Xlsx, &Config::default())
            .unwrap();

    assert!(bytes.len() > 100);
    assert_eq!(&bytes[..2], b"PK");
}

#[cfg(not(feature = "xlsx"))]
#[test]
fn test_render_xlsx_reports_missing_capability() {
    let err = ExportLogic::render(
        &export_request(&two_slot_request()),
        ExportFormat::Xlsx,
        &Config::default(),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::CapabilityMissing(_)));
}

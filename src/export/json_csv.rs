// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{ExportEvent, ExportRequest};

/// `export_data` as pretty JSON, days in week order.
pub(crate) fn render_json(request: &ExportRequest) -> AppResult<Vec<u8>> {
    Ok(serde_json::to_vec_pretty(&request.days())?)
}

/// One CSV row per exported class, days in week order.
pub(crate) fn render_csv(request: &ExportRequest) -> AppResult<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let days = request.days();
    let events: Vec<&ExportEvent> = days.iter().flat_map(|(_, evs)| evs.iter()).collect();

    for item in events {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))
}

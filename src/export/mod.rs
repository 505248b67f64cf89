// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod model;
pub mod plan;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use model::{ExportEvent, ExportRequest};

use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use clap::ValueEnum;
use std::fs;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Json,
    Csv,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => crate::config::defaults::XLSX_CONTENT_TYPE,
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
        }
    }
}

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Renders the timetable in `format` and returns the file contents.
    pub fn render(request: &ExportRequest, format: ExportFormat, cfg: &Config) -> AppResult<Vec<u8>> {
        match format {
            ExportFormat::Xlsx => xlsx::render_xlsx(&plan::plan_sheet(request, cfg)?),
            ExportFormat::Json => json_csv::render_json(request),
            ExportFormat::Csv => json_csv::render_csv(request),
        }
    }

    /// Renders and writes the export to `path`.
    pub fn export(
        request: &ExportRequest,
        format: ExportFormat,
        path: &Path,
        force: bool,
        cfg: &Config,
    ) -> AppResult<()> {
        info(format!(
            "Exporting to {} ({}): {}",
            format.as_str().to_uppercase(),
            format.content_type(),
            path.display()
        ));

        ensure_writable(path, force)?;
        let bytes = Self::render(request, format, cfg)?;
        fs::write(path, bytes)?;

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(())
    }
}

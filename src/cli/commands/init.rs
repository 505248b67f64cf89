use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config::defaults::DEFAULT_SLOT_STARTS;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::models::{BreakInput, ScheduleItem, TimetableRequest};
use crate::ui::messages::success;
use crate::utils::path::{expand_tilde, is_yaml};
use std::fs;

/// A small timetable that exercises a break and a double period.
pub fn sample_request() -> TimetableRequest {
    let mut request = TimetableRequest::with_slots(DEFAULT_SLOT_STARTS.len() as i64);
    for (k, start) in (1u32..).zip(DEFAULT_SLOT_STARTS) {
        request = request.slot(k, start, 55);
    }

    request
        .add_break(BreakInput::new("Recess", "11:00", "11:30"))
        .add_item(
            ScheduleItem::new("Mathematics", "Monday", "1", "single")
                .with_info("Room 101")
                .with_color("#6366f1"),
        )
        .add_item(
            ScheduleItem::new("Chemistry", "Monday", "3", "lab")
                .with_info("Lab B")
                .with_color("#22c55e"),
        )
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Init { file, force } = &cli.command {
        let path = expand_tilde(file);
        ensure_writable(&path, *force)?;

        let request = sample_request();
        let content = if is_yaml(&path) {
            serde_yaml::to_string(&request)?
        } else {
            serde_json::to_string_pretty(&request)?
        };
        fs::write(&path, content)?;
        success(format!("Sample timetable: {}", path.display()));

        let config_path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);
        if !config_path.exists() {
            cfg.save(&config_path)?;
            success(format!("Config file: {}", config_path.display()));
        }
    }
    Ok(())
}

use crate::cli::commands::generate_from_file;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config::defaults::is_known_day;
use crate::core::generate::Timetable;
use crate::errors::{AppError, AppResult};
use crate::models::{DayGrid, GridCell, PeriodToken, ScheduleEvent};
use crate::ui::messages::header;
use crate::utils::colors::{dim, paint};
use crate::utils::table::{Column, Table, TableCell};

const DAY_COLUMN_WIDTH: usize = 10;
const BREAK_COLUMN_WIDTH: usize = 8;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { input, list, day } = &cli.command {
        if let Some(d) = day
            && !is_known_day(d)
        {
            return Err(AppError::InvalidDay(d.clone()));
        }

        let outcome = generate_from_file(input, cli.verbose)?;
        let timetable = &outcome.timetable;
        let wanted = |d: &str| day.as_deref().is_none_or(|w| w == d);

        if *list {
            print_list(timetable, &wanted);
        } else {
            print!("{}", render_grid(timetable, cfg, &wanted));
        }
    }
    Ok(())
}

fn event_text(ev: &ScheduleEvent) -> String {
    let mut text = format!("{}\n{} - {}", paint(&ev.subject, &ev.color), ev.start, ev.end);
    if !ev.info.is_empty() {
        text.push('\n');
        text.push_str(&dim(&ev.info));
    }
    text
}

fn break_name(timetable: &Timetable, index: usize) -> String {
    timetable
        .breaks
        .get(index)
        .map(|b| b.name.clone())
        .unwrap_or_default()
}

fn grid_row(timetable: &Timetable, day: &str, grid: &DayGrid, cfg: &Config) -> Vec<TableCell> {
    let mut row = vec![TableCell::new(day)];

    for token in &timetable.periods_order {
        match (token, grid.get(*token)) {
            (_, Some(GridCell::Occupied)) => {}
            (_, Some(GridCell::Event(ev))) => {
                row.push(TableCell::spanning(event_text(ev), ev.colspan as usize));
            }
            (_, Some(GridCell::Gap)) => {
                let mark = if cfg.show_gaps { dim("·") } else { String::new() };
                row.push(TableCell::new(mark));
            }
            (PeriodToken::Break(i), None) => {
                row.push(TableCell::new(dim(&break_name(timetable, *i))));
            }
            (PeriodToken::Slot(_), None) => row.push(TableCell::new("")),
        }
    }

    row
}

/// Day-by-period grid; classes spanning several periods take several columns.
pub fn render_grid(timetable: &Timetable, cfg: &Config, wanted: &dyn Fn(&str) -> bool) -> String {
    let slot_width = cfg.slot_column_width.max(1.0) as usize;

    let mut columns = vec![Column {
        header: "Day".to_string(),
        width: DAY_COLUMN_WIDTH,
    }];
    for token in &timetable.periods_order {
        columns.push(match token {
            PeriodToken::Slot(k) => Column {
                header: format!(
                    "SLOT {k}\n{}",
                    timetable
                        .header_times
                        .get(k)
                        .map(String::as_str)
                        .unwrap_or("--:--")
                ),
                width: slot_width,
            },
            PeriodToken::Break(_) => Column {
                header: "BREAK".to_string(),
                width: BREAK_COLUMN_WIDTH,
            },
        });
    }

    let separator = cfg.separator_char.chars().next().unwrap_or('-');
    let mut table = Table::new(columns, separator);

    for (day, grid) in timetable.grid_schedule.iter() {
        if wanted(day) {
            table.add_row(grid_row(timetable, day, grid, cfg));
        }
    }

    table.render()
}

fn print_list(timetable: &Timetable, wanted: &dyn Fn(&str) -> bool) {
    for (day, events) in timetable.schedule.iter() {
        if !wanted(day) || events.is_empty() {
            continue;
        }

        header(day);
        for ev in events {
            let info = if ev.info.is_empty() {
                String::new()
            } else {
                format!(" ({})", ev.info)
            };
            println!(
                "  {} - {}  {}{}",
                ev.start,
                ev.end,
                paint(&ev.subject, &ev.color),
                dim(&info)
            );
        }
        println!();
    }
}

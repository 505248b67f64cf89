use crate::cli::commands::generate_from_file;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ensure_writable;
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;
use std::fs;

pub fn handle(cli: &Cli, _cfg: &Config) -> AppResult<()> {
    if let Commands::Generate {
        input,
        output,
        force,
    } = &cli.command
    {
        let outcome = generate_from_file(input, cli.verbose)?;
        let payload = serde_json::to_string_pretty(&outcome.timetable)?;

        match output {
            Some(file) => {
                let path = expand_tilde(file);
                ensure_writable(&path, *force)?;
                fs::write(&path, payload)?;
                success(format!("Timetable written to {}", path.display()));
            }
            None => println!("{payload}"),
        }
    }
    Ok(())
}

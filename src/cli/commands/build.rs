use crate::cli::commands::generate_from_file;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Build {
        input,
        file,
        format,
        force,
    } = &cli.command
    {
        let outcome = generate_from_file(input, cli.verbose)?;
        let request = outcome.timetable.export_request();
        ExportLogic::export(&request, *format, &expand_tilde(file), *force, cfg)?;
    }
    Ok(())
}

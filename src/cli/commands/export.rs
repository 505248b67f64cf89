use crate::cli::commands::read_document;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportRequest};
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        file,
        format,
        force,
    } = &cli.command
    {
        let request: ExportRequest = read_document(input)?;
        ExportLogic::export(&request, *format, &expand_tilde(file), *force, cfg)?;
    }
    Ok(())
}

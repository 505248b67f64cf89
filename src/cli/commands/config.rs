use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = &cli.command
    {
        let path = cli
            .config
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(Config::config_file);

        // ---- PRINT CONFIG ----
        if *print_config {
            info(format!("Current configuration ({}):", path.display()));
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}; defaults are in use.",
                    path.display()
                ));
                return Ok(());
            }

            let missing = Config::missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                for field in missing {
                    warning(format!("Missing field '{field}', default value is used."));
                }
            }
        }
    }

    Ok(())
}

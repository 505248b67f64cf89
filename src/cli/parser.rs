use crate::config::defaults::DEFAULT_EXPORT_FILENAME;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for chronosync
#[derive(Parser)]
#[command(
    name = "chronosync",
    version = env!("CARGO_PKG_VERSION"),
    about = "Lay out a weekly class timetable as a day-by-period grid and export it to XLSX",
    long_about = None
)]
pub struct Cli {
    /// Use a specific config file instead of ~/.chronosync/chronosync.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Report defaulted fields and skipped breaks
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a sample timetable request and the default configuration
    Init {
        #[arg(long, value_name = "FILE", default_value = "timetable.json")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the configuration in use")]
        print_config: bool,

        #[arg(long = "check", help = "Check the configuration file for missing fields")]
        check: bool,
    },

    /// Build the grid, list view and export data from a request (JSON or YAML)
    Generate {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        /// Write the payload here instead of stdout
        #[arg(long, short = 'o', value_name = "FILE")]
        output: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export a payload produced by `generate`
    Export {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long, value_name = "FILE", default_value = DEFAULT_EXPORT_FILENAME)]
        file: String,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Generate and export in one step
    Build {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long, value_name = "FILE", default_value = DEFAULT_EXPORT_FILENAME)]
        file: String,

        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the timetable in the terminal
    Show {
        #[arg(long, short = 'i', value_name = "FILE")]
        input: String,

        #[arg(long = "list", help = "Chronological list per day instead of the grid")]
        list: bool,

        #[arg(long, value_name = "DAY", help = "Only show one day (e.g. Monday)")]
        day: Option<String>,
    },
}

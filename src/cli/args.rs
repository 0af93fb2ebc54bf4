use clap::Parser;
use std::path::PathBuf;

use crate::io::DataFiles;

/// Track gym members, packages and payments from the terminal
#[derive(Parser, Debug)]
#[command(name = "gym-ledger")]
#[command(about = "Track gym members, packages and payments from the terminal", long_about = None)]
pub struct CliArgs {
    /// Directory holding packages.txt, members.txt and payments.txt
    #[arg(
        long = "data-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory holding packages.txt, members.txt and payments.txt"
    )]
    pub data_dir: PathBuf,

    /// Diagnostic log level written to stderr
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level for diagnostics on stderr (error, warn, info, debug, trace)"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Data file locations derived from `--data-dir`
    pub fn data_files(&self) -> DataFiles {
        DataFiles::in_dir(&self.data_dir)
    }
}

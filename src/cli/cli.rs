use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{LogLevel, OutlineFormat};

/// Create directories and empty files from a layered list or tree diagram.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// Path to the outline file
    #[clap(long, short, default_value = "structure.md")]
    pub input: PathBuf,

    /// Notation the outline is written in
    #[clap(long, short, default_value_t, value_enum)]
    pub format: OutlineFormat,

    /// Directory the scaffold is created in
    #[clap(long, short, default_value = ".")]
    pub root: PathBuf,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

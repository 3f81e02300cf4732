use std::path::PathBuf;

use crate::application::data::OutlineFormat;
use crate::cli::Cli;

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub input: PathBuf,
    pub format: OutlineFormat,
    /// Directory the scaffold root is created in.
    pub root: PathBuf,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            input: cli.input,
            format: cli.format,
            root: cli.root,
        }
    }
}

//! `chaindocs nav` command implementation.

use std::io::{self, Write};

use chaindocs_networks::Registry;
use clap::Args;

use crate::error::CliError;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// URL prefix of chain docs pages.
    #[arg(short, long, default_value = "/chains")]
    base_path: String,
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let nav = Registry::builtin().navigation(&self.base_path);
        let json = serde_json::to_string_pretty(&nav)?;

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{json}")?;
        Ok(())
    }
}

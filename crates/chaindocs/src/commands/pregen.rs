//! `chaindocs pregen` command implementation.

use std::path::PathBuf;

use chaindocs_build::{PregenConfig, Pregenerator};
use chaindocs_config::{CliSettings, Config};
use chaindocs_networks::Registry;
use clap::Args;

use crate::error::CliError;
use crate::output::{NetworkStatus, Output};

/// Arguments for the pregen command.
#[derive(Args)]
pub(crate) struct PregenArgs {
    /// Directory for placeholder pages (default: docs/pages/chains).
    #[arg(short, long)]
    pages_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover chaindocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PregenArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            pages_dir: self.pages_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        tracing::debug!(config = ?config.config_path, "Configuration loaded");

        let pregen_config = PregenConfig::from_config(&config);
        tracing::debug!(
            extension = %pregen_config.extension,
            reload_import = %pregen_config.reload_import,
            "Resolved page settings"
        );
        output.setting("Pages", pregen_config.pages_dir.display());

        let registry = Registry::builtin();
        let report = Pregenerator::new(registry.clone(), pregen_config).run()?;

        for id in registry.ids() {
            output.network(id, NetworkStatus::PageWritten);
        }
        output.done(&format!(
            "Wrote {} placeholder pages",
            report.written.len()
        ));
        Ok(())
    }
}

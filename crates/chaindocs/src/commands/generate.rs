//! `chaindocs generate` command implementation.

use std::path::PathBuf;

use chaindocs_build::{ChainDocsGenerator, GenerateOutcome, GeneratorConfig};
use chaindocs_config::{BuildMode, CliSettings, Config};
use chaindocs_networks::Registry;
use clap::Args;

use crate::error::CliError;
use crate::output::{NetworkStatus, Output};

/// Arguments for the generate command.
///
/// The build mode is taken from `NODE_ENV`, which the build pipeline already
/// sets for the site generator.
#[derive(Args)]
pub(crate) struct GenerateArgs {
    /// Output directory for chain docs (default depends on NODE_ENV).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover chaindocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl GenerateArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        let mode = BuildMode::from_env();
        tracing::debug!(
            config = ?config.config_path,
            mode = mode.as_str(),
            "Configuration loaded"
        );

        let generator_config = GeneratorConfig::from_config(&config, mode);
        tracing::debug!(
            fetch = %generator_config.fetch_tool.display(),
            docs = %generator_config.docs_tool.display(),
            metadata = %generator_config.metadata.dir.display(),
            "Resolved tools"
        );
        output.setting("Mode", mode.as_str());
        output.setting("Output", generator_config.output_dir.display());

        let registry = Registry::builtin();
        let outcome = ChainDocsGenerator::new(registry.clone(), generator_config).generate()?;

        match outcome {
            GenerateOutcome::Skipped { output_dir } => {
                output.skipped(&format!(
                    "{} dir already exists; skipping chain docs generation",
                    output_dir.display()
                ));
            }
            GenerateOutcome::Generated(report) => {
                for id in registry.ids() {
                    let status = if report.cached.iter().any(|cached| cached == id) {
                        NetworkStatus::Cached
                    } else {
                        NetworkStatus::Fetched
                    };
                    output.network(id, status);
                }
                output.done(&format!(
                    "Chain docs generated to {} (fetched {}, cached {})",
                    report.output_dir.display(),
                    report.fetched.len(),
                    report.cached.len()
                ));
            }
        }
        Ok(())
    }
}

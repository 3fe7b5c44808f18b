//! Chain docs generation.
//!
//! For every registered network, makes sure a metadata artifact is cached on
//! disk (fetching missing ones), then renders the per-chain docs into the
//! output directory for the current [`BuildMode`].
//!
//! Steps run one at a time in registry order. There are no retries: the first
//! failure aborts the run, leaving artifacts fetched so far on disk. The next
//! run skips them, so generation resumes where it stopped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chaindocs_config::{BuildMode, Config, MetadataConfig};
use chaindocs_networks::Registry;

use crate::runner::{CommandError, CommandRunner, Invocation, ProcessRunner};

/// Settings for a generation run.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub mode: BuildMode,
    /// Directory the docs tool renders into.
    pub output_dir: PathBuf,
    /// Where cached metadata artifacts live.
    pub metadata: MetadataConfig,
    /// Metadata fetch tool.
    pub fetch_tool: PathBuf,
    /// Docs rendering tool.
    pub docs_tool: PathBuf,
}

impl GeneratorConfig {
    /// Take generation settings from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config, mode: BuildMode) -> Self {
        Self {
            mode,
            output_dir: config.output_dir(mode).to_path_buf(),
            metadata: config.metadata_resolved.clone(),
            fetch_tool: config.tools_resolved.fetch.clone(),
            docs_tool: config.tools_resolved.generate_docs.clone(),
        }
    }
}

/// Error returned by the chain docs generator.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Failed to check {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Metadata fetch for {network} failed: {source}")]
    Fetch {
        network: String,
        #[source]
        source: CommandError,
    },

    #[error("Chain docs rendering failed: {0}")]
    Render(#[source] CommandError),
}

/// Networks handled by a completed generation run.
#[derive(Debug, PartialEq, Eq)]
pub struct GenerateReport {
    /// Networks whose metadata was fetched.
    pub fetched: Vec<String>,
    /// Networks whose metadata artifact was already cached.
    pub cached: Vec<String>,
    pub output_dir: PathBuf,
}

/// Result of a successful generation run.
#[derive(Debug, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Development output already present; nothing was run.
    Skipped { output_dir: PathBuf },
    /// Metadata fetched as needed and docs rendered.
    Generated(GenerateReport),
}

/// Fetches metadata and renders per-chain docs through external tools.
pub struct ChainDocsGenerator {
    registry: Registry,
    config: GeneratorConfig,
    runner: Arc<dyn CommandRunner>,
}

impl ChainDocsGenerator {
    /// Create a generator that spawns real processes.
    #[must_use]
    pub fn new(registry: Registry, config: GeneratorConfig) -> Self {
        Self {
            registry,
            config,
            runner: Arc::new(ProcessRunner),
        }
    }

    /// Use a custom command runner.
    #[must_use]
    pub fn with_runner(mut self, runner: Arc<dyn CommandRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Run generation.
    ///
    /// In development mode an existing output directory counts as a cache hit
    /// and nothing is spawned.
    pub fn generate(&self) -> Result<GenerateOutcome, GenerateError> {
        let output_dir = &self.config.output_dir;

        if self.config.mode == BuildMode::Development && exists(output_dir)? {
            tracing::info!(
                dir = %output_dir.display(),
                "Output directory exists, skipping chain docs generation"
            );
            return Ok(GenerateOutcome::Skipped {
                output_dir: output_dir.clone(),
            });
        }

        let mut fetched = Vec::new();
        let mut cached = Vec::new();

        for network in self.registry.networks() {
            let artifact = self.config.metadata.artifact_path(&network.id);
            if exists(&artifact)? {
                tracing::debug!(network = %network.id, "Metadata cached");
                cached.push(network.id.clone());
                continue;
            }

            tracing::info!(network = %network.id, "Fetching metadata");
            self.runner
                .run(&self.fetch_invocation(&network.id))
                .map_err(|source| GenerateError::Fetch {
                    network: network.id.clone(),
                    source,
                })?;
            fetched.push(network.id.clone());
        }

        tracing::info!(
            dir = %output_dir.display(),
            mode = self.config.mode.as_str(),
            "Rendering chain docs"
        );
        self.runner
            .run(&self.render_invocation())
            .map_err(GenerateError::Render)?;

        Ok(GenerateOutcome::Generated(GenerateReport {
            fetched,
            cached,
            output_dir: output_dir.clone(),
        }))
    }

    /// `<fetch> add --skip-codegen -n <id> <id>`
    fn fetch_invocation(&self, network: &str) -> Invocation {
        Invocation::new(&self.config.fetch_tool).args([
            "add",
            "--skip-codegen",
            "-n",
            network,
            network,
        ])
    }

    /// `<docs> --output <dir>`
    fn render_invocation(&self) -> Invocation {
        Invocation::new(&self.config.docs_tool)
            .arg("--output")
            .arg(&self.config.output_dir)
    }
}

fn exists(path: &Path) -> Result<bool, GenerateError> {
    fs::exists(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

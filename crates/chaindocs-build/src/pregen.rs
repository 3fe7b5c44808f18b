//! Placeholder page pre-generation.
//!
//! The site generator only routes pages it knows about at build time, while
//! chain docs are rendered separately. Each placeholder page imports a
//! `Reload` component that reloads the browser, so the request reaches the
//! server and the generated chain docs are served instead.

use std::fs;
use std::io;
use std::path::PathBuf;

use chaindocs_config::Config;
use chaindocs_networks::Registry;

/// Placeholder page settings.
#[derive(Clone, Debug)]
pub struct PregenConfig {
    /// Directory receiving one page per network.
    pub pages_dir: PathBuf,
    /// Page file extension, without the dot.
    pub extension: String,
    /// Import path of the reload component, relative to a page.
    pub reload_import: String,
}

impl PregenConfig {
    /// Take page settings from loaded configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            pages_dir: config.pages_resolved.dir.clone(),
            extension: config.pages_resolved.extension.clone(),
            reload_import: config.pages_resolved.reload_import.clone(),
        }
    }
}

/// Error returned by the pre-generator.
#[derive(Debug, thiserror::Error)]
pub enum PregenError {
    #[error("Failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Files written by a pre-generation run.
#[derive(Debug, Default)]
pub struct PregenReport {
    /// Written page paths, in registry order.
    pub written: Vec<PathBuf>,
}

/// Render the placeholder page body.
///
/// The content depends only on the import path; every network gets the same
/// page.
#[must_use]
pub fn placeholder_page(reload_import: &str) -> String {
    format!("import Reload from \"{reload_import}\"\n\n<Reload />\n")
}

/// Writes one placeholder page per registered network.
pub struct Pregenerator {
    registry: Registry,
    config: PregenConfig,
}

impl Pregenerator {
    #[must_use]
    pub fn new(registry: Registry, config: PregenConfig) -> Self {
        Self { registry, config }
    }

    /// Create the pages directory and (over)write every placeholder page.
    ///
    /// Existing pages are overwritten, so repeated runs are idempotent.
    pub fn run(&self) -> Result<PregenReport, PregenError> {
        let dir = &self.config.pages_dir;
        fs::create_dir_all(dir).map_err(|source| PregenError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let content = placeholder_page(&self.config.reload_import);
        let mut report = PregenReport {
            written: Vec::with_capacity(self.registry.len()),
        };

        for id in self.registry.ids() {
            let path = dir.join(format!("{id}.{}", self.config.extension));
            fs::write(&path, &content).map_err(|source| PregenError::Write {
                path: path.clone(),
                source,
            })?;
            tracing::debug!(path = %path.display(), "Wrote placeholder page");
            report.written.push(path);
        }

        tracing::info!(
            count = report.written.len(),
            dir = %dir.display(),
            "Placeholder pages written"
        );
        Ok(report)
    }
}

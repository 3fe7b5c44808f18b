//! CLI error types.

use chaindocs_build::{GenerateError, PregenError};
use chaindocs_config::ConfigError;
use chaindocs_networks::RegistryError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Pregen(#[from] PregenError),

    #[error("{0}")]
    Generate(#[from] GenerateError),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}

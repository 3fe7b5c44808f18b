//! Configuration management for chaindocs.
//!
//! Parses `chaindocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Without a config file
//! every path defaults to the layout of the documentation repository, rooted
//! at the current directory.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! All string values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! ## Build Mode
//!
//! [`BuildMode`] is not part of the file. The build pipeline selects it with
//! the `NODE_ENV` environment variable, see [`BuildMode::from_env`].

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "chaindocs.toml";

/// Environment variable selecting the [`BuildMode`].
pub const MODE_ENV_VAR: &str = "NODE_ENV";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override placeholder pages directory.
    pub pages_dir: Option<PathBuf>,
    /// Override chain docs output directory (both modes).
    pub output_dir: Option<PathBuf>,
}

/// Which build the chain docs are generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    /// Local preview. Existing output is reused as a cache.
    Development,
    /// Site build. Output is always regenerated.
    Production,
}

impl BuildMode {
    /// Map a `NODE_ENV` value to a build mode.
    ///
    /// Only the exact value `development` selects [`BuildMode::Development`].
    #[must_use]
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("development") => Self::Development,
            _ => Self::Production,
        }
    }

    /// Read the build mode from the `NODE_ENV` environment variable.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(MODE_ENV_VAR).ok().as_deref())
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pages: PagesConfigRaw,
    metadata: MetadataConfigRaw,
    tools: ToolsConfigRaw,
    output: OutputConfigRaw,

    /// Resolved placeholder pages configuration (set after loading).
    #[serde(skip)]
    pub pages_resolved: PagesConfig,
    /// Resolved metadata artifact configuration (set after loading).
    #[serde(skip)]
    pub metadata_resolved: MetadataConfig,
    /// Resolved external tool paths (set after loading).
    #[serde(skip)]
    pub tools_resolved: ToolsConfig,
    /// Resolved output directories (set after loading).
    #[serde(skip)]
    pub output_resolved: OutputConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct PagesConfigRaw {
    dir: Option<String>,
    extension: Option<String>,
    reload_import: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct MetadataConfigRaw {
    dir: Option<String>,
    extension: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ToolsConfigRaw {
    fetch: Option<String>,
    generate_docs: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct OutputConfigRaw {
    development_dir: Option<String>,
    production_dir: Option<String>,
}

/// Placeholder page settings.
#[derive(Debug, Default)]
pub struct PagesConfig {
    /// Directory receiving one page per network.
    pub dir: PathBuf,
    /// Page file extension, without the dot.
    pub extension: String,
    /// Import path of the reload component, relative to a generated page.
    pub reload_import: String,
}

/// Cached metadata artifact settings.
#[derive(Clone, Debug, Default)]
pub struct MetadataConfig {
    /// Directory holding one artifact per network.
    pub dir: PathBuf,
    /// Artifact file extension, without the dot.
    pub extension: String,
}

impl MetadataConfig {
    /// Artifact path for a network id.
    #[must_use]
    pub fn artifact_path(&self, network: &str) -> PathBuf {
        self.dir.join(format!("{network}.{}", self.extension))
    }
}

/// External executables.
#[derive(Debug, Default)]
pub struct ToolsConfig {
    /// Metadata fetch tool (`<fetch> add --skip-codegen -n <id> <id>`).
    pub fetch: PathBuf,
    /// Docs rendering tool (`<generate_docs> --output <dir>`).
    pub generate_docs: PathBuf,
}

/// Chain docs output directories per build mode.
#[derive(Debug, Default)]
pub struct OutputConfig {
    pub development_dir: PathBuf,
    pub production_dir: PathBuf,
}

impl OutputConfig {
    /// Output directory for a build mode.
    #[must_use]
    pub fn dir(&self, mode: BuildMode) -> &Path {
        match mode {
            BuildMode::Development => &self.development_dir,
            BuildMode::Production => &self.production_dir,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`tools.fetch`").
        field: String,
        /// Error message (e.g., "${`PAPI_BIN`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_extension(value: &str, field: &str) -> Result<(), ConfigError> {
    require_non_empty(value, field)?;
    if value.starts_with('.') {
        return Err(ConfigError::Validation(format!(
            "{field} must not start with a dot"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `chaindocs.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(pages_dir) = &settings.pages_dir {
            self.pages_resolved.dir.clone_from(pages_dir);
        }
        if let Some(output_dir) = &settings.output_dir {
            self.output_resolved.development_dir.clone_from(output_dir);
            self.output_resolved.production_dir.clone_from(output_dir);
        }
    }

    /// Resolved output directory for a build mode.
    #[must_use]
    pub fn output_dir(&self, mode: BuildMode) -> &Path {
        self.output_resolved.dir(mode)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let mut config = Self {
            pages: PagesConfigRaw::default(),
            metadata: MetadataConfigRaw::default(),
            tools: ToolsConfigRaw::default(),
            output: OutputConfigRaw::default(),
            pages_resolved: PagesConfig::default(),
            metadata_resolved: MetadataConfig::default(),
            tools_resolved: ToolsConfig::default(),
            output_resolved: OutputConfig::default(),
            config_path: None,
        };
        config.resolve_paths(base);
        config
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_extension(&self.pages_resolved.extension, "pages.extension")?;
        require_non_empty(&self.pages_resolved.reload_import, "pages.reload_import")?;
        require_extension(&self.metadata_resolved.extension, "metadata.extension")?;

        if self.output_resolved.development_dir == self.output_resolved.production_dir {
            return Err(ConfigError::Validation(
                "output.development_dir and output.production_dir must differ".to_owned(),
            ));
        }

        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        expand::expand_opt(&mut self.pages.dir, "pages.dir")?;
        expand::expand_opt(&mut self.pages.extension, "pages.extension")?;
        expand::expand_opt(&mut self.pages.reload_import, "pages.reload_import")?;
        expand::expand_opt(&mut self.metadata.dir, "metadata.dir")?;
        expand::expand_opt(&mut self.metadata.extension, "metadata.extension")?;
        expand::expand_opt(&mut self.tools.fetch, "tools.fetch")?;
        expand::expand_opt(&mut self.tools.generate_docs, "tools.generate_docs")?;
        expand::expand_opt(&mut self.output.development_dir, "output.development_dir")?;
        expand::expand_opt(&mut self.output.production_dir, "output.production_dir")?;
        Ok(())
    }

    /// Resolve relative paths against the config directory and fill defaults.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));
        let text = |value: Option<&String>, default: &str| {
            value.map_or_else(|| default.to_owned(), Clone::clone)
        };

        self.pages_resolved = PagesConfig {
            dir: resolve(self.pages.dir.as_deref(), "docs/pages/chains"),
            extension: text(self.pages.extension.as_ref(), "mdx"),
            reload_import: text(
                self.pages.reload_import.as_ref(),
                "../../components/Reload",
            ),
        };

        self.metadata_resolved = MetadataConfig {
            dir: resolve(self.metadata.dir.as_deref(), ".papi/metadata"),
            extension: text(self.metadata.extension.as_ref(), "scale"),
        };

        self.tools_resolved = ToolsConfig {
            fetch: resolve(self.tools.fetch.as_deref(), "node_modules/.bin/papi"),
            generate_docs: resolve(
                self.tools.generate_docs.as_deref(),
                "node_modules/.bin/papi-generate-docs",
            ),
        };

        self.output_resolved = OutputConfig {
            development_dir: resolve(self.output.development_dir.as_deref(), "chain_docs/dist"),
            production_dir: resolve(self.output.production_dir.as_deref(), "docs/dist/chains"),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));

        assert_eq!(
            config.pages_resolved.dir,
            PathBuf::from("/test/docs/pages/chains")
        );
        assert_eq!(config.pages_resolved.extension, "mdx");
        assert_eq!(config.pages_resolved.reload_import, "../../components/Reload");
        assert_eq!(
            config.metadata_resolved.dir,
            PathBuf::from("/test/.papi/metadata")
        );
        assert_eq!(config.metadata_resolved.extension, "scale");
        assert_eq!(
            config.tools_resolved.fetch,
            PathBuf::from("/test/node_modules/.bin/papi")
        );
        assert_eq!(
            config.tools_resolved.generate_docs,
            PathBuf::from("/test/node_modules/.bin/papi-generate-docs")
        );
        assert_eq!(
            config.output_dir(BuildMode::Development),
            Path::new("/test/chain_docs/dist")
        );
        assert_eq!(
            config.output_dir(BuildMode::Production),
            Path::new("/test/docs/dist/chains")
        );
        assert!(config.config_path.is_none());
    }

    #[test]
    fn test_artifact_path() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(
            config.metadata_resolved.artifact_path("polkadot"),
            PathBuf::from("/test/.papi/metadata/polkadot.scale")
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.pages.dir.is_none());
        assert!(config.tools.fetch.is_none());
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[pages]
dir = "site/pages/chains"
extension = "md"

[metadata]
dir = "cache/metadata"

[tools]
fetch = "/usr/local/bin/papi"

[output]
production_dir = "site/dist/chains"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.pages_resolved.dir,
            PathBuf::from("/project/site/pages/chains")
        );
        assert_eq!(config.pages_resolved.extension, "md");
        assert_eq!(
            config.metadata_resolved.dir,
            PathBuf::from("/project/cache/metadata")
        );
        // Absolute tool paths are kept
        assert_eq!(
            config.tools_resolved.fetch,
            PathBuf::from("/usr/local/bin/papi")
        );
        assert_eq!(
            config.tools_resolved.generate_docs,
            PathBuf::from("/project/node_modules/.bin/papi-generate-docs")
        );
        assert_eq!(
            config.output_resolved.production_dir,
            PathBuf::from("/project/site/dist/chains")
        );
        assert_eq!(
            config.output_resolved.development_dir,
            PathBuf::from("/project/chain_docs/dist")
        );
    }

    #[test]
    fn test_build_mode_from_env_value() {
        assert_eq!(
            BuildMode::from_env_value(Some("development")),
            BuildMode::Development
        );
        assert_eq!(
            BuildMode::from_env_value(Some("production")),
            BuildMode::Production
        );
        assert_eq!(BuildMode::from_env_value(Some("test")), BuildMode::Production);
        assert_eq!(
            BuildMode::from_env_value(Some("Development")),
            BuildMode::Production
        );
        assert_eq!(BuildMode::from_env_value(None), BuildMode::Production);
    }

    #[test]
    fn test_apply_cli_settings_pages_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            pages_dir: Some(PathBuf::from("/custom/pages")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.pages_resolved.dir, PathBuf::from("/custom/pages"));
        assert_eq!(
            config.output_dir(BuildMode::Production),
            Path::new("/test/docs/dist/chains")
        ); // Unchanged
    }

    #[test]
    fn test_apply_cli_settings_output_dir() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            output_dir: Some(PathBuf::from("/tmp/chains")),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(
            config.output_dir(BuildMode::Development),
            Path::new("/tmp/chains")
        );
        assert_eq!(
            config.output_dir(BuildMode::Production),
            Path::new("/tmp/chains")
        );
    }

    #[test]
    fn test_apply_cli_settings_empty() {
        let before = Config::default_with_base(Path::new("/test"));
        let mut config = Config::default_with_base(Path::new("/test"));

        config.apply_cli_settings(&CliSettings::default());

        assert_eq!(config.pages_resolved.dir, before.pages_resolved.dir);
        assert_eq!(
            config.output_resolved.development_dir,
            before.output_resolved.development_dir
        );
    }

    #[test]
    fn test_expand_env_vars_tools() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("CHAINDOCS_TEST_BIN", "/opt/papi");
        }

        let toml = r#"
[tools]
fetch = "${CHAINDOCS_TEST_BIN}/papi"
generate_docs = "${CHAINDOCS_TEST_DOCS_BIN:-/opt/docs}/papi-generate-docs"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.expand_env_vars().unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(config.tools_resolved.fetch, PathBuf::from("/opt/papi/papi"));
        assert_eq!(
            config.tools_resolved.generate_docs,
            PathBuf::from("/opt/docs/papi-generate-docs")
        );

        unsafe {
            std::env::remove_var("CHAINDOCS_TEST_BIN");
        }
    }

    #[test]
    fn test_expand_env_vars_missing_required_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("MISSING_VAR_CHAINDOCS_TEST");
        }

        let toml = r#"
[output]
production_dir = "${MISSING_VAR_CHAINDOCS_TEST}"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        let err = config.expand_env_vars().unwrap_err();

        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("MISSING_VAR_CHAINDOCS_TEST"));
        assert!(err.to_string().contains("output.production_dir"));
    }

    /// Assert that validation fails with expected substrings in the error message.
    fn assert_validation_error(config: &Config, expected_substrings: &[&str]) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_validate_default_config_passes() {
        let config = Config::default_with_base(Path::new("/test"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty_page_extension() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.pages_resolved.extension = String::new();
        assert_validation_error(&config, &["pages.extension", "empty"]);
    }

    #[test]
    fn test_validate_dotted_metadata_extension() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.metadata_resolved.extension = ".scale".to_owned();
        assert_validation_error(&config, &["metadata.extension", "dot"]);
    }

    #[test]
    fn test_validate_empty_reload_import() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.pages_resolved.reload_import = String::new();
        assert_validation_error(&config, &["pages.reload_import"]);
    }

    #[test]
    fn test_validate_same_output_dirs() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.output_resolved.development_dir = PathBuf::from("/test/out");
        config.output_resolved.production_dir = PathBuf::from("/test/out");
        assert_validation_error(&config, &["development_dir", "production_dir"]);
    }

    #[test]
    fn test_load_explicit_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("chaindocs.toml");
        std::fs::write(
            &path,
            r#"
[pages]
reload_import = "../components/Reload"
"#,
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.config_path, Some(path));
        assert_eq!(config.pages_resolved.reload_import, "../components/Reload");
        assert_eq!(
            config.pages_resolved.dir,
            tmp.path().join("docs/pages/chains")
        );
    }

    #[test]
    fn test_load_explicit_file_not_found() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.toml");

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("chaindocs.toml");
        std::fs::write(&path, "[metadata]\nextension = \".scale\"\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("chaindocs.toml");
        std::fs::write(&path, "[pages\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

//! Environment variable expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` is the config path reported when a variable is unset.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    shellexpand::env(value)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.var_name),
        })
}

/// Expand an optional string in place.
pub(crate) fn expand_opt(value: &mut Option<String>, field: &str) -> Result<(), ConfigError> {
    if let Some(raw) = value.as_deref() {
        *value = Some(expand_env(raw, field)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_literal_unchanged() {
        assert_eq!(
            expand_env("docs/pages/chains", "pages.dir").unwrap(),
            "docs/pages/chains"
        );
    }

    #[test]
    fn test_expand_default_value() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("CHAINDOCS_EXPAND_UNSET");
        }

        assert_eq!(
            expand_env("${CHAINDOCS_EXPAND_UNSET:-build/chains}", "output.production_dir").unwrap(),
            "build/chains"
        );
    }

    #[test]
    fn test_expand_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("CHAINDOCS_EXPAND_TOOLS", "/opt/papi/bin");
        }

        assert_eq!(
            expand_env("${CHAINDOCS_EXPAND_TOOLS}/papi", "tools.fetch").unwrap(),
            "/opt/papi/bin/papi"
        );

        unsafe {
            std::env::remove_var("CHAINDOCS_EXPAND_TOOLS");
        }
    }

    #[test]
    fn test_expand_missing_var_names_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("CHAINDOCS_EXPAND_MISSING");
        }

        let err = expand_env("${CHAINDOCS_EXPAND_MISSING}", "metadata.dir").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("metadata.dir"), "got: {msg}");
        assert!(msg.contains("CHAINDOCS_EXPAND_MISSING"), "got: {msg}");
    }

    #[test]
    fn test_expand_opt_none_is_noop() {
        let mut value = None;
        expand_opt(&mut value, "pages.dir").unwrap();
        assert_eq!(value, None);
    }
}

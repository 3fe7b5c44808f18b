//! `chaindocs check` command implementation.

use chaindocs_networks::Registry;

use crate::error::CliError;
use crate::output::Output;

/// Validate the built-in network registry.
pub(crate) fn execute() -> Result<(), CliError> {
    let output = Output::new();
    let registry = Registry::builtin();

    registry.validate()?;

    output.done(&format!(
        "Registry OK: {} networks in {} sections",
        registry.len(),
        registry.sections().len()
    ));
    Ok(())
}

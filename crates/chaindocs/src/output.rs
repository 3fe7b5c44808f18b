//! Terminal progress output for the build commands.
//!
//! Everything goes to stderr; stdout is reserved for `nav` JSON.

use std::fmt::Display;

use console::{Style, Term};

/// What happened to a network during a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum NetworkStatus {
    /// Placeholder page written.
    PageWritten,
    /// Metadata fetched by the fetch tool.
    Fetched,
    /// Metadata artifact already present; fetch skipped.
    Cached,
}

impl NetworkStatus {
    fn label(self) -> &'static str {
        match self {
            Self::PageWritten => "page",
            Self::Fetched => "fetched",
            Self::Cached => "cached",
        }
    }
}

/// Progress reporter writing to stderr.
pub(crate) struct Output {
    term: Term,
    label: Style,
    green: Style,
    yellow: Style,
    red: Style,
    dim: Style,
}

impl Output {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            label: Style::new().bold(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            dim: Style::new().dim(),
        }
    }

    /// Print a resolved setting, e.g. `Mode: production`.
    pub(crate) fn setting(&self, name: &str, value: impl Display) {
        let _ = self
            .term
            .write_line(&format!("{} {value}", self.label.apply_to(format!("{name}:"))));
    }

    /// Print one per-network progress line, e.g. `  fetched  polkadot`.
    pub(crate) fn network(&self, id: &str, status: NetworkStatus) {
        let style = match status {
            NetworkStatus::PageWritten | NetworkStatus::Fetched => &self.green,
            NetworkStatus::Cached => &self.dim,
        };
        let _ = self.term.write_line(&format!(
            "  {:>7}  {id}",
            style.apply_to(status.label())
        ));
    }

    /// Print the closing summary of a successful run (green).
    pub(crate) fn done(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a skipped-run notice (yellow).
    pub(crate) fn skipped(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print a fatal error (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }
}

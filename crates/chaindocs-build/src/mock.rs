//! Recording command runner for testing.
//!
//! Provides [`RecordingRunner`] for unit testing without spawning processes.

use std::ffi::OsStr;
use std::sync::RwLock;

use crate::runner::{CommandError, CommandRunner, Invocation};

/// Mock runner that records every invocation.
///
/// Invocations succeed unless a failure rule matches. Failed invocations are
/// still recorded.
///
/// # Example
///
/// ```
/// use chaindocs_build::{CommandRunner, Invocation, RecordingRunner};
///
/// let runner = RecordingRunner::new().fail_on_arg("ksmcc3", 1);
/// assert!(runner.run(&Invocation::new("papi").arg("polkadot")).is_ok());
/// assert!(runner.run(&Invocation::new("papi").arg("ksmcc3")).is_err());
/// assert_eq!(runner.command_lines(), ["papi polkadot", "papi ksmcc3"]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: RwLock<Vec<Invocation>>,
    arg_failures: Vec<(String, i32)>,
    nth_failures: Vec<(usize, i32)>,
}

impl RecordingRunner {
    /// Create a runner where every invocation succeeds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail invocations that have `arg` among their arguments with exit `code`.
    #[must_use]
    pub fn fail_on_arg(mut self, arg: impl Into<String>, code: i32) -> Self {
        self.arg_failures.push((arg.into(), code));
        self
    }

    /// Fail the `index`-th invocation (zero-based) with exit `code`.
    #[must_use]
    pub fn fail_nth(mut self, index: usize, code: i32) -> Self {
        self.nth_failures.push((index, code));
        self
    }

    /// Recorded invocations, in call order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.read().unwrap().clone()
    }

    /// Recorded invocations rendered as command lines.
    #[must_use]
    pub fn command_lines(&self) -> Vec<String> {
        self.invocations()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    fn failure_code(&self, index: usize, invocation: &Invocation) -> Option<i32> {
        let by_index = self
            .nth_failures
            .iter()
            .find(|(nth, _)| *nth == index)
            .map(|(_, code)| *code);

        by_index.or_else(|| {
            self.arg_failures
                .iter()
                .find(|(arg, _)| {
                    invocation
                        .args
                        .iter()
                        .any(|a| a.as_os_str() == OsStr::new(arg))
                })
                .map(|(_, code)| *code)
        })
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        let index = {
            let mut invocations = self.invocations.write().unwrap();
            invocations.push(invocation.clone());
            invocations.len() - 1
        };

        match self.failure_code(index, invocation) {
            Some(code) => Err(CommandError::Exited {
                command: invocation.to_string(),
                code,
            }),
            None => Ok(()),
        }
    }
}

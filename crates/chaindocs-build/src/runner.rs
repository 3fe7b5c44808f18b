//! External process invocation.

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::{Command, ExitStatus};

/// A command line to run: program plus arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Create an invocation with no arguments.
    #[must_use]
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Failure of an external command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Failed to start process {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("Process {command} exited with code {code}")]
    Exited { command: String, code: i32 },

    #[error("Process {command} killed with signal {signal}")]
    Signaled { command: String, signal: i32 },

    #[error("Process {command} terminated without exit code")]
    Terminated { command: String },
}

impl CommandError {
    /// Exit code of the failed process, if it exited normally.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exited { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Runs external commands to completion.
///
/// Implementations block until the command finishes. Exit code 0 is success;
/// any other outcome is a [`CommandError`].
pub trait CommandRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError>;
}

/// [`CommandRunner`] that spawns real processes with inherited stdio.
///
/// The program is executed directly, without a shell, so arguments are passed
/// verbatim.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), CommandError> {
        let command = invocation.to_string();
        tracing::debug!(%command, "Spawning process");

        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .status()
            .map_err(|source| CommandError::Spawn {
                command: command.clone(),
                source,
            })?;

        check_status(status, command)
    }
}

fn check_status(status: ExitStatus, command: String) -> Result<(), CommandError> {
    if status.success() {
        return Ok(());
    }
    if let Some(code) = status.code() {
        return Err(CommandError::Exited { command, code });
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return Err(CommandError::Signaled { command, signal });
        }
    }

    Err(CommandError::Terminated { command })
}

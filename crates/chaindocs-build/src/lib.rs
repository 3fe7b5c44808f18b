//! Build steps for the chain documentation site.
//!
//! Two independent steps run around the static site generator:
//!
//! - [`Pregenerator`] writes one placeholder page per network, so the site's
//!   client-side router has a route for every chain page
//! - [`ChainDocsGenerator`] fetches missing metadata artifacts and renders the
//!   per-chain API docs through external tools
//!
//! External processes are reached through the [`CommandRunner`] trait.
//! [`ProcessRunner`] spawns real processes; `RecordingRunner` (behind the
//! `mock` feature flag) records invocations for tests.

mod generator;
#[cfg(any(test, feature = "mock"))]
mod mock;
mod pregen;
mod runner;

pub use generator::{
    ChainDocsGenerator, GenerateError, GenerateOutcome, GenerateReport, GeneratorConfig,
};
#[cfg(any(test, feature = "mock"))]
pub use mock::RecordingRunner;
pub use pregen::{PregenConfig, PregenError, PregenReport, Pregenerator, placeholder_page};
pub use runner::{CommandError, CommandRunner, Invocation, ProcessRunner};

//! CLI command implementations.

pub(crate) mod check;
mod generate;
mod nav;
mod pregen;

pub(crate) use generate::GenerateArgs;
pub(crate) use nav::NavArgs;
pub(crate) use pregen::PregenArgs;

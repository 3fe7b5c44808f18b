//! Network registry for chain documentation builds.
//!
//! The registry is the single list of networks the documentation site covers.
//! Every build step iterates it in authoring order:
//!
//! - the pre-generator writes one placeholder page per network
//! - the chain-docs generator fetches metadata per network
//! - the sidebar groups networks into [`Section`]s
//!
//! # Example
//!
//! ```
//! use chaindocs_networks::Registry;
//!
//! let registry = Registry::builtin();
//! assert_eq!(registry.display_name("ksmcc3"), Some("Kusama"));
//! assert!(registry.validate().is_ok());
//! ```

mod navigation;
mod registry;

pub use navigation::{NavItem, NavSection};
pub use registry::{Network, Registry, RegistryError, Section};

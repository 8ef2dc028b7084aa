//! Core site logic, independent of the UI layer.
//!
//! - [`install`] - Install catalog validation and OS recommendation
//! - [`error`] - Error types

pub mod error;
pub mod install;

pub use install::InstallCatalog;

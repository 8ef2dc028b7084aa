//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Route`], [`DocPage`] - Path-based navigation
//! - [`HEADER_LINKS`], [`sidebar_links`] - Header and sidebar links
//! - [`Os`], [`InstallMethod`] - Platform detection and install catalog entries
//! - [`PreviewState`], [`ScrollLock`] - Image preview overlay
//! - [`CopyFeedback`] - Clipboard button feedback

mod feedback;
mod install;
mod nav;
mod platform;
mod preview;
mod route;

pub use feedback::CopyFeedback;
pub use install::{InstallMethod, Target};
pub use nav::{HEADER_LINKS, sidebar_links};
pub use platform::Os;
pub use preview::{PreviewState, PreviewTarget, ScrollLock};
pub use route::{DocPage, DocSection, Route, RouteMeta, normalize_path};

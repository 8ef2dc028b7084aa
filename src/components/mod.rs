//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`layout`] - Header and footer
//! - [`landing`] - Home page: hero, feature grid, install section
//! - [`docs`] - Documentation layout, sidebar and articles
//! - [`copy`] - Code blocks with copy-to-clipboard
//! - [`preview`] - Image thumbnails and the full-screen overlay
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod copy;
pub mod docs;
pub mod icons;
pub mod landing;
pub mod layout;
pub mod not_found;
pub mod preview;
pub mod router;

pub use router::AppRouter;

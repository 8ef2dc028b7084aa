//! Utility modules for browser APIs and content rendering.
//!
//! Provides:
//! - [`dom`] - Window, history, scroll-lock and document metadata helpers
//! - [`write_text`] - Async clipboard write
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization

mod clipboard;
pub mod dom;
mod markdown;

pub use clipboard::write_text;
pub use markdown::markdown_to_html;

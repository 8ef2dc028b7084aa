//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown content to sanitized HTML.
///
/// Supports GitHub-flavored extensions used by the docs:
/// - Tables
/// - Strikethrough (`~~text~~`)
/// - Bare URL autolinks
///
/// The output is sanitized using `ammonia` to prevent XSS attacks
/// by removing potentially dangerous HTML elements and attributes.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;

    let html_output = render(markdown, &options);

    // Sanitize HTML to prevent XSS attacks
    ammonia::clean(&html_output)
}

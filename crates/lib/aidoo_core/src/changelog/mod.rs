//! Changelog module: renders a changelog document into the HTML page.
//!
//! The document dialect is a restricted Keep-a-Changelog markdown: release
//! headings (`## [1.2.0] - 2024-05-01`), subsection headings (`### Added`),
//! and bullet entries (`- text`) with bold, link and inline-code markup.
//! Anything else is dropped.
//!
//! # Public API
//!
//! - [`render_changelog`]: markdown document → HTML fragment
//! - [`render_inline`]: bullet text → escaped HTML with inline markup
//! - [`splice`]: replace the marker-delimited region of a page
//! - [`render_file`]: read and render a changelog file
//! - [`inject_file`]: read, render, splice and write in one step

pub mod inject;
pub mod inline;
pub mod render;

use std::path::PathBuf;

use thiserror::Error;

pub use inject::{END_MARKER, START_MARKER, inject_file, render_file, splice};
pub use inline::{escape_html, render_inline};
pub use render::{NODE_SEPARATOR, render_changelog};

/// Errors that can occur while injecting a changelog into a page.
#[derive(Debug, Error)]
pub enum ChangelogError {
    #[error("{} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error(
        "markers not found in {}. Expected {} and {}",
        .0.display(),
        START_MARKER,
        END_MARKER
    )]
    MarkersNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

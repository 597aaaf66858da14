//! Convert Markdown files, or whole directory trees of them, to HTML.
//!
//! Output lands next to each source file, or under a destination directory
//! that mirrors the source layout.

pub mod cli;
pub mod config;
pub mod convert;
pub mod discover;
pub mod error;
pub mod logging;
pub mod output;
pub mod render;

pub use config::Config;
pub use convert::{Converter, Summary, run};
pub use discover::{MARKDOWN_EXTENSIONS, MarkdownFile, discover, is_markdown};
pub use error::{Error, Result};
pub use output::{html_path, prepare_output};
pub use render::{Markdown, Render};

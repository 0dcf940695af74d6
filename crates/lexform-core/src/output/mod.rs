//! Output formats for rendered documents
//!
//! Substitution always produces Markdown. A [`Renderer`] turns that
//! intermediate text into the bytes of the final format; PDF output is
//! delegated to an external `pandoc` process.

mod pandoc;

pub use pandoc::PandocRenderer;

use crate::config::OutputConfig;
use crate::error::{LexformError, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Final document format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Markdown,
    Html,
    Pdf,
}

impl OutputFormat {
    /// File extension of the written document
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Html => "html",
            OutputFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = LexformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "html" => Ok(OutputFormat::Html),
            "pdf" => Ok(OutputFormat::Pdf),
            _ => Err(LexformError::UnknownOutputFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Converts the rendered Markdown into final document bytes
pub trait Renderer {
    fn format(&self) -> OutputFormat;

    fn render(&self, markdown: &str) -> Result<Vec<u8>>;
}

/// Writes the Markdown unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }

    fn render(&self, markdown: &str) -> Result<Vec<u8>> {
        Ok(markdown.as_bytes().to_vec())
    }
}

/// Markdown to HTML via the `markdown` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl Renderer for HtmlRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Html
    }

    fn render(&self, markdown: &str) -> Result<Vec<u8>> {
        Ok(markdown::to_html(markdown).into_bytes())
    }
}

/// Renderer for `format`, configured from the `[output]` section
///
/// `root` is the directory relative links in the document are resolved from.
pub fn renderer_for(format: OutputFormat, config: &OutputConfig, root: &Path) -> Box<dyn Renderer> {
    match format {
        OutputFormat::Markdown => Box::new(MarkdownRenderer),
        OutputFormat::Html => Box::new(HtmlRenderer),
        OutputFormat::Pdf => Box::new(
            PandocRenderer::new(&config.pandoc, &config.pdf_engine).in_dir(root),
        ),
    }
}

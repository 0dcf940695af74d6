//! PDF output through an external pandoc process

use super::{OutputFormat, Renderer};
use crate::error::{LexformError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Runs `pandoc <input.md> --pdf-engine=<engine> -o <output.pdf>`
///
/// Relative links in the document (signature images, for instance) resolve
/// against the working directory pandoc is started in.
#[derive(Debug, Clone)]
pub struct PandocRenderer {
    program: String,
    pdf_engine: String,
    working_dir: Option<PathBuf>,
}

impl PandocRenderer {
    pub fn new(program: &str, pdf_engine: &str) -> Self {
        Self {
            program: program.to_string(),
            pdf_engine: pdf_engine.to_string(),
            working_dir: None,
        }
    }

    /// Start pandoc in `dir` instead of the current directory
    pub fn in_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Resolve the pandoc binary on PATH (or as given, if it is a path)
    fn resolve_program(&self) -> Result<PathBuf> {
        which::which(&self.program).map_err(|e| {
            LexformError::RendererUnavailable(format!(
                "'{}' not found ({}); install pandoc or choose another output format",
                self.program, e
            ))
        })
    }
}

impl Renderer for PandocRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn render(&self, markdown: &str) -> Result<Vec<u8>> {
        let program = self.resolve_program()?;

        let work_dir = TempDir::new()?;
        let input = work_dir.path().join("contract.md");
        let output = work_dir.path().join("contract.pdf");
        std::fs::write(&input, markdown)?;

        tracing::debug!(program = %program.display(), engine = %self.pdf_engine, "running pandoc");

        let mut command = Command::new(&program);
        command
            .arg(&input)
            .arg(format!("--pdf-engine={}", self.pdf_engine))
            .arg("-o")
            .arg(&output);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let result = command
            .output()
            .map_err(|e| {
                LexformError::RenderFailed(format!("failed to execute {}: {}", program.display(), e))
            })?;

        if !result.status.success() {
            return Err(LexformError::RenderFailed(format!(
                "pandoc exited with {}: {}",
                result.status,
                String::from_utf8_lossy(&result.stderr).trim()
            )));
        }

        Ok(std::fs::read(&output)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_program_is_unavailable() {
        let renderer = PandocRenderer::new("lexform-no-such-pandoc-binary", "xelatex");
        let err = renderer.render("# x").unwrap_err();
        assert!(matches!(err, LexformError::RendererUnavailable(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_relative_resources_resolve_in_working_dir() {
        let tools = TempDir::new().unwrap();
        let engagement = TempDir::new().unwrap();
        std::fs::write(engagement.path().join("franklin.png"), b"png").unwrap();
        let program = lexform_testkit::fixtures::resource_checking_pandoc(
            tools.path(),
            "franklin.png",
        );
        let program = program.to_str().unwrap();

        let pdf = PandocRenderer::new(program, "xelatex")
            .in_dir(engagement.path())
            .render("![Signature](franklin.png)")
            .unwrap();
        assert_eq!(String::from_utf8(pdf).unwrap(), "found\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_program_reports_render_failed() {
        // `false` exists on every unix and always exits 1
        let renderer = PandocRenderer::new("false", "xelatex");
        let err = renderer.render("# x").unwrap_err();
        assert!(matches!(err, LexformError::RenderFailed(_)));
    }
}

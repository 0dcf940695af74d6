//! The compile workflow

use super::Engagement;
use crate::error::{LexformError, Result};
use crate::fingerprint::Fingerprint;
use crate::output::{renderer_for, OutputFormat};
use crate::params::ParameterStore;
use crate::template::substitute;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

impl Engagement {
    /// Render the contract and write `<basename>.<ext>` into the engagement
    ///
    /// Nothing is written unless every placeholder resolves.
    ///
    /// # Errors
    ///
    /// - [`LexformError::TemplateMismatch`] if `params.toml` belongs to another
    ///   template and the mismatch policy is `error`
    /// - [`LexformError::UnresolvedPlaceholders`] listing every missing name
    /// - renderer errors for the chosen format
    pub fn compile(&self, format: OutputFormat) -> Result<PathBuf> {
        let (template, params) = self.read_sources()?;
        let store = ParameterStore::from_bytes(&params)?;
        self.check_template(&store, &Fingerprint::of(&template))?;

        let substitution = substitute(&template, &store, &self.config.syntax)?;
        if !substitution.is_complete() {
            tracing::debug!(output = %substitution.output, "rendering with unresolved placeholders");
            return Err(LexformError::UnresolvedPlaceholders {
                names: substitution.unresolved,
            });
        }

        let renderer = renderer_for(format, &self.config.output, &self.root);
        let bytes = renderer.render(&substitution.output)?;

        let path = self.output_path(format);
        write_atomic(&self.root, &path, &bytes)?;
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "contract written");
        Ok(path)
    }

    /// Where [`compile`](Self::compile) writes the given format
    pub fn output_path(&self, format: OutputFormat) -> PathBuf {
        self.root.join(format!(
            "{}.{}",
            self.config.output.basename,
            format.extension()
        ))
    }
}

/// Write through a temp file in the same directory, then persist over `path`
fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> Result<()> {
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(bytes)?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

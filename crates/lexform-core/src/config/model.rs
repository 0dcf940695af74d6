use super::CONFIG_FILE;
use crate::error::{LexformError, Result};
use crate::syntax::PlaceholderSyntax;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// lexform.toml schema
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub syntax: PlaceholderSyntax,
    #[serde(default)]
    pub integrity: IntegrityConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityConfig {
    #[serde(default)]
    pub on_mismatch: MismatchPolicy,
}

/// What `compile` does when params.toml was generated for another template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MismatchPolicy {
    #[default]
    Error,
    Warn,
    Ignore,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// File name of the compiled document, without extension
    #[serde(default = "default_basename")]
    pub basename: String,
    #[serde(default = "default_pandoc")]
    pub pandoc: String,
    #[serde(default = "default_pdf_engine")]
    pub pdf_engine: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            basename: default_basename(),
            pandoc: default_pandoc(),
            pdf_engine: default_pdf_engine(),
        }
    }
}

fn default_basename() -> String {
    "contract".to_string()
}

fn default_pandoc() -> String {
    "pandoc".to_string()
}

fn default_pdf_engine() -> String {
    "xelatex".to_string()
}

impl Config {
    /// Parse and validate config text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| LexformError::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read `lexform.toml` from `dir`, falling back to defaults when absent
    pub fn load_or_default(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| LexformError::ConfigParseError(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Self::from_toml_str(&content)
    }

    fn validate(&self) -> Result<()> {
        self.syntax
            .validate()
            .map_err(|e| LexformError::ConfigParseError(format!("[syntax] {}", e)))?;

        let basename = self.output.basename.trim();
        if basename.is_empty() || basename.contains(['/', '\\']) {
            return Err(LexformError::ConfigParseError(format!(
                "[output] basename must be a plain file name, got '{}'",
                self.output.basename
            )));
        }
        Ok(())
    }
}

//! Engagement directories and the workflows that operate on them
//!
//! An engagement is one contract being prepared from a template:
//!
//! ```text
//! <engagement>/
//!   template.md     copy of the source template
//!   params.toml     parameter values, generated from the template
//!   history.log     revision ledger (created by the first revise)
//!   lexform.toml    optional configuration
//!   contract.<ext>  compiled output
//! ```

mod compile;
mod create;
mod status;

pub use status::EngagementStatus;

use crate::config::{Config, MismatchPolicy};
use crate::error::{LexformError, Result};
use crate::fingerprint::Fingerprint;
use crate::ledger::{Ledger, Revision};
use crate::params::ParameterStore;
use std::path::{Path, PathBuf};

pub const TEMPLATE_FILE: &str = "template.md";
pub const PARAMS_FILE: &str = "params.toml";
pub const LEDGER_FILE: &str = "history.log";

/// An existing engagement directory
#[derive(Debug, Clone)]
pub struct Engagement {
    root: PathBuf,
    config: Config,
}

impl Engagement {
    /// Open an engagement, loading `lexform.toml` if present
    ///
    /// # Errors
    ///
    /// Returns [`LexformError::EngagementNotFound`] if `template.md` or
    /// `params.toml` is missing.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        for required in [TEMPLATE_FILE, PARAMS_FILE] {
            if !root.join(required).is_file() {
                return Err(LexformError::EngagementNotFound {
                    path: root,
                    missing: required.to_string(),
                });
            }
        }

        let config = Config::load_or_default(&root)?;
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn template_path(&self) -> PathBuf {
        self.root.join(TEMPLATE_FILE)
    }

    pub fn params_path(&self) -> PathBuf {
        self.root.join(PARAMS_FILE)
    }

    pub fn ledger(&self) -> Ledger {
        Ledger::new(self.root.join(LEDGER_FILE))
    }

    /// Record the current parameters and template in the ledger
    pub fn revise(&self) -> Result<Revision> {
        let (template, params) = self.read_sources()?;
        let revision = self.ledger().append(&params, &template)?;
        tracing::debug!(
            engagement = %self.root.display(),
            fingerprint = %revision.fingerprint,
            "revised"
        );
        Ok(revision)
    }

    /// Raw template and params bytes, in that order
    fn read_sources(&self) -> Result<(Vec<u8>, Vec<u8>)> {
        let template = std::fs::read(self.template_path())?;
        let params = std::fs::read(self.params_path())?;
        Ok((template, params))
    }

    /// Apply the configured mismatch policy
    fn check_template(&self, store: &ParameterStore, actual: &Fingerprint) -> Result<()> {
        match (store.verify_template(actual), self.config.integrity.on_mismatch) {
            (Ok(()), _) | (Err(_), MismatchPolicy::Ignore) => Ok(()),
            (Err(e), MismatchPolicy::Warn) => {
                tracing::warn!("{}", e);
                Ok(())
            }
            (Err(e), MismatchPolicy::Error) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_open_requires_template_and_params() {
        let temp = TempDir::new().unwrap();

        let err = Engagement::open(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            LexformError::EngagementNotFound { ref missing, .. } if missing == TEMPLATE_FILE
        ));

        std::fs::write(temp.path().join(TEMPLATE_FILE), "x").unwrap();
        let err = Engagement::open(temp.path()).unwrap_err();
        assert!(matches!(
            err,
            LexformError::EngagementNotFound { ref missing, .. } if missing == PARAMS_FILE
        ));
    }

    #[test]
    fn test_open_reads_config() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(TEMPLATE_FILE), "x").unwrap();
        std::fs::write(temp.path().join(PARAMS_FILE), "").unwrap();
        std::fs::write(
            temp.path().join("lexform.toml"),
            "[output]\nbasename = \"agreement\"\n",
        )
        .unwrap();

        let engagement = Engagement::open(temp.path()).unwrap();
        assert_eq!(engagement.config().output.basename, "agreement");
        assert_eq!(engagement.ledger().path(), temp.path().join(LEDGER_FILE));
    }
}

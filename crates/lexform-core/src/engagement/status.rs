//! Engagement status report

use super::Engagement;
use crate::error::Result;
use crate::fingerprint::Fingerprint;
use crate::ledger::{entries, verify_latest, LedgerStatus};
use crate::params::ParameterStore;
use crate::template::substitute;
use serde::Serialize;
use std::path::PathBuf;

/// Snapshot of an engagement, as shown by `lexform status`
#[derive(Debug, Clone, Serialize)]
pub struct EngagementStatus {
    pub root: PathBuf,
    /// Fingerprint of `template.md` as it is now
    pub template: Fingerprint,
    /// Fingerprint recorded in `params.toml` when it was generated
    pub recorded_template: Fingerprint,
    pub template_matches: bool,
    /// Placeholders that would fail to resolve on compile
    pub unresolved: Vec<String>,
    pub ledger: LedgerStatus,
    pub revisions: usize,
}

impl EngagementStatus {
    /// Ready to compile without errors under the default policy
    pub fn is_ready(&self) -> bool {
        self.template_matches && self.unresolved.is_empty()
    }
}

impl Engagement {
    /// Inspect fingerprints, missing parameters and the ledger
    ///
    /// Read-only; never fails because of a mismatch or missing values.
    pub fn status(&self) -> Result<EngagementStatus> {
        let (template, params) = self.read_sources()?;
        let store = ParameterStore::from_bytes(&params)?;
        let actual = Fingerprint::of(&template);
        let substitution = substitute(&template, &store, &self.config.syntax)?;

        let ledger_bytes = self.ledger().read()?;
        let revisions = entries(&ledger_bytes)?.len();
        let ledger = verify_latest(&params, &template, &ledger_bytes)?;

        Ok(EngagementStatus {
            root: self.root.clone(),
            template: actual,
            recorded_template: *store.template(),
            template_matches: store.template() == &actual,
            unresolved: substitution.unresolved,
            ledger,
            revisions,
        })
    }
}

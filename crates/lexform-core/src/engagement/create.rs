//! Engagement creation

use super::{Engagement, PARAMS_FILE, TEMPLATE_FILE};
use crate::config::Config;
use crate::error::{LexformError, Result};
use crate::fingerprint::Fingerprint;
use crate::params::build_parameter_schema;
use crate::template::scan_template;
use std::fs;
use std::path::Path;

impl Engagement {
    /// Create a new engagement from a template
    ///
    /// Creates `dir` if needed, copies the template to `template.md` and
    /// writes a `params.toml` with one empty entry per placeholder. A
    /// `lexform.toml` already present in `dir` selects the placeholder syntax.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `dir` already contains `params.toml`
    /// - the template cannot be read or is not UTF-8
    /// - directory creation or file writing fails
    pub fn create(dir: impl AsRef<Path>, template_path: impl AsRef<Path>) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        let template_path = template_path.as_ref();

        if root.join(PARAMS_FILE).exists() {
            return Err(LexformError::EngagementExists(root));
        }

        let template = fs::read(template_path).map_err(|e| {
            LexformError::MalformedTemplate(format!(
                "cannot read '{}': {}",
                template_path.display(),
                e
            ))
        })?;

        let config = Config::load_or_default(&root)?;
        let scan = scan_template(&template, &config.syntax)?;
        let schema = build_parameter_schema(&scan, &Fingerprint::of(&template));

        fs::create_dir_all(&root)?;
        fs::write(root.join(TEMPLATE_FILE), &template)?;
        fs::write(root.join(PARAMS_FILE), schema)?;

        tracing::debug!(
            engagement = %root.display(),
            variables = scan.variables.len(),
            exhibits = scan.exhibits.len(),
            signatures = scan.signatures.len(),
            "engagement created"
        );

        Ok(Self { root, config })
    }
}

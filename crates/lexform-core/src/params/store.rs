//! Parsed parameter values

use super::Namespace;
use crate::error::{LexformError, Result};
use crate::fingerprint::Fingerprint;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use toml::Value;

/// `params.toml` on disk
#[derive(Debug, Deserialize)]
struct ParameterFile {
    meta: MetaSection,
    #[serde(default)]
    var: toml::Table,
    #[serde(default)]
    exhibit: toml::Table,
    #[serde(default)]
    sign: toml::Table,
}

#[derive(Debug, Deserialize)]
struct MetaSection {
    template: String,
}

/// Parameter values keyed by `(namespace, name)`, plus the fingerprint of
/// the template they were generated for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterStore {
    template: Fingerprint,
    values: BTreeMap<(Namespace, String), String>,
}

impl ParameterStore {
    /// Create an empty store bound to a template fingerprint
    pub fn new(template: Fingerprint) -> Self {
        Self {
            template,
            values: BTreeMap::new(),
        }
    }

    /// Builder-style [`set`](Self::set)
    pub fn with(mut self, namespace: Namespace, name: &str, value: &str) -> Self {
        self.set(namespace, name, value);
        self
    }

    pub fn set(&mut self, namespace: Namespace, name: &str, value: &str) {
        self.values
            .insert((namespace, name.to_string()), value.to_string());
    }

    /// Stored value, which may be empty
    pub fn get(&self, namespace: Namespace, name: &str) -> Option<&str> {
        self.values
            .get(&(namespace, name.to_string()))
            .map(String::as_str)
    }

    /// Fingerprint recorded in `[meta] template`
    pub fn template(&self) -> &Fingerprint {
        &self.template
    }

    /// Names in `namespace` whose value is empty, in key order
    pub fn empty_names(&self, namespace: Namespace) -> Vec<&str> {
        self.values
            .iter()
            .filter(|((ns, _), value)| *ns == namespace && value.is_empty())
            .map(|((_, name), _)| name.as_str())
            .collect()
    }

    /// Check the recorded fingerprint against the live template
    ///
    /// # Errors
    ///
    /// Returns [`LexformError::TemplateMismatch`] when they differ.
    pub fn verify_template(&self, actual: &Fingerprint) -> Result<()> {
        if &self.template == actual {
            Ok(())
        } else {
            Err(LexformError::TemplateMismatch {
                recorded: self.template.to_hex(),
                actual: actual.to_hex(),
            })
        }
    }

    /// Parse `params.toml` content
    ///
    /// Scalar values are stringified; nested tables are flattened with `.`
    /// so `party.name = "x"` and `"party.name" = "x"` are equivalent.
    ///
    /// # Errors
    ///
    /// Returns [`LexformError::ParametersInvalid`] if the content is not valid
    /// TOML, lacks `[meta] template`, or holds array values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ParameterFile = toml::from_str(content)
            .map_err(|e| LexformError::ParametersInvalid(e.to_string()))?;

        let template: Fingerprint = file
            .meta
            .template
            .parse()
            .map_err(|e| LexformError::ParametersInvalid(format!("[meta] template: {}", e)))?;

        let mut store = Self::new(template);
        for (namespace, table) in [
            (Namespace::Var, &file.var),
            (Namespace::Exhibit, &file.exhibit),
            (Namespace::Sign, &file.sign),
        ] {
            store.insert_table(namespace, "", table)?;
        }
        Ok(store)
    }

    /// Parse raw `params.toml` bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            LexformError::ParametersInvalid(format!("params file is not UTF-8: {}", e))
        })?;
        Self::from_toml_str(content)
    }

    /// Read and parse a `params.toml` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let bytes = std::fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    fn insert_table(&mut self, namespace: Namespace, prefix: &str, table: &toml::Table) -> Result<()> {
        for (key, value) in table {
            let name = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };

            let text = match value {
                Value::Table(nested) => {
                    self.insert_table(namespace, &name, nested)?;
                    continue;
                }
                Value::String(s) => s.clone(),
                Value::Integer(i) => i.to_string(),
                Value::Float(f) => f.to_string(),
                Value::Boolean(b) => b.to_string(),
                Value::Datetime(dt) => dt.to_string(),
                Value::Array(_) => {
                    return Err(LexformError::ParametersInvalid(format!(
                        "[{}] {}: arrays are not supported, use a string",
                        namespace, name
                    )));
                }
            };
            self.values.insert((namespace, name), text);
        }
        Ok(())
    }
}

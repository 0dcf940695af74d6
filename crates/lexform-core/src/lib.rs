// Core modules
pub mod config;
pub mod engagement;
pub mod error;
pub mod fingerprint;
pub mod ledger;
pub mod output;
pub mod params;
pub mod syntax;
pub mod template;

// Re-export commonly used types
pub use config::Config;
pub use engagement::{Engagement, EngagementStatus};
pub use error::{LexformError, Result};
pub use fingerprint::Fingerprint;
pub use ledger::{append_revision, Ledger, LedgerStatus, Revision};
pub use output::{OutputFormat, Renderer};
pub use params::{build_parameter_schema, Namespace, ParameterStore};
pub use syntax::{Placeholder, PlaceholderSyntax};
pub use template::{scan_template, substitute, ScanResult, Substitution};

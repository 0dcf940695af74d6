use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LexformError {
    // Template errors
    #[error("TEMPLATE_MALFORMED: {0}")]
    MalformedTemplate(String),

    #[error("UNRESOLVED_PLACEHOLDERS: missing params: {}", .names.join(", "))]
    UnresolvedPlaceholders { names: Vec<String> },

    #[error(
        "TEMPLATE_MISMATCH: params.toml was generated for template {recorded}, but template is {actual}"
    )]
    TemplateMismatch { recorded: String, actual: String },

    // Parameter errors
    #[error("PARAMETERS_INVALID: {0}")]
    ParametersInvalid(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    // Output errors
    #[error("UNKNOWN_OUTPUT_FORMAT: unknown output format '{0}' (expected md, html or pdf)")]
    UnknownOutputFormat(String),

    #[error("RENDERER_UNAVAILABLE: {0}")]
    RendererUnavailable(String),

    #[error("RENDER_FAILED: {0}")]
    RenderFailed(String),

    // Ledger errors
    #[error("LEDGER_IO: {operation} on {}: {reason}", .path.display())]
    LedgerIo {
        path: PathBuf,
        operation: String,
        reason: String,
    },

    #[error(
        "LEDGER_BUSY: {} is held by another revision (gave up after {waited_ms} ms)",
        .path.display()
    )]
    LedgerBusy { path: PathBuf, waited_ms: u128 },

    #[error("LEDGER_CORRUPT: line {line}: {reason}")]
    LedgerCorrupt { line: usize, reason: String },

    // Engagement errors
    #[error("ENGAGEMENT_EXISTS: '{}' already contains params.toml", .0.display())]
    EngagementExists(PathBuf),

    #[error("ENGAGEMENT_NOT_FOUND: '{}' is missing {missing}", .path.display())]
    EngagementNotFound { path: PathBuf, missing: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<crate::template::error::TemplateError> for LexformError {
    fn from(err: crate::template::error::TemplateError) -> Self {
        use crate::template::error::TemplateError;
        match err {
            TemplateError::Unresolved { names } => LexformError::UnresolvedPlaceholders { names },
            other => LexformError::MalformedTemplate(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LexformError>;

//! Revision ledger - append-only tamper evidence
//!
//! Each revision records a timestamp and the SHA-256 digest of
//!
//! ```text
//! params.toml bytes ‖ template bytes ‖ every ledger byte written so far
//! ```
//!
//! so every entry covers all entries before it. Editing an old line changes
//! the digest any later revision would compute over it.
//!
//! File layout (`history.log`):
//!
//! ```text
//! # Do not modify this file yourself under any circumstances!
//! 2024-01-01T09:30:00Z: '3F0A...'
//! 2024-01-02T14:05:12Z: '9C41...'
//! ```

mod file;
mod lock;

pub use file::Ledger;

use crate::error::{LexformError, Result};
use crate::fingerprint::Fingerprint;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Written once, when the ledger is created
pub const LEDGER_HEADER: &str = "# Do not modify this file yourself under any circumstances!\n";

/// A freshly computed revision
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revision {
    pub timestamp: DateTime<Utc>,
    pub fingerprint: Fingerprint,
    /// The line to append, including its trailing newline
    pub entry: String,
}

/// A revision read back from the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerEntry {
    /// 1-based line number
    pub line: usize,
    /// Byte offset of the line start; everything before it is the entry's prior state
    #[serde(skip)]
    pub offset: usize,
    pub timestamp: DateTime<Utc>,
    pub fingerprint: Fingerprint,
}

/// Whether the latest revision still matches the current files
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LedgerStatus {
    /// No revision recorded yet
    Empty,
    /// Parameters and template are exactly as last revised
    Current {
        fingerprint: Fingerprint,
        recorded_at: DateTime<Utc>,
    },
    /// Parameters or template changed since the last revision, or the
    /// history before it was edited
    Diverged {
        recorded: Fingerprint,
        computed: Fingerprint,
    },
}

/// Compute the next revision
///
/// Pure: the caller supplies the prior ledger bytes (header included) and the
/// timestamp, and is responsible for appending [`Revision::entry`].
pub fn append_revision(
    params: &[u8],
    template: &[u8],
    prior_ledger: &[u8],
    timestamp: DateTime<Utc>,
) -> Revision {
    let fingerprint = Fingerprint::of_concat(&[params, template, prior_ledger]);
    let entry = format!(
        "{}: '{}'\n",
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        fingerprint
    );
    Revision {
        timestamp,
        fingerprint,
        entry,
    }
}

/// Parse every revision line
///
/// Blank lines and `#` comments (the header) are skipped.
///
/// # Errors
///
/// Returns [`LexformError::LedgerCorrupt`] for non-UTF-8 content or a line
/// that is not `<timestamp>: '<fingerprint>'`.
pub fn entries(ledger: &[u8]) -> Result<Vec<LedgerEntry>> {
    let text = std::str::from_utf8(ledger).map_err(|e| LexformError::LedgerCorrupt {
        line: line_of(ledger, e.valid_up_to()),
        reason: "not valid UTF-8".to_string(),
    })?;

    let mut result = Vec::new();
    let mut offset = 0;
    for (index, raw) in text.split_inclusive('\n').enumerate() {
        let line_start = offset;
        offset += raw.len();

        let line = raw.trim_end_matches(['\n', '\r']);
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let (timestamp, fingerprint) =
            parse_entry(line).map_err(|reason| LexformError::LedgerCorrupt {
                line: index + 1,
                reason,
            })?;
        result.push(LedgerEntry {
            line: index + 1,
            offset: line_start,
            timestamp,
            fingerprint,
        });
    }
    Ok(result)
}

/// Check the latest revision against the current parameters and template
///
/// # Errors
///
/// Returns [`LexformError::LedgerCorrupt`] if the ledger cannot be parsed.
pub fn verify_latest(params: &[u8], template: &[u8], ledger: &[u8]) -> Result<LedgerStatus> {
    let Some(latest) = entries(ledger)?.pop() else {
        return Ok(LedgerStatus::Empty);
    };

    let computed = Fingerprint::of_concat(&[params, template, &ledger[..latest.offset]]);
    if computed == latest.fingerprint {
        Ok(LedgerStatus::Current {
            fingerprint: latest.fingerprint,
            recorded_at: latest.timestamp,
        })
    } else {
        Ok(LedgerStatus::Diverged {
            recorded: latest.fingerprint,
            computed,
        })
    }
}

fn parse_entry(line: &str) -> std::result::Result<(DateTime<Utc>, Fingerprint), String> {
    let (timestamp, quoted) = line
        .rsplit_once(": ")
        .ok_or_else(|| "expected `<timestamp>: '<fingerprint>'`".to_string())?;

    let hex = quoted
        .strip_prefix('\'')
        .and_then(|rest| rest.strip_suffix('\''))
        .ok_or_else(|| "fingerprint must be single-quoted".to_string())?;

    let timestamp = DateTime::parse_from_rfc3339(timestamp)
        .map_err(|e| format!("invalid timestamp '{}': {}", timestamp, e))?
        .with_timezone(&Utc);

    Ok((timestamp, hex.parse()?))
}

fn line_of(bytes: &[u8], offset: usize) -> usize {
    bytes[..offset].iter().filter(|&&b| b == b'\n').count() + 1
}

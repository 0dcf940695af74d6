//! File-backed ledger

use super::{append_revision, entries, verify_latest, LedgerEntry, LedgerStatus, Revision, LEDGER_HEADER};
use crate::error::{LexformError, Result};
use super::lock::LedgerLock;
use chrono::{DateTime, Utc};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(30);

/// The ledger file of one engagement
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
    lock_timeout: Duration,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
        }
    }

    /// How long [`append`](Self::append) waits for a concurrent writer
    pub fn with_lock_timeout(mut self, timeout: Duration) -> Self {
        self.lock_timeout = timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a revision stamped with the current time
    pub fn append(&self, params: &[u8], template: &[u8]) -> Result<Revision> {
        self.append_at(params, template, Utc::now())
    }

    /// Append a revision with an explicit timestamp
    ///
    /// Holds an exclusive lock on the ledger from reading the prior bytes
    /// until the new entry is synced. A missing or empty ledger gets the
    /// header first.
    ///
    /// # Errors
    ///
    /// - [`LexformError::LedgerBusy`] if another append holds the ledger past
    ///   the lock timeout
    /// - [`LexformError::LedgerIo`] if the ledger cannot be created, read or
    ///   written
    pub fn append_at(
        &self,
        params: &[u8],
        template: &[u8],
        timestamp: DateTime<Utc>,
    ) -> Result<Revision> {
        let mut lock = LedgerLock::acquire(&self.path, self.lock_timeout)?;
        let file = lock.file();

        let mut prior = Vec::new();
        file.seek(SeekFrom::Start(0))
            .and_then(|_| file.read_to_end(&mut prior))
            .map_err(|e| self.io_error("read", e))?;

        if prior.is_empty() {
            tracing::debug!(path = %self.path.display(), "creating ledger");
            file.write_all(LEDGER_HEADER.as_bytes())
                .map_err(|e| self.io_error("write header", e))?;
            prior.extend_from_slice(LEDGER_HEADER.as_bytes());
        } else if !prior.ends_with(b"\n") {
            // A hand-edited ledger may lack the final newline; the entry
            // must still start on a line of its own
            tracing::debug!(path = %self.path.display(), "terminating last ledger line");
            file.write_all(b"\n")
                .map_err(|e| self.io_error("write newline", e))?;
            prior.push(b'\n');
        }

        let revision = append_revision(params, template, &prior, timestamp);
        file.write_all(revision.entry.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|e| self.io_error("append", e))?;

        tracing::debug!(fingerprint = %revision.fingerprint, "revision appended");
        Ok(revision)
    }

    /// Raw ledger bytes; empty if the ledger does not exist yet
    pub fn read(&self) -> Result<Vec<u8>> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error("read", e)),
        }
    }

    /// Every recorded revision, oldest first
    pub fn entries(&self) -> Result<Vec<LedgerEntry>> {
        entries(&self.read()?)
    }

    /// Check the latest revision against the current files
    pub fn verify_latest(&self, params: &[u8], template: &[u8]) -> Result<LedgerStatus> {
        verify_latest(params, template, &self.read()?)
    }

    fn io_error(&self, operation: &str, err: io::Error) -> LexformError {
        LexformError::LedgerIo {
            path: self.path.clone(),
            operation: operation.to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fingerprint::Fingerprint;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, minute, 0).unwrap()
    }

    #[test]
    fn test_first_append_writes_header() {
        let temp = TempDir::new().unwrap();
        let ledger = Ledger::new(temp.path().join("history.log"));

        let revision = ledger.append_at(b"p", b"t", at(0)).unwrap();

        let content = std::fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(content, format!("{}{}", LEDGER_HEADER, revision.entry));
        assert_eq!(
            revision.fingerprint,
            Fingerprint::of_concat(&[b"p", b"t", LEDGER_HEADER.as_bytes()])
        );
    }

    #[test]
    fn test_header_written_once() {
        let temp = TempDir::new().unwrap();
        let ledger = Ledger::new(temp.path().join("history.log"));

        ledger.append_at(b"p", b"t", at(0)).unwrap();
        ledger.append_at(b"p", b"t", at(1)).unwrap();

        let content = std::fs::read_to_string(ledger.path()).unwrap();
        assert_eq!(content.matches(LEDGER_HEADER).count(), 1);
        assert_eq!(content.lines().count(), 3);
    }

    #[test]
    fn test_second_append_covers_first() {
        let temp = TempDir::new().unwrap();
        let ledger = Ledger::new(temp.path().join("history.log"));

        let first = ledger.append_at(b"p", b"t", at(0)).unwrap();
        let prior = ledger.read().unwrap();
        let second = ledger.append_at(b"p", b"t", at(0)).unwrap();

        assert_ne!(first.fingerprint, second.fingerprint);
        assert_eq!(
            second.fingerprint,
            Fingerprint::of_concat(&[b"p", b"t", &prior])
        );
    }

    #[test]
    fn test_existing_content_is_preserved() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.log");
        std::fs::write(&path, LEDGER_HEADER).unwrap();
        let ledger = Ledger::new(&path);

        ledger.append_at(b"p", b"t", at(0)).unwrap();
        let entries = ledger.entries().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].timestamp, at(0));
    }

    #[test]
    fn test_append_after_missing_final_newline() {
        let temp = TempDir::new().unwrap();
        let ledger = Ledger::new(temp.path().join("history.log"));
        ledger.append_at(b"p", b"t", at(0)).unwrap();

        let truncated = ledger.read().unwrap();
        std::fs::write(ledger.path(), &truncated[..truncated.len() - 1]).unwrap();

        let second = ledger.append_at(b"p", b"t", at(1)).unwrap();
        let entries = ledger.entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].timestamp, at(1));
        assert_eq!(
            second.fingerprint,
            Fingerprint::of_concat(&[b"p", b"t", &truncated])
        );
        assert!(matches!(
            ledger.verify_latest(b"p", b"t").unwrap(),
            LedgerStatus::Current { .. }
        ));
    }

    #[test]
    fn test_read_missing_ledger_is_empty() {
        let temp = TempDir::new().unwrap();
        let ledger = Ledger::new(temp.path().join("absent.log"));
        assert!(ledger.read().unwrap().is_empty());
        assert_eq!(ledger.verify_latest(b"p", b"t").unwrap(), LedgerStatus::Empty);
    }

    #[test]
    fn test_verify_after_append() {
        let temp = TempDir::new().unwrap();
        let ledger = Ledger::new(temp.path().join("history.log"));
        let revision = ledger.append(b"p", b"t").unwrap();

        assert!(matches!(
            ledger.verify_latest(b"p", b"t").unwrap(),
            LedgerStatus::Current { fingerprint, .. } if fingerprint == revision.fingerprint
        ));
        assert!(matches!(
            ledger.verify_latest(b"p", b"changed").unwrap(),
            LedgerStatus::Diverged { .. }
        ));
    }

    #[test]
    fn test_held_ledger_reports_busy_and_is_untouched() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("history.log");
        let ledger = Ledger::new(&path).with_lock_timeout(Duration::from_millis(50));
        ledger.append_at(b"p", b"t", at(0)).unwrap();
        let before = std::fs::read(&path).unwrap();

        let _held = LedgerLock::acquire(&path, Duration::from_secs(5)).unwrap();
        let err = ledger.append_at(b"p2", b"t", at(1)).unwrap_err();
        assert!(matches!(err, LexformError::LedgerBusy { path: ref busy, .. } if busy == &path));
        assert_eq!(std::fs::read(&path).unwrap(), before);
    }
}

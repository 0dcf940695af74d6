//! Exclusive lock on the ledger file
//!
//! Two `revise` runs against the same engagement must not both read the same
//! prior bytes and chain onto them. The ledger is opened append-or-create and
//! an advisory `fs2` lock is held on that handle for the whole
//! read-then-append. Contention is retried on a doubling delay until the
//! ledger's timeout; giving up is [`LexformError::LedgerBusy`].

use crate::error::{LexformError, Result};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant};

const FIRST_DELAY: Duration = Duration::from_millis(10);
const MAX_DELAY: Duration = Duration::from_millis(500);

/// The ledger, open for read + append and exclusively locked
///
/// Dropping it releases the lock on every exit path.
#[derive(Debug)]
pub(crate) struct LedgerLock {
    file: File,
}

impl LedgerLock {
    /// Open (creating parent directories and the file if needed) and lock
    pub(crate) fn acquire(path: &Path, timeout: Duration) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error(path, "create directory", e))?;
        }
        // Never truncates
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| io_error(path, "open", e))?;

        let started = Instant::now();
        let mut delays = Backoff::until(started + timeout);
        loop {
            match file.try_lock_exclusive() {
                Ok(()) => {
                    tracing::debug!(path = %path.display(), "ledger locked");
                    return Ok(Self { file });
                }
                Err(e) if e.kind() != fs2::lock_contended_error().kind() => {
                    return Err(io_error(path, "lock", e));
                }
                Err(_) => {}
            }

            let Some(delay) = delays.next() else {
                return Err(LexformError::LedgerBusy {
                    path: path.to_path_buf(),
                    waited_ms: started.elapsed().as_millis(),
                });
            };
            if delays.retries == 1 {
                tracing::info!(path = %path.display(), "ledger is held by another revision; waiting");
            }
            thread::sleep(delay);
        }
    }

    pub(crate) fn file(&mut self) -> &mut File {
        &mut self.file
    }
}

impl Drop for LedgerLock {
    fn drop(&mut self) {
        let _ = self.file.unlock();
    }
}

/// Doubling sleep intervals, capped at [`MAX_DELAY`] and clipped so the
/// last one ends at the deadline
#[derive(Debug)]
struct Backoff {
    next: Duration,
    deadline: Instant,
    retries: u32,
}

impl Backoff {
    fn until(deadline: Instant) -> Self {
        Self {
            next: FIRST_DELAY,
            deadline,
            retries: 0,
        }
    }
}

impl Iterator for Backoff {
    type Item = Duration;

    fn next(&mut self) -> Option<Duration> {
        let remaining = self.deadline.checked_duration_since(Instant::now())?;
        if remaining.is_zero() {
            return None;
        }
        let delay = self.next.min(remaining);
        self.next = (self.next * 2).min(MAX_DELAY);
        self.retries += 1;
        Some(delay)
    }
}

fn io_error(path: &Path, operation: &str, err: std::io::Error) -> LexformError {
    LexformError::LedgerIo {
        path: PathBuf::from(path),
        operation: operation.to_string(),
        reason: err.to_string(),
    }
}

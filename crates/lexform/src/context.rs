//! Locating the engagement a command operates on

use anyhow::{Result, anyhow};
use lexform_core::Engagement;
use std::env;
use std::path::PathBuf;

/// Open the engagement in `dir`, or in the current directory
///
/// # Errors
///
/// Returns an error if the directory is not an engagement or its
/// `lexform.toml` cannot be parsed.
pub fn open_engagement(dir: Option<PathBuf>) -> Result<Engagement> {
    let root = match dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };

    Engagement::open(&root).map_err(|e| {
        anyhow!(
            "{}\n  hint: run `lexform new <dir> <template>` first, or pass --dir",
            e
        )
    })
}

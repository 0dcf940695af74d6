//! Test utilities for lexform
//!
//! This crate provides shared testing utilities used across the lexform workspace.

pub mod fixtures;

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// This keeps test engagements in a single gitignored location that is easy
/// to inspect when a test fails.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use lexform_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("template.md");
/// std::fs::write(&file_path, "Hello {{name}}").unwrap();
/// // Cleanup happens automatically when temp is dropped
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

//! Tests for placeholder scanning and substitution
//!
//! Organized into focused submodules, one per concern.

use super::*;

// Test helper functions
mod helpers;


// Scanner tests
mod scan_basic;

mod render_exhibits;

//! `lexform.toml` - optional per-engagement configuration

mod model;

pub use model::{Config, IntegrityConfig, MismatchPolicy, OutputConfig};

/// Config file name, looked up in the engagement root
pub const CONFIG_FILE: &str = "lexform.toml";

//! CLI command implementations

pub mod compile;
pub mod new;
pub mod revise;
pub mod scan;
pub mod status;

//! Parameter files
//!
//! `params.toml` is the editable surface of an engagement. It is generated
//! once from the template with every value empty ([`build_parameter_schema`]),
//! filled in by hand, then parsed into a [`ParameterStore`] for rendering.

pub mod schema;
pub mod store;

pub use schema::build_parameter_schema;
pub use store::ParameterStore;

use std::fmt;

/// Parameter namespace, one per `params.toml` section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    Var,
    Exhibit,
    Sign,
}

impl Namespace {
    pub const ALL: [Namespace; 3] = [Namespace::Var, Namespace::Exhibit, Namespace::Sign];

    /// Section header name in `params.toml`
    pub fn section(self) -> &'static str {
        match self {
            Namespace::Var => "var",
            Namespace::Exhibit => "exhibit",
            Namespace::Sign => "sign",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section())
    }
}

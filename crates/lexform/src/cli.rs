//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lexform")]
#[command(version, about = "Assemble contracts from templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an engagement from a template
    New {
        /// Engagement directory to create
        dir: PathBuf,

        /// Template to copy into the engagement
        template: PathBuf,
    },

    /// Render the contract from params.toml
    Compile {
        /// Output format: md, html or pdf
        #[arg(short, long, default_value = "md")]
        output: String,

        /// Engagement directory (defaults to the current directory)
        #[arg(short, long, env = "LEXFORM_DIR")]
        dir: Option<PathBuf>,
    },

    /// Record the current parameters and template in history.log
    Revise {
        /// Engagement directory (defaults to the current directory)
        #[arg(short, long, env = "LEXFORM_DIR")]
        dir: Option<PathBuf>,
    },

    /// List the placeholders a template uses
    Scan {
        /// Template file
        template: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Show fingerprints, missing parameters and ledger state
    Status {
        /// Engagement directory (defaults to the current directory)
        #[arg(short, long, env = "LEXFORM_DIR")]
        dir: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },
}

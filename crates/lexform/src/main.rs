mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::New { dir, template } => commands::new::run(dir, template, cli.verbose),
        Commands::Compile { output, dir } => commands::compile::run(output, dir, cli.verbose),
        Commands::Revise { dir } => commands::revise::run(dir, cli.verbose),
        Commands::Scan { template, json } => commands::scan::run(template, json, cli.verbose),
        Commands::Status { dir, json } => commands::status::run(dir, json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the default level
fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

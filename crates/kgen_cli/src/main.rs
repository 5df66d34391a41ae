//! kgen CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Missing or invalid argument
//! - 3: Template error
//! - 4: I/O error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kgen_manifest::ManifestError;

mod commands;

use commands::{Cli, Commands};

/// Script-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const TEMPLATE_ERROR: u8 = 3;
    pub const IO_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    // Initialize logging
    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(
            EnvFilter::from_default_env()
                .add_directive("kgen=info".parse().unwrap())
                .add_directive("warn".parse().unwrap()),
        )
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Deployment(args) => commands::deployment::execute(args),
        Commands::Pod(args) => commands::pod::execute(args),
        Commands::Service(args) => commands::service::execute(args),
        Commands::Ingress(args) => commands::ingress::execute(args),
        Commands::IngressRoute(args) => commands::ingressroute::execute(args),
        Commands::ConfigMap(args) => commands::configmap::execute(args),
        Commands::Secret(args) => commands::secret::execute(args),
        Commands::Pvc(args) => commands::pvc::execute(args),
        Commands::Pv => commands::pv::execute(),
        Commands::Namespace(args) => commands::namespace::execute(args),
        Commands::Init => commands::init::execute(),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("❌ Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    match e.downcast_ref::<ManifestError>() {
        Some(ManifestError::MissingFlag(_)) => ExitCodes::INVALID_ARGS,
        Some(
            ManifestError::UnknownPlaceholder(_)
            | ManifestError::MalformedTemplate(_)
            | ManifestError::TemplateFileNotFound(_),
        ) => ExitCodes::TEMPLATE_ERROR,
        Some(ManifestError::Io(_)) => ExitCodes::IO_ERROR,
        None => ExitCodes::GENERAL_ERROR,
    }
}

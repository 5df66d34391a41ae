//! IngressRoute command - generate a Traefik IngressRoute manifest.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kgen_manifest::{resolver, Generator, IngressRouteRequest, ManifestError};

#[derive(Args)]
pub struct IngressRouteArgs {
    /// Name of the IngressRoute
    #[arg(short, long)]
    pub name: Option<String>,

    /// Namespace for the IngressRoute
    #[arg(short = 'N', long, default_value = "default")]
    pub namespace: String,

    /// Host for the IngressRoute
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Service name for the IngressRoute backend (defaults to <name>-service)
    #[arg(short = 's', long = "service-name")]
    pub service_name: Option<String>,

    /// Service port for the IngressRoute backend
    #[arg(short = 'p', long = "service-port", default_value_t = 80)]
    pub service_port: u16,

    /// Display IngressRoute template
    #[arg(short, long)]
    pub template: bool,
}

pub fn execute(args: IngressRouteArgs) -> Result<()> {
    let generator = Generator::new();

    if args.template {
        let rendered =
            generator.preview(&IngressRouteRequest::preview_defaults().into_manifest())?;
        println!("Template for ingressroute:\n");
        println!("{rendered}");
        return Ok(());
    }

    if args.service_port == 0 {
        return Err(ManifestError::MissingFlag("service-port".to_string()).into());
    }

    let request = IngressRouteRequest::new(
        resolver::require("name", args.name.as_deref().unwrap_or(""))?,
        args.namespace,
        resolver::require("host", args.host.as_deref().unwrap_or(""))?,
        args.service_name,
        args.service_port,
    );

    info!(
        "Generating ingressroute manifest for '{}' (backend '{}')",
        request.name, request.service_name
    );

    let path = generator
        .write(&request.into_manifest())
        .context("Failed to write ingressroute manifest")?;
    println!(
        "✅ IngressRoute file '{}' created successfully.",
        path.display()
    );

    Ok(())
}

//! Ingress command - generate a Kubernetes Ingress manifest.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kgen_manifest::{resolver, Generator, IngressRequest, ManifestError};

#[derive(Args)]
pub struct IngressArgs {
    /// Name of the Ingress
    #[arg(short, long)]
    pub name: Option<String>,

    /// Namespace for the Ingress
    #[arg(short = 'N', long, default_value = "default")]
    pub namespace: String,

    /// Host for the Ingress
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Service name for the Ingress backend
    #[arg(short = 's', long = "service-name")]
    pub service_name: Option<String>,

    /// Service port for the Ingress backend
    #[arg(short = 'p', long = "service-port", default_value_t = 80)]
    pub service_port: u16,

    /// Display Ingress template
    #[arg(short, long)]
    pub template: bool,
}

pub fn execute(args: IngressArgs) -> Result<()> {
    let generator = Generator::new();

    if args.template {
        let rendered = generator.preview(&IngressRequest::preview_defaults().into_manifest())?;
        println!("Template for ingress:\n");
        println!("{rendered}");
        return Ok(());
    }

    if args.service_port == 0 {
        return Err(ManifestError::MissingFlag("service-port".to_string()).into());
    }

    let request = IngressRequest {
        name: resolver::require("name", args.name.as_deref().unwrap_or(""))?,
        namespace: args.namespace,
        host: resolver::require("host", args.host.as_deref().unwrap_or(""))?,
        service_name: resolver::require(
            "service-name",
            args.service_name.as_deref().unwrap_or(""),
        )?,
        service_port: args.service_port,
    };

    info!("Generating ingress manifest for '{}'", request.name);

    let path = generator
        .write(&request.into_manifest())
        .context("Failed to write ingress manifest")?;
    println!("✅ Ingress file '{}' created successfully.", path.display());

    Ok(())
}

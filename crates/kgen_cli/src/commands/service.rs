//! Service command - generate a Kubernetes Service manifest.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kgen_manifest::{resolver, Generator, ServiceRequest, ServiceType};

#[derive(Args)]
pub struct ServiceArgs {
    /// Name of the service (falls back to KGEN_NAME)
    #[arg(short, long)]
    pub name: Option<String>,

    /// NodePort value (sets service type to NodePort)
    #[arg(long)]
    pub nodeport: Option<u16>,

    /// Set service type to LoadBalancer
    #[arg(long)]
    pub loadbalancer: bool,

    /// Namespace for the service (falls back to KGEN_NAMESPACE)
    #[arg(short = 'N', long)]
    pub namespace: Option<String>,

    /// Display service template
    #[arg(short, long)]
    pub template: bool,
}

pub fn execute(args: ServiceArgs) -> Result<()> {
    let generator = Generator::new();
    let service_type = ServiceType::from_flags(args.nodeport, args.loadbalancer);

    if args.template {
        let mut request = ServiceRequest::preview_defaults();
        request.service_type = service_type;
        let rendered = generator.preview(&request.into_manifest())?;
        println!("Template for service:\n");
        println!("{rendered}");
        return Ok(());
    }

    let name = resolver::resolve_env(args.name.as_deref().unwrap_or(""), "KGEN_NAME");
    let namespace = resolver::resolve_env(args.namespace.as_deref().unwrap_or(""), "KGEN_NAMESPACE");

    let request = ServiceRequest {
        name: resolver::require("name", &name)?,
        namespace,
        service_type,
    };

    info!(
        "Generating {} service manifest for '{}'",
        request.service_type.as_str(),
        request.name
    );

    let path = generator
        .write(&request.into_manifest())
        .context("Failed to write service manifest")?;
    println!("✅ Service file '{}' created successfully.", path.display());

    Ok(())
}

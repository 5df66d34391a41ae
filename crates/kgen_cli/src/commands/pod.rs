//! Pod command - generate a Kubernetes Pod manifest.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kgen_manifest::{resolver, Generator, PodRequest};

#[derive(Args)]
pub struct PodArgs {
    /// Name of the pod (falls back to KGEN_NAME)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Docker image for the pod (falls back to KGEN_IMAGE)
    #[arg(short, long)]
    pub image: Option<String>,

    /// Namespace for the pod (falls back to KGEN_NAMESPACE)
    #[arg(short = 'N', long)]
    pub namespace: Option<String>,

    /// Display pod template
    #[arg(short, long)]
    pub template: bool,
}

pub fn execute(args: PodArgs) -> Result<()> {
    let generator = Generator::new();

    if args.template {
        let rendered = generator.preview(&PodRequest::preview_defaults().into_manifest())?;
        println!("Template for pod:\n");
        println!("{rendered}");
        return Ok(());
    }

    let name = resolver::resolve_env(args.name.as_deref().unwrap_or(""), "KGEN_NAME");
    let image = resolver::resolve_env(args.image.as_deref().unwrap_or(""), "KGEN_IMAGE");
    let namespace = resolver::resolve_env(args.namespace.as_deref().unwrap_or(""), "KGEN_NAMESPACE");

    let request = PodRequest {
        name: resolver::require("name", &name)?,
        image: resolver::require("image", &image)?,
        namespace,
    };

    info!("Generating pod manifest for '{}'", request.name);

    let path = generator
        .write(&request.into_manifest())
        .context("Failed to write pod manifest")?;
    println!("✅ Pod file '{}' created successfully.", path.display());

    Ok(())
}

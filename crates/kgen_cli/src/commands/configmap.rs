//! ConfigMap command - generate a Kubernetes ConfigMap manifest.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kgen_manifest::{resolver, ConfigMapRequest, Generator};

#[derive(Args)]
pub struct ConfigMapArgs {
    /// Name of the ConfigMap
    #[arg(short, long)]
    pub name: Option<String>,

    /// Namespace for the ConfigMap
    #[arg(short = 'N', long, default_value = "default")]
    pub namespace: String,

    /// Display ConfigMap template
    #[arg(short, long)]
    pub template: bool,
}

pub fn execute(args: ConfigMapArgs) -> Result<()> {
    let generator = Generator::new();

    if args.template {
        let rendered = generator.preview(&ConfigMapRequest::preview_defaults().into_manifest())?;
        println!("Template for configmap:\n");
        println!("{rendered}");
        return Ok(());
    }

    let request = ConfigMapRequest {
        name: resolver::require("name", args.name.as_deref().unwrap_or(""))?,
        namespace: args.namespace,
    };

    info!("Generating configmap manifest for '{}'", request.name);

    let path = generator
        .write(&request.into_manifest())
        .context("Failed to write configmap manifest")?;
    println!("✅ ConfigMap file '{}' created successfully.", path.display());

    Ok(())
}

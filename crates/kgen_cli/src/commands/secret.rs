//! Secret command - generate a Kubernetes Secret manifest.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kgen_manifest::{resolver, Generator, SecretRequest};

#[derive(Args)]
pub struct SecretArgs {
    /// Name of the Secret
    #[arg(short, long)]
    pub name: Option<String>,

    /// Namespace for the Secret
    #[arg(short = 'N', long, default_value = "default")]
    pub namespace: String,

    /// Display Secret template
    #[arg(short, long)]
    pub template: bool,
}

pub fn execute(args: SecretArgs) -> Result<()> {
    let generator = Generator::new();

    if args.template {
        let rendered = generator.preview(&SecretRequest::preview_defaults().into_manifest())?;
        println!("Template for secret:\n");
        println!("{rendered}");
        return Ok(());
    }

    let request = SecretRequest {
        name: resolver::require("name", args.name.as_deref().unwrap_or(""))?,
        namespace: args.namespace,
    };

    info!("Generating secret manifest for '{}'", request.name);

    let path = generator
        .write(&request.into_manifest())
        .context("Failed to write secret manifest")?;
    println!("✅ Secret file '{}' created successfully.", path.display());

    Ok(())
}

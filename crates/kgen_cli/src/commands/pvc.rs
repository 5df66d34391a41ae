//! PVC command - generate a Kubernetes PersistentVolumeClaim manifest.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kgen_manifest::{resolver, Generator, PvcRequest};

#[derive(Args)]
pub struct PvcArgs {
    /// Name of the PersistentVolumeClaim
    #[arg(short, long)]
    pub name: Option<String>,

    /// Namespace for the PersistentVolumeClaim
    #[arg(short = 'N', long, default_value = "default")]
    pub namespace: String,

    /// Storage size for the PersistentVolumeClaim
    #[arg(short = 's', long = "storagesize", default_value = "1Gi")]
    pub storage_size: String,

    /// Access mode for the PersistentVolumeClaim
    #[arg(short = 'a', long = "accessmode", default_value = "ReadWriteOnce")]
    pub access_mode: String,

    /// Storage class name for the PersistentVolumeClaim
    #[arg(short = 'c', long = "storageclassname")]
    pub storage_class_name: Option<String>,

    /// Display PersistentVolumeClaim template
    #[arg(short, long)]
    pub template: bool,
}

pub fn execute(args: PvcArgs) -> Result<()> {
    let generator = Generator::new();

    if args.template {
        let rendered = generator.preview(&PvcRequest::preview_defaults().into_manifest())?;
        println!("Template for pvc:\n");
        println!("{rendered}");
        return Ok(());
    }

    let request = PvcRequest {
        name: resolver::require("name", args.name.as_deref().unwrap_or(""))?,
        namespace: args.namespace,
        storage_size: args.storage_size,
        access_mode: args.access_mode,
        storage_class_name: args.storage_class_name,
    };

    info!("Generating pvc manifest for '{}'", request.name);

    let path = generator
        .write(&request.into_manifest())
        .context("Failed to write pvc manifest")?;
    println!(
        "✅ PersistentVolumeClaim file '{}' created successfully.",
        path.display()
    );

    Ok(())
}

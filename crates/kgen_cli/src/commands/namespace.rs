//! Namespace command - generate a Kubernetes Namespace manifest.
//!
//! Unlike the other kinds, the namespace template is read from
//! `templates/namespace.yaml` on disk rather than embedded.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use kgen_manifest::{
    resolver, FileTemplateSource, Generator, NamespaceRequest, ResourceKind, TemplateSource,
};

const TEMPLATES_DIR: &str = "templates";

#[derive(Args)]
pub struct NamespaceArgs {
    /// Name of the Namespace
    #[arg(short, long)]
    pub name: Option<String>,

    /// Display Namespace template
    #[arg(short, long)]
    pub template: bool,
}

pub fn execute(args: NamespaceArgs) -> Result<()> {
    let generator = Generator::new();
    let source = FileTemplateSource::new(TEMPLATES_DIR);

    if args.template {
        let template = source.load(ResourceKind::Namespace)?;
        let rendered =
            generator.preview(&NamespaceRequest::preview_defaults().into_manifest(template))?;
        println!("Template for namespace:\n");
        println!("{rendered}");
        return Ok(());
    }

    let request = NamespaceRequest {
        name: resolver::require("name", args.name.as_deref().unwrap_or(""))?,
    };

    info!("Generating namespace manifest for '{}'", request.name);

    let template = source.load(ResourceKind::Namespace)?;
    let path = generator
        .write(&request.into_manifest(template))
        .context("Failed to write namespace manifest")?;
    println!("✅ Namespace file '{}' created successfully.", path.display());

    Ok(())
}

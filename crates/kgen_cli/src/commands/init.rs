//! Init command - write the default set of Kubernetes manifests.

use anyhow::{Context, Result};

use kgen_manifest::{fixed, Generator};

pub fn execute() -> Result<()> {
    let generator = Generator::new();

    for (filename, content) in fixed::INIT_MANIFESTS {
        generator
            .write_fixed(filename, content)
            .with_context(|| format!("Failed to write '{}'", filename))?;
    }

    println!("✅ Default Kubernetes files created successfully.");
    Ok(())
}

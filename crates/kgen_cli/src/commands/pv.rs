//! PV command - write the fixed PersistentVolume manifest.

use anyhow::{Context, Result};

use kgen_manifest::{fixed, Generator};

pub fn execute() -> Result<()> {
    let generator = Generator::new();

    let path = generator
        .write_fixed("pv.yaml", fixed::PV_MANIFEST)
        .context("Failed to write pv manifest")?;
    println!(
        "✅ PersistentVolume file '{}' created successfully.",
        path.display()
    );

    Ok(())
}

//! Render-and-emit: the one routine shared by every resource command.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ManifestResult;
use crate::manifest::Manifest;
use crate::renderer::TemplateRenderer;

/// Renders manifests and emits them, either as preview text or as a YAML file
/// in the output directory.
pub struct Generator {
    renderer: TemplateRenderer,
    output_dir: PathBuf,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Generator writing into the current working directory.
    pub fn new() -> Self {
        Self::with_output_dir(PathBuf::new())
    }

    /// Generator writing into a specific directory.
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            renderer: TemplateRenderer::new(),
            output_dir: dir.into(),
        }
    }

    /// Render a manifest without touching the filesystem.
    pub fn preview(&self, manifest: &Manifest) -> ManifestResult<String> {
        self.renderer.render(manifest.template(), manifest.fields())
    }

    /// Render a manifest and write it to `<name>-<kind>.yaml`, overwriting any
    /// existing file. Returns the path written.
    pub fn write(&self, manifest: &Manifest) -> ManifestResult<PathBuf> {
        let rendered = self.preview(manifest)?;
        let path = self.output_dir.join(manifest.filename());
        fs::write(&path, rendered)?;
        info!("Wrote {} manifest to {:?}", manifest.kind(), path);
        Ok(path)
    }

    /// Write a fixed manifest body to a fixed filename, used by the `init` and
    /// `pv` commands.
    pub fn write_fixed(&self, filename: &str, content: &str) -> ManifestResult<PathBuf> {
        let path = self.output_dir.join(filename);
        fs::write(&path, content)?;
        debug!("Wrote fixed manifest to {:?}", path);
        Ok(path)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ResourceKind;
    use tempfile::tempdir;

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp = tempdir().unwrap();
        let generator = Generator::with_output_dir(temp.path());
        let manifest = Manifest::new(ResourceKind::ConfigMap, "name: {{name}}\n")
            .with_field("name", "app");

        let first = generator.write(&manifest).unwrap();
        fs::write(&first, "stale content").unwrap();
        let second = generator.write(&manifest).unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read_to_string(&second).unwrap(), "name: app\n");
    }

    #[test]
    fn test_write_fails_on_unwritable_directory() {
        let generator = Generator::with_output_dir("/nonexistent/output/dir");
        let manifest =
            Manifest::new(ResourceKind::Pod, "name: {{name}}\n").with_field("name", "app");
        assert!(generator.write(&manifest).is_err());
    }
}

//! Template sources.
//!
//! Most templates are embedded in [`crate::requests`]; the Namespace command
//! reads its template from disk. The trait keeps that one filesystem
//! dependency injectable so tests can serve templates from memory.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ManifestError, ManifestResult};
use crate::kind::ResourceKind;

/// Supplies template text for a resource kind.
pub trait TemplateSource {
    fn load(&self, kind: ResourceKind) -> ManifestResult<String>;
}

/// Reads templates from `<root>/<kind>.yaml` on disk.
pub struct FileTemplateSource {
    root: PathBuf,
}

impl FileTemplateSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TemplateSource for FileTemplateSource {
    fn load(&self, kind: ResourceKind) -> ManifestResult<String> {
        let path = self.root.join(format!("{}.yaml", kind.suffix()));
        debug!("Loading template from {:?}", path);
        if !path.exists() {
            return Err(ManifestError::TemplateFileNotFound(path));
        }
        Ok(fs::read_to_string(&path)?)
    }
}

/// Serves a fixed template string, independent of kind.
pub struct StaticTemplateSource {
    template: String,
}

impl StaticTemplateSource {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl TemplateSource for StaticTemplateSource {
    fn load(&self, _kind: ResourceKind) -> ManifestResult<String> {
        Ok(self.template.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_source_loads_template() {
        let temp = tempdir().unwrap();
        let template = "kind: Namespace\nmetadata:\n  name: {{name}}\n";
        fs::write(temp.path().join("namespace.yaml"), template).unwrap();

        let source = FileTemplateSource::new(temp.path());
        assert_eq!(source.load(ResourceKind::Namespace).unwrap(), template);
    }

    #[test]
    fn test_file_source_missing_template() {
        let temp = tempdir().unwrap();
        let source = FileTemplateSource::new(temp.path());
        let err = source.load(ResourceKind::Namespace).unwrap_err();
        assert!(matches!(err, ManifestError::TemplateFileNotFound(ref p)
            if p.ends_with("namespace.yaml")));
    }

    #[test]
    fn test_static_source() {
        let source = StaticTemplateSource::new("kind: Namespace\n");
        assert_eq!(
            source.load(ResourceKind::Namespace).unwrap(),
            "kind: Namespace\n"
        );
    }
}

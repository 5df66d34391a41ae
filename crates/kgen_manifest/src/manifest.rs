//! A renderable manifest: template text plus its field map.

use std::collections::BTreeMap;

use crate::kind::ResourceKind;

/// A manifest ready to be rendered: the resource kind, the template text and
/// the fields to substitute into it.
///
/// Built from the per-kind request types in [`crate::requests`] and consumed
/// by [`crate::generator::Generator`].
#[derive(Debug, Clone)]
pub struct Manifest {
    kind: ResourceKind,
    template: String,
    fields: BTreeMap<String, String>,
}

impl Manifest {
    /// Create a manifest for a kind with the given template text.
    pub fn new(kind: ResourceKind, template: impl Into<String>) -> Self {
        Self {
            kind,
            template: template.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a field to substitute into the template.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// Conventional output filename: `<name>-<kind>.yaml`.
    pub fn filename(&self) -> String {
        match self.fields.get("name") {
            Some(name) => format!("{}-{}.yaml", name, self.kind.suffix()),
            None => format!("{}.yaml", self.kind.suffix()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_convention() {
        let manifest = Manifest::new(ResourceKind::Deployment, "kind: Deployment\n")
            .with_field("name", "web");
        assert_eq!(manifest.filename(), "web-deployment.yaml");
    }

    #[test]
    fn test_filename_without_name_field() {
        let manifest = Manifest::new(ResourceKind::Pv, "kind: PersistentVolume\n");
        assert_eq!(manifest.filename(), "pv.yaml");
    }
}

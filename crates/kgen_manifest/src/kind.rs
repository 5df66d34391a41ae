//! Resource kinds supported by the generator.

use std::fmt;

/// The category of Kubernetes manifest a command generates.
///
/// Each kind has its own template and field set; the lowercase suffix is
/// used in output filenames (`<name>-<suffix>.yaml`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Deployment,
    Pod,
    Service,
    Ingress,
    IngressRoute,
    ConfigMap,
    Secret,
    Pvc,
    Pv,
    Namespace,
}

impl ResourceKind {
    /// Lowercase suffix used in filenames and template lookups.
    pub fn suffix(&self) -> &'static str {
        match self {
            ResourceKind::Deployment => "deployment",
            ResourceKind::Pod => "pod",
            ResourceKind::Service => "service",
            ResourceKind::Ingress => "ingress",
            ResourceKind::IngressRoute => "ingressroute",
            ResourceKind::ConfigMap => "configmap",
            ResourceKind::Secret => "secret",
            ResourceKind::Pvc => "pvc",
            ResourceKind::Pv => "pv",
            ResourceKind::Namespace => "namespace",
        }
    }

    /// Human-readable label used in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Deployment => "Deployment",
            ResourceKind::Pod => "Pod",
            ResourceKind::Service => "Service",
            ResourceKind::Ingress => "Ingress",
            ResourceKind::IngressRoute => "IngressRoute",
            ResourceKind::ConfigMap => "ConfigMap",
            ResourceKind::Secret => "Secret",
            ResourceKind::Pvc => "PersistentVolumeClaim",
            ResourceKind::Pv => "PersistentVolume",
            ResourceKind::Namespace => "Namespace",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suffix_and_label() {
        assert_eq!(ResourceKind::Deployment.suffix(), "deployment");
        assert_eq!(ResourceKind::IngressRoute.suffix(), "ingressroute");
        assert_eq!(ResourceKind::Pvc.label(), "PersistentVolumeClaim");
        assert_eq!(ResourceKind::Namespace.to_string(), "namespace");
    }
}

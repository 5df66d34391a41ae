//! Per-kind resource requests and their embedded templates.
//!
//! Each request struct carries the typed fields for one resource kind and
//! knows how to turn itself into a renderable [`Manifest`]. Conditional
//! sections (the Service `nodePort` line, the PVC `storageClassName` line)
//! are resolved while assembling the template text, so rendering itself stays
//! straight substitution.

use crate::kind::ResourceKind;
use crate::manifest::Manifest;

const DEPLOYMENT_TEMPLATE: &str = "\
apiVersion: apps/v1
kind: Deployment
metadata:
  name: {{name}}
  namespace: {{namespace}}
spec:
  replicas: 2
  selector:
    matchLabels:
      app: {{name}}-deployment
  template:
    metadata:
      labels:
        app: {{name}}
    spec:
      containers:
      - name: {{name}}
        image: {{image}}
        ports:
        - containerPort: 80
";

const POD_TEMPLATE: &str = "\
apiVersion: v1
kind: Pod
metadata:
  name: {{name}}
  namespace: {{namespace}}
spec:
  containers:
  - name: {{name}}
    image: {{image}}
    ports:
    - containerPort: 80
";

const SERVICE_TEMPLATE_HEAD: &str = "\
apiVersion: v1
kind: Service
metadata:
  name: {{name}}-service
  namespace: {{namespace}}
spec:
  selector:
    app: {{name}}
  ports:
  - protocol: TCP
    port: 80
    targetPort: 80
";

const INGRESS_TEMPLATE: &str = "\
apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: {{name}}
  namespace: {{namespace}}
spec:
  rules:
  - host: {{host}}
    http:
      paths:
      - path: /
        pathType: Prefix
        backend:
          service:
            name: {{service_name}}
            port:
              number: {{service_port}}
";

const INGRESSROUTE_TEMPLATE: &str = "\
apiVersion: traefik.containo.us/v1alpha1
kind: IngressRoute
metadata:
  name: {{name}}
  namespace: {{namespace}}
spec:
  entryPoints:
    - web
  routes:
  - match: Host('{{host}}')
    kind: Rule
    services:
    - name: {{service_name}}
      port: {{service_port}}
";

const CONFIGMAP_TEMPLATE: &str = "\
apiVersion: v1
kind: ConfigMap
metadata:
  name: {{name}}
  namespace: {{namespace}}
data:
  key1: value1
  key2: value2
";

const SECRET_TEMPLATE: &str = "\
apiVersion: v1
kind: Secret
metadata:
  name: {{name}}
  namespace: {{namespace}}
type: Opaque
data:
  # Example of encoded data:
  # username: bXl1c2Vy
  # password: bXlwYXNzd29yZA==
  key1: value1
  key2: value2
";

const PVC_TEMPLATE_HEAD: &str = "\
apiVersion: v1
kind: PersistentVolumeClaim
metadata:
  name: {{name}}-pvc
  namespace: {{namespace}}
spec:
  accessModes:
    - {{access_mode}}
  resources:
    requests:
      storage: {{storage_size}}
";

/// Request for a Deployment manifest.
#[derive(Debug, Clone)]
pub struct DeploymentRequest {
    pub name: String,
    pub image: String,
    pub namespace: String,
}

impl DeploymentRequest {
    /// Example values used by preview mode.
    pub fn preview_defaults() -> Self {
        Self {
            name: "nginx".to_string(),
            image: "nginx:latest".to_string(),
            namespace: "default".to_string(),
        }
    }

    pub fn into_manifest(self) -> Manifest {
        Manifest::new(ResourceKind::Deployment, DEPLOYMENT_TEMPLATE)
            .with_field("name", self.name)
            .with_field("image", self.image)
            .with_field("namespace", self.namespace)
    }
}

/// Request for a Pod manifest.
#[derive(Debug, Clone)]
pub struct PodRequest {
    pub name: String,
    pub image: String,
    pub namespace: String,
}

impl PodRequest {
    pub fn preview_defaults() -> Self {
        Self {
            name: "nginx".to_string(),
            image: "nginx:latest".to_string(),
            namespace: "default".to_string(),
        }
    }

    pub fn into_manifest(self) -> Manifest {
        Manifest::new(ResourceKind::Pod, POD_TEMPLATE)
            .with_field("name", self.name)
            .with_field("image", self.image)
            .with_field("namespace", self.namespace)
    }
}

/// Service type, derived from the `--nodeport` and `--loadbalancer` flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceType {
    ClusterIp,
    NodePort(u16),
    LoadBalancer,
}

impl ServiceType {
    /// Derive the service type from the two mutually exclusive flags.
    ///
    /// A non-zero node port wins, then the load balancer flag; absent both,
    /// the service is `ClusterIP`.
    pub fn from_flags(node_port: Option<u16>, load_balancer: bool) -> Self {
        match node_port {
            Some(port) if port != 0 => ServiceType::NodePort(port),
            _ if load_balancer => ServiceType::LoadBalancer,
            _ => ServiceType::ClusterIp,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::ClusterIp => "ClusterIP",
            ServiceType::NodePort(_) => "NodePort",
            ServiceType::LoadBalancer => "LoadBalancer",
        }
    }
}

/// Request for a Service manifest.
#[derive(Debug, Clone)]
pub struct ServiceRequest {
    pub name: String,
    pub namespace: String,
    pub service_type: ServiceType,
}

impl ServiceRequest {
    pub fn preview_defaults() -> Self {
        Self {
            name: "my-service".to_string(),
            namespace: "default".to_string(),
            service_type: ServiceType::ClusterIp,
        }
    }

    pub fn into_manifest(self) -> Manifest {
        let mut template = String::from(SERVICE_TEMPLATE_HEAD);
        if matches!(self.service_type, ServiceType::NodePort(_)) {
            template.push_str("    nodePort: {{node_port}}\n");
        }
        template.push_str("  type: {{service_type}}\n");

        let mut manifest = Manifest::new(ResourceKind::Service, template)
            .with_field("name", self.name)
            .with_field("namespace", self.namespace)
            .with_field("service_type", self.service_type.as_str());
        if let ServiceType::NodePort(port) = self.service_type {
            manifest = manifest.with_field("node_port", port.to_string());
        }
        manifest
    }
}

/// Request for an Ingress manifest.
#[derive(Debug, Clone)]
pub struct IngressRequest {
    pub name: String,
    pub namespace: String,
    pub host: String,
    pub service_name: String,
    pub service_port: u16,
}

impl IngressRequest {
    pub fn preview_defaults() -> Self {
        Self {
            name: "my-ingress".to_string(),
            namespace: "default".to_string(),
            host: "example.com".to_string(),
            service_name: "my-service".to_string(),
            service_port: 80,
        }
    }

    pub fn into_manifest(self) -> Manifest {
        Manifest::new(ResourceKind::Ingress, INGRESS_TEMPLATE)
            .with_field("name", self.name)
            .with_field("namespace", self.namespace)
            .with_field("host", self.host)
            .with_field("service_name", self.service_name)
            .with_field("service_port", self.service_port.to_string())
    }
}

/// Request for a Traefik IngressRoute manifest.
#[derive(Debug, Clone)]
pub struct IngressRouteRequest {
    pub name: String,
    pub namespace: String,
    pub host: String,
    pub service_name: String,
    pub service_port: u16,
}

impl IngressRouteRequest {
    /// Build a request, synthesizing `<name>-service` when no backend service
    /// name was supplied.
    pub fn new(
        name: String,
        namespace: String,
        host: String,
        service_name: Option<String>,
        service_port: u16,
    ) -> Self {
        let service_name = service_name
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| format!("{}-service", name));
        Self {
            name,
            namespace,
            host,
            service_name,
            service_port,
        }
    }

    pub fn preview_defaults() -> Self {
        Self {
            name: "my-ingressroute".to_string(),
            namespace: "default".to_string(),
            host: "example.com".to_string(),
            service_name: "my-ingressroute-service".to_string(),
            service_port: 80,
        }
    }

    pub fn into_manifest(self) -> Manifest {
        Manifest::new(ResourceKind::IngressRoute, INGRESSROUTE_TEMPLATE)
            .with_field("name", self.name)
            .with_field("namespace", self.namespace)
            .with_field("host", self.host)
            .with_field("service_name", self.service_name)
            .with_field("service_port", self.service_port.to_string())
    }
}

/// Request for a ConfigMap manifest.
#[derive(Debug, Clone)]
pub struct ConfigMapRequest {
    pub name: String,
    pub namespace: String,
}

impl ConfigMapRequest {
    pub fn preview_defaults() -> Self {
        Self {
            name: "my-configmap".to_string(),
            namespace: "default".to_string(),
        }
    }

    pub fn into_manifest(self) -> Manifest {
        Manifest::new(ResourceKind::ConfigMap, CONFIGMAP_TEMPLATE)
            .with_field("name", self.name)
            .with_field("namespace", self.namespace)
    }
}

/// Request for a Secret manifest.
#[derive(Debug, Clone)]
pub struct SecretRequest {
    pub name: String,
    pub namespace: String,
}

impl SecretRequest {
    pub fn preview_defaults() -> Self {
        Self {
            name: "my-secret".to_string(),
            namespace: "default".to_string(),
        }
    }

    pub fn into_manifest(self) -> Manifest {
        Manifest::new(ResourceKind::Secret, SECRET_TEMPLATE)
            .with_field("name", self.name)
            .with_field("namespace", self.namespace)
    }
}

/// Request for a PersistentVolumeClaim manifest.
#[derive(Debug, Clone)]
pub struct PvcRequest {
    pub name: String,
    pub namespace: String,
    pub storage_size: String,
    pub access_mode: String,
    pub storage_class_name: Option<String>,
}

impl PvcRequest {
    pub fn preview_defaults() -> Self {
        Self {
            name: "my-pvc".to_string(),
            namespace: "default".to_string(),
            storage_size: "1Gi".to_string(),
            access_mode: "ReadWriteOnce".to_string(),
            storage_class_name: None,
        }
    }

    pub fn into_manifest(self) -> Manifest {
        let storage_class_name = self.storage_class_name.filter(|s| !s.is_empty());

        let mut template = String::from(PVC_TEMPLATE_HEAD);
        if storage_class_name.is_some() {
            template.push_str("  storageClassName: {{storage_class_name}}\n");
        }

        let mut manifest = Manifest::new(ResourceKind::Pvc, template)
            .with_field("name", self.name)
            .with_field("namespace", self.namespace)
            .with_field("storage_size", self.storage_size)
            .with_field("access_mode", self.access_mode);
        if let Some(class) = storage_class_name {
            manifest = manifest.with_field("storage_class_name", class);
        }
        manifest
    }
}

/// Request for a Namespace manifest.
///
/// The template is not embedded; it comes from a
/// [`TemplateSource`](crate::source::TemplateSource).
#[derive(Debug, Clone)]
pub struct NamespaceRequest {
    pub name: String,
}

impl NamespaceRequest {
    pub fn preview_defaults() -> Self {
        Self {
            name: "my-namespace".to_string(),
        }
    }

    pub fn into_manifest(self, template: String) -> Manifest {
        Manifest::new(ResourceKind::Namespace, template).with_field("name", self.name)
    }
}

//! Integration tests for manifest generation.

use std::fs;

use tempfile::tempdir;

use kgen_manifest::{
    fixed, DeploymentRequest, Generator, IngressRouteRequest, NamespaceRequest, PodRequest,
    PvcRequest, ResourceKind, ServiceRequest, ServiceType, StaticTemplateSource, TemplateSource,
};

fn file_count(dir: &std::path::Path) -> usize {
    fs::read_dir(dir).unwrap().count()
}

/// Write mode creates exactly the conventional file and nothing else.
#[test]
fn test_deployment_write_creates_single_file() {
    let temp = tempdir().unwrap();
    let generator = Generator::with_output_dir(temp.path());

    let request = DeploymentRequest {
        name: "web".to_string(),
        image: "nginx:1.25".to_string(),
        namespace: "prod".to_string(),
    };
    let path = generator.write(&request.into_manifest()).unwrap();

    assert_eq!(path, temp.path().join("web-deployment.yaml"));
    assert_eq!(file_count(temp.path()), 1);

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("name: web"));
    assert!(content.contains("image: nginx:1.25"));

    let doc: serde_yaml::Value = serde_yaml::from_str(&content).unwrap();
    assert_eq!(doc["kind"], "Deployment");
    assert_eq!(doc["metadata"]["name"], "web");
    assert_eq!(doc["metadata"]["namespace"], "prod");
}

#[test]
fn test_pod_write_creates_single_file() {
    let temp = tempdir().unwrap();
    let generator = Generator::with_output_dir(temp.path());

    let request = PodRequest {
        name: "worker".to_string(),
        image: "busybox:latest".to_string(),
        namespace: "default".to_string(),
    };
    let path = generator.write(&request.into_manifest()).unwrap();

    assert_eq!(path, temp.path().join("worker-pod.yaml"));
    assert_eq!(file_count(temp.path()), 1);

    let doc: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["kind"], "Pod");
    assert_eq!(doc["spec"]["containers"][0]["image"], "busybox:latest");
}

/// Preview mode never touches the filesystem.
#[test]
fn test_preview_leaves_no_files() {
    let temp = tempdir().unwrap();
    let generator = Generator::with_output_dir(temp.path());

    let rendered = generator
        .preview(&DeploymentRequest::preview_defaults().into_manifest())
        .unwrap();

    assert!(rendered.contains("image: nginx:latest"));
    assert_eq!(file_count(temp.path()), 0);
}

#[test]
fn test_service_variants_parse_as_yaml() {
    let generator = Generator::new();

    let cluster_ip = ServiceRequest {
        name: "web".to_string(),
        namespace: "default".to_string(),
        service_type: ServiceType::ClusterIp,
    };
    let rendered = generator.preview(&cluster_ip.into_manifest()).unwrap();
    let doc: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();
    assert_eq!(doc["spec"]["type"], "ClusterIP");
    assert!(doc["spec"]["ports"][0].get("nodePort").is_none());

    let node_port = ServiceRequest {
        name: "web".to_string(),
        namespace: "default".to_string(),
        service_type: ServiceType::NodePort(30050),
    };
    let rendered = generator.preview(&node_port.into_manifest()).unwrap();
    let doc: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();
    assert_eq!(doc["spec"]["type"], "NodePort");
    assert_eq!(doc["spec"]["ports"][0]["nodePort"], 30050);
}

#[test]
fn test_pvc_storage_class_is_optional() {
    let generator = Generator::new();

    let without = PvcRequest::preview_defaults();
    let rendered = generator.preview(&without.into_manifest()).unwrap();
    let doc: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();
    assert!(doc["spec"].get("storageClassName").is_none());

    let with = PvcRequest {
        storage_class_name: Some("standard".to_string()),
        ..PvcRequest::preview_defaults()
    };
    let rendered = generator.preview(&with.into_manifest()).unwrap();
    let doc: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();
    assert_eq!(doc["spec"]["storageClassName"], "standard");
}

/// Rendering the same request twice produces byte-identical output.
#[test]
fn test_rendering_round_trip_is_deterministic() {
    let generator = Generator::new();
    let request = IngressRouteRequest::new(
        "web".to_string(),
        "default".to_string(),
        "example.com".to_string(),
        None,
        8080,
    );

    let manifest = request.into_manifest();
    let first = generator.preview(&manifest).unwrap();
    let second = generator.preview(&manifest).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("name: web-service"));
}

/// Namespace generation works against an in-memory template source.
#[test]
fn test_namespace_from_injected_source() {
    let temp = tempdir().unwrap();
    let generator = Generator::with_output_dir(temp.path());

    let source = StaticTemplateSource::new(
        "apiVersion: v1\nkind: Namespace\nmetadata:\n  name: {{name}}\n",
    );
    let template = source.load(ResourceKind::Namespace).unwrap();

    let request = NamespaceRequest {
        name: "staging".to_string(),
    };
    let path = generator.write(&request.into_manifest(template)).unwrap();

    assert_eq!(path, temp.path().join("staging-namespace.yaml"));
    let doc: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(doc["kind"], "Namespace");
    assert_eq!(doc["metadata"]["name"], "staging");
}

/// The init fixtures are valid YAML and land under their fixed names.
#[test]
fn test_init_manifests_are_valid_yaml() {
    let temp = tempdir().unwrap();
    let generator = Generator::with_output_dir(temp.path());

    for (filename, content) in fixed::INIT_MANIFESTS {
        let path = generator.write_fixed(filename, content).unwrap();
        assert_eq!(path, temp.path().join(filename));
        let doc: serde_yaml::Value =
            serde_yaml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(doc["kind"].is_string(), "{} has no kind", filename);
    }

    assert_eq!(file_count(temp.path()), 4);
}

//! CLI command definitions.
//!
//! One subcommand per resource kind, each an independent instantiation of the
//! resolve-render-emit pattern in `kgen_manifest`.

use clap::{Parser, Subcommand};

pub mod configmap;
pub mod deployment;
pub mod ingress;
pub mod ingressroute;
pub mod init;
pub mod namespace;
pub mod pod;
pub mod pv;
pub mod pvc;
pub mod secret;
pub mod service;

/// kgen - Kubernetes manifest generator
#[derive(Parser)]
#[command(name = "kgen")]
#[command(version, about = "kgen - Kubernetes manifest generator")]
#[command(long_about = r#"
kgen generates static Kubernetes resource manifests from command-line flags.

Each subcommand fills a fixed YAML template and writes <name>-<kind>.yaml to
the working directory. Pass --template to preview the rendered manifest with
example values instead of writing a file.

The deployment, pod and service commands fall back to the KGEN_NAME,
KGEN_IMAGE and KGEN_NAMESPACE environment variables for flags left unset.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Missing or invalid argument
  3 - Template error
  4 - I/O error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a Kubernetes Deployment file
    Deployment(deployment::DeploymentArgs),

    /// Create a Kubernetes Pod file
    Pod(pod::PodArgs),

    /// Create a Kubernetes Service file
    Service(service::ServiceArgs),

    /// Create a Kubernetes Ingress file
    Ingress(ingress::IngressArgs),

    /// Create a Traefik IngressRoute file
    #[command(name = "ingressroute")]
    IngressRoute(ingressroute::IngressRouteArgs),

    /// Create a Kubernetes ConfigMap file
    #[command(name = "configmap")]
    ConfigMap(configmap::ConfigMapArgs),

    /// Create a Kubernetes Secret file
    Secret(secret::SecretArgs),

    /// Create a Kubernetes PersistentVolumeClaim (PVC) file
    Pvc(pvc::PvcArgs),

    /// Create a Kubernetes PersistentVolume (PV) file
    Pv,

    /// Create a Kubernetes Namespace file
    Namespace(namespace::NamespaceArgs),

    /// Create default Kubernetes files (deployment, service, pv, pvc)
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_deployment_flags() {
        let cli = Cli::try_parse_from([
            "kgen",
            "deployment",
            "--name",
            "web",
            "--image",
            "nginx:latest",
            "-N",
            "prod",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Deployment(_)));
    }

    #[test]
    fn test_parse_service_node_port() {
        let cli =
            Cli::try_parse_from(["kgen", "service", "-n", "web", "--nodeport", "30050"]).unwrap();
        match cli.command {
            Commands::Service(args) => assert_eq!(args.nodeport, Some(30050)),
            _ => panic!("expected service command"),
        }
    }

    #[test]
    fn test_parse_template_short_flag() {
        let cli = Cli::try_parse_from(["kgen", "pvc", "-t"]).unwrap();
        match cli.command {
            Commands::Pvc(args) => assert!(args.template),
            _ => panic!("expected pvc command"),
        }
    }
}

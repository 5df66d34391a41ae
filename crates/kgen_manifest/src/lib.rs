//! # kgen_manifest
//!
//! Manifest generation for kgen: parameter resolution, template rendering and
//! file emission, shared by every resource command.
//!
//! Every resource kind follows the same three steps: resolve typed parameters
//! (flag, then environment variable, then default), substitute them into a
//! fixed `{{field}}` template, and either write `<name>-<kind>.yaml` or print
//! a preview.
//!
//! ## Example
//!
//! ```rust,no_run
//! use kgen_manifest::{DeploymentRequest, Generator};
//!
//! let request = DeploymentRequest {
//!     name: "web".to_string(),
//!     image: "nginx:latest".to_string(),
//!     namespace: "default".to_string(),
//! };
//!
//! let generator = Generator::new();
//! let path = generator.write(&request.into_manifest()).unwrap();
//! println!("wrote {:?}", path);
//! ```

pub mod error;
pub mod fixed;
pub mod generator;
pub mod kind;
pub mod manifest;
pub mod renderer;
pub mod requests;
pub mod resolver;
pub mod source;

pub use error::{ManifestError, ManifestResult};
pub use generator::Generator;
pub use kind::ResourceKind;
pub use manifest::Manifest;
pub use renderer::TemplateRenderer;
pub use requests::{
    ConfigMapRequest, DeploymentRequest, IngressRequest, IngressRouteRequest, NamespaceRequest,
    PodRequest, PvcRequest, SecretRequest, ServiceRequest, ServiceType,
};
pub use source::{FileTemplateSource, StaticTemplateSource, TemplateSource};

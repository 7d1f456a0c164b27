//! Domain layer — pure types, validation, and content addressing.
//!
//! This module has zero imports from `crate::infra`, `crate::output`,
//! `tokio`, `std::fs`, or `std::process`. All functions are synchronous and
//! take data in, returning data out.

pub mod artifact;
pub mod config;
pub mod error;
pub mod project;

#[allow(unused_imports)]
pub use artifact::{artifact_dir_name, content_address, is_within, nix_base32_encode};
#[allow(unused_imports)]
pub use config::{Config, ProjectConfig, validate_project_name};
#[allow(unused_imports)]
pub use error::{BackendError, ConfigError, RenderError};
#[allow(unused_imports)]
pub use project::RunningProject;

//! Pipeline configuration: the serializable model, the argument-bag
//! adapter, and the path validators applied at construction time.
//!
//! A configuration is built once per run — from a JSON or YAML file or from
//! command-line arguments — validated, and treated as immutable afterwards.

pub mod model;
pub mod paths;

pub use model::{ConfigModel, DockArgs, DockConfig, PipelineConfig};
pub use paths::{resolve_existing, resolve_existing_path, resolve_new_dir};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Directory already exists: {}", .0.display())]
    AlreadyExists(PathBuf),
}

use dockprep::config::ConfigError;
use dockprep::exec::ToolError;
use dockprep::structure::StructureError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),
}

//! Invocation of the external scientific binaries.
//!
//! Each wrapper blocks until its child process exits and reports failures
//! as typed errors so a host application can continue across independent
//! docking jobs. No timeouts: a hung tool blocks its caller.

pub mod babel;
pub mod gnina;
pub mod runner;

pub use babel::{OBABEL_EXE, sdf_to_pdb, sdf_to_pdb_with};
pub use gnina::{GNINA_EXE, score_affinity};
pub use runner::run_logged;

use crate::structure::StructureError;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Failed to launch `{command}`: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command `{command}` failed with {status}")]
    CommandFailed { command: String, status: ExitStatus },

    #[error("Converter failed on {input} (rc={code:?}): {stderr}", input = input.display())]
    Converter {
        input: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    #[error("Converter produced an empty file at {path}: {stderr}", path = path.display())]
    EmptyOutput { path: PathBuf, stderr: String },

    #[error(transparent)]
    Structure(#[from] StructureError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

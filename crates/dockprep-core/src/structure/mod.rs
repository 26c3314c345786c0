//! PDB and SDF structure handling.
//!
//! Parsing and writing are delegated to the structural-biology crates
//! (`pdbtbx` for protein structures, `bio_files` for SDF records); this
//! module supplies the pipeline-level operations on top of them.

pub mod pdb;
pub mod sdf;

pub use pdb::{clean_pdb, combine_pdb, pdb_label, pdb_to_seq};
pub use sdf::{first_record, read_first_molecule};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructureError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Non-UTF-8 path: {}", .0.display())]
    Path(PathBuf),

    #[error("Failed to parse {path}: {details}", path = path.display())]
    Parse { path: PathBuf, details: String },

    #[error("Failed to write {path}: {details}", path = path.display())]
    Write { path: PathBuf, details: String },

    #[error("Structure {path} contains no models", path = path.display())]
    NoModels { path: PathBuf },

    #[error("No molecule records in {path}", path = path.display())]
    NoRecords { path: PathBuf },

    #[error("Malformed SDF record in {path}: {source}", path = path.display())]
    MalformedRecord {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

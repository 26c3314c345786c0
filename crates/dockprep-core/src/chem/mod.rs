//! Static chemistry knowledge used across the pipeline: the amino-acid
//! residue code table and SMILES validation.

pub mod residues;
pub mod smiles;

pub use residues::one_letter;
pub use smiles::{
    SilencedDiagnostics, SmilesError, diagnostics_suppressed, parse_smiles, validate_smiles,
};

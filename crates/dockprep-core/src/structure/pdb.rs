use super::StructureError;
use crate::chem::one_letter;
use pdbtbx::{PDB, StrictnessLevel};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

// Chain identifiers tried, in order, when a ligand chain collides with a
// receptor chain during merging.
const CHAIN_ID_POOL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789abcdefghijklmnopqrstuvwxyz";

fn path_str(path: &Path) -> Result<&str, StructureError> {
    path.to_str()
        .ok_or_else(|| StructureError::Path(path.to_path_buf()))
}

fn join_errors(errors: Vec<pdbtbx::PDBError>) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Loads a structure file, logging any non-fatal parser warnings.
pub fn load_structure(path: &Path) -> Result<PDB, StructureError> {
    match pdbtbx::open(path_str(path)?) {
        Ok((pdb, warnings)) => {
            for warning in &warnings {
                debug!("Parser warning for {:?}: {}", path, warning);
            }
            Ok(pdb)
        }
        Err(errors) => Err(StructureError::Parse {
            path: path.to_path_buf(),
            details: join_errors(errors),
        }),
    }
}

fn save_structure(pdb: &PDB, path: &Path) -> Result<(), StructureError> {
    pdbtbx::save(pdb, path_str(path)?, StrictnessLevel::Loose).map_err(|errors| {
        StructureError::Write {
            path: path.to_path_buf(),
            details: join_errors(errors),
        }
    })
}

/// Extracts the one-letter protein sequence from a PDB file.
///
/// Residues flagged as protein (at least one ATOM record) are walked in
/// structural order; names outside the residue table become `-` so unknown
/// residues never fail the extraction. The result has one letter per
/// protein residue.
pub fn pdb_to_seq(pdb_file: &Path) -> Result<String, StructureError> {
    let pdb = load_structure(pdb_file)?;
    let seq = pdb
        .residues()
        .filter(|res| res.atoms().any(|atom| !atom.hetero()))
        .map(|res| res.name().and_then(one_letter).unwrap_or('-'))
        .collect();
    Ok(seq)
}

/// File name minus directory and its last four characters.
///
/// A naive strip of the expected `.pdb` suffix, applied regardless of the
/// actual extension.
pub fn pdb_label(pdb_file: &Path) -> String {
    let name = pdb_file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let keep = name.chars().count().saturating_sub(4);
    name.chars().take(keep).collect()
}

fn free_chain_id(taken: &HashSet<String>) -> Option<String> {
    CHAIN_ID_POOL
        .chars()
        .map(|c| c.to_string())
        .find(|id| !taken.contains(id))
}

/// Merges a receptor and a ligand structure into one complex PDB.
///
/// The output path defaults to `<prot label>_<lig label>.pdb` next to the
/// ligand; a pre-existing file there is removed first. Ligand chains are
/// appended after the receptor's, renamed to a free identifier on
/// collision, and atoms are renumbered so the merged file stays writable.
pub fn combine_pdb(
    prot_pdb: &Path,
    lig_pdb: &Path,
    comp_pdb: Option<&Path>,
) -> Result<PathBuf, StructureError> {
    let out = match comp_pdb {
        Some(p) => p.to_path_buf(),
        None => lig_pdb.with_file_name(format!(
            "{}_{}.pdb",
            pdb_label(prot_pdb),
            pdb_label(lig_pdb)
        )),
    };
    if out.exists() {
        fs::remove_file(&out)?;
    }

    let mut complex = load_structure(prot_pdb)?;
    let ligand = load_structure(lig_pdb)?;

    let mut taken: HashSet<String> = complex.chains().map(|c| c.id().to_string()).collect();
    let model = complex
        .models_mut()
        .next()
        .ok_or_else(|| StructureError::NoModels {
            path: prot_pdb.to_path_buf(),
        })?;

    for chain in ligand.chains() {
        let mut chain = chain.clone();
        if taken.contains(chain.id()) {
            match free_chain_id(&taken) {
                Some(id) => {
                    debug!("Renaming ligand chain {} to {}", chain.id(), id);
                    let _ = chain.set_id(&id);
                }
                None => warn!("No free chain identifier left; keeping {}", chain.id()),
            }
        }
        taken.insert(chain.id().to_string());
        model.add_chain(chain);
    }

    complex.renumber();
    save_structure(&complex, &out)?;
    Ok(out)
}

/// Writes the protein-only subset of a structure to `output_pdb`.
///
/// HETATM atoms (waters, ions, bound ligands) are dropped along with any
/// residues and chains left empty by their removal.
pub fn clean_pdb(pdb_file: &Path, output_pdb: &Path) -> Result<PathBuf, StructureError> {
    let mut pdb = load_structure(pdb_file)?;
    pdb.remove_atoms_by(|atom| atom.hetero());
    pdb.remove_empty();
    save_structure(&pdb, output_pdb)?;
    Ok(output_pdb.to_path_buf())
}

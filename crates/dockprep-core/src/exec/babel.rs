use super::ToolError;
use std::ffi::OsStr;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::debug;

/// Default name of the format-converter binary, resolved via `PATH`.
pub const OBABEL_EXE: &str = "obabel";

/// Converts an SDF ligand file to PDB with the default converter binary.
pub fn sdf_to_pdb(sdf_file: &Path, pdb_file: Option<&Path>) -> Result<PathBuf, ToolError> {
    sdf_to_pdb_with(OsStr::new(OBABEL_EXE), sdf_file, pdb_file)
}

/// Converts an SDF ligand file to PDB via an explicit converter binary.
///
/// The output path defaults to the input with its extension replaced by
/// `pdb`; a pre-existing file there is removed first. The converter is
/// invoked with an explicit argument list (no shell): its stdout becomes
/// the destination file while stderr is captured separately as diagnostic
/// text — the converter always emits a conversion notice there, which must
/// not end up in the structure file.
///
/// Fails if the converter exits non-zero, and also if it exits zero but
/// wrote an empty file: the converter reports success even when it
/// converted nothing usable.
pub fn sdf_to_pdb_with(
    converter: &OsStr,
    sdf_file: &Path,
    pdb_file: Option<&Path>,
) -> Result<PathBuf, ToolError> {
    let out = match pdb_file {
        Some(p) => p.to_path_buf(),
        None => sdf_file.with_extension("pdb"),
    };
    if out.exists() {
        fs::remove_file(&out)?;
    }

    debug!("Converting {:?} to {:?}", sdf_file, out);
    let dest = File::create(&out)?;
    let output = Command::new(converter)
        .arg("-isdf")
        .arg(sdf_file)
        .arg("-opdb")
        .stdout(Stdio::from(dest))
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| ToolError::Launch {
            command: converter.to_string_lossy().into_owned(),
            source,
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
    if !output.status.success() {
        return Err(ToolError::Converter {
            input: sdf_file.to_path_buf(),
            code: output.status.code(),
            stderr,
        });
    }
    if fs::metadata(&out)?.len() == 0 {
        return Err(ToolError::EmptyOutput { path: out, stderr });
    }
    Ok(out)
}

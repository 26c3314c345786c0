use super::StructureError;
use bio_files::Sdf;
use std::fs;
use std::path::Path;

// Record delimiter in multi-record SDF streams.
const RECORD_DELIMITER: &str = "$$$$";

/// Returns the first molecule record of a (possibly multi-record) SDF
/// stream, or `None` if the stream holds no record at all.
pub fn first_record(text: &str) -> Option<&str> {
    let record = match text.find(RECORD_DELIMITER) {
        Some(end) => &text[..end],
        None => text,
    };
    if record.trim().is_empty() {
        None
    } else {
        Some(record)
    }
}

/// Reads the first molecule record of an SDF file into memory.
///
/// Docking tools rank their output best-first, so the first record is the
/// best-scoring pose. The returned molecule owns all of its data; it stays
/// valid after the backing file is gone.
pub fn read_first_molecule(path: &Path) -> Result<Sdf, StructureError> {
    let text = fs::read_to_string(path)?;
    let record = first_record(&text).ok_or_else(|| StructureError::NoRecords {
        path: path.to_path_buf(),
    })?;
    Sdf::new(record).map_err(|source| StructureError::MalformedRecord {
        path: path.to_path_buf(),
        source,
    })
}

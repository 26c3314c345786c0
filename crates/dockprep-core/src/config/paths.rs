use super::ConfigError;
use std::fs;
use std::path::PathBuf;

/// Resolves an optional path that must already exist.
///
/// `None` passes through untouched so optional configuration fields stay
/// optional; `Some` paths are resolved via [`resolve_existing_path`].
pub fn resolve_existing(value: Option<PathBuf>) -> Result<Option<PathBuf>, ConfigError> {
    value.map(resolve_existing_path).transpose()
}

/// Resolves a path to its canonical absolute form, failing if it is absent.
pub fn resolve_existing_path(value: PathBuf) -> Result<PathBuf, ConfigError> {
    let absolute = std::path::absolute(&value)?;
    if !absolute.exists() {
        return Err(ConfigError::NotFound(absolute));
    }
    Ok(fs::canonicalize(absolute)?)
}

/// Creates a fresh directory at the given path and returns its canonical
/// absolute form.
///
/// Missing parent directories are created. An already-existing target is an
/// error: a run must never reuse a previous run's output directory.
pub fn resolve_new_dir(value: PathBuf) -> Result<PathBuf, ConfigError> {
    let absolute = std::path::absolute(&value)?;
    if absolute.exists() {
        return Err(ConfigError::AlreadyExists(absolute));
    }
    fs::create_dir_all(&absolute)?;
    Ok(fs::canonicalize(absolute)?)
}

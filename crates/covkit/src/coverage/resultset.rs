//! Reading and writing result-set files

use super::record::ResultSet;
use crate::result::{CovkitError, CovkitResult};
use serde::Serialize;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::{Builder, NamedTempFile};

/// Name of the per-run result file inside a coverage directory
pub const RESULTSET_FILE: &str = ".resultset.json";

/// Location of the result set inside `dir`
#[must_use]
pub fn result_set_path(dir: &Path) -> PathBuf {
    dir.join(RESULTSET_FILE)
}

/// Read and parse `<dir>/.resultset.json`
pub fn read_result_set(dir: &Path) -> CovkitResult<ResultSet> {
    let path = result_set_path(dir);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(CovkitError::result_set_missing(&path));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!(path = %path.display(), bytes = content.len(), "read result set");
    Ok(serde_json::from_str(&content)?)
}

/// Pretty-print `value` as JSON and move it into place at `path`.
///
/// The JSON is written to a temp file next to `path` first, so a reader
/// sees either the old content or the new content. An existing file keeps
/// its mode; a new one gets the usual `0o666 & !umask`.
pub fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> CovkitResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = temp_file_in(dir, path)?;
    tmp.write_all(json.as_bytes())?;
    tmp.as_file().sync_all()?;
    let _ = tmp
        .persist(path)
        .map_err(|e| CovkitError::persist(path, e.error.to_string()))?;

    tracing::debug!(path = %path.display(), bytes = json.len(), "wrote JSON");
    Ok(())
}

#[cfg(unix)]
fn temp_file_in(dir: &Path, target: &Path) -> CovkitResult<NamedTempFile> {
    use std::os::unix::fs::PermissionsExt;

    // The open mode is masked by the process umask
    let tmp = Builder::new()
        .prefix(".covkit")
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(dir)?;
    if let Ok(existing) = fs::metadata(target) {
        fs::set_permissions(tmp.path(), existing.permissions())?;
    }
    Ok(tmp)
}

#[cfg(not(unix))]
fn temp_file_in(dir: &Path, _target: &Path) -> CovkitResult<NamedTempFile> {
    Ok(Builder::new().prefix(".covkit").tempfile_in(dir)?)
}

#[cfg(test)]
#[cfg(unix)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    fn mode(path: &Path) -> u32 {
        fs::metadata(path).unwrap().permissions().mode() & 0o777
    }

    #[test]
    fn test_new_file_gets_umask_default() {
        let temp = TempDir::new().unwrap();
        let reference = temp.path().join("plain.json");
        fs::File::create(&reference).unwrap();

        let out = temp.path().join("results.json");
        write_json_atomic(&out, &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(mode(&out), mode(&reference));
    }

    #[test]
    fn test_existing_file_keeps_mode() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("results.json");
        fs::write(&out, "{}").unwrap();
        fs::set_permissions(&out, fs::Permissions::from_mode(0o644)).unwrap();

        write_json_atomic(&out, &serde_json::json!({"a": 1})).unwrap();
        assert_eq!(mode(&out), 0o644);
        assert!(fs::read_to_string(&out).unwrap().contains("\"a\": 1"));
    }
}

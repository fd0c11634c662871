//! Reading configuration files and writing generated fragments.

use crate::error::{IoError, Result};
use std::path::Path;

/// Maximum configuration size accepted (64MB).
const MAX_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Reads a configuration file as UTF-8 text.
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::ReadFailed`] if `path` is a directory, exceeds 64MB,
///   cannot be read, or is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use clash_groups::io::read_file;
///
/// let config = read_file("keke.yaml").unwrap();
/// assert!(config.contains("proxies:"));
/// ```
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path_ref = path.as_ref();
    let read_failed = |reason: String| IoError::ReadFailed {
        path: path_ref.display().to_string(),
        reason,
    };

    if !path_ref.exists() {
        return Err(IoError::FileNotFound {
            path: path_ref.display().to_string(),
        }
        .into());
    }

    let metadata = std::fs::metadata(path_ref).map_err(|e| read_failed(e.to_string()))?;
    if metadata.is_dir() {
        return Err(read_failed("is a directory".to_string()).into());
    }
    if metadata.len() > MAX_FILE_SIZE {
        return Err(read_failed(format!(
            "file too large: {} bytes (max: {MAX_FILE_SIZE} bytes)",
            metadata.len()
        ))
        .into());
    }

    let bytes = std::fs::read(path_ref).map_err(|e| read_failed(e.to_string()))?;
    let content =
        String::from_utf8(bytes).map_err(|e| read_failed(format!("invalid UTF-8: {e}")))?;

    tracing::debug!(path = %path_ref.display(), bytes = content.len(), "read input");
    Ok(content)
}

/// Writes content to a file, creating parent directories if needed.
///
/// # Errors
///
/// Returns [`IoError::DirectoryFailed`] or [`IoError::WriteFailed`].
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path_ref = path.as_ref();
    let path_str = path_ref.to_string_lossy().to_string();

    if let Some(parent) = path_ref.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
            path: parent.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;
    }

    std::fs::write(path_ref, content).map_err(|e| IoError::WriteFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    tracing::debug!(path = %path_str, bytes = content.len(), "wrote output");
    Ok(())
}

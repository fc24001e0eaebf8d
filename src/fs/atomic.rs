//! Atomic file write operations.
//!
//! All writes follow the same pattern: write content to a temporary file in
//! the target's directory, fsync it, then rename over the target. On POSIX
//! `rename()` is atomic when source and destination share a filesystem; on
//! Windows an existing target is removed first, which is best-effort rather
//! than strictly atomic. A crash may leave a `.{filename}.tmp` file behind.

use crate::error::{PromptCraftError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PromptCraftError::UserError(format!(
                "failed to create parent directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;
    replace_file(&temp_path, path)?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Temporary file path in the same directory as the target, so the final
/// rename never crosses a filesystem boundary.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PromptCraftError::UserError("invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        PromptCraftError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        PromptCraftError::UserError(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        PromptCraftError::UserError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

#[cfg(unix)]
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    // rename() replaces an existing destination atomically
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        PromptCraftError::UserError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })?;

    // Persist the directory entry as well
    if let Some(parent) = target.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }

    Ok(())
}

#[cfg(windows)]
fn replace_file(source: &Path, target: &Path) -> Result<()> {
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            PromptCraftError::UserError(format!(
                "failed to remove existing file '{}': {}",
                target.display(),
                e
            ))
        })?;
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        PromptCraftError::UserError(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })
}

//! File helpers for PGM images and JSON.
//!
//! - `read_pgm`: read a P5 file into an owned 8-bit gray buffer.
//! - `write_pgm`: write an owned 8-bit gray buffer as P5.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::{pgm, GrayImageU8};
use crate::error::CodecError;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load a binary PGM from disk.
pub fn read_pgm(path: &Path) -> Result<GrayImageU8, CodecError> {
    let bytes = fs::read(path).map_err(|source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    pgm::decode(&bytes)
}

/// Save an 8-bit grayscale buffer as a binary PGM, creating parent directories.
pub fn write_pgm(image: &GrayImageU8, path: &Path) -> Result<(), CodecError> {
    let io_err = |source| CodecError::Io {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).map_err(io_err)?;
    fs::write(path, pgm::encode(image)).map_err(io_err)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)
        .map_err(|e| format!("Failed to create parent of {}: {e}", path.display()))?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

//! File-level load/save for the prospect document.
//!
//! # Responsibility
//! - Read and decode the persisted prospect array.
//! - Write the full array atomically via a temp sibling and rename.
//!
//! # Invariants
//! - The target file is only ever replaced by a complete document; a crash
//!   mid-write cannot leave it partially written.
//! - On save failure the previous on-disk content stays untouched.

use super::StorageResult;
use crate::model::prospect::Prospect;
use log::{error, info};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Reads and decodes the full prospect array from `path`.
///
/// # Side effects
/// - Emits `store_load` logging events with duration and status.
pub fn load_prospects(path: impl AsRef<Path>) -> StorageResult<Vec<Prospect>> {
    let started_at = Instant::now();
    match read_document(path.as_ref()) {
        Ok(people) => {
            info!(
                "event=store_load module=storage status=ok count={} duration_ms={}",
                people.len(),
                started_at.elapsed().as_millis()
            );
            Ok(people)
        }
        Err(err) => {
            error!(
                "event=store_load module=storage status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Serializes `people` and replaces the document at `path` atomically.
///
/// # Side effects
/// - Emits `store_save` logging events with duration and status.
pub fn save_prospects(path: impl AsRef<Path>, people: &[Prospect]) -> StorageResult<()> {
    let started_at = Instant::now();
    match write_document(path.as_ref(), people) {
        Ok(()) => {
            info!(
                "event=store_save module=storage status=ok count={} duration_ms={}",
                people.len(),
                started_at.elapsed().as_millis()
            );
            Ok(())
        }
        Err(err) => {
            error!(
                "event=store_save module=storage status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn read_document(path: &Path) -> StorageResult<Vec<Prospect>> {
    let raw = fs::read(path)?;
    Ok(serde_json::from_slice(&raw)?)
}

fn write_document(path: &Path, people: &[Prospect]) -> StorageResult<()> {
    let payload = serde_json::to_vec(people)?;
    let staging = staging_sibling(path);
    fs::write(&staging, payload)?;
    if let Err(err) = fs::rename(&staging, path) {
        let _ = fs::remove_file(&staging);
        return Err(err.into());
    }
    Ok(())
}

// Same-directory sibling so the final rename stays on one filesystem.
fn staging_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("prospects"));
    name.push(".tmp");
    path.with_file_name(name)
}

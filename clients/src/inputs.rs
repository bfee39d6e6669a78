//! Input discovery.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use qb_store::Format;
use walkdir::WalkDir;

/// Expands the command-line paths into the list of cube documents to check.
///
/// Files are taken as given. Directories are walked recursively and every
/// file with a Turtle (`.ttl`) or N-Triples (`.nt`) extension is kept.
/// Results from each directory are sorted so runs are reproducible.
///
/// # Errors
///
/// Returns an error if a path does not exist.
pub fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_cube_document(e.path()))
                .map(|e| e.into_path())
                .collect();
            found.sort();
            files.extend(found);
        } else if path.exists() {
            files.push(path.clone());
        } else {
            bail!("No such file or directory: {}", path.display());
        }
    }
    Ok(files)
}

fn is_cube_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(Format::from_extension)
        .is_some()
}

//! Workspace detection - is this directory a Swift package?

use std::path::{Path, PathBuf};

use thiserror::Error;

/// File that marks the root of a Swift package.
pub const MANIFEST_NAME: &str = "Package.swift";

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("could not find `Package.swift` in `{}`", dir.display())]
    NotFound { dir: PathBuf },
}

/// Whether the current directory holds a `Package.swift`.
///
/// A cwd that cannot be read counts as unsupported.
pub fn is_supported() -> bool {
    std::env::current_dir()
        .map(|cwd| is_supported_in(&cwd))
        .unwrap_or(false)
}

/// Whether `dir` directly contains a `Package.swift`.
///
/// Only the file's presence matters, not its contents. Errors other than
/// "not found" are treated the same as absence.
pub fn is_supported_in(dir: &Path) -> bool {
    dir.join(MANIFEST_NAME).exists()
}

/// Path of the manifest in `dir`, or an error naming the directory.
pub fn find_manifest(dir: &Path) -> Result<PathBuf, ManifestError> {
    let path = dir.join(MANIFEST_NAME);
    if path.exists() {
        Ok(path)
    } else {
        Err(ManifestError::NotFound {
            dir: dir.to_path_buf(),
        })
    }
}

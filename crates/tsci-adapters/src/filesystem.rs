//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tsci_core::{
    application::ports::Filesystem,
    error::{InitError, InitResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> InitResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_if_absent(&self, path: &Path, content: &str) -> InitResult<bool> {
        write_if_absent(path, content)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// Write `content` to `path` only when nothing exists there.
///
/// The existence check and the create are a single `create_new` open, so a
/// pre-existing file is never opened for writing, let alone truncated.
/// Returns `true` if the file was written, `false` if it already existed.
///
/// Shared by [`LocalFilesystem`] and the scaffold generators, which perform
/// their own idempotent writes.
pub fn write_if_absent(path: &Path, content: &str) -> InitResult<bool> {
    use std::io::Write as _;

    match std::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
    {
        Ok(mut file) => {
            file.write_all(content.as_bytes())
                .map_err(|e| map_io_error(path, e, "write file"))?;
            Ok(true)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(map_io_error(path, e, "create file")),
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> InitError {
    InitError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
}

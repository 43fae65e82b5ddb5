//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `tsci-adapters` crate provides implementations.

use std::path::Path;

use crate::error::InitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `tsci_adapters::filesystem::LocalFilesystem` (production)
///
/// ## Design Notes
///
/// The port exposes `write_if_absent` rather than a plain write: the
/// "never clobber user files" invariant belongs to the contract, not to
/// caller discipline. Implementations must make the existence check and
/// the create a single atomic operation where the OS allows it.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> InitResult<()>;

    /// Write `content` to `path` only if nothing exists there.
    ///
    /// Returns `true` if the file was written, `false` if it already
    /// existed (the existing file is left byte-identical).
    fn write_if_absent(&self, path: &Path, content: &str) -> InitResult<bool>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for looking up the latest published version of this tool.
///
/// Implemented by:
/// - `tsci_adapters::registry::NpmRegistry` (HTTP metadata endpoint)
///
/// The transport is deliberately swappable: a package-manager subprocess
/// lookup would implement the same trait without touching the init flow.
pub trait VersionLookup: Send + Sync {
    /// The latest published version string, e.g. `"0.2.3"`.
    fn latest(&self) -> InitResult<String>;
}

/// Port for the scaffold collaborators that populate a project directory.
///
/// Each implementation receives the resolved target directory and performs
/// its own idempotent side effects; nothing is returned to the caller.
///
/// Implemented by:
/// - `tsci_adapters::generators::PackageManifestGenerator` (package.json)
/// - `tsci_adapters::generators::TypeScriptConfigGenerator` (tsconfig.json)
/// - `tsci_adapters::generators::GitIgnoreGenerator` (.gitignore)
/// - `tsci_adapters::generators::DependencySetup` (registry entry + install)
pub trait ProjectGenerator: Send + Sync {
    /// Short name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Populate `project_dir` with this generator's artifacts.
    fn generate(&self, project_dir: &Path) -> InitResult<()>;
}

//! Dependency setup: scoped registry entry + starter dev-dependencies.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use tsci_core::{
    application::ports::ProjectGenerator,
    error::{InitError, InitResult},
};

use crate::{filesystem::write_if_absent, package_manager::PackageManager, starter_files};

/// Dev-dependencies installed into every new project.
const STARTER_DEV_DEPENDENCIES: &[&str] = &["tscircuit", "@types/react"];

/// Registers the scoped registry and installs the starter dependencies with
/// the detected package manager.
///
/// The install step shells out and is therefore skippable (`--skip-install`);
/// the registry entry is a plain idempotent file write and always runs.
#[derive(Debug, Clone)]
pub struct DependencySetup {
    package_manager: PackageManager,
    scoped_registry: String,
    skip_install: bool,
}

impl DependencySetup {
    pub fn new(
        package_manager: PackageManager,
        scoped_registry: impl Into<String>,
        skip_install: bool,
    ) -> Self {
        Self {
            package_manager,
            scoped_registry: scoped_registry.into(),
            skip_install,
        }
    }
}

impl ProjectGenerator for DependencySetup {
    fn name(&self) -> &'static str {
        "dependency setup"
    }

    fn generate(&self, project_dir: &Path) -> InitResult<()> {
        // The scoped registry must be in place before any install runs,
        // whether or not the starter-file pass already wrote it.
        let npmrc = project_dir.join(starter_files::NPMRC_PATH);
        write_if_absent(&npmrc, &format!("{}\n", self.scoped_registry))?;

        if self.skip_install {
            debug!("dependency install skipped");
            return Ok(());
        }

        let mut cmd = Command::new(self.package_manager.command());
        cmd.args(self.package_manager.dev_install_args())
            .args(STARTER_DEV_DEPENDENCIES)
            .current_dir(project_dir);

        let rendered = format!(
            "{} {}",
            self.package_manager.command(),
            self.package_manager
                .dev_install_args()
                .iter()
                .chain(STARTER_DEV_DEPENDENCIES)
                .copied()
                .collect::<Vec<_>>()
                .join(" ")
        );
        info!(command = %rendered, "installing starter dependencies");

        let status = cmd.status().map_err(|e| InitError::CommandFailed {
            command: rendered.clone(),
            reason: format!("failed to launch: {e}"),
        })?;

        if !status.success() {
            return Err(InitError::CommandFailed {
                command: rendered,
                reason: format!("exited with {status}"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup(skip_install: bool) -> DependencySetup {
        DependencySetup::new(
            PackageManager::Npm,
            starter_files::SCOPED_REGISTRY_LINE,
            skip_install,
        )
    }

    #[test]
    fn registry_entry_written_when_missing() {
        let tmp = TempDir::new().unwrap();
        setup(true).generate(tmp.path()).unwrap();

        let body = std::fs::read_to_string(tmp.path().join(".npmrc")).unwrap();
        assert_eq!(body, "@tsci:registry=https://npm.tscircuit.com\n");
    }

    #[test]
    fn existing_npmrc_is_untouched() {
        let tmp = TempDir::new().unwrap();
        let npmrc = tmp.path().join(".npmrc");
        std::fs::write(&npmrc, "registry=https://example.com\n").unwrap();

        setup(true).generate(tmp.path()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&npmrc).unwrap(),
            "registry=https://example.com\n"
        );
    }

    #[test]
    fn skip_install_avoids_the_subprocess() {
        // With skip_install the generator must succeed even where no
        // package manager exists at all.
        let tmp = TempDir::new().unwrap();
        assert!(setup(true).generate(tmp.path()).is_ok());
    }
}

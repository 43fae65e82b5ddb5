//! Init Service - main application orchestrator.
//!
//! This service coordinates the initialization workflow:
//! 1. Ensure the target directory exists (recursively)
//! 2. Emit starter files, skipping any path that already has a file
//! 3. Run the scaffold generators in order
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{Filesystem, ProjectGenerator},
    domain::{InitReport, StarterFile},
    error::InitResult,
};

/// Main initialization service.
///
/// Owns the filesystem port and the ordered generator chain. A fresh
/// instance is assembled per invocation; nothing is cached between runs.
pub struct InitService {
    filesystem: Box<dyn Filesystem>,
    generators: Vec<Box<dyn ProjectGenerator>>,
}

impl InitService {
    /// Create an init service with the given adapters.
    pub fn new(
        filesystem: Box<dyn Filesystem>,
        generators: Vec<Box<dyn ProjectGenerator>>,
    ) -> Self {
        Self {
            filesystem,
            generators,
        }
    }

    /// Initialize a project directory.
    ///
    /// Re-running on the same directory is safe: every write goes through
    /// the if-absent guard, so a second run only fills in what is missing.
    #[instrument(skip_all, fields(project_dir = %project_dir.display()))]
    pub fn initialize(
        &self,
        project_dir: &Path,
        starters: &[StarterFile],
    ) -> InitResult<InitReport> {
        // 1. Guarantee the target directory (and ancestors) exist.
        self.filesystem.create_dir_all(project_dir)?;
        debug!("target directory ready");

        // 2. Emit starter files.
        let mut report = InitReport::default();
        for starter in starters {
            let path = project_dir.join(starter.path());
            if self.filesystem.write_if_absent(&path, starter.content())? {
                info!(path = %path.display(), "starter file written");
                report.record_created(path);
            } else {
                info!(path = %path.display(), "starter file exists, kept");
                report.record_skipped(path);
            }
        }

        // 3. Delegate to the scaffold generators.
        for generator in &self.generators {
            debug!(generator = generator.name(), "running generator");
            generator.generate(project_dir)?;
        }

        info!(
            created = report.created().len(),
            skipped = report.skipped().len(),
            "initialization completed"
        );
        Ok(report)
    }
}

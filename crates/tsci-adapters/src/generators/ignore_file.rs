//! .gitignore generation.

use std::path::Path;

use tracing::debug;

use tsci_core::{application::ports::ProjectGenerator, error::InitResult};

use crate::filesystem::write_if_absent;

const GITIGNORE: &str = "\
node_modules/
dist/
.tscircuit/
.env
*.log
";

/// Writes a `.gitignore` when the project has none.
#[derive(Debug, Clone, Copy, Default)]
pub struct GitIgnoreGenerator;

impl ProjectGenerator for GitIgnoreGenerator {
    fn name(&self) -> &'static str {
        "ignore file"
    }

    fn generate(&self, project_dir: &Path) -> InitResult<()> {
        let path = project_dir.join(".gitignore");
        if !write_if_absent(&path, GITIGNORE)? {
            debug!(path = %path.display(), ".gitignore exists, kept");
        }
        Ok(())
    }
}

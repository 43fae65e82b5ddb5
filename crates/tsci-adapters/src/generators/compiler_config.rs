//! tsconfig.json generation.

use std::path::Path;

use tracing::debug;

use tsci_core::{application::ports::ProjectGenerator, error::InitResult};

use crate::filesystem::write_if_absent;

/// Compiler options for a circuit project: JSX via the automatic runtime,
/// strict checking, and no emit (the dev server does the bundling).
const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "ESNext",
    "moduleResolution": "bundler",
    "jsx": "react-jsx",
    "strict": true,
    "noEmit": true,
    "skipLibCheck": true,
    "types": ["tscircuit"]
  }
}
"#;

/// Writes a `tsconfig.json` when the project has none.
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeScriptConfigGenerator;

impl ProjectGenerator for TypeScriptConfigGenerator {
    fn name(&self) -> &'static str {
        "compiler config"
    }

    fn generate(&self, project_dir: &Path) -> InitResult<()> {
        let path = project_dir.join("tsconfig.json");
        if !write_if_absent(&path, TSCONFIG)? {
            debug!(path = %path.display(), "tsconfig.json exists, kept");
        }
        Ok(())
    }
}

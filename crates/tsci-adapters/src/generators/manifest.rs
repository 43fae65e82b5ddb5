//! package.json generation.

use std::path::Path;

use serde_json::json;
use tracing::debug;

use tsci_core::{
    application::ports::ProjectGenerator,
    error::{InitError, InitResult},
};

use crate::filesystem::write_if_absent;

/// Writes a minimal `package.json` when the project has none.
#[derive(Debug, Clone, Copy, Default)]
pub struct PackageManifestGenerator;

impl ProjectGenerator for PackageManifestGenerator {
    fn name(&self) -> &'static str {
        "package manifest"
    }

    fn generate(&self, project_dir: &Path) -> InitResult<()> {
        let manifest = json!({
            "name": package_name(project_dir),
            "version": "0.1.0",
            "type": "module",
            "scripts": {
                "dev": "tsci dev",
                "build": "tsci build",
            },
        });

        let body = serde_json::to_string_pretty(&manifest).map_err(|e| InitError::Generator {
            name: self.name().into(),
            reason: format!("failed to serialize manifest: {e}"),
        })?;

        let path = project_dir.join("package.json");
        if !write_if_absent(&path, &format!("{body}\n"))? {
            debug!(path = %path.display(), "package.json exists, kept");
        }
        Ok(())
    }
}

/// npm package name derived from the directory name.
///
/// npm requires lowercase and a restricted character set; anything else is
/// folded to `-`.
fn package_name(project_dir: &Path) -> String {
    project_dir
        .file_name()
        .and_then(|n| n.to_str())
        .map(sanitize)
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "tsci-project".into())
}

fn sanitize(name: &str) -> String {
    name.to_ascii_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_valid_manifest_named_after_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("my-board");
        std::fs::create_dir(&dir).unwrap();

        PackageManifestGenerator.generate(&dir).unwrap();

        let body = std::fs::read_to_string(dir.join("package.json")).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(parsed["name"], "my-board");
        assert_eq!(parsed["version"], "0.1.0");
        assert_eq!(parsed["scripts"]["dev"], "tsci dev");
    }

    #[test]
    fn existing_manifest_is_untouched() {
        let tmp = TempDir::new().unwrap();
        let manifest = tmp.path().join("package.json");
        std::fs::write(&manifest, "{\"name\":\"mine\"}").unwrap();

        PackageManifestGenerator.generate(tmp.path()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&manifest).unwrap(),
            "{\"name\":\"mine\"}"
        );
    }

    #[test]
    fn directory_names_are_sanitized() {
        assert_eq!(sanitize("My Board (v2)"), "my-board--v2");
        assert_eq!(sanitize("already-fine"), "already-fine");
    }
}

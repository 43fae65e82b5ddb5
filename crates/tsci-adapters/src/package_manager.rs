//! Package manager detection.
//!
//! Used in two places: phrasing the upgrade hint in the version advisory,
//! and running the dependency-setup subprocess. Detection is best-effort
//! environment sniffing and always falls back to npm.

use std::fmt;
use std::path::Path;

/// The JavaScript package managers this tool knows how to drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    /// Executable name on PATH.
    pub fn command(&self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// The command line a user should run to upgrade a globally installed
    /// package.
    pub fn global_install_hint(&self, package: &str) -> String {
        match self {
            Self::Npm => format!("npm install -g {package}@latest"),
            Self::Pnpm => format!("pnpm add -g {package}@latest"),
            Self::Yarn => format!("yarn global add {package}@latest"),
            Self::Bun => format!("bun add -g {package}@latest"),
        }
    }

    /// Argv (after the executable) that installs dev-dependencies into the
    /// current directory.
    pub fn dev_install_args(&self) -> &'static [&'static str] {
        match self {
            Self::Npm => &["install", "--save-dev"],
            Self::Pnpm => &["add", "-D"],
            Self::Yarn => &["add", "--dev"],
            Self::Bun => &["add", "--dev"],
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.command())
    }
}

/// Detect the package manager to use for `project_dir`.
///
/// Order: `npm_config_user_agent` (set by whichever manager launched this
/// process), then lockfiles already present in the project directory, then
/// the first alternative manager found on PATH, then npm.
pub fn detect(project_dir: &Path) -> PackageManager {
    if let Ok(agent) = std::env::var("npm_config_user_agent") {
        if let Some(pm) = from_user_agent(&agent) {
            return pm;
        }
    }

    if let Some(pm) = from_lockfile(project_dir) {
        return pm;
    }

    for pm in [PackageManager::Bun, PackageManager::Pnpm, PackageManager::Yarn] {
        if which::which(pm.command()).is_ok() {
            return pm;
        }
    }

    PackageManager::Npm
}

/// Parse a `npm_config_user_agent` value, e.g.
/// `pnpm/9.12.0 npm/? node/v22.9.0 linux x64`.
fn from_user_agent(agent: &str) -> Option<PackageManager> {
    let product = agent.split('/').next()?;
    match product {
        "npm" => Some(PackageManager::Npm),
        "pnpm" => Some(PackageManager::Pnpm),
        "yarn" => Some(PackageManager::Yarn),
        "bun" => Some(PackageManager::Bun),
        _ => None,
    }
}

fn from_lockfile(dir: &Path) -> Option<PackageManager> {
    if dir.join("pnpm-lock.yaml").exists() {
        return Some(PackageManager::Pnpm);
    }
    if dir.join("yarn.lock").exists() {
        return Some(PackageManager::Yarn);
    }
    if dir.join("bun.lockb").exists() || dir.join("bun.lock").exists() {
        return Some(PackageManager::Bun);
    }
    if dir.join("package-lock.json").exists() {
        return Some(PackageManager::Npm);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn user_agent_prefix_wins() {
        assert_eq!(
            from_user_agent("pnpm/9.12.0 npm/? node/v22.9.0 linux x64"),
            Some(PackageManager::Pnpm)
        );
        assert_eq!(
            from_user_agent("npm/10.8.2 node/v22.9.0 darwin arm64"),
            Some(PackageManager::Npm)
        );
        assert_eq!(from_user_agent("cargo/1.85.0"), None);
    }

    #[test]
    fn lockfile_detection_prefers_pnpm() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("pnpm-lock.yaml"), "").unwrap();
        std::fs::write(tmp.path().join("package-lock.json"), "").unwrap();

        assert_eq!(from_lockfile(tmp.path()), Some(PackageManager::Pnpm));
    }

    #[test]
    fn yarn_lockfile_detected() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(tmp.path().join("yarn.lock"), "").unwrap();

        assert_eq!(from_lockfile(tmp.path()), Some(PackageManager::Yarn));
    }

    #[test]
    fn no_lockfile_gives_none() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(from_lockfile(tmp.path()), None);
    }

    #[test]
    fn upgrade_hint_phrasing_per_manager() {
        assert_eq!(
            PackageManager::Npm.global_install_hint("@tscircuit/cli"),
            "npm install -g @tscircuit/cli@latest"
        );
        assert_eq!(
            PackageManager::Yarn.global_install_hint("@tscircuit/cli"),
            "yarn global add @tscircuit/cli@latest"
        );
    }

    #[test]
    fn dev_install_args_start_with_subcommand() {
        assert_eq!(PackageManager::Npm.dev_install_args()[0], "install");
        assert_eq!(PackageManager::Pnpm.dev_install_args()[0], "add");
    }
}

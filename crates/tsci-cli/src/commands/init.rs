//! Implementation of the `tsci init` command.
//!
//! Responsibility: wire CLI arguments and configuration into the core
//! services and display results.  The three phases run strictly in order:
//! advisory version check, directory resolution, scaffold emission.  Only
//! the last two can fail the command.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument};

use tsci_adapters::{
    LocalFilesystem, NpmRegistry,
    generators::{
        DependencySetup, GitIgnoreGenerator, PackageManifestGenerator, TypeScriptConfigGenerator,
    },
    package_manager::{self, PackageManager},
    starter_files,
};
use tsci_core::{
    application::{InitService, VersionAdvisor},
    domain::VersionCheck,
};

use crate::{
    cli::{GlobalArgs, InitArgs},
    config::AppConfig,
    error::{CliResult, IntoCli as _},
    output::OutputManager,
};

/// Published package the advisory check compares against; also the target
/// of the upgrade hint.
const CLI_PACKAGE: &str = "@tscircuit/cli";

/// Execute the `tsci init` command.
///
/// Dispatch sequence:
/// 1. Resolve the target directory (pure path math; creation happens later)
/// 2. Advisory update check — degrades to a warning, never aborts
/// 3. Scaffold emission via `InitService`
/// 4. Completion message with next-step guidance
#[instrument(skip_all, fields(directory = ?args.directory))]
pub fn execute(
    args: InitArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Resolve target directory
    let cwd = std::env::current_dir()
        .with_cli_context(|| "failed to determine current working directory")?;
    let project_dir = resolve_project_dir(&cwd, args.directory.as_deref());
    let package_manager = package_manager::detect(&project_dir);

    debug!(
        project_dir = %project_dir.display(),
        %package_manager,
        "target resolved"
    );

    // 2. Advisory update check
    let metadata_url = args
        .registry_url
        .as_deref()
        .unwrap_or(&config.registry.metadata_url);
    let advisor = VersionAdvisor::new(Box::new(NpmRegistry::new(metadata_url)));
    match advisory_line(&advisor.check(env!("CARGO_PKG_VERSION")), package_manager) {
        Advisory::Info(msg) => output.info(&msg)?,
        Advisory::Warning(msg) => output.warning(&msg)?,
    }

    // 3. Scaffold emission
    let starters = starter_files::builtin_starters(&config.registry.scoped_registry)
        .with_cli_context(|| "invalid starter file set")?;
    let service = InitService::new(
        Box::new(LocalFilesystem::new()),
        vec![
            Box::new(PackageManifestGenerator),
            Box::new(TypeScriptConfigGenerator),
            Box::new(GitIgnoreGenerator),
            Box::new(DependencySetup::new(
                package_manager,
                config.registry.scoped_registry.clone(),
                args.skip_install,
            )),
        ],
    );

    info!(project_dir = %project_dir.display(), "initialization started");
    let report = service
        .initialize(&project_dir, &starters)
        .with_cli_context(|| "initialization failed")?;

    for path in report.created() {
        let shown = path.strip_prefix(&project_dir).unwrap_or(path);
        output.print(&format!("  created {}", shown.display()))?;
    }
    for path in report.skipped() {
        let shown = path.strip_prefix(&project_dir).unwrap_or(path);
        output.print(&format!("  kept    {} (already exists)", shown.display()))?;
    }

    // 4. Completion + next step
    output.success("Initialization complete!")?;
    output.print(&next_step_hint(args.directory.as_deref()))?;

    Ok(())
}

// ── Path resolution ───────────────────────────────────────────────────────────

/// `resolve(cwd, d)` when a directory was given, `cwd` unchanged otherwise.
///
/// `PathBuf::join` replaces the base when `d` is absolute, which is exactly
/// the resolution rule this command wants.
fn resolve_project_dir(cwd: &Path, directory: Option<&Path>) -> PathBuf {
    match directory {
        Some(dir) => cwd.join(dir),
        None => cwd.to_path_buf(),
    }
}

// ── Advisory rendering ────────────────────────────────────────────────────────

/// Severity + text of the advisory line.  Every `VersionCheck` arm maps to
/// exactly one line of output; there is no silent branch.
enum Advisory {
    Info(String),
    Warning(String),
}

fn advisory_line(check: &VersionCheck, package_manager: PackageManager) -> Advisory {
    match check {
        VersionCheck::UpToDate { current } => {
            Advisory::Info(format!("You are using the latest version ({current})."))
        }
        VersionCheck::Outdated { current, latest } => Advisory::Warning(format!(
            "You are using version {current}, but the latest version is {latest}. \
             Consider updating with \"{}\".",
            package_manager.global_install_hint(CLI_PACKAGE)
        )),
        VersionCheck::Unavailable { reason } => {
            debug!(%reason, "version lookup unavailable");
            Advisory::Warning(
                "Could not check for the latest version. Please check your network connection."
                    .into(),
            )
        }
    }
}

fn next_step_hint(directory: Option<&Path>) -> String {
    match directory {
        Some(dir) => format!(
            "Run \"cd {}\" and \"tsci dev\" to start developing.",
            dir.display()
        ),
        None => "Run \"tsci dev\" to start developing.".to_string(),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── resolve_project_dir ───────────────────────────────────────────────

    #[test]
    fn absent_directory_uses_cwd() {
        let cwd = Path::new("/work");
        assert_eq!(resolve_project_dir(cwd, None), PathBuf::from("/work"));
    }

    #[test]
    fn relative_directory_is_joined_onto_cwd() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_project_dir(cwd, Some(Path::new("boards/amp"))),
            PathBuf::from("/work/boards/amp")
        );
    }

    #[test]
    fn absolute_directory_replaces_cwd() {
        let cwd = Path::new("/work");
        assert_eq!(
            resolve_project_dir(cwd, Some(Path::new("/elsewhere/proj"))),
            PathBuf::from("/elsewhere/proj")
        );
    }

    // ── advisory_line ─────────────────────────────────────────────────────

    #[test]
    fn up_to_date_is_informational() {
        let check = VersionCheck::UpToDate {
            current: "0.1.0".into(),
        };
        match advisory_line(&check, PackageManager::Npm) {
            Advisory::Info(msg) => {
                assert!(msg.contains("latest version (0.1.0)"));
            }
            Advisory::Warning(_) => panic!("expected info"),
        }
    }

    #[test]
    fn outdated_warning_names_both_versions_and_manager() {
        let check = VersionCheck::Outdated {
            current: "0.1.0".into(),
            latest: "0.4.2".into(),
        };
        match advisory_line(&check, PackageManager::Npm) {
            Advisory::Warning(msg) => {
                assert!(msg.contains("0.1.0"));
                assert!(msg.contains("0.4.2"));
                assert!(msg.contains("npm install -g @tscircuit/cli@latest"));
            }
            Advisory::Info(_) => panic!("expected warning"),
        }
    }

    #[test]
    fn outdated_hint_follows_detected_manager() {
        let check = VersionCheck::Outdated {
            current: "0.1.0".into(),
            latest: "0.4.2".into(),
        };
        match advisory_line(&check, PackageManager::Yarn) {
            Advisory::Warning(msg) => {
                assert!(msg.contains("yarn global add @tscircuit/cli@latest"));
            }
            Advisory::Info(_) => panic!("expected warning"),
        }
    }

    #[test]
    fn unavailable_is_a_single_warning() {
        let check = VersionCheck::Unavailable {
            reason: "connection refused".into(),
        };
        match advisory_line(&check, PackageManager::Npm) {
            Advisory::Warning(msg) => {
                assert!(msg.contains("Could not check"));
            }
            Advisory::Info(_) => panic!("expected warning"),
        }
    }

    // ── next_step_hint ────────────────────────────────────────────────────

    #[test]
    fn hint_mentions_cd_when_directory_given() {
        let hint = next_step_hint(Some(Path::new("my-board")));
        assert!(hint.contains("cd my-board"));
        assert!(hint.contains("tsci dev"));
    }

    #[test]
    fn hint_omits_cd_without_directory() {
        let hint = next_step_hint(None);
        assert!(!hint.contains("cd "));
        assert!(hint.contains("tsci dev"));
    }
}

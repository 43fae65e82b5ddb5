//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "tsci",
    bin_name = "tsci",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Design electronics with TypeScript",
    long_about = "tsci bootstraps tscircuit projects: circuit boards \
                  authored as typed React components.",
    after_help = "EXAMPLES:\n\
        \x20 tsci init                 # initialize the current directory\n\
        \x20 tsci init my-board        # create ./my-board and initialize it\n\
        \x20 tsci init --skip-install  # scaffold without installing packages\n\
        \x20 tsci completions bash > /usr/share/bash-completion/completions/tsci",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Initialize a new tscircuit project.
    #[command(
        about = "Initialize a new tscircuit project in the specified directory \
                 (or current directory if none is provided)",
        after_help = "EXAMPLES:\n\
            \x20 tsci init\n\
            \x20 tsci init my-board\n\
            \x20 tsci init boards/amplifier --skip-install"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 tsci completions bash > ~/.local/share/bash-completion/completions/tsci\n\
            \x20 tsci completions zsh  > ~/.zfunc/_tsci\n\
            \x20 tsci completions fish > ~/.config/fish/completions/tsci.fish"
    )]
    Completions(CompletionsArgs),
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `tsci init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Target directory.  Relative paths are resolved against the current
    /// working directory; absent means "initialize right here".
    #[arg(
        value_name = "DIRECTORY",
        help = "Directory name (optional, defaults to current directory)"
    )]
    pub directory: Option<PathBuf>,

    /// Scaffold files only; skip the dependency install step.
    #[arg(long = "skip-install", help = "Skip installing starter dependencies")]
    pub skip_install: bool,

    /// Override the registry metadata endpoint used by the update check.
    #[arg(
        long = "registry-url",
        value_name = "URL",
        env = "TSCI_REGISTRY_URL",
        help = "Registry metadata endpoint for the update check"
    )]
    pub registry_url: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `tsci completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_bare_init() {
        let cli = Cli::parse_from(["tsci", "init"]);
        match cli.command {
            Commands::Init(args) => {
                assert!(args.directory.is_none());
                assert!(!args.skip_install);
            }
            other => panic!("expected Init, got {other:?}"),
        }
    }

    #[test]
    fn parse_init_with_directory() {
        let cli = Cli::parse_from(["tsci", "init", "boards/amplifier"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.directory, Some(PathBuf::from("boards/amplifier")));
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn parse_skip_install_flag() {
        let cli = Cli::parse_from(["tsci", "init", "--skip-install"]);
        if let Commands::Init(args) = cli.command {
            assert!(args.skip_install);
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn parse_registry_url_override() {
        let cli = Cli::parse_from(["tsci", "init", "--registry-url", "http://localhost:4873/pkg"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.registry_url.as_deref(), Some("http://localhost:4873/pkg"));
        } else {
            panic!("expected Init command");
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["tsci", "--quiet", "--verbose", "init"]);
        assert!(result.is_err());
    }
}

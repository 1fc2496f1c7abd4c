//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "bundle-maker",
    bin_name = "bundle-maker",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Symfony bundle scaffolding",
    long_about = "bundle-maker generates the skeleton of a reusable Symfony bundle: \
                  directory layout, Composer manifest, bundle and extension classes, \
                  service configuration and a Flex recipe.",
    after_help = "EXAMPLES:\n\
        \x20 bundle-maker new Blog --vendor Acme\n\
        \x20 bundle-maker new Blog --vendor Acme --bundle-version 2 -o ./packages\n\
        \x20 bundle-maker new Blog --vendor Acme --dry-run\n\
        \x20 bundle-maker completions bash > /usr/share/bash-completion/completions/bundle-maker",
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
    /// Create a new bundle skeleton.
    #[command(
        visible_aliases = ["make", "n"],
        about = "Create a new bundle",
        after_help = "EXAMPLES:\n\
            \x20 bundle-maker new Blog --vendor Acme\n\
            \x20 bundle-maker new                     # prompts for every value\n\
            \x20 bundle-maker new Blog --vendor Acme --output-format json"
    )]
    New(NewArgs),

    /// Initialise a bundle-maker configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 bundle-maker init           # default location\n\
            \x20 bundle-maker init --global  # global config\n\
            \x20 bundle-maker init --local   # .bundle-maker.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 bundle-maker completions bash > ~/.local/share/bash-completion/completions/bundle-maker\n\
            \x20 bundle-maker completions zsh  > ~/.zfunc/_bundle-maker\n\
            \x20 bundle-maker completions fish > ~/.config/fish/completions/bundle-maker.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the bundle-maker configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 bundle-maker config get defaults.vendor\n\
            \x20 bundle-maker config set defaults.vendor Acme\n\
            \x20 bundle-maker config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `bundle-maker new`.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Bundle name, e.g. `Blog`.  Prompted for when omitted.
    #[arg(value_name = "BUNDLE", help = "Bundle name")]
    pub bundle: Option<String>,

    /// Vendor name, e.g. `Acme`.
    #[arg(
        long = "vendor",
        value_name = "VENDOR",
        help = "Vendor name (first namespace segment)"
    )]
    pub vendor: Option<String>,

    /// Package version written to `composer.json`.
    #[arg(
        long = "bundle-version",
        value_name = "VERSION",
        help = "Bundle version (default: 1)"
    )]
    pub version: Option<String>,

    /// Directory under which `bundles/<BUNDLE>` is created.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Output directory (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,

    /// Never prompt; missing values are an error.
    #[arg(long = "no-input", help = "Disable interactive prompts")]
    pub no_input: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `bundle-maker init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location.
    #[arg(
        long = "global",
        conflicts_with = "local",
        help = "Create global configuration"
    )]
    pub global: bool,

    /// Write to `.bundle-maker.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `bundle-maker completions`.
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

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `bundle-maker config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.vendor`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

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
    name    = "geddy-gen",
    bin_name = "geddy-gen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Installer and code generator for the Geddy web framework",
    long_about = "geddy-gen installs the Geddy framework, lays out new apps \
                  and generates resources (model, controller, route and views).",
    after_help = "EXAMPLES:\n\
        \x20 geddy-gen install\n\
        \x20 geddy-gen app blog\n\
        \x20 geddy-gen resource post\n\
        \x20 geddy-gen resource person,people\n\
        \x20 geddy-gen completions bash > /usr/share/bash-completion/completions/geddy-gen",
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
    /// Install the framework into the global library directory.
    #[command(
        visible_alias = "default",
        about = "Install the framework",
        after_help = "EXAMPLES:\n\
            \x20 geddy-gen install\n\
            \x20 geddy-gen install --dry-run"
    )]
    Install(InstallArgs),

    /// Lay out a new application.
    #[command(
        visible_alias = "new",
        about = "Create a new app",
        after_help = "EXAMPLES:\n\
            \x20 geddy-gen app blog\n\
            \x20 geddy-gen app blog --dry-run"
    )]
    App(AppArgs),

    /// Generate a resource inside an app.
    #[command(
        visible_alias = "r",
        about = "Generate a resource",
        after_help = "EXAMPLES:\n\
            \x20 geddy-gen resource post           # model Post, controller Posts\n\
            \x20 geddy-gen resource person,people\n\
            \x20 geddy-gen resource post --root ./blog"
    )]
    Resource(ResourceArgs),

    /// Write a default configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 geddy-gen init\n\
            \x20 geddy-gen init --force"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 geddy-gen completions bash > ~/.local/share/bash-completion/completions/geddy-gen\n\
            \x20 geddy-gen completions zsh  > ~/.zfunc/_geddy-gen\n\
            \x20 geddy-gen completions fish > ~/.config/fish/completions/geddy-gen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 geddy-gen config get paths.library_dir\n\
            \x20 geddy-gen config list\n\
            \x20 geddy-gen config path"
    )]
    Config(ConfigCommands),
}

// ── install ───────────────────────────────────────────────────────────────────

/// Arguments for `geddy-gen install`.
#[derive(Debug, Args)]
pub struct InstallArgs {
    /// Print the commands without running them.
    #[arg(long = "dry-run", help = "Show the commands without running them")]
    pub dry_run: bool,
}

// ── app ───────────────────────────────────────────────────────────────────────

/// Arguments for `geddy-gen app`.
#[derive(Debug, Args)]
pub struct AppArgs {
    /// Name of the app directory created in the current directory.
    #[arg(value_name = "NAME", help = "App name")]
    pub name: String,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation and create immediately")]
    pub yes: bool,

    /// Print the commands without running them.
    #[arg(long = "dry-run", help = "Show the commands without running them")]
    pub dry_run: bool,
}

// ── resource ──────────────────────────────────────────────────────────────────

/// Arguments for `geddy-gen resource`.
#[derive(Debug, Args)]
pub struct ResourceArgs {
    /// `singular[,plural]`; the plural defaults to the singular plus `s`.
    #[arg(value_name = "NAMES", help = "Resource name as singular[,plural]")]
    pub names: String,

    /// Leave the router alone when the route is already registered.
    #[arg(
        long = "skip-existing-route",
        help = "Do not add a route that is already registered"
    )]
    pub skip_existing_route: bool,

    /// App root (default: current directory).
    #[arg(long = "root", value_name = "DIR", help = "App root directory")]
    pub root: Option<PathBuf>,

    /// Directory with `resource_model.ejs` / `resource_controller.ejs`.
    #[arg(
        long = "templates-dir",
        value_name = "DIR",
        help = "Directory with custom resource templates"
    )]
    pub templates_dir: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `geddy-gen init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `geddy-gen completions`.
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

/// Subcommands for `geddy-gen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `paths.library_dir`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

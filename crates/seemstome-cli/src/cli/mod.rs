//! Command-line surface of `seemstome`, declared with clap derive.
//!
//! Flag spellings the scaffolder bridge must keep (`--targetDir`, the
//! upper-case `--type` values) are fixed here; parsing of the component
//! kind itself is delegated to `seemstome_core`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use seemstome_core::domain::ComponentKind;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name    = "seemstome",
    bin_name = "seemstome",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Scaffold SDD components and concatenate project docs",
    long_about = "SeemsToMe forwards component scaffolding requests to an external \
                  scaffolder and merges a documentation tree into a single file.",
    after_help = "EXAMPLES:\n\
        \x20 seemstome scaffold --name myAgent --type agent --targetDir src/agents\n\
        \x20 seemstome concat docs -o all_docs.txt\n\
        \x20 seemstome completions bash > /usr/share/bash-completion/completions/seemstome",
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

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new SDD component via the external scaffolder.
    #[command(
        about = "Scaffold a new SDD component",
        after_help = "EXAMPLES:\n\
            \x20 seemstome scaffold --name myAgent --type agent --targetDir src/agents\n\
            \x20 seemstome scaffold --name billing --type FULL_AGENT_SET --targetDir src/billing --strict"
    )]
    Scaffold(ScaffoldArgs),

    /// Concatenate documentation files into one.
    #[command(
        about = "Concatenate .md/.txt/.doc files into one",
        after_help = "EXAMPLES:\n\
            \x20 seemstome concat\n\
            \x20 seemstome concat docs\n\
            \x20 seemstome concat manual -o manual.txt"
    )]
    Concat(ConcatArgs),

    /// Initialise a SeemsToMe configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 seemstome init           # global config\n\
            \x20 seemstome init --local   # .seemstome.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 seemstome completions bash > ~/.local/share/bash-completion/completions/seemstome\n\
            \x20 seemstome completions zsh  > ~/.zfunc/_seemstome\n\
            \x20 seemstome completions fish > ~/.config/fish/completions/seemstome.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the SeemsToMe configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 seemstome config get scaffolder.program\n\
            \x20 seemstome config set scaffolder.timeout_secs 60\n\
            \x20 seemstome config list"
    )]
    Config(ConfigCommands),
}

// ── scaffold ──────────────────────────────────────────────────────────────────

/// Arguments for `seemstome scaffold`.
#[derive(Debug, Args)]
pub struct ScaffoldArgs {
    /// Name of the component.
    #[arg(long = "name", value_name = "NAME", help = "Name of the component")]
    pub name: String,

    /// Component type, case-insensitive.
    #[arg(
        long = "type",
        value_name = "TYPE",
        value_parser = parse_component_kind,
        help = "Type of component (AGENT, CONTRACT, TEST, FULL_AGENT_SET)"
    )]
    pub kind: ComponentKind,

    /// Directory the scaffolder generates into.
    #[arg(
        long = "targetDir",
        visible_alias = "target-dir",
        value_name = "DIR",
        help = "Target directory for the component"
    )]
    pub target_dir: String,

    /// Override `scaffolder.program` for this call.
    #[arg(long = "program", value_name = "PATH", help = "Scaffolder executable")]
    pub program: Option<String>,

    /// Exit 1 unless the scaffolder reports success.
    #[arg(long = "strict", help = "Exit non-zero when scaffolding does not succeed")]
    pub strict: bool,
}

fn parse_component_kind(value: &str) -> Result<ComponentKind, String> {
    value.parse::<ComponentKind>().map_err(|e| {
        let expected: Vec<_> = ComponentKind::ALL.iter().map(|k| k.as_str()).collect();
        format!("{e} (expected one of: {})", expected.join(", "))
    })
}

// ── concat ────────────────────────────────────────────────────────────────────

/// Arguments for `seemstome concat`.
#[derive(Debug, Args)]
pub struct ConcatArgs {
    /// Directory to scan (default: `docs.source_dir`).
    #[arg(value_name = "SOURCE_DIR", help = "Documentation directory to scan")]
    pub source: Option<PathBuf>,

    /// Output file (default: `docs.output_file`, else `<SOURCE_DIR>/concatenated_docs.txt`).
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "File to write the combined docs to"
    )]
    pub output: Option<PathBuf>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `seemstome init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to the global config location (the default).
    #[arg(
        long = "global",
        conflicts_with = "local",
        help = "Create global configuration"
    )]
    pub global: bool,

    /// Write to `.seemstome.toml` in the current directory.
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

/// Arguments for `seemstome completions`.
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

impl Commands {
    /// Commands that write a configuration file, or only report its path,
    /// and so must run while that file does not exist yet.
    pub fn writes_config(&self) -> bool {
        matches!(
            self,
            Commands::Init(_) | Commands::Config(ConfigCommands::Set { .. } | ConfigCommands::Path)
        )
    }
}

/// Subcommands for `seemstome config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `scaffolder.program`.
        key: String,
    },
    /// Set a configuration key to a value.
    Set {
        /// Dotted key path.
        key: String,
        /// New value. Lists are comma-separated.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

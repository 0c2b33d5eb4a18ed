//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SEEMSTOME_*` environment variables, `__` between nested keys
//!    (e.g. `SEEMSTOME_SCAFFOLDER__TIMEOUT_SECS=30`)
//! 3. The file given with `--config` (must exist)
//! 4. `.seemstome.toml` in the current directory
//! 5. The global config file (see [`AppConfig::config_path`])
//! 6. Built-in defaults (always present)

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use config::{Config, Environment, File, FileFormat, FileSourceFile};
use serde::{Deserialize, Serialize};

use seemstome_adapters::scaffolder::{DEFAULT_PROGRAM, DEFAULT_SUBCOMMAND};
use seemstome_core::domain::{DEFAULT_EXTENSIONS, DocumentFilter};

/// Name of the per-project config file.
pub const LOCAL_CONFIG_FILE: &str = ".seemstome.toml";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "SEEMSTOME";

/// Output name used when neither `--output` nor `docs.output_file` is set.
pub const DEFAULT_OUTPUT_NAME: &str = "concatenated_docs.txt";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Doc concatenator settings.
    pub docs: DocsConfig,
    /// External scaffolder settings.
    pub scaffolder: ScaffolderConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    pub source_dir: PathBuf,
    pub output_file: Option<PathBuf>,
    pub extensions: Vec<String>,
    pub include_hidden: bool,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("docs"),
            output_file: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            include_hidden: false,
        }
    }
}

impl DocsConfig {
    pub fn filter(&self) -> DocumentFilter {
        DocumentFilter::new(&self.extensions).include_hidden(self.include_hidden)
    }

    /// Output path for a run over `source`.
    pub fn output_for(&self, source: &Path) -> PathBuf {
        self.output_file
            .clone()
            .unwrap_or_else(|| source.join(DEFAULT_OUTPUT_NAME))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffolderConfig {
    /// Executable to run.
    pub program: String,
    /// Arguments placed before the subcommand. When unset, the scaffolder
    /// script is expected at `dist/index.js` next to this executable.
    pub args: Option<Vec<String>>,
    pub subcommand: String,
    /// Kill the scaffolder after this many seconds. Unset waits forever.
    pub timeout_secs: Option<u64>,
    /// Exit 1 whenever the scaffolder does not confirm success.
    pub strict_exit: bool,
}

impl Default for ScaffolderConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.into(),
            args: None,
            subcommand: DEFAULT_SUBCOMMAND.into(),
            timeout_secs: None,
            strict_exit: false,
        }
    }
}

impl ScaffolderConfig {
    /// Configured args, or the default script location.
    pub fn resolved_args(&self) -> Vec<String> {
        match &self.args {
            Some(args) => args.clone(),
            None => vec![default_script_path().display().to_string()],
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// `<dir of this executable>/dist/index.js`.
fn default_script_path() -> PathBuf {
    let base = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    base.join("dist").join("index.js")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from every source, lowest priority first.
    ///
    /// `config_file` is the path passed via `--config`. It must exist when
    /// `require_file` is set; commands that create the file pass `false`.
    pub fn load(config_file: Option<&PathBuf>, require_file: bool) -> anyhow::Result<Self> {
        let mut builder = Config::builder()
            .add_source(toml_file(&Self::config_path()).required(false))
            .add_source(toml_file(Path::new(LOCAL_CONFIG_FILE)).required(false));

        if let Some(path) = config_file {
            builder = builder.add_source(toml_file(path).required(require_file));
        }

        let settings = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("docs.extensions")
                    .with_list_parse_key("scaffolder.args"),
            )
            .build()
            .context("Failed to read configuration sources")?;

        settings
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the global configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.seemstome.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "seemstome", "seemstome")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }

    /// The file `config set` and `config path` act on: the `--config` file
    /// when given, otherwise the global file.
    pub fn active_path(explicit: Option<&PathBuf>) -> PathBuf {
        explicit.cloned().unwrap_or_else(Self::config_path)
    }
}

fn toml_file(path: &Path) -> File<FileSourceFile, FileFormat> {
    File::from(path).format(FileFormat::Toml)
}

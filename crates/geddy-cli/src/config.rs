//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the
//! [`FrameworkPaths`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `GEDDY_` prefix, `__` between section and key,
//!    e.g. `GEDDY_PATHS__LIBRARY_DIR=/opt/node_libraries`
//! 3. Config file: `--config FILE`, else `<config dir>/geddy-gen/config.toml`
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use geddy_core::domain::FrameworkPaths;

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "GEDDY";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the framework is installed from and to.
    pub paths: PathsConfig,
    /// Resource generator settings.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub dist_dir: String,
    pub library_dir: String,
    pub bin_dir: String,
    pub scripts_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        let FrameworkPaths {
            dist_dir,
            library_dir,
            bin_dir,
            scripts_dir,
        } = FrameworkPaths::default();
        Self {
            dist_dir,
            library_dir,
            bin_dir,
            scripts_dir,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Do not add a route that is already registered.
    pub skip_existing_routes: bool,
    /// Directory with custom resource templates.
    pub templates_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => config::File::from(path.as_path())
                .format(config::FileFormat::Toml)
                .required(true),
            None => config::File::from(Self::config_path().as_path())
                .format(config::FileFormat::Toml)
                .required(false),
        };

        Self::from_sources(file, config::Environment::with_prefix(ENV_PREFIX))
    }

    fn from_sources(
        file: config::File<config::FileSourceFile, config::FileFormat>,
        env: config::Environment,
    ) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(file)
            .add_source(env.prefix_separator("_").separator("__").try_parsing(true))
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.geddy-gen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "geddy", "geddy-gen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".geddy-gen.toml"))
    }

    /// Paths handed to the core services.
    pub fn to_paths(&self) -> FrameworkPaths {
        FrameworkPaths {
            dist_dir: self.paths.dist_dir.clone(),
            library_dir: self.paths.library_dir.clone(),
            bin_dir: self.paths.bin_dir.clone(),
            scripts_dir: self.paths.scripts_dir.clone(),
        }
    }

    /// Template directory from the config file, if any.
    pub fn templates_dir(&self) -> Option<&Path> {
        self.generator.templates_dir.as_deref()
    }
}

//! Locating and reading the CLI configuration file.
//!
//! Configuration is TOML with optional `[engine]` and `[export]` sections.
//! The first existing file among the candidates wins:
//!
//! 1. the `--config` path (must exist),
//! 2. `glassgrid/config.toml` relative to the working directory,
//! 3. `config.toml` in the platform config directory.
//!
//! Without any of them the defaults apply. Engine settings given as zero are
//! rejected rather than silently raised to one.

use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use glassgrid::{GlassGridError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("configuration file {0} does not exist")]
    MissingFile(PathBuf),

    #[error("{path}: engine settings must be at least 1: {}", .fields.join(", "))]
    ZeroSetting {
        path: PathBuf,
        fields: Vec<&'static str>,
    },
}

impl From<ConfigError> for GlassGridError {
    fn from(err: ConfigError) -> Self {
        GlassGridError::Config(err.to_string())
    }
}

/// Where a configuration file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Explicit,
    Local,
    System,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Source::Explicit => "explicit",
            Source::Local => "local",
            Source::System => "system",
        })
    }
}

/// Loads the configuration, falling back to defaults when no file exists.
///
/// # Errors
///
/// Returns [`GlassGridError::Config`] when the explicit path is missing, a
/// file cannot be parsed or an engine setting is zero, and
/// [`GlassGridError::Io`] when a file cannot be read.
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, GlassGridError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()).into());
        }
        return read(Source::Explicit, path);
    }

    match implicit_candidates().into_iter().find(|(_, path)| path.exists()) {
        Some((source, path)) => read(source, &path),
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(AppConfig::default())
        }
    }
}

fn implicit_candidates() -> Vec<(Source, PathBuf)> {
    let mut candidates = vec![(Source::Local, PathBuf::from("glassgrid/config.toml"))];
    match ProjectDirs::from("com", "glassgrid", "glassgrid") {
        Some(dirs) => candidates.push((Source::System, dirs.config_dir().join("config.toml"))),
        None => debug!("Could not determine platform-specific config directory"),
    }
    candidates
}

fn read(source: Source, path: &Path) -> Result<AppConfig, GlassGridError> {
    info!(source:%, path:? = path; "Loading configuration");
    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content).map_err(|err| ConfigError::Parse {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })?;

    let fields = config.engine().zero_settings();
    if !fields.is_empty() {
        return Err(ConfigError::ZeroSetting {
            path: path.to_path_buf(),
            fields,
        }
        .into());
    }
    Ok(config)
}

use crate::domain::constants::{DEFAULT_BINS, DEFAULT_PARTITIONS, MAX_BINS};
use anyhow::Context;
use serde::Deserialize;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("no corpus root configured (use --root or RECEIPT_STATS_ROOT)")]
    MissingRoot,
    #[error("corpus root {} is not a directory", .0.display())]
    RootNotDir(PathBuf),
    #[error("config file {} not found", .0.display())]
    MissingConfigFile(PathBuf),
    #[error("partition list is empty")]
    NoPartitions,
    #[error("bin count {requested} is above the limit of {max}")]
    BinsTooLarge { requested: usize, max: usize },
}

/// Optional `config.toml`; every key may be overridden from the command line.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub root: Option<PathBuf>,
    pub partitions: Option<Vec<String>>,
    pub bins: Option<NonZeroUsize>,
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub root: PathBuf,
    pub partitions: Vec<String>,
    pub bins: NonZeroUsize,
}

impl Settings {
    /// A per-command override, held to the same limit as the configured value.
    pub fn with_bins(&self, bins: Option<NonZeroUsize>) -> Result<NonZeroUsize, ConfigError> {
        bins.map(check_bins).unwrap_or(Ok(self.bins))
    }
}

pub fn check_bins(bins: NonZeroUsize) -> Result<NonZeroUsize, ConfigError> {
    if bins.get() > MAX_BINS {
        return Err(ConfigError::BinsTooLarge {
            requested: bins.get(),
            max: MAX_BINS,
        });
    }
    Ok(bins)
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/receipt-stats/config.toml"))
}

/// An explicit path must exist; the default location is used only if present.
pub fn load_config_file(explicit: Option<&Path>) -> anyhow::Result<ConfigFile> {
    let path = match explicit {
        Some(p) if !p.is_file() => {
            return Err(ConfigError::MissingConfigFile(p.to_path_buf()).into())
        }
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.is_file() => p,
            _ => return Ok(ConfigFile::default()),
        },
    };
    tracing::debug!("reading config from {}", path.display());
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
}

/// Flags win over the config file, which wins over built-in defaults.
pub fn resolve(
    root: Option<PathBuf>,
    partitions: Option<Vec<String>>,
    file: ConfigFile,
) -> Result<Settings, ConfigError> {
    let root = root.or(file.root).ok_or(ConfigError::MissingRoot)?;
    if !root.is_dir() {
        return Err(ConfigError::RootNotDir(root));
    }
    let partitions: Vec<String> = partitions
        .or(file.partitions)
        .unwrap_or_else(|| DEFAULT_PARTITIONS.iter().map(|s| s.to_string()).collect())
        .into_iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    if partitions.is_empty() {
        return Err(ConfigError::NoPartitions);
    }
    let bins = check_bins(
        file.bins
            .or(NonZeroUsize::new(DEFAULT_BINS))
            .unwrap_or(NonZeroUsize::MIN),
    )?;
    Ok(Settings {
        root,
        partitions,
        bins,
    })
}

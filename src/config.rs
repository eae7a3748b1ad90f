use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use tracing::warn;

use crate::country::LabelMode;

const CONFIG_FILE_NAME: &str = "config.toml";
const APP_NAME: &str = "dialpick";

const KNOWN_KEYS: &[&str] = &["dataset", "rtl", "label_mode", "default_country"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// File the configuration was read from, if any.
    pub config_path: Option<PathBuf>,
    /// Country dataset to load instead of the bundled one.
    pub dataset: Option<PathBuf>,
    pub rtl: bool,
    pub label_mode: LabelMode,
    /// Upper-cased region code preselected in the phone input.
    pub default_country: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            config_path: None,
            dataset: None,
            rtl: false,
            label_mode: LabelMode::LocaleDefault,
            default_country: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    dataset: Option<PathBuf>,
    rtl: bool,
    label_mode: LabelMode,
    default_country: Option<String>,
}

/// Expand ~ to home directory in paths
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = home::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}

fn config_root() -> Result<PathBuf> {
    let base = BaseDirs::new().context("unable to determine base directories")?;
    Ok(base.config_dir().join(APP_NAME))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(config_root()?.join(CONFIG_FILE_NAME))
}

/// Load configuration from `explicit`, or from the default location.
///
/// A missing default file yields the defaults; a missing explicit file is
/// an error.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = config_path()?;
            if !path.exists() {
                return Ok(Config::default());
            }
            path
        }
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read configuration file at {}", path.display()))?;
    let mut config = parse_str(&raw)
        .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    config.config_path = Some(path);
    Ok(config)
}

/// Parse configuration from TOML text.
pub fn parse_str(raw: &str) -> Result<Config> {
    let value: toml::Value = toml::from_str(raw).context("failed to parse configuration as TOML")?;

    warn_unknown_keys(&value);

    let cfg_file: ConfigFile = value
        .try_into()
        .context("failed to deserialize configuration")?;

    let default_country = cfg_file
        .default_country
        .as_ref()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(|value| value.to_ascii_uppercase());

    Ok(Config {
        config_path: None,
        dataset: cfg_file.dataset.as_deref().map(expand_tilde),
        rtl: cfg_file.rtl,
        label_mode: cfg_file.label_mode,
        default_country,
    })
}

fn warn_unknown_keys(value: &toml::Value) {
    let Some(table) = value.as_table() else {
        return;
    };

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn!("unknown configuration key `{}`", key);
        }
    }
}

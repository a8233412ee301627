use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

const APP_DIR: &str = "phone-okved";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_DATASET_URL: &str =
    "https://raw.githubusercontent.com/mk0ok/okved/master/okved.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const MAX_TIMEOUT_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetConfig {
    pub url: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub user_agent: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig {
                url: DEFAULT_DATASET_URL.to_string(),
                connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
                read_timeout_secs: DEFAULT_TIMEOUT_SECS,
                user_agent: None,
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid dataset url: {0}")]
    InvalidDatasetUrl(String),
    #[error("invalid {field} value: {value}")]
    InvalidTimeout { field: &'static str, value: u64 },
    #[error("invalid user_agent value")]
    InvalidUserAgent,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    dataset: Option<DatasetFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    url: Option<String>,
    connect_timeout_secs: Option<u64>,
    read_timeout_secs: Option<u64>,
    user_agent: Option<String>,
}

/// Loads the config file, falling back to defaults when no file was asked
/// for and none exists at the default location.
pub fn load(config_path: Option<&Path>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(err) if required => return Err(err),
        Err(_) => return Ok(AppConfig::default()),
    };
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path));
        }
        return Ok(AppConfig::default());
    }
    read_config(&path)
}

pub fn resolve_config_path(custom: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = custom {
        if path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidConfigPath(path.to_path_buf()));
        }
        return Ok(path.to_path_buf());
    }

    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if dir.is_empty() => return Err(ConfigError::InvalidConfigPath(dir.into())),
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .ok_or(ConfigError::MissingHomeDir)?
            .join(".config"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Checks a dataset URL the same way file values are checked.
pub fn validate_dataset_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|_| ConfigError::InvalidDatasetUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidDatasetUrl(raw.to_string()));
    }
    Ok(trimmed.to_string())
}

fn read_config(path: &Path) -> Result<AppConfig> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    merge_config(parsed)
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    let Some(dataset) = parsed.dataset else {
        return Ok(config);
    };

    if let Some(url) = dataset.url {
        config.dataset.url = validate_dataset_url(&url)?;
    }
    if let Some(secs) = dataset.connect_timeout_secs {
        config.dataset.connect_timeout_secs = validate_timeout("connect_timeout_secs", secs)?;
    }
    if let Some(secs) = dataset.read_timeout_secs {
        config.dataset.read_timeout_secs = validate_timeout("read_timeout_secs", secs)?;
    }
    if let Some(agent) = dataset.user_agent {
        let trimmed = agent.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::InvalidUserAgent);
        }
        config.dataset.user_agent = Some(trimmed.to_string());
    }

    Ok(config)
}

fn validate_timeout(field: &'static str, value: u64) -> Result<u64> {
    if value == 0 || value > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout { field, value });
    }
    Ok(value)
}

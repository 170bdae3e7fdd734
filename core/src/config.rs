use std::path::{Path, PathBuf};
use std::result::Result as StdResult;
use std::time::Duration;

use anyhow::Context as _;
use serde::Deserialize;

use crate::testing::{CompareMode, ExitPolicy, VerifyOptions};

pub const APP_NAME: &str = "cfs";
pub const DEFAULT_CACHE_DIR_NAME: &str = ".cf-samples";
pub const DEFAULT_HOST: &str = "codeforces.com";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cache_dir: PathBuf,
    pub host: String,
    pub verify: VerifyConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    pub compare: CompareMode,
    pub fail_on_nonzero_exit: bool,
    pub fail_on_empty_stdout: bool,
    pub time_limit_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_dir: Self::default_cache_dir(),
            host: DEFAULT_HOST.to_owned(),
            verify: VerifyConfig::default(),
        }
    }
}

impl Config {
    pub const FILENAME: &str = "cfs.toml";

    /// `~/.cf-samples`
    pub fn default_cache_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_default()
            .join(DEFAULT_CACHE_DIR_NAME)
    }

    /// `<user config dir>/cfs/cfs.toml`
    pub fn default_filepath() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_NAME).join(Self::FILENAME))
    }

    pub fn example_toml() -> &'static str {
        include_str!("../assets/cfs.toml")
    }

    pub fn from_toml(s: &str) -> StdResult<Self, toml::de::Error> {
        let mut cfg: Self = toml::from_str(s)?;
        cfg.cache_dir = expand_tilde(&cfg.cache_dir);
        Ok(cfg)
    }

    pub fn from_toml_file(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        let toml = fsutil::read_to_string(filepath).context("Cannot read a file")?;
        Self::from_toml(&toml).with_context(|| format!("Invalid config TOML: {:?}", filepath))
    }

    /// Falls back to the defaults when `filepath` does not exist.
    pub fn from_file_or_default(filepath: impl AsRef<Path>) -> anyhow::Result<Self> {
        let filepath = filepath.as_ref();
        if !filepath.is_file() {
            log::debug!("No config file at {:?}, using defaults", filepath);
            return Ok(Self::default());
        }
        Self::from_toml_file(filepath)
    }
}

impl VerifyConfig {
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    pub fn to_options(&self) -> VerifyOptions {
        VerifyOptions {
            compare: self.compare,
            exit_policy: ExitPolicy {
                fail_on_nonzero_exit: self.fail_on_nonzero_exit,
                fail_on_empty_stdout: self.fail_on_empty_stdout,
            },
            time_limit: self.time_limit(),
        }
    }
}

/// Expands a leading `~` to the home directory.
pub fn expand_tilde(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_owned()
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_owned(),
    }
}

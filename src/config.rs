//! Run configuration resolved from the release pipeline environment

use crate::models::ReleaseAsset;
use crate::parser::parse_assets;
use std::path::PathBuf;
use thiserror::Error;

pub const ENV_NAME: &str = "INPUT_NAME";
pub const ENV_VERSION: &str = "INPUT_VERSION";
pub const ENV_ASSETS: &str = "INPUT_ASSETS";
pub const ENV_MOCK: &str = "INPUT_MOCK";
pub const ENV_OUTPUT_ROOT: &str = "INPUT_OUTPUT_ROOT";

pub const DEFAULT_OUTPUT_ROOT: &str = "temp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("Environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),

    #[error("Invalid release asset list: {0:#}")]
    InvalidAssets(anyhow::Error),
}

/// Everything one invocation needs, with no process-wide state behind it.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub name: String,
    pub version: String,
    pub assets: Vec<ReleaseAsset>,
    pub output_root: PathBuf,
    /// Log writes instead of touching the filesystem.
    pub dry_run: bool,
}

impl RunConfig {
    pub fn new(name: impl Into<String>, version: impl Into<String>, assets: Vec<ReleaseAsset>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            assets,
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            dry_run: false,
        }
    }

    pub fn with_output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = root.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Build a config from a raw asset list as found in `INPUT_ASSETS`.
    pub fn from_parts(
        name: impl Into<String>,
        version: impl Into<String>,
        assets_json: &str,
    ) -> Result<Self, ConfigError> {
        let assets = parse_assets(assets_json).map_err(ConfigError::InvalidAssets)?;
        Ok(Self::new(name, version, assets))
    }

    /// Read the `INPUT_*` variables, letting any value in `overrides` win.
    pub fn from_env_with(overrides: &EnvOverrides) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| overrides.value(key).map_or_else(|| std::env::var(key), Ok))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Result<String, std::env::VarError>,
    {
        let required = |key: &'static str| match lookup(key) {
            Ok(value) => Ok(value),
            Err(std::env::VarError::NotPresent) => Err(ConfigError::MissingVar(key)),
            Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::NotUnicode(key)),
        };

        let name = required(ENV_NAME)?;
        let version = required(ENV_VERSION)?;
        let assets = required(ENV_ASSETS)?;

        let dry_run = lookup(ENV_MOCK).map(|v| is_mock_flag(&v)).unwrap_or(false);
        let output_root = lookup(ENV_OUTPUT_ROOT)
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_OUTPUT_ROOT.to_string());

        Ok(Self::from_parts(name, version, &assets)?
            .with_output_root(output_root)
            .with_dry_run(dry_run))
    }
}

/// Values supplied on the command line in place of `INPUT_*` variables.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub name: Option<String>,
    pub version: Option<String>,
    pub assets: Option<String>,
    pub output_root: Option<String>,
    pub mock: bool,
}

impl EnvOverrides {
    pub fn value(&self, key: &str) -> Option<String> {
        match key {
            ENV_NAME => self.name.clone(),
            ENV_VERSION => self.version.clone(),
            ENV_ASSETS => self.assets.clone(),
            ENV_OUTPUT_ROOT => self.output_root.clone(),
            ENV_MOCK => self.mock.then(|| "true".to_string()),
            _ => None,
        }
    }
}

/// `INPUT_MOCK` is only honoured when it is exactly `true`.
pub fn is_mock_flag(value: &str) -> bool {
    value == "true"
}

//! User configuration management

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::ExportFormat;
use crate::schedule::scanner::DEFAULT_RANGE_START_DAY;

/// Config file looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "weeksheet.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// ISO year for week markers; current year when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Month whose `range_start_day` starts the accepted range; the month
    /// of the requested week's Monday when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,

    /// Last accepted date; Friday of the following week when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    #[serde(default = "default_range_start_day")]
    pub range_start_day: u32,

    /// Also read the week after the requested one
    #[serde(default = "default_true")]
    pub include_next_week: bool,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            year: None,
            month: None,
            end_date: None,
            range_start_day: default_range_start_day(),
            include_next_week: true,
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory holding `<week>w.txt` files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: ExportFormat,

    /// Directory for `schedule_<week>w.<ext>` files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

fn default_range_start_day() -> u32 {
    DEFAULT_RANGE_START_DAY
}

fn default_true() -> bool {
    true
}

pub fn get_app_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?
        .join("weeksheet");
    Ok(dir)
}

fn app_config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    /// Load config from `explicit`, else `./weeksheet.toml`, else the app
    /// config dir. Missing files fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            return Self::from_file(&local);
        }

        match app_config_path() {
            Ok(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                bail!("month must be between 1 and 12, got {}", month);
            }
        }
        if !(1..=31).contains(&self.range_start_day) {
            bail!(
                "range_start_day must be between 1 and 31, got {}",
                self.range_start_day
            );
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Write `config` to the app config dir, returning the path written.
pub fn save_config(config: &Config, force: bool) -> Result<PathBuf> {
    let path = app_config_path()?;
    if path.exists() && !force {
        bail!(
            "Config already exists at {}\nTip: pass --force to overwrite it",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, config.to_toml()?)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

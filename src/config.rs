use crate::formatting::BoxChars;
use crate::series::{MonthDay, PlayoffWindow, SeriesSettings};
use crate::types::PLAYOFF_STAGE;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use xdg::BaseDirectories;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    pub refresh_interval: u32,
    pub time_format: String,
    pub data_dir: Option<PathBuf>,
    pub playoffs: PlayoffConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PlayoffConfig {
    pub stage: i32,
    #[serde(deserialize_with = "deserialize_month_day")]
    pub window_start: MonthDay,
    #[serde(deserialize_with = "deserialize_month_day")]
    pub window_end: MonthDay,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub use_unicode: bool,
    #[serde(skip)]
    pub box_chars: BoxChars,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            refresh_interval: 60,
            time_format: "%H:%M:%S".to_string(),
            data_dir: None,
            playoffs: PlayoffConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for PlayoffConfig {
    fn default() -> Self {
        let window = PlayoffWindow::default();
        PlayoffConfig {
            stage: PLAYOFF_STAGE,
            window_start: window.start,
            window_end: window.end,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            use_unicode: true,
            box_chars: BoxChars::unicode(),
        }
    }
}

impl Config {
    /// Parse a config file body, keeping box characters in step with `use_unicode`
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Config = toml::from_str(content)?;
        config.display.box_chars = BoxChars::from_use_unicode(config.display.use_unicode);
        Ok(config)
    }

    pub fn series_settings(&self) -> SeriesSettings {
        SeriesSettings {
            stage: self.playoffs.stage,
            window: PlayoffWindow {
                start: self.playoffs.window_start,
                end: self.playoffs.window_end,
            },
        }
    }

    /// Directory holding `<season>.json` files: configured, or the XDG data home
    pub fn data_dir(&self) -> Option<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Some(dir.clone());
        }
        let pgm = env!("CARGO_PKG_NAME");
        BaseDirectories::with_prefix(pgm).get_data_home()
    }
}

/// Deserialize a `MM-DD` string into a MonthDay
fn deserialize_month_day<'de, D>(deserializer: D) -> Result<MonthDay, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<MonthDay>().map_err(serde::de::Error::custom)
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

pub fn read() -> Config {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Config::default(),
    };

    // Check if file exists
    if !config_path.exists() {
        return Config::default();
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Config::default(),
    };

    Config::from_toml(&content).unwrap_or_else(|_| Config::default())
}

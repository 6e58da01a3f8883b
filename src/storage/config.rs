//! Configuration handling for the roadmap scheduler
//!
//! Configuration is read from `.roadmap/config.toml` (project, found by
//! walking up from the working directory) or `~/.config/roadmap/config.toml`
//! (global). An explicit path overrides both. Every field has a default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::ChartGeometry;
use crate::domain::ExclusionConfig;
use crate::schedule::DEFAULT_SCAN_LIMIT_DAYS;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),
}

/// Scheduling settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ScheduleConfig {
    /// Longest run of non-working days scanned before a projection fails
    pub scan_limit_days: u32,

    /// Saturday exclusion for candidate slots that don't say
    pub exclude_saturdays: bool,

    /// Holiday exclusion for candidate slots that don't say
    pub exclude_holidays: bool,

    /// Holiday list, relative to the config file's directory
    pub holidays_file: Option<PathBuf>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            scan_limit_days: DEFAULT_SCAN_LIMIT_DAYS,
            exclude_saturdays: false,
            exclude_holidays: true,
            holidays_file: None,
        }
    }
}

impl ScheduleConfig {
    pub fn default_exclusions(&self) -> ExclusionConfig {
        ExclusionConfig::new(self.exclude_saturdays, self.exclude_holidays)
    }
}

/// Combined configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub schedule: ScheduleConfig,

    pub chart: ChartGeometry,

    /// File this configuration was read from, if any
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from default locations
    pub fn load() -> Result<Self> {
        if let Some(root) = Self::find_project_root() {
            let path = root.join(".roadmap").join("config.toml");
            if path.is_file() {
                return Self::load_from(&path);
            }
        }

        match Self::global_config_dir().map(|dir| dir.join("config.toml")) {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;

        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load config: {}", path.display()))?;
        config.source = Some(path.to_path_buf());
        Ok(config)
    }

    /// Parses and validates configuration text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.schedule.scan_limit_days == 0 {
            return Err(ConfigError::Invalid(
                "schedule.scan_limit_days must be at least 1".to_string(),
            ));
        }

        let chart = &self.chart;
        if !(chart.inner_radius > 0.0 && chart.inner_radius < chart.outer_radius) {
            return Err(ConfigError::Invalid(format!(
                "chart radii must satisfy 0 < inner_radius < outer_radius (got {} and {})",
                chart.inner_radius, chart.outer_radius
            )));
        }
        if chart.outer_radius * 2.0 > chart.size {
            return Err(ConfigError::Invalid(format!(
                "chart.outer_radius {} does not fit a canvas of size {}",
                chart.outer_radius, chart.size
            )));
        }
        if chart.gap_angle < 0.0 || chart.min_visible_angle < 0.0 {
            return Err(ConfigError::Invalid(
                "chart angles must not be negative".to_string(),
            ));
        }
        Ok(())
    }

    /// Holiday file path, resolved against the config file's directory
    pub fn holidays_path(&self) -> Option<PathBuf> {
        let file = self.schedule.holidays_file.as_ref()?;
        match self.source.as_deref().and_then(Path::parent) {
            Some(dir) if file.is_relative() => Some(dir.join(file)),
            _ => Some(file.clone()),
        }
    }

    /// Returns the global config directory
    pub fn global_config_dir() -> Option<PathBuf> {
        ProjectDirs::from("dev", "roadmap", "roadmap-cli")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Finds the project root by looking for a `.roadmap/` directory
    pub fn find_project_root() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::find_project_root_from(&current)
    }

    /// Walks up from `start` looking for a `.roadmap/` directory
    pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();

        loop {
            if current.join(".roadmap").is_dir() {
                return Some(current);
            }

            if !current.pop() {
                return None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config() {
        let config = Config::default();

        assert_eq!(config.schedule.scan_limit_days, DEFAULT_SCAN_LIMIT_DAYS);
        assert_eq!(config.schedule.default_exclusions(), ExclusionConfig::default());
        assert_eq!(config.chart.gap_angle, 3.0);
        assert_eq!(config.chart.min_label_percent, 12);
    }

    #[test]
    fn parse_partial_config() {
        let toml = r#"
[schedule]
exclude_saturdays = true
scan_limit_days = 400

[chart]
gap_angle = 4.5
"#;

        let config = Config::from_toml_str(toml).unwrap();
        assert_eq!(config.schedule.scan_limit_days, 400);
        assert!(config.schedule.exclude_saturdays);
        assert!(config.schedule.exclude_holidays);
        assert_eq!(config.chart.gap_angle, 4.5);
        assert_eq!(config.chart.outer_radius, 72.0);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn malformed_config() {
        let err = Config::from_toml_str("[schedule\nscan_limit_days = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = Config::from_toml_str("[schedule]\nscan_limit_days = \"ten\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn misspelled_keys_are_rejected() {
        let err = Config::from_toml_str("[schedule]\nscan_limit = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(ref m) if m.contains("scan_limit")));

        let err = Config::from_toml_str("[schedule]\nexclude_saturday = true\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = Config::from_toml_str("[chart]\nradius = 60.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = Config::from_toml_str("[schedul]\nscan_limit_days = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn invalid_values() {
        let err = Config::from_toml_str("[schedule]\nscan_limit_days = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_toml_str("[chart]\ninner_radius = 80.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_toml_str("[chart]\ngap_angle = -1.0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn load_from_file_resolves_holidays() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[schedule]\nholidays_file = \"holidays.txt\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.source.as_deref(), Some(path.as_path()));
        assert_eq!(config.holidays_path(), Some(dir.path().join("holidays.txt")));
    }

    #[test]
    fn load_from_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read config"));
    }

    #[test]
    fn find_project_root() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join(".roadmap")).unwrap();

        let sub_dir = dir.path().join("sub").join("dir");
        fs::create_dir_all(&sub_dir).unwrap();

        let root = Config::find_project_root_from(&sub_dir);
        assert_eq!(root.as_deref(), Some(dir.path()));
    }

    #[test]
    fn no_project_root() {
        let dir = TempDir::new().unwrap();
        // Temp dirs don't normally sit under a .roadmap project
        let root = Config::find_project_root_from(dir.path());
        assert!(root.map_or(true, |r| !r.starts_with(dir.path())));
    }
}

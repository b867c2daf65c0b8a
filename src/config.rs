// Configuration for aocfetch.
// Loads an optional TOML file and fills in defaults for everything it omits.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::aoc::{AOC_BASE_URL, DEFAULT_TIMEOUT};
use crate::cache::DEFAULT_INPUT_DIR;
use crate::credential::DEFAULT_SESSION_FILE;
use crate::error::{AocError, Result};
use crate::puzzle::MAX_DAY;

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "aocfetch.toml";

/// One year of the fetch schedule: days 1 through `last_day`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct YearSchedule {
    pub year: i32,
    pub last_day: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub session_file: PathBuf,
    pub input_dir: PathBuf,
    pub base_url: String,
    pub timeout_secs: u64,
    pub schedule: Vec<YearSchedule>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            base_url: AOC_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
            schedule: default_schedule(),
        }
    }
}

/// Years fetched when no schedule is configured.
pub fn default_schedule() -> Vec<YearSchedule> {
    vec![
        YearSchedule {
            year: 2024,
            last_day: 25,
        },
        YearSchedule {
            year: 2025,
            last_day: 12,
        },
    ]
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Parse a config from TOML text and validate it.
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(contents).map_err(|source| AocError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| AocError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents, path)
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise the working directory and then
    /// the platform config directory are searched, falling back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidates = [Some(PathBuf::from(LOCAL_CONFIG_FILE)), user_config_path()];
        for path in candidates.into_iter().flatten() {
            if path.is_file() {
                tracing::debug!(path = %path.display(), "Using config file");
                return Self::from_file(&path);
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(AocError::Config("timeout_secs must be greater than 0".into()));
        }
        if self.schedule.is_empty() {
            return Err(AocError::Config("schedule must list at least one year".into()));
        }
        for entry in &self.schedule {
            if !(1..=MAX_DAY).contains(&entry.last_day) {
                return Err(AocError::Config(format!(
                    "last_day for {} must be between 1 and {}, got {}",
                    entry.year, MAX_DAY, entry.last_day
                )));
            }
        }
        if reqwest::Url::parse(&self.base_url).is_err() {
            return Err(AocError::Config(format!(
                "base_url is not a valid URL: {}",
                self.base_url
            )));
        }
        Ok(())
    }
}

/// Path to the per-user config file (~/.config/aocfetch/config.toml on Linux).
pub fn user_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "aocfetch").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.session_file, PathBuf::from("api_key.txt"));
        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.schedule, default_schedule());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::from_toml(
            r#"
input_dir = "puzzles"

[[schedule]]
year = 2023
last_day = 25
"#,
            Path::new("test.toml"),
        )
        .unwrap();

        assert_eq!(config.input_dir, PathBuf::from("puzzles"));
        assert_eq!(config.base_url, AOC_BASE_URL);
        assert_eq!(
            config.schedule,
            vec![YearSchedule {
                year: 2023,
                last_day: 25
            }]
        );
    }

    #[test]
    fn test_rejects_out_of_range_last_day() {
        let result = Config::from_toml(
            "[[schedule]]\nyear = 2025\nlast_day = 26\n",
            Path::new("test.toml"),
        );
        assert!(matches!(result, Err(AocError::Config(_))));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = Config::from_toml("timeout_secs = 0", Path::new("test.toml"));
        assert!(matches!(result, Err(AocError::Config(_))));
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let result = Config::from_toml("sesion_file = \"x\"", Path::new("test.toml"));
        assert!(matches!(result, Err(AocError::ConfigParse { .. })));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&path)),
            Err(AocError::ConfigRead { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("aocfetch.toml");
        fs::write(&path, "base_url = \"http://localhost:8080\"\ntimeout_secs = 3\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }
}

use crate::highscore::HighScoreFile;
use crate::util::high_score_file_path;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,

    /// Settings about the log file
    #[serde(default)]
    pub(crate) logging: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Return the store that the game should keep its high score in: the
    /// file given in the configuration or, if that is not set, the default
    /// high score file.  If saving is turned off, or if no path is configured
    /// and the default could not be computed, the high score is not stored.
    pub(crate) fn high_score_store(&self) -> HighScoreFile {
        if !self.files.save_high_score {
            return HighScoreFile::disabled();
        }
        match self.files.high_score_file.clone().or_else(high_score_file_path) {
            Some(path) => HighScoreFile::new(path),
            None => HighScoreFile::disabled(),
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawFileConfig")]
pub(crate) struct FileConfig {
    /// Path at which the high score should be stored
    high_score_file: Option<PathBuf>,

    /// Whether to load & save the high score in a file
    save_high_score: bool,
}

impl Default for FileConfig {
    fn default() -> FileConfig {
        FileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawFileConfig {
    high_score_file: Option<String>,
    save_high_score: bool,
}

impl Default for RawFileConfig {
    fn default() -> RawFileConfig {
        RawFileConfig {
            high_score_file: None,
            save_high_score: true,
        }
    }
}

impl TryFrom<RawFileConfig> for FileConfig {
    type Error = ConfigError;

    fn try_from(value: RawFileConfig) -> Result<FileConfig, ConfigError> {
        Ok(FileConfig {
            high_score_file: value.high_score_file.map(expand_path).transpose()?,
            save_high_score: value.save_high_score,
        })
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// File to append log messages to; nothing is logged if this is `None`
    pub(crate) file: Option<PathBuf>,

    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
struct RawLogConfig {
    file: Option<String>,
    level: Option<String>,
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = ConfigError;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, ConfigError> {
        let level = match value.level {
            Some(s) => s
                .parse::<LevelFilter>()
                .map_err(|_| ConfigError::Level(s))?,
            None => LevelFilter::Info,
        };
        Ok(LogConfig {
            file: value.file.map(expand_path).transpose()?,
            level,
        })
    }
}

/// Expand a leading `~` or `~user` in a configured path
fn expand_path(path: String) -> Result<PathBuf, ConfigError> {
    expanduser::expanduser(path).map_err(ConfigError::Expand)
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to expand '~' in configured path")]
    Expand(#[source] std::io::Error),
    #[error("invalid log level {0:?}")]
    Level(String),
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

//! crates/logging/src/config.rs
//! Logger configuration from the environment or a config file.

use std::env;

use super::levels::{Level, ParseLevelError};
use super::logger::Logger;

/// Environment variable consulted by [`Level::from_env`].
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

impl Level {
    /// Reads the level from [`LOG_LEVEL_ENV`], defaulting to [`Level::Error`].
    ///
    /// An unset or non-Unicode variable yields the default; a set but
    /// unrecognised value is an error so typos are not silently ignored.
    pub fn from_env() -> Result<Self, ParseLevelError> {
        Self::from_env_value(env::var(LOG_LEVEL_ENV).ok().as_deref())
    }

    /// Interprets an optional environment value the way [`Level::from_env`] does.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!(Level::from_env_value(None), Ok(Level::Error));
    /// assert_eq!(Level::from_env_value(Some("verbose")), Ok(Level::Verbose));
    /// assert!(Level::from_env_value(Some("noisy")).is_err());
    /// ```
    pub fn from_env_value(value: Option<&str>) -> Result<Self, ParseLevelError> {
        value.map_or_else(|| Ok(Self::default()), str::parse::<Self>)
    }
}

/// Everything [`build`](crate::build) needs, in a form that can live in a
/// daemon's configuration file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LoggerConfig {
    /// Highest level that produces output.
    pub level: Level,
    /// Text placed after the level tag on every line.
    pub prepend: String,
}

impl LoggerConfig {
    /// Creates a configuration for `level` with the given line prefix.
    pub fn new(level: Level, prepend: impl Into<String>) -> Self {
        Self {
            level,
            prepend: prepend.into(),
        }
    }

    /// Reads the level from the environment and pairs it with `prepend`.
    pub fn from_env(prepend: impl Into<String>) -> Result<Self, ParseLevelError> {
        Ok(Self::new(Level::from_env()?, prepend))
    }

    /// Builds a [`Logger`] writing to standard output.
    #[must_use]
    pub fn build(&self) -> Logger {
        Logger::new(self.level, &self.prepend)
    }
}

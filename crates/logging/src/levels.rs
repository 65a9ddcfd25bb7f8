//! crates/logging/src/levels.rs
//! Log level ordering, parsing, and numeric conversions.

use std::fmt;
use std::str::FromStr;

/// Threshold passed to [`build`](crate::build) when wiring a [`Logger`](crate::Logger).
///
/// Levels are ordered `Silent < Error < Verbose`; a logger emits every level
/// at or below its threshold. The level is only consulted while building a
/// logger and is not stored afterwards.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Level {
    /// Nothing is logged.
    Silent = 0,
    /// Only errors are logged.
    #[default]
    Error = 1,
    /// Errors and debug output are logged.
    #[cfg_attr(feature = "serde", serde(alias = "debug"))]
    Verbose = 2,
}

impl Level {
    /// Every level, lowest first.
    pub const ALL: [Self; 3] = [Self::Silent, Self::Error, Self::Verbose];

    /// Returns the lowercase name used by [`Display`](fmt::Display) and [`FromStr`].
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Error => "error",
            Self::Verbose => "verbose",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text or a number does not name a [`Level`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseLevelError {
    /// The text is not a known level name or number.
    #[error("unknown log level '{0}' (expected silent, error, or verbose)")]
    Unknown(String),

    /// The number is outside `0..=2`.
    #[error("log level {0} out of range (expected 0, 1, or 2)")]
    OutOfRange(u8),
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name or number.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// `debug` is accepted as a synonym for `verbose`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Level;
    ///
    /// assert_eq!("VERBOSE".parse::<Level>(), Ok(Level::Verbose));
    /// assert_eq!(" debug ".parse::<Level>(), Ok(Level::Verbose));
    /// assert_eq!("1".parse::<Level>(), Ok(Level::Error));
    /// assert!("loud".parse::<Level>().is_err());
    /// ```
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let trimmed = text.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "error" => Ok(Self::Error),
            "verbose" | "debug" => Ok(Self::Verbose),
            other => match other.parse::<u8>() {
                Ok(number) => Self::try_from(number),
                Err(_) => Err(ParseLevelError::Unknown(trimmed.to_owned())),
            },
        }
    }
}

impl TryFrom<u8> for Level {
    type Error = ParseLevelError;

    fn try_from(value: u8) -> Result<Self, ParseLevelError> {
        match value {
            0 => Ok(Level::Silent),
            1 => Ok(Level::Error),
            2 => Ok(Level::Verbose),
            other => Err(ParseLevelError::OutOfRange(other)),
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level as Self
    }
}

//! Error definitions.

use std::collections::TryReserveError;
use thiserror::Error;

/// A type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// An error that can be returned when converting or formatting Persian dates.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("(full) year must be between 1 and 9999")]
    DateOutOfRange,
    #[error("timestamp is outside the supported range")]
    TimestampOutOfRange,
    #[error("date not valid for month specified")]
    InvalidDate,
    #[error("hour must be between 0 and 23")]
    InvalidHour,
    #[error("minutes must be between 0 and 59")]
    InvalidMinute,
    #[error("seconds must be between 0 and 59")]
    InvalidSecond,
    #[error("time zone offset must be less than 24 hours")]
    InvalidOffset,
    #[error("time zone unavailable: {0}")]
    ZoneUnavailable(String),
    #[error("unknown format directive '{0}'")]
    UnknownDirective(char),
    #[error("{0}")]
    InvalidFormat(String),
    #[error("{0}")]
    FormatError(String),
    #[error("{0}")]
    ParseError(String),
    #[error("{0}")]
    TryReserveError(TryReserveError),
}

impl From<std::fmt::Error> for Error {
    #[inline]
    fn from(e: std::fmt::Error) -> Self {
        match try_format!("{}", e) {
            Ok(s) => Error::FormatError(s),
            Err(e) => e,
        }
    }
}

impl From<TryReserveError> for Error {
    #[inline]
    fn from(e: TryReserveError) -> Self {
        Error::TryReserveError(e)
    }
}

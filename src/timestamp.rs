//! Timestamp implementation.

use crate::common::{is_valid_timestamp, TIMESTAMP_MAX, TIMESTAMP_MIN};
use crate::error::{Error, Result};
use std::convert::TryFrom;
use std::fmt;

/// Timestamp represents an absolute point in time as whole seconds since the Unix epoch (UTC).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    /// The smallest supported timestamp, one day before `0001-01-01 00:00:00`.
    pub const MIN: Self = Timestamp(TIMESTAMP_MIN);

    /// The largest supported timestamp, one day after `9999-12-29 23:59:59`.
    pub const MAX: Self = Timestamp(TIMESTAMP_MAX);

    /// The Unix epoch, `1970-01-01 00:00:00 UTC`.
    pub const UNIX_EPOCH: Self = Timestamp(0);

    /// Creates a `Timestamp` from seconds since the Unix epoch.
    #[inline]
    pub const fn try_from_secs(secs: i64) -> Result<Timestamp> {
        if is_valid_timestamp(secs) {
            Ok(Timestamp(secs))
        } else {
            Err(Error::TimestampOutOfRange)
        }
    }

    /// Reads the current time from the system clock.
    #[inline]
    pub fn now() -> Result<Timestamp> {
        Timestamp::try_from_secs(chrono::Utc::now().timestamp())
    }

    /// Gets the seconds since the Unix epoch.
    #[inline(always)]
    pub const fn secs(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for Timestamp {
    type Error = Error;

    #[inline]
    fn try_from(secs: i64) -> Result<Self> {
        Timestamp::try_from_secs(secs)
    }
}

impl From<Timestamp> for i64 {
    #[inline]
    fn from(ts: Timestamp) -> Self {
        ts.secs()
    }
}

impl fmt::Display for Timestamp {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

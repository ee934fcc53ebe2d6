//! Time zone lookup.
//!
//! The conversion core never reads the host configuration on its own. A [`ZoneProvider`]
//! is passed in explicitly and asked for the [`ZoneContext`] of each instant.

use crate::common::SECONDS_PER_DAY;
use crate::error::{Error, Result};
use crate::util::StrExt;
use crate::Timestamp;
use chrono::{Duration, Offset, TimeZone};
use chrono_tz::{OffsetComponents, OffsetName, Tz};

/// The UTC offset, daylight saving flag, abbreviation and identifier in effect at an instant.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ZoneContext {
    offset: i32,
    dst: bool,
    abbreviation: String,
    identifier: String,
}

impl ZoneContext {
    /// Creates a `ZoneContext`. The offset must be strictly within ±24 hours.
    pub fn try_new<S1: AsRef<str>, S2: AsRef<str>>(
        offset: i32,
        dst: bool,
        abbreviation: S1,
        identifier: S2,
    ) -> Result<ZoneContext> {
        if (offset as i64).abs() >= SECONDS_PER_DAY {
            return Err(Error::InvalidOffset);
        }

        Ok(ZoneContext {
            offset,
            dst,
            abbreviation: abbreviation.as_ref().try_to_string()?,
            identifier: identifier.as_ref().try_to_string()?,
        })
    }

    /// The context of Coordinated Universal Time.
    #[inline]
    pub fn utc() -> ZoneContext {
        ZoneContext {
            offset: 0,
            dst: false,
            abbreviation: String::from("UTC"),
            identifier: String::from("UTC"),
        }
    }

    /// Offset from UTC in seconds; east of UTC is positive.
    #[inline]
    pub const fn offset(&self) -> i32 {
        self.offset
    }

    #[inline]
    pub const fn is_dst(&self) -> bool {
        self.dst
    }

    #[inline]
    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Shifts an instant into local seconds.
    #[inline]
    pub(crate) const fn to_local_seconds(&self, ts: Timestamp) -> i64 {
        ts.secs() + self.offset as i64
    }
}

/// A source of [`ZoneContext`] values. Must be deterministic for a fixed instant.
pub trait ZoneProvider {
    fn zone_at(&self, ts: Timestamp) -> Result<ZoneContext>;
}

impl<Z: ZoneProvider + ?Sized> ZoneProvider for &Z {
    #[inline]
    fn zone_at(&self, ts: Timestamp) -> Result<ZoneContext> {
        (**self).zone_at(ts)
    }
}

/// A zone with a constant offset and no daylight saving time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FixedZone {
    context: ZoneContext,
}

impl FixedZone {
    #[inline]
    pub fn new<S1: AsRef<str>, S2: AsRef<str>>(
        offset: i32,
        abbreviation: S1,
        identifier: S2,
    ) -> Result<FixedZone> {
        Ok(FixedZone {
            context: ZoneContext::try_new(offset, false, abbreviation, identifier)?,
        })
    }

    #[inline]
    pub fn utc() -> FixedZone {
        FixedZone {
            context: ZoneContext::utc(),
        }
    }
}

impl ZoneProvider for FixedZone {
    #[inline]
    fn zone_at(&self, _ts: Timestamp) -> Result<ZoneContext> {
        Ok(self.context.clone())
    }
}

/// A zone from the IANA time zone database.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct TzZone(Tz);

impl TzZone {
    #[inline]
    pub const fn new(tz: Tz) -> TzZone {
        TzZone(tz)
    }

    /// Looks up a zone by its IANA identifier, e.g. `Asia/Tehran`.
    pub fn from_name<S: AsRef<str>>(name: S) -> Result<TzZone> {
        let name = name.as_ref();
        name.parse::<Tz>().map(TzZone).map_err(|_| {
            match try_format!("unknown time zone identifier '{}'", name) {
                Ok(s) => Error::ZoneUnavailable(s),
                Err(e) => e,
            }
        })
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }
}

impl ZoneProvider for TzZone {
    fn zone_at(&self, ts: Timestamp) -> Result<ZoneContext> {
        let datetime = match self.0.timestamp_opt(ts.secs(), 0).single() {
            Some(datetime) => datetime,
            None => {
                return Err(Error::ZoneUnavailable(try_format!(
                    "{} has no mapping for timestamp {}",
                    self.0.name(),
                    ts
                )?))
            }
        };

        let offset = datetime.offset();
        ZoneContext::try_new(
            offset.fix().local_minus_utc(),
            offset.dst_offset() != Duration::zero(),
            offset.abbreviation(),
            self.0.name(),
        )
    }
}

/// The zone configured on the host, resolved each time it is asked for.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SystemZone;

impl SystemZone {
    /// Resolves the host zone into a [`TzZone`].
    pub fn detect() -> Result<TzZone> {
        let name = iana_time_zone::get_timezone().map_err(|e| {
            match try_format!("cannot read the system time zone: {}", e) {
                Ok(s) => Error::ZoneUnavailable(s),
                Err(e) => e,
            }
        })?;
        debug!("system time zone is {}", name);
        TzZone::from_name(name)
    }
}

impl ZoneProvider for SystemZone {
    #[inline]
    fn zone_at(&self, ts: Timestamp) -> Result<ZoneContext> {
        SystemZone::detect()?.zone_at(ts)
    }
}

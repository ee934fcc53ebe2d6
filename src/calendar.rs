//! The calendar facade: one instant, its zone and its Persian date.

use crate::date::normalize_legacy_year;
use crate::error::Result;
use crate::format::{DateTimeFormat, Formatter, LazyFormat};
use crate::zone::{SystemZone, ZoneContext, ZoneProvider};
use crate::{CalendarDate, Timestamp};
use std::fmt::Display;

/// Converts an instant into a Persian date under the given zone.
#[inline]
pub fn to_calendar_date(ts: Timestamp, zone: &ZoneContext) -> CalendarDate {
    CalendarDate::from_local_seconds(zone.to_local_seconds(ts))
}

/// Converts a Persian date into an instant.
///
/// The zone is looked up at the local seconds of the date, which is an approximation of the
/// instant being computed. The result is exact for any zone whose offset does not change
/// within a day of the date.
pub fn to_instant<Z: ZoneProvider>(date: &CalendarDate, provider: Z) -> Result<Timestamp> {
    let local_secs = date.to_local_seconds();
    let zone = provider.zone_at(Timestamp::try_from_secs(local_secs)?)?;
    let ts = Timestamp::try_from_secs(local_secs - zone.offset() as i64)?;
    trace!("{} in {} -> {}", date, zone.identifier(), ts);
    Ok(ts)
}

/// A point in time together with the zone and Persian date derived from it.
///
/// The instant is the single source of truth. The zone and the date are recomputed whenever
/// the instant changes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Calendar {
    timestamp: Timestamp,
    zone: ZoneContext,
    date: CalendarDate,
}

impl Calendar {
    /// Creates a `Calendar` for the current time.
    #[inline]
    pub fn now<Z: ZoneProvider>(provider: Z) -> Result<Calendar> {
        Calendar::at(Timestamp::now()?, provider)
    }

    /// Creates a `Calendar` for the given instant.
    #[inline]
    pub fn at<Z: ZoneProvider>(ts: Timestamp, provider: Z) -> Result<Calendar> {
        let zone = provider.zone_at(ts)?;
        let date = to_calendar_date(ts, &zone);
        Ok(Calendar {
            timestamp: ts,
            zone,
            date,
        })
    }

    /// Creates a `Calendar` from Persian date and time components in the given zone.
    #[inline]
    pub fn from_ymd_hms<Z: ZoneProvider>(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        provider: Z,
    ) -> Result<Calendar> {
        let date = CalendarDate::try_from_ymd_hms(year, month, day, hour, minute, second)?;
        let ts = to_instant(&date, &provider)?;
        Calendar::at(ts, provider)
    }

    /// Same as [`Calendar::from_ymd_hms`], but reads years below 1300 as abbreviated years.
    #[inline]
    pub fn from_legacy_ymd_hms<Z: ZoneProvider>(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        provider: Z,
    ) -> Result<Calendar> {
        Calendar::from_ymd_hms(
            normalize_legacy_year(year),
            month,
            day,
            hour,
            minute,
            second,
            provider,
        )
    }

    #[inline]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    #[inline]
    pub fn zone(&self) -> &ZoneContext {
        &self.zone
    }

    #[inline]
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Moves the calendar to another instant, looking the zone up again.
    ///
    /// The calendar is left unchanged when the lookup fails.
    #[inline]
    pub fn set_timestamp<Z: ZoneProvider>(&mut self, ts: Timestamp, provider: Z) -> Result<()> {
        *self = Calendar::at(ts, provider)?;
        Ok(())
    }

    /// Formats `Calendar` by given template, with the Persian locale and ASCII digits.
    #[inline]
    pub fn format<S: AsRef<str>>(&self, fmt: S) -> Result<impl Display + '_> {
        let fmt = Formatter::try_new(fmt)?;
        LazyFormat::try_new(fmt, self)
    }

    /// Formats `Calendar` by given template, with the Persian locale and Persian digits.
    #[inline]
    pub fn format_decorated<S: AsRef<str>>(&self, fmt: S) -> Result<impl Display + '_> {
        let fmt = Formatter::try_new(fmt)?.decorate(true);
        LazyFormat::try_new(fmt, self)
    }

    /// Renders `Calendar` with a prepared formatter.
    #[inline]
    pub fn render(&self, fmt: &Formatter) -> Result<String> {
        fmt.format_to_string(self)
    }
}

impl DateTimeFormat for Calendar {
    const HAS_ZONE: bool = true;

    #[inline]
    fn calendar_date(&self) -> CalendarDate {
        self.date
    }

    #[inline]
    fn zone_context(&self) -> Option<&ZoneContext> {
        Some(&self.zone)
    }

    #[inline]
    fn timestamp(&self) -> Option<Timestamp> {
        Some(self.timestamp)
    }
}

/// Renders the given instant, or the current time, in the host zone.
///
/// When `decorate` is set the digits of the output are Persian digits.
pub fn date<S: AsRef<str>>(fmt: S, ts: Option<Timestamp>, decorate: bool) -> Result<String> {
    let fmt = Formatter::try_new(fmt)?.decorate(decorate);
    let ts = match ts {
        Some(ts) => ts,
        None => Timestamp::now()?,
    };
    let calendar = Calendar::at(ts, SystemZone)?;
    calendar.render(&fmt)
}

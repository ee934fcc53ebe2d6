//! Persian calendar date implementation.
//!
//! [`CalendarDate`] is always the output of the forward conversion: explicit components are
//! validated, turned into local seconds by the reverse conversion and converted forward again.

use crate::common::{
    days_of_month, internal_year_length, is_valid_local_seconds, round_half_away,
    the_day_of_year, the_month_day_of_days, year_start, DATE_MAX_YEAR, DATE_MIN_YEAR,
    EPOCH_DAY_OFFSET, EPOCH_YEAR, HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR,
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, UNIX_EPOCH_WEEKDAY, YEAR_LENGTH,
    YEAR_LENGTH_CORRECTION,
};
use crate::cycle;
use crate::error::{Error, Result};
use crate::format::{Formatter, LazyFormat};
use crate::util::write_u32;
use std::fmt::{self, Display};
use std::str::FromStr;

/// Years below this are read as two-digit years by the legacy constructors.
const LEGACY_YEAR_LIMIT: i32 = 1300;

/// A civil date and time of day in the Persian (Solar Hijri) calendar.
///
/// Fields compare lexicographically as `(year, month, day, hour, minute, second)`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    day_of_year: u32,
}

impl CalendarDate {
    /// Converts local seconds (Unix seconds already shifted by the zone offset) into a date.
    ///
    /// The input must lie within the timestamp range widened by one day on each side, which
    /// covers every [`Timestamp`](crate::Timestamp) under any zone offset. Use
    /// [`CalendarDate::try_from_local_seconds`] for unchecked input.
    pub fn from_local_seconds(local_secs: i64) -> CalendarDate {
        debug_assert!(
            is_valid_local_seconds(local_secs),
            "local seconds {} out of range",
            local_secs
        );

        let second = local_secs.rem_euclid(60) as u32;
        let minute = (local_secs.rem_euclid(SECONDS_PER_HOUR) / 60) as u32;
        let hour = (local_secs.rem_euclid(SECONDS_PER_DAY) / SECONDS_PER_HOUR) as u32;

        let days = local_secs.div_euclid(SECONDS_PER_DAY) + EPOCH_DAY_OFFSET;
        let estimate = days as f64 / YEAR_LENGTH - days as f64 * YEAR_LENGTH_CORRECTION;
        let mut years = estimate.floor() as i64;
        let mut day_of_year = days - round_half_away(years as f64 * YEAR_LENGTH);

        // The correction term can leave the estimate one year off near a boundary.
        while day_of_year < 1 {
            years -= 1;
            day_of_year += internal_year_length(years) as i64;
            debug!("day {} moved back into internal year {}", days, years);
        }
        while day_of_year > internal_year_length(years) as i64 {
            day_of_year -= internal_year_length(years) as i64;
            years += 1;
            debug!("day {} moved forward into internal year {}", days, years);
        }

        let day_of_year = day_of_year as u32;
        let (month, day) = the_month_day_of_days(day_of_year);
        let year = (years + EPOCH_YEAR as i64) as i32;

        trace!(
            "local seconds {} -> {}-{}-{} {}:{}:{}",
            local_secs,
            year,
            month,
            day,
            hour,
            minute,
            second
        );

        CalendarDate {
            year,
            month,
            day,
            hour,
            minute,
            second,
            day_of_year,
        }
    }

    /// Converts local seconds into a date, rejecting input outside the supported range.
    #[inline]
    pub fn try_from_local_seconds(local_secs: i64) -> Result<CalendarDate> {
        if is_valid_local_seconds(local_secs) {
            Ok(CalendarDate::from_local_seconds(local_secs))
        } else {
            Err(Error::TimestampOutOfRange)
        }
    }

    /// Creates a `CalendarDate` from explicit components.
    ///
    /// Years outside `1..=9999`, months outside `1..=12` and days beyond the month's
    /// length are rejected.
    #[inline]
    pub fn try_from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<CalendarDate> {
        let local_secs = CalendarDate::checked_local_seconds(year, month, day, hour, minute, second)?;
        let date = CalendarDate::from_local_seconds(local_secs);
        debug_assert_eq!(date.extract(), (year, month, day, hour, minute, second));
        Ok(date)
    }

    /// Creates a `CalendarDate` from explicit components, reading years below 1300 as
    /// abbreviated years (`83` becomes `1383`).
    #[inline]
    pub fn try_from_legacy_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<CalendarDate> {
        CalendarDate::try_from_ymd_hms(normalize_legacy_year(year), month, day, hour, minute, second)
    }

    /// Checks if the given components form a valid date and time.
    #[inline]
    pub fn is_valid(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> bool {
        CalendarDate::validate(year, month, day, hour, minute, second).is_ok()
    }

    fn validate(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Result<()> {
        if year < DATE_MIN_YEAR || year > DATE_MAX_YEAR {
            return Err(Error::DateOutOfRange);
        }

        if month < 1 || month > MONTHS_PER_YEAR {
            return Err(Error::InvalidDate);
        }

        if day < 1 || day > days_of_month(year, month) {
            return Err(Error::InvalidDate);
        }

        if hour >= HOURS_PER_DAY {
            return Err(Error::InvalidHour);
        }

        if minute >= MINUTES_PER_HOUR {
            return Err(Error::InvalidMinute);
        }

        if second >= SECONDS_PER_MINUTE {
            return Err(Error::InvalidSecond);
        }

        Ok(())
    }

    fn checked_local_seconds(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<i64> {
        CalendarDate::validate(year, month, day, hour, minute, second)?;
        Ok(local_seconds(year, the_day_of_year(month, day), hour, minute, second))
    }

    /// Converts the date back into local seconds, the exact inverse of
    /// [`CalendarDate::from_local_seconds`].
    #[inline]
    pub fn to_local_seconds(&self) -> i64 {
        local_seconds(
            self.year,
            self.day_of_year,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Extracts `(year, month, day, hour, minute, second)` from the date.
    #[inline]
    pub const fn extract(&self) -> (i32, u32, u32, u32, u32, u32) {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    /// Hour on a 12-hour clock, from 1 to 12.
    #[inline]
    pub const fn hour12(&self) -> u32 {
        match self.hour {
            0 => 12,
            1..=12 => self.hour,
            _ => self.hour - 12,
        }
    }

    #[inline]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u32 {
        self.second
    }

    /// Day of the year, from 1 to 366.
    #[inline]
    pub const fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Weekday from 0 (Saturday) to 6 (Friday).
    ///
    /// Counted from the day number, so consecutive days always have consecutive weekdays. This
    /// agrees with [`day_of_week`](crate::day_of_week) wherever the cycle's leap years match the
    /// year lengths the converters use.
    #[inline]
    pub fn weekday(&self) -> u32 {
        let days = self.to_local_seconds().div_euclid(SECONDS_PER_DAY);
        (days + UNIX_EPOCH_WEEKDAY).rem_euclid(7) as u32
    }

    /// Week of the year. Weeks start on Saturday, and days before the first Saturday are in
    /// week 0.
    #[inline]
    pub fn week_of_year(&self) -> u32 {
        let first_weekday = (self.weekday() + 7 - (self.day_of_year - 1) % 7) % 7;
        cycle::week_number(first_weekday, self.day_of_year)
    }

    /// Checks whether the year is a leap year of the 2820-year cycle.
    ///
    /// This is the cycle's flag. In some years it differs from the year length the converters
    /// use, see [`CalendarDate::days_in_year`]; 1403 has 366 days but is not a cycle leap year.
    #[inline]
    pub fn is_leap_year(&self) -> bool {
        cycle::is_leap_year(self.year)
    }

    /// Number of days in the month of this date. Esfand follows [`CalendarDate::days_in_year`].
    #[inline]
    pub fn days_in_month(&self) -> u32 {
        days_of_month(self.year, self.month)
    }

    /// Number of days in the year of this date, as laid out by the converters.
    ///
    /// It may disagree with [`CalendarDate::is_leap_year`], which follows the leap cycle.
    #[inline]
    pub fn days_in_year(&self) -> u32 {
        internal_year_length(self.year as i64 - EPOCH_YEAR as i64)
    }

    /// Formats `CalendarDate` by given format string.
    ///
    /// Time zone directives are not available on a bare date.
    #[inline]
    pub fn format<S: AsRef<str>>(self, fmt: S) -> Result<impl Display> {
        let fmt = Formatter::try_new(fmt)?;
        LazyFormat::try_new(fmt, self)
    }

    /// Parses `CalendarDate` from given string and format.
    #[inline]
    pub fn parse<S1: AsRef<str>, S2: AsRef<str>>(input: S1, fmt: S2) -> Result<Self> {
        let fmt = Formatter::try_new(fmt)?;
        fmt.parse(input)
    }
}

/// Reads years below 1300 as abbreviated years.
#[inline]
pub(crate) fn normalize_legacy_year(year: i32) -> i32 {
    if year < LEGACY_YEAR_LIMIT {
        let full = year + LEGACY_YEAR_LIMIT;
        warn!("legacy year {} read as {}", year, full);
        full
    } else {
        year
    }
}

#[inline]
fn local_seconds(year: i32, day_of_year: u32, hour: u32, minute: u32, second: u32) -> i64 {
    let internal_year = year as i64 - EPOCH_YEAR as i64;
    let days = day_of_year as i64 + year_start(internal_year) - EPOCH_DAY_OFFSET;
    let secs = second as i64 + minute as i64 * 60 + hour as i64 * SECONDS_PER_HOUR;
    days * SECONDS_PER_DAY + secs
}

impl Display for CalendarDate {
    /// Writes `Y-m-d H:i:s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_u32(&mut *f, self.year.max(0) as u32, 4)?;
        f.write_str("-")?;
        write_u32(&mut *f, self.month, 2)?;
        f.write_str("-")?;
        write_u32(&mut *f, self.day, 2)?;
        f.write_str(" ")?;
        write_u32(&mut *f, self.hour, 2)?;
        f.write_str(":")?;
        write_u32(&mut *f, self.minute, 2)?;
        f.write_str(":")?;
        write_u32(&mut *f, self.second, 2)
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parses `Y-m-d H:i:s`.
    #[inline]
    fn from_str(s: &str) -> Result<Self> {
        CalendarDate::parse(s, "Y-m-d H:i:s")
    }
}

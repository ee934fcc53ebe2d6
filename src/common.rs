//! Common structures, constants and functions.

pub const MONTHS_PER_YEAR: u32 = 12;
pub const HOURS_PER_DAY: u32 = 24;
pub const MINUTES_PER_HOUR: u32 = 60;
pub const SECONDS_PER_MINUTE: u32 = 60;

pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Mean length of the tropical year in days, valid from year 1380 onwards.
pub const YEAR_LENGTH: f64 = 365.24218956;

/// Second-order correction for the slow shortening of the tropical year.
pub const YEAR_LENGTH_CORRECTION: f64 = 0.00000006152;

/// Days between the start of the internal day count and the Unix epoch.
pub const EPOCH_DAY_OFFSET: i64 = 287;

/// Persian year of internal year zero.
pub const EPOCH_YEAR: i32 = 1348;

/// Offset from a Persian year to the observation numbering of the cycle tables.
pub const REFERENCE_YEAR_OFFSET: i64 = 2346;

pub const GRAND_CYCLE_YEARS: i64 = 2820;
pub const SUB_CYCLE_YEARS: i64 = 128;

/// Days elapsed before the first day of each month.
pub const MONTH_OFFSETS: [u32; 12] = [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336];

/// Positions within a 128-year sub-cycle that are leap years. The trailing 0 is both
/// a sentinel for the ascending scan and a real marker.
pub const LEAP_MARKERS: [i64; 31] = [
    5, 9, 13, 17, 21, 25, 29, 34, 38, 42, 46, 50, 54, 58, 62, 67, 71, 75, 79, 83, 87, 91, 95,
    100, 104, 108, 112, 116, 120, 124, 0,
];

pub const DATE_MIN_YEAR: i32 = 1;
pub const DATE_MAX_YEAR: i32 = 9999;

/// One day before `0001-01-01 00:00:00` in local arithmetic.
pub const TIMESTAMP_MIN: i64 = -42_531_955_200;

/// One day after `9999-12-29 23:59:59` in local arithmetic.
pub const TIMESTAMP_MAX: i64 = 273_005_855_999;

/// Local seconds accepted by the forward conversion: the timestamp range widened by the
/// largest zone offset.
pub const LOCAL_SECONDS_MIN: i64 = TIMESTAMP_MIN - SECONDS_PER_DAY;
pub const LOCAL_SECONDS_MAX: i64 = TIMESTAMP_MAX + SECONDS_PER_DAY;

/// Weekday of `1970-01-01`, a Thursday, counting from 0 (Saturday).
pub const UNIX_EPOCH_WEEKDAY: i64 = 5;

/// Rounds half away from zero, the rounding used at every year boundary.
#[inline]
pub fn round_half_away(value: f64) -> i64 {
    value.round() as i64
}

/// Internal day number of the last day before the given internal year begins.
#[inline]
pub fn year_start(internal_year: i64) -> i64 {
    round_half_away(YEAR_LENGTH * internal_year as f64)
}

/// Number of days (365 or 366) in the given internal year.
#[inline]
pub fn internal_year_length(internal_year: i64) -> u32 {
    (year_start(internal_year + 1) - year_start(internal_year)) as u32
}

/// Number of days (365 or 366) in the given Persian year, as laid out by the converters.
#[inline]
pub fn days_of_year(year: i32) -> u32 {
    internal_year_length(year as i64 - EPOCH_YEAR as i64)
}

/// Number of days in the given month of the given Persian year.
#[inline]
pub fn days_of_month(year: i32, month: u32) -> u32 {
    debug_assert!((1..=MONTHS_PER_YEAR).contains(&month));
    match month {
        1..=6 => 31,
        7..=11 => 30,
        _ => days_of_year(year) - MONTH_OFFSETS[11],
    }
}

/// Splits a day of the year into `(month, day)`.
#[inline]
pub fn the_month_day_of_days(day_of_year: u32) -> (u32, u32) {
    debug_assert!(day_of_year >= 1);
    let month = MONTH_OFFSETS[1..]
        .iter()
        .position(|&end| day_of_year <= end)
        .map_or(MONTHS_PER_YEAR, |index| index as u32 + 1);
    (month, day_of_year - MONTH_OFFSETS[month as usize - 1])
}

/// Day of the year of the given month and day.
#[inline]
pub const fn the_day_of_year(month: u32, day: u32) -> u32 {
    MONTH_OFFSETS[month as usize - 1] + day
}

#[inline(always)]
pub const fn is_valid_timestamp(secs: i64) -> bool {
    secs >= TIMESTAMP_MIN && secs <= TIMESTAMP_MAX
}

#[inline(always)]
pub const fn is_valid_local_seconds(secs: i64) -> bool {
    secs >= LOCAL_SECONDS_MIN && secs <= LOCAL_SECONDS_MAX
}

//! The 2820-year leap cycle.
//!
//! A grand cycle of 2820 years is made of 22 sub-cycles of 128 years plus a 4-year tail.
//! Inside each sub-cycle the years listed in [`LEAP_MARKERS`] are leap years. The cycle
//! also determines the weekday on which each year begins.

use crate::common::{GRAND_CYCLE_YEARS, LEAP_MARKERS, REFERENCE_YEAR_OFFSET, SUB_CYCLE_YEARS};

/// Markers in ascending order, without the trailing sentinel.
const ASCENDING_MARKERS: usize = LEAP_MARKERS.len() - 1;

/// Translates a Persian year into the observation numbering used by the cycle tables.
#[inline]
pub const fn reference_offset(year: i32) -> i64 {
    year as i64 + REFERENCE_YEAR_OFFSET
}

#[inline]
const fn position_in_sub_cycle(year: i32) -> i64 {
    reference_offset(year)
        .rem_euclid(GRAND_CYCLE_YEARS)
        .rem_euclid(SUB_CYCLE_YEARS)
}

/// Returns which leap year (1 to 31) of its sub-cycle `year` is, or `None` for a common year.
///
/// `Some(_)` and `None` are the only outcomes; a slot is never confused with a missing one.
#[inline]
pub fn leap_slot(year: i32) -> Option<u8> {
    let position = position_in_sub_cycle(year);
    LEAP_MARKERS
        .iter()
        .position(|&marker| marker == position)
        .map(|index| index as u8 + 1)
}

/// Checks whether `year` is a leap year of the cycle.
#[inline]
pub fn is_leap_year(year: i32) -> bool {
    leap_slot(year).is_some()
}

/// Returns the weekday (0 = Saturday to 6 = Friday) of the given day of the year.
///
/// A `day_of_year` of 0 is treated as the first day of the year.
pub fn day_of_week(year: i32, day_of_year: u32) -> u32 {
    let reference = reference_offset(year);

    let grand_cycles = reference.div_euclid(GRAND_CYCLE_YEARS);
    let in_grand_cycle = reference.rem_euclid(GRAND_CYCLE_YEARS);
    let sub_cycles = in_grand_cycle / SUB_CYCLE_YEARS;
    let in_sub_cycle = in_grand_cycle % SUB_CYCLE_YEARS;

    // number of markers below the position; positions past the last one see all of them
    let passed = LEAP_MARKERS[..ASCENDING_MARKERS]
        .iter()
        .position(|&marker| marker >= in_sub_cycle)
        .unwrap_or(ASCENDING_MARKERS) as i64;

    let year_start = (grand_cycles + 1) * 3 + sub_cycles * 5 + in_sub_cycle + passed;
    let offset = day_of_year.saturating_sub(1) as i64;

    (year_start + offset).rem_euclid(7) as u32
}

/// Returns the week number of the given day of the year.
///
/// Weeks start on Saturday. Days before the first Saturday of the year are in week 0, so the
/// numbering matches the historical tables rather than ISO weeks.
#[inline]
pub fn week_of_year(year: i32, day_of_year: u32) -> u32 {
    week_number(day_of_week(year, 1), day_of_year)
}

/// Week number of `day_of_year` in a year whose first day falls on `first_weekday`.
#[inline]
pub(crate) fn week_number(first_weekday: u32, day_of_year: u32) -> u32 {
    let days_before_saturday = (7 - first_weekday % 7) % 7;
    let distance = day_of_year as i64 - days_before_saturday as i64;
    if distance > 0 {
        ((distance + 6) / 7) as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::days_of_year;

    #[test]
    fn test_reference_offset() {
        assert_eq!(reference_offset(0), 2346);
        assert_eq!(reference_offset(1383), 3729);
        assert_eq!(reference_offset(-2346), 0);
    }

    #[test]
    fn test_leap_slot() {
        // 3729 % 2820 = 909, 909 % 128 = 13
        assert_eq!(leap_slot(1383), Some(3));
        assert_eq!(leap_slot(1375), Some(1));
        assert_eq!(leap_slot(1404), Some(8));
        assert_eq!(leap_slot(1384), None);
        assert_eq!(leap_slot(1403), None);

        // the sentinel position is a genuine leap year
        let year = (0..128).find(|&y| position_in_sub_cycle(y) == 0).unwrap();
        assert_eq!(leap_slot(year), Some(31));
        assert!(is_leap_year(year));
    }

    #[test]
    fn test_leap_years() {
        let leaps: Vec<i32> = (1380..1420).filter(|&y| is_leap_year(y)).collect();
        assert_eq!(
            leaps,
            vec![1383, 1387, 1391, 1395, 1399, 1404, 1408, 1412, 1416]
        );
    }

    #[test]
    fn test_grand_cycle_periodicity() {
        for start in [1, 474, 1000, 7000] {
            let leaps: Vec<i32> = (start..start + GRAND_CYCLE_YEARS as i32)
                .filter(|&y| is_leap_year(y))
                .collect();
            assert_eq!(leaps.len(), 22 * 31 + 1);

            for pair in leaps.windows(2) {
                let gap = pair[1] - pair[0];
                assert!((4..=5).contains(&gap), "gap {} after {}", gap, pair[0]);
            }
        }
    }

    #[test]
    fn test_day_of_week() {
        // 1 Farvardin 1348 was a Friday, 1 Farvardin 1349 a Saturday
        assert_eq!(day_of_week(1348, 1), 6);
        assert_eq!(day_of_week(1349, 1), 0);
        assert_eq!(day_of_week(1383, 1), 0);
        // 30 Esfand 1383 was a Sunday
        assert_eq!(day_of_week(1383, 366), 1);
        assert_eq!(day_of_week(1383, 0), day_of_week(1383, 1));
    }

    #[test]
    fn test_day_of_week_cycle() {
        for year in [1, 2, 1348, 1383, 1403, 1404, 9999] {
            let mut seen = [false; 7];
            for day in 1..=days_of_year(year) {
                let weekday = day_of_week(year, day);
                assert!(weekday < 7);
                seen[weekday as usize] = true;
                if day > 7 {
                    assert_eq!(weekday, day_of_week(year, day - 7));
                } else {
                    assert_eq!(weekday, (day_of_week(year, 1) + day - 1) % 7);
                }
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_week_of_year() {
        assert_eq!(week_of_year(1383, 1), 1);
        assert_eq!(week_of_year(1383, 7), 1);
        assert_eq!(week_of_year(1383, 8), 2);
        assert_eq!(week_of_year(1383, 366), 53);
        assert_eq!(week_of_year(1403, 366), 52);

        // 1348 starts on a Friday, so the first Saturday is the 2nd day
        assert_eq!(week_of_year(1348, 1), 0);
        assert_eq!(week_of_year(1348, 2), 1);
        assert_eq!(week_of_year(1348, 8), 1);
        assert_eq!(week_of_year(1348, 9), 2);

        // 1340 starts on a Tuesday, four days before the first Saturday
        assert_eq!(day_of_week(1340, 1), 3);
        let weeks: Vec<u32> = (1..=6).map(|day| week_of_year(1340, day)).collect();
        assert_eq!(weeks, vec![0, 0, 0, 0, 1, 1]);
        assert_eq!(week_of_year(1340, 11), 1);
        assert_eq!(week_of_year(1340, 12), 2);
    }

    #[test]
    fn test_week_number_never_decreases() {
        for first_weekday in 0..7 {
            let mut previous = 0;
            for day in 1..=366 {
                let week = week_number(first_weekday, day);
                assert!(week >= previous, "week drops on day {}", day);
                assert!(week <= previous + 1);
                previous = week;
            }
            assert_eq!(week_number(first_weekday, 1), (first_weekday == 0) as u32);
        }
    }
}

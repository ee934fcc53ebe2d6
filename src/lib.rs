//! This crate provides conversion between instants and the Persian (Solar Hijri) calendar,
//! together with `date()` style formatting.

#[macro_use]
mod util;
#[macro_use]
mod logging;

mod calendar;
mod common;
mod cycle;
mod date;
mod error;
mod format;
mod locale;
mod timestamp;
mod zone;

#[cfg(feature = "serde")]
mod serialize;

pub use crate::calendar::{date, to_calendar_date, to_instant, Calendar};
pub use crate::cycle::{day_of_week, is_leap_year, leap_slot, reference_offset, week_of_year};
pub use crate::date::CalendarDate;
pub use crate::error::{Error, Result};
pub use crate::format::{DateTimeFormat, Formatter};
pub use crate::locale::Locale;
pub use crate::timestamp::Timestamp;
pub use crate::zone::{FixedZone, SystemZone, TzZone, ZoneContext, ZoneProvider};

//! Impl the `serde::Serialize` and `serde::Deserialize` traits.

use crate::common::{DATE_MAX_YEAR, DATE_MIN_YEAR};
use crate::{CalendarDate, Error, Formatter, Timestamp};
use once_cell::sync::Lazy;
use serde_crate::de::Visitor;
use serde_crate::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt;

static DATE_FORMATTER: Lazy<Result<Formatter, Error>> =
    Lazy::new(|| Formatter::try_new("Y-m-d H:i:s"));

impl Serialize for CalendarDate {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            let formatter = DATE_FORMATTER.as_ref().map_err(ser::Error::custom)?;
            let buf = formatter
                .format_to_string(self)
                .map_err(ser::Error::custom)?;
            serializer.serialize_str(&buf)
        } else {
            serializer.serialize_i64(self.to_local_seconds())
        }
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CalendarDateVisitor;

        impl<'de> Visitor<'de> for CalendarDateVisitor {
            type Value = CalendarDate;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a CalendarDate")
            }

            #[inline]
            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let date = CalendarDate::try_from_local_seconds(v).map_err(de::Error::custom)?;
                if date.year() < DATE_MIN_YEAR || date.year() > DATE_MAX_YEAR {
                    return Err(de::Error::custom(Error::DateOutOfRange));
                }
                Ok(date)
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let formatter = DATE_FORMATTER.as_ref().map_err(de::Error::custom)?;
                formatter.parse(v).map_err(de::Error::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(CalendarDateVisitor)
        } else {
            deserializer.deserialize_i64(CalendarDateVisitor)
        }
    }
}

impl Serialize for Timestamp {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(self.secs())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TimestampVisitor;

        impl<'de> Visitor<'de> for TimestampVisitor {
            type Value = Timestamp;

            #[inline]
            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a Timestamp")
            }

            #[inline]
            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Timestamp::try_from_secs(v).map_err(de::Error::custom)
            }

            #[inline]
            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                let secs =
                    i64::try_from(v).map_err(|_| de::Error::custom(Error::TimestampOutOfRange))?;
                self.visit_i64(secs)
            }
        }

        deserializer.deserialize_i64(TimestampVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_date(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) {
        let date = CalendarDate::try_from_ymd_hms(year, month, day, hour, minute, second).unwrap();
        let date_json = serde_json::to_string(&date).unwrap();
        let json_decode: CalendarDate = serde_json::from_str(&date_json).unwrap();
        assert_eq!(
            date_json,
            format!("\"{}\"", date.format("Y-m-d H:i:s").unwrap())
        );
        assert_eq!(json_decode, date);

        let bin = bincode::serialize(&date).unwrap();
        let bin_decode: CalendarDate = bincode::deserialize(&bin).unwrap();
        assert_eq!(bin_decode, date);
    }

    #[test]
    fn test_serde_calendar_date() {
        test_date(1, 1, 1, 0, 0, 0);
        test_date(1347, 12, 29, 23, 59, 59);
        test_date(1348, 10, 11, 0, 0, 0);
        test_date(1383, 12, 30, 13, 45, 25);
        test_date(1402, 8, 23, 22, 13, 20);
        test_date(9999, 12, 29, 23, 59, 59);
    }

    #[test]
    fn test_serde_calendar_date_invalid() {
        assert!(serde_json::from_str::<CalendarDate>("\"1384-12-30 00:00:00\"").is_err());
        assert!(serde_json::from_str::<CalendarDate>("\"1383-12-30\"").is_err());
        assert!(serde_json::from_str::<CalendarDate>("1111326325").is_err());

        let bin = bincode::serialize(&i64::MAX).unwrap();
        assert!(bincode::deserialize::<CalendarDate>(&bin).is_err());
    }

    fn test_timestamp(secs: i64) {
        let ts = Timestamp::try_from_secs(secs).unwrap();
        let ts_json = serde_json::to_string(&ts).unwrap();
        assert_eq!(ts_json, secs.to_string());
        let json_decode: Timestamp = serde_json::from_str(&ts_json).unwrap();
        assert_eq!(json_decode, ts);

        let bin = bincode::serialize(&ts).unwrap();
        let bin_decode: Timestamp = bincode::deserialize(&bin).unwrap();
        assert_eq!(bin_decode, ts);
    }

    #[test]
    fn test_serde_timestamp() {
        test_timestamp(0);
        test_timestamp(-1);
        test_timestamp(1_111_313_725);
        test_timestamp(Timestamp::MIN.secs());
        test_timestamp(Timestamp::MAX.secs());

        assert!(serde_json::from_str::<Timestamp>("9223372036854775807").is_err());
        assert!(serde_json::from_str::<Timestamp>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Timestamp>("\"0\"").is_err());
    }
}

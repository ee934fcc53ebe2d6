//! Formatting (and parsing) of Persian dates with `date()` style templates.

use crate::error::Result;
use crate::locale::Locale;
use crate::util::{write_i64, write_u32, StrExt};
use crate::zone::ZoneContext;
use crate::{CalendarDate, Error, Timestamp};
use stack_buf::StackVec;
use std::fmt;

const MAX_FIELDS: usize = 64;

/// A value a template can be rendered from.
pub trait DateTimeFormat {
    /// Whether zone directives (`e T I O P Z c r U`) are available.
    const HAS_ZONE: bool;

    fn calendar_date(&self) -> CalendarDate;

    fn zone_context(&self) -> Option<&ZoneContext>;

    fn timestamp(&self) -> Option<Timestamp>;
}

impl DateTimeFormat for CalendarDate {
    const HAS_ZONE: bool = false;

    #[inline]
    fn calendar_date(&self) -> CalendarDate {
        *self
    }

    #[inline]
    fn zone_context(&self) -> Option<&ZoneContext> {
        None
    }

    #[inline]
    fn timestamp(&self) -> Option<Timestamp> {
        None
    }
}

impl<T: DateTimeFormat + ?Sized> DateTimeFormat for &T {
    const HAS_ZONE: bool = T::HAS_ZONE;

    #[inline]
    fn calendar_date(&self) -> CalendarDate {
        (**self).calendar_date()
    }

    #[inline]
    fn zone_context(&self) -> Option<&ZoneContext> {
        (**self).zone_context()
    }

    #[inline]
    fn timestamp(&self) -> Option<Timestamp> {
        (**self).timestamp()
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Field {
    /// An ASCII letter that is not a directive
    Unknown(char),
    /// Literal text, as a byte range of the template
    Literal(usize, usize),
    /// 'd'
    Day,
    /// 'j'
    DayUnpadded,
    /// 'D'
    WeekdayAbbr,
    /// 'l'
    WeekdayName,
    /// 'N', 1 (Saturday) to 7
    WeekdayIso,
    /// 'w', 0 (Saturday) to 6
    Weekday,
    /// 'S'
    DayOrdinal,
    /// 'z'
    DayOfYear,
    /// 'W'
    WeekOfYear,
    /// 'F'
    MonthName,
    /// 'M'
    MonthAbbr,
    /// 'm'
    Month,
    /// 'n'
    MonthUnpadded,
    /// 't'
    DaysInMonth,
    /// 'L'
    LeapYear,
    /// 'Y'
    Year,
    /// 'y'
    ShortYear,
    /// 'a'
    AmPmLower,
    /// 'A'
    AmPmUpper,
    /// 'g'
    Hour12Unpadded,
    /// 'h'
    Hour12,
    /// 'G'
    Hour24Unpadded,
    /// 'H'
    Hour24,
    /// 'i'
    Minute,
    /// 's'
    Second,
    /// 'e'
    ZoneIdentifier,
    /// 'T'
    ZoneAbbr,
    /// 'I'
    Dst,
    /// 'O', e.g. `+0330`
    Offset,
    /// 'P', e.g. `+03:30`
    OffsetColon,
    /// 'Z'
    OffsetSeconds,
    /// 'c', ISO 8601 format
    Iso8601,
    /// 'r', RFC 2822 format
    Rfc2822,
    /// 'U'
    UnixSeconds,
}

impl Field {
    #[inline]
    const fn of_directive(ch: u8) -> Field {
        match ch {
            b'd' => Field::Day,
            b'j' => Field::DayUnpadded,
            b'D' => Field::WeekdayAbbr,
            b'l' => Field::WeekdayName,
            b'N' => Field::WeekdayIso,
            b'w' => Field::Weekday,
            b'S' => Field::DayOrdinal,
            b'z' => Field::DayOfYear,
            b'W' => Field::WeekOfYear,
            b'F' => Field::MonthName,
            b'M' => Field::MonthAbbr,
            b'm' => Field::Month,
            b'n' => Field::MonthUnpadded,
            b't' => Field::DaysInMonth,
            b'L' => Field::LeapYear,
            b'Y' => Field::Year,
            b'y' => Field::ShortYear,
            b'a' => Field::AmPmLower,
            b'A' => Field::AmPmUpper,
            b'g' => Field::Hour12Unpadded,
            b'h' => Field::Hour12,
            b'G' => Field::Hour24Unpadded,
            b'H' => Field::Hour24,
            b'i' => Field::Minute,
            b's' => Field::Second,
            b'e' => Field::ZoneIdentifier,
            b'T' => Field::ZoneAbbr,
            b'I' => Field::Dst,
            b'O' => Field::Offset,
            b'P' => Field::OffsetColon,
            b'Z' => Field::OffsetSeconds,
            b'c' => Field::Iso8601,
            b'r' => Field::Rfc2822,
            b'U' => Field::UnixSeconds,
            _ => Field::Unknown(ch as char),
        }
    }

    /// Whether the field reads the zone or the instant rather than the civil date.
    #[inline]
    pub const fn needs_zone(&self) -> bool {
        matches!(
            self,
            Field::ZoneIdentifier
                | Field::ZoneAbbr
                | Field::Dst
                | Field::Offset
                | Field::OffsetColon
                | Field::OffsetSeconds
                | Field::Iso8601
                | Field::Rfc2822
                | Field::UnixSeconds
        )
    }
}

/// Splits a template into fields.
///
/// ASCII letters are directives, `\x` is the literal `x` and any other run of characters is a
/// single literal. A trailing `\` is kept as is.
pub struct FormatParser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> FormatParser<'a> {
    #[inline]
    pub const fn new(input: &'a str) -> Self {
        FormatParser {
            input: input.as_bytes(),
            pos: 0,
        }
    }

    #[inline]
    fn pop(&mut self) -> Option<u8> {
        if self.pos < self.input.len() {
            let val = Some(self.input[self.pos]);
            self.pos += 1;
            val
        } else {
            None
        }
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    #[inline]
    fn advance(&mut self, step: usize) {
        self.pos += step;
    }

    /// Length in bytes of the UTF-8 character starting at the current position.
    #[inline]
    fn char_len(&self) -> usize {
        match self.peek() {
            Some(b) if b < 0x80 => 1,
            Some(b) if b >= 0xF0 => 4,
            Some(b) if b >= 0xE0 => 3,
            Some(_) => 2,
            None => 0,
        }
    }

    #[inline]
    fn literal_run(&mut self) -> Field {
        let start = self.pos;
        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphabetic() || ch == b'\\' {
                break;
            }
            let len = self.char_len();
            self.advance(len);
        }
        Field::Literal(start, self.pos)
    }

    fn next(&mut self) -> Option<Field> {
        let field = match self.peek()? {
            b'\\' => {
                self.advance(1);
                if self.peek().is_none() {
                    Field::Literal(self.pos - 1, self.pos)
                } else {
                    let start = self.pos;
                    let len = self.char_len();
                    self.advance(len);
                    Field::Literal(start, self.pos)
                }
            }
            ch if ch.is_ascii_alphabetic() => {
                self.pop();
                Field::of_directive(ch)
            }
            _ => self.literal_run(),
        };
        Some(field)
    }
}

impl<'a> Iterator for FormatParser<'a> {
    type Item = Field;

    #[inline(always)]
    fn next(&mut self) -> Option<Field> {
        self.next()
    }
}

/// Persian date formatter.
#[derive(Debug)]
pub struct Formatter {
    template: String,
    fields: StackVec<Field, MAX_FIELDS>,
    locale: Locale,
    decorate: bool,
}

impl Formatter {
    /// Creates a new `Formatter` from given template, rendering with the Persian locale.
    #[inline]
    pub fn try_new<S: AsRef<str>>(fmt: S) -> Result<Self> {
        let template = fmt.as_ref().try_to_string()?;
        let parser = FormatParser::new(&template);

        let mut fields = StackVec::new();

        for field in parser {
            if let Field::Unknown(ch) = field {
                return Err(Error::UnknownDirective(ch));
            }

            if fields.is_full() {
                return Err(Error::InvalidFormat(
                    "date format is too long for internal buffer".try_to_string()?,
                ));
            }

            fields.push(field);
        }

        Ok(Formatter {
            template,
            fields,
            locale: Locale::PERSIAN,
            decorate: false,
        })
    }

    /// Renders names and markers with the given locale.
    #[inline]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Replaces ASCII digits of the whole output with the locale's digits.
    #[inline]
    pub fn decorate(mut self, decorate: bool) -> Self {
        self.decorate = decorate;
        self
    }

    #[inline]
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Whether any directive of the template needs a zone.
    #[inline]
    pub fn needs_zone(&self) -> bool {
        self.fields.iter().any(Field::needs_zone)
    }

    #[inline]
    fn literal(&self, start: usize, end: usize) -> &str {
        &self.template[start..end]
    }

    /// Formats into the given writer.
    #[inline]
    pub fn format<W: fmt::Write, T: DateTimeFormat + ?Sized>(&self, dt: &T, w: W) -> Result<()> {
        if !T::HAS_ZONE && self.needs_zone() {
            return Err(Error::FormatError(
                "time zone directives need a calendar with a zone".try_to_string()?,
            ));
        }

        if self.decorate {
            self.format_internal(
                dt,
                DigitWriter {
                    inner: w,
                    locale: &self.locale,
                },
            )
        } else {
            self.format_internal(dt, w)
        }
    }

    /// Formats into a new `String`.
    #[inline]
    pub fn format_to_string<T: DateTimeFormat + ?Sized>(&self, dt: &T) -> Result<String> {
        let mut s = String::new();
        s.try_reserve(self.template.len() * 2)?;
        self.format(dt, &mut s)?;
        Ok(s)
    }

    fn format_internal<W: fmt::Write, T: DateTimeFormat + ?Sized>(
        &self,
        dt: &T,
        mut w: W,
    ) -> Result<()> {
        let date = dt.calendar_date();
        let locale = &self.locale;

        for field in self.fields.iter() {
            match *field {
                Field::Unknown(_) => unreachable!(),
                Field::Literal(start, end) => w.write_str(self.literal(start, end))?,
                Field::Day => write_u32(&mut w, date.day(), 2)?,
                Field::DayUnpadded => write_u32(&mut w, date.day(), 1)?,
                Field::WeekdayAbbr => w.write_str(locale.weekday_abbr(date.weekday()))?,
                Field::WeekdayName => w.write_str(locale.weekday_name(date.weekday()))?,
                Field::WeekdayIso => write_u32(&mut w, date.weekday() + 1, 1)?,
                Field::Weekday => write_u32(&mut w, date.weekday(), 1)?,
                Field::DayOrdinal => w.write_str(locale.day_ordinal(date.day()))?,
                Field::DayOfYear => write_u32(&mut w, date.day_of_year(), 1)?,
                Field::WeekOfYear => write_u32(&mut w, date.week_of_year(), 1)?,
                Field::MonthName => w.write_str(locale.month_name(date.month()))?,
                Field::MonthAbbr => w.write_str(locale.month_abbr(date.month()))?,
                Field::Month => write_u32(&mut w, date.month(), 2)?,
                Field::MonthUnpadded => write_u32(&mut w, date.month(), 1)?,
                Field::DaysInMonth => write_u32(&mut w, date.days_in_month(), 1)?,
                Field::LeapYear => w.write_char(if date.is_leap_year() { '1' } else { '0' })?,
                Field::Year => write_year(&mut w, date.year())?,
                Field::ShortYear => write_u32(&mut w, date.year().rem_euclid(100) as u32, 2)?,
                Field::AmPmLower => w.write_str(locale.meridiem(date.hour(), false))?,
                Field::AmPmUpper => w.write_str(locale.meridiem(date.hour(), true))?,
                Field::Hour12Unpadded => write_u32(&mut w, date.hour12(), 1)?,
                Field::Hour12 => write_u32(&mut w, date.hour12(), 2)?,
                Field::Hour24Unpadded => write_u32(&mut w, date.hour(), 1)?,
                Field::Hour24 => write_u32(&mut w, date.hour(), 2)?,
                Field::Minute => write_u32(&mut w, date.minute(), 2)?,
                Field::Second => write_u32(&mut w, date.second(), 2)?,
                Field::ZoneIdentifier => w.write_str(zone_of(dt)?.identifier())?,
                Field::ZoneAbbr => w.write_str(zone_of(dt)?.abbreviation())?,
                Field::Dst => w.write_char(if zone_of(dt)?.is_dst() { '1' } else { '0' })?,
                Field::Offset => write_offset(&mut w, zone_of(dt)?.offset(), false)?,
                Field::OffsetColon => write_offset(&mut w, zone_of(dt)?.offset(), true)?,
                Field::OffsetSeconds => write_i64(&mut w, zone_of(dt)?.offset() as i64)?,
                Field::Iso8601 => {
                    let zone = zone_of(dt)?;
                    write_ymd(&mut w, &date)?;
                    w.write_char('T')?;
                    write_hms(&mut w, &date)?;
                    write_offset(&mut w, zone.offset(), true)?;
                }
                Field::Rfc2822 => {
                    let zone = zone_of(dt)?;
                    w.write_str(locale.weekday_abbr(date.weekday()))?;
                    w.write_str(locale.list_separator)?;
                    write_u32(&mut w, date.day(), 1)?;
                    w.write_char(' ')?;
                    w.write_str(locale.month_abbr(date.month()))?;
                    w.write_char(' ')?;
                    write_year(&mut w, date.year())?;
                    w.write_char(' ')?;
                    write_hms(&mut w, &date)?;
                    w.write_char(' ')?;
                    write_offset(&mut w, zone.offset(), false)?;
                }
                Field::UnixSeconds => match dt.timestamp() {
                    Some(ts) => write_i64(&mut w, ts.secs())?,
                    None => return Err(missing_zone()?),
                },
            }
        }

        Ok(())
    }

    /// Parses a `CalendarDate` from given string.
    ///
    /// Only the numeric directives `Y m n d j H G i s` and literals are supported. Missing
    /// components default to the start of their range.
    pub fn parse<S: AsRef<str>>(&self, input: S) -> Result<CalendarDate> {
        let mut s = input.as_ref().as_bytes();

        let mut year = 1;
        let mut month = 1;
        let mut day = 1;
        let mut hour = 0;
        let mut minute = 0;
        let mut second = 0;

        macro_rules! expect_number {
            ($max_len: expr) => {{
                let (n, rem) = parse_number(s, $max_len)?;
                s = rem;
                n
            }};
        }

        for field in self.fields.iter() {
            match *field {
                Field::Literal(start, end) => {
                    let literal = self.literal(start, end).as_bytes();
                    if !s.starts_with(literal) {
                        return Err(Error::ParseError(
                            "literal does not match format string".try_to_string()?,
                        ));
                    }
                    s = &s[literal.len()..];
                }
                Field::Year => year = expect_number!(4) as i32,
                Field::Month | Field::MonthUnpadded => month = expect_number!(2),
                Field::Day | Field::DayUnpadded => day = expect_number!(2),
                Field::Hour24 | Field::Hour24Unpadded => hour = expect_number!(2),
                Field::Minute => minute = expect_number!(2),
                Field::Second => second = expect_number!(2),
                _ => {
                    return Err(Error::ParseError(
                        "date format directive is not supported for parsing".try_to_string()?,
                    ))
                }
            }
        }

        if !s.is_empty() {
            return Err(Error::ParseError(
                "date format picture ends before converting entire input string"
                    .try_to_string()?,
            ));
        }

        CalendarDate::try_from_ymd_hms(year, month, day, hour, minute, second)
    }
}

/// Writer that maps ASCII digits through a locale's digit table.
struct DigitWriter<'a, W: fmt::Write> {
    inner: W,
    locale: &'a Locale,
}

impl<'a, W: fmt::Write> fmt::Write for DigitWriter<'a, W> {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            self.inner.write_char(self.locale.decorate_char(ch))?;
        }
        Ok(())
    }
}

#[inline]
fn zone_of<T: DateTimeFormat + ?Sized>(dt: &T) -> Result<&ZoneContext> {
    match dt.zone_context() {
        Some(zone) => Ok(zone),
        None => Err(missing_zone()?),
    }
}

#[inline]
fn missing_zone() -> Result<Error> {
    Ok(Error::FormatError(
        "time zone directives need a calendar with a zone".try_to_string()?,
    ))
}

#[inline]
fn write_year<W: fmt::Write>(mut w: W, year: i32) -> fmt::Result {
    if year < 0 {
        w.write_char('-')?;
    }
    write_u32(w, year.unsigned_abs(), 4)
}

#[inline]
fn write_ymd<W: fmt::Write>(mut w: W, date: &CalendarDate) -> fmt::Result {
    write_year(&mut w, date.year())?;
    w.write_char('-')?;
    write_u32(&mut w, date.month(), 2)?;
    w.write_char('-')?;
    write_u32(&mut w, date.day(), 2)
}

#[inline]
fn write_hms<W: fmt::Write>(mut w: W, date: &CalendarDate) -> fmt::Result {
    write_u32(&mut w, date.hour(), 2)?;
    w.write_char(':')?;
    write_u32(&mut w, date.minute(), 2)?;
    w.write_char(':')?;
    write_u32(&mut w, date.second(), 2)
}

/// Writes `+hhmm` or `+hh:mm`.
#[inline]
fn write_offset<W: fmt::Write>(mut w: W, offset: i32, colon: bool) -> fmt::Result {
    w.write_char(if offset < 0 { '-' } else { '+' })?;
    let abs = offset.unsigned_abs();
    write_u32(&mut w, abs / 3600, 2)?;
    if colon {
        w.write_char(':')?;
    }
    write_u32(&mut w, abs % 3600 / 60, 2)
}

#[inline]
fn parse_number(input: &[u8], max_len: usize) -> Result<(u32, &[u8])> {
    if input.is_empty() {
        return Err(Error::ParseError(
            "the input is inconsistent with the format".try_to_string()?,
        ));
    }

    let (digits, s) = eat_digits(input, max_len);
    if digits.is_empty() {
        return Err(Error::ParseError(
            "a non-numeric character was found where a numeric was expected".try_to_string()?,
        ));
    }

    let int = digits
        .iter()
        .fold(0, |int, &i| int * 10 + (i - b'0') as u32);

    Ok((int, s))
}

#[inline]
fn eat_digits(s: &[u8], max_len: usize) -> (&[u8], &[u8]) {
    let i = s
        .iter()
        .take(max_len)
        .take_while(|&i| i.is_ascii_digit())
        .count();
    (&s[..i], &s[i..])
}

pub struct LazyFormat<T: DateTimeFormat> {
    fmt: Formatter,
    dt: T,
}

impl<T: DateTimeFormat> LazyFormat<T> {
    /// Binds a formatter to a value. Fails early when the template needs a zone the value
    /// does not carry.
    #[inline]
    pub fn try_new(fmt: Formatter, dt: T) -> Result<Self> {
        if !T::HAS_ZONE && fmt.needs_zone() {
            return Err(missing_zone()?);
        }
        Ok(LazyFormat { fmt, dt })
    }
}

impl<T: DateTimeFormat> fmt::Display for LazyFormat<T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt.format(&self.dt, f).map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate_date(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> CalendarDate {
        CalendarDate::try_from_ymd_hms(year, month, day, hour, minute, second).unwrap()
    }

    fn render(fmt: &str, date: CalendarDate) -> String {
        Formatter::try_new(fmt)
            .unwrap()
            .with_locale(Locale::TRANSLITERATED)
            .format_to_string(&date)
            .unwrap()
    }

    #[test]
    fn test_format_parser() {
        let fmt = "Y-m-d H:i:s";
        let mut parser = FormatParser::new(fmt);
        assert_eq!(parser.next(), Some(Field::Year));
        assert_eq!(parser.next(), Some(Field::Literal(1, 2)));
        assert_eq!(parser.next(), Some(Field::Month));
        assert_eq!(parser.next(), Some(Field::Literal(3, 4)));
        assert_eq!(parser.next(), Some(Field::Day));
        assert_eq!(parser.next(), Some(Field::Literal(5, 6)));
        assert_eq!(parser.next(), Some(Field::Hour24));
        assert_eq!(parser.next(), Some(Field::Literal(7, 8)));
        assert_eq!(parser.next(), Some(Field::Minute));
        assert_eq!(parser.next(), Some(Field::Literal(9, 10)));
        assert_eq!(parser.next(), Some(Field::Second));
        assert_eq!(parser.next(), None);
    }

    #[test]
    fn test_format_parser_literals() {
        let fmt = "\\Y: Y, ۱۲ \\";
        let fields: Vec<Field> = FormatParser::new(fmt).collect();
        assert_eq!(
            fields,
            vec![
                Field::Literal(1, 2),
                Field::Literal(2, 4),
                Field::Year,
                Field::Literal(5, fmt.len() - 1),
                Field::Literal(fmt.len() - 1, fmt.len()),
            ]
        );
        assert_eq!(&fmt[5..fmt.len() - 1], ", ۱۲ ");
    }

    #[test]
    fn test_formatter() {
        assert!(Formatter::try_new("").is_ok());
        assert!(Formatter::try_new("                                 ").is_ok());
        assert_eq!(
            Formatter::try_new("Y-m-d Q").unwrap_err(),
            Error::UnknownDirective('Q')
        );
        assert_eq!(
            Formatter::try_new("x").unwrap_err(),
            Error::UnknownDirective('x')
        );
        assert!(Formatter::try_new(&"d".repeat(MAX_FIELDS)).is_ok());
        assert!(matches!(
            Formatter::try_new(&"d".repeat(MAX_FIELDS + 1)),
            Err(Error::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_date_directives() {
        let date = generate_date(1383, 12, 30, 13, 45, 25);
        let cases = [
            ("d", "30"),
            ("j", "30"),
            ("D", "Yek"),
            ("l", "Yekshanbe"),
            ("N", "2"),
            ("w", "1"),
            ("S", "siom"),
            ("z", "366"),
            ("W", "53"),
            ("F", "Esfand"),
            ("M", "Esf"),
            ("m", "12"),
            ("n", "12"),
            ("t", "30"),
            ("L", "1"),
            ("Y", "1383"),
            ("y", "83"),
            ("a", "pm"),
            ("A", "PM"),
            ("g", "1"),
            ("h", "01"),
            ("G", "13"),
            ("H", "13"),
            ("i", "45"),
            ("s", "25"),
        ];
        for (fmt, expected) in cases.iter() {
            assert_eq!(render(fmt, date), *expected, "directive {}", fmt);
        }
    }

    #[test]
    fn test_padding() {
        let date = generate_date(1402, 1, 5, 3, 4, 5);
        assert_eq!(render("d j n m y g h G H i s", date), "05 5 1 01 02 3 03 3 03 04 05");
        assert_eq!(render("D l L t", date), "Sha Shanbe 0 31");

        let date = generate_date(1402, 1, 5, 0, 0, 0);
        assert_eq!(render("g h a G", date), "12 12 am 0");

        let date = generate_date(5, 7, 1, 12, 0, 0);
        assert_eq!(render("Y y A", date), "0005 05 PM");
    }

    #[test]
    fn test_weekday_directives_across_new_year() {
        let date = generate_date(1403, 12, 30, 0, 0, 0);
        assert_eq!(render("D w N W L t", date), "Pan 5 6 52 0 30");

        let date = generate_date(1404, 1, 1, 0, 0, 0);
        assert_eq!(render("D w N W L t", date), "Adi 6 7 0 1 31");
    }

    #[test]
    fn test_names_are_not_rewritten() {
        let date = generate_date(1383, 12, 30, 13, 45, 25);
        assert_eq!(render("j F Y", date), "30 Esfand 1383");
        assert_eq!(render("l, S \\o\\f F", date), "Yekshanbe, siom of Esfand");

        let fmt = Formatter::try_new("j F").unwrap();
        assert_eq!(fmt.format_to_string(&date).unwrap(), "30 اسفند");
        let date = generate_date(1383, 10, 1, 0, 0, 0);
        assert_eq!(fmt.format_to_string(&date).unwrap(), "1 دی");
    }

    #[test]
    fn test_escapes_and_literals() {
        let date = generate_date(1383, 12, 30, 13, 45, 25);
        assert_eq!(render("\\Y\\e\\a\\r: Y", date), "Year: 1383");
        assert_eq!(render("Y/m/d H:i:s", date), "1383/12/30 13:45:25");
        assert_eq!(render("سال Y", date), "سال 1383");
        assert_eq!(render("Y\\", date), "1383\\");
        assert_eq!(render("\\\\", date), "\\");
    }

    #[test]
    fn test_decoration() {
        let date = generate_date(1383, 12, 30, 13, 45, 25);
        let fmt = Formatter::try_new("Y-m-d H:i").unwrap().decorate(true);
        assert_eq!(fmt.format_to_string(&date).unwrap(), "۱۳۸۳-۱۲-۳۰ ۱۳:۴۵");

        // literal digits are decorated as well
        let fmt = Formatter::try_new("\\1 j").unwrap().decorate(true);
        assert_eq!(fmt.format_to_string(&date).unwrap(), "۱ ۳۰");

        let fmt = Formatter::try_new("Y")
            .unwrap()
            .with_locale(Locale::TRANSLITERATED)
            .decorate(true);
        assert_eq!(fmt.format_to_string(&date).unwrap(), "1383");
    }

    #[test]
    fn test_zone_directives_need_zone() {
        let date = generate_date(1383, 12, 30, 13, 45, 25);
        for fmt in ["e", "T", "I", "O", "P", "Z", "c", "r", "U"].iter() {
            let formatter = Formatter::try_new(fmt).unwrap();
            assert!(formatter.needs_zone());
            assert!(matches!(
                formatter.format_to_string(&date),
                Err(Error::FormatError(_))
            ));
            assert!(matches!(date.format(fmt), Err(Error::FormatError(_))));
        }
        assert!(!Formatter::try_new("Y-m-d").unwrap().needs_zone());
    }

    #[test]
    fn test_lazy_format() {
        let date = generate_date(1383, 12, 30, 13, 45, 25);
        assert_eq!(
            date.format("Y/n/j").unwrap().to_string(),
            "1383/12/30"
        );
    }

    #[test]
    fn test_parse() {
        let fmt = Formatter::try_new("Y/n/j G:i:s").unwrap();
        assert_eq!(
            fmt.parse("1383/12/30 13:45:25").unwrap(),
            generate_date(1383, 12, 30, 13, 45, 25)
        );
        assert_eq!(
            fmt.parse("1402/1/5 3:04:05").unwrap(),
            generate_date(1402, 1, 5, 3, 4, 5)
        );

        assert_eq!(
            Formatter::try_new("Y").unwrap().parse("1400").unwrap(),
            generate_date(1400, 1, 1, 0, 0, 0)
        );

        assert_eq!(fmt.parse("1384/12/30 00:00:00"), Err(Error::InvalidDate));
        assert!(matches!(fmt.parse("1383-12-30 13:45:25"), Err(Error::ParseError(_))));
        assert!(matches!(fmt.parse("1383/12/30 13:45:25 "), Err(Error::ParseError(_))));
        assert!(matches!(fmt.parse("1383/12/"), Err(Error::ParseError(_))));
        assert!(matches!(fmt.parse("1383/xx/30 13:45:25"), Err(Error::ParseError(_))));
        assert!(matches!(
            Formatter::try_new("j F Y").unwrap().parse("30 Esfand 1383"),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn test_format_parse_compatible() {
        let fmt = Formatter::try_new("Y-m-d H:i:s").unwrap();
        for &(y, m, d) in [(1, 1, 1), (1348, 10, 11), (1383, 12, 30), (9999, 12, 29)].iter() {
            let date = generate_date(y, m, d, 23, 59, 59);
            let s = fmt.format_to_string(&date).unwrap();
            assert_eq!(fmt.parse(&s).unwrap(), date);
        }
    }
}

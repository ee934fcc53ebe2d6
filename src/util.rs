//! Utilities

use crate::error::Result;
use std::fmt;

pub trait StrExt {
    fn try_to_string(&self) -> Result<String>;
}

impl StrExt for str {
    #[inline]
    fn try_to_string(&self) -> Result<String> {
        let mut s = String::new();
        s.try_reserve(self.len())?;
        s.push_str(self);
        Ok(s)
    }
}

#[repr(transparent)]
struct StrBuf(String);

impl fmt::Write for StrBuf {
    #[inline]
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0.try_reserve(s.len()).map_err(|_| fmt::Error)?;
        self.0.push_str(s);
        Ok(())
    }
}

#[inline]
pub fn try_format(args: fmt::Arguments<'_>) -> Result<String> {
    use fmt::Write;

    let mut output = StrBuf(String::new());
    output.write_fmt(args)?;
    Ok(output.0)
}

macro_rules! try_format {
    ($($arg:tt)*) => {{
        let res = $crate::util::try_format(format_args!($($arg)*));
        res
    }}
}

/// Writes `value` in decimal, left-padded with zeros to at least `width` digits.
pub fn write_u32<W: fmt::Write>(mut w: W, value: u32, width: usize) -> fmt::Result {
    debug_assert!(width < 11 && width > 0);
    let mut buf: [u8; 10] = [b'0'; 10];
    let mut index = buf.len();

    let mut val = value;
    loop {
        index -= 1;
        buf[index] = (val % 10) as u8 + b'0';
        val /= 10;
        if val == 0 {
            break;
        }
    }

    let len = buf.len() - index;
    for _ in len..width {
        w.write_char('0')?;
    }

    match std::str::from_utf8(&buf[index..]) {
        Ok(s) => w.write_str(s),
        Err(_) => Err(fmt::Error),
    }
}

/// Writes a signed `value`, with a leading `-` when negative.
#[inline]
pub fn write_i64<W: fmt::Write>(mut w: W, value: i64) -> fmt::Result {
    write!(w, "{}", value)
}

use core::fmt::{self, Write};

use crate::error::CastError;
use crate::fmt::Notation;
use crate::{FromChars, Result, ToChars};

/// `fmt::Write` adapter over a borrowed slice that clamps writes to the
/// buffer but keeps counting past its end, so the final position is the
/// required length even under truncation.
pub(crate) struct CountingWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> CountingWriter<'a> {
    #[inline]
    pub(crate) fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes the output requires (may exceed the buffer length).
    #[inline]
    pub(crate) fn required(&self) -> usize {
        self.pos
    }

    /// Append a single byte, bounds-checked, always advancing.
    #[inline]
    pub(crate) fn push(&mut self, byte: u8) {
        if self.pos < self.buf.len() {
            self.buf[self.pos] = byte;
        }
        self.pos += 1;
    }
}

impl Write for CountingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        if self.pos < self.buf.len() {
            let n = bytes.len().min(self.buf.len() - self.pos);
            self.buf[self.pos..self.pos + n].copy_from_slice(&bytes[..n]);
        }
        self.pos += bytes.len();
        Ok(())
    }
}

/// Floating point scalar conversion.
///
/// `write_real` honors the two-pass contract; `precision = None` delegates
/// the precision choice to the shortest-representation default.
pub trait Real: Copy {
    /// Write `self` with the given precision and notation, returning the
    /// required length.
    fn write_real(self, buf: &mut [u8], precision: Option<usize>, notation: Notation) -> usize;

    /// Parse the longest numeric prefix of `buf`.
    fn parse_real(buf: &[u8]) -> Result<(Self, usize)>;
}

/// Length of the numeric prefix: optional sign, then `inf`/`nan` or digits
/// with optional fraction and exponent. Zero if no number starts here.
fn scan_real(buf: &[u8]) -> usize {
    let mut pos = 0;
    if matches!(buf.first(), Some(b'+' | b'-')) {
        pos += 1;
    }
    let rest = &buf[pos..];
    if rest.len() >= 3 && rest[..3].eq_ignore_ascii_case(b"inf") {
        return pos + 3;
    }
    if rest.len() >= 3 && rest[..3].eq_ignore_ascii_case(b"nan") {
        return pos + 3;
    }
    let mut digits = 0;
    while pos < buf.len() && buf[pos].is_ascii_digit() {
        pos += 1;
        digits += 1;
    }
    if pos < buf.len() && buf[pos] == b'.' {
        pos += 1;
        while pos < buf.len() && buf[pos].is_ascii_digit() {
            pos += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return 0;
    }
    // Exponent is only part of the number if at least one digit follows.
    if pos < buf.len() && matches!(buf[pos], b'e' | b'E') {
        let mut end = pos + 1;
        if matches!(buf.get(end), Some(b'+' | b'-')) {
            end += 1;
        }
        let exp_start = end;
        while end < buf.len() && buf[end].is_ascii_digit() {
            end += 1;
        }
        if end > exp_start {
            pos = end;
        }
    }
    pos
}

macro_rules! impl_real {
    ($($ty:ty),+) => {$(
        impl Real for $ty {
            fn write_real(
                self,
                buf: &mut [u8],
                precision: Option<usize>,
                notation: Notation,
            ) -> usize {
                let mut w = CountingWriter::new(buf);
                // CountingWriter never fails.
                let _ = match (notation, precision) {
                    (Notation::Scientific, None) => write!(w, "{:e}", self),
                    (Notation::Scientific, Some(p)) => write!(w, "{:.1$e}", self, p),
                    (_, Some(p)) => write!(w, "{:.1$}", self, p),
                    (_, None) => write!(w, "{}", self),
                };
                w.required()
            }

            fn parse_real(buf: &[u8]) -> Result<(Self, usize)> {
                let n = scan_real(buf);
                if n == 0 {
                    return Err(match buf.first() {
                        Some(_) => CastError::InvalidData {
                            message: "expected number",
                        },
                        None => CastError::UnexpectedEof {
                            needed: 1,
                            available: 0,
                        },
                    });
                }
                let text = core::str::from_utf8(&buf[..n]).map_err(|_| {
                    CastError::InvalidData {
                        message: "expected number",
                    }
                })?;
                let value = text.parse::<$ty>().map_err(|_| CastError::InvalidData {
                    message: "expected number",
                })?;
                Ok((value, n))
            }
        }

        impl ToChars for $ty {
            #[inline]
            fn to_chars(&self, buf: &mut [u8]) -> usize {
                self.write_real(buf, None, Notation::General)
            }
        }

        impl FromChars for $ty {
            #[inline]
            fn from_chars(buf: &[u8]) -> Result<(Self, usize)> {
                Self::parse_real(buf)
            }
        }
    )+};
}

impl_real!(f32, f64);

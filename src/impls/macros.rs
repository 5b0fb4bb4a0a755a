use crate::error::CastError;
use crate::{FromChars, Result, ToChars};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[inline]
fn digit_value(byte: u8, radix: u8) -> Option<u8> {
    let d = match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'z' => byte - b'a' + 10,
        b'A'..=b'Z' => byte - b'A' + 10,
        _ => return None,
    };
    (d < radix).then_some(d)
}

/// Integer scalar conversion: digits to and from a buffer in any radix
/// from 2 to 36.
///
/// `write_radix` follows the two-pass contract: it writes the leading
/// `min(required, buf.len())` digit characters and returns the full
/// required length. A radix outside `2..=36` is a caller error.
pub trait Integer: Copy {
    /// Write `self` in `radix`, returning the required length.
    fn write_radix(self, buf: &mut [u8], radix: u8) -> usize;

    /// Parse an integer in `radix` from a prefix of `buf`.
    ///
    /// Accepts an optional sign for signed types, requires at least one
    /// digit, stops at the first byte that is not a digit of `radix`, and
    /// fails on overflow.
    fn parse_radix(buf: &[u8], radix: u8) -> Result<(Self, usize)>;
}

macro_rules! impl_integer_unsigned {
    ($($ty:ty),+) => {$(
        impl Integer for $ty {
            fn write_radix(self, buf: &mut [u8], radix: u8) -> usize {
                debug_assert!((2..=36).contains(&radix), "radix out of range");
                // Digits accumulate right-to-left in scratch; 128 covers
                // u128 in binary.
                let mut scratch = [0u8; 128];
                let mut v = self;
                let mut n = 0;
                loop {
                    scratch[n] = DIGITS[(v % radix as $ty) as usize];
                    n += 1;
                    v /= radix as $ty;
                    if v == 0 {
                        break;
                    }
                }
                let fit = n.min(buf.len());
                for i in 0..fit {
                    buf[i] = scratch[n - 1 - i];
                }
                n
            }

            fn parse_radix(buf: &[u8], radix: u8) -> Result<(Self, usize)> {
                debug_assert!((2..=36).contains(&radix), "radix out of range");
                let mut pos = 0;
                let mut value: $ty = 0;
                while pos < buf.len() {
                    let Some(d) = digit_value(buf[pos], radix) else {
                        break;
                    };
                    value = value
                        .checked_mul(radix as $ty)
                        .and_then(|v| v.checked_add(d as $ty))
                        .ok_or(CastError::InvalidData {
                            message: "integer overflow",
                        })?;
                    pos += 1;
                }
                if pos == 0 {
                    return Err(match buf.first() {
                        Some(_) => CastError::InvalidData {
                            message: "expected digit",
                        },
                        None => CastError::UnexpectedEof {
                            needed: 1,
                            available: 0,
                        },
                    });
                }
                Ok((value, pos))
            }
        }

        impl ToChars for $ty {
            #[inline]
            fn to_chars(&self, buf: &mut [u8]) -> usize {
                self.write_radix(buf, 10)
            }
        }

        impl FromChars for $ty {
            #[inline]
            fn from_chars(buf: &[u8]) -> Result<(Self, usize)> {
                Self::parse_radix(buf, 10)
            }
        }
    )+};
}

macro_rules! impl_integer_signed {
    ($($ty:ty => $uty:ty),+) => {$(
        impl Integer for $ty {
            fn write_radix(self, buf: &mut [u8], radix: u8) -> usize {
                if self < 0 {
                    if !buf.is_empty() {
                        buf[0] = b'-';
                    }
                    let used = 1usize.min(buf.len());
                    1 + self.unsigned_abs().write_radix(&mut buf[used..], radix)
                } else {
                    (self as $uty).write_radix(buf, radix)
                }
            }

            fn parse_radix(buf: &[u8], radix: u8) -> Result<(Self, usize)> {
                debug_assert!((2..=36).contains(&radix), "radix out of range");
                let (negative, mut pos) = match buf.first() {
                    Some(b'-') => (true, 1),
                    Some(b'+') => (false, 1),
                    _ => (false, 0),
                };
                // Accumulate negated so that MIN parses without overflow.
                let mut value: $ty = 0;
                let start = pos;
                while pos < buf.len() {
                    let Some(d) = digit_value(buf[pos], radix) else {
                        break;
                    };
                    value = value
                        .checked_mul(radix as $ty)
                        .and_then(|v| v.checked_sub(d as $ty))
                        .ok_or(CastError::InvalidData {
                            message: "integer overflow",
                        })?;
                    pos += 1;
                }
                if pos == start {
                    return Err(match buf.get(start) {
                        Some(_) => CastError::InvalidData {
                            message: "expected digit",
                        },
                        None => CastError::UnexpectedEof {
                            needed: start + 1,
                            available: buf.len(),
                        },
                    });
                }
                if !negative {
                    value = value.checked_neg().ok_or(CastError::InvalidData {
                        message: "integer overflow",
                    })?;
                }
                Ok((value, pos))
            }
        }

        impl ToChars for $ty {
            #[inline]
            fn to_chars(&self, buf: &mut [u8]) -> usize {
                self.write_radix(buf, 10)
            }
        }

        impl FromChars for $ty {
            #[inline]
            fn from_chars(buf: &[u8]) -> Result<(Self, usize)> {
                Self::parse_radix(buf, 10)
            }
        }
    )+};
}

impl_integer_unsigned!(u8, u16, u32, u64, u128, usize);
impl_integer_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

//! Formatting-request wrappers.
//!
//! Small value types pairing a scalar with its formatting parameters.
//! They are constructed at the call site, consumed within the same
//! expression, and own nothing. Each constructor returns a tagged request
//! that the serializer dispatches on, so radix and notation selection
//! costs nothing at runtime.

use crate::impls::{Integer, Real};
use crate::{DecodeChars, Result, ToChars};

/// An integer paired with the radix to write it in.
#[derive(Debug, Clone, Copy)]
pub struct IntFmt<T> {
    val: T,
    radix: u8,
}

impl<T: Integer> ToChars for IntFmt<T> {
    #[inline]
    fn to_chars(&self, buf: &mut [u8]) -> usize {
        self.val.write_radix(buf, self.radix)
    }
}

/// Format an integer in an arbitrary radix from 2 to 36.
///
/// Digits above 9 are lowercase. A radix outside `2..=36` is a caller
/// error.
///
/// ```
/// use charcast::{ToChars, as_radix};
///
/// let mut buf = [0u8; 8];
/// let n = as_radix(255u32, 36).to_chars(&mut buf);
/// assert_eq!(&buf[..n], b"73");
/// ```
#[inline]
pub fn as_radix<T: Integer>(val: T, radix: u8) -> IntFmt<T> {
    IntFmt { val, radix }
}

/// Format an integer as hexadecimal.
///
/// ```
/// use charcast::{ToChars, as_hex};
///
/// let mut buf = [0u8; 8];
/// let n = as_hex(255u32).to_chars(&mut buf);
/// assert_eq!(&buf[..n], b"ff");
/// ```
#[inline]
pub fn as_hex<T: Integer>(val: T) -> IntFmt<T> {
    as_radix(val, 16)
}

/// Format an integer as octal.
#[inline]
pub fn as_oct<T: Integer>(val: T) -> IntFmt<T> {
    as_radix(val, 8)
}

/// Format an integer as binary digits.
#[inline]
pub fn as_bin<T: Integer>(val: T) -> IntFmt<T> {
    as_radix(val, 2)
}

/// Read-side counterpart of [`IntFmt`]: parse into a borrowed target in a
/// given radix.
#[derive(Debug)]
pub struct RadixParse<'a, T> {
    dst: &'a mut T,
    radix: u8,
}

/// Parse an integer in `radix` into `dst`.
///
/// ```
/// use charcast::{DecodeChars, from_radix};
///
/// let mut v = 0u32;
/// let consumed = from_radix(&mut v, 16).decode_chars(b"ff!").unwrap();
/// assert_eq!((v, consumed), (255, 2));
/// ```
#[inline]
pub fn from_radix<T: Integer>(dst: &mut T, radix: u8) -> RadixParse<'_, T> {
    RadixParse { dst, radix }
}

impl<T: Integer> DecodeChars for RadixParse<'_, T> {
    fn decode_chars(&mut self, buf: &[u8]) -> Result<usize> {
        let (value, consumed) = T::parse_radix(buf, self.radix)?;
        *self.dst = value;
        Ok(consumed)
    }
}

/// How a floating point value is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Notation {
    /// Shortest form that round-trips (the `Display` default).
    #[default]
    General,
    /// Plain decimal form.
    Fixed,
    /// Exponent form, e.g. `2.5e3`.
    Scientific,
}

/// A float paired with precision and notation.
#[derive(Debug, Clone, Copy)]
pub struct FloatFmt<T> {
    val: T,
    precision: Option<usize>,
    notation: Notation,
}

/// Format a float; defaults to [`Notation::General`] with the conversion
/// layer's own precision choice.
///
/// ```
/// use charcast::{Notation, ToChars, as_real};
///
/// let mut buf = [0u8; 16];
/// let n = as_real(2.5f64).precision(2).to_chars(&mut buf);
/// assert_eq!(&buf[..n], b"2.50");
/// ```
#[inline]
pub fn as_real<T: Real>(val: T) -> FloatFmt<T> {
    FloatFmt {
        val,
        precision: None,
        notation: Notation::General,
    }
}

impl<T> FloatFmt<T> {
    /// Fix the number of fractional digits.
    #[inline]
    #[must_use]
    pub fn precision(mut self, digits: usize) -> Self {
        self.precision = Some(digits);
        self
    }

    /// Select a notation.
    #[inline]
    #[must_use]
    pub fn notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Shorthand for [`Notation::Fixed`].
    #[inline]
    #[must_use]
    pub fn fixed(self) -> Self {
        self.notation(Notation::Fixed)
    }

    /// Shorthand for [`Notation::Scientific`].
    #[inline]
    #[must_use]
    pub fn scientific(self) -> Self {
        self.notation(Notation::Scientific)
    }
}

impl<T: Real> ToChars for FloatFmt<T> {
    #[inline]
    fn to_chars(&self, buf: &mut [u8]) -> usize {
        self.val.write_real(buf, self.precision, self.notation)
    }
}

//! Character serialization traits.

use crate::error::Result;

/// Serialize a value into a caller-provided buffer.
///
/// Writes at most `buf.len()` bytes and returns the number of bytes the
/// complete output requires, which may exceed `buf.len()`. This is the
/// two-pass sizing contract: a first call against an undersized buffer
/// reports the capacity needed, a second call after growing performs the
/// full write. Growth itself never happens here; it belongs to the
/// resizing adapters.
///
/// # Example
///
/// ```
/// use charcast::ToChars;
///
/// let mut buf = [0u8; 8];
/// let n = 12345.to_chars(&mut buf);
/// assert_eq!(n, 5);
/// assert_eq!(&buf[..n], b"12345");
///
/// // Undersized: writes only what fits, still reports 5.
/// let mut small = [0u8; 2];
/// assert_eq!(12345.to_chars(&mut small), 5);
/// assert_eq!(&small, b"12");
/// ```
pub trait ToChars {
    /// Write into `buf`, returning the required length.
    fn to_chars(&self, buf: &mut [u8]) -> usize;

    /// Required length without writing anything.
    #[inline]
    fn chars_len(&self) -> usize {
        self.to_chars(&mut [])
    }
}

impl<T: ToChars + ?Sized> ToChars for &T {
    #[inline]
    fn to_chars(&self, buf: &mut [u8]) -> usize {
        (**self).to_chars(buf)
    }
}

/// Deserialize an owned value from a prefix of the input.
///
/// Returns the value and the exact number of bytes consumed. Parse failure
/// is a [`CastError`](crate::CastError), not a sentinel length.
///
/// # Example
///
/// ```
/// use charcast::FromChars;
///
/// let (value, consumed) = i32::from_chars(b"-42 rest").unwrap();
/// assert_eq!(value, -42);
/// assert_eq!(consumed, 3);
/// ```
pub trait FromChars: Sized {
    /// Parse a prefix of `buf`, returning the value and bytes consumed.
    fn from_chars(buf: &[u8]) -> Result<(Self, usize)>;
}

/// Object-safe read side used by the composition layer.
///
/// Implemented for every [`FromChars`] type by assignment. Wrapper types
/// that decode into a borrowed target (radix parses, raw binary, base64)
/// implement it directly.
pub trait DecodeChars {
    /// Decode a prefix of `buf` into `self`, returning bytes consumed.
    fn decode_chars(&mut self, buf: &[u8]) -> Result<usize>;
}

impl<T: FromChars> DecodeChars for T {
    #[inline]
    fn decode_chars(&mut self, buf: &[u8]) -> Result<usize> {
        let (value, consumed) = T::from_chars(buf)?;
        *self = value;
        Ok(consumed)
    }
}

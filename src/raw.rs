//! Binary pass-through codec.
//!
//! Transfers a value's in-memory representation as opaque bytes, length
//! checked through zerocopy. The transfer is representation dependent:
//! writer and reader must agree on scalar width, endianness, and layout.

use crate::error::CastError;
use crate::{DecodeChars, Result, ToChars};

/// Write-side request: serialize `T`'s raw representation.
#[derive(Debug)]
pub struct Raw<'a, T> {
    val: &'a T,
}

/// Mark a value to be written as raw bytes.
///
/// The write is all-or-nothing: nothing is copied unless the full
/// `size_of::<T>()` bytes fit, but the required length is always reported.
///
/// ```
/// use charcast::{ToChars, raw};
///
/// let value = 0x01020304u32;
/// let mut buf = [0u8; 4];
/// assert_eq!(raw(&value).to_chars(&mut buf), 4);
///
/// // Too small: untouched, still reports 4.
/// let mut small = [0u8; 2];
/// assert_eq!(raw(&value).to_chars(&mut small), 4);
/// assert_eq!(small, [0, 0]);
/// ```
#[inline]
pub fn raw<T: zerocopy::IntoBytes + zerocopy::Immutable>(val: &T) -> Raw<'_, T> {
    Raw { val }
}

impl<T: zerocopy::IntoBytes + zerocopy::Immutable> ToChars for Raw<'_, T> {
    fn to_chars(&self, buf: &mut [u8]) -> usize {
        let bytes = self.val.as_bytes();
        if bytes.len() <= buf.len() {
            buf[..bytes.len()].copy_from_slice(bytes);
        }
        bytes.len()
    }
}

/// Read-side request: overwrite a borrowed target from raw bytes.
#[derive(Debug)]
pub struct RawMut<'a, T> {
    val: &'a mut T,
}

/// Mark a value to be read from raw bytes.
///
/// ```
/// use charcast::{DecodeChars, raw, raw_mut, ToChars};
///
/// let mut buf = [0u8; 4];
/// raw(&0xDEADBEEFu32).to_chars(&mut buf);
///
/// let mut out = 0u32;
/// let consumed = raw_mut(&mut out).decode_chars(&buf).unwrap();
/// assert_eq!((out, consumed), (0xDEADBEEF, 4));
/// ```
#[inline]
pub fn raw_mut<T: zerocopy::FromBytes + zerocopy::KnownLayout>(val: &mut T) -> RawMut<'_, T> {
    RawMut { val }
}

impl<T: zerocopy::FromBytes + zerocopy::KnownLayout> DecodeChars for RawMut<'_, T> {
    fn decode_chars(&mut self, buf: &[u8]) -> Result<usize> {
        let len = core::mem::size_of::<T>();
        if buf.len() < len {
            return Err(CastError::UnexpectedEof {
                needed: len,
                available: buf.len(),
            });
        }
        let value =
            zerocopy::FromBytes::read_from_bytes(&buf[..len]).map_err(|_| CastError::InvalidData {
                message: "zerocopy read failed",
            })?;
        *self.val = value;
        Ok(len)
    }
}

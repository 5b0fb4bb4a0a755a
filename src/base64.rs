//! Base64 codec (RFC 4648 basic alphabet, `=` padding).
//!
//! The encoder follows the crate-wide two-pass contract: per-symbol writes
//! are bounds checked but the position always advances, so the return value
//! is the true required length even when the destination is too small. The
//! decoder does the same on its output side, and reports malformed input
//! (bad length, out-of-alphabet bytes, misplaced padding) as errors rather
//! than assuming valid input.

use crate::error::CastError;
use crate::impls::CountingWriter;
use crate::{DecodeChars, Result, ToChars};

const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

#[inline]
fn symbol_index(byte: u8, offset: usize) -> Result<u32> {
    let idx = match byte {
        b'A'..=b'Z' => byte - b'A',
        b'a'..=b'z' => byte - b'a' + 26,
        b'0'..=b'9' => byte - b'0' + 52,
        b'+' => 62,
        b'/' => 63,
        _ => return Err(CastError::Base64Symbol { byte, offset }),
    };
    Ok(u32::from(idx))
}

#[inline]
fn is_symbol(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'+' | b'/' | b'=')
}

/// Encoded length for `len` raw bytes: `4 * ceil(len / 3)`.
#[inline]
#[must_use]
pub const fn encoded_len(len: usize) -> usize {
    4 * len.div_ceil(3)
}

/// Decoded length for an encoded input, from its length and trailing
/// padding. Fails if the input length is not a multiple of 4.
pub fn decoded_len(src: &[u8]) -> Result<usize> {
    if src.len() % 4 != 0 {
        return Err(CastError::Base64Length { len: src.len() });
    }
    let pad = match src {
        [.., b'=', b'='] => 2,
        [.., b'='] => 1,
        _ => 0,
    };
    Ok(src.len() / 4 * 3 - pad)
}

/// Encode `data` into `buf`, returning the required length.
///
/// Writes only what fits; the return value is [`encoded_len`]`(data.len())`
/// regardless of truncation.
///
/// ```
/// use charcast::base64;
///
/// let mut buf = [0u8; 8];
/// let n = base64::encode(&mut buf, b"foo");
/// assert_eq!(&buf[..n], b"Zm9v");
/// ```
pub fn encode(buf: &mut [u8], data: &[u8]) -> usize {
    let mut w = CountingWriter::new(buf);
    let mut triplets = data.chunks_exact(3);
    for t in &mut triplets {
        let val = u32::from(t[0]) << 16 | u32::from(t[1]) << 8 | u32::from(t[2]);
        w.push(ALPHABET[(val >> 18) as usize & 0x3f]);
        w.push(ALPHABET[(val >> 12) as usize & 0x3f]);
        w.push(ALPHABET[(val >> 6) as usize & 0x3f]);
        w.push(ALPHABET[val as usize & 0x3f]);
    }
    match triplets.remainder() {
        [a] => {
            let val = u32::from(*a) << 16;
            w.push(ALPHABET[(val >> 18) as usize & 0x3f]);
            w.push(ALPHABET[(val >> 12) as usize & 0x3f]);
            w.push(b'=');
            w.push(b'=');
        }
        [a, b] => {
            let val = u32::from(*a) << 16 | u32::from(*b) << 8;
            w.push(ALPHABET[(val >> 18) as usize & 0x3f]);
            w.push(ALPHABET[(val >> 12) as usize & 0x3f]);
            w.push(ALPHABET[(val >> 6) as usize & 0x3f]);
            w.push(b'=');
        }
        _ => {}
    }
    w.required()
}

/// Decode base64 `src` into `buf`, returning the decoded length.
///
/// The input length must be a multiple of 4 and padding may only appear at
/// the tail of the final quartet; violations are reported as errors. Output
/// writes are bounds checked with the position always advancing, so the
/// return value is the full decoded length even when `buf` is too small.
///
/// ```
/// use charcast::base64;
///
/// let mut buf = [0u8; 8];
/// let n = base64::decode(&mut buf, b"Zm9vYg==").unwrap();
/// assert_eq!(&buf[..n], b"foob");
/// ```
pub fn decode(buf: &mut [u8], src: &[u8]) -> Result<usize> {
    if src.len() % 4 != 0 {
        return Err(CastError::Base64Length { len: src.len() });
    }
    let mut w = CountingWriter::new(buf);
    let quartets = src.len() / 4;
    for qi in 0..quartets {
        let offset = qi * 4;
        let q = &src[offset..offset + 4];
        let pad = if q[2] == b'=' {
            2
        } else if q[3] == b'=' {
            1
        } else {
            0
        };
        if pad > 0 {
            if qi + 1 != quartets {
                return Err(CastError::InvalidData {
                    message: "base64 padding before final quartet",
                });
            }
            if pad == 2 && q[3] != b'=' {
                return Err(CastError::InvalidData {
                    message: "malformed base64 padding",
                });
            }
        }
        let mut val = 0u32;
        for (i, &sym) in q.iter().take(4 - pad).enumerate() {
            val |= symbol_index(sym, offset + i)? << (6 * (3 - i));
        }
        w.push((val >> 16) as u8);
        if pad < 2 {
            w.push((val >> 8) as u8);
        }
        if pad < 1 {
            w.push(val as u8);
        }
    }
    Ok(w.required())
}

/// Write-side request: serialize bytes as base64 text.
#[derive(Debug, Clone, Copy)]
pub struct Base64<'a> {
    data: &'a [u8],
}

/// Mark bytes to be written in base64.
///
/// ```
/// use charcast::{ToChars, as_base64};
///
/// let mut buf = [0u8; 8];
/// let n = as_base64(b"hi").to_chars(&mut buf);
/// assert_eq!(&buf[..n], b"aGk=");
/// ```
#[inline]
pub fn as_base64<B: AsRef<[u8]> + ?Sized>(data: &B) -> Base64<'_> {
    Base64 {
        data: data.as_ref(),
    }
}

impl ToChars for Base64<'_> {
    #[inline]
    fn to_chars(&self, buf: &mut [u8]) -> usize {
        encode(buf, self.data)
    }
}

/// Read-side request: decode base64 text into a borrowed byte slice.
///
/// Consumes the longest leading run of base64 symbols from the input, so it
/// composes with [`uncat`](crate::uncat)-style operations where further
/// arguments follow the encoded block.
#[derive(Debug)]
pub struct Base64Mut<'a> {
    dst: &'a mut [u8],
    written: usize,
}

/// Mark a byte slice as the target of a base64 decode.
///
/// ```
/// use charcast::{DecodeChars, from_base64};
///
/// let mut out = [0u8; 4];
/// let mut req = from_base64(&mut out);
/// let consumed = req.decode_chars(b"Zm9vYg==;tail").unwrap();
/// assert_eq!((consumed, req.written()), (8, 4));
/// assert_eq!(&out, b"foob");
/// ```
#[inline]
pub fn from_base64(dst: &mut [u8]) -> Base64Mut<'_> {
    Base64Mut { dst, written: 0 }
}

impl Base64Mut<'_> {
    /// Bytes produced by the last successful decode.
    #[inline]
    #[must_use]
    pub fn written(&self) -> usize {
        self.written
    }
}

impl DecodeChars for Base64Mut<'_> {
    fn decode_chars(&mut self, buf: &[u8]) -> Result<usize> {
        let take = buf
            .iter()
            .position(|&b| !is_symbol(b))
            .unwrap_or(buf.len());
        if take % 4 != 0 {
            return Err(CastError::Base64Length { len: take });
        }
        let needed = decode(self.dst, &buf[..take])?;
        if needed > self.dst.len() {
            return Err(CastError::UnexpectedEof {
                needed,
                available: self.dst.len(),
            });
        }
        self.written = needed;
        Ok(take)
    }
}

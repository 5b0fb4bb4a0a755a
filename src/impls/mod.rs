mod macros;
mod real;

#[cfg(feature = "alloc")]
mod alloc;

pub use macros::Integer;
pub use real::Real;

pub(crate) use real::CountingWriter;

use crate::error::CastError;
use crate::{FromChars, Result, ToChars};

impl ToChars for str {
    #[inline]
    fn to_chars(&self, buf: &mut [u8]) -> usize {
        let bytes = self.as_bytes();
        let n = bytes.len().min(buf.len());
        buf[..n].copy_from_slice(&bytes[..n]);
        bytes.len()
    }
}

impl ToChars for char {
    #[inline]
    fn to_chars(&self, buf: &mut [u8]) -> usize {
        let mut scratch = [0u8; 4];
        self.encode_utf8(&mut scratch).to_chars(buf)
    }
}

impl FromChars for char {
    fn from_chars(buf: &[u8]) -> Result<(Self, usize)> {
        if buf.is_empty() {
            return Err(CastError::UnexpectedEof {
                needed: 1,
                available: 0,
            });
        }
        // At most one UTF-8 scalar is needed; an error past valid_up_to()
        // only means the prefix ends mid-character.
        let take = buf.len().min(4);
        let valid = match core::str::from_utf8(&buf[..take]) {
            Ok(s) => s,
            Err(e) if e.valid_up_to() > 0 => {
                core::str::from_utf8(&buf[..e.valid_up_to()]).map_err(|_| {
                    CastError::InvalidData {
                        message: "invalid UTF-8",
                    }
                })?
            }
            Err(_) => {
                return Err(CastError::InvalidData {
                    message: "invalid UTF-8",
                });
            }
        };
        match valid.chars().next() {
            Some(c) => Ok((c, c.len_utf8())),
            None => Err(CastError::InvalidData {
                message: "invalid UTF-8",
            }),
        }
    }
}

// bool writes as "1"/"0", reads those plus the spelled-out forms.
impl ToChars for bool {
    #[inline]
    fn to_chars(&self, buf: &mut [u8]) -> usize {
        if *self { "1" } else { "0" }.to_chars(buf)
    }
}

impl FromChars for bool {
    fn from_chars(buf: &[u8]) -> Result<(Self, usize)> {
        if buf.starts_with(b"true") {
            Ok((true, 4))
        } else if buf.starts_with(b"false") {
            Ok((false, 5))
        } else {
            match buf.first() {
                Some(b'1') => Ok((true, 1)),
                Some(b'0') => Ok((false, 1)),
                Some(_) => Err(CastError::InvalidData {
                    message: "expected bool",
                }),
                None => Err(CastError::UnexpectedEof {
                    needed: 1,
                    available: 0,
                }),
            }
        }
    }
}

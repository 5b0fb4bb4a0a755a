//! Buffer-first text, binary, and base64 formatting with two-pass sizing.
//!
//! Every serializing operation writes into a caller-supplied buffer, never
//! past its end, and returns the number of bytes the full output requires.
//! An undersized buffer is not an error: call once to size, grow, call again.
//!
//! # Concatenation
//!
//! ```
//! use charcast::cat;
//!
//! let mut buf = [0u8; 16];
//! let n = cat!(&mut buf[..], "x = ", 42);
//! assert_eq!(&buf[..n], b"x = 42");
//!
//! // An empty buffer still reports the required length.
//! let needed = cat!(&mut [][..], "x = ", 42);
//! assert_eq!(needed, 6);
//! ```
//!
//! # Template interpolation
//!
//! ```
//! use charcast::fmt;
//!
//! let mut buf = [0u8; 32];
//! let n = fmt!(&mut buf[..], "the {} drank {} {}", "partier", 5, "beers");
//! assert_eq!(&buf[..n], b"the partier drank 5 beers");
//! ```
//!
//! # Reading back
//!
//! ```
//! use charcast::unfmt;
//!
//! let (mut x, mut y) = (0i32, 0i32);
//! let consumed = unfmt!(b"x=10,y=20", "x={},y={}", x, y).unwrap();
//! assert_eq!((x, y), (10, 20));
//! assert_eq!(consumed, 9);
//! ```

#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod base64;
mod compose;
mod error;
mod fmt;
mod impls;
mod raw;
mod traits;

#[cfg(feature = "alloc")]
mod grow;

pub use base64::{Base64, Base64Mut, as_base64, from_base64};
pub use compose::{
    cat, cat_sub, catsep, catsep_sub, format, format_sub, uncat, uncatsep, unformat,
};
pub use error::{CastError, Result};
pub use fmt::{
    FloatFmt, IntFmt, Notation, RadixParse, as_bin, as_hex, as_oct, as_radix, as_real, from_radix,
};
pub use impls::{Integer, Real};
pub use raw::{Raw, RawMut, raw, raw_mut};
pub use traits::{DecodeChars, FromChars, ToChars};

#[cfg(feature = "alloc")]
pub use grow::{
    CharStore, catrs, catrs_append, catseprs, catseprs_append, formatrs, formatrs_append,
};

#[cfg(test)]
mod tests;

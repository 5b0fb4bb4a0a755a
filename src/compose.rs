//! Concatenation, separator-delimited concatenation, and template
//! interpolation, with their read-side inverses.
//!
//! Arguments are serialized in turn into successive sub-ranges of the
//! destination. After each argument the cursor advances by the argument's
//! *required* length, clamped to the buffer end when slicing, so truncation
//! never corrupts memory and never stops length accounting: the sum of
//! required lengths is always returned.

use crate::{DecodeChars, Result, ToChars};

/// Sub-slice starting at the cursor, clamped to the buffer end.
#[inline]
fn tail(buf: &mut [u8], cursor: usize) -> &mut [u8] {
    let at = cursor.min(buf.len());
    &mut buf[at..]
}

#[inline]
fn tail_ro(buf: &[u8], cursor: usize) -> &[u8] {
    let at = cursor.min(buf.len());
    &buf[at..]
}

/// Concatenate `args` into `buf`, returning the required length.
///
/// See [`cat!`](crate::cat) for the variadic form and
/// [`catrs`](crate::catrs) for the container-resizing form.
///
/// ```
/// use charcast::{ToChars, cat};
///
/// let mut buf = [0u8; 8];
/// let n = cat(&mut buf, &[&"a", &1, &"b"]);
/// assert_eq!((n, &buf[..n]), (3, &b"a1b"[..]));
/// ```
pub fn cat(buf: &mut [u8], args: &[&dyn ToChars]) -> usize {
    let mut required = 0;
    for arg in args {
        required += arg.to_chars(tail(buf, required));
    }
    required
}

/// Like [`cat`], returning the written prefix instead of a size.
pub fn cat_sub<'a>(buf: &'a mut [u8], args: &[&dyn ToChars]) -> &'a [u8] {
    let n = cat(buf, args).min(buf.len());
    &buf[..n]
}

/// Concatenate `args` into `buf` with `sep` between consecutive arguments
/// (not before the first, not after the last), returning the required
/// length.
///
/// ```
/// use charcast::catsep;
///
/// let mut buf = [0u8; 8];
/// let n = catsep(&mut buf, &',', &[&1, &2, &3]);
/// assert_eq!(&buf[..n], b"1,2,3");
/// ```
pub fn catsep(buf: &mut [u8], sep: &dyn ToChars, args: &[&dyn ToChars]) -> usize {
    let mut required = 0;
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            required += sep.to_chars(tail(buf, required));
        }
        required += arg.to_chars(tail(buf, required));
    }
    required
}

/// Like [`catsep`], returning the written prefix instead of a size.
pub fn catsep_sub<'a>(buf: &'a mut [u8], sep: &dyn ToChars, args: &[&dyn ToChars]) -> &'a [u8] {
    let n = catsep(buf, sep, args).min(buf.len());
    &buf[..n]
}

/// Interpolate `args` into the `{}` placeholders of `template`, returning
/// the required length.
///
/// Literal template text is copied verbatim. Arguments beyond the last
/// placeholder are silently ignored; once arguments run out, the remaining
/// template (any leftover `{}` included) is copied verbatim.
///
/// ```
/// use charcast::format;
///
/// let mut buf = [0u8; 32];
/// let n = format(&mut buf, "{} + {} = {}", &[&1, &2, &3]);
/// assert_eq!(&buf[..n], b"1 + 2 = 3");
/// ```
pub fn format(buf: &mut [u8], template: &str, args: &[&dyn ToChars]) -> usize {
    let mut required = 0;
    let mut rest = template;
    let mut args = args.iter();
    while let Some(pos) = rest.find("{}") {
        let Some(arg) = args.next() else {
            break;
        };
        required += rest[..pos].to_chars(tail(buf, required));
        required += arg.to_chars(tail(buf, required));
        rest = &rest[pos + 2..];
    }
    required += rest.to_chars(tail(buf, required));
    required
}

/// Like [`format`], returning the written prefix instead of a size.
pub fn format_sub<'a>(buf: &'a mut [u8], template: &str, args: &[&dyn ToChars]) -> &'a [u8] {
    let n = format(buf, template, args).min(buf.len());
    &buf[..n]
}

/// Inverse of [`cat`]: deserialize each target from successive prefixes of
/// `buf`, returning the total bytes consumed.
///
/// Fails fast: the first failing target aborts the remaining ones, which
/// are left untouched.
pub fn uncat(buf: &[u8], args: &mut [&mut dyn DecodeChars]) -> Result<usize> {
    let mut consumed = 0;
    for arg in args.iter_mut() {
        consumed += arg.decode_chars(tail_ro(buf, consumed))?;
    }
    Ok(consumed)
}

/// Inverse of [`catsep`]: like [`uncat`], but a separator value is decoded
/// (and its bytes consumed) between consecutive targets.
pub fn uncatsep(
    buf: &[u8],
    sep: &mut dyn DecodeChars,
    args: &mut [&mut dyn DecodeChars],
) -> Result<usize> {
    let mut consumed = 0;
    for (i, arg) in args.iter_mut().enumerate() {
        if i > 0 {
            consumed += sep.decode_chars(tail_ro(buf, consumed))?;
        }
        consumed += arg.decode_chars(tail_ro(buf, consumed))?;
    }
    Ok(consumed)
}

/// Inverse of [`format`]: decode one target per `{}` placeholder.
///
/// Literal template segments are skipped by *length only* — their content
/// is not verified against the input. Trailing literal text after the last
/// consumed placeholder is not counted in the returned total.
pub fn unformat(buf: &[u8], template: &str, args: &mut [&mut dyn DecodeChars]) -> Result<usize> {
    let mut consumed = 0;
    let mut rest = template;
    let mut args = args.iter_mut();
    while let Some(pos) = rest.find("{}") {
        let Some(arg) = args.next() else {
            break;
        };
        consumed += pos;
        consumed += arg.decode_chars(tail_ro(buf, consumed))?;
        rest = &rest[pos + 2..];
    }
    Ok(consumed)
}

/// Variadic form of [`cat()`](crate::cat()).
///
/// ```
/// use charcast::cat;
///
/// let mut buf = [0u8; 8];
/// let n = cat!(&mut buf[..], "a", 1, "b");
/// assert_eq!(&buf[..n], b"a1b");
/// ```
#[macro_export]
macro_rules! cat {
    ($buf:expr $(, $arg:expr)* $(,)?) => {
        $crate::cat($buf, &[$(&$arg as &dyn $crate::ToChars),*])
    };
}

/// Variadic form of [`catsep()`](crate::catsep()).
///
/// ```
/// use charcast::catsep;
///
/// let mut buf = [0u8; 8];
/// let n = catsep!(&mut buf[..], ',', 1, 2, 3);
/// assert_eq!(&buf[..n], b"1,2,3");
/// ```
#[macro_export]
macro_rules! catsep {
    ($buf:expr, $sep:expr $(, $arg:expr)* $(,)?) => {
        $crate::catsep($buf, &$sep, &[$(&$arg as &dyn $crate::ToChars),*])
    };
}

/// Variadic form of [`format()`](crate::format()).
///
/// ```
/// use charcast::fmt;
///
/// let mut buf = [0u8; 16];
/// let n = fmt!(&mut buf[..], "{}-{}", 1, 2);
/// assert_eq!(&buf[..n], b"1-2");
/// ```
#[macro_export]
macro_rules! fmt {
    ($buf:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::format($buf, $template, &[$(&$arg as &dyn $crate::ToChars),*])
    };
}

/// Variadic form of [`uncat()`](crate::uncat()).
///
/// ```
/// use charcast::uncat;
///
/// let (mut a, mut b) = (0i32, ' ');
/// let consumed = uncat!(b"42!", a, b).unwrap();
/// assert_eq!((a, b, consumed), (42, '!', 3));
/// ```
#[macro_export]
macro_rules! uncat {
    ($buf:expr $(, $arg:expr)* $(,)?) => {
        $crate::uncat($buf, &mut [$(&mut $arg as &mut dyn $crate::DecodeChars),*])
    };
}

/// Variadic form of [`uncatsep()`](crate::uncatsep()).
///
/// ```
/// use charcast::uncatsep;
///
/// let mut sep = ' ';
/// let (mut a, mut b) = (0i32, 0i32);
/// let consumed = uncatsep!(b"1,2", sep, a, b).unwrap();
/// assert_eq!((a, b, consumed), (1, 2, 3));
/// ```
#[macro_export]
macro_rules! uncatsep {
    ($buf:expr, $sep:expr $(, $arg:expr)* $(,)?) => {
        $crate::uncatsep(
            $buf,
            &mut $sep,
            &mut [$(&mut $arg as &mut dyn $crate::DecodeChars),*],
        )
    };
}

/// Variadic form of [`unformat()`](crate::unformat()).
///
/// ```
/// use charcast::unfmt;
///
/// let (mut x, mut y) = (0i32, 0i32);
/// let consumed = unfmt!(b"x=10,y=20", "x={},y={}", x, y).unwrap();
/// assert_eq!((x, y, consumed), (10, 20, 9));
/// ```
#[macro_export]
macro_rules! unfmt {
    ($buf:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::unformat(
            $buf,
            $template,
            &mut [$(&mut $arg as &mut dyn $crate::DecodeChars),*],
        )
    };
}

//! Container-resizing adapters over the composition layer.
//!
//! Each adapter runs the two-call sizing protocol: view the backing store,
//! run the composition operation, resize the store to the reported
//! requirement, and re-run only if the first pass was truncated. A second
//! pass that still disagrees with the first (a misbehaving formatter)
//! triggers one final corrective resize.
//!
//! The adapters assume exclusive access to the container for the duration
//! of the call, which `&mut` already guarantees.

use alloc::vec::Vec;
use core::ops::Range;

use crate::{ToChars, cat, catsep, format};

/// Growable byte store the adapters can project as a buffer.
///
/// All three projections are zero-copy views of the same backing memory.
pub trait CharStore {
    /// Current logical size in bytes.
    fn size(&self) -> usize;
    /// Grow or shrink to exactly `new_len` bytes.
    fn resize(&mut self, new_len: usize);
    /// Immutable view of the backing memory.
    fn view(&self) -> &[u8];
    /// Mutable view of the backing memory.
    fn view_mut(&mut self) -> &mut [u8];
}

impl CharStore for Vec<u8> {
    #[inline]
    fn size(&self) -> usize {
        self.len()
    }

    #[inline]
    fn resize(&mut self, new_len: usize) {
        Vec::resize(self, new_len, 0);
    }

    #[inline]
    fn view(&self) -> &[u8] {
        self
    }

    #[inline]
    fn view_mut(&mut self) -> &mut [u8] {
        self
    }
}

/// Two-call sizing protocol from `start` onward. Returns the range the
/// operation finally occupies.
fn run_two_pass<C, F>(cont: &mut C, start: usize, mut op: F) -> Range<usize>
where
    C: CharStore + ?Sized,
    F: FnMut(&mut [u8]) -> usize,
{
    let available = cont.size() - start;
    let required = op(&mut cont.view_mut()[start..]);
    cont.resize(start + required);
    if required > available {
        let actual = op(&mut cont.view_mut()[start..]);
        if actual != required {
            cont.resize(start + actual);
            return start..start + actual;
        }
    }
    start..start + required
}

/// Like [`cat`], but resizes `cont` to fit and overwrites it.
///
/// ```
/// use charcast::catrs;
///
/// let mut cont: Vec<u8> = Vec::new();
/// catrs!(&mut cont, 12345);
/// assert_eq!(cont, b"12345");
/// ```
pub fn catrs<C: CharStore + ?Sized>(cont: &mut C, args: &[&dyn ToChars]) {
    run_two_pass(cont, 0, |buf| cat(buf, args));
}

/// Like [`cat`], but appends to `cont`, resizing as needed.
///
/// Returns the newly appended region.
///
/// ```
/// use charcast::catrs_append;
///
/// let mut cont: Vec<u8> = Vec::new();
/// catrs_append!(&mut cont, "ab");
/// let new = catrs_append!(&mut cont, "cd");
/// assert_eq!(new, b"cd");
/// assert_eq!(cont, b"abcd");
/// ```
pub fn catrs_append<'a, C: CharStore + ?Sized>(cont: &'a mut C, args: &[&dyn ToChars]) -> &'a [u8] {
    let range = run_two_pass(cont, cont.size(), |buf| cat(buf, args));
    &cont.view()[range]
}

/// Like [`catsep`], but resizes `cont` to fit and overwrites it.
pub fn catseprs<C: CharStore + ?Sized>(cont: &mut C, sep: &dyn ToChars, args: &[&dyn ToChars]) {
    run_two_pass(cont, 0, |buf| catsep(buf, sep, args));
}

/// Like [`catsep`], but appends to `cont`. Returns the newly appended
/// region.
pub fn catseprs_append<'a, C: CharStore + ?Sized>(
    cont: &'a mut C,
    sep: &dyn ToChars,
    args: &[&dyn ToChars],
) -> &'a [u8] {
    let range = run_two_pass(cont, cont.size(), |buf| catsep(buf, sep, args));
    &cont.view()[range]
}

/// Like [`format`], but resizes `cont` to fit and overwrites it.
///
/// ```
/// use charcast::formatrs;
///
/// let mut cont: Vec<u8> = Vec::new();
/// formatrs!(&mut cont, "{}+{}={}", 1, 2, 3);
/// assert_eq!(cont, b"1+2=3");
/// ```
pub fn formatrs<C: CharStore + ?Sized>(cont: &mut C, template: &str, args: &[&dyn ToChars]) {
    run_two_pass(cont, 0, |buf| format(buf, template, args));
}

/// Like [`format`], but appends to `cont`. Returns the newly appended
/// region.
pub fn formatrs_append<'a, C: CharStore + ?Sized>(
    cont: &'a mut C,
    template: &str,
    args: &[&dyn ToChars],
) -> &'a [u8] {
    let range = run_two_pass(cont, cont.size(), |buf| format(buf, template, args));
    &cont.view()[range]
}

/// Variadic form of [`catrs()`](crate::catrs()).
#[macro_export]
macro_rules! catrs {
    ($cont:expr $(, $arg:expr)* $(,)?) => {
        $crate::catrs($cont, &[$(&$arg as &dyn $crate::ToChars),*])
    };
}

/// Variadic form of [`catrs_append()`](crate::catrs_append()).
#[macro_export]
macro_rules! catrs_append {
    ($cont:expr $(, $arg:expr)* $(,)?) => {
        $crate::catrs_append($cont, &[$(&$arg as &dyn $crate::ToChars),*])
    };
}

/// Variadic form of [`catseprs()`](crate::catseprs()).
#[macro_export]
macro_rules! catseprs {
    ($cont:expr, $sep:expr $(, $arg:expr)* $(,)?) => {
        $crate::catseprs($cont, &$sep, &[$(&$arg as &dyn $crate::ToChars),*])
    };
}

/// Variadic form of [`catseprs_append()`](crate::catseprs_append()).
#[macro_export]
macro_rules! catseprs_append {
    ($cont:expr, $sep:expr $(, $arg:expr)* $(,)?) => {
        $crate::catseprs_append($cont, &$sep, &[$(&$arg as &dyn $crate::ToChars),*])
    };
}

/// Variadic form of [`formatrs()`](crate::formatrs()).
#[macro_export]
macro_rules! formatrs {
    ($cont:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::formatrs($cont, $template, &[$(&$arg as &dyn $crate::ToChars),*])
    };
}

/// Variadic form of [`formatrs_append()`](crate::formatrs_append()).
#[macro_export]
macro_rules! formatrs_append {
    ($cont:expr, $template:expr $(, $arg:expr)* $(,)?) => {
        $crate::formatrs_append($cont, $template, &[$(&$arg as &dyn $crate::ToChars),*])
    };
}

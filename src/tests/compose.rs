use std::vec;
use std::vec::Vec;

use crate::{
    CastError, ToChars, as_hex, as_real, cat, cat_sub, catsep, catsep_sub, fmt, format_sub,
    uncat, uncatsep, unfmt,
};

#[test]
fn cat_concatenates_heterogeneous_arguments() {
    let mut buf = [0u8; 8];
    let n = cat!(&mut buf[..], "a", 1, "b");
    assert_eq!((n, &buf[..n]), (3, &b"a1b"[..]));

    let n = cat!(&mut buf[..], as_hex(255u32), '-', as_real(0.5f64));
    assert_eq!(&buf[..n], b"ff-0.5");
}

#[test]
fn cat_truncation_keeps_accounting() {
    let mut small = [0u8; 2];
    let n = cat!(&mut small[..], "abc", "def");
    assert_eq!((n, &small), (6, b"ab"));

    // Zero-length buffer sizes the whole expression.
    assert_eq!(cat!(&mut [][..], "abc", 12, "def"), 8);
}

#[test]
fn two_pass_output_matches_one_shot() {
    let args: &[&dyn ToChars] = &[&"x = ", &-42, &", y = ", &as_hex(48879u32)];

    let mut one_shot = [0u8; 32];
    let needed = cat(&mut one_shot, args);

    // First pass truncated, second pass against a right-sized buffer.
    let mut grown = vec![0u8; 3];
    assert_eq!(cat(&mut grown, args), needed);
    grown.resize(needed, 0);
    assert_eq!(cat(&mut grown, args), needed);
    assert_eq!(&grown[..], &one_shot[..needed]);
}

#[test]
fn catsep_separates_consecutive_arguments_only() {
    let mut buf = [0u8; 16];
    let n = catsep!(&mut buf[..], ',', 1, 2, 3);
    assert_eq!((n, &buf[..n]), (5, &b"1,2,3"[..]));

    let n = catsep!(&mut buf[..], ", ", "a", "b");
    assert_eq!(&buf[..n], b"a, b");

    // No separator around a single argument.
    let n = catsep!(&mut buf[..], ',', 7);
    assert_eq!(&buf[..n], b"7");
}

#[test]
fn format_interpolates_placeholders() {
    let mut buf = [0u8; 32];
    let n = fmt!(
        &mut buf[..],
        "the {} drank {} {}",
        "partier",
        5,
        "beers"
    );
    assert_eq!(&buf[..n], b"the partier drank 5 beers");
}

#[test]
fn format_extra_arguments_are_dropped() {
    let mut buf = [0u8; 16];
    let n = fmt!(&mut buf[..], "only {}", 1, 2, 3);
    assert_eq!(&buf[..n], b"only 1");
}

#[test]
fn format_leftover_placeholders_stay_literal() {
    let mut buf = [0u8; 16];
    let n = fmt!(&mut buf[..], "{} {} {}", "x");
    assert_eq!(&buf[..n], b"x {} {}");
}

#[test]
fn format_without_placeholders_copies_template() {
    let mut buf = [0u8; 16];
    let n = fmt!(&mut buf[..], "plain text", 1);
    assert_eq!(&buf[..n], b"plain text");

    let n = fmt!(&mut buf[..], "");
    assert_eq!(n, 0);
}

#[test]
fn format_truncation_keeps_accounting() {
    let mut small = [0u8; 4];
    let n = fmt!(&mut small[..], "{}-{}", 123, 456);
    assert_eq!((n, &small), (7, b"123-"));
}

#[test]
fn sub_variants_return_written_prefix() {
    let mut buf = [0u8; 4];
    assert_eq!(cat_sub(&mut buf, &[&"abcdef"]), b"abcd");

    let mut buf = [0u8; 16];
    assert_eq!(catsep_sub(&mut buf, &',', &[&1, &2]), b"1,2");
    assert_eq!(format_sub(&mut buf, "<{}>", &[&9]), b"<9>");
}

#[test]
fn uncat_consumes_successive_prefixes() {
    let (mut a, mut b) = (0i32, ' ');
    let consumed = uncat!(b"42!", a, b).unwrap();
    assert_eq!((a, b, consumed), (42, '!', 3));
}

#[test]
fn uncat_fails_fast() {
    let (mut a, mut b) = (0i32, 0i32);
    let err = uncat!(b"7x", a, b).unwrap_err();
    assert_eq!(
        err,
        CastError::InvalidData {
            message: "expected digit"
        }
    );
    // The argument before the failure was already populated.
    assert_eq!((a, b), (7, 0));
}

#[test]
fn uncatsep_round_trips_catsep() {
    let mut buf = [0u8; 16];
    let n = catsep!(&mut buf[..], ',', 1, 2, 3);

    let mut sep = ' ';
    let (mut a, mut b, mut c) = (0i32, 0i32, 0i32);
    let consumed = uncatsep!(&buf[..n], sep, a, b, c).unwrap();
    assert_eq!((a, b, c, sep, consumed), (1, 2, 3, ',', n));
}

#[test]
fn uncatsep_fails_fast_mid_sequence() {
    let mut sep = ' ';
    let (mut a, mut b) = (0i32, 0i32);
    assert!(uncatsep!(b"1,x", sep, a, b).is_err());
    assert_eq!((a, b), (1, 0));
}

#[test]
fn unformat_round_trips_format() {
    let mut buf = [0u8; 32];
    let n = fmt!(&mut buf[..], "x={},y={}", 10, 20);

    let (mut x, mut y) = (0i32, 0i32);
    let consumed = unfmt!(&buf[..n], "x={},y={}", x, y).unwrap();
    assert_eq!((x, y, consumed), (10, 20, n));
}

#[test]
fn unformat_skips_literals_without_verifying() {
    // Wrong literal of the same length still parses: segments advance the
    // cursor by length only.
    let mut x = 0i32;
    let consumed = unfmt!(b"X=10", "y={}", x).unwrap();
    assert_eq!((x, consumed), (10, 4));
}

#[test]
fn unformat_trailing_literal_is_not_counted() {
    let mut x = 0i32;
    let consumed = unfmt!(b"[5]", "[{}]", x).unwrap();
    assert_eq!((x, consumed), (5, 2));
}

#[test]
fn unformat_fails_fast() {
    let (mut x, mut y) = (0i32, 0i32);
    assert!(unfmt!(b"x=no,y=2", "x={},y={}", x, y).is_err());
    assert_eq!((x, y), (0, 0));
}

#[test]
fn dyn_slices_work_without_macros() {
    // The macro-free form the macros expand to.
    let mut buf = [0u8; 16];
    let args: Vec<&dyn ToChars> = vec![&1u8, &"+", &2u8];
    let n = cat(&mut buf, &args);
    assert_eq!(&buf[..n], b"1+2");
}

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

use crate::{CastError, DecodeChars, ToChars, cat, raw, raw_mut, uncat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, FromBytes, IntoBytes, Immutable, KnownLayout)]
#[repr(C)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn scalar_round_trip() {
    let mut buf = [0u8; 8];
    let n = raw(&0xDEAD_BEEFu32).to_chars(&mut buf);
    assert_eq!(n, 4);
    assert_eq!(&buf[..n], 0xDEAD_BEEFu32.as_bytes());

    let mut back = 0u32;
    let consumed = raw_mut(&mut back).decode_chars(&buf[..n]).unwrap();
    assert_eq!((back, consumed), (0xDEAD_BEEF, 4));
}

#[test]
fn write_is_all_or_nothing() {
    let mut small = [0u8; 2];
    let n = raw(&0x1122_3344u32).to_chars(&mut small);
    // Required length is reported but nothing was written.
    assert_eq!((n, small), (4, [0, 0]));
}

#[test]
fn short_read_is_an_error() {
    let mut v = 0u64;
    assert_eq!(
        raw_mut(&mut v).decode_chars(&[1, 2, 3]),
        Err(CastError::UnexpectedEof {
            needed: 8,
            available: 3
        })
    );
    assert_eq!(v, 0);
}

#[test]
fn struct_round_trip() {
    let p = Point { x: -3, y: 70_000 };

    let mut buf = [0u8; 8];
    let n = raw(&p).to_chars(&mut buf);
    assert_eq!(n, 8);

    let mut back = Point { x: 0, y: 0 };
    let consumed = raw_mut(&mut back).decode_chars(&buf).unwrap();
    assert_eq!((back, consumed), (p, 8));
}

#[test]
fn wrappers_compose() {
    let mut buf = [0u8; 16];
    let n = cat!(&mut buf[..], "v1:", raw(&0x0102_0304u32));
    assert_eq!(
        &buf[..n],
        [&b"v1:"[..], &0x0102_0304u32.to_ne_bytes()[..]].concat()
    );

    let mut tag = [0u8; 3];
    let mut v = 0u32;
    let consumed = uncat!(&buf[..n], raw_mut(&mut tag), raw_mut(&mut v)).unwrap();
    assert_eq!((&tag, v, consumed), (b"v1:", 0x0102_0304, n));
}

use alloc::string::String;

use crate::ToChars;

impl ToChars for String {
    #[inline]
    fn to_chars(&self, buf: &mut [u8]) -> usize {
        self.as_str().to_chars(buf)
    }
}

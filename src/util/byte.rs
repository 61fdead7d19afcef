/// Extends `u8` by `printable`.
pub trait ByteExt {
    /// Returns the character with the byte as its code point if that character is visible on its own.
    ///
    /// Bytes are interpreted as Latin-1 (the first 256 Unicode scalars).
    /// Control characters (`0x00` to `0x1F` and `0x7F` to `0x9F`), the no-break space (`0xA0`), and the soft hyphen (`0xAD`) have no picture and return `None`.
    fn printable(&self) -> Option<char>;
}

impl ByteExt for u8 {
    fn printable(&self) -> Option<char> {
        match self {
            0x00..=0x1F | 0x7F..=0xA0 | 0xAD => None,
            other => Some(*other as char),
        }
    }
}

//! # Glyph encodings of the standard fonts
//!
//! An encoding maps single-byte character codes to glyph names.
//! Three built-in encodings are provided:
//!
//! - [`win_ansi`]: the Latin text encoding used by most of the standard fonts,
//! - [`symbol`]: the built-in encoding of the Symbol font,
//! - [`zapf_dingbats`]: the built-in encoding of the ZapfDingbats font.
//!
//! Codes need not be contiguous; a code without a glyph is simply absent.
//! Iteration is always in ascending order of codes, independent of the order in which the tables are written down.
//!
//! # Example
//!
//! ```
//! # use corefont::encoding::win_ansi;
//! assert_eq!(win_ansi().get(0x41), Some("A"));
//! assert_eq!(win_ansi().get(0x80), Some("Euro"));
//! assert_eq!(win_ansi().get(0x00), None);
//! ```

mod symbol_table;
mod win_ansi_table;
mod zapf_dingbats_table;

use lazy_static::lazy_static;
use std::collections::BTreeMap;
use std::fmt;

lazy_static! {
    static ref WIN_ANSI: Encoding = Encoding::new("WinAnsi", win_ansi_table::ENTRIES);
    static ref SYMBOL: Encoding = Encoding::new("Symbol", symbol_table::ENTRIES);
    static ref ZAPF_DINGBATS: Encoding =
        Encoding::new("ZapfDingbats", zapf_dingbats_table::ENTRIES);
}

/// The WinAnsi encoding (code page 1252).
pub fn win_ansi() -> &'static Encoding {
    &WIN_ANSI
}

/// The built-in encoding of the Symbol font.
pub fn symbol() -> &'static Encoding {
    &SYMBOL
}

/// The built-in encoding of the ZapfDingbats font.
pub fn zapf_dingbats() -> &'static Encoding {
    &ZAPF_DINGBATS
}

/// Returns all built-in encodings.
pub fn all() -> [&'static Encoding; 3] {
    [&*WIN_ANSI, &*SYMBOL, &*ZAPF_DINGBATS]
}

/// Returns the built-in encoding with the given name, or `None` if there is no such encoding.
///
/// ```
/// # use corefont::encoding::by_name;
/// assert_eq!(by_name("Symbol").map(|x| x.name()), Some("Symbol"));
/// assert!(by_name("MacRoman").is_none());
/// ```
pub fn by_name(name: &str) -> Option<&'static Encoding> {
    all().iter().copied().find(|x| x.name() == name)
}

/// An immutable mapping from character codes to glyph names.
///
/// A `BTreeMap` is used since encodings are serialized in ascending order of codes.
#[derive(PartialEq, Eq)]
pub struct Encoding {
    name: &'static str,
    glyphs: BTreeMap<u8, &'static str>,
}

impl Encoding {
    fn new(name: &'static str, entries: &[(u8, &'static str)]) -> Self {
        let glyphs: BTreeMap<u8, &'static str> = entries.iter().copied().collect();
        debug_assert_eq!(glyphs.len(), entries.len(), "duplicate code in {}", name);

        Encoding { name, glyphs }
    }

    /// The name of the encoding.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the glyph name for a character code, or `None` if the code is not encoded.
    pub fn get(&self, code: u8) -> Option<&'static str> {
        self.glyphs.get(&code).copied()
    }

    /// Returns the lowest character code that maps to the given glyph.
    ///
    /// ```
    /// # use corefont::encoding::zapf_dingbats;
    /// assert_eq!(zapf_dingbats().code_of("a1"), Some(0x21));
    /// ```
    pub fn code_of(&self, glyph: &str) -> Option<u8> {
        self.iter().find(|&(_, name)| name == glyph).map(|(code, _)| code)
    }

    /// Returns an iterator over all `(code, glyph name)` pairs in ascending order of codes.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &'static str)> + '_ {
        self.glyphs.iter().map(|(&code, &name)| (code, name))
    }

    /// The number of encoded codes.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Whether no code is encoded.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl fmt::Debug for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encoding")
            .field("name", &self.name)
            .field("len", &self.glyphs.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_table_sizes() {
        assert_eq!(WIN_ANSI.len(), 216);
        assert_eq!(SYMBOL.len(), 189);
        assert_eq!(ZAPF_DINGBATS.len(), 188);
    }

    #[test]
    fn test_no_duplicate_codes() {
        let tables = [
            win_ansi_table::ENTRIES,
            symbol_table::ENTRIES,
            zapf_dingbats_table::ENTRIES,
        ];

        for entries in tables.iter() {
            assert_eq!(entries.iter().map(|x| x.0).unique().count(), entries.len());
        }
    }

    #[test]
    fn test_iter_ascending() {
        for encoding in all().iter() {
            let codes: Vec<u8> = encoding.iter().map(|(code, _)| code).collect();
            let mut sorted = codes.clone();
            sorted.sort_unstable();
            assert_eq!(codes, sorted, "{} is not ascending", encoding.name());
        }
    }

    #[test]
    fn test_iter_ascending_while_source_is_not() {
        let source: Vec<u8> = win_ansi_table::ENTRIES.iter().map(|x| x.0).collect();
        assert!(source.windows(2).any(|x| x[0] > x[1]));
        assert_eq!(WIN_ANSI.iter().next(), Some((0x20, "space")));
        assert_eq!(WIN_ANSI.iter().last(), Some((0xFF, "ydieresis")));
    }

    #[test]
    fn test_names_not_empty() {
        for encoding in all().iter() {
            assert!(encoding.iter().all(|(_, name)| !name.is_empty()));
        }
    }

    #[test]
    fn test_get() {
        assert_eq!(WIN_ANSI.get(0o040), Some("space"));
        assert_eq!(WIN_ANSI.get(0o200), Some("Euro"));
        assert_eq!(WIN_ANSI.get(0o201), None);
        assert_eq!(SYMBOL.get(0o101), Some("Alpha"));
        assert_eq!(SYMBOL.get(0o240), Some("Euro"));
        assert_eq!(ZAPF_DINGBATS.get(0o376), Some("a191"));
        assert_eq!(ZAPF_DINGBATS.get(0o360), None);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("WinAnsi"), Some(win_ansi()));
        assert_eq!(by_name("ZapfDingbats"), Some(zapf_dingbats()));
        assert_eq!(by_name("winansi"), None);
    }
}

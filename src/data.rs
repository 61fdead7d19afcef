//! The metric data of the standard fonts.

use crate::encoding::Encoding;
use std::collections::BTreeMap;

/// The minimal rectangle enclosing all glyph outlines of a font, in font design units.
#[derive(Debug, PartialEq, Clone, Copy, Default)]
pub struct BoundingBox {
    /// The lower left x coordinate.
    pub x_min: f64,
    /// The lower left y coordinate.
    pub y_min: f64,
    /// The upper right x coordinate.
    pub x_max: f64,
    /// The upper right y coordinate.
    pub y_max: f64,
}

impl BoundingBox {
    /// Creates a bounding box from its lower left and upper right corners.
    pub fn new(x_min: f64, y_min: f64, x_max: f64, y_max: f64) -> Self {
        BoundingBox {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// The four values in the order `x_min`, `y_min`, `x_max`, `y_max`.
    pub fn to_array(self) -> [f64; 4] {
        [self.x_min, self.y_min, self.x_max, self.y_max]
    }
}

/// Maps glyph names to advance widths.
///
/// A `BTreeMap` is used since widths are emitted in ascending order of glyph names.
pub type WidthTable = BTreeMap<String, i32>;

/// The metrics of a single font.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct FontMetrics {
    /// The font bounding box.
    pub bbox: BoundingBox,
    /// The advance widths by glyph name.
    ///
    /// The table may be empty.
    pub widths: WidthTable,
}

impl FontMetrics {
    /// Returns the advance width of a glyph, or `None` if the font has no metrics for the glyph.
    pub fn width(&self, glyph: &str) -> Option<i32> {
        self.widths.get(glyph).copied()
    }

    /// Returns the advance width of the glyph selected by `code` in `encoding`.
    ///
    /// # Example
    ///
    /// ```
    /// # use corefont::data::FontMetrics;
    /// # use corefont::encoding::win_ansi;
    /// let mut metrics = FontMetrics::default();
    /// metrics.widths.insert("space".to_string(), 278);
    /// assert_eq!(metrics.code_width(win_ansi(), b' '), Some(278));
    /// assert_eq!(metrics.code_width(win_ansi(), b'A'), None);
    /// ```
    pub fn code_width(&self, encoding: &Encoding, code: u8) -> Option<i32> {
        encoding.get(code).and_then(|glyph| self.width(glyph))
    }
}

/// Maps font identifiers to font metrics.
///
/// The identifier of a font is the name of its source file without the extension.
pub type Registry = BTreeMap<String, FontMetrics>;

//! # AFM — Adobe Font Metrics
//!
//! Parser for the font-wide bounding box and the per-glyph advance widths of an AFM file.
//!
//! *Specification:*
//! [Adobe Font Metrics File Format Specification, Version 4.1](https://adobe-type-tools.github.io/font-tech-notes/pdfs/5004.AFM_Spec.pdf).
//!
//! AFM is a line-oriented text format.
//! Each line starts with a key followed by whitespace-separated values.
//! Only two sections of a file are relevant for the metrics extracted here:
//!
//! - The header, from which the `FontBBox` entry is read.
//!   All other header entries are skipped.
//! - The character metrics, enclosed by `StartCharMetrics` and `EndCharMetrics`.
//!   Every `C` entry contributes the advance width (`WX`) of one named glyph (`N`).
//!
//! Lines following `EndCharMetrics` (kerning, composites, ...) are not read.
//!
//! # Example
//!
//! ```
//! # use corefont::afm::parse_str;
//! # use corefont::data::BoundingBox;
//! let metrics = parse_str(
//!     "StartFontMetrics 4.1\n\
//!      FontBBox -170 -225 1010 927\n\
//!      StartCharMetrics 1\n\
//!      C 32 ; WX 278 ; N space ; B 0 0 0 0 ;\n\
//!      EndCharMetrics\n",
//! )
//! .unwrap();
//!
//! assert_eq!(metrics.bbox, BoundingBox::new(-170.0, -225.0, 1010.0, 927.0));
//! assert_eq!(metrics.width("space"), Some(278));
//! ```

use crate::data::{BoundingBox, FontMetrics, WidthTable};
use itertools::Itertools;
use std::fmt;
use std::io::{self, BufRead};

/// The key of the font bounding box entry.
const FONT_BBOX_KEY: &str = "FontBBox";
/// The key that opens the character metrics section.
const START_CHAR_METRICS_KEY: &str = "StartCharMetrics";
/// The key of a character metric entry.
const CHAR_METRIC_KEY: &str = "C";
/// The key that closes the character metrics section.
const END_CHAR_METRICS_KEY: &str = "EndCharMetrics";
/// The minimum number of fields of a character metric entry: `C <code> ; WX <width> ; N <name>`.
const CHAR_METRIC_MIN_FIELDS: usize = 8;
/// The field index of the advance width in a character metric entry.
const CHAR_METRIC_WIDTH_INDEX: usize = 4;
/// The field index of the glyph name in a character metric entry.
const CHAR_METRIC_NAME_INDEX: usize = 7;

/// Parses the font metrics of an AFM stream.
///
/// The stream is read up to and including the `EndCharMetrics` line.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading from the stream fails and [`Error::Corrupt`] if the stream does not describe well-formed metrics, including a stream that ends before the character metrics are closed.
pub fn parse<R: BufRead>(mut reader: R) -> Result<FontMetrics, Error> {
    let mut state = State::Header { bbox: None };
    let mut buf: Vec<u8> = Vec::new();
    let mut line: usize = 0;

    loop {
        buf.clear();

        if reader.read_until(b'\n', &mut buf)? == 0 {
            log::debug!("stream ended after {} lines in {}", line, state.name());
            return Err(Error::Corrupt {
                line,
                kind: CorruptKind::UnexpectedEnd,
            });
        }

        line += 1;

        // comments may carry Latin-1 text
        let text = String::from_utf8_lossy(&buf);
        let fields: Vec<&str> = text.split_whitespace().collect();

        state = match state.advance(&fields) {
            Ok(Transition::Continue(next)) => next,
            Ok(Transition::Finish(metrics)) => {
                log::debug!(
                    "read {} char metrics in {} lines",
                    metrics.widths.len(),
                    line
                );
                return Ok(metrics);
            }
            Err(kind) => return Err(Error::Corrupt { line, kind }),
        };
    }
}

/// Parses the font metrics of an AFM string.
///
/// See [`parse`] for details.
pub fn parse_str(text: &str) -> Result<FontMetrics, Error> {
    parse(text.as_bytes())
}

/// The section of an AFM file the parser is in.
enum State {
    /// Before `StartCharMetrics`.
    Header { bbox: Option<BoundingBox> },
    /// Between `StartCharMetrics` and `EndCharMetrics`.
    CharMetrics {
        bbox: BoundingBox,
        widths: WidthTable,
    },
}

/// The result of feeding a line to a [`State`].
enum Transition {
    Continue(State),
    Finish(FontMetrics),
}

impl State {
    fn name(&self) -> &'static str {
        match self {
            State::Header { .. } => "header",
            State::CharMetrics { .. } => "char metrics",
        }
    }

    /// Consumes the whitespace-separated fields of one line.
    fn advance(self, fields: &[&str]) -> Result<Transition, CorruptKind> {
        let key = match fields.first() {
            Some(&key) => key,
            None => return Ok(Transition::Continue(self)),
        };

        let next = match self {
            State::Header { bbox } => match key {
                FONT_BBOX_KEY => State::Header {
                    bbox: Some(parse_bbox(fields)?),
                },
                START_CHAR_METRICS_KEY => {
                    let bbox = bbox.ok_or(CorruptKind::MissingBoundingBox)?;
                    log::debug!("start char metrics, bbox {:?}", bbox.to_array());
                    State::CharMetrics {
                        bbox,
                        widths: WidthTable::new(),
                    }
                }
                _ => State::Header { bbox },
            },
            State::CharMetrics { bbox, mut widths } => match key {
                CHAR_METRIC_KEY => {
                    let (name, width) = parse_char_metric(fields)?;
                    log::trace!("glyph {} width {}", name, width);
                    // a repeated name replaces the earlier width
                    widths.insert(name.to_string(), width);
                    State::CharMetrics { bbox, widths }
                }
                END_CHAR_METRICS_KEY => {
                    return Ok(Transition::Finish(FontMetrics { bbox, widths }));
                }
                _ => State::CharMetrics { bbox, widths },
            },
        };

        Ok(Transition::Continue(next))
    }
}

/// Parses a `FontBBox <x_min> <y_min> <x_max> <y_max>` line.
fn parse_bbox(fields: &[&str]) -> Result<BoundingBox, CorruptKind> {
    let (_, x_min, y_min, x_max, y_max) = fields
        .iter()
        .collect_tuple()
        .ok_or(CorruptKind::MalformedBoundingBox)?;
    let value = |field: &&str| {
        field
            .parse::<f64>()
            .map_err(|_| CorruptKind::InvalidBoundingBoxValue(field.to_string()))
    };

    Ok(BoundingBox::new(
        value(x_min)?,
        value(y_min)?,
        value(x_max)?,
        value(y_max)?,
    ))
}

/// Parses a `C <code> ; WX <width> ; N <name> ...` line into the glyph name and its width.
fn parse_char_metric<'a>(fields: &[&'a str]) -> Result<(&'a str, i32), CorruptKind> {
    if fields.len() < CHAR_METRIC_MIN_FIELDS {
        return Err(CorruptKind::MalformedCharMetric);
    }

    let width_field = fields[CHAR_METRIC_WIDTH_INDEX];
    let width = width_field
        .parse::<i32>()
        .map_err(|_| CorruptKind::InvalidWidth(width_field.to_string()))?;

    Ok((fields[CHAR_METRIC_NAME_INDEX], width))
}

/// An error that may occur when parsing an AFM stream.
#[derive(Debug)]
pub enum Error {
    /// Reading from the stream failed.
    Io(io::Error),
    /// The stream is not a well-formed AFM file.
    Corrupt {
        /// The 1-based number of the offending line, or the number of lines read if the stream ended early.
        line: usize,
        /// The structural violation.
        kind: CorruptKind,
    },
}

impl Error {
    /// Whether the error is caused by the content of the file rather than by reading it.
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::Corrupt { .. })
    }

    /// Returns the structural violation of a corrupt file.
    pub fn corrupt_kind(&self) -> Option<&CorruptKind> {
        match self {
            Error::Corrupt { kind, .. } => Some(kind),
            Error::Io(_) => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(error) => write!(f, "The stream can not be read: {}", error),
            Error::Corrupt { line, kind } => write!(f, "Corrupt AFM file at line {}: {}", line, kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(error) => Some(error),
            Error::Corrupt { .. } => None,
        }
    }
}

/// The ways in which an AFM file can be corrupt.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum CorruptKind {
    /// A `FontBBox` entry does not consist of exactly four values.
    MalformedBoundingBox,
    /// A `FontBBox` value is not a number.
    InvalidBoundingBoxValue(String),
    /// `StartCharMetrics` appears before any `FontBBox` entry.
    MissingBoundingBox,
    /// A `C` entry has fewer than eight fields.
    MalformedCharMetric,
    /// The width of a `C` entry is not an integer.
    InvalidWidth(String),
    /// The stream ended before the character metrics were closed.
    UnexpectedEnd,
}

impl fmt::Display for CorruptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedBoundingBox => write!(f, "The font bounding box must have four values."),
            Self::InvalidBoundingBoxValue(value) => {
                write!(f, "The font bounding box value `{}` is not a number.", value)
            }
            Self::MissingBoundingBox => {
                write!(f, "The char metrics start before the font bounding box.")
            }
            Self::MalformedCharMetric => write!(f, "The char metric has too few fields."),
            Self::InvalidWidth(value) => write!(f, "The width `{}` is not an integer.", value),
            Self::UnexpectedEnd => write!(f, "The file ends before the end of the char metrics."),
        }
    }
}

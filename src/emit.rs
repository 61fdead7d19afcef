//! Rendering of a registry as an embeddable Rust module.
//!
//! [`emit`] renders the encodings and the font metrics as `static` tables.
//! The module is self-contained and is meant to be included with `include!` or checked into a crate that has no access to the metric files.
//!
//! All tables are written in ascending order of their keys: encodings by code, fonts by identifier, widths by glyph name.
//! The output is therefore a pure function of its input; compiling the same directory twice yields identical bytes.
//!
//! [`finish`] delivers the rendered module according to the [`Mode`] of the context.
//!
//! # Example
//!
//! ```
//! # use corefont::afm::parse_str;
//! # use corefont::data::Registry;
//! # use corefont::emit::emit;
//! # use corefont::encoding;
//! let mut registry = Registry::new();
//! registry.insert(
//!     "Helvetica".to_string(),
//!     parse_str("FontBBox -166 -225 1000 931\nStartCharMetrics 0\nEndCharMetrics\n").unwrap(),
//! );
//!
//! let module = emit(&registry, &encoding::all());
//! let text = std::str::from_utf8(&module).unwrap();
//! assert!(text.contains("pub static WIN_ANSI_GLYPH_MAP: &[(u8, &str)] = &["));
//! assert!(text.contains("bbox: [-166.0, -225.0, 1000.0, 931.0],"));
//! ```

use crate::ctx::{Context, Mode};
use crate::data::{FontMetrics, Registry};
use crate::encoding::Encoding;
use crate::util::byte::ByteExt;
use bytes::{Bytes, BytesMut};
use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};

/// The first line of every rendered module.
const HEADER: &str = "// generated by corefont. DO NOT EDIT.\n";

/// The declaration of the font metrics type used by the rendered tables.
const FONT_METRICS_DECLARATION: &str = "\
/// The font bounding box and advance widths of a standard font.
#[derive(Debug)]
pub struct FontMetrics {
    /// The font bounding box: lower left x, lower left y, upper right x, upper right y.
    pub bbox: [f64; 4],
    /// The advance widths in ascending order of glyph names.
    pub widths: &'static [(&'static str, i32)],
}
";

/// Renders the encodings and the registry as a Rust module.
pub fn emit(registry: &Registry, encodings: &[&Encoding]) -> Bytes {
    let mut buf = BytesMut::new();

    // `BytesMut` grows on demand, so formatting into it does not fail
    write_module(&mut buf, registry, encodings).expect("formatting into memory failed");

    log::info!(
        "rendered {} encodings and {} fonts into {} bytes",
        encodings.len(),
        registry.len(),
        buf.len()
    );

    buf.freeze()
}

/// Delivers a rendered module: written to `ctx.output` in [`Mode::Write`], printed to standard output in [`Mode::Print`].
///
/// # Errors
///
/// Returns an error if the output artifact can not be written.
pub fn finish(module: &Bytes, ctx: &Context) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    finish_to(module, ctx, &mut lock)
}

fn finish_to<W: Write>(module: &Bytes, ctx: &Context, out: &mut W) -> io::Result<()> {
    match ctx.mode {
        Mode::Print => {
            out.write_all(module)?;
            out.flush()
        }
        Mode::Write => {
            log::info!(
                "writing {} bytes to {}",
                module.len(),
                ctx.output.display()
            );
            fs::write(&ctx.output, module)
        }
    }
}

fn write_module<W: fmt::Write>(
    w: &mut W,
    registry: &Registry,
    encodings: &[&Encoding],
) -> fmt::Result {
    w.write_str(HEADER)?;

    for encoding in encodings {
        w.write_char('\n')?;
        write_encoding(w, encoding)?;
    }

    w.write_char('\n')?;
    w.write_str(FONT_METRICS_DECLARATION)?;
    w.write_char('\n')?;
    writeln!(
        w,
        "/// The metrics of the standard fonts in ascending order of font names."
    )?;
    writeln!(w, "pub static CORE_FONT_METRICS: &[(&str, FontMetrics)] = &[")?;

    for (font, metrics) in registry {
        write_font_metrics(w, font, metrics)?;
    }

    writeln!(w, "];")
}

fn write_encoding<W: fmt::Write>(w: &mut W, encoding: &Encoding) -> fmt::Result {
    writeln!(
        w,
        "/// The glyph names of the {} encoding in ascending order of codes.",
        encoding.name()
    )?;
    writeln!(
        w,
        "pub static {}_GLYPH_MAP: &[(u8, &str)] = &[",
        constant_name(encoding.name())
    )?;

    for (code, glyph) in encoding.iter() {
        write!(w, "    (0x{:02X}, {:?}), // U+{:04X}", code, glyph, code)?;
        match code.printable() {
            Some(c) => writeln!(w, " {:?}", c)?,
            None => writeln!(w)?,
        }
    }

    writeln!(w, "];")
}

fn write_font_metrics<W: fmt::Write>(
    w: &mut W,
    font: &str,
    metrics: &FontMetrics,
) -> fmt::Result {
    let [x_min, y_min, x_max, y_max] = metrics.bbox.to_array();

    writeln!(w, "    (")?;
    writeln!(w, "        {:?},", font)?;
    writeln!(w, "        FontMetrics {{")?;
    writeln!(
        w,
        "            bbox: [{}, {}, {}, {}],",
        float_literal(x_min),
        float_literal(y_min),
        float_literal(x_max),
        float_literal(y_max)
    )?;

    if metrics.widths.is_empty() {
        writeln!(w, "            widths: &[],")?;
    } else {
        writeln!(w, "            widths: &[")?;
        for (glyph, width) in &metrics.widths {
            writeln!(w, "                ({:?}, {}),", glyph, width)?;
        }
        writeln!(w, "            ],")?;
    }

    writeln!(w, "        }},")?;
    writeln!(w, "    ),")
}

/// Returns a Rust expression for an `f64`, rounded to one decimal digit.
fn float_literal(value: f64) -> String {
    if value.is_nan() {
        "f64::NAN".to_string()
    } else if value.is_infinite() {
        let name = if value > 0.0 {
            "f64::INFINITY"
        } else {
            "f64::NEG_INFINITY"
        };
        name.to_string()
    } else {
        format!("{:.1}", value)
    }
}

/// Converts a camel-case name to an upper snake-case constant name, e.g. `ZapfDingbats` to `ZAPF_DINGBATS`.
fn constant_name(name: &str) -> String {
    let mut constant = String::with_capacity(name.len() + 4);
    let mut previous_lowercase = false;

    for c in name.chars() {
        if c.is_ascii_uppercase() && previous_lowercase {
            constant.push('_');
        }
        previous_lowercase = c.is_ascii_lowercase() || c.is_ascii_digit();
        constant.push(c.to_ascii_uppercase());
    }

    constant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::afm::parse_str;
    use crate::encoding::{self, symbol, win_ansi, zapf_dingbats};

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.insert(
            "Times-Roman".to_string(),
            parse_str(
                "FontBBox -168 -218 1000 898\n\
                 StartCharMetrics 2\n\
                 C 32 ; WX 250 ; N space ; B 0 0 0 0 ;\n\
                 C 65 ; WX 722 ; N A ; B 15 0 706 674 ;\n\
                 EndCharMetrics\n",
            )
            .unwrap(),
        );
        registry.insert(
            "Courier".to_string(),
            parse_str("FontBBox -23 -250 715 805.26\nStartCharMetrics 0\nEndCharMetrics\n")
                .unwrap(),
        );
        registry
    }

    fn emit_text(registry: &Registry, encodings: &[&Encoding]) -> String {
        String::from_utf8(emit(registry, encodings).to_vec()).unwrap()
    }

    #[test]
    fn test_constant_name() {
        assert_eq!(constant_name("WinAnsi"), "WIN_ANSI");
        assert_eq!(constant_name("Symbol"), "SYMBOL");
        assert_eq!(constant_name("ZapfDingbats"), "ZAPF_DINGBATS");
    }

    #[test]
    fn test_float_literal() {
        assert_eq!(float_literal(-170.0), "-170.0");
        assert_eq!(float_literal(927.0), "927.0");
        assert_eq!(float_literal(0.26), "0.3");
        assert_eq!(float_literal(f64::NEG_INFINITY), "f64::NEG_INFINITY");
        assert_eq!(float_literal(f64::NAN), "f64::NAN");
    }

    #[test]
    fn test_emit_encoding_ascending() {
        let text = emit_text(&Registry::new(), &[win_ansi()]);
        let space = text.find("(0x20, \"space\"), // U+0020 ' '").unwrap();
        let a = text.find("(0x41, \"A\"), // U+0041 'A'").unwrap();
        let euro = text.find("(0x80, \"Euro\"), // U+0080\n").unwrap();
        let ydieresis = text.find("(0xFF, \"ydieresis\"), // U+00FF 'ÿ'").unwrap();
        assert!(space < a && a < euro && euro < ydieresis);
        assert!(!text.contains("SYMBOL_GLYPH_MAP"));
    }

    #[test]
    fn test_emit_all_encodings() {
        let text = emit_text(&Registry::new(), &encoding::all());
        assert!(text.starts_with(HEADER));
        assert!(text.contains("pub static WIN_ANSI_GLYPH_MAP: &[(u8, &str)] = &[\n"));
        assert!(text.contains("pub static SYMBOL_GLYPH_MAP: &[(u8, &str)] = &[\n"));
        assert!(text.contains("pub static ZAPF_DINGBATS_GLYPH_MAP: &[(u8, &str)] = &[\n"));
        let entries = text.lines().filter(|x| x.starts_with("    (0x")).count();
        assert_eq!(entries, win_ansi().len() + symbol().len() + zapf_dingbats().len());
    }

    #[test]
    fn test_emit_fonts() {
        let text = emit_text(&registry(), &[]);
        let expected = "\
pub static CORE_FONT_METRICS: &[(&str, FontMetrics)] = &[
    (
        \"Courier\",
        FontMetrics {
            bbox: [-23.0, -250.0, 715.0, 805.3],
            widths: &[],
        },
    ),
    (
        \"Times-Roman\",
        FontMetrics {
            bbox: [-168.0, -218.0, 1000.0, 898.0],
            widths: &[
                (\"A\", 722),
                (\"space\", 250),
            ],
        },
    ),
];
";
        assert!(text.ends_with(expected), "{}", text);
        assert!(text.contains(FONT_METRICS_DECLARATION));
    }

    #[test]
    fn test_emit_escapes_names() {
        let mut registry = Registry::new();
        let mut metrics = FontMetrics::default();
        metrics.widths.insert("quote\"d".to_string(), 1);
        registry.insert("back\\slash".to_string(), metrics);

        let text = emit_text(&registry, &[]);
        assert!(text.contains("\"back\\\\slash\","));
        assert!(text.contains("(\"quote\\\"d\", 1),"));
    }

    #[test]
    fn test_emit_deterministic() {
        let first = emit(&registry(), &encoding::all());
        let second = emit(&registry(), &encoding::all());
        assert_eq!(first, second);
    }

    #[test]
    fn test_finish_print_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::new(Mode::Print);
        ctx.output = dir.path().join("standard.rs");

        let module = emit(&registry(), &[]);
        let mut out: Vec<u8> = Vec::new();
        finish_to(&module, &ctx, &mut out).unwrap();

        assert_eq!(out, module.to_vec());
        assert!(!ctx.output.exists());
    }

    #[test]
    fn test_finish_write() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::new(Mode::Write);
        ctx.output = dir.path().join("standard.rs");

        let module = emit(&registry(), &encoding::all());
        let mut out: Vec<u8> = Vec::new();
        finish_to(&module, &ctx, &mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(fs::read(&ctx.output).unwrap(), module.to_vec());
    }

    #[test]
    fn test_finish_write_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = Context::new(Mode::Write);
        ctx.output = dir.path().join("missing").join("standard.rs");

        let module = emit(&registry(), &[]);
        assert!(finish(&module, &ctx).is_err());
    }
}

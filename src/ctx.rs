//! The context with which a compilation is performed.

use std::path::PathBuf;

/// A context defines customization options.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Context {
    /// The extension of font metric files, without the leading dot.
    ///
    /// Only directory entries whose names end in `.<extension>` are compiled; the comparison is case-sensitive.
    pub extension: String,
    /// What to do with the compiled metric tables.
    pub mode: Mode,
    /// The artifact written in [`Mode::Write`].
    pub output: PathBuf,
}

impl Context {
    /// Creates a context for the given mode with the default extension and output artifact.
    pub fn new(mode: Mode) -> Self {
        Context {
            extension: "afm".to_string(),
            mode,
            output: PathBuf::from("standard.rs"),
        }
    }

    /// Returns the font identifier of a file name, or `None` if the name lacks the metric file extension.
    ///
    /// ```
    /// # use corefont::ctx::Context;
    /// let ctx = Context::default();
    /// assert_eq!(ctx.font_identifier("Times-Roman.afm"), Some("Times-Roman"));
    /// assert_eq!(ctx.font_identifier("Times-Roman.AFM"), None);
    /// assert_eq!(ctx.font_identifier("README"), None);
    /// ```
    pub fn font_identifier<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        file_name
            .strip_suffix(self.extension.as_str())
            .and_then(|x| x.strip_suffix('.'))
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new(Mode::default())
    }
}

/// What to do with the compiled metric tables.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Mode {
    /// Writes the tables to the output artifact.
    Write,
    /// Prints the tables without writing any file.
    ///
    /// This mode is useful to inspect the compiled tables.
    Print,
}

impl Mode {
    /// Returns the mode for the given name, or `None` if the name is invalid.
    pub fn from_name(name: &str) -> Option<Mode> {
        match name {
            "write" => Some(Mode::Write),
            "print" => Some(Mode::Print),
            _ => None,
        }
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Write
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_name() {
        assert_eq!(Mode::from_name("write"), Some(Mode::Write));
        assert_eq!(Mode::from_name("print"), Some(Mode::Print));
        assert_eq!(Mode::from_name("debug"), None);
    }

    #[test]
    fn test_font_identifier_keeps_inner_dots() {
        let ctx = Context::default();
        assert_eq!(ctx.font_identifier("a.b.afm"), Some("a.b"));
        assert_eq!(ctx.font_identifier("afm"), None);
        assert_eq!(ctx.font_identifier("xafm"), None);
        assert_eq!(ctx.font_identifier(".afm"), Some(""));
    }

    #[test]
    fn test_font_identifier_custom_extension() {
        let mut ctx = Context::default();
        ctx.extension = "metrics".to_string();
        assert_eq!(ctx.font_identifier("Symbol.metrics"), Some("Symbol"));
        assert_eq!(ctx.font_identifier("Symbol.afm"), None);
    }
}

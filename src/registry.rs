//! Compilation of a directory of AFM files into a font metrics registry.
//!
//! The entry to this module is the [`build`] function.
//! It parses every metric file of a directory and returns the [`Registry`] of all fonts.
//!
//! Files are processed one at a time in ascending order of their names.
//! The first failure aborts the build; a registry is only returned if every file is well-formed.
//!
//! ```no_run
//! # use corefont::ctx::Context;
//! # use corefont::registry::build;
//! let ctx = Context::default();
//! let registry = build("Core14_AFMs", &ctx)?;
//!
//! for (font, metrics) in &registry {
//!     println!("{}: {} glyphs", font, metrics.widths.len());
//! }
//! # Ok::<(), corefont::registry::Error>(())
//! ```

use crate::afm;
use crate::ctx::Context;
use crate::data::Registry;
use itertools::Itertools;
use std::fmt;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

/// Builds the registry of all metric files in `dir`.
///
/// The identifier of each font is the file name without the extension configured in `ctx`.
/// Entries with other names and entries that are not files are ignored.
///
/// # Errors
///
/// Returns an error if the directory can not be listed, or if any of the metric files can not be read or is corrupt.
/// No registry is returned in that case, even if other files are well-formed.
pub fn build<P: AsRef<Path>>(dir: P, ctx: &Context) -> Result<Registry, Error> {
    let dir = dir.as_ref();
    let files = font_files(dir, ctx)?;

    log::info!("compile {} font metric files in {}", files.len(), dir.display());

    let mut registry = Registry::new();

    for (font, path) in files {
        log::info!("parsing '{}' ...", path.display());

        let file = File::open(&path).map_err(|source| Error::Open {
            path: path.clone(),
            source,
        })?;
        let metrics = afm::parse(BufReader::new(file)).map_err(|source| Error::Parse {
            path: path.clone(),
            source,
        })?;

        log::debug!(
            "font '{}': {} widths, bbox {:?}",
            font,
            metrics.widths.len(),
            metrics.bbox.to_array()
        );

        registry.insert(font, metrics);
    }

    Ok(registry)
}

/// Returns the font identifiers and paths of all metric files in `dir` in ascending order of file names.
///
/// # Errors
///
/// Returns an error if the directory or one of its entries can not be read.
pub fn font_files<P: AsRef<Path>>(
    dir: P,
    ctx: &Context,
) -> Result<Vec<(String, PathBuf)>, Error> {
    let dir = dir.as_ref();
    let list_error = |source| Error::ListDirectory {
        path: dir.to_path_buf(),
        source,
    };
    let mut files: Vec<(String, PathBuf)> = Vec::new();

    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        let path = entry.path();
        let file_name = entry.file_name();

        let name = match file_name.to_str() {
            Some(name) => name,
            None => {
                log::warn!("skipping '{}': name is not valid UTF-8", path.display());
                continue;
            }
        };

        let font = match ctx.font_identifier(name) {
            Some(font) => font.to_string(),
            None => continue,
        };

        // follows symbolic links
        if !fs::metadata(&path).map_err(list_error)?.is_file() {
            log::debug!("skipping '{}': not a file", path.display());
            continue;
        }

        files.push((font, path));
    }

    Ok(files
        .into_iter()
        .sorted_by(|(_, a), (_, b)| a.file_name().cmp(&b.file_name()))
        .collect())
}

/// An error that may occur when building a registry.
#[derive(Debug)]
pub enum Error {
    /// The source directory can not be listed.
    ListDirectory {
        /// The directory.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// A metric file can not be opened.
    Open {
        /// The metric file.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
    /// A metric file can not be read or is corrupt.
    Parse {
        /// The metric file.
        path: PathBuf,
        /// The underlying error.
        source: afm::Error,
    },
}

impl Error {
    /// The path of the directory or file that caused the error.
    pub fn path(&self) -> &Path {
        match self {
            Error::ListDirectory { path, .. }
            | Error::Open { path, .. }
            | Error::Parse { path, .. } => path,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ListDirectory { path, source } => {
                write!(f, "The directory '{}' can not be listed: {}", path.display(), source)
            }
            Error::Open { path, source } => {
                write!(f, "The file '{}' can not be opened: {}", path.display(), source)
            }
            Error::Parse { path, source } => write!(f, "'{}': {}", path.display(), source),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::ListDirectory { source, .. } | Error::Open { source, .. } => Some(source),
            Error::Parse { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::afm::CorruptKind;
    use crate::data::BoundingBox;
    use tempfile::TempDir;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn afm_text(bbox: &str, glyphs: &[(&str, i32)]) -> String {
        let mut text = format!(
            "StartFontMetrics 4.1\nFontBBox {}\nStartCharMetrics {}\n",
            bbox,
            glyphs.len()
        );
        for (code, (name, width)) in glyphs.iter().enumerate() {
            text.push_str(&format!(
                "C {} ; WX {} ; N {} ; B 0 0 0 0 ;\n",
                code, width, name
            ));
        }
        text.push_str("EndCharMetrics\nEndFontMetrics\n");
        text
    }

    fn make_dir(files: &[(&str, String)]) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        for (name, content) in files {
            fs::write(dir.path().join(name), content).unwrap();
        }
        dir
    }

    #[test]
    fn test_build() {
        init();
        let dir = make_dir(&[
            ("Helvetica.afm", afm_text("-166 -225 1000 931", &[("space", 278), ("A", 667)])),
            ("Symbol.afm", afm_text("-180 -293 1090 1010", &[("Alpha", 722)])),
            ("Courier.afm", afm_text("-23 -250 715 805", &[])),
        ]);
        let registry = build(dir.path(), &Context::default()).unwrap();

        assert_eq!(
            registry.keys().collect::<Vec<_>>(),
            ["Courier", "Helvetica", "Symbol"]
        );
        assert_eq!(
            registry["Helvetica"].bbox,
            BoundingBox::new(-166.0, -225.0, 1000.0, 931.0)
        );
        assert_eq!(registry["Helvetica"].width("A"), Some(667));
        assert_eq!(registry["Symbol"].width("Alpha"), Some(722));
        assert!(registry["Courier"].widths.is_empty());
    }

    #[test]
    fn test_build_ignores_other_entries() {
        let dir = make_dir(&[
            ("Times-Roman.afm", afm_text("0 0 1 1", &[("a", 444)])),
            ("README.txt", "not a metric file".to_string()),
            ("Times-Roman.AFM", "not matched: extension is case-sensitive".to_string()),
            ("afm", "no extension".to_string()),
        ]);
        fs::create_dir(dir.path().join("nested.afm")).unwrap();

        let registry = build(dir.path(), &Context::default()).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains_key("Times-Roman"));
    }

    #[test]
    fn test_build_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let registry = build(dir.path(), &Context::default()).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_font_files_sorted() {
        let dir = make_dir(&[
            ("b.afm", String::new()),
            ("a.afm", String::new()),
            ("Z.afm", String::new()),
            ("a-b.afm", String::new()),
        ]);
        let fonts: Vec<String> = font_files(dir.path(), &Context::default())
            .unwrap()
            .into_iter()
            .map(|(font, _)| font)
            .collect();
        // ordered by file name, so `-` sorts before the extension dot
        assert_eq!(fonts, ["Z", "a-b", "a", "b"]);
    }

    #[test]
    fn test_build_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing");
        let error = build(&missing, &Context::default()).unwrap_err();

        assert!(matches!(error, Error::ListDirectory { .. }));
        assert_eq!(error.path(), missing.as_path());
    }

    #[test]
    fn test_build_aborts_on_corrupt_file() {
        init();
        let dir = make_dir(&[
            ("Courier.afm", afm_text("-23 -250 715 805", &[("space", 600)])),
            ("Helvetica.afm", "StartCharMetrics 0\nEndCharMetrics\n".to_string()),
            ("Symbol.afm", afm_text("-180 -293 1090 1010", &[("Alpha", 722)])),
        ]);
        let error = build(dir.path(), &Context::default()).unwrap_err();

        match &error {
            Error::Parse { path, source } => {
                assert_eq!(path.file_name().unwrap(), "Helvetica.afm");
                assert_eq!(source.corrupt_kind(), Some(&CorruptKind::MissingBoundingBox));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        assert!(error.to_string().contains("Helvetica.afm"));
    }

    #[test]
    fn test_build_aborts_on_truncated_file() {
        let dir = make_dir(&[
            ("Courier.afm", afm_text("-23 -250 715 805", &[("space", 600)])),
            ("Times-Bold.afm", "FontBBox 0 0 1 1\nStartCharMetrics 1\n".to_string()),
        ]);
        let error = build(dir.path(), &Context::default()).unwrap_err();

        assert_eq!(error.path().file_name().unwrap(), "Times-Bold.afm");
        assert!(matches!(
            error,
            Error::Parse {
                source: afm::Error::Corrupt {
                    kind: CorruptKind::UnexpectedEnd,
                    ..
                },
                ..
            }
        ));
    }

    #[test]
    fn test_build_deterministic_for_all_creation_orders() {
        let files = vec![
            ("Courier.afm", afm_text("-23 -250 715 805", &[("space", 600), ("a", 600)])),
            ("Helvetica.afm", afm_text("-166 -225 1000 931", &[("space", 278)])),
            ("Symbol.afm", afm_text("-180 -293 1090 1010", &[("Alpha", 722)])),
            ("ZapfDingbats.afm", afm_text("-1 -143 981 820", &[("a1", 974)])),
        ];
        let expected = build(make_dir(&files).path(), &Context::default()).unwrap();

        let mut order: Vec<usize> = (0..files.len()).collect();
        let heap = permutohedron::Heap::new(&mut order);

        for permutation in heap {
            let dir = tempfile::tempdir().unwrap();
            for &i in &permutation {
                let (name, content) = &files[i];
                fs::write(dir.path().join(name), content).unwrap();
            }

            let names: Vec<String> = font_files(dir.path(), &Context::default())
                .unwrap()
                .into_iter()
                .map(|(font, _)| font)
                .collect();
            assert_eq!(names, ["Courier", "Helvetica", "Symbol", "ZapfDingbats"]);
            assert_eq!(build(dir.path(), &Context::default()).unwrap(), expected);
        }
    }
}

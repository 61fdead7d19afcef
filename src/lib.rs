//! # Corefont
//!
//! *Corefont* compiles the metrics of the standard fonts into tables that can be embedded in a document-processing engine.
//!
//! Layout engines need the advance widths of glyphs to measure text, but have no access to the font programs of the standard fonts.
//! Adobe publishes the metrics of these fonts as AFM files.
//! Corefont reads a directory of AFM files and produces a registry of bounding boxes and advance widths keyed by font name, together with the built-in encodings that select glyphs by character code.
//!
//! ## Components
//!
//! - The [AFM parser](crate::afm), reading the metrics of a single font.
//! - The [registry builder](crate::registry), compiling a directory of AFM files.
//! - The [encodings](crate::encoding) WinAnsi, Symbol, and ZapfDingbats.
//! - The [emitter](crate::emit), rendering a registry as a Rust module.
//!
//! # Example
//!
//! ```no_run
//! # use corefont::ctx::Context;
//! # use corefont::{emit, encoding, registry};
//! let ctx = Context::default();
//! let registry = registry::build("Core14_AFMs", &ctx)?;
//! let module = emit::emit(&registry, &encoding::all());
//! emit::finish(&module, &ctx)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![deny(missing_docs, missing_debug_implementations)]

pub mod afm;
pub mod ctx;
pub mod data;
pub mod emit;
pub mod encoding;
pub mod registry;
mod util;

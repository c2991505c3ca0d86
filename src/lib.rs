//! Streaming word wrap.
//!
//! [`WrapWriter`] wraps any [`std::io::Write`] sink and reflows the text
//! written to it so that lines break at word boundaries before they exceed a
//! width counted in code points. Newlines in the input are kept, blank and
//! trailing ones included, and whitespace at the end of a wrapped line is
//! stripped. Memory use is bounded by the longest word, not by the input.
//!
//! ```
//! use std::io::Write;
//!
//! use wordflow::WrapWriter;
//!
//! let mut writer = WrapWriter::new(Vec::new(), 16);
//! writer.set_prefix("> ");
//! writeln!(writer, "streaming text wrapped as it arrives")?;
//! let out = writer.finish()?;
//! assert_eq!(out, b"streaming text\n> wrapped as it\n> arrives\n");
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod error;
mod io;
pub mod options;
pub mod wrap;

pub use crate::{
    error::WrapError,
    io::{rewrite, wrap_bytes, wrap_bytes_with, wrap_reader, wrap_string, wrap_string_with},
    options::{DEFAULT_WIDTH, WrapOptions},
    wrap::{Breakpoints, WrapWriter},
};

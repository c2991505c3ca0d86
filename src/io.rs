//! One-shot helpers and file rewriting built on [`WrapWriter`](crate::WrapWriter).

use std::{
    fs,
    io::{self, Read, Write},
    path::Path,
};

use crate::options::WrapOptions;

/// Wrap `text` at `width` code points in one call.
///
/// # Examples
///
/// ```
/// assert_eq!(wordflow::wrap_string("hello world", 10), "hello\nworld");
/// ```
#[must_use]
pub fn wrap_string(text: &str, width: usize) -> String {
    wrap_string_with(text, &WrapOptions::new(width))
}

/// Wrap `bytes` at `width` code points in one call.
#[must_use]
pub fn wrap_bytes(bytes: &[u8], width: usize) -> Vec<u8> {
    wrap_bytes_with(bytes, &WrapOptions::new(width))
}

/// Wrap `text` with the given options in one call.
#[must_use]
pub fn wrap_string_with(text: &str, opts: &WrapOptions) -> String {
    let out = wrap_bytes_with(text.as_bytes(), opts);
    // Only whole characters are inserted, so valid input stays valid.
    String::from_utf8(out).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}

/// Wrap `bytes` with the given options in one call.
#[must_use]
pub fn wrap_bytes_with(bytes: &[u8], opts: &WrapOptions) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + bytes.len() / opts.width.max(1));
    let mut writer = opts.writer(&mut out);
    // Writes into a `Vec` cannot fail.
    let _ = writer.write_bytes(bytes);
    let _ = writer.finish();
    out
}

/// Stream `reader` through a wrapper into `writer`, returning the bytes read.
///
/// # Errors
/// Returns an error if reading from `reader` or writing to `writer` fails.
pub fn wrap_reader<R: Read, W: Write>(
    reader: &mut R,
    writer: W,
    opts: &WrapOptions,
) -> io::Result<u64> {
    let mut wrapper = opts.writer(writer);
    let copied = io::copy(reader, &mut wrapper)?;
    wrapper.finish()?;
    Ok(copied)
}

/// Rewrite a file in place with its text wrapped.
///
/// # Errors
/// Returns an error if reading or writing the file fails.
pub fn rewrite(path: &Path, opts: &WrapOptions) -> io::Result<()> {
    let text = fs::read(path)?;
    fs::write(path, wrap_bytes_with(&text, opts))
}

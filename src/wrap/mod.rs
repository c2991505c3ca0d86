//! Streaming word wrap over any [`Write`] sink.
//!
//! [`WrapWriter`] decodes its input into code points and runs each one through
//! a small state machine. Only the word being built and the whitespace run
//! before it are buffered; everything else reaches the sink as soon as it is
//! decided. Width is counted in code points, so multi-byte characters occupy
//! one column each.

use std::io::{self, Write};

use tracing::{debug, trace};

use crate::error::WrapError;

mod class;
mod decode;

pub use class::Breakpoints;
use class::CharClass;
use decode::{Unit, Utf8Decoder};

fn cols(n: usize) -> isize { isize::try_from(n).unwrap_or(isize::MAX) }

/// Wraps text written to it at word boundaries so lines stay within `width`
/// code points.
///
/// Newlines in the input are preserved, blank and trailing ones included.
/// Whitespace that would end a line is dropped unless the line still fits.
/// A word longer than the whole width is never split; it overflows on a line
/// of its own.
///
/// The last word of the stream stays buffered until [`WrapWriter::finish`] or
/// [`Write::flush`] is called, or a newline arrives. This is what makes the
/// output independent of how the input is split into writes.
///
/// # Examples
///
/// ```
/// use wordflow::WrapWriter;
///
/// let mut out = Vec::new();
/// let mut writer = WrapWriter::new(&mut out, 10);
/// writer.write_str("hello ")?;
/// writer.write_str("world")?;
/// writer.finish()?;
/// assert_eq!(out, b"hello\nworld");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct WrapWriter<W: Write> {
    inner: W,
    width: usize,
    tab_width: usize,
    position: isize,
    space: Vec<u8>,
    space_len: usize,
    word: Vec<u8>,
    word_len: usize,
    at_line_start: bool,
    prefix: String,
    prefix_len: usize,
    breakpoints: Breakpoints,
    decoder: Utf8Decoder,
}

impl<W: Write> WrapWriter<W> {
    /// Wrap `inner` at `width` code points. A width of zero disables wrapping.
    #[must_use]
    pub fn new(inner: W, width: usize) -> Self {
        Self {
            inner,
            width,
            tab_width: 0,
            position: 0,
            space: Vec::new(),
            space_len: 0,
            word: Vec::new(),
            word_len: 0,
            at_line_start: false,
            prefix: String::new(),
            prefix_len: 0,
            breakpoints: Breakpoints::default(),
            decoder: Utf8Decoder::default(),
        }
    }

    #[must_use]
    pub fn width(&self) -> usize { self.width }

    /// Change the wrap width. Zero switches to pass-through.
    pub fn set_width(&mut self, width: usize) { self.width = width; }

    #[must_use]
    pub fn tab_width(&self) -> usize { self.tab_width }

    /// Expand tabs to spaces aligned on multiples of `width` columns.
    ///
    /// With zero, tabs are kept as ordinary whitespace of one column.
    pub fn set_tab_width(&mut self, width: usize) { self.tab_width = width; }

    #[must_use]
    pub fn prefix(&self) -> &str { &self.prefix }

    /// Write `prefix` at the start of each new line.
    ///
    /// The prefix counts towards the line width. It does not touch the current
    /// line, and by default the first line gets none; see
    /// [`WrapWriter::begin_line`].
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
        self.prefix_len = self.prefix.chars().count();
    }

    /// Treat each character of `breakpoints` as an extra break opportunity.
    ///
    /// A breakpoint ends the current word and is written straight through, so
    /// the line may wrap right after it, as with hyphens in `"well-known"`.
    pub fn set_breakpoints(&mut self, breakpoints: impl Into<Breakpoints>) {
        self.breakpoints = breakpoints.into();
    }

    #[must_use]
    pub fn breakpoints(&self) -> &Breakpoints { &self.breakpoints }

    #[must_use]
    pub fn position(&self) -> isize { self.position }

    /// Seed the column of the current line.
    ///
    /// Use it when the text continues a line that already holds `position`
    /// columns. A negative value lengthens the allowance of the current line.
    pub fn set_position(&mut self, position: isize) { self.position = position; }

    /// Mark the current line as not yet started, so the prefix is written
    /// before its first content.
    pub fn begin_line(&mut self) { self.at_line_start = true; }

    #[must_use]
    pub fn get_ref(&self) -> &W { &self.inner }

    /// Mutable access to the sink. Writing to it directly bypasses the column
    /// tracking.
    pub fn get_mut(&mut self) -> &mut W { &mut self.inner }

    /// Return the sink, discarding any buffered word and whitespace.
    #[must_use]
    pub fn into_inner(self) -> W { self.inner }

    /// Flush the last word and the sink, then return the sink.
    ///
    /// # Errors
    /// Returns the sink's error if writing or flushing fails.
    pub fn finish(mut self) -> io::Result<W> {
        self.flush()?;
        Ok(self.inner)
    }

    /// Reflow `bytes` into the sink.
    ///
    /// Returns the number of bytes consumed, which is all of them unless the
    /// sink fails. An incomplete UTF-8 sequence at the end is held until the
    /// next call; bytes that are not valid UTF-8 pass through as one column
    /// per invalid sequence.
    ///
    /// # Errors
    /// Returns [`WrapError`] when the sink fails. Its
    /// [`consumed`](WrapError::consumed) count includes the character being
    /// processed when the failure happened.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<usize, WrapError> {
        if self.width == 0 {
            return self.pass_through(bytes);
        }
        let mut rest = bytes;
        let mut consumed = 0;
        while !rest.is_empty() {
            let (unit, used) = self.decoder.decode(rest);
            consumed += used;
            rest = &rest[used..];
            let Some(unit) = unit else { break };
            if let Err(err) = self.push_unit(unit) {
                debug!(consumed, error = %err, "sink write failed");
                return Err(WrapError::new(consumed, err));
            }
        }
        Ok(consumed)
    }

    /// # Errors
    /// See [`WrapWriter::write_bytes`].
    pub fn write_str(&mut self, s: &str) -> Result<usize, WrapError> {
        self.write_bytes(s.as_bytes())
    }

    /// # Errors
    /// See [`WrapWriter::write_bytes`].
    pub fn write_byte(&mut self, byte: u8) -> Result<(), WrapError> {
        self.write_bytes(&[byte]).map(drop)
    }

    /// Write one character, returning its encoded length.
    ///
    /// # Errors
    /// See [`WrapWriter::write_bytes`].
    pub fn write_char(&mut self, c: char) -> Result<usize, WrapError> {
        let mut buf = [0; 4];
        self.write_bytes(c.encode_utf8(&mut buf).as_bytes())
    }

    fn pass_through(&mut self, bytes: &[u8]) -> Result<usize, WrapError> {
        self.flush_pending().map_err(|err| WrapError::new(0, err))?;
        let mut written = 0;
        while written < bytes.len() {
            match self.inner.write(&bytes[written..]) {
                Ok(0) => {
                    return Err(WrapError::new(written, io::ErrorKind::WriteZero.into()));
                }
                Ok(n) => written += n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(WrapError::new(written, err)),
            }
        }
        Ok(written)
    }

    /// Commit everything still buffered except trailing whitespace.
    fn flush_pending(&mut self) -> io::Result<()> {
        if let Some(unit) = self.decoder.take_held() {
            self.push_unit(unit)?;
        }
        self.write_word()
    }

    fn push_unit(&mut self, unit: Unit) -> io::Result<()> {
        match unit {
            Unit::Char(c) => match self.breakpoints.classify(c) {
                CharClass::Newline => self.end_line(),
                CharClass::Space => self.push_space(c),
                CharClass::Breakpoint => self.push_breakpoint(c),
                CharClass::Word => {
                    let mut buf = [0; 4];
                    self.push_word(c.encode_utf8(&mut buf).as_bytes())
                }
            },
            Unit::Invalid(raw) => self.push_word(raw.as_bytes()),
        }
    }

    /// Columns taken on the current line once the due prefix is written.
    fn line_columns(&self) -> isize {
        let due = if self.at_line_start { self.prefix_len } else { 0 };
        self.position.saturating_add(cols(due))
    }

    fn end_line(&mut self) -> io::Result<()> {
        if self.word_len == 0 {
            if self.line_columns().saturating_add(cols(self.space_len)) > cols(self.width) {
                self.discard_space();
            } else if self.space_len > 0 {
                self.write_prefix()?;
                self.write_space()?;
            }
        }
        self.write_word()?;
        self.write_newline()
    }

    fn push_space(&mut self, c: char) -> io::Result<()> {
        self.write_word()?;
        if c == '\t' && self.tab_width > 0 {
            let stop = cols(self.tab_width);
            // Stops are measured from the written columns only.
            let fill =
                usize::try_from(stop - self.position.rem_euclid(stop)).unwrap_or(self.tab_width);
            self.space.resize(self.space.len() + fill, b' ');
            self.space_len += fill;
        } else {
            let mut buf = [0; 4];
            self.space.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            self.space_len += 1;
        }
        Ok(())
    }

    fn push_breakpoint(&mut self, c: char) -> io::Result<()> {
        // Whitespace runs are never measured, so a breakpoint after one may
        // land past the width.
        if self.word_len == 0
            && self.space_len > 0
            && self
                .line_columns()
                .saturating_add(cols(self.space_len))
                .saturating_add(1)
                > cols(self.width)
        {
            trace!(position = self.position, "line break before breakpoint");
            self.write_newline()?;
        }
        self.commit()?;
        let mut buf = [0; 4];
        self.inner.write_all(c.encode_utf8(&mut buf).as_bytes())?;
        self.position = self.position.saturating_add(1);
        Ok(())
    }

    fn push_word(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.word.extend_from_slice(bytes);
        self.word_len += 1;
        if self.needs_break() {
            trace!(
                position = self.position,
                word_len = self.word_len,
                "look-ahead line break"
            );
            self.write_newline()?;
        }
        Ok(())
    }

    /// Whether the pending word no longer fits after what precedes it.
    ///
    /// A break needs something before the word to break after, otherwise a
    /// word of exactly `width` would be preceded by an empty line.
    fn needs_break(&self) -> bool {
        let occupied = self
            .line_columns()
            .saturating_add(cols(self.space_len))
            .saturating_add(cols(self.word_len));
        occupied >= cols(self.width)
            && self.word_len <= self.width
            && (self.position != 0 || self.space_len > 0)
    }

    fn write_prefix(&mut self) -> io::Result<()> {
        if !self.at_line_start {
            return Ok(());
        }
        self.at_line_start = false;
        if self.prefix.is_empty() {
            return Ok(());
        }
        self.position = self.position.saturating_add(cols(self.prefix_len));
        self.inner.write_all(self.prefix.as_bytes())
    }

    fn write_space(&mut self) -> io::Result<()> {
        self.inner.write_all(&self.space)?;
        self.position = self.position.saturating_add(cols(self.space_len));
        self.discard_space();
        Ok(())
    }

    fn discard_space(&mut self) {
        self.space.clear();
        self.space_len = 0;
    }

    fn write_word(&mut self) -> io::Result<()> {
        if self.word_len == 0 {
            return Ok(());
        }
        self.commit()
    }

    /// Write the due prefix, the pending whitespace and the pending word.
    fn commit(&mut self) -> io::Result<()> {
        self.write_prefix()?;
        self.write_space()?;
        self.inner.write_all(&self.word)?;
        self.position = self.position.saturating_add(cols(self.word_len));
        self.word.clear();
        self.word_len = 0;
        Ok(())
    }

    fn write_newline(&mut self) -> io::Result<()> {
        self.write_prefix()?;
        self.at_line_start = true;
        self.position = 0;
        self.discard_space();
        self.inner.write_all(b"\n")
    }
}

impl<W: Write> Write for WrapWriter<W> {
    /// On error some of `buf` may already have reached the sink; use
    /// [`WrapWriter::write_bytes`] to learn how many bytes were consumed.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_bytes(buf).map_err(io::Error::from)
    }

    /// Commit the pending word, then flush the sink.
    ///
    /// Pending whitespace stays buffered: it is only written if a word or a
    /// newline follows it.
    fn flush(&mut self) -> io::Result<()> {
        self.flush_pending()?;
        self.inner.flush()
    }
}

//! Wrapping configuration as a single value.

use std::io::Write;

use crate::wrap::{Breakpoints, WrapWriter};

/// Width used when none is given.
pub const DEFAULT_WIDTH: usize = 80;

/// Settings for a [`WrapWriter`].
///
/// # Examples
///
/// ```
/// use wordflow::WrapOptions;
///
/// let opts = WrapOptions::new(20).prefix("> ").first_line_prefix(true);
/// assert_eq!(wordflow::wrap_string_with("quoted text", &opts), "> quoted text");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrapOptions {
    /// Maximum line width in code points; zero disables wrapping.
    pub width: usize,
    /// Tab stop interval; zero keeps tabs as they are.
    pub tab_width: usize,
    /// Written at the start of every line after the first.
    pub prefix: String,
    /// Also write the prefix before the first line.
    pub first_line_prefix: bool,
    pub breakpoints: Breakpoints,
    /// Columns already taken on the first line; may be negative.
    pub position: isize,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            tab_width: 0,
            prefix: String::new(),
            first_line_prefix: false,
            breakpoints: Breakpoints::default(),
            position: 0,
        }
    }
}

impl WrapOptions {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width;
        self
    }

    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn first_line_prefix(mut self, enabled: bool) -> Self {
        self.first_line_prefix = enabled;
        self
    }

    #[must_use]
    pub fn breakpoints(mut self, breakpoints: impl Into<Breakpoints>) -> Self {
        self.breakpoints = breakpoints.into();
        self
    }

    #[must_use]
    pub fn position(mut self, position: isize) -> Self {
        self.position = position;
        self
    }

    /// Build a [`WrapWriter`] over `inner` configured with these settings.
    #[must_use]
    pub fn writer<W: Write>(&self, inner: W) -> WrapWriter<W> {
        let mut writer = WrapWriter::new(inner, self.width);
        writer.set_tab_width(self.tab_width);
        writer.set_prefix(self.prefix.as_str());
        writer.set_breakpoints(self.breakpoints.clone());
        writer.set_position(self.position);
        if self.first_line_prefix {
            writer.begin_line();
        }
        writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_wraps_at_eighty_columns() {
        let opts = WrapOptions::default();
        assert_eq!(opts.width, DEFAULT_WIDTH);
        assert_eq!(opts.tab_width, 0);
        assert!(opts.prefix.is_empty());
        assert!(opts.breakpoints.is_empty());
    }

    #[test]
    fn writer_applies_every_setting() {
        let opts = WrapOptions::new(30)
            .tab_width(8)
            .prefix("| ")
            .breakpoints("-")
            .position(-2);
        let writer = opts.writer(Vec::new());
        assert_eq!(writer.width(), 30);
        assert_eq!(writer.tab_width(), 8);
        assert_eq!(writer.prefix(), "| ");
        assert!(writer.breakpoints().contains('-'));
        assert_eq!(writer.position(), -2);
    }
}

//! Classification of decoded characters for the wrapping state machine.

/// How the wrapper treats a single character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// `\n`: ends the current line.
    Newline,
    /// Any other Unicode whitespace, `\r` and tabs included.
    Space,
    /// A configured breakpoint: flushed immediately and written verbatim.
    Breakpoint,
    /// Part of a word.
    Word,
}

/// Extra characters that end a word and pass through unchanged.
///
/// Characters are kept sorted and deduplicated so lookups are a binary search.
/// Whitespace in the set is ignored since whitespace already breaks words.
///
/// # Examples
///
/// ```
/// use wordflow::Breakpoints;
///
/// let points = Breakpoints::from("-:/");
/// assert!(points.contains('-'));
/// assert!(!points.contains('a'));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Breakpoints(Vec<char>);

impl Breakpoints {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Whether `c` is in the set.
    #[must_use]
    pub fn contains(&self, c: char) -> bool { self.0.binary_search(&c).is_ok() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    #[must_use]
    pub fn len(&self) -> usize { self.0.len() }

    /// The characters in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ { self.0.iter().copied() }

    pub(crate) fn classify(&self, c: char) -> CharClass {
        if c == '\n' {
            CharClass::Newline
        } else if c.is_whitespace() {
            CharClass::Space
        } else if self.contains(c) {
            CharClass::Breakpoint
        } else {
            CharClass::Word
        }
    }
}

impl FromIterator<char> for Breakpoints {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut chars: Vec<char> = iter.into_iter().filter(|c| !c.is_whitespace()).collect();
        chars.sort_unstable();
        chars.dedup();
        Self(chars)
    }
}

impl From<&str> for Breakpoints {
    fn from(s: &str) -> Self { s.chars().collect() }
}

impl From<String> for Breakpoints {
    fn from(s: String) -> Self { s.as_str().into() }
}

impl From<Vec<char>> for Breakpoints {
    fn from(chars: Vec<char>) -> Self { chars.into_iter().collect() }
}

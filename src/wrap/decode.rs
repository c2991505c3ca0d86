//! Incremental UTF-8 decoding across `write` calls.
//!
//! Input may arrive split anywhere, including inside a multi-byte character.
//! [`Utf8Decoder`] holds back an incomplete trailing sequence (at most three
//! bytes) and completes it from the next chunk. Bytes that can never form a
//! character are surfaced as [`Unit::Invalid`] so they can be passed through
//! untouched.

use std::str;

const MAX_UTF8_LEN: usize = 4;

/// Raw bytes of one invalid sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RawBytes {
    bytes: [u8; MAX_UTF8_LEN],
    len: usize,
}

impl RawBytes {
    fn new(src: &[u8]) -> Self {
        let len = src.len().min(MAX_UTF8_LEN);
        let mut bytes = [0; MAX_UTF8_LEN];
        bytes[..len].copy_from_slice(&src[..len]);
        Self { bytes, len }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] { &self.bytes[..self.len] }
}

/// One decoded unit of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Unit {
    Char(char),
    /// A maximal invalid subsequence; occupies one column, like the single
    /// replacement character lossy decoding would produce for it.
    Invalid(RawBytes),
}

enum Step {
    Char(char),
    Invalid(usize),
    Incomplete,
}

/// Decode the first unit of `bytes`.
fn decode_one(bytes: &[u8]) -> Step {
    let probe = &bytes[..bytes.len().min(MAX_UTF8_LEN)];
    let (valid, error) = match str::from_utf8(probe) {
        Ok(s) => (s, None),
        Err(e) => (
            str::from_utf8(&probe[..e.valid_up_to()]).unwrap_or_default(),
            Some(e),
        ),
    };
    if let Some(c) = valid.chars().next() {
        return Step::Char(c);
    }
    match error.and_then(|e| e.error_len()) {
        Some(len) => Step::Invalid(len),
        None => Step::Incomplete,
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Utf8Decoder {
    held: [u8; MAX_UTF8_LEN],
    held_len: usize,
}

impl Utf8Decoder {
    /// Decode the next unit from `input`.
    ///
    /// Returns the unit, if one completed, and how many bytes of `input` were
    /// consumed. `None` means the rest of `input` was an incomplete sequence
    /// and is now held back; the consumed count is then `input.len()`.
    pub(crate) fn decode(&mut self, input: &[u8]) -> (Option<Unit>, usize) {
        if self.held_len == 0 {
            return match decode_one(input) {
                Step::Char(c) => (Some(Unit::Char(c)), c.len_utf8()),
                Step::Invalid(len) => (Some(Unit::Invalid(RawBytes::new(&input[..len]))), len),
                Step::Incomplete => {
                    self.hold(input);
                    (None, input.len())
                }
            };
        }

        let held = self.held_len;
        let take = input.len().min(MAX_UTF8_LEN - held);
        let mut window = self.held;
        window[held..held + take].copy_from_slice(&input[..take]);
        let window = &window[..held + take];
        match decode_one(window) {
            Step::Char(c) => {
                self.held_len = 0;
                (Some(Unit::Char(c)), c.len_utf8().saturating_sub(held))
            }
            Step::Invalid(len) => {
                self.held_len = 0;
                (
                    Some(Unit::Invalid(RawBytes::new(&window[..len]))),
                    len.saturating_sub(held),
                )
            }
            Step::Incomplete => {
                self.hold(&input[..take]);
                (None, take)
            }
        }
    }

    /// Surface any held-back bytes as an invalid unit, emptying the decoder.
    pub(crate) fn take_held(&mut self) -> Option<Unit> {
        if self.held_len == 0 {
            return None;
        }
        let raw = RawBytes::new(&self.held[..self.held_len]);
        self.held_len = 0;
        Some(Unit::Invalid(raw))
    }

    fn hold(&mut self, bytes: &[u8]) {
        let end = (self.held_len + bytes.len()).min(MAX_UTF8_LEN);
        let count = end - self.held_len;
        self.held[self.held_len..end].copy_from_slice(&bytes[..count]);
        self.held_len = end;
    }
}

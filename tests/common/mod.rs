//! Utility helpers shared across integration tests.
#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::io::Write;

use wordflow::WrapOptions;

/// The paragraph from the README example, with single spaces between words.
pub const LOREM: &str = concat!(
    "Lorem ipsum dolor sit amet, lectus sed ut at lacinia. ",
    "A adipiscing. Vel placerat, ornare vel consectetur integer. Et ",
    "molestie ante mauris, sociis aliqua senectus et. Risus wisi ",
    "fringilla mauris massa vestibulum, ante est, quis euismod ac ",
    "suspendisse, sem sodales ligula eleifend tincidunt, nemo donec ",
    "porta viverra. Volutpat hymenaeos eu non neque sint. Torquent ",
    "mauris ante et, suspendisse aliquam nunc, urna sem a ornare sed ",
    "ante laoreet.",
);

/// Feed `bytes` to a fresh writer, split at each offset in `cuts`.
///
/// Offsets may fall inside a multi-byte character; out-of-range offsets are
/// clamped.
pub fn wrap_in_chunks(bytes: &[u8], cuts: &[usize], opts: &WrapOptions) -> Vec<u8> {
    let mut cuts: Vec<usize> = cuts.iter().map(|&c| c.min(bytes.len())).collect();
    cuts.sort_unstable();
    cuts.dedup();

    let mut writer = opts.writer(Vec::new());
    let mut start = 0;
    for cut in cuts.into_iter().chain([bytes.len()]) {
        writer
            .write_all(&bytes[start..cut])
            .expect("writing to a Vec cannot fail");
        start = cut;
    }
    writer.finish().expect("flushing a Vec cannot fail")
}

/// Assert no line is wider than `width` unless it holds a single word.
pub fn assert_lines_fit(output: &str, width: usize) {
    for line in output.split('\n') {
        let len = line.chars().count();
        assert!(
            len <= width || !line.chars().any(char::is_whitespace),
            "line {line:?} has {len} columns, more than {width}"
        );
    }
}

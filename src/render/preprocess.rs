//! Streaming-safe repair of partial markdown.
//!
//! Assistant replies are re-rendered on every streaming delta, so the text
//! handed to the parser is frequently cut mid-construct. [`preprocess`] closes
//! dangling code fences and inline code spans and clamps leading indentation
//! outside fences so half-written lists never flip into indented code blocks.

use std::borrow::Cow;

/// Minimum run length of backticks or tildes counted as a fence marker.
const FENCE_MIN_LEN: usize = 3;
/// Longest leading whitespace run kept on lines outside fences.
const MAX_LEADING_WHITESPACE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FenceMarker {
    pub(crate) ch: u8,
    pub(crate) len: usize,
}

fn is_fence_char(b: u8) -> bool {
    b == b'`' || b == b'~'
}

/// Every run of 3+ backticks or 3+ tildes, in document order.
pub(crate) fn fence_markers(text: &str) -> Vec<FenceMarker> {
    let bytes = text.as_bytes();
    let mut markers = Vec::new();
    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        if !is_fence_char(b) {
            i += 1;
            continue;
        }
        let run = bytes[i..].iter().take_while(|c| **c == b).count();
        if run >= FENCE_MIN_LEN {
            markers.push(FenceMarker { ch: b, len: run });
        }
        i += run;
    }
    markers
}

pub(crate) fn count_fence_markers(text: &str) -> usize {
    fence_markers(text).len()
}

/// Backticks with no backtick immediately before or after them.
pub(crate) fn count_single_backticks(text: &str) -> usize {
    let bytes = text.as_bytes();
    let mut count = 0usize;
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i] != b'`' {
            i += 1;
            continue;
        }
        let run = bytes[i..].iter().take_while(|c| **c == b'`').count();
        if run == 1 {
            count += 1;
        }
        i += run;
    }
    count
}

/// The fence character and length of the run the text ends with, if any.
fn trailing_fence_run(text: &str) -> Option<(u8, usize)> {
    let last = *text.as_bytes().last()?;
    if !is_fence_char(last) {
        return None;
    }
    Some((last, text.bytes().rev().take_while(|b| *b == last).count()))
}

fn clamp_leading_whitespace(line: &str) -> Cow<'_, str> {
    let indent = line
        .bytes()
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    if indent > MAX_LEADING_WHITESPACE {
        let mut clamped = String::with_capacity(line.len() - indent + MAX_LEADING_WHITESPACE);
        clamped.push_str(&line[..MAX_LEADING_WHITESPACE]);
        clamped.push_str(&line[indent..]);
        Cow::Owned(clamped)
    } else {
        Cow::Borrowed(line)
    }
}

/// Make possibly-truncated markdown safe to hand to the parser.
///
/// Pure and idempotent: the output always carries an even number of fence
/// markers and an even number of single backticks, and running it again
/// changes nothing.
pub fn preprocess(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = String::with_capacity(text.len() + 8);
    let mut fences_seen = 0usize;
    for line in text.split_inclusive('\n') {
        if fences_seen % 2 == 0 {
            out.push_str(&clamp_leading_whitespace(line));
        } else {
            out.push_str(line);
        }
        fences_seen += count_fence_markers(line);
    }

    let markers = fence_markers(&out);
    if markers.len() % 2 == 1 {
        if let Some(open) = markers.last() {
            let closing = char::from(open.ch)
                .to_string()
                .repeat(open.len.max(FENCE_MIN_LEN));
            out.push('\n');
            out.push_str(&closing);
        }
    }

    if count_single_backticks(&out) % 2 == 1 {
        // The appended backtick must not join an existing run.
        match trailing_fence_run(&out) {
            Some((_, run)) if run >= FENCE_MIN_LEN => out.push('\n'),
            Some((b'`', _)) => out.push(' '),
            _ => {}
        }
        out.push('`');
    }

    out
}

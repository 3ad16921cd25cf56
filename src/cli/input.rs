use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read the message from `path`, or from stdin when it is absent or `-`.
pub fn read_message(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Byte offsets of the growing prefixes a streaming reply passes through,
/// `chunk` characters at a time. Always ends with the full length.
pub fn stream_prefix_ends(text: &str, chunk: usize) -> Vec<usize> {
    let chunk = chunk.max(1);
    let mut ends: Vec<usize> = text
        .char_indices()
        .map(|(offset, _)| offset)
        .skip(chunk)
        .step_by(chunk)
        .collect();
    ends.push(text.len());
    ends
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_respect_char_boundaries() {
        let text = "héllo wörld";
        let ends = stream_prefix_ends(text, 3);
        for end in &ends {
            assert!(text.is_char_boundary(*end));
        }
        assert_eq!(ends.last(), Some(&text.len()));
        assert_eq!(&text[..ends[0]], "hél");
    }

    #[test]
    fn empty_text_yields_one_empty_prefix() {
        assert_eq!(stream_prefix_ends("", 4), [0]);
    }

    #[test]
    fn zero_chunk_is_treated_as_one() {
        assert_eq!(stream_prefix_ends("abc", 0), [1, 2, 3]);
    }
}

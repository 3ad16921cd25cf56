//! Image gallery built from rendered HTML.
//!
//! Every image the renderer emits carries its resolved source in
//! `data-preview-src`; a click handler collects them in document order and
//! opens the preview at the clicked image's index.

use super::html::unescape_html_attribute;
use crate::utils::url::sanitize_href;
use memchr::memmem;

/// Attribute carrying an image's preview source.
pub const PREVIEW_ATTRIBUTE: &str = "data-preview-src";

const IMG_TAG_OPEN: &str = "<img";

/// Host-side image viewer.
pub trait ImagePreview {
    fn open(&self, urls: &[String], index: usize);
}

/// Double-quoted attributes of the tag whose name ends at `start`, plus the
/// offset just past the tag. Returns no attributes for a malformed tag.
fn tag_attributes(html: &str, start: usize) -> (Vec<(&str, &str)>, usize) {
    let bytes = html.as_bytes();
    let mut attributes = Vec::new();
    let mut i = start;
    loop {
        while bytes.get(i).is_some_and(u8::is_ascii_whitespace) {
            i += 1;
        }
        match bytes.get(i) {
            None => return (Vec::new(), i),
            Some(b'>') => return (attributes, i + 1),
            Some(b'/') => {
                i += 1;
                continue;
            }
            Some(_) => {}
        }

        let name_start = i;
        while bytes
            .get(i)
            .is_some_and(|&b| !b.is_ascii_whitespace() && !matches!(b, b'=' | b'>' | b'/'))
        {
            i += 1;
        }
        let name = &html[name_start..i];
        if bytes.get(i) != Some(&b'=') {
            attributes.push((name, ""));
            continue;
        }
        if bytes.get(i + 1) != Some(&b'"') {
            return (Vec::new(), i);
        }
        let value_start = i + 2;
        let Some(len) = memchr::memchr(b'"', &bytes[value_start..]) else {
            return (Vec::new(), bytes.len());
        };
        attributes.push((name, &html[value_start..value_start + len]));
        i = value_start + len + 1;
    }
}

/// Preview sources of `<img>` tags in document order, unescaped and run
/// through the URL check again.
pub fn collect_gallery(html: &str) -> Vec<String> {
    let bytes = html.as_bytes();
    let finder = memmem::Finder::new(IMG_TAG_OPEN);
    let mut urls = Vec::new();
    let mut cursor = 0usize;
    while let Some(offset) = finder.find(&bytes[cursor..]) {
        let name_end = cursor + offset + IMG_TAG_OPEN.len();
        let is_img = bytes
            .get(name_end)
            .is_some_and(|&b| b.is_ascii_whitespace() || matches!(b, b'>' | b'/'));
        if !is_img {
            cursor = name_end;
            continue;
        }
        let (attributes, tag_end) = tag_attributes(html, name_end);
        cursor = tag_end;
        let preview = attributes
            .iter()
            .find(|(name, _)| *name == PREVIEW_ATTRIBUTE)
            .map(|(_, value)| *value)
            .filter(|value| !value.is_empty());
        if let Some(value) = preview {
            urls.push(sanitize_href(&unescape_html_attribute(value)));
        }
    }
    urls
}

/// Open `gallery` at `index`. Returns `false` (and opens nothing) when the
/// index is out of range.
pub fn open_preview(gallery: &[String], index: usize, preview: &dyn ImagePreview) -> bool {
    if index >= gallery.len() {
        return false;
    }
    preview.open(gallery, index);
    true
}

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

// Characters `encodeURIComponent` leaves unescaped, beyond alphanumerics.
const PAGE_LABEL_ESCAPES: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Accessor for the page identifier the host currently marks active.
///
/// Implementations read whatever UI element carries the "active" marker;
/// `None` when no such element exists.
pub trait ActivePageProbe: Send + Sync {
    fn active_page(&self) -> Option<String>;
}

/// Percent-encodes a page label the way the host encodes it into resource
/// URLs.
pub fn encode_page_label(label: &str) -> String {
    utf8_percent_encode(label, PAGE_LABEL_ESCAPES).to_string()
}

/// Decides whether an intercepted image load belongs to the active page.
pub struct RelevanceFilter {
    probe: Arc<dyn ActivePageProbe>,
}

impl RelevanceFilter {
    pub fn new(probe: Arc<dyn ActivePageProbe>) -> Self {
        Self { probe }
    }

    /// Returns true when `src` names the active page's own image: the
    /// encoded page label followed by a dot and a letter extension.
    /// A missing or empty label is "not relevant", never a fault.
    pub fn relevant(&self, src: &str) -> bool {
        if src.is_empty() {
            return false;
        }
        let Some(label) = self.probe.active_page() else {
            return false;
        };
        if label.is_empty() {
            return false;
        }
        matches_page_resource(src, &encode_page_label(&label))
    }
}

/// True when `src` contains `needle` immediately followed by `.` and at
/// least one ASCII letter.
fn matches_page_resource(src: &str, needle: &str) -> bool {
    src.match_indices(needle).any(|(pos, _)| {
        let rest = &src.as_bytes()[pos + needle.len()..];
        rest.first() == Some(&b'.') && rest.get(1).is_some_and(u8::is_ascii_alphabetic)
    })
}

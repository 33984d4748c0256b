//! Suppression of wiki markup regions that must never be searched.
//! HTML comments and `<nowiki>` blocks are blanked before any template lookup.

use std::borrow::Cow;
use std::sync::LazyLock;

use log::trace;
use regex::{Captures, Regex};

// An unterminated opener masks to the end of the text.
static RE_MASKED_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<!--.*?(?:-->|\z)|<nowiki>.*?(?:</nowiki>|\z)")
        .expect("valid masked region regex")
});

/// Blanks every comment and `<nowiki>` region in `text`.
///
/// Each masked byte becomes a space, so unmasked content keeps its byte
/// offsets. Regions are matched left to right and never overlap.
///
/// # Example
/// ```
/// use wikicoord::mask::mask_regions;
///
/// assert_eq!(mask_regions("a<!--b-->c"), "a        c");
/// ```
pub fn mask_regions(text: &str) -> Cow<'_, str> {
    RE_MASKED_REGION.replace_all(text, |caps: &Captures| {
        let region = &caps[0];
        trace!("Masking {} bytes", region.len());
        " ".repeat(region.len())
    })
}

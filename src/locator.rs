//! Locates the first `{{coord|...}}` invocation in already masked text.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{Error, Result};

// Non-greedy so a later `}}` (e.g. a trailing cite template) is never swallowed.
static RE_COORD_TEMPLATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)\{\{coord\|(.*?)\}\}").expect("valid coord template regex")
});

/// Returns the template body: the argument list between `coord|` and the
/// first following `}}`.
///
/// # Errors
/// * `Error::NoCoordData` if the text holds no coord template
pub fn find_template_body(masked: &str) -> Result<&str> {
    let body = RE_COORD_TEMPLATE
        .captures(masked)
        .and_then(|caps| caps.get(1))
        .ok_or(Error::NoCoordData)?;
    debug!("Found coord template body at byte {}: '{}'", body.start(), body.as_str());
    Ok(body.as_str())
}

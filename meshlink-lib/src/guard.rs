//! Markup detection on raw input.

use crate::{LinkError, Result};

/// Rejects any input containing HTML angle brackets.
///
/// Runs on the percent-decoded text before classification, so an attack
/// hidden inside an otherwise malformed key is reported as an attack and
/// not as a key-format error. The flagged text travels verbatim inside the
/// error; escaping it is the caller's job.
pub fn reject_markup(decoded: &str) -> Result<()> {
    if decoded.contains(['<', '>']) {
        return Err(LinkError::ContainsMarkup(decoded.to_owned()));
    }
    Ok(())
}

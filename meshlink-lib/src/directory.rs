//! Bundled display-name directory.
//!
//! The table ships inside the binary, is parsed once on first use, and is
//! never written afterwards, so concurrent readers need no synchronization
//! beyond the one-time initialization.

use std::collections::HashMap;
use std::sync::OnceLock;

static NAMES: OnceLock<HashMap<String, String>> = OnceLock::new();

fn table() -> &'static HashMap<String, String> {
    NAMES.get_or_init(|| {
        serde_json::from_str(include_str!("../resources/names.json"))
            .expect("bundled names.json is well-formed")
    })
}

/// Display name registered for a canonical identifier, if any.
///
/// Lookup is by exact canonical text: each encoding of the same key is its
/// own entry. Unknown identifiers resolve to `None` and callers fall back
/// to the canonical text itself.
pub fn display_name(canonical: &str) -> Option<&'static str> {
    table().get(canonical).map(String::as_str)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEX_FIXTURE: &str = "0x04e139115a1acc72510388fcf7e1cf492784c9a839888b25271465f4f1baa38c2d3997f8fd78828eb8628bc3bb55ababd884c6002d18330d59c404cc9ce3e4fb35";

    #[test]
    fn known_key_resolves_to_its_name() {
        assert_eq!(display_name(HEX_FIXTURE), Some("Turquoise Amused Heron"));
        assert_eq!(
            display_name("z6DtcwvxxcRxqb4azq7ffeHnzKwaC6ia4YVRbb2AG6sKuJ3N"),
            Some("Turquoise Amused Heron")
        );
    }

    #[test]
    fn lookup_is_exact() {
        assert_eq!(display_name(&HEX_FIXTURE.to_ascii_uppercase()), None);
        assert_eq!(display_name("nobody"), None);
    }
}

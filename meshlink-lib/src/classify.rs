//! Structural classification of raw path segments.
//!
//! Classification decides which identifier kind a path denotes, looking
//! only at prefixes and shape. Content validation happens afterwards, per
//! kind. Markers match case-insensitively; whether the casing of the
//! content matters is for the validators and the resolver to judge.

use crate::config::ChannelRules;
use crate::encoding::{COMPRESSED_PREFIX, HEX_MARKER, MULTIBASE_PREFIXES};
use crate::identifier::KeyEncoding;
use crate::{LinkError, Result};

/// Marker segment for in-app browser links.
pub const BROWSE_MARKER: &str = "b";

/// Marker segment for user identifiers: ENS names and chat keys.
pub const USER_MARKER: &str = "u";

/// Fixed route for group-chat invites; the identifier lives in the query.
pub const GROUP_ROUTE: &str = "g/args";

/// Suffix denoting an ENS name.
pub const ENS_SUFFIX: &str = ".eth";

/// A classified but not yet validated view into the raw path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Candidate<'a> {
    /// Everything after the browse marker, case preserved.
    BrowserLink {
        /// Target URL or bare domain.
        target: &'a str,
    },
    /// A user segment ending in the ENS suffix.
    EnsName {
        /// The name as submitted.
        name: &'a str,
    },
    /// A user segment shaped like a key in one of the known encodings.
    ChatKey {
        /// Which encoding the prefix announced.
        encoding: KeyEncoding,
        /// The full key text as submitted, marker or prefix included.
        text: &'a str,
    },
    /// The group-chat route; the three arguments live in the query.
    GroupChat {
        /// Raw query string, possibly empty.
        query: &'a str,
    },
    /// A bare route matching the channel-name shape.
    PublicChannel {
        /// The channel name as submitted.
        name: &'a str,
    },
}

/// Determines which identifier kind a raw path denotes.
pub fn classify<'a>(path: &'a str, rules: &ChannelRules) -> Result<Candidate<'a>> {
    let path = path.strip_prefix('/').unwrap_or(path);
    let (route, query) = match path.split_once('?') {
        Some((route, query)) => (route, Some(query)),
        None => (path, None),
    };

    if let Some(target) = strip_marker(route, BROWSE_MARKER) {
        return Ok(Candidate::BrowserLink { target });
    }
    if let Some(rest) = strip_marker(route, USER_MARKER) {
        return classify_user(rest);
    }
    if route.eq_ignore_ascii_case(GROUP_ROUTE) {
        return Ok(Candidate::GroupChat {
            query: query.unwrap_or(""),
        });
    }
    if query.is_none() && rules.shape_matches(route) {
        return Ok(Candidate::PublicChannel { name: route });
    }
    Err(LinkError::UnrecognizedPath(path.to_owned()))
}

/// Splits off a one-segment marker, matching it case-insensitively.
fn strip_marker<'a>(route: &'a str, marker: &str) -> Option<&'a str> {
    let (head, rest) = route.split_once('/')?;
    head.eq_ignore_ascii_case(marker).then_some(rest)
}

fn classify_user(rest: &str) -> Result<Candidate<'_>> {
    // Slicing by byte index would panic on multibyte input, so prefix and
    // suffix checks go through `get`.
    if rest.to_ascii_lowercase().ends_with(ENS_SUFFIX) {
        return Ok(Candidate::EnsName { name: rest });
    }
    if matches!(rest.get(..HEX_MARKER.len()), Some(m) if m.eq_ignore_ascii_case(HEX_MARKER)) {
        return Ok(Candidate::ChatKey {
            encoding: KeyEncoding::Hex,
            text: rest,
        });
    }
    match rest.chars().next() {
        Some(c) if MULTIBASE_PREFIXES.contains(&c.to_ascii_lowercase()) => Ok(Candidate::ChatKey {
            encoding: KeyEncoding::Multibase,
            text: rest,
        }),
        // The compressed prefix is case-sensitive by design.
        Some(COMPRESSED_PREFIX) => Ok(Candidate::ChatKey {
            encoding: KeyEncoding::Compressed,
            text: rest,
        }),
        _ => Err(LinkError::UnrecognizedUserIdentifier(rest.to_owned())),
    }
}

//! Deep-link target resolution.
//!
//! The resolver turns a validated identifier into a [`Target`], unless the
//! submitted text differs from the canonical form purely by casing. In
//! that case it answers [`Resolution::RedirectToCanonical`] instead: a
//! mixed-case variant of a known-good identifier gets a warning page, not
//! the target page, so look-alike links cannot ride on a trusted name.

use serde::Serialize;

use crate::config::ResolverConfig;
use crate::directory::display_name;
use crate::identifier::Identifier;

/// A fully resolved deep-link target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Target {
    /// Native-scheme URI, echoing the request path and query verbatim.
    pub uri: String,
    /// Human-readable label for the identified party, channel, or site.
    pub label: String,
    /// Whether search engines may index the resolved page. Identity-bearing
    /// kinds are never indexable.
    pub indexable: bool,
}

/// Outcome of a successful resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Resolution {
    /// Render the deep-link target.
    Target(Target),
    /// Offer a redirect to the canonical path instead of resolving.
    RedirectToCanonical(String),
}

/// Maps a validated identifier onto its target, or signals a redirect when
/// the submitted form is not canonical.
pub fn resolve_identifier(
    config: &ResolverConfig,
    identifier: &Identifier,
    submitted: &str,
) -> Resolution {
    let submitted = submitted.strip_prefix('/').unwrap_or(submitted);

    if let Some(canonical) = canonical_path(identifier) {
        if submitted != canonical && submitted.eq_ignore_ascii_case(&canonical) {
            return Resolution::RedirectToCanonical(format!("/{canonical}"));
        }
    }

    Resolution::Target(Target {
        uri: format!("{}://{}", config.scheme, submitted),
        label: label_for(identifier),
        indexable: matches!(
            identifier,
            Identifier::BrowserLink { .. } | Identifier::PublicChannel { .. }
        ),
    })
}

/// Canonical path for kinds that participate in case redirection.
///
/// Browser links preserve case and group chats resolve directly, so both
/// return `None`. Compressed keys never fold their payload, but the marker
/// segment still does.
fn canonical_path(identifier: &Identifier) -> Option<String> {
    match identifier {
        Identifier::BrowserLink { .. } | Identifier::GroupChat { .. } => None,
        Identifier::EnsName { name } => Some(format!("u/{name}")),
        Identifier::ChatKey(key) => Some(format!("u/{}", key.canonical)),
        Identifier::PublicChannel { name } => Some(name.clone()),
    }
}

fn label_for(identifier: &Identifier) -> String {
    let canonical = match identifier {
        Identifier::BrowserLink { target_url } => target_url,
        Identifier::EnsName { name } => name,
        Identifier::PublicChannel { name } => name,
        Identifier::ChatKey(key) => &key.canonical,
        Identifier::GroupChat { label, .. } => return label.clone(),
    };
    display_name(canonical)
        .map(str::to_owned)
        .unwrap_or_else(|| canonical.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::{ChatKey, KeyEncoding};

    fn config() -> ResolverConfig {
        ResolverConfig::default()
    }

    fn hex_key(canonical: &str) -> ChatKey {
        ChatKey::new(KeyEncoding::Hex, vec![4u8; 65], canonical.to_owned())
    }

    #[test]
    fn browser_links_resolve_verbatim_and_indexable() {
        let id = Identifier::BrowserLink {
            target_url: "ens.domains".into(),
        };
        match resolve_identifier(&config(), &id, "/b/ens.domains") {
            Resolution::Target(t) => {
                assert_eq!(t.uri, "mesh-im://b/ens.domains");
                assert_eq!(t.label, "ens.domains");
                assert!(t.indexable);
            }
            other => panic!("expected target, got {other:?}"),
        }
    }

    #[test]
    fn browser_links_never_redirect_on_case() {
        let id = Identifier::BrowserLink {
            target_url: "ENS.domains".into(),
        };
        assert!(matches!(
            resolve_identifier(&config(), &id, "/b/ENS.domains"),
            Resolution::Target(_)
        ));
    }

    #[test]
    fn channels_are_indexable_and_case_redirect() {
        let id = Identifier::PublicChannel {
            name: "rust-news".into(),
        };
        match resolve_identifier(&config(), &id, "/rust-news") {
            Resolution::Target(t) => {
                assert_eq!(t.uri, "mesh-im://rust-news");
                assert!(t.indexable);
            }
            other => panic!("expected target, got {other:?}"),
        }
        assert_eq!(
            resolve_identifier(&config(), &id, "/Rust-News"),
            Resolution::RedirectToCanonical("/rust-news".into())
        );
    }

    #[test]
    fn ens_names_are_not_indexable_and_case_redirect() {
        let id = Identifier::EnsName {
            name: "verity.eth".into(),
        };
        match resolve_identifier(&config(), &id, "/u/verity.eth") {
            Resolution::Target(t) => {
                assert_eq!(t.uri, "mesh-im://u/verity.eth");
                assert!(!t.indexable);
            }
            other => panic!("expected target, got {other:?}"),
        }
        assert_eq!(
            resolve_identifier(&config(), &id, "/u/VeRity.eth"),
            Resolution::RedirectToCanonical("/u/verity.eth".into())
        );
    }

    #[test]
    fn marker_case_alone_triggers_redirect() {
        let id = Identifier::EnsName {
            name: "verity.eth".into(),
        };
        assert_eq!(
            resolve_identifier(&config(), &id, "/U/verity.eth"),
            Resolution::RedirectToCanonical("/u/verity.eth".into())
        );
    }

    #[test]
    fn chat_key_label_falls_back_to_canonical_text() {
        let id = Identifier::ChatKey(hex_key("0xabcd"));
        match resolve_identifier(&config(), &id, "/u/0xabcd") {
            Resolution::Target(t) => {
                assert_eq!(t.label, "0xabcd");
                assert!(!t.indexable);
            }
            other => panic!("expected target, got {other:?}"),
        }
    }

    #[test]
    fn group_chats_use_their_label_and_never_redirect() {
        let id = Identifier::GroupChat {
            admin_key: hex_key("0xaa"),
            label: "Tea Club".into(),
            group_key: hex_key("0xbb"),
        };
        let submitted = "/g/args?a=0xAA&a1=Tea%20Club&a2=0xBB";
        match resolve_identifier(&config(), &id, submitted) {
            Resolution::Target(t) => {
                assert_eq!(t.uri, format!("mesh-im://{}", &submitted[1..]));
                assert_eq!(t.label, "Tea Club");
                assert!(!t.indexable);
            }
            other => panic!("expected target, got {other:?}"),
        }
    }

    #[test]
    fn custom_scheme_is_honored() {
        let config = ResolverConfig::with_scheme("mesh-dev");
        let id = Identifier::PublicChannel {
            name: "rust-news".into(),
        };
        match resolve_identifier(&config, &id, "rust-news") {
            Resolution::Target(t) => assert_eq!(t.uri, "mesh-dev://rust-news"),
            other => panic!("expected target, got {other:?}"),
        }
    }
}

//! Per-kind validators producing canonical identifiers.
//!
//! Each validator takes the classified candidate and either produces an
//! immutable [`Identifier`] carrying the canonical form, or fails with the
//! first error encountered. Nothing is accumulated: the pipeline reports
//! one precise failure per request.

use std::collections::HashMap;

use crate::classify::{Candidate, ENS_SUFFIX};
use crate::config::ChannelRules;
use crate::encoding::{
    decode_compressed_key, decode_hex_key, decode_multibase_key, HEX_MARKER,
};
use crate::guard::reject_markup;
use crate::identifier::{ChatKey, Identifier, KeyEncoding};
use crate::{LinkError, Result};

/// Query argument carrying the group admin key.
pub const GROUP_ADMIN_ARG: &str = "a";

/// Query argument carrying the percent-encoded group label.
pub const GROUP_LABEL_ARG: &str = "a1";

/// Query argument carrying the group key.
pub const GROUP_KEY_ARG: &str = "a2";

/// Validates a classified candidate into a canonical identifier.
pub fn validate(candidate: Candidate<'_>, rules: &ChannelRules) -> Result<Identifier> {
    match candidate {
        Candidate::BrowserLink { target } => validate_browser_link(target),
        Candidate::EnsName { name } => validate_ens_name(name),
        Candidate::ChatKey { encoding, text } => {
            validate_chat_key(encoding, text).map(Identifier::ChatKey)
        }
        Candidate::GroupChat { query } => validate_group_chat(query),
        Candidate::PublicChannel { name } => validate_channel(name, rules),
    }
}

fn validate_browser_link(target: &str) -> Result<Identifier> {
    if target.is_empty() {
        return Err(LinkError::UnrecognizedPath("b/".to_owned()));
    }
    Ok(Identifier::BrowserLink {
        target_url: target.to_owned(),
    })
}

fn validate_ens_name(name: &str) -> Result<Identifier> {
    let name = name.to_ascii_lowercase();
    {
        let label = name
            .strip_suffix(ENS_SUFFIX)
            .ok_or_else(|| LinkError::UnrecognizedUserIdentifier(name.clone()))?;
        if label.is_empty() || label.contains('/') {
            return Err(LinkError::UnrecognizedUserIdentifier(name.clone()));
        }
    }
    Ok(Identifier::EnsName { name })
}

/// Validates a chat key in the encoding the classifier announced.
pub fn validate_chat_key(encoding: KeyEncoding, text: &str) -> Result<ChatKey> {
    match encoding {
        KeyEncoding::Hex => {
            let digits = match text.get(..HEX_MARKER.len()) {
                Some(m) if m.eq_ignore_ascii_case(HEX_MARKER) => &text[HEX_MARKER.len()..],
                _ => return Err(LinkError::InvalidCharset("hex chat key")),
            };
            let raw = decode_hex_key(digits)?;
            let canonical = format!("{HEX_MARKER}{}", digits.to_ascii_lowercase());
            Ok(ChatKey::new(encoding, raw, canonical))
        }
        KeyEncoding::Multibase => {
            let raw = decode_multibase_key(text)?;
            // The whole string folds: the prefix names a case-insensitive base.
            Ok(ChatKey::new(encoding, raw, text.to_ascii_lowercase()))
        }
        KeyEncoding::Compressed => {
            let raw = decode_compressed_key(text)?;
            Ok(ChatKey::new(encoding, raw, text.to_owned()))
        }
    }
}

fn validate_channel(name: &str, rules: &ChannelRules) -> Result<Identifier> {
    let name = name.to_ascii_lowercase();
    rules.check(&name)?;
    Ok(Identifier::PublicChannel { name })
}

/// Validates the three group-chat arguments.
///
/// Failure order is fixed: absent arguments first, then the admin key, then
/// the group key. The label is decoded and guarded last, so markup stays
/// detected even when this validator is driven without the pipeline guard.
fn validate_group_chat(query: &str) -> Result<Identifier> {
    let args = parse_query(query);
    let (admin, label, group) = match (
        args.get(GROUP_ADMIN_ARG),
        args.get(GROUP_LABEL_ARG),
        args.get(GROUP_KEY_ARG),
    ) {
        (Some(admin), Some(label), Some(group)) => (*admin, *label, *group),
        _ => return Err(LinkError::MissingArguments),
    };

    let admin_key = validate_raw_hex_key(admin).map_err(|_| LinkError::InvalidAdminKey)?;
    let group_key = validate_raw_hex_key(group).map_err(|_| LinkError::InvalidGroupKey)?;

    let label = urlencoding::decode(label)
        .map_err(|_| LinkError::InvalidCharset("group label"))?
        .into_owned();
    reject_markup(&label)?;

    Ok(Identifier::GroupChat {
        admin_key,
        label,
        group_key,
    })
}

/// Validates a raw `0x`-style key: exactly the hex-encoded uncompressed key
/// after the tag. Group keys may carry an opaque invite prefix before the
/// tag, so the search starts at the first `0x`.
fn validate_raw_hex_key(text: &str) -> Result<ChatKey> {
    let at = text
        .find(HEX_MARKER)
        .ok_or(LinkError::InvalidCharset("group chat key"))?;
    let digits = &text[at + HEX_MARKER.len()..];
    let raw = decode_hex_key(digits)?;
    let canonical = format!("{HEX_MARKER}{}", digits.to_ascii_lowercase());
    Ok(ChatKey::new(KeyEncoding::Hex, raw, canonical))
}

fn parse_query(query: &str) -> HashMap<&str, &str> {
    let mut args = HashMap::new();
    for pair in query.split('&') {
        if let Some((key, value)) = pair.split_once('=') {
            args.insert(key, value);
        }
    }
    args
}

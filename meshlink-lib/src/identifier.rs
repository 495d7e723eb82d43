//! The identifier data model.
//!
//! An [`Identifier`] is built fresh from untrusted input on every request,
//! is immutable once validated, and carries its canonical textual form
//! alongside any decoded key material.

/// Wire encoding of a chat public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEncoding {
    /// `0x` marker plus hex digits, uncompressed key.
    Hex,
    /// Self-describing base prefix plus payload, uncompressed key.
    Multibase,
    /// `z` prefix plus base58btc payload, compressed key.
    Compressed,
}

impl KeyEncoding {
    /// Whether the encoding's alphabet is case-insensitive, which makes the
    /// lowercase form canonical. Base58 mixes case meaningfully, so
    /// compressed keys never fold.
    pub fn folds_case(&self) -> bool {
        !matches!(self, Self::Compressed)
    }
}

/// A structurally valid chat public key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatKey {
    /// Encoding the key arrived in.
    pub encoding: KeyEncoding,
    /// Decoded payload, tag bytes included, exact length enforced.
    pub raw: Vec<u8>,
    /// Canonical text: lowercase for case-folding encodings, verbatim for
    /// compressed keys.
    pub canonical: String,
}

impl ChatKey {
    pub(crate) fn new(encoding: KeyEncoding, raw: Vec<u8>, canonical: String) -> Self {
        Self {
            encoding,
            raw,
            canonical,
        }
    }
}

/// A validated, canonical join-link identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Identifier {
    /// Bare domain or URL opened in the in-app browser. Case preserved.
    BrowserLink {
        /// Where the in-app browser should navigate.
        target_url: String,
    },
    /// An `.eth` name, lowercase canonical.
    EnsName {
        /// The full name, suffix included.
        name: String,
    },
    /// A public channel name, lowercase canonical.
    PublicChannel {
        /// The channel name without any `#` sigil.
        name: String,
    },
    /// A chat public key in one of the supported encodings.
    ChatKey(ChatKey),
    /// A private group chat invite.
    GroupChat {
        /// Key of the group admin.
        admin_key: ChatKey,
        /// Display label, already percent-decoded.
        label: String,
        /// Key of the group itself.
        group_key: ChatKey,
    },
}

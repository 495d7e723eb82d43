//! Error types for link resolution.
//!
//! Every error here is a per-request validation failure. The serving layer
//! maps each one to an HTTP 400 (or a warning page); nothing is retried and
//! nothing is fatal to the process. Variants that carry input text carry it
//! raw and unescaped, so callers must HTML-escape before rendering.

/// Validation failure raised while resolving a join link.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The decoded input contains HTML angle brackets. Checked before any
    /// other validation and reported with the flagged text verbatim.
    #[error("input contains HTML: {0}")]
    ContainsMarkup(String),

    /// A user segment that is neither an ENS name nor a chat key in any
    /// recognized encoding.
    #[error("unrecognized user identifier: {0}")]
    UnrecognizedUserIdentifier(String),

    /// The path carries no known marker and does not look like a channel.
    #[error("unrecognized path: {0}")]
    UnrecognizedPath(String),

    /// A chat key whose encoded or decoded length is off, by however little.
    #[error("incorrect length of chat key")]
    IncorrectKeyLength,

    /// A character outside the alphabet the named input allows.
    #[error("invalid character in {0}")]
    InvalidCharset(&'static str),

    /// A decoded key whose leading format tag is not the expected one.
    #[error("invalid key format tag")]
    InvalidFormatTag,

    /// A group-chat URL with one or more of its three arguments absent.
    #[error("invalid group chat URL: missing arguments")]
    MissingArguments,

    /// A group-chat URL whose admin key failed validation.
    #[error("invalid group chat URL: admin public key invalid")]
    InvalidAdminKey,

    /// A group-chat URL whose group key failed validation.
    #[error("invalid group chat URL: group public key invalid")]
    InvalidGroupKey,
}

impl LinkError {
    /// True when the input looks like an attempted attack rather than a
    /// malformed identifier. Serving layers log these at a higher level.
    pub fn is_attack(&self) -> bool {
        matches!(self, Self::ContainsMarkup(_))
    }
}

//! Configuration types for the resolution engine.

use serde::{Deserialize, Serialize};

use crate::{LinkError, Result};

fn default_scheme() -> String {
    "mesh-im".to_string()
}

fn default_min_len() -> usize {
    1
}

fn default_max_len() -> usize {
    64
}

fn default_separators() -> String {
    "-_".to_string()
}

/// Shape rules for public channel names.
///
/// A channel name is lowercase ASCII letters and digits plus the configured
/// separator punctuation, with a bounded length. Uppercase input is not
/// rejected outright; it classifies as a channel and the resolver answers
/// with a redirect to the lowercase form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRules {
    /// Minimum accepted name length.
    #[serde(default = "default_min_len")]
    pub min_len: usize,

    /// Maximum accepted name length.
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Separator characters allowed besides letters and digits.
    #[serde(default = "default_separators")]
    pub separators: String,
}

impl Default for ChannelRules {
    fn default() -> Self {
        Self {
            min_len: default_min_len(),
            max_len: default_max_len(),
            separators: default_separators(),
        }
    }
}

impl ChannelRules {
    fn char_allowed(&self, c: char) -> bool {
        c.is_ascii_lowercase() || c.is_ascii_digit() || self.separators.contains(c)
    }

    /// Structural test used by the classifier: does this route look like a
    /// channel name at all, ignoring case?
    pub fn shape_matches(&self, route: &str) -> bool {
        (self.min_len..=self.max_len).contains(&route.len())
            && route
                .chars()
                .all(|c| self.char_allowed(c.to_ascii_lowercase()))
    }

    /// Full check on an already lowercased candidate.
    pub fn check(&self, name: &str) -> Result<()> {
        if !(self.min_len..=self.max_len).contains(&name.len())
            || !name.chars().all(|c| self.char_allowed(c))
        {
            return Err(LinkError::InvalidCharset("channel name"));
        }
        Ok(())
    }
}

/// Engine configuration: the native deep-link scheme and channel rules.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// URI scheme that opens the native application.
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Public channel name rules.
    #[serde(default)]
    pub channel: ChannelRules,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
            channel: ChannelRules::default(),
        }
    }
}

impl ResolverConfig {
    /// Configuration with a custom native scheme.
    pub fn with_scheme(scheme: impl Into<String>) -> Self {
        Self {
            scheme: scheme.into(),
            channel: ChannelRules::default(),
        }
    }
}

//! Meshlink resolution engine.
//!
//! Resolves the short path of a join link into a typed deep-link target or
//! a precise validation error. The engine is pure and stateless per
//! request: no I/O, no shared mutable state, bounded work on any input.
//! The only process-wide state is the bundled display-name table, loaded
//! once and read-only thereafter.
//!
//! Recognized identifier kinds:
//!
//! - `/b/<url>`: open a site in the in-app browser,
//! - `/u/<name>.eth`: an ENS-backed user,
//! - `/u/0x<hex>`, `/u/f<hex>`, `/u/z<base58>`: a chat public key in hex,
//!   multibase, or compressed encoding,
//! - `/g/args?a=..&a1=..&a2=..`: a private group-chat invite,
//! - `/<name>`: a public channel.
//!
//! HTTP plumbing, HTML rendering, and QR generation are the caller's
//! business. The contract is one operation:
//!
//! # Example
//!
//! ```
//! use meshlink_lib::{resolve, Resolution};
//!
//! match resolve("/b/ens.domains")? {
//!     Resolution::Target(target) => {
//!         assert_eq!(target.uri, "mesh-im://b/ens.domains");
//!         assert!(target.indexable);
//!     }
//!     Resolution::RedirectToCanonical(path) => {
//!         println!("offer redirect to {path}");
//!     }
//! }
//! # Ok::<(), meshlink_lib::LinkError>(())
//! ```

pub mod classify;
pub mod config;
pub mod directory;
pub mod encoding;
pub mod errors;
pub mod guard;
pub mod identifier;
pub mod resolve;
pub mod validate;

pub use classify::{classify, Candidate};
pub use config::{ChannelRules, ResolverConfig};
pub use directory::display_name;
pub use errors::LinkError;
pub use identifier::{ChatKey, Identifier, KeyEncoding};
pub use resolve::{resolve_identifier, Resolution, Target};
pub use validate::{validate, validate_chat_key};

/// Common result alias for resolution operations.
pub type Result<T> = std::result::Result<T, LinkError>;

/// Resolves a raw path and query with the default configuration.
pub fn resolve(raw: &str) -> Result<Resolution> {
    resolve_with(&ResolverConfig::default(), raw)
}

/// Resolves a raw path and query against the given configuration.
///
/// The pipeline short-circuits on the first failure: markup guard,
/// percent-decode, markup guard again on the decoded text, classification,
/// per-kind validation, resolution. The guard runs before any
/// encoding-aware parsing, so markup wins over every other error the same
/// input would produce.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip(config, raw), fields(len = raw.len()))
)]
pub fn resolve_with(config: &ResolverConfig, raw: &str) -> Result<Resolution> {
    guard::reject_markup(raw)?;
    let decoded = urlencoding::decode(raw)
        .map_err(|_| LinkError::InvalidCharset("percent-encoding"))?;
    guard::reject_markup(&decoded)?;

    let candidate = classify::classify(raw, &config.channel)?;
    let identifier = validate::validate(candidate, &config.channel)?;

    #[cfg(feature = "tracing")]
    tracing::debug!(?identifier, "validated");

    Ok(resolve::resolve_identifier(config, &identifier, raw))
}

//! Resource providers for line-item images.
//!
//! This crate provides implementations of the `ResourceProvider` trait from
//! quire-traits, one per kind of image reference an invoice can carry.
//!
//! ## Available Providers
//!
//! - [`FilesystemResourceProvider`]: Relative paths under an asset directory
//! - [`DataUriResourceProvider`]: Inline `data:` URIs
//! - [`HttpResourceProvider`]: `http(s)://` URLs (feature: `remote`)
//! - [`RoutingResourceProvider`]: Dispatches to the first provider that handles a reference
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory provider from quire-traits:
//! - [`InMemoryResourceProvider`]: Pre-populated in-memory storage

mod data_uri;
mod filesystem;
#[cfg(feature = "remote")]
mod http;
mod routing;

pub use data_uri::DataUriResourceProvider;
pub use filesystem::FilesystemResourceProvider;
#[cfg(feature = "remote")]
pub use http::HttpResourceProvider;
pub use routing::RoutingResourceProvider;

pub use quire_traits::InMemoryResourceProvider;

/// True when `reference` starts with a URI scheme such as `https:` or `data:`.
///
/// Single-letter schemes are treated as Windows drive letters, not URIs.
pub(crate) fn has_scheme(reference: &str) -> bool {
    match reference.split_once(':') {
        Some((scheme, _)) => {
            scheme.len() > 1
                && scheme.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://example.com/a.png"));
        assert!(has_scheme("data:image/png;base64,AAAA"));
        assert!(has_scheme("file:///tmp/a.png"));
        assert!(!has_scheme("images/a.png"));
        assert!(!has_scheme("C:\\images\\a.png"));
    }
}

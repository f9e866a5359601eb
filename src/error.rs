//! Error types for the geocache layer
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Geo Error Enum ==
/// Unified error type for the cache-aside layer.
///
/// A cache miss is not an error; the store signals it through `Option`.
/// The only failure the proxy can surface is an upstream one, and it is
/// propagated to the caller without translation and without being cached.
#[derive(Error, Debug)]
pub enum GeoError {
    /// The upstream lookup service failed
    #[error("upstream lookup failed: {0}")]
    Upstream(#[from] anyhow::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the geocache layer.
pub type Result<T> = std::result::Result<T, GeoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_error_display() {
        let err = GeoError::Upstream(anyhow::anyhow!("dadata timed out"));
        assert_eq!(err.to_string(), "upstream lookup failed: dadata timed out");
    }

    #[test]
    fn test_upstream_error_from_anyhow() {
        fn fails() -> Result<()> {
            Err(anyhow::anyhow!("boom").into())
        }
        assert!(matches!(fails(), Err(GeoError::Upstream(_))));
    }
}

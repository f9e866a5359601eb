//! Cache Key Module
//!
//! Key derivation for the two supported query shapes.

use std::fmt;

// == Cache Key ==
/// Typed cache key for a geocoding query.
///
/// Derivation is deterministic and collision-free: the same logical query
/// always encodes to the same string, and two distinct logical queries never
/// share one. Inputs are taken verbatim with no normalization, so queries
/// differing only in case or whitespace are distinct entries on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// Free-text address search
    Search { query: String },
    /// Coordinate reverse-lookup
    Geocode { lat: String, lon: String },
}

impl CacheKey {
    // == Constructors ==
    /// Key for a free-text address search.
    pub fn search(query: impl Into<String>) -> Self {
        Self::Search {
            query: query.into(),
        }
    }

    /// Key for a coordinate reverse-lookup. Callers must pass the components
    /// in a consistent order, or the same location yields distinct entries.
    pub fn geocode(lat: impl Into<String>, lon: impl Into<String>) -> Self {
        Self::Geocode {
            lat: lat.into(),
            lon: lon.into(),
        }
    }

    // == Encode ==
    /// Renders the store key string.
    ///
    /// Search keys are `search:<query>`; the query is the entire tail, so no
    /// delimiter inside it can be misread. Geocode keys length-prefix the
    /// first coordinate (`geocode:<len>:<lat>:<lon>`) so raw components that
    /// themselves contain `:` cannot collide with a different split of the
    /// same characters.
    pub fn encode(&self) -> String {
        match self {
            CacheKey::Search { query } => format!("search:{query}"),
            CacheKey::Geocode { lat, lon } => format!("geocode:{}:{lat}:{lon}", lat.len()),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

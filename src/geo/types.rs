//! Geo domain types.

use serde::{Deserialize, Serialize};

/// A resolved postal address with its coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// City name
    pub city: String,
    /// Street name
    pub street: String,
    /// House number
    pub house: String,
    /// Latitude, as returned by the upstream service
    pub lat: String,
    /// Longitude, as returned by the upstream service
    pub lon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Address {
        Address {
            city: "Moscow".to_string(),
            street: "Lenina".to_string(),
            house: "11".to_string(),
            lat: "55.7558".to_string(),
            lon: "37.6173".to_string(),
        }
    }

    #[test]
    fn test_address_serialize() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"city\":\"Moscow\""));
        assert!(json.contains("\"lat\":\"55.7558\""));
    }

    #[test]
    fn test_address_deserialize() {
        let json = r#"{"city":"Moscow","street":"Lenina","house":"11","lat":"55.7558","lon":"37.6173"}"#;
        let addr: Address = serde_json::from_str(json).unwrap();
        assert_eq!(addr, sample());
    }
}

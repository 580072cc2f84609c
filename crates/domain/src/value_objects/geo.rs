//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Mean Earth radius in kilometres, as used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A captured latitude/longitude fix.
///
/// "No fix" is `Option<GeoPosition>` at every call site; a constructed
/// position is always within valid ranges and immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    /// Create a position without range checking.
    ///
    /// Intended for table constants and test fixtures; external input goes
    /// through [`GeoPosition::try_new`].
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Create a position, rejecting coordinates outside valid ranges.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::validation(format!(
                "latitude out of range: {}",
                latitude
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::validation(format!(
                "longitude out of range: {}",
                longitude
            )));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }
}

/// Great-circle distance between two positions via the haversine formula.
pub fn haversine_km(a: GeoPosition, b: GeoPosition) -> f64 {
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.latitude.to_radians().cos()
            * b.latitude.to_radians().cos()
            * (d_lon / 2.0).sin().powi(2);
    EARTH_RADIUS_KM * 2.0 * h.sqrt().atan2((1.0 - h).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_zero_for_identical_points() {
        let tokyo = GeoPosition::new(35.689521, 139.691704);
        assert!(haversine_km(tokyo, tokyo).abs() < 1e-9);
    }

    #[test]
    fn test_haversine_tokyo_osaka_roughly_400km() {
        let tokyo = GeoPosition::new(35.689521, 139.691704);
        let osaka = GeoPosition::new(34.686316, 135.519711);
        let d = haversine_km(tokyo, osaka);
        assert!((390.0..420.0).contains(&d), "unexpected distance: {}", d);
    }

    #[test]
    fn test_haversine_is_symmetric() {
        let a = GeoPosition::new(43.064359, 141.346814);
        let b = GeoPosition::new(26.212401, 127.680932);
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[test]
    fn test_try_new_rejects_out_of_range() {
        assert!(GeoPosition::try_new(91.0, 0.0).is_err());
        assert!(GeoPosition::try_new(-91.0, 0.0).is_err());
        assert!(GeoPosition::try_new(0.0, 181.0).is_err());
        assert!(GeoPosition::try_new(0.0, -181.0).is_err());
        assert!(GeoPosition::try_new(35.6895, 139.6917).is_ok());
    }
}

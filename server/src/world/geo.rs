//! Geographic coordinates and great-circle distance.

use crate::error::{GameError, Result};

/// Mean earth radius in meters
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A validated WGS84 point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Validate raw coordinates. Zero is a real place, not a sentinel.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite() || !lon.is_finite() || lat.abs() > 90.0 || lon.abs() > 180.0 {
            return Err(GameError::InvalidLocation { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Build from optional request fields
    pub fn from_parts(lat: Option<f64>, lon: Option<f64>) -> Result<Self> {
        let lat = lat.ok_or(GameError::MissingField("lat"))?;
        let lon = lon.ok_or(GameError::MissingField("lon"))?;
        Self::new(lat, lon)
    }

    /// Haversine distance in meters
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let phi1 = self.lat.to_radians();
        let phi2 = other.lat.to_radians();
        let d_phi = (other.lat - self.lat).to_radians();
        let d_lambda = (other.lon - self.lon).to_radians();

        let a = (d_phi / 2.0).sin().powi(2)
            + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_METERS * c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_coordinates_are_valid() {
        let origin = GeoPoint::new(0.0, 0.0).unwrap();
        assert_eq!(origin.lat, 0.0);
        assert!(GeoPoint::new(-33.9, -70.6).is_ok());
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(GeoPoint::new(91.0, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -180.5).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert_eq!(
            GeoPoint::from_parts(None, Some(1.0)),
            Err(GameError::MissingField("lat"))
        );
    }

    #[test]
    fn test_distance() {
        let a = GeoPoint::new(0.0, 0.0).unwrap();
        assert_eq!(a.distance_to(&a), 0.0);

        // One degree of longitude on the equator is ~111.195 km
        let b = GeoPoint::new(0.0, 1.0).unwrap();
        assert!((a.distance_to(&b) - 111_195.0).abs() < 1.0);

        // Symmetric
        let c = GeoPoint::new(14.5995, 120.9842).unwrap();
        let d = GeoPoint::new(14.6000, 120.9850).unwrap();
        assert!((c.distance_to(&d) - d.distance_to(&c)).abs() < 1e-9);
    }
}

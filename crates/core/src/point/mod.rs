//! Geographic points and geodesic distance
//!
//! All coordinates are WGS84 decimal degrees. Distances are measured on the
//! WGS84 ellipsoid (Karney's geodesic algorithm, via `geo::Geodesic`).

use geo::{Distance, Geodesic, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A latitude/longitude pair in decimal degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude, -90 to 90
    pub lat: f64,
    /// Longitude, -180 to 180
    pub lon: f64,
}

impl GeoPoint {
    /// Create a validated point.
    ///
    /// Fails with [`Error::InvalidCoordinate`] for non-finite values or values
    /// outside the WGS84 latitude/longitude ranges.
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        if !lat.is_finite()
            || !lon.is_finite()
            || !(-90.0..=90.0).contains(&lat)
            || !(-180.0..=180.0).contains(&lon)
        {
            return Err(Error::InvalidCoordinate { lat, lon });
        }
        Ok(Self { lat, lon })
    }

    /// Create a point without range checks.
    ///
    /// Intended for compile-time tables whose coordinates are known to be valid.
    pub const fn new_unchecked(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Geodesic distance to another point in kilometres.
    pub fn distance_km(&self, other: &GeoPoint) -> f64 {
        geodesic_distance_km(*self, *other)
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(p: GeoPoint) -> Self {
        // geo points are (x, y) = (lon, lat)
        Point::new(p.lon, p.lat)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Geodesic distance between two points on the WGS84 ellipsoid, in kilometres.
///
/// Returns 0 for identical points and stays finite for antipodal points.
pub fn geodesic_distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    Geodesic::distance(Point::from(a), Point::from(b)) / 1000.0
}

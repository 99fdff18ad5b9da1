//! # SpectraMine Core
//!
//! Core types and I/O for the SpectraMine prospecting toolkit.
//!
//! This crate provides:
//! - `GeoPoint`: WGS84 coordinates with geodesic distance
//! - `Raster<T>`: Generic single-band raster grid
//! - `GeoTransform`: Affine transformation for georeferencing
//! - GeoTIFF I/O for spectral bands

pub mod error;
pub mod io;
pub mod point;
pub mod raster;

pub use error::{Error, Result};
pub use point::{geodesic_distance_km, GeoPoint};
pub use raster::{GeoTransform, Raster, RasterElement};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::point::{geodesic_distance_km, GeoPoint};
    pub use crate::raster::{GeoTransform, Raster, RasterElement};
}

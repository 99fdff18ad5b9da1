//! Imagery analysis for mineral prospecting
//!
//! Local raster counterpart of the remote imagery reduction:
//! - Bands: Sentinel-2 reflectance band set
//! - Indices: per-mineral band ratios
//! - Coverage: share of pixels above a detection threshold, detection masks
//! - Statistics: min/max/mean/p10/p90 and heatmap display range
//! - Scan: all five minerals at once

mod bands;
mod coverage;
mod indices;
mod scan;
mod statistics;

pub use bands::{SpectralBands, S2_REFLECTANCE_SCALE};
pub use coverage::{coverage_percentage, detection_mask};
pub use indices::mineral_index;
pub use scan::{
    scan_mineral, scan_minerals, scan_minerals_with_indices, MineralReading, MineralScan,
};
pub use statistics::{display_range, index_statistics, IndexStats};

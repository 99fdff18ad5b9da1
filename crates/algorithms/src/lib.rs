//! # SpectraMine Algorithms
//!
//! Mineral prospecting logic for SpectraMine.
//!
//! ## Modules
//!
//! - **mineral**: Mineral families, calibration table, registry compatibility
//! - **registry**: Built-in registry of legal mining sites
//! - **proximity**: Nearby and nearest compatible sites
//! - **classification**: Legal mining area vs. potential-deposit grading
//! - **point_query**: Strength of a single clicked index value
//! - **summary**: Confidence, grade and area figures for a coverage value
//! - **imagery**: Spectral indices, coverage and statistics from band rasters
//! - **state**: Immutable analysis session state and its reducer

pub mod classification;
pub mod imagery;
pub mod mineral;
pub mod point_query;
pub mod proximity;
pub mod registry;
pub mod state;
pub mod summary;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::classification::{
        classify, classify_coverage, classify_with_params, ClassificationKind,
        ClassificationResult,
    };
    pub use crate::imagery::{
        coverage_percentage, detection_mask, display_range, index_statistics, mineral_index,
        scan_minerals, IndexStats, MineralReading, SpectralBands,
    };
    pub use crate::mineral::{Mineral, MineralProfile, LOW_SIGNAL_FLOOR};
    pub use crate::point_query::{
        band_strength, query_point, relative_strength, Interest, PointReading, PointStrength,
        ScanParams,
    };
    pub use crate::proximity::{
        find_nearby_and_nearest, find_nearby_and_nearest_with_params, NearbySite,
        ProximityParams, ProximityResult,
    };
    pub use crate::registry::{MiningRegistry, MiningSite};
    pub use crate::state::{AnalysisEvent, AnalysisState, ScanSnapshot};
    pub use crate::summary::{summarize, CoverageSummary, Grade};
    pub use spectramine_core::prelude::*;
}

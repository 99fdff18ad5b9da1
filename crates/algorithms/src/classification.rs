//! Mineral-potential classification
//!
//! Combines a proximity search with a coverage percentage. A compatible
//! legal site within the nearby radius always wins; otherwise the coverage
//! is graded against the mineral's coverage bands:
//!
//! | coverage                      | kind                 |
//! |-------------------------------|----------------------|
//! | `>= high`                     | `HighPotential`      |
//! | `moderate ..high`             | `ModeratePotential`  |
//! | `LOW_SIGNAL_FLOOR ..moderate` | `LowPotential`       |
//! | `< LOW_SIGNAL_FLOOR`          | `LowPotential`       |
//!
//! The two `LowPotential` rows differ only in their label.

use serde::Serialize;
use spectramine_core::GeoPoint;

use crate::mineral::{Mineral, LOW_SIGNAL_FLOOR};
use crate::proximity::{
    find_nearby_and_nearest_with_params, NearbySite, ProximityParams, ProximityResult,
};
use crate::registry::MiningRegistry;

/// Classification outcome category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationKind {
    /// A compatible legal mining site is nearby
    Mining,
    HighPotential,
    ModeratePotential,
    LowPotential,
}

impl ClassificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ClassificationKind::Mining => "mining",
            ClassificationKind::HighPotential => "high_potential",
            ClassificationKind::ModeratePotential => "moderate_potential",
            ClassificationKind::LowPotential => "low_potential",
        }
    }

    /// Ordering used for monotonicity: higher means a stronger natural signal.
    /// `Mining` is not on this scale.
    pub fn severity(self) -> Option<u8> {
        match self {
            ClassificationKind::Mining => None,
            ClassificationKind::LowPotential => Some(0),
            ClassificationKind::ModeratePotential => Some(1),
            ClassificationKind::HighPotential => Some(2),
        }
    }
}

/// Result of classifying one (point, mineral, coverage) triple
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub label: String,
    pub kind: ClassificationKind,
    pub nearby_matches: Vec<NearbySite>,
    pub nearest_distance_km: Option<f64>,
    pub nearest_site_name: Option<String>,
}

/// Grade a coverage percentage against a mineral's bands, ignoring proximity.
pub fn classify_coverage(coverage: f64, mineral: Mineral) -> (ClassificationKind, String) {
    let bands = mineral.profile().coverage_bands;
    let name = mineral.display_name();

    if coverage >= bands.high {
        (
            ClassificationKind::HighPotential,
            format!("High Potential {} Deposits", name),
        )
    } else if coverage >= bands.moderate {
        (
            ClassificationKind::ModeratePotential,
            format!("Moderate Potential {} Deposits", name),
        )
    } else if coverage >= LOW_SIGNAL_FLOOR {
        (
            ClassificationKind::LowPotential,
            format!("Low {} Signature Detected", name),
        )
    } else {
        (
            ClassificationKind::LowPotential,
            format!("No Significant {} Signature", name),
        )
    }
}

/// Classify a location for a mineral with default proximity radii.
pub fn classify(
    point: GeoPoint,
    coverage: f64,
    mineral: Mineral,
    registry: &MiningRegistry,
) -> ClassificationResult {
    classify_with_params(point, coverage, mineral, registry, ProximityParams::default())
}

/// Classify a location for a mineral.
///
/// The full proximity result is always returned alongside the label.
pub fn classify_with_params(
    point: GeoPoint,
    coverage: f64,
    mineral: Mineral,
    registry: &MiningRegistry,
    params: ProximityParams,
) -> ClassificationResult {
    let proximity = find_nearby_and_nearest_with_params(point, mineral, registry, params);

    let (kind, label) = if proximity.has_nearby() {
        (ClassificationKind::Mining, "Legal Mining Area".to_string())
    } else {
        classify_coverage(coverage, mineral)
    };

    tracing::debug!(
        mineral = mineral.key(),
        coverage,
        kind = kind.as_str(),
        "classified location"
    );

    let ProximityResult {
        nearby,
        nearest_distance_km,
        nearest_site_name,
    } = proximity;

    ClassificationResult {
        label,
        kind,
        nearby_matches: nearby,
        nearest_distance_km,
        nearest_site_name,
    }
}

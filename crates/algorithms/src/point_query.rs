//! Single-point index readings
//!
//! Grades the spectral index value at one clicked location. This is an
//! intensity scale for one pixel and is unrelated to the coverage bands used
//! by [`crate::classification`], which grade an area fraction.

use serde::Serialize;
use spectramine_core::GeoPoint;

use crate::mineral::Mineral;

/// Relative strength reaches 100% at this index value
pub const RELATIVE_STRENGTH_CAP: f64 = 3.5;

/// Area mean assumed when the scan carries no statistics
pub const DEFAULT_AREA_MEAN: f64 = 1.5;

/// Parameters of the analysis region around a scan centre
#[derive(Debug, Clone, Copy)]
pub struct ScanParams {
    /// Radius of the analysed disc. Default: 10 km
    pub analysis_radius_km: f64,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            analysis_radius_km: 10.0,
        }
    }
}

/// Qualitative strength of a single index value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PointStrength {
    BelowThreshold,
    MediumLow,
    Medium,
    High,
    VeryHigh,
}

impl PointStrength {
    pub fn label(self) -> &'static str {
        match self {
            PointStrength::BelowThreshold => "Below Threshold",
            PointStrength::MediumLow => "Medium-Low",
            PointStrength::Medium => "Medium",
            PointStrength::High => "High",
            PointStrength::VeryHigh => "Very High",
        }
    }

    pub fn is_detection(self) -> bool {
        self != PointStrength::BelowThreshold
    }
}

/// Band a single index value. Boundary values belong to the higher band.
pub fn band_strength(value: f64, threshold: f64) -> PointStrength {
    // NaN is never a detection
    if value.is_nan() || value <= threshold {
        PointStrength::BelowThreshold
    } else if value >= 2.5 {
        PointStrength::VeryHigh
    } else if value >= 2.0 {
        PointStrength::High
    } else if value >= 1.6 {
        PointStrength::Medium
    } else {
        PointStrength::MediumLow
    }
}

/// Percentage of the way from `threshold` to `cap`, at most 100.
///
/// `None` when the value does not exceed the threshold or is NaN.
pub fn relative_strength(value: f64, threshold: f64, cap: f64) -> Option<f64> {
    if value.is_nan() || value <= threshold {
        return None;
    }
    let pct = (value - threshold) / (cap - threshold) * 100.0;
    Some(pct.min(100.0))
}

/// Prospecting priority of a single reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Interest {
    Natural,
    Detected,
    Moderate,
    HighPriority,
    PrimeTarget,
}

impl Interest {
    pub fn from_value(value: f64, threshold: f64) -> Self {
        if value >= 2.5 {
            Interest::PrimeTarget
        } else if value >= 2.0 {
            Interest::HighPriority
        } else if value >= 1.6 {
            Interest::Moderate
        } else if value >= threshold {
            Interest::Detected
        } else {
            Interest::Natural
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Interest::PrimeTarget => "Prime Target",
            Interest::HighPriority => "High Priority",
            Interest::Moderate => "Moderate Interest",
            Interest::Detected => "Detected",
            Interest::Natural => "Natural",
        }
    }
}

/// Evaluation of an index value at a point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointValue {
    pub value: f64,
    pub threshold: f64,
    pub strength: PointStrength,
    pub relative_strength: Option<f64>,
    /// `value - area mean`
    pub deviation_from_mean: f64,
    pub interest: Interest,
}

/// Reading at a clicked location relative to a scan centre
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointReading {
    pub point: GeoPoint,
    pub mineral: Mineral,
    pub distance_km: f64,
    pub within_radius: bool,
    /// `None` outside the analysis radius or when no value was available
    pub reading: Option<PointValue>,
}

/// Evaluate an index value without any location context.
pub fn evaluate_value(value: f64, mineral: Mineral, area_mean: Option<f64>) -> PointValue {
    let threshold = mineral.profile().detection_threshold;
    PointValue {
        value,
        threshold,
        strength: band_strength(value, threshold),
        relative_strength: relative_strength(value, threshold, RELATIVE_STRENGTH_CAP),
        deviation_from_mean: value - area_mean.unwrap_or(DEFAULT_AREA_MEAN),
        interest: Interest::from_value(value, threshold),
    }
}

/// Evaluate the index value at `point` for a scan centred on `center`.
///
/// Points beyond the analysis radius are not evaluated.
pub fn query_point(
    center: GeoPoint,
    point: GeoPoint,
    value: Option<f64>,
    mineral: Mineral,
    area_mean: Option<f64>,
    params: ScanParams,
) -> PointReading {
    let distance_km = center.distance_km(&point);
    let within_radius = distance_km <= params.analysis_radius_km;

    let reading = if within_radius {
        value.map(|v| evaluate_value(v, mineral, area_mean))
    } else {
        None
    };

    PointReading {
        point,
        mineral,
        distance_km,
        within_radius,
        reading,
    }
}

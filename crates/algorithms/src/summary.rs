//! Coverage summary figures
//!
//! Confidence and grade are two more readings of a coverage percentage,
//! shown next to the classification. They use their own scales and do not
//! feed back into [`crate::classification`].

use serde::Serialize;
use std::f64::consts::PI;

use crate::mineral::Mineral;
use crate::point_query::ScanParams;

/// Coverage at which detection confidence saturates
const FULL_CONFIDENCE_COVERAGE: f64 = 30.0;

/// Detection confidence tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum ConfidenceTier {
    Limited,
    Weak,
    Significant,
    Strong,
}

impl ConfidenceTier {
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceTier::Strong => "Strong",
            ConfidenceTier::Significant => "Significant",
            ConfidenceTier::Weak => "Weak",
            ConfidenceTier::Limited => "Limited",
        }
    }
}

/// Deposit grade implied by coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Grade {
    Trace,
    LowGrade,
    ModerateGrade,
    HighGrade,
}

impl Grade {
    pub fn label(self) -> &'static str {
        match self {
            Grade::HighGrade => "HIGH GRADE",
            Grade::ModerateGrade => "MODERATE GRADE",
            Grade::LowGrade => "LOW GRADE",
            Grade::Trace => "TRACE AMOUNTS",
        }
    }
}

/// Confidence in `[0, 1]`: coverage relative to 30%, saturating.
pub fn detection_confidence(coverage: f64) -> f64 {
    (coverage / FULL_CONFIDENCE_COVERAGE).clamp(0.0, 1.0)
}

pub fn confidence_tier(confidence: f64) -> ConfidenceTier {
    if confidence >= 0.75 {
        ConfidenceTier::Strong
    } else if confidence >= 0.5 {
        ConfidenceTier::Significant
    } else if confidence >= 0.25 {
        ConfidenceTier::Weak
    } else {
        ConfidenceTier::Limited
    }
}

/// Grade coverage; every edge is exclusive.
pub fn grade(coverage: f64) -> Grade {
    if coverage > 20.0 {
        Grade::HighGrade
    } else if coverage > 10.0 {
        Grade::ModerateGrade
    } else if coverage > 3.0 {
        Grade::LowGrade
    } else {
        Grade::Trace
    }
}

/// Area of the analysis disc in km²
pub fn analysis_area_km2(params: ScanParams) -> f64 {
    PI * params.analysis_radius_km * params.analysis_radius_km
}

/// All summary figures for one mineral
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageSummary {
    pub mineral: Mineral,
    pub coverage: f64,
    pub confidence: f64,
    pub confidence_tier: ConfidenceTier,
    pub grade: Grade,
    /// Estimated area showing the signature, km²
    pub detected_area_km2: f64,
}

pub fn summarize(mineral: Mineral, coverage: f64, params: ScanParams) -> CoverageSummary {
    let confidence = detection_confidence(coverage);
    CoverageSummary {
        mineral,
        coverage,
        confidence,
        confidence_tier: confidence_tier(confidence),
        grade: grade(coverage),
        detected_area_km2: analysis_area_km2(params) * coverage.clamp(0.0, 100.0) / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_confidence_saturates() {
        assert_relative_eq!(detection_confidence(15.0), 0.5);
        assert_eq!(detection_confidence(30.0), 1.0);
        assert_eq!(detection_confidence(75.0), 1.0);
        assert_eq!(detection_confidence(0.0), 0.0);
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(confidence_tier(detection_confidence(22.5)), ConfidenceTier::Strong);
        assert_eq!(confidence_tier(detection_confidence(15.0)), ConfidenceTier::Significant);
        assert_eq!(confidence_tier(detection_confidence(7.5)), ConfidenceTier::Weak);
        assert_eq!(confidence_tier(detection_confidence(7.4)), ConfidenceTier::Limited);
    }

    #[test]
    fn test_grade_edges_exclusive() {
        assert_eq!(grade(20.0), Grade::ModerateGrade);
        assert_eq!(grade(20.01), Grade::HighGrade);
        assert_eq!(grade(10.0), Grade::LowGrade);
        assert_eq!(grade(3.0), Grade::Trace);
        assert_eq!(grade(3.1), Grade::LowGrade);
    }

    #[test]
    fn test_analysis_area() {
        let area = analysis_area_km2(ScanParams::default());
        assert_relative_eq!(area, 314.159, epsilon = 1e-3);
    }

    #[test]
    fn test_summarize() {
        let s = summarize(Mineral::Copper, 50.0, ScanParams::default());
        assert_eq!(s.grade, Grade::HighGrade);
        assert_eq!(s.confidence_tier, ConfidenceTier::Strong);
        assert_relative_eq!(s.detected_area_km2, 157.0796, epsilon = 1e-3);
    }
}

//! Fixed per-mineral calibration table

use super::Mineral;

/// Coverage percentage below which a region shows no significant signature
pub const LOW_SIGNAL_FLOOR: f64 = 0.3;

/// Coverage percentage edges (inclusive lower bounds) for potential grading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverageBands {
    /// Coverage at or above this is high potential
    pub high: f64,
    /// Coverage at or above this (and below `high`) is moderate potential
    pub moderate: f64,
}

/// Calibration of one mineral family
#[derive(Debug, Clone, PartialEq)]
pub struct MineralProfile {
    pub mineral: Mineral,
    /// Substrings matched (case-insensitively) against registry mineral types
    pub accepted_type_tokens: &'static [&'static str],
    /// Index value above which a pixel shows the mineral
    pub detection_threshold: f64,
    pub coverage_bands: CoverageBands,
    /// Upper end of the heatmap stretch
    pub display_cap: f64,
}

// Iron's Red/Blue ratio saturates readily, so it gets tight bands; the noisier
// aluminum and copper indices get more lenient ones.
static PROFILES: [MineralProfile; 5] = [
    MineralProfile {
        mineral: Mineral::Iron,
        accepted_type_tokens: &["Iron Ore", "Metallic"],
        detection_threshold: 1.3,
        coverage_bands: CoverageBands { high: 15.0, moderate: 5.0 },
        display_cap: 3.5,
    },
    MineralProfile {
        mineral: Mineral::Aluminum,
        accepted_type_tokens: &["Bauxite", "Aluminum", "Metallic"],
        detection_threshold: 1.2,
        coverage_bands: CoverageBands { high: 12.0, moderate: 3.0 },
        display_cap: 2.5,
    },
    MineralProfile {
        mineral: Mineral::Copper,
        accepted_type_tokens: &["Copper", "Metallic", "Polymetallic"],
        detection_threshold: 1.5,
        coverage_bands: CoverageBands { high: 10.0, moderate: 2.0 },
        display_cap: 3.0,
    },
    MineralProfile {
        mineral: Mineral::Limestone,
        accepted_type_tokens: &["Limestone"],
        detection_threshold: 1.2,
        coverage_bands: CoverageBands { high: 20.0, moderate: 8.0 },
        display_cap: 3.0,
    },
    MineralProfile {
        mineral: Mineral::Manganese,
        accepted_type_tokens: &["Manganese"],
        detection_threshold: 0.5,
        coverage_bands: CoverageBands { high: 8.0, moderate: 2.5 },
        display_cap: 1.5,
    },
];

/// Calibration profile for a mineral
pub fn profile(mineral: Mineral) -> &'static MineralProfile {
    let idx = match mineral {
        Mineral::Iron => 0,
        Mineral::Aluminum => 1,
        Mineral::Copper => 2,
        Mineral::Limestone => 3,
        Mineral::Manganese => 4,
    };
    &PROFILES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_indexed_by_mineral() {
        for m in Mineral::ALL {
            assert_eq!(profile(m).mineral, m);
        }
    }

    #[test]
    fn test_calibration_table() {
        let expected = [
            (Mineral::Iron, 1.3, 15.0, 5.0),
            (Mineral::Aluminum, 1.2, 12.0, 3.0),
            (Mineral::Copper, 1.5, 10.0, 2.0),
            (Mineral::Limestone, 1.2, 20.0, 8.0),
            (Mineral::Manganese, 0.5, 8.0, 2.5),
        ];
        for (m, threshold, high, moderate) in expected {
            let p = profile(m);
            assert_eq!(p.detection_threshold, threshold, "{}", m);
            assert_eq!(p.coverage_bands.high, high, "{}", m);
            assert_eq!(p.coverage_bands.moderate, moderate, "{}", m);
        }
    }

    #[test]
    fn test_bands_are_ordered_above_floor() {
        for m in Mineral::ALL {
            let bands = profile(m).coverage_bands;
            assert!(bands.high > bands.moderate);
            assert!(bands.moderate > LOW_SIGNAL_FLOOR);
            assert!(profile(m).display_cap > profile(m).detection_threshold);
        }
    }
}

//! Index statistics and heatmap stretch

use serde::{Deserialize, Serialize};
use spectramine_core::raster::Raster;

use crate::mineral::MineralProfile;

/// Summary of a spectral index over its valid pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndexStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// 10th percentile
    pub p10: f64,
    /// 90th percentile
    pub p90: f64,
    pub valid_count: usize,
}

/// Compute statistics over valid pixels, `None` if there are none.
///
/// Percentiles interpolate linearly between the closest ranks.
pub fn index_statistics(index: &Raster<f64>) -> Option<IndexStats> {
    let mut values: Vec<f64> = index.valid_values().filter(|v| v.is_finite()).collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(|a, b| a.total_cmp(b));

    let n = values.len();
    let sum: f64 = values.iter().sum();

    Some(IndexStats {
        min: values[0],
        max: values[n - 1],
        mean: sum / n as f64,
        p10: percentile_sorted(&values, 10.0),
        p90: percentile_sorted(&values, 90.0),
        valid_count: n,
    })
}

/// Percentile of an ascending, non-empty slice
fn percentile_sorted(sorted: &[f64], pct: f64) -> f64 {
    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * frac
}

/// Value range for colouring a mineral's heatmap.
///
/// Starts at the detection threshold (or the 10th percentile if higher) and
/// ends at the 90th percentile, capped by the profile's display cap. Missing
/// statistics fall back to `(threshold, cap)`.
pub fn display_range(stats: Option<&IndexStats>, profile: &MineralProfile) -> (f64, f64) {
    let threshold = profile.detection_threshold;
    let cap = profile.display_cap;

    let p10 = stats.map_or(threshold, |s| s.p10);
    let p90 = stats.map_or(cap, |s| s.p90);

    (threshold.max(p10), p90.min(cap))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mineral::Mineral;
    use approx::assert_relative_eq;

    fn index(values: Vec<f64>) -> Raster<f64> {
        let n = values.len();
        let mut r = Raster::from_vec(values, 1, n).unwrap();
        r.set_nodata(Some(f64::NAN));
        r
    }

    #[test]
    fn test_basic_stats() {
        // 1.0 .. 2.0 in steps of 0.1 (11 values)
        let values: Vec<f64> = (0..=10).map(|i| 1.0 + i as f64 * 0.1).collect();
        let stats = index_statistics(&index(values)).unwrap();
        assert_relative_eq!(stats.min, 1.0);
        assert_relative_eq!(stats.max, 2.0);
        assert_relative_eq!(stats.mean, 1.5, epsilon = 1e-12);
        assert_relative_eq!(stats.p10, 1.1, epsilon = 1e-12);
        assert_relative_eq!(stats.p90, 1.9, epsilon = 1e-12);
        assert_eq!(stats.valid_count, 11);
    }

    #[test]
    fn test_percentile_interpolates() {
        let stats = index_statistics(&index(vec![4.0, 1.0, 3.0, 2.0])).unwrap();
        // rank 0.3 between 1.0 and 2.0
        assert_relative_eq!(stats.p10, 1.3, epsilon = 1e-12);
        assert_relative_eq!(stats.p90, 3.7, epsilon = 1e-12);
    }

    #[test]
    fn test_stats_skip_nodata() {
        let stats = index_statistics(&index(vec![f64::NAN, 2.0, f64::NAN])).unwrap();
        assert_eq!(stats.valid_count, 1);
        assert_eq!(stats.p10, 2.0);
        assert!(index_statistics(&index(vec![f64::NAN; 3])).is_none());
    }

    #[test]
    fn test_display_range_clamps() {
        let profile = Mineral::Iron.profile();
        let stats = IndexStats {
            min: 0.8,
            max: 5.0,
            mean: 1.6,
            p10: 1.0,
            p90: 4.2,
            valid_count: 100,
        };
        assert_eq!(display_range(Some(&stats), profile), (1.3, 3.5));

        let narrow = IndexStats { p10: 1.5, p90: 2.2, ..stats };
        assert_eq!(display_range(Some(&narrow), profile), (1.5, 2.2));
    }

    #[test]
    fn test_display_range_without_stats() {
        assert_eq!(display_range(None, Mineral::Manganese.profile()), (0.5, 1.5));
        assert_eq!(display_range(None, Mineral::Aluminum.profile()), (1.2, 2.5));
    }
}

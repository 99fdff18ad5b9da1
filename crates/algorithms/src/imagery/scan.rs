//! All-mineral scan of a band set

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use spectramine_core::raster::Raster;
use spectramine_core::Result;

use super::bands::SpectralBands;
use super::coverage::coverage_percentage;
use super::indices::mineral_index;
use super::statistics::{display_range, index_statistics, IndexStats};
use crate::mineral::Mineral;

/// Per-mineral reduction of a scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MineralReading {
    pub mineral: Mineral,
    /// Percentage of valid pixels above the detection threshold
    pub coverage: f64,
    pub stats: Option<IndexStats>,
}

impl MineralReading {
    /// Heatmap value range for this reading
    pub fn display_range(&self) -> (f64, f64) {
        display_range(self.stats.as_ref(), self.mineral.profile())
    }
}

/// A reading together with the index raster it was reduced from
#[derive(Debug, Clone)]
pub struct MineralScan {
    pub reading: MineralReading,
    pub index: Raster<f64>,
}

/// Compute index, coverage and statistics of one mineral
pub fn scan_mineral(bands: &SpectralBands, mineral: Mineral) -> Result<MineralScan> {
    let index = mineral_index(bands, mineral)?;
    let coverage = coverage_percentage(&index, mineral.profile().detection_threshold);
    let stats = index_statistics(&index);

    tracing::debug!(
        mineral = mineral.key(),
        coverage,
        valid = stats.map_or(0, |s| s.valid_count),
        "mineral index reduced"
    );

    Ok(MineralScan {
        reading: MineralReading {
            mineral,
            coverage,
            stats,
        },
        index,
    })
}

/// Scan every mineral in canonical order, keeping the index rasters.
pub fn scan_minerals_with_indices(bands: &SpectralBands) -> Result<Vec<MineralScan>> {
    Mineral::ALL
        .par_iter()
        .map(|&mineral| scan_mineral(bands, mineral))
        .collect()
}

/// Scan every mineral in canonical order.
pub fn scan_minerals(bands: &SpectralBands) -> Result<Vec<MineralReading>> {
    Ok(scan_minerals_with_indices(bands)?
        .into_iter()
        .map(|scan| scan.reading)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn band(values: &[f64]) -> Raster<f64> {
        let mut r = Raster::from_vec(values.to_vec(), 2, 2).unwrap();
        r.set_nodata(Some(f64::NAN));
        r
    }

    #[test]
    fn test_scan_minerals_order_and_coverage() {
        // Two ferric pixels (red/blue = 2.0), two background (1.0)
        let bands = SpectralBands::new(
            band(&[0.20, 0.20, 0.10, 0.10]),
            band(&[0.10; 4]),
            band(&[0.10; 4]),
            band(&[0.20; 4]),
            band(&[0.20; 4]),
            band(&[0.20; 4]),
        )
        .unwrap();

        let readings = scan_minerals(&bands).unwrap();
        let order: Vec<Mineral> = readings.iter().map(|r| r.mineral).collect();
        assert_eq!(order, Mineral::ALL.to_vec());

        let iron = &readings[0];
        assert_eq!(iron.coverage, 50.0);
        let stats = iron.stats.unwrap();
        assert!((stats.max - 2.0).abs() < 1e-12);
        assert_eq!(stats.valid_count, 4);
    }

    #[test]
    fn test_scan_with_no_valid_pixels() {
        let empty = band(&[f64::NAN; 4]);
        let bands = SpectralBands::new(
            empty.clone(),
            empty.clone(),
            empty.clone(),
            empty.clone(),
            empty.clone(),
            empty,
        )
        .unwrap();
        for reading in scan_minerals(&bands).unwrap() {
            assert_eq!(reading.coverage, 0.0);
            assert!(reading.stats.is_none());
            let profile = reading.mineral.profile();
            assert_eq!(
                reading.display_range(),
                (profile.detection_threshold, profile.display_cap)
            );
        }
    }
}

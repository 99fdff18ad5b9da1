//! Mineral spectral indices
//!
//! Band-ratio indices computed per pixel from a [`SpectralBands`] set.
//! Pixels where any used band is no-data, or where a denominator vanishes,
//! are set to NaN.

use ndarray::Array2;
use rayon::prelude::*;
use spectramine_core::raster::Raster;
use spectramine_core::{Error, Result};

use super::bands::{check_dimensions, SpectralBands};
use crate::mineral::Mineral;

/// Offset added to SWIR denominators of the limestone and manganese ratios
const DENOMINATOR_OFFSET: f64 = 1e-6;

/// Compute the spectral index of a mineral.
///
/// - iron: `Red / Blue`
/// - aluminum: `SWIR1 / SWIR2`
/// - copper: `(Red / Green) * (NIR / Red)`
/// - limestone: `SWIR1 / (SWIR2 + 1e-6)`
/// - manganese: `Red / (SWIR1 + 1e-6)`
pub fn mineral_index(bands: &SpectralBands, mineral: Mineral) -> Result<Raster<f64>> {
    let b = bands;
    match mineral {
        Mineral::Iron => ratio(&b.red, &b.blue, 0.0),
        Mineral::Aluminum => ratio(&b.swir1, &b.swir2, 0.0),
        Mineral::Copper => copper_index(&b.red, &b.green, &b.nir),
        Mineral::Limestone => ratio(&b.swir1, &b.swir2, DENOMINATOR_OFFSET),
        Mineral::Manganese => ratio(&b.red, &b.swir1, DENOMINATOR_OFFSET),
    }
}

/// `numerator / (denominator + offset)`
fn ratio(numerator: &Raster<f64>, denominator: &Raster<f64>, offset: f64) -> Result<Raster<f64>> {
    check_dimensions(numerator, denominator)?;

    let (rows, cols) = numerator.shape();
    let nodata_n = numerator.nodata();
    let nodata_d = denominator.nodata();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![f64::NAN; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let n = unsafe { numerator.get_unchecked(row, col) };
                let d = unsafe { denominator.get_unchecked(row, col) };

                if is_nodata_f64(n, nodata_n) || is_nodata_f64(d, nodata_d) {
                    continue;
                }

                let d = d + offset;
                if d.abs() < 1e-10 {
                    continue;
                }

                *out = n / d;
            }
            row_data
        })
        .collect();

    build_output(numerator, rows, cols, data)
}

/// `(Red / Green) * (NIR / Red)`
fn copper_index(red: &Raster<f64>, green: &Raster<f64>, nir: &Raster<f64>) -> Result<Raster<f64>> {
    check_dimensions(red, green)?;
    check_dimensions(red, nir)?;

    let (rows, cols) = red.shape();
    let (nd_r, nd_g, nd_n) = (red.nodata(), green.nodata(), nir.nodata());

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![f64::NAN; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let r = unsafe { red.get_unchecked(row, col) };
                let g = unsafe { green.get_unchecked(row, col) };
                let n = unsafe { nir.get_unchecked(row, col) };

                if is_nodata_f64(r, nd_r) || is_nodata_f64(g, nd_g) || is_nodata_f64(n, nd_n) {
                    continue;
                }
                if g.abs() < 1e-10 || r.abs() < 1e-10 {
                    continue;
                }

                *out = (r / g) * (n / r);
            }
            row_data
        })
        .collect();

    build_output(red, rows, cols, data)
}

fn is_nodata_f64(value: f64, nodata: Option<f64>) -> bool {
    if value.is_nan() {
        return true;
    }
    match nodata {
        Some(nd) => (value - nd).abs() < f64::EPSILON,
        None => false,
    }
}

fn build_output(
    template: &Raster<f64>,
    rows: usize,
    cols: usize,
    data: Vec<f64>,
) -> Result<Raster<f64>> {
    let mut output = template.with_same_meta::<f64>(rows, cols);
    output.set_nodata(Some(f64::NAN));
    *output.data_mut() =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectramine_core::GeoTransform;

    fn make_band(value: f64) -> Raster<f64> {
        let mut r = Raster::filled(4, 4, value);
        r.set_transform(GeoTransform::new(0.0, 4.0, 1.0, -1.0));
        r
    }

    /// Typical hematite-stained soil: red-bright, blue-dark
    fn ferric_bands() -> SpectralBands {
        SpectralBands::new(
            make_band(0.24),
            make_band(0.15),
            make_band(0.10),
            make_band(0.30),
            make_band(0.36),
            make_band(0.24),
        )
        .unwrap()
    }

    fn at(r: &Raster<f64>) -> f64 {
        r.get(1, 2).unwrap()
    }

    #[test]
    fn test_iron_index() {
        let idx = mineral_index(&ferric_bands(), Mineral::Iron).unwrap();
        assert!((at(&idx) - 2.4).abs() < 1e-10, "got {}", at(&idx));
    }

    #[test]
    fn test_aluminum_index() {
        let idx = mineral_index(&ferric_bands(), Mineral::Aluminum).unwrap();
        assert!((at(&idx) - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_copper_index_reduces_to_nir_over_green() {
        let idx = mineral_index(&ferric_bands(), Mineral::Copper).unwrap();
        assert!((at(&idx) - 0.30 / 0.15).abs() < 1e-10);
    }

    #[test]
    fn test_limestone_and_manganese_offsets() {
        let bands = ferric_bands();
        let ls = mineral_index(&bands, Mineral::Limestone).unwrap();
        assert!((at(&ls) - 0.36 / (0.24 + 1e-6)).abs() < 1e-12);
        let mn = mineral_index(&bands, Mineral::Manganese).unwrap();
        assert!((at(&mn) - 0.24 / (0.36 + 1e-6)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominator_is_nan() {
        let mut bands = ferric_bands();
        bands.blue = make_band(0.0);
        let idx = mineral_index(&bands, Mineral::Iron).unwrap();
        assert!(at(&idx).is_nan());

        // The offset keeps a zero SWIR2 finite for limestone
        bands.swir2 = make_band(0.0);
        let ls = mineral_index(&bands, Mineral::Limestone).unwrap();
        assert!(at(&ls).is_finite());
    }

    #[test]
    fn test_nodata_propagates() {
        let mut bands = ferric_bands();
        bands.red.set(1, 2, f64::NAN).unwrap();
        for m in [Mineral::Iron, Mineral::Copper, Mineral::Manganese] {
            let idx = mineral_index(&bands, m).unwrap();
            assert!(at(&idx).is_nan(), "{} should be NaN", m);
        }
        let al = mineral_index(&bands, Mineral::Aluminum).unwrap();
        assert!(!at(&al).is_nan());
    }

    #[test]
    fn test_output_keeps_georeference() {
        let idx = mineral_index(&ferric_bands(), Mineral::Iron).unwrap();
        assert_eq!(idx.shape(), (4, 4));
        assert_eq!(idx.transform().origin_y, 4.0);
        assert!(idx.nodata().unwrap().is_nan());
    }
}

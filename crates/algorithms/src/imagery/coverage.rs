//! Detection coverage and masks

use ndarray::Array2;
use rayon::prelude::*;
use spectramine_core::raster::Raster;
use spectramine_core::{Error, Result};

/// Percentage (0 to 100) of valid pixels whose index is strictly above `threshold`.
///
/// A raster with no valid pixel has no data, reported as 0.
pub fn coverage_percentage(index: &Raster<f64>, threshold: f64) -> f64 {
    let (valid, detected) = index
        .valid_values()
        .fold((0usize, 0usize), |(valid, detected), v| {
            (valid + 1, detected + usize::from(v > threshold))
        });

    if valid == 0 {
        return 0.0;
    }
    detected as f64 / valid as f64 * 100.0
}

/// Keep only pixels strictly above `threshold`; everything else becomes NaN.
pub fn detection_mask(index: &Raster<f64>, threshold: f64) -> Result<Raster<f64>> {
    let (rows, cols) = index.shape();
    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![f64::NAN; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let v = unsafe { index.get_unchecked(row, col) };
                if index.is_nodata(v) {
                    continue;
                }
                if v > threshold {
                    *out = v;
                }
            }
            row_data
        })
        .collect();

    let mut output = index.with_same_meta::<f64>(rows, cols);
    output.set_nodata(Some(f64::NAN));
    *output.data_mut() =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(output)
}

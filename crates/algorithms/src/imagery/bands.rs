//! Sentinel-2 surface reflectance band set

use ndarray::Array2;
use rayon::prelude::*;
use spectramine_core::raster::{Raster, RasterElement};
use spectramine_core::{Error, Result};

/// Sentinel-2 L2A digital numbers per unit of reflectance
pub const S2_REFLECTANCE_SCALE: f64 = 10_000.0;

/// The six bands the mineral indices draw on, as surface reflectance.
///
/// | field   | Sentinel-2 band |
/// |---------|-----------------|
/// | `red`   | B4              |
/// | `green` | B3              |
/// | `blue`  | B2              |
/// | `nir`   | B8              |
/// | `swir1` | B11             |
/// | `swir2` | B12             |
#[derive(Debug, Clone)]
pub struct SpectralBands {
    pub red: Raster<f64>,
    pub green: Raster<f64>,
    pub blue: Raster<f64>,
    pub nir: Raster<f64>,
    pub swir1: Raster<f64>,
    pub swir2: Raster<f64>,
}

impl SpectralBands {
    /// Assemble a band set; all bands must share one shape.
    pub fn new(
        red: Raster<f64>,
        green: Raster<f64>,
        blue: Raster<f64>,
        nir: Raster<f64>,
        swir1: Raster<f64>,
        swir2: Raster<f64>,
    ) -> Result<Self> {
        for band in [&green, &blue, &nir, &swir1, &swir2] {
            check_dimensions(&red, band)?;
        }
        Ok(Self {
            red,
            green,
            blue,
            nir,
            swir1,
            swir2,
        })
    }

    /// Build reflectance bands from raw digital numbers divided by `scale`.
    ///
    /// No-data cells become NaN.
    pub fn from_digital_numbers<T: RasterElement>(
        red: &Raster<T>,
        green: &Raster<T>,
        blue: &Raster<T>,
        nir: &Raster<T>,
        swir1: &Raster<T>,
        swir2: &Raster<T>,
        scale: f64,
    ) -> Result<Self> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "scale",
                value: scale.to_string(),
                reason: "must be a positive finite number".to_string(),
            });
        }
        Self::new(
            to_reflectance(red, scale)?,
            to_reflectance(green, scale)?,
            to_reflectance(blue, scale)?,
            to_reflectance(nir, scale)?,
            to_reflectance(swir1, scale)?,
            to_reflectance(swir2, scale)?,
        )
    }

    /// Shape shared by every band
    pub fn shape(&self) -> (usize, usize) {
        self.red.shape()
    }
}

fn to_reflectance<T: RasterElement>(band: &Raster<T>, scale: f64) -> Result<Raster<f64>> {
    let (rows, cols) = band.shape();
    let nodata = band.nodata();

    let data: Vec<f64> = (0..rows)
        .into_par_iter()
        .flat_map(|row| {
            let mut row_data = vec![f64::NAN; cols];
            for (col, out) in row_data.iter_mut().enumerate() {
                let v = unsafe { band.get_unchecked(row, col) };
                if v.is_nodata(nodata) {
                    continue;
                }
                if let Some(dn) = RasterElement::to_f64(v) {
                    *out = dn / scale;
                }
            }
            row_data
        })
        .collect();

    let mut output = band.with_same_meta::<f64>(rows, cols);
    output.set_nodata(Some(f64::NAN));
    *output.data_mut() =
        Array2::from_shape_vec((rows, cols), data).map_err(|e| Error::Other(e.to_string()))?;
    Ok(output)
}

pub(crate) fn check_dimensions(a: &Raster<f64>, b: &Raster<f64>) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(Error::SizeMismatch {
            er: a.rows(),
            ec: a.cols(),
            ar: b.rows(),
            ac: b.cols(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectramine_core::GeoTransform;

    fn dn_band(value: u16) -> Raster<u16> {
        let mut r = Raster::filled(3, 3, value);
        r.set_transform(GeoTransform::new(81.0, 19.0, 0.0001, -0.0001));
        r
    }

    #[test]
    fn test_from_digital_numbers_scales() {
        let bands = SpectralBands::from_digital_numbers(
            &dn_band(1200),
            &dn_band(900),
            &dn_band(600),
            &dn_band(2500),
            &dn_band(3000),
            &dn_band(2000),
            S2_REFLECTANCE_SCALE,
        )
        .unwrap();
        assert!((bands.red.get(1, 1).unwrap() - 0.12).abs() < 1e-12);
        assert!((bands.swir2.get(0, 0).unwrap() - 0.2).abs() < 1e-12);
        assert_eq!(bands.red.transform().origin_x, 81.0);
    }

    #[test]
    fn test_dn_nodata_becomes_nan() {
        let mut red = dn_band(1200);
        red.set(0, 0, 0).unwrap();
        red.set_nodata(Some(0));
        let other = dn_band(1000);
        let bands =
            SpectralBands::from_digital_numbers(&red, &other, &other, &other, &other, &other, 1e4)
                .unwrap();
        assert!(bands.red.get(0, 0).unwrap().is_nan());
        assert!(!bands.red.get(0, 1).unwrap().is_nan());
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Raster::<f64>::filled(3, 3, 0.1);
        let b = Raster::<f64>::filled(3, 4, 0.1);
        let result = SpectralBands::new(a.clone(), a.clone(), a.clone(), a.clone(), a, b);
        assert!(matches!(result, Err(Error::SizeMismatch { .. })));
    }

    #[test]
    fn test_invalid_scale() {
        let b = dn_band(100);
        let result = SpectralBands::from_digital_numbers(&b, &b, &b, &b, &b, &b, 0.0);
        assert!(matches!(result, Err(Error::InvalidParameter { name: "scale", .. })));
    }
}

use crate::errors::Result;
use crate::raster::metrics::{cell_area_hectares, human_readable_size, uncompressed_size_bytes};
use crate::raster::PixelType;

/// Descriptive metadata of a raster dataset, as reported by the raster backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterMetadata {
    pub cols: usize,
    pub rows: usize,
    pub bands: usize,
    pub pixel_type: PixelType,
    /// W-E pixel resolution.
    pub x_res: f64,
    /// N-S pixel resolution, positive for a North-up image.
    pub y_res: f64,
    /// Value of the `+units` token of the dataset's proj4 string.
    pub linear_unit: String,
    pub nodata: Option<f64>,
}

impl RasterMetadata {
    pub fn cell_area_hectares(&self) -> Result<f64> {
        cell_area_hectares(self.x_res, self.y_res, &self.linear_unit)
    }

    pub fn uncompressed_size_bytes(&self) -> Result<u64> {
        uncompressed_size_bytes(self.cols, self.rows, self.bands, self.pixel_type)
    }

    /// Uncompressed size formatted like `"1.23 GB"`.
    pub fn uncompressed_size(&self) -> Result<String> {
        let bytes = self.uncompressed_size_bytes()?;
        human_readable_size(i64::try_from(bytes).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RasterError;

    fn landsat_tile() -> RasterMetadata {
        RasterMetadata {
            cols: 7981,
            rows: 7971,
            bands: 1,
            pixel_type: PixelType::UInt16,
            x_res: 30.0,
            y_res: 30.0,
            linear_unit: "m".to_string(),
            nodata: Some(0.0),
        }
    }

    #[test]
    fn derived_metrics() {
        let meta = landsat_tile();
        assert!((meta.cell_area_hectares().unwrap() - 0.09).abs() < 1e-12);
        assert_eq!(meta.uncompressed_size_bytes().unwrap(), 7981 * 7971 * 2);
        assert_eq!(meta.uncompressed_size().unwrap(), "121.34 MB");
    }

    #[test]
    fn geographic_metadata_has_no_area() {
        let meta = RasterMetadata {
            linear_unit: "degree".to_string(),
            ..landsat_tile()
        };
        assert!(matches!(
            meta.cell_area_hectares(),
            Err(RasterError::UnsupportedUnit(_))
        ));
    }
}

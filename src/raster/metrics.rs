//! Derived raster metrics: cell area, uncompressed size and human-readable byte counts.

use crate::errors::{RasterError, Result};
use crate::raster::PixelType;

const SIZE_UNITS: [&str; 6] = ["B", "KB", "MB", "GB", "TB", "PB"];

/// Grid cell area in hectares.
///
/// Only linear units of meters (`"m"`) are accepted; any other unit fails with
/// [`RasterError::UnsupportedUnit`] instead of guessing a conversion factor.
pub fn cell_area_hectares(x_res: f64, y_res: f64, unit: &str) -> Result<f64> {
    if unit != "m" {
        return Err(RasterError::UnsupportedUnit(unit.to_string()));
    }
    Ok(x_res * y_res * 1e-4)
}

/// Size in bytes of `bands * rows * cols` pixels of `pixel_type`, without compression.
pub fn uncompressed_size_bytes(
    cols: usize,
    rows: usize,
    bands: usize,
    pixel_type: PixelType,
) -> Result<u64> {
    let bits = pixel_type.require_known()?.bits() as u64;
    [cols, rows, bands]
        .iter()
        .try_fold(bits, |acc, n| acc.checked_mul(*n as u64))
        .map(|total_bits| total_bits / 8)
        .ok_or_else(|| {
            RasterError::InvalidInput(format!(
                "{bands} x {rows} x {cols} {pixel_type} pixels overflow a byte count"
            ))
        })
}

/// [`human_readable_size_with`] using two decimal places.
pub fn human_readable_size(bytes: i64) -> Result<String> {
    human_readable_size_with(bytes, 2)
}

/// Render `bytes` with the largest unit of `B, KB, MB, GB, TB, PB` that keeps
/// the value below 1024. Values beyond the petabyte range stay in `PB`.
pub fn human_readable_size_with(bytes: i64, decimals: usize) -> Result<String> {
    if bytes < 0 {
        return Err(RasterError::InvalidInput(format!(
            "byte count must not be negative, got {bytes}"
        )));
    }
    let mut size = bytes as f64;
    let mut unit = SIZE_UNITS[0];
    for candidate in SIZE_UNITS {
        unit = candidate;
        if size < 1024.0 || candidate == "PB" {
            break;
        }
        size /= 1024.0;
    }
    Ok(format!("{size:.decimals$} {unit}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_meter_cells() {
        let area = cell_area_hectares(30.0, 30.0, "m").unwrap();
        assert!((area - 0.09).abs() < 1e-12);
    }

    #[test]
    fn non_meter_units_are_refused() {
        for unit in ["us-ft", "ft", "degree", ""] {
            assert!(matches!(
                cell_area_hectares(30.0, 30.0, unit),
                Err(RasterError::UnsupportedUnit(u)) if u == unit
            ));
        }
    }

    #[test]
    fn size_scales_linearly() {
        let base = uncompressed_size_bytes(100, 50, 3, PixelType::Int16).unwrap();
        assert_eq!(base, 100 * 50 * 3 * 2);
        assert_eq!(
            uncompressed_size_bytes(200, 50, 3, PixelType::Int16).unwrap(),
            2 * base
        );
        assert_eq!(
            uncompressed_size_bytes(100, 100, 3, PixelType::Int16).unwrap(),
            2 * base
        );
        assert_eq!(
            uncompressed_size_bytes(100, 50, 6, PixelType::Int16).unwrap(),
            2 * base
        );
        assert_eq!(
            uncompressed_size_bytes(100, 50, 3, PixelType::Float64).unwrap(),
            4 * base
        );
    }

    #[test]
    fn unknown_type_has_no_size() {
        assert!(matches!(
            uncompressed_size_bytes(10, 10, 1, PixelType::Unknown),
            Err(RasterError::UnknownPixelType(_))
        ));
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            uncompressed_size_bytes(usize::MAX, usize::MAX, 1, PixelType::Byte),
            Err(RasterError::InvalidInput(_))
        ));
    }

    #[test]
    fn human_readable_ladder() {
        assert_eq!(human_readable_size(0).unwrap(), "0.00 B");
        assert_eq!(human_readable_size(1023).unwrap(), "1023.00 B");
        assert_eq!(human_readable_size(1536).unwrap(), "1.50 KB");
        assert_eq!(human_readable_size(3 * 1024 * 1024).unwrap(), "3.00 MB");
        assert_eq!(human_readable_size(1024_i64.pow(5)).unwrap(), "1.00 PB");
        assert_eq!(human_readable_size(1024_i64.pow(6)).unwrap(), "1024.00 PB");
    }

    #[test]
    fn human_readable_decimals() {
        assert_eq!(human_readable_size_with(1536, 0).unwrap(), "2 KB");
        assert_eq!(human_readable_size_with(1536, 3).unwrap(), "1.500 KB");
    }

    #[test]
    fn negative_sizes_are_rejected() {
        assert!(matches!(
            human_readable_size(-1),
            Err(RasterError::InvalidInput(_))
        ));
    }
}

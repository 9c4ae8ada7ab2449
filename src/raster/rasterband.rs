use std::ffi::{c_int, CString};

use gdal::raster::{ColorEntry, RasterBand};
use gdal_sys::{CPLErr, GDALRATFieldType, GDALRATFieldUsage, GDALRasterAttributeTableH};

use crate::errors::{RasterError, Result};
use crate::raster::{AttributeTable, ColorTable, PixelType};
use crate::utils::{_last_backend_err, _string};

/// Name of the column holding class values in attribute tables written by this crate.
pub const RAT_VALUE_COLUMN: &str = "Value";
/// Name of the column holding class labels in attribute tables written by this crate.
pub const RAT_LABEL_COLUMN: &str = "Class";

/// Pixel type of `band`, including the complex types.
pub fn band_pixel_type(band: &RasterBand) -> PixelType {
    let name = unsafe {
        let c_type = gdal_sys::GDALGetRasterDataType(band.c_rasterband());
        _string(gdal_sys::GDALGetDataTypeName(c_type))
    };
    PixelType::from_name(&name)
}

/// Replace the palette of `band` with the rows of `table`.
///
/// GDAL only supports palettes on `Byte` and `UInt16` bands.
pub fn set_band_color_table(band: &mut RasterBand, table: &ColorTable) -> Result<()> {
    let pixel_type = band_pixel_type(band);
    if !matches!(pixel_type, PixelType::Byte | PixelType::UInt16) {
        return Err(RasterError::InvalidInput(format!(
            "color tables need a Byte or UInt16 band, not {pixel_type}"
        )));
    }

    let mut palette = gdal::raster::ColorTable::default();
    for (value, rgb) in table.rows() {
        let index = u16::try_from(*value).map_err(|_| {
            RasterError::InvalidClassMap(format!("class {value} is not a palette index"))
        })?;
        palette.set_color_entry(
            index,
            &ColorEntry::rgba(rgb.r.into(), rgb.g.into(), rgb.b.into(), 255),
        );
    }
    band.set_color_table(&palette);
    Ok(())
}

/// Replace the default raster attribute table of `band` with a
/// `Value`/`Class` table built from `table`.
pub fn set_band_attribute_table(band: &mut RasterBand, table: &AttributeTable) -> Result<()> {
    let rows = table
        .rows()
        .iter()
        .map(|(value, label)| {
            let value = c_int::try_from(*value).map_err(|_| {
                RasterError::InvalidClassMap(format!("class {value} does not fit an int"))
            })?;
            Ok((value, CString::new(label.as_str())?))
        })
        .collect::<Result<Vec<_>>>()?;
    let row_count = c_int::try_from(rows.len())
        .map_err(|_| RasterError::InvalidClassMap("too many classes".to_string()))?;

    let rat = unsafe { gdal_sys::GDALCreateRasterAttributeTable() };
    if rat.is_null() {
        return Err(_last_backend_err("GDALCreateRasterAttributeTable"));
    }
    let result = fill_attribute_table(rat, &rows, row_count).and_then(|_| {
        let rv = unsafe { gdal_sys::GDALSetDefaultRAT(band.c_rasterband(), rat) };
        if rv != CPLErr::CE_None {
            return Err(_last_backend_err("GDALSetDefaultRAT"));
        }
        Ok(())
    });
    // GDALSetDefaultRAT stores a copy
    unsafe { gdal_sys::GDALDestroyRasterAttributeTable(rat) };
    result
}

fn fill_attribute_table(
    rat: GDALRasterAttributeTableH,
    rows: &[(c_int, CString)],
    row_count: c_int,
) -> Result<()> {
    let value_column = CString::new(RAT_VALUE_COLUMN)?;
    let label_column = CString::new(RAT_LABEL_COLUMN)?;
    let columns = [
        (
            &value_column,
            GDALRATFieldType::GFT_Integer,
            GDALRATFieldUsage::GFU_MinMax,
        ),
        (
            &label_column,
            GDALRATFieldType::GFT_String,
            GDALRATFieldUsage::GFU_Name,
        ),
    ];
    for (name, field_type, usage) in columns {
        let rv = unsafe { gdal_sys::GDALRATCreateColumn(rat, name.as_ptr(), field_type, usage) };
        if rv != CPLErr::CE_None {
            return Err(_last_backend_err("GDALRATCreateColumn"));
        }
    }

    unsafe { gdal_sys::GDALRATSetRowCount(rat, row_count) };
    for (i, (value, label)) in rows.iter().enumerate() {
        let row = i as c_int;
        unsafe {
            gdal_sys::GDALRATSetValueAsInt(rat, row, 0, *value);
            gdal_sys::GDALRATSetValueAsString(rat, row, 1, label.as_ptr());
        }
    }
    Ok(())
}

/// Read back the default attribute table of `band`, if it has one with
/// a min-max and a name column.
pub fn band_attribute_table(band: &RasterBand) -> Option<AttributeTable> {
    unsafe {
        let rat = gdal_sys::GDALGetDefaultRAT(band.c_rasterband());
        if rat.is_null() {
            return None;
        }
        let value_col = gdal_sys::GDALRATGetColOfUsage(rat, GDALRATFieldUsage::GFU_MinMax);
        let label_col = gdal_sys::GDALRATGetColOfUsage(rat, GDALRATFieldUsage::GFU_Name);
        if value_col < 0 || label_col < 0 {
            return None;
        }
        let rows = (0..gdal_sys::GDALRATGetRowCount(rat))
            .map(|row| {
                let value = gdal_sys::GDALRATGetValueAsInt(rat, row, value_col) as i64;
                let label = _string(gdal_sys::GDALRATGetValueAsString(rat, row, label_col));
                (value, label)
            })
            .collect();
        Some(AttributeTable::from_rows(rows))
    }
}

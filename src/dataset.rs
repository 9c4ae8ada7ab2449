//! Raster file access through GDAL.
//!
//! Every function opens the dataset it needs and drops it before returning,
//! so no GDAL handle outlives a call, including on error paths.

use std::path::Path;

use gdal::cpl::CslStringList;
use gdal::raster::{Buffer, GdalType, RasterBand};
use gdal::{Dataset, DatasetOptions, DriverManager, GdalOpenFlags, GeoTransform};
use log::{debug, info};

use crate::errors::{RasterError, Result};
use crate::raster::{
    band_attribute_table, band_pixel_type, cell_area_hectares, continuous_stats, frequency_table,
    set_band_attribute_table, set_band_color_table, AttributeTable, ColorTable, FrequencyTable,
    Grid, PixelType, PixelValue, RasterMetadata, StatSummary, WriteOptions,
};
use crate::spatial_ref::{linear_unit, proj4_from_wkt};

/// Raster dimensions: columns, rows and band count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterDims {
    pub cols: usize,
    pub rows: usize,
    pub bands: usize,
}

/// Which bands to load. Band numbers start at 1.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BandSelection {
    #[default]
    All,
    One(usize),
    Many(Vec<usize>),
}

fn open(path: &Path) -> Result<Dataset> {
    debug!("Opening {}", path.display());
    Ok(Dataset::open(path)?)
}

fn open_for_update(path: &Path) -> Result<Dataset> {
    debug!("Opening {} for update", path.display());
    let options = DatasetOptions {
        open_flags: GdalOpenFlags::GDAL_OF_UPDATE | GdalOpenFlags::GDAL_OF_RASTER,
        ..DatasetOptions::default()
    };
    Ok(Dataset::open_ex(path, options)?)
}

fn band(dataset: &Dataset, band: usize) -> Result<RasterBand<'_>> {
    let count = dataset.raster_count();
    if band == 0 || band > count {
        return Err(RasterError::InvalidInput(format!(
            "band {band} does not exist, the raster has bands 1 to {count} (there is no band 0)"
        )));
    }
    Ok(dataset.rasterband(band)?)
}

fn read_grid<T: PixelValue + GdalType>(band: &RasterBand) -> Result<Grid<T>> {
    let size = band.size();
    let buffer = band.read_as::<T>((0, 0), size, size, None)?;
    let data: Vec<T> = buffer.into_iter().collect();
    Grid::new(size, data)
}

/// Nodata value of `band`, if one is set.
pub fn nodata<P: AsRef<Path>>(path: P, band_index: usize) -> Result<Option<f64>> {
    let dataset = open(path.as_ref())?;
    Ok(band(&dataset, band_index)?.no_data_value())
}

/// Geotransform and projection (WKT) of a raster.
pub fn geo_transform_and_projection<P: AsRef<Path>>(path: P) -> Result<(GeoTransform, String)> {
    let dataset = open(path.as_ref())?;
    Ok((dataset.geo_transform()?, dataset.projection()))
}

/// Projection of a raster as a proj4 string.
pub fn proj4_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let dataset = open(path.as_ref())?;
    proj4_from_wkt(&dataset.projection())
}

pub fn band_count<P: AsRef<Path>>(path: P) -> Result<usize> {
    Ok(open(path.as_ref())?.raster_count())
}

/// Raster dimensions, without reading any pixels.
pub fn dims<P: AsRef<Path>>(path: P) -> Result<RasterDims> {
    let dataset = open(path.as_ref())?;
    let (cols, rows) = dataset.raster_size();
    Ok(RasterDims {
        cols,
        rows,
        bands: dataset.raster_count(),
    })
}

/// X and Y pixel resolution. Y is reported positive for North-up rasters.
pub fn xy_resolution<P: AsRef<Path>>(path: P) -> Result<(f64, f64)> {
    let gt = open(path.as_ref())?.geo_transform()?;
    Ok((gt[1], -gt[5]))
}

/// Linear unit of the raster CRS, e.g. `"m"`.
pub fn projection_units<P: AsRef<Path>>(path: P) -> Result<String> {
    linear_unit(&proj4_string(path)?)
}

/// Grid cell area in hectares. The raster CRS must be in meters.
pub fn cell_area_ha<P: AsRef<Path>>(path: P) -> Result<f64> {
    let path = path.as_ref();
    let units = projection_units(path)?;
    let (x_res, y_res) = xy_resolution(path)?;
    cell_area_hectares(x_res, y_res, &units)
}

/// Pixel type of a band.
pub fn pixel_type<P: AsRef<Path>>(path: P, band_index: usize) -> Result<PixelType> {
    let dataset = open(path.as_ref())?;
    Ok(band_pixel_type(&band(&dataset, band_index)?))
}

/// Collect the metadata of a raster in a single open.
///
/// Pixel type and nodata come from band 1. A CRS without a `+units` token
/// (e.g. geographic coordinates) leaves `linear_unit` empty.
pub fn raster_metadata<P: AsRef<Path>>(path: P) -> Result<RasterMetadata> {
    let dataset = open(path.as_ref())?;
    let (cols, rows) = dataset.raster_size();
    let gt = dataset.geo_transform()?;
    let first = band(&dataset, 1)?;
    let projection = dataset.projection();
    let unit = if projection.trim().is_empty() {
        String::new()
    } else {
        match linear_unit(&proj4_from_wkt(&projection)?) {
            Ok(unit) => unit,
            Err(RasterError::MalformedProjection(proj4)) => {
                debug!("No linear unit in '{proj4}'");
                String::new()
            }
            Err(e) => return Err(e),
        }
    };
    Ok(RasterMetadata {
        cols,
        rows,
        bands: dataset.raster_count(),
        pixel_type: band_pixel_type(&first),
        x_res: gt[1],
        y_res: -gt[5],
        linear_unit: unit,
        nodata: first.no_data_value(),
    })
}

/// Estimated uncompressed size in bytes, from dimensions and band 1's pixel type.
pub fn uncompressed_size<P: AsRef<Path>>(path: P) -> Result<u64> {
    let dataset = open(path.as_ref())?;
    let (cols, rows) = dataset.raster_size();
    let pixel_type = band_pixel_type(&band(&dataset, 1)?);
    crate::raster::uncompressed_size_bytes(cols, rows, dataset.raster_count(), pixel_type)
}

/// Load one band into memory. GDAL converts pixels to `T` as needed.
pub fn read_band<T, P>(path: P, band_index: usize) -> Result<Grid<T>>
where
    T: PixelValue + GdalType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let dataset = open(path)?;
    debug!("Reading band {band_index} of {}", path.display());
    read_grid(&band(&dataset, band_index)?)
}

/// Load several bands into memory, in the order selected.
pub fn read_bands<T, P>(path: P, selection: &BandSelection) -> Result<Vec<Grid<T>>>
where
    T: PixelValue + GdalType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let dataset = open(path)?;
    let indexes = match selection {
        BandSelection::All => (1..=dataset.raster_count()).collect(),
        BandSelection::One(i) => vec![*i],
        BandSelection::Many(indexes) => indexes.clone(),
    };
    if indexes.is_empty() {
        return Err(RasterError::InvalidInput("no bands selected".to_string()));
    }
    debug!(
        "Reading {} of {} bands from {}",
        indexes.len(),
        dataset.raster_count(),
        path.display()
    );
    indexes
        .into_iter()
        .map(|i| read_grid(&band(&dataset, i)?))
        .collect()
}

/// Summary statistics of a band, excluding the band's own nodata value.
pub fn band_stats<P: AsRef<Path>>(path: P, band_index: usize) -> Result<StatSummary> {
    let dataset = open(path.as_ref())?;
    let band = band(&dataset, band_index)?;
    let grid = read_grid::<f64>(&band)?;
    continuous_stats(grid.data(), band.no_data_value())
}

/// Class counts of an integer band, excluding the band's own nodata value.
///
/// Floating point and complex bands fail with [`RasterError::InvalidInput`].
pub fn band_frequency_table<P: AsRef<Path>>(path: P, band_index: usize) -> Result<FrequencyTable> {
    let dataset = open(path.as_ref())?;
    let band = band(&dataset, band_index)?;
    let nodata = band.no_data_value();
    match band_pixel_type(&band) {
        PixelType::Byte | PixelType::UInt16 | PixelType::Int16 | PixelType::Int32 => {
            frequency_table(read_grid::<i32>(&band)?.data(), nodata)
        }
        PixelType::UInt32 => frequency_table(read_grid::<u32>(&band)?.data(), nodata),
        other => Err(RasterError::InvalidInput(format!(
            "class frequencies need an integer band, band {band_index} is {other}"
        ))),
    }
}

/// Write `grid` to a single-band GeoTIFF at `path`.
///
/// The output pixel type is the grid's element type.
pub fn write_gtiff<T, P>(
    grid: &Grid<T>,
    path: P,
    geo_transform: &GeoTransform,
    projection: &str,
    options: &WriteOptions,
) -> Result<()>
where
    T: PixelValue + GdalType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    info!("Writing {}", path.display());
    let (cols, rows) = grid.shape();
    if grid.is_empty() {
        return Err(RasterError::InvalidInput(format!(
            "cannot write an empty {cols}x{rows} grid"
        )));
    }

    let mut creation_options = CslStringList::new();
    for option in options.creation_options() {
        creation_options.add_string(&option)?;
    }
    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let mut dataset = driver.create_with_band_type_with_options::<T, _>(
        path,
        cols,
        rows,
        1,
        &creation_options,
    )?;
    dataset.set_geo_transform(geo_transform)?;
    if !projection.is_empty() {
        dataset.set_projection(projection)?;
    }

    let mut band = dataset.rasterband(1)?;
    let mut buffer = Buffer::new((cols, rows), grid.data().to_vec());
    band.write((0, 0), (cols, rows), &mut buffer)?;
    if let Some(nodata) = options.nodata {
        band.set_no_data_value(Some(nodata))?;
    }
    if options.compute_stats {
        if let Some(stats) = band.get_statistics(true, false)? {
            debug!(
                "Stored statistics min={} max={} mean={} std={}",
                stats.min, stats.max, stats.mean, stats.std_dev
            );
        }
    }
    Ok(())
}

/// Attach a palette to a band of an existing raster.
pub fn attach_color_table<P: AsRef<Path>>(
    path: P,
    band_index: usize,
    table: &ColorTable,
) -> Result<()> {
    let dataset = open_for_update(path.as_ref())?;
    let mut band = band(&dataset, band_index)?;
    info!(
        "Attaching {} color entries to band {band_index}",
        table.rows().len()
    );
    set_band_color_table(&mut band, table)
}

/// Attach a raster attribute table to a band of an existing raster.
pub fn attach_attribute_table<P: AsRef<Path>>(
    path: P,
    band_index: usize,
    table: &AttributeTable,
) -> Result<()> {
    let dataset = open_for_update(path.as_ref())?;
    let mut band = band(&dataset, band_index)?;
    info!(
        "Attaching {} attribute rows to band {band_index}",
        table.rows().len()
    );
    set_band_attribute_table(&mut band, table)
}

/// Read the attribute table of a band, if it has one.
pub fn attribute_table<P: AsRef<Path>>(path: P, band_index: usize) -> Result<Option<AttributeTable>> {
    let dataset = open(path.as_ref())?;
    Ok(band_attribute_table(&band(&dataset, band_index)?))
}

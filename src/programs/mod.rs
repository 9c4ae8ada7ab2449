//! The command line tools behind `src/bin`.
//!
//! Each tool takes one dataset path and prints one line on success. The
//! binaries turn any [`ProgramError`] into `Error: ...` on stderr and exit
//! code 2.

use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::errors::RasterError;

mod source;

pub use source::DatasetSource;

/// Exit code used for every failure.
pub const FAILURE_EXIT_CODE: u8 = 2;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("{} does not exist.", .0.display())]
    Missing(PathBuf),
    #[error(".prj file for {0} does not exist.")]
    MissingPrj(String),
    #[error("{} must be a Shapefile (.shp) or GeoTIFF (.tif).", .0.display())]
    UnsupportedExtension(PathBuf),
    #[error("{} is a vector dataset, not a raster.", .0.display())]
    NotARaster(PathBuf),
    #[error(transparent)]
    Raster(#[from] RasterError),
}

/// Command line of both tools: a single dataset path.
#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    /// The source dataset file name
    #[arg(value_name = "src_dataset")]
    pub src_dataset: PathBuf,
}

/// The proj4 string of a Shapefile (from its `.prj`) or GeoTIFF, in single quotes.
#[cfg(feature = "gdal")]
pub fn proj4string<P: AsRef<std::path::Path>>(path: P) -> Result<String, ProgramError> {
    let proj4 = match DatasetSource::classify(path)? {
        DatasetSource::Shapefile { prj, .. } => crate::spatial_ref::proj4_from_prj_file(prj)?,
        DatasetSource::GeoTiff(tif) => crate::dataset::proj4_string(tif)?,
    };
    Ok(crate::spatial_ref::quoted(&proj4))
}

/// Human readable estimate of a GeoTIFF's size once decompressed, e.g. `"1.23 GB"`.
#[cfg(feature = "gdal")]
pub fn uncompressed_size<P: AsRef<std::path::Path>>(path: P) -> Result<String, ProgramError> {
    let tif = match DatasetSource::classify(path)? {
        DatasetSource::GeoTiff(tif) => tif,
        DatasetSource::Shapefile { shp, .. } => {
            return Err(ProgramError::NotARaster(shp));
        }
    };
    let bytes = crate::dataset::uncompressed_size(tif)?;
    let bytes = i64::try_from(bytes)
        .map_err(|_| RasterError::InvalidInput(format!("{bytes} bytes is too large")))?;
    Ok(crate::raster::human_readable_size(bytes)?)
}

use std::path::Path;

use gdal::spatial_ref::SpatialRef;
use log::debug;

use crate::errors::{RasterError, Result};

/// Proj4 form of a well-known-text CRS definition, trailing whitespace removed.
pub fn proj4_from_wkt(wkt: &str) -> Result<String> {
    if wkt.trim().is_empty() {
        return Err(RasterError::InvalidInput(
            "dataset has no projection".to_string(),
        ));
    }
    let spatial_ref = SpatialRef::from_wkt(wkt)?;
    Ok(spatial_ref.to_proj4()?.trim_end().to_string())
}

/// Proj4 form of an ESRI `.prj` definition, trailing whitespace removed.
pub fn proj4_from_esri(esri_wkt: &str) -> Result<String> {
    let spatial_ref = SpatialRef::from_esri(esri_wkt)?;
    Ok(spatial_ref.to_proj4()?.trim_end().to_string())
}

/// Read a shapefile's `.prj` sidecar and convert it to proj4.
pub fn proj4_from_prj_file<P: AsRef<Path>>(prj: P) -> Result<String> {
    let prj = prj.as_ref();
    debug!("Reading {}", prj.display());
    let text = std::fs::read_to_string(prj).map_err(|e| {
        RasterError::InvalidInput(format!("cannot read {}: {e}", prj.display()))
    })?;
    proj4_from_esri(text.trim())
}

//! Coordinate reference system helpers

mod proj4;
#[cfg(feature = "gdal")]
mod srs;

pub use proj4::{linear_unit, quoted};
#[cfg(feature = "gdal")]
pub use srs::{proj4_from_esri, proj4_from_prj_file, proj4_from_wkt};

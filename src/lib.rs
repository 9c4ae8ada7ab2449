//! Raster metadata, statistics and classification helpers.
//!
//! The core of the crate is pure: pixel type facts, derived metrics, summary
//! statistics, frequency tables, class tables and grid comparison all work on
//! in-memory [`raster::Grid`]s. With the `gdal` feature, [`dataset`] reads and
//! writes raster files through [GDAL](http://gdal.org/) and the
//! `proj4string` and `uncompressed_size` tools are built.
//!
//! ## Use
//!
//! ```
//! use rastkit::raster::{continuous_stats, human_readable_size, uncompressed_size_bytes, PixelType};
//!
//! let bytes = uncompressed_size_bytes(1000, 1000, 3, PixelType::Byte).unwrap();
//! assert_eq!(human_readable_size(bytes as i64).unwrap(), "2.86 MB");
//!
//! let stats = continuous_stats(&[1.0f32, 2.0, -9999.0, 3.0], Some(-9999.0)).unwrap();
//! assert_eq!(stats.max, 3.0);
//! println!("{stats}");
//! ```
//!
//! ## Features
//!
//! - `gdal`: raster file access and the command line tools.
//! - `array`: conversions between [`raster::Grid`] and `ndarray::Array2`.
//! - `bundled`: build GDAL from source through `gdal-sys` and `gdal-src`.

pub mod errors;
pub mod programs;
pub mod raster;
pub mod spatial_ref;

#[cfg(feature = "gdal")]
pub mod dataset;
#[cfg(feature = "gdal")]
mod utils;

#[cfg(test)]
pub(crate) mod test_utils;

pub use errors::{RasterError, Result};

use std::ffi::NulError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("FfiNulError")]
    FfiNulError(#[from] NulError),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("CRS units are '{0}' (must be meters)")]
    UnsupportedUnit(String),
    #[error("Malformed projection string, no units found in '{0}'")]
    MalformedProjection(String),
    #[error("Grid shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    #[error("No data left to summarize: {0}")]
    EmptyInput(&'static str),
    #[error("Invalid class mapping: {0}")]
    InvalidClassMap(String),
    #[error("Invalid color '{0}', expected '#RRGGBB' or 'RRGGBB'")]
    InvalidColor(String),
    #[error("Unknown pixel type '{0}'")]
    UnknownPixelType(String),
    #[cfg(feature = "gdal")]
    #[error(transparent)]
    Gdal(#[from] gdal::errors::GdalError),
    #[cfg(feature = "gdal")]
    #[error("GDAL method '{method_name}' failed. Error msg: '{msg}'")]
    Backend {
        method_name: &'static str,
        msg: String,
    },
    #[cfg(feature = "array")]
    #[error(transparent)]
    NdarrayShapeError(#[from] ndarray::ShapeError),
}

pub type Result<T> = std::result::Result<T, RasterError>;

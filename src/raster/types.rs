use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::{RasterError, Result};

/// Pixel data types understood by GDAL.
///
/// The discriminants are GDAL's own `GDALDataType` codes, so a `PixelType`
/// can be handed to the raster backend as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
#[repr(u32)]
pub enum PixelType {
    Unknown = 0,
    Byte = 1,
    UInt16 = 2,
    Int16 = 3,
    UInt32 = 4,
    Int32 = 5,
    Float32 = 6,
    Float64 = 7,
    CInt16 = 8,
    CInt32 = 9,
    CFloat32 = 10,
    CFloat64 = 11,
}

const KNOWN_TYPES: [PixelType; 11] = [
    PixelType::Byte,
    PixelType::UInt16,
    PixelType::Int16,
    PixelType::UInt32,
    PixelType::Int32,
    PixelType::Float32,
    PixelType::Float64,
    PixelType::CInt16,
    PixelType::CInt32,
    PixelType::CFloat32,
    PixelType::CFloat64,
];

impl PixelType {
    /// The eleven concrete pixel types, i.e. everything except [`PixelType::Unknown`].
    pub fn known() -> &'static [PixelType] {
        &KNOWN_TYPES
    }

    /// GDAL's name for this type, e.g. `"Float32"`.
    pub fn name(&self) -> &'static str {
        match self {
            PixelType::Unknown => "Unknown",
            PixelType::Byte => "Byte",
            PixelType::UInt16 => "UInt16",
            PixelType::Int16 => "Int16",
            PixelType::UInt32 => "UInt32",
            PixelType::Int32 => "Int32",
            PixelType::Float32 => "Float32",
            PixelType::Float64 => "Float64",
            PixelType::CInt16 => "CInt16",
            PixelType::CInt32 => "CInt32",
            PixelType::CFloat32 => "CFloat32",
            PixelType::CFloat64 => "CFloat64",
        }
    }

    /// Look a type up by its GDAL name. Unrecognized names map to [`PixelType::Unknown`].
    pub fn from_name(name: &str) -> PixelType {
        KNOWN_TYPES
            .iter()
            .copied()
            .find(|t| t.name() == name)
            .unwrap_or(PixelType::Unknown)
    }

    /// Get the pixel size in **bits**, `0` for [`PixelType::Unknown`].
    ///
    /// Complex types report the width of a single component, which is what
    /// the size estimates in this crate are based on.
    pub fn bits(&self) -> u8 {
        match self {
            PixelType::Unknown => 0,
            PixelType::Byte => 8,
            PixelType::UInt16 | PixelType::Int16 | PixelType::CInt16 => 16,
            PixelType::UInt32
            | PixelType::Int32
            | PixelType::Float32
            | PixelType::CInt32
            | PixelType::CFloat32 => 32,
            PixelType::Float64 | PixelType::CFloat64 => 64,
        }
    }

    /// GDAL's `GDALDataType` code; `0` (`GDT_Unknown`) for [`PixelType::Unknown`].
    pub fn gdal_code(&self) -> u32 {
        *self as u32
    }

    /// Inverse of [`PixelType::gdal_code`]. Codes outside the table map to `Unknown`.
    pub fn from_gdal_code(code: u32) -> PixelType {
        KNOWN_TYPES
            .iter()
            .copied()
            .find(|t| t.gdal_code() == code)
            .unwrap_or(PixelType::Unknown)
    }

    pub fn is_known(&self) -> bool {
        *self != PixelType::Unknown
    }

    pub fn is_complex(&self) -> bool {
        matches!(
            self,
            PixelType::CInt16 | PixelType::CInt32 | PixelType::CFloat32 | PixelType::CFloat64
        )
    }

    /// Returns `true` if data type is floating point (real or complex).
    pub fn is_floating(&self) -> bool {
        matches!(
            self,
            PixelType::Float32 | PixelType::Float64 | PixelType::CFloat32 | PixelType::CFloat64
        )
    }

    /// Same as `self`, but fails with [`RasterError::UnknownPixelType`] for `Unknown`.
    pub fn require_known(self) -> Result<PixelType> {
        if self.is_known() {
            Ok(self)
        } else {
            Err(RasterError::UnknownPixelType(self.name().to_string()))
        }
    }
}

impl Display for PixelType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PixelType {
    type Err = RasterError;

    /// Strict parse: unlike [`PixelType::from_name`], an unrecognized name is an error.
    fn from_str(s: &str) -> Result<Self> {
        PixelType::from_name(s)
            .require_known()
            .map_err(|_| RasterError::UnknownPixelType(s.to_string()))
    }
}

/// Bit depth for a GDAL type name, `0` when the name is not recognized.
pub fn bit_depth(name: &str) -> u8 {
    PixelType::from_name(name).bits()
}

/// GDAL type code for a GDAL type name, `0` (`GDT_Unknown`) when the name is not recognized.
pub fn gdal_code(name: &str) -> u32 {
    PixelType::from_name(name).gdal_code()
}

/// Type-level constraint for the primitive values a [`Grid`](crate::raster::Grid) can hold.
pub trait PixelValue: Copy + PartialEq + std::fmt::Debug {
    fn pixel_type() -> PixelType;

    fn to_f64(self) -> f64;
}

impl PixelValue for u8 {
    fn pixel_type() -> PixelType {
        PixelType::Byte
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl PixelValue for u16 {
    fn pixel_type() -> PixelType {
        PixelType::UInt16
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl PixelValue for i16 {
    fn pixel_type() -> PixelType {
        PixelType::Int16
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl PixelValue for u32 {
    fn pixel_type() -> PixelType {
        PixelType::UInt32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl PixelValue for i32 {
    fn pixel_type() -> PixelType {
        PixelType::Int32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl PixelValue for f32 {
    fn pixel_type() -> PixelType {
        PixelType::Float32
    }

    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl PixelValue for f64 {
    fn pixel_type() -> PixelType {
        PixelType::Float64
    }

    fn to_f64(self) -> f64 {
        self
    }
}

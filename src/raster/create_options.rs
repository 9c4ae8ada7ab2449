use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::errors::RasterError;

/// GeoTIFF compression applied when writing grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    None,
    #[default]
    Lzw,
    Deflate,
}

impl Compression {
    /// Value of the GTiff `COMPRESS` creation option, `None` when no compression is requested.
    pub fn gtiff_value(&self) -> Option<&'static str> {
        match self {
            Compression::None => None,
            Compression::Lzw => Some("LZW"),
            Compression::Deflate => Some("DEFLATE"),
        }
    }
}

impl Display for Compression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.gtiff_value().unwrap_or("NONE"))
    }
}

impl FromStr for Compression {
    type Err = RasterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "NONE" => Ok(Compression::None),
            "LZW" => Ok(Compression::Lzw),
            "DEFLATE" => Ok(Compression::Deflate),
            _ => Err(RasterError::InvalidInput(format!(
                "unsupported compression '{s}'"
            ))),
        }
    }
}

/// Settings for writing a grid to a GeoTIFF file.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOptions {
    pub compression: Compression,
    /// Compute band statistics and store them with the file.
    pub compute_stats: bool,
    /// Nodata value recorded on the output band.
    pub nodata: Option<f64>,
}

impl Default for WriteOptions {
    fn default() -> Self {
        WriteOptions {
            compression: Compression::default(),
            compute_stats: true,
            nodata: None,
        }
    }
}

impl WriteOptions {
    pub fn with_nodata(mut self, nodata: f64) -> Self {
        self.nodata = Some(nodata);
        self
    }

    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_stats(mut self, compute_stats: bool) -> Self {
        self.compute_stats = compute_stats;
        self
    }

    /// GTiff creation options as `KEY=VALUE` strings.
    pub fn creation_options(&self) -> Vec<String> {
        self.compression
            .gtiff_value()
            .map(|value| format!("COMPRESS={value}"))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = WriteOptions::default();
        assert_eq!(options.compression, Compression::Lzw);
        assert!(options.compute_stats);
        assert_eq!(options.nodata, None);
        assert_eq!(options.creation_options(), ["COMPRESS=LZW"]);
    }

    #[test]
    fn builder() {
        let options = WriteOptions::default()
            .with_compression(Compression::None)
            .with_nodata(-9999.0)
            .with_stats(false);
        assert!(options.creation_options().is_empty());
        assert_eq!(options.nodata, Some(-9999.0));
        assert!(!options.compute_stats);
    }

    #[test]
    fn parse_compression() {
        assert_eq!("deflate".parse::<Compression>().unwrap(), Compression::Deflate);
        assert_eq!("NONE".parse::<Compression>().unwrap(), Compression::None);
        assert!("jpeg".parse::<Compression>().is_err());
        assert_eq!(Compression::Lzw.to_string(), "LZW");
    }
}

use std::path::{Path, PathBuf};

use crate::programs::ProgramError;

/// A dataset given on the command line, checked before any GDAL call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// An ESRI Shapefile and the `.prj` sidecar holding its CRS.
    Shapefile { shp: PathBuf, prj: PathBuf },
    GeoTiff(PathBuf),
}

impl DatasetSource {
    /// Classify `path` by its extension.
    ///
    /// The file must exist. A `.shp` needs a `.prj` next to it with the same
    /// stem. Only `shp` and `tif` extensions are accepted, compared as given.
    pub fn classify<P: AsRef<Path>>(path: P) -> Result<Self, ProgramError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ProgramError::Missing(path.to_path_buf()));
        }
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("shp") => {
                let prj = path.with_extension("prj");
                if !prj.is_file() {
                    return Err(ProgramError::MissingPrj(
                        path.file_name()
                            .map(|name| name.to_string_lossy().into_owned())
                            .unwrap_or_default(),
                    ));
                }
                Ok(DatasetSource::Shapefile {
                    shp: path.to_path_buf(),
                    prj,
                })
            }
            Some("tif") => Ok(DatasetSource::GeoTiff(path.to_path_buf())),
            _ => Err(ProgramError::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

use std::fs::File;
use std::path::Path;

use rastkit::programs::{DatasetSource, ProgramError};

fn touch(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    File::create(&path).unwrap();
    path
}

#[test]
fn geotiff_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let tif = touch(dir.path(), "dem.tif");
    assert_eq!(
        DatasetSource::classify(&tif).unwrap(),
        DatasetSource::GeoTiff(tif)
    );
}

#[test]
fn shapefile_with_prj() {
    let dir = tempfile::tempdir().unwrap();
    let shp = touch(dir.path(), "roads.shp");
    let prj = touch(dir.path(), "roads.prj");
    assert_eq!(
        DatasetSource::classify(&shp).unwrap(),
        DatasetSource::Shapefile { shp, prj }
    );
}

#[test]
fn shapefile_without_prj() {
    let dir = tempfile::tempdir().unwrap();
    let shp = touch(dir.path(), "roads.shp");
    touch(dir.path(), "rivers.prj");

    let err = DatasetSource::classify(&shp).unwrap_err();
    assert!(matches!(err, ProgramError::MissingPrj(ref name) if name == "roads.shp"));
    assert_eq!(err.to_string(), ".prj file for roads.shp does not exist.");
}

#[test]
fn unsupported_extensions() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["dem.img", "dem.tiff", "roads.geojson", "README"] {
        let path = touch(dir.path(), name);
        assert!(
            matches!(
                DatasetSource::classify(&path),
                Err(ProgramError::UnsupportedExtension(_))
            ),
            "{name} should be refused"
        );
    }
}

#[test]
fn missing_file_is_reported_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roads.shp");
    let err = DatasetSource::classify(&path).unwrap_err();
    assert!(matches!(err, ProgramError::Missing(_)));
    assert!(err.to_string().ends_with("roads.shp does not exist."));
}

#[cfg(feature = "gdal")]
mod with_gdal {
    use std::process::Command;

    use rastkit::dataset::write_gtiff;
    use rastkit::programs::{proj4string, uncompressed_size, ProgramError};
    use rastkit::raster::{Grid, WriteOptions};

    const UTM_12N_WKT: &str = "PROJCS[\"WGS 84 / UTM zone 12N\",GEOGCS[\"WGS 84\",DATUM[\"WGS_1984\",SPHEROID[\"WGS 84\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"degree\",0.0174532925199433]],PROJECTION[\"Transverse_Mercator\"],PARAMETER[\"latitude_of_origin\",0],PARAMETER[\"central_meridian\",-111],PARAMETER[\"scale_factor\",0.9996],PARAMETER[\"false_easting\",500000],PARAMETER[\"false_northing\",0],UNIT[\"metre\",1],AUTHORITY[\"EPSG\",\"32612\"]]";

    const WGS84_ESRI: &str = "GEOGCS[\"GCS_WGS_1984\",DATUM[\"D_WGS_1984\",SPHEROID[\"WGS_1984\",6378137,298.257223563]],PRIMEM[\"Greenwich\",0],UNIT[\"Degree\",0.017453292519943295]]";

    #[test]
    fn geotiff_tools() {
        let dir = tempfile::tempdir().unwrap();
        let tif = dir.path().join("dem.tif");
        let grid = Grid::filled((1024, 512), 0i16);
        write_gtiff(
            &grid,
            &tif,
            &[500_000.0, 30.0, 0.0, 4_000_000.0, 0.0, -30.0],
            UTM_12N_WKT,
            &WriteOptions::default(),
        )
        .unwrap();

        assert_eq!(
            proj4string(&tif).unwrap(),
            "'+proj=utm +zone=12 +datum=WGS84 +units=m +no_defs'"
        );
        assert_eq!(uncompressed_size(&tif).unwrap(), "1.00 MB");
    }

    #[test]
    fn shapefile_tools() {
        let dir = tempfile::tempdir().unwrap();
        let shp = dir.path().join("roads.shp");
        std::fs::write(&shp, b"").unwrap();
        std::fs::write(dir.path().join("roads.prj"), WGS84_ESRI).unwrap();

        assert_eq!(
            proj4string(&shp).unwrap(),
            "'+proj=longlat +datum=WGS84 +no_defs'"
        );
        assert!(matches!(
            uncompressed_size(&shp),
            Err(ProgramError::NotARaster(_))
        ));
    }

    #[test]
    fn missing_source_exits_with_code_2() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.tif");

        let output = Command::new(env!("CARGO_BIN_EXE_proj4string"))
            .arg(&missing)
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(2));
        assert!(output.stdout.is_empty());
        assert_eq!(
            String::from_utf8(output.stderr).unwrap(),
            format!("Error: {} does not exist.\n", missing.display())
        );
    }

    #[test]
    fn unsupported_source_exits_with_code_2() {
        let dir = tempfile::tempdir().unwrap();
        let img = dir.path().join("dem.img");
        std::fs::write(&img, b"").unwrap();

        let output = Command::new(env!("CARGO_BIN_EXE_uncompressed_size"))
            .arg(&img)
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(2));
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert_eq!(stderr.lines().count(), 1);
        assert!(stderr.starts_with("Error: "));
        assert!(stderr.contains("must be a Shapefile (.shp) or GeoTIFF (.tif)"));
    }

    #[test]
    fn size_is_printed_on_one_line() {
        let dir = tempfile::tempdir().unwrap();
        let tif = dir.path().join("dem.tif");
        write_gtiff(
            &Grid::filled((1024, 512), 0i16),
            &tif,
            &[500_000.0, 30.0, 0.0, 4_000_000.0, 0.0, -30.0],
            UTM_12N_WKT,
            &WriteOptions::default(),
        )
        .unwrap();

        let output = Command::new(env!("CARGO_BIN_EXE_uncompressed_size"))
            .arg(&tif)
            .output()
            .unwrap();
        assert!(output.status.success());
        assert_eq!(String::from_utf8(output.stdout).unwrap(), "1.00 MB\n");
        assert!(output.stderr.is_empty());
    }

    #[test]
    fn no_argument_is_a_usage_error() {
        let output = Command::new(env!("CARGO_BIN_EXE_proj4string"))
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(2));
    }
}

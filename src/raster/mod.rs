//! Raster pixel types, in-memory grids and the computations run on them.

mod classes;
mod compare;
mod create_options;
mod grid;
mod legend;
mod metadata;
mod metrics;
#[cfg(feature = "gdal")]
mod rasterband;
mod stats;
mod types;

pub use classes::{
    build_attribute_table, build_class_table, build_color_table, hex_to_rgb, AttributeTable,
    ClassTable, ColorTable, Rgb, MAX_PALETTE_INDEX,
};
pub use compare::{compare_grids, GridComparison};
pub use create_options::{Compression, WriteOptions};
pub use grid::Grid;
pub use legend::{
    is_known_colormap, ClassLegend, Palette, PlotOptions, ResolvedPalette, DEFAULT_COLORMAP,
    KNOWN_COLORMAPS,
};
pub use metadata::RasterMetadata;
pub use metrics::{
    cell_area_hectares, human_readable_size, human_readable_size_with, uncompressed_size_bytes,
};
#[cfg(feature = "gdal")]
pub use rasterband::{
    band_attribute_table, band_pixel_type, set_band_attribute_table, set_band_color_table,
    RAT_LABEL_COLUMN, RAT_VALUE_COLUMN,
};
pub use stats::{continuous_stats, frequency_table, FrequencyRow, FrequencyTable, StatSummary};
pub use types::{bit_depth, gdal_code, PixelType, PixelValue};

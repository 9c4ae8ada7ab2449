//! Display parameters handed to a plotting backend.
//!
//! Nothing here renders; this module turns a palette choice and a grid into
//! the colormap name, class boundaries and nodata mask a plotting library
//! needs to draw continuous or categorical maps.

use log::warn;

use crate::errors::{RasterError, Result};
use crate::raster::{ClassTable, Grid, PixelValue};

/// Colormap used when a named palette is not recognized.
pub const DEFAULT_COLORMAP: &str = "viridis";

pub const KNOWN_COLORMAPS: &[&str] = &[
    "viridis", "plasma", "inferno", "magma", "cividis", "Greys", "gray", "binary", "bone",
    "Blues", "Greens", "Reds", "Oranges", "Purples", "YlGn", "YlGnBu", "YlOrRd", "BuGn",
    "RdYlGn", "RdYlBu", "RdBu", "Spectral", "coolwarm", "bwr", "seismic", "terrain", "ocean",
    "gist_earth", "jet", "rainbow", "turbo", "hsv", "twilight", "tab10", "tab20", "Set1",
    "Set2", "Set3", "Paired", "Accent",
];

/// How pixel values are colored.
#[derive(Debug, Clone, PartialEq)]
pub enum Palette {
    /// A named continuous colormap, e.g. `"viridis"`.
    Named(String),
    /// Class value to color string, for categorical maps.
    Classes(ClassTable),
}

impl Default for Palette {
    fn default() -> Self {
        Palette::Named(DEFAULT_COLORMAP.to_string())
    }
}

/// A [`Palette`] checked and laid out for drawing.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedPalette {
    Colormap(String),
    Categorical(ClassLegend),
}

impl Palette {
    /// Name of the colormap to use, falling back to [`DEFAULT_COLORMAP`] for unknown names.
    /// `None` for class palettes.
    pub fn colormap_name(&self) -> Option<&str> {
        match self {
            Palette::Named(name) if is_known_colormap(name) => Some(name.as_str()),
            Palette::Named(name) => {
                warn!("\"{name}\" is not a colormap option, using {DEFAULT_COLORMAP} instead");
                Some(DEFAULT_COLORMAP)
            }
            Palette::Classes(_) => None,
        }
    }

    pub fn resolve(&self) -> ResolvedPalette {
        match self {
            Palette::Named(_) => ResolvedPalette::Colormap(
                self.colormap_name().unwrap_or(DEFAULT_COLORMAP).to_string(),
            ),
            Palette::Classes(classes) => ResolvedPalette::Categorical(ClassLegend::new(classes)),
        }
    }
}

pub fn is_known_colormap(name: &str) -> bool {
    KNOWN_COLORMAPS.contains(&name)
}

/// Discrete color bar layout for a categorical map.
///
/// Each class value `v` owns the interval `[v - 0.5, v + 0.5)` between two
/// consecutive boundaries; ticks sit at the interval midpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassLegend {
    values: Vec<i64>,
    colors: Vec<String>,
    bounds: Vec<f64>,
}

impl ClassLegend {
    pub fn new(classes: &ClassTable) -> Self {
        let (values, colors): (Vec<i64>, Vec<String>) = classes
            .rows()
            .map(|(value, color)| (value, color.to_string()))
            .unzip();
        let mut bounds = values.iter().map(|v| *v as f64 - 0.5).collect::<Vec<_>>();
        if let Some(last) = values.last() {
            bounds.push(*last as f64 + 0.5);
        }
        ClassLegend {
            values,
            colors,
            bounds,
        }
    }

    /// Class values, ascending. These are also the tick labels.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Colors in the order of [`ClassLegend::values`].
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// `values.len() + 1` ascending boundaries.
    pub fn bounds(&self) -> &[f64] {
        &self.bounds
    }

    /// Midpoint between each pair of consecutive boundaries.
    pub fn ticks(&self) -> Vec<f64> {
        self.bounds.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }

    /// Relative color bar height, growing with the number of classes.
    pub fn colorbar_shrink(&self) -> f64 {
        0.1 * self.values.len() as f64
    }

    /// Index into [`ClassLegend::colors`] for a pixel value, if it falls in a class interval.
    pub fn class_index(&self, value: f64) -> Option<usize> {
        self.bounds
            .windows(2)
            .position(|w| value >= w[0] && value < w[1])
    }
}

/// Display options for a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotOptions {
    pub palette: Palette,
    /// Cells with this value are masked. Only integer sentinels are supported.
    pub nodata: Option<i64>,
    pub nodata_color: String,
    pub title: Option<String>,
    pub legend: bool,
    pub axes: bool,
    /// Close the figure after showing it.
    pub close: bool,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            palette: Palette::default(),
            nodata: None,
            nodata_color: "black".to_string(),
            title: None,
            legend: true,
            axes: false,
            close: true,
        }
    }
}

impl PlotOptions {
    /// Row-major mask, `true` where `grid` holds the nodata value.
    ///
    /// Fails with [`RasterError::InvalidInput`] if the nodata value cannot be
    /// represented exactly as `f64`.
    pub fn nodata_mask<T: PixelValue>(&self, grid: &Grid<T>) -> Result<Vec<bool>> {
        let Some(nodata) = self.nodata else {
            return Ok(vec![false; grid.len()]);
        };
        let sentinel = nodata as f64;
        if sentinel as i64 != nodata {
            return Err(RasterError::InvalidInput(format!(
                "nodata value {nodata} is not exactly representable"
            )));
        }
        Ok(grid.data().iter().map(|v| v.to_f64() == sentinel).collect())
    }
}

//! Class tables for categorical rasters.
//!
//! A [`ClassTable`] maps integer pixel values to a string, either a display
//! color or a text label. From it we build the [`ColorTable`] and
//! [`AttributeTable`] rows that the raster backend attaches to a band.

use std::collections::BTreeMap;

use crate::errors::{RasterError, Result};

/// Largest value a GDAL palette entry can be indexed with.
pub const MAX_PALETTE_INDEX: i64 = u16::MAX as i64;

/// Integer class values mapped to strings, kept in ascending key order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassTable {
    entries: BTreeMap<i64, String>,
}

impl ClassTable {
    /// Build a table from `(value, text)` pairs in any order.
    ///
    /// Fails with [`RasterError::InvalidClassMap`] for an empty mapping, a
    /// repeated class value or a blank string.
    pub fn new<I, S>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let mut entries = BTreeMap::new();
        for (value, text) in mapping {
            let text = text.into();
            if text.trim().is_empty() {
                return Err(RasterError::InvalidClassMap(format!(
                    "class {value} has an empty string"
                )));
            }
            if entries.insert(value, text).is_some() {
                return Err(RasterError::InvalidClassMap(format!(
                    "class {value} appears more than once"
                )));
            }
        }
        if entries.is_empty() {
            return Err(RasterError::InvalidClassMap("no classes given".to_string()));
        }
        Ok(ClassTable { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, value: i64) -> Option<&str> {
        self.entries.get(&value).map(String::as_str)
    }

    /// Rows in ascending class value order.
    pub fn rows(&self) -> impl Iterator<Item = (i64, &str)> + '_ {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.entries.keys().copied()
    }
}

/// Same as [`ClassTable::new`].
pub fn build_class_table<I, S>(mapping: I) -> Result<ClassTable>
where
    I: IntoIterator<Item = (i64, S)>,
    S: Into<String>,
{
    ClassTable::new(mapping)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Decode `#RRGGBB` or `RRGGBB` into its three 8-bit components.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(RasterError::InvalidColor(hex.to_string()));
    }
    let component = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .map_err(|_| RasterError::InvalidColor(hex.to_string()))
    };
    Ok(Rgb::new(component(0)?, component(2)?, component(4)?))
}

/// Palette rows for a categorical band, ascending by class value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    rows: Vec<(i64, Rgb)>,
}

impl ColorTable {
    pub fn rows(&self) -> &[(i64, Rgb)] {
        &self.rows
    }

    pub fn get(&self, value: i64) -> Option<Rgb> {
        self.rows
            .binary_search_by_key(&value, |(v, _)| *v)
            .ok()
            .map(|i| self.rows[i].1)
    }
}

/// Build a palette from `(value, hex color)` pairs.
///
/// Values must be usable as palette indexes (`0..=65535`).
pub fn build_color_table<I, S>(mapping: I) -> Result<ColorTable>
where
    I: IntoIterator<Item = (i64, S)>,
    S: Into<String>,
{
    let classes = ClassTable::new(mapping)?;
    let rows = classes
        .rows()
        .map(|(value, color)| {
            if !(0..=MAX_PALETTE_INDEX).contains(&value) {
                return Err(RasterError::InvalidClassMap(format!(
                    "class {value} is outside the palette range 0..={MAX_PALETTE_INDEX}"
                )));
            }
            Ok((value, hex_to_rgb(color)?))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ColorTable { rows })
}

/// Label rows for a raster attribute table, ascending by class value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeTable {
    rows: Vec<(i64, String)>,
}

impl AttributeTable {
    #[cfg_attr(not(feature = "gdal"), allow(dead_code))]
    pub(crate) fn from_rows(mut rows: Vec<(i64, String)>) -> Self {
        rows.sort_by_key(|(value, _)| *value);
        AttributeTable { rows }
    }

    pub fn rows(&self) -> &[(i64, String)] {
        &self.rows
    }
}

/// Build attribute table rows from `(value, label)` pairs.
pub fn build_attribute_table<I, S>(mapping: I) -> Result<AttributeTable>
where
    I: IntoIterator<Item = (i64, S)>,
    S: Into<String>,
{
    let classes = ClassTable::new(mapping)?;
    let rows = classes
        .rows()
        .map(|(value, label)| (value, label.to_string()))
        .collect();
    Ok(AttributeTable { rows })
}

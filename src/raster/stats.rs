//! Descriptive statistics over in-memory grids.
//!
//! Nodata cells are excluded by exact equality. This is right for integer
//! rasters; for floating point rasters a sentinel that went through any
//! arithmetic may no longer compare equal, and a `NaN` sentinel never does.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use crate::errors::{RasterError, Result};
use crate::raster::PixelValue;

/// Summary statistics of continuous data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// The nodata value that was excluded, if any.
    pub nodata: Option<f64>,
}

/// Min, max, mean and population standard deviation of `values`, skipping `nodata` cells.
pub fn continuous_stats<T: PixelValue>(values: &[T], nodata: Option<f64>) -> Result<StatSummary> {
    let valid: Vec<f64> = values
        .iter()
        .map(|v| v.to_f64())
        .filter(|v| Some(*v) != nodata)
        .collect();
    if valid.is_empty() {
        return Err(RasterError::EmptyInput("every cell is nodata"));
    }

    let n = valid.len() as f64;
    let (min, max, sum) = valid.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), v| (min.min(*v), max.max(*v), sum + v),
    );
    let mean = sum / n;
    let variance = valid.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    Ok(StatSummary {
        min,
        max,
        mean,
        std_dev: variance.sqrt(),
        nodata,
    })
}

impl Display for StatSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut header = vec!["Min.".to_string(), "Max.".into(), "Mean".into(), "Std.".into()];
        let mut values = [self.min, self.max, self.mean, self.std_dev]
            .iter()
            .map(|v| format!("{v:.2}"))
            .collect::<Vec<_>>();
        if let Some(nodata) = self.nodata {
            header.push("NoData".into());
            values.push(format!("{nodata}"));
        }
        let widths = header
            .iter()
            .zip(&values)
            .map(|(h, v)| h.len().max(v.len()))
            .collect::<Vec<_>>();
        write_row(f, &header, &widths)?;
        write_row(f, &values, &widths)
    }
}

/// One class of a [`FrequencyTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyRow {
    pub class_value: i64,
    pub count: u64,
    pub percentage: f64,
}

/// Counts per class value, sorted ascending by value.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
    total: u64,
}

impl FrequencyTable {
    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    /// Number of counted (non-nodata) cells.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The synthetic `Total` row: the sum of all counts at 100 percent.
    pub fn total_row(&self) -> (u64, f64) {
        (self.total, 100.0)
    }

    pub fn get(&self, class_value: i64) -> Option<&FrequencyRow> {
        self.rows
            .binary_search_by_key(&class_value, |r| r.class_value)
            .ok()
            .map(|i| &self.rows[i])
    }
}

/// Count the distinct values of an integer grid, skipping `nodata` cells.
pub fn frequency_table<T>(values: &[T], nodata: Option<f64>) -> Result<FrequencyTable>
where
    T: PixelValue + Into<i64>,
{
    let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
    for v in values {
        if Some(v.to_f64()) == nodata {
            continue;
        }
        *counts.entry((*v).into()).or_default() += 1;
    }
    let total: u64 = counts.values().sum();
    if total == 0 {
        return Err(RasterError::EmptyInput("every cell is nodata"));
    }

    let rows = counts
        .into_iter()
        .map(|(class_value, count)| FrequencyRow {
            class_value,
            count,
            percentage: count as f64 / total as f64 * 100.0,
        })
        .collect();
    Ok(FrequencyTable { rows, total })
}

impl Display for FrequencyTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let header = ["Class".to_string(), "Count".into(), "%".into()];
        let (total, percentage) = self.total_row();
        let body = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.class_value.to_string(),
                    r.count.to_string(),
                    format!("{:.1}", r.percentage),
                ]
            })
            .chain(std::iter::once([
                "Total".to_string(),
                total.to_string(),
                format!("{percentage:.1}"),
            ]))
            .collect::<Vec<_>>();

        let widths = (0..header.len())
            .map(|i| {
                body.iter()
                    .map(|row| row[i].len())
                    .chain(std::iter::once(header[i].len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();
        write_row(f, &header, &widths)?;
        for row in &body {
            write_row(f, row, &widths)?;
        }
        Ok(())
    }
}

fn write_row(f: &mut Formatter<'_>, cells: &[String], widths: &[usize]) -> std::fmt::Result {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(f, "{line}")
}

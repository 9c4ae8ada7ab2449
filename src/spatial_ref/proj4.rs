use crate::errors::{RasterError, Result};

/// Linear unit of a proj4 string, e.g. `"m"` for `+proj=utm +zone=12 +units=m`.
///
/// The string is split on `+` and the first token containing `units` is read
/// as `key=value`. Fails with [`RasterError::MalformedProjection`] when there
/// is no such token or it carries no value.
pub fn linear_unit(proj4: &str) -> Result<String> {
    let token = proj4
        .split('+')
        .find(|token| token.contains("units"))
        .ok_or_else(|| RasterError::MalformedProjection(proj4.to_string()))?;
    token
        .trim()
        .split('=')
        .nth(1)
        .map(|unit| unit.trim().to_string())
        .ok_or_else(|| RasterError::MalformedProjection(proj4.to_string()))
}

/// Wrap a proj4 string in single quotes, ready to paste into a shell command.
pub fn quoted(proj4: &str) -> String {
    format!("'{}'", proj4.trim_end())
}

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

/// A feed attribute whose text could not be read as the requested type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field {field} has unparseable value {value:?}")]
pub struct FieldError {
    pub field: &'static str,
    pub value: String,
}

impl FieldError {
    fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_string(),
        }
    }
}

/// A WGS84 position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub(crate) fn parse(lat: &str, lon: &str) -> Result<Self, FieldError> {
        Ok(Self {
            lat: parse_number("lat", lat)?,
            lon: parse_number("lon", lon)?,
        })
    }
}

/// The lat/lon box enclosing a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

pub(crate) fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, FieldError> {
    value
        .trim()
        .parse()
        .map_err(|_| FieldError::new(field, value))
}

/// Reads a `true`/`false` attribute. The feed omits optional flags rather
/// than sending `false`, so an empty value reads as `false`.
pub(crate) fn parse_flag(field: &'static str, value: &str) -> Result<bool, FieldError> {
    match value.trim() {
        "" | "false" => Ok(false),
        "true" => Ok(true),
        _ => Err(FieldError::new(field, value)),
    }
}

/// Reads an epoch-milliseconds timestamp.
pub(crate) fn parse_epoch_millis(
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, FieldError> {
    let millis: i64 = parse_number(field, value)?;
    DateTime::from_timestamp_millis(millis).ok_or_else(|| FieldError::new(field, value))
}

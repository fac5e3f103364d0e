//! Output formatting and persistence for decoded feed data.
//!
//! Supports pretty JSON on stdout and CSV append of vehicle snapshots.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use crate::model::{LocationResponse, VehicleLocation};
use csv::WriterBuilder;
use std::fs::{self, OpenOptions};

/// Writes any decoded value to stdout as pretty-printed JSON.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// One CSV row: a vehicle plus the snapshot time it came with.
#[derive(Serialize)]
struct VehicleRecord<'a> {
    last_time: &'a str,
    id: &'a str,
    route_tag: &'a str,
    dir_tag: &'a str,
    lat: &'a str,
    lon: &'a str,
    secs_since_report: &'a str,
    predictable: &'a str,
    heading: &'a str,
    speed_km_hr: &'a str,
    leading_vehicle_id: &'a str,
}

impl<'a> VehicleRecord<'a> {
    fn new(last_time: &'a str, v: &'a VehicleLocation) -> Self {
        Self {
            last_time,
            id: &v.id,
            route_tag: &v.route_tag,
            dir_tag: &v.dir_tag,
            lat: &v.lat,
            lon: &v.lon,
            secs_since_report: &v.secs_since_report,
            predictable: &v.predictable,
            heading: &v.heading,
            speed_km_hr: &v.speed_km_hr,
            leading_vehicle_id: &v.leading_vehicle_id,
        }
    }
}

/// Appends one row per vehicle in `snapshot` to a CSV file.
///
/// Writes headers when the file is missing or still empty.
pub fn append_vehicle_records(path: &str, snapshot: &LocationResponse) -> Result<()> {
    let has_rows = fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false);
    debug!(path, has_rows, rows = snapshot.vehicles.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!has_rows)
        .from_writer(file);

    for vehicle in &snapshot.vehicles {
        writer.serialize(VehicleRecord::new(&snapshot.last_time.time, vehicle))?;
    }
    writer.flush()?;

    Ok(())
}

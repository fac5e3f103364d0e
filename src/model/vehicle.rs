use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::field::{Coordinates, FieldError, parse_epoch_millis, parse_flag, parse_number};
use crate::options::VehicleLocationOption;

/// `vehicleLocations` envelope.
///
/// Returned whole because `last_time` is what a caller sends back as the
/// since-time of its next poll.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocationResponse {
    #[serde(rename(deserialize = "vehicle"))]
    pub vehicles: Vec<VehicleLocation>,
    #[serde(rename(deserialize = "lastTime"))]
    pub last_time: LastTime,
}

impl LocationResponse {
    pub fn last_time(&self) -> Result<DateTime<Utc>, FieldError> {
        parse_epoch_millis("lastTime", &self.last_time.time)
    }

    /// Since-time option that asks for reports newer than this snapshot.
    pub fn next_since_time(&self) -> VehicleLocationOption {
        VehicleLocationOption::since_time(self.last_time.time.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LastTime {
    #[serde(rename(deserialize = "@time"))]
    pub time: String,
}

/// A vehicle's last reported position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct VehicleLocation {
    #[serde(rename(deserialize = "@id"))]
    pub id: String,
    #[serde(rename(deserialize = "@routeTag"))]
    pub route_tag: String,
    #[serde(rename(deserialize = "@dirTag"))]
    pub dir_tag: String,
    #[serde(rename(deserialize = "@lat"))]
    pub lat: String,
    #[serde(rename(deserialize = "@lon"))]
    pub lon: String,
    #[serde(rename(deserialize = "@secsSinceReport"))]
    pub secs_since_report: String,
    #[serde(rename(deserialize = "@predictable"))]
    pub predictable: String,
    #[serde(rename(deserialize = "@heading"))]
    pub heading: String,
    #[serde(rename(deserialize = "@speedKmHr"))]
    pub speed_km_hr: String,
    #[serde(rename(deserialize = "@leadingVehicleId"))]
    pub leading_vehicle_id: String,
}

impl VehicleLocation {
    pub fn coordinates(&self) -> Result<Coordinates, FieldError> {
        Coordinates::parse(&self.lat, &self.lon)
    }

    pub fn secs_since_report(&self) -> Result<u32, FieldError> {
        parse_number("secsSinceReport", &self.secs_since_report)
    }

    pub fn predictable(&self) -> Result<bool, FieldError> {
        parse_flag("predictable", &self.predictable)
    }

    /// Degrees clockwise from north; the feed sends a negative value when unknown.
    pub fn heading(&self) -> Result<i32, FieldError> {
        parse_number("heading", &self.heading)
    }

    pub fn speed_km_hr(&self) -> Result<f64, FieldError> {
        parse_number("speedKmHr", &self.speed_km_hr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"
<body copyright="test">
<vehicle id="1111" routeTag="1" dirTag="1_outbound" lat="37.77513" lon="-122.41946" secsSinceReport="4" predictable="true" heading="225" speedKmHr="12.5"/>
<lastTime time="1234567890123"/>
</body>
"#;

    #[test]
    fn test_decode_and_accessors() {
        let resp: LocationResponse = quick_xml::de::from_str(XML).unwrap();
        let v = &resp.vehicles[0];
        assert_eq!(v.leading_vehicle_id, "");
        assert_eq!(v.secs_since_report(), Ok(4));
        assert_eq!(v.predictable(), Ok(true));
        assert_eq!(v.heading(), Ok(225));
        assert_eq!(v.speed_km_hr(), Ok(12.5));
        assert_eq!(v.coordinates().unwrap().lat, 37.77513);
        assert_eq!(resp.last_time().unwrap().timestamp_millis(), 1234567890123);
    }

    #[test]
    fn test_next_since_time_uses_last_time() {
        let resp: LocationResponse = quick_xml::de::from_str(XML).unwrap();
        assert_eq!(
            resp.next_since_time(),
            VehicleLocationOption::SinceTime("1234567890123".into())
        );
    }

    #[test]
    fn test_missing_last_time_is_empty() {
        let resp: LocationResponse = quick_xml::de::from_str("<body/>").unwrap();
        assert!(resp.vehicles.is_empty());
        assert_eq!(resp.last_time.time, "");
        assert!(resp.last_time().is_err());
    }
}

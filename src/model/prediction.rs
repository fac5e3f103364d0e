use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::field::{FieldError, parse_epoch_millis, parse_flag, parse_number};

/// `predictions` and `predictionsForMultiStops` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PredictionList {
    #[serde(rename(deserialize = "predictions"))]
    pub predictions: Vec<PredictionData>,
}

/// Predictions for one route at one stop, grouped by direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PredictionData {
    #[serde(rename(deserialize = "@agencyTitle"))]
    pub agency_title: String,
    #[serde(rename(deserialize = "@routeTitle"))]
    pub route_title: String,
    #[serde(rename(deserialize = "@routeTag"))]
    pub route_tag: String,
    #[serde(rename(deserialize = "@stopTitle"))]
    pub stop_title: String,
    #[serde(rename(deserialize = "@stopTag"))]
    pub stop_tag: String,
    #[serde(rename(deserialize = "direction"))]
    pub directions: Vec<PredictionDirection>,
    #[serde(rename(deserialize = "message"))]
    pub messages: Vec<Message>,
}

impl PredictionData {
    /// True when no direction carries a single prediction.
    pub fn is_empty(&self) -> bool {
        self.directions.iter().all(|d| d.predictions.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PredictionDirection {
    #[serde(rename(deserialize = "@title"))]
    pub title: String,
    #[serde(rename(deserialize = "prediction"))]
    pub predictions: Vec<Prediction>,
}

/// One vehicle arrival estimate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Prediction {
    #[serde(rename(deserialize = "@epochTime"))]
    pub epoch_time: String,
    #[serde(rename(deserialize = "@seconds"))]
    pub seconds: String,
    #[serde(rename(deserialize = "@minutes"))]
    pub minutes: String,
    #[serde(rename(deserialize = "@isDeparture"))]
    pub is_departure: String,
    #[serde(rename(deserialize = "@affectedByLayover"))]
    pub affected_by_layover: String,
    #[serde(rename(deserialize = "@dirTag"))]
    pub dir_tag: String,
    #[serde(rename(deserialize = "@vehicle"))]
    pub vehicle: String,
    #[serde(rename(deserialize = "@vehiclesInConsist"))]
    pub vehicles_in_consist: String,
    #[serde(rename(deserialize = "@block"))]
    pub block: String,
    #[serde(rename(deserialize = "@tripTag"))]
    pub trip_tag: String,
}

impl Prediction {
    pub fn epoch_time(&self) -> Result<DateTime<Utc>, FieldError> {
        parse_epoch_millis("epochTime", &self.epoch_time)
    }

    pub fn seconds(&self) -> Result<u32, FieldError> {
        parse_number("seconds", &self.seconds)
    }

    pub fn minutes(&self) -> Result<u32, FieldError> {
        parse_number("minutes", &self.minutes)
    }

    pub fn is_departure(&self) -> Result<bool, FieldError> {
        parse_flag("isDeparture", &self.is_departure)
    }

    pub fn affected_by_layover(&self) -> Result<bool, FieldError> {
        parse_flag("affectedByLayover", &self.affected_by_layover)
    }

    pub fn vehicles_in_consist(&self) -> Result<u32, FieldError> {
        parse_number("vehiclesInConsist", &self.vehicles_in_consist)
    }
}

/// Advisory text attached to a stop's predictions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Message {
    #[serde(rename(deserialize = "@text"))]
    pub text: String,
    #[serde(rename(deserialize = "@priority"))]
    pub priority: String,
}

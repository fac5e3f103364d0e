//! Feed commands, sent as the `command` query parameter.
//!
//! A [`Command`] names the client operation; [`Command::as_str`] is what goes
//! on the wire. The two only differ for [`Command::StopPredictions`], which
//! the feed serves under `predictions`.

use std::fmt;

/// Selects which feed behaviour a request invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    AgencyList,
    RouteList,
    RouteConfig,
    Predictions,
    /// `predictions` looked up by route-independent stop id.
    StopPredictions,
    PredictionsForMultiStops,
    VehicleLocations,
}

impl Command {
    /// The wire name of the command.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::AgencyList => "agencyList",
            Command::RouteList => "routeList",
            Command::RouteConfig => "routeConfig",
            Command::Predictions | Command::StopPredictions => "predictions",
            Command::PredictionsForMultiStops => "predictionsForMultiStops",
            Command::VehicleLocations => "vehicleLocations",
        }
    }

    /// Operation label used in errors and log fields.
    pub fn label(self) -> &'static str {
        match self {
            Command::StopPredictions => "stopPredictions",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_predictions_shares_wire_name() {
        assert_eq!(Command::StopPredictions.as_str(), "predictions");
        assert_eq!(Command::StopPredictions.to_string(), "stopPredictions");
        assert_ne!(Command::StopPredictions, Command::Predictions);
    }

    #[test]
    fn test_display_matches_wire_name_for_plain_commands() {
        assert_eq!(Command::AgencyList.to_string(), "agencyList");
        assert_eq!(
            Command::PredictionsForMultiStops.to_string(),
            "predictionsForMultiStops"
        );
    }
}

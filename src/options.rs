//! Optional parameters for the commands that accept them.
//!
//! Every option contributes exactly one [`QueryParam`]. Options are passed as
//! slices and applied in the order given; nothing checks for conflicting
//! combinations, the feed decides what they mean.

use crate::request::QueryParam;

/// Since-time sent with `vehicleLocations` when the caller gives none:
/// every vehicle reporting since service start.
pub const DEFAULT_SINCE_TIME: &str = "0";

pub trait RequestOption {
    fn to_param(&self) -> QueryParam;
}

/// Options for [`NextbusClient::route_config`](crate::NextbusClient::route_config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteConfigOption {
    /// Restrict the response to a single route.
    Route(String),
    /// Leave out path geometry.
    Terse,
    /// Include directions that are not meant for UIs (`useForUI=false`).
    Verbose,
}

impl RouteConfigOption {
    pub fn route(tag: impl Into<String>) -> Self {
        Self::Route(tag.into())
    }
}

impl RequestOption for RouteConfigOption {
    fn to_param(&self) -> QueryParam {
        match self {
            RouteConfigOption::Route(tag) => QueryParam::pair("r", tag.as_str()),
            RouteConfigOption::Terse => QueryParam::flag("terse"),
            RouteConfigOption::Verbose => QueryParam::flag("verbose"),
        }
    }
}

/// Options for
/// [`NextbusClient::predictions_for_multi_stops`](crate::NextbusClient::predictions_for_multi_stops).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiStopOption {
    /// A route and stop to predict for. Repeatable.
    Stop { route: String, stop: String },
    /// Ask for short titles in the response.
    ShortTitles,
}

impl MultiStopOption {
    pub fn stop(route: impl Into<String>, stop: impl Into<String>) -> Self {
        Self::Stop {
            route: route.into(),
            stop: stop.into(),
        }
    }
}

impl RequestOption for MultiStopOption {
    fn to_param(&self) -> QueryParam {
        match self {
            MultiStopOption::Stop { route, stop } => {
                QueryParam::pair("stops", format!("{route}|{stop}"))
            }
            MultiStopOption::ShortTitles => QueryParam::pair("useShortTitles", "true"),
        }
    }
}

/// Options for [`NextbusClient::vehicle_locations`](crate::NextbusClient::vehicle_locations).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleLocationOption {
    Route(String),
    /// Only vehicles that reported after this epoch-milliseconds timestamp.
    /// When several are supplied the last one wins.
    SinceTime(String),
}

impl VehicleLocationOption {
    pub fn route(tag: impl Into<String>) -> Self {
        Self::Route(tag.into())
    }

    pub fn since_time(time: impl Into<String>) -> Self {
        Self::SinceTime(time.into())
    }
}

impl RequestOption for VehicleLocationOption {
    fn to_param(&self) -> QueryParam {
        match self {
            VehicleLocationOption::Route(tag) => QueryParam::pair("r", tag.as_str()),
            VehicleLocationOption::SinceTime(time) => QueryParam::pair("t", time.as_str()),
        }
    }
}

/// Turns vehicle-location options into query params.
///
/// Route filters keep their order; exactly one `t` param is appended last,
/// taken from the last [`VehicleLocationOption::SinceTime`] or defaulting to
/// [`DEFAULT_SINCE_TIME`].
pub(crate) fn vehicle_location_params(options: &[VehicleLocationOption]) -> Vec<QueryParam> {
    let mut since = None;
    let mut params = Vec::with_capacity(options.len() + 1);
    for option in options {
        match option {
            VehicleLocationOption::SinceTime(_) => since = Some(option.to_param()),
            VehicleLocationOption::Route(_) => params.push(option.to_param()),
        }
    }
    params.push(since.unwrap_or_else(|| QueryParam::pair("t", DEFAULT_SINCE_TIME)));
    params
}

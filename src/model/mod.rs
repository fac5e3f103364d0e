//! Records decoded from the feed's XML envelopes.
//!
//! Every attribute is kept verbatim as text; an attribute the feed leaves out
//! decodes to an empty string. Lists keep document order and nothing checks
//! cross references (a direction's stop markers are not validated against the
//! route's stops). Typed accessors parse on demand and fail per field with a
//! [`FieldError`].

mod agency;
mod field;
mod prediction;
mod route;
mod vehicle;

pub use agency::{Agency, AgencyList};
pub use field::{BoundingBox, Coordinates, FieldError};
pub use prediction::{Message, Prediction, PredictionData, PredictionDirection, PredictionList};
pub use route::{
    Direction, Path, Point, Route, RouteConfig, RouteConfigList, RouteList, Stop, StopMarker,
};
pub use vehicle::{LastTime, LocationResponse, VehicleLocation};

use serde::{Deserialize, Serialize};

use super::field::{BoundingBox, Coordinates, FieldError, parse_flag, parse_number};

/// `routeList` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteList {
    #[serde(rename(deserialize = "route"))]
    pub routes: Vec<Route>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Route {
    #[serde(rename(deserialize = "@tag"))]
    pub tag: String,
    #[serde(rename(deserialize = "@title"))]
    pub title: String,
}

/// `routeConfig` envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteConfigList {
    #[serde(rename(deserialize = "route"))]
    pub routes: Vec<RouteConfig>,
}

/// Full metadata for one route: its stops, directions and path geometry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteConfig {
    #[serde(rename(deserialize = "@tag"))]
    pub tag: String,
    #[serde(rename(deserialize = "@title"))]
    pub title: String,
    #[serde(rename(deserialize = "@color"))]
    pub color: String,
    #[serde(rename(deserialize = "@oppositeColor"))]
    pub opposite_color: String,
    #[serde(rename(deserialize = "@latMin"))]
    pub lat_min: String,
    #[serde(rename(deserialize = "@latMax"))]
    pub lat_max: String,
    #[serde(rename(deserialize = "@lonMin"))]
    pub lon_min: String,
    #[serde(rename(deserialize = "@lonMax"))]
    pub lon_max: String,
    #[serde(rename(deserialize = "stop"))]
    pub stops: Vec<Stop>,
    #[serde(rename(deserialize = "direction"))]
    pub directions: Vec<Direction>,
    /// Empty when the route was requested terse.
    #[serde(rename(deserialize = "path"))]
    pub paths: Vec<Path>,
}

impl RouteConfig {
    pub fn bounds(&self) -> Result<BoundingBox, FieldError> {
        Ok(BoundingBox {
            lat_min: parse_number("latMin", &self.lat_min)?,
            lat_max: parse_number("latMax", &self.lat_max)?,
            lon_min: parse_number("lonMin", &self.lon_min)?,
            lon_max: parse_number("lonMax", &self.lon_max)?,
        })
    }

    /// First stop on this route with the given tag.
    pub fn stop(&self, tag: &str) -> Option<&Stop> {
        self.stops.iter().find(|s| s.tag == tag)
    }

    /// Resolves a direction's stop markers against this route's stops, in
    /// marker order. Markers with no matching stop yield `None`.
    pub fn direction_stops<'a>(
        &'a self,
        direction: &'a Direction,
    ) -> impl Iterator<Item = Option<&'a Stop>> + 'a {
        direction.stops.iter().map(move |marker| self.stop(&marker.tag))
    }
}

/// A physical stop on a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Stop {
    #[serde(rename(deserialize = "@tag"))]
    pub tag: String,
    #[serde(rename(deserialize = "@title"))]
    pub title: String,
    #[serde(rename(deserialize = "@lat"))]
    pub lat: String,
    #[serde(rename(deserialize = "@lon"))]
    pub lon: String,
    /// Route-independent identifier, used by stop predictions.
    #[serde(rename(deserialize = "@stopId"))]
    pub stop_id: String,
}

impl Stop {
    pub fn coordinates(&self) -> Result<Coordinates, FieldError> {
        Coordinates::parse(&self.lat, &self.lon)
    }
}

/// One travel direction of a route, e.g. inbound or outbound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Direction {
    #[serde(rename(deserialize = "@tag"))]
    pub tag: String,
    #[serde(rename(deserialize = "@title"))]
    pub title: String,
    #[serde(rename(deserialize = "@name"))]
    pub name: String,
    #[serde(rename(deserialize = "@useForUI"))]
    pub use_for_ui: String,
    #[serde(rename(deserialize = "stop"))]
    pub stops: Vec<StopMarker>,
}

impl Direction {
    pub fn use_for_ui(&self) -> Result<bool, FieldError> {
        parse_flag("useForUI", &self.use_for_ui)
    }
}

/// Reference, by tag, to one of the route's stops.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct StopMarker {
    #[serde(rename(deserialize = "@tag"))]
    pub tag: String,
}

/// Polyline segment of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Path {
    #[serde(rename(deserialize = "point"))]
    pub points: Vec<Point>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Point {
    #[serde(rename(deserialize = "@lat"))]
    pub lat: String,
    #[serde(rename(deserialize = "@lon"))]
    pub lon: String,
}

impl Point {
    pub fn coordinates(&self) -> Result<Coordinates, FieldError> {
        Coordinates::parse(&self.lat, &self.lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUTE: &str = r#"
<body copyright="test">
<route tag="1" title="1-first" color="660000" oppositeColor="ffffff" latMin="12.5" latMax="45.25" lonMin="-123.5" lonMax="-100">
<stop tag="1123" title="First stop" lat="12.5" lon="-123.5" stopId="98765"/>
<stop tag="1234" title="Second stop" lat="23.5" lon="-110.25" stopId="87654"/>
<direction tag="1out" title="Outbound" name="Outbound" useForUI="true">
<stop tag="1123"/>
<stop tag="9999"/>
<stop tag="1234"/>
</direction>
<path>
<point lat="12.5" lon="-123.5"/>
<point lat="23.5" lon="-110.25"/>
</path>
<path>
<point lat="23.5" lon="-110.25"/>
</path>
</route>
</body>
"#;

    fn route() -> RouteConfig {
        let list: RouteConfigList = quick_xml::de::from_str(ROUTE).unwrap();
        list.routes.into_iter().next().unwrap()
    }

    #[test]
    fn test_nested_lists_decode_in_order() {
        let route = route();
        assert_eq!(route.stops.len(), 2);
        assert_eq!(route.directions[0].stops.len(), 3);
        assert_eq!(route.directions[0].stops[1].tag, "9999");
        assert_eq!(route.paths.len(), 2);
        assert_eq!(route.paths[0].points.len(), 2);
    }

    #[test]
    fn test_direction_stops_does_not_validate_markers() {
        let route = route();
        let resolved: Vec<_> = route
            .direction_stops(&route.directions[0])
            .map(|s| s.map(|s| s.title.as_str()))
            .collect();
        assert_eq!(resolved, vec![Some("First stop"), None, Some("Second stop")]);
    }

    #[test]
    fn test_bounds() {
        let bounds = route().bounds().unwrap();
        assert_eq!(bounds.lat_min, 12.5);
        assert_eq!(bounds.lon_max, -100.0);
    }

    #[test]
    fn test_stop_lookup_and_coordinates() {
        let route = route();
        let stop = route.stop("1234").unwrap();
        assert_eq!(stop.stop_id, "87654");
        let coords = stop.coordinates().unwrap();
        assert_eq!(coords.lat, 23.5);
        assert_eq!(coords.lon, -110.25);
        assert!(route.stop("0000").is_none());
    }

    #[test]
    fn test_use_for_ui() {
        assert_eq!(route().directions[0].use_for_ui(), Ok(true));
    }
}

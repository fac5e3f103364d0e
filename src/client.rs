use reqwest::Url;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::command::Command;
use crate::config::ClientConfig;
use crate::error::{NextbusError, Result};
use crate::fetch::{BasicClient, HttpClient, fetch_bytes};
use crate::model::{
    Agency, AgencyList, LocationResponse, PredictionData, PredictionList, Route, RouteConfig,
    RouteConfigList, RouteList,
};
use crate::options::{
    MultiStopOption, RequestOption, RouteConfigOption, VehicleLocationOption,
    vehicle_location_params,
};
use crate::parser::parse_feed;
use crate::request::{QueryParam, build_url};

/// Client for the NextBus public XML feed.
///
/// Holds nothing but the transport and the base URL, so one client can serve
/// any number of concurrent calls. Every call makes exactly one request and
/// never retries; an empty list in a response is returned as success.
#[derive(Debug, Clone)]
pub struct NextbusClient<C = BasicClient> {
    http: C,
    base_url: Url,
}

impl NextbusClient<BasicClient> {
    /// Client for the public endpoint with default timeouts.
    pub fn new() -> Result<Self> {
        Self::from_config(&ClientConfig::default())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let http = BasicClient::from_config(config).map_err(NextbusError::ClientBuild)?;
        Self::with_http_client(http, &config.base_url)
    }
}

impl<C: HttpClient> NextbusClient<C> {
    /// Client that sends its requests through `http`.
    pub fn with_http_client(http: C, base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|e| NextbusError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn http_client(&self) -> &C {
        &self.http
    }

    /// Fetches every agency the feed serves.
    #[tracing::instrument(skip(self))]
    pub async fn agency_list(&self) -> Result<Vec<Agency>> {
        let list: AgencyList = self.request(Command::AgencyList, None, []).await?;
        debug!(count = list.agencies.len(), "Agencies decoded");
        Ok(list.agencies)
    }

    /// Fetches the routes of one agency. An unknown agency decodes to an
    /// empty list.
    #[tracing::instrument(skip(self))]
    pub async fn route_list(&self, agency: &str) -> Result<Vec<Route>> {
        let list: RouteList = self.request(Command::RouteList, Some(agency), []).await?;
        debug!(count = list.routes.len(), "Routes decoded");
        Ok(list.routes)
    }

    /// Fetches route metadata for an agency, all routes unless an option
    /// restricts it to one.
    #[tracing::instrument(skip(self))]
    pub async fn route_config(
        &self,
        agency: &str,
        options: &[RouteConfigOption],
    ) -> Result<Vec<RouteConfig>> {
        let params = options.iter().map(RequestOption::to_param);
        let list: RouteConfigList = self
            .request(Command::RouteConfig, Some(agency), params)
            .await?;
        debug!(count = list.routes.len(), "Route configs decoded");
        Ok(list.routes)
    }

    /// Fetches predictions at a stop for every route serving it.
    ///
    /// `stop_id` is the route-independent stop identifier, not a stop tag.
    /// The request goes out as `command=predictions`; errors report
    /// [`Command::StopPredictions`].
    #[tracing::instrument(skip(self))]
    pub async fn stop_predictions(
        &self,
        agency: &str,
        stop_id: &str,
    ) -> Result<Vec<PredictionData>> {
        let params = [QueryParam::pair("stopId", stop_id)];
        self.predictions_request(Command::StopPredictions, agency, params)
            .await
    }

    /// Fetches predictions for one route at one stop.
    #[tracing::instrument(skip(self))]
    pub async fn predictions(
        &self,
        agency: &str,
        route: &str,
        stop: &str,
    ) -> Result<Vec<PredictionData>> {
        let params = [QueryParam::pair("r", route), QueryParam::pair("s", stop)];
        self.predictions_request(Command::Predictions, agency, params)
            .await
    }

    /// Fetches predictions for several route/stop pairs in one request.
    #[tracing::instrument(skip(self))]
    pub async fn predictions_for_multi_stops(
        &self,
        agency: &str,
        options: &[MultiStopOption],
    ) -> Result<Vec<PredictionData>> {
        let params = options.iter().map(RequestOption::to_param);
        self.predictions_request(Command::PredictionsForMultiStops, agency, params)
            .await
    }

    /// Fetches vehicle positions for an agency.
    ///
    /// Without a since-time option every vehicle reporting since service
    /// start is returned. The whole envelope comes back so its `last_time`
    /// can drive the next poll.
    #[tracing::instrument(skip(self))]
    pub async fn vehicle_locations(
        &self,
        agency: &str,
        options: &[VehicleLocationOption],
    ) -> Result<LocationResponse> {
        let params = vehicle_location_params(options);
        let resp: LocationResponse = self
            .request(Command::VehicleLocations, Some(agency), params)
            .await?;
        debug!(
            count = resp.vehicles.len(),
            last_time = %resp.last_time.time,
            "Vehicle locations decoded"
        );
        Ok(resp)
    }

    async fn predictions_request<I>(
        &self,
        command: Command,
        agency: &str,
        params: I,
    ) -> Result<Vec<PredictionData>>
    where
        I: IntoIterator<Item = QueryParam>,
    {
        let list: PredictionList = self.request(command, Some(agency), params).await?;
        debug!(count = list.predictions.len(), "Predictions decoded");
        Ok(list.predictions)
    }

    async fn request<T, I>(&self, command: Command, agency: Option<&str>, params: I) -> Result<T>
    where
        T: DeserializeOwned,
        I: IntoIterator<Item = QueryParam>,
    {
        let url = build_url(&self.base_url, command, agency, params);
        debug!(%url, "Requesting feed");
        let body = fetch_bytes(&self.http, command, url).await?;
        parse_feed(command, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::error::Error as _;

    /// Transport whose every request fails before reaching the network.
    #[derive(Debug)]
    struct Unreachable;

    #[async_trait]
    impl HttpClient for Unreachable {
        async fn execute(&self, _req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            Err(reqwest::Client::new().get("not a url").build().unwrap_err())
        }
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let err = NextbusClient::with_http_client(Unreachable, "not a url").unwrap_err();
        assert!(matches!(err, NextbusError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_new_uses_public_endpoint() {
        let client = NextbusClient::new().unwrap();
        assert_eq!(
            client.base_url().as_str(),
            "http://webservices.nextbus.com/service/publicXMLFeed"
        );
    }

    #[tokio::test]
    async fn test_transport_error_wraps_cause() {
        let client =
            NextbusClient::with_http_client(Unreachable, crate::config::DEFAULT_BASE_URL).unwrap();
        let err = client.route_list("alpha").await.unwrap_err();
        assert!(matches!(
            err,
            NextbusError::Transport {
                command: Command::RouteList,
                ..
            }
        ));
        let cause = err.source().unwrap();
        assert!(cause.downcast_ref::<reqwest::Error>().is_some());
    }
}

use std::time::Duration;

/// Public XML feed endpoint.
pub const DEFAULT_BASE_URL: &str = "http://webservices.nextbus.com/service/publicXMLFeed";

/// Settings for building a [`NextbusClient`](crate::NextbusClient) over the
/// default transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Whole-request timeout applied by the transport.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Self::default_timeout(),
            connect_timeout: Self::default_connect_timeout(),
        }
    }
}

impl ClientConfig {
    fn default_timeout() -> Duration {
        Duration::from_secs(30)
    }

    fn default_connect_timeout() -> Duration {
        Duration::from_secs(10)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_setters_override() {
        let config = ClientConfig::default()
            .with_base_url("http://localhost:8080/feed")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.base_url, "http://localhost:8080/feed");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }
}

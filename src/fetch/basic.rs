use super::client::HttpClient;
use crate::config::ClientConfig;
use async_trait::async_trait;

/// [`HttpClient`] backed by a plain [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct BasicClient(reqwest::Client);

impl BasicClient {
    pub fn new() -> Self {
        Self(reqwest::Client::new())
    }

    /// Builds a client that applies the configured request and connect timeouts.
    pub fn from_config(config: &ClientConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self(client))
    }
}

#[async_trait]
impl HttpClient for BasicClient {
    async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
        self.0.execute(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_from_config_builds() {
        let config = ClientConfig::default().with_timeout(Duration::from_secs(1));
        assert!(BasicClient::from_config(&config).is_ok());
    }
}

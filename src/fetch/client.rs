use async_trait::async_trait;
use reqwest::{Request, Response};

/// The transport the feed client sends its GET requests through.
///
/// Implementations own timeouts, redirects and TLS. Tests substitute a fake
/// that answers exact URLs with canned bodies.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn execute(&self, req: Request) -> reqwest::Result<Response>;
}

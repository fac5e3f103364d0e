mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use bytes::Bytes;
use reqwest::Url;
use tracing::{debug, warn};

use crate::command::Command;
use crate::error::{NextbusError, Result};

/// Issues one GET for `command` and reads the whole body.
///
/// The request carries no body and no extra headers. A non-success status is
/// only logged: the feed reports its own errors inside XML bodies, so the
/// body is still handed back for decoding.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(
    client: &C,
    command: Command,
    url: Url,
) -> Result<Bytes> {
    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client
        .execute(req)
        .await
        .map_err(|source| NextbusError::Transport { command, source })?;

    let status = resp.status();
    if !status.is_success() {
        warn!(%command, status = status.as_u16(), "Feed returned non-success status");
    }

    let body = resp
        .bytes()
        .await
        .map_err(|source| NextbusError::Read { command, source })?;
    debug!(%command, bytes = body.len(), "Feed body received");
    Ok(body)
}

//! Authenticated HTTP transport with rate-limit retries.

use std::time::Duration;

use reqwest::header::{COOKIE, REFERER};
use reqwest::{Client, StatusCode};
use tracing::warn;

use crate::error::{MirrorError, Result};

/// Name of the session cookie attached to every request.
const SESSION_COOKIE: &str = "shimo_sid";

/// Referer the workspace expects on API requests.
const REFERER_VALUE: &str = "https://shimo.im/desktop";

/// Issues single authenticated GETs against the workspace.
///
/// The only condition retried here is HTTP 429: the transport sleeps a
/// fixed backoff and tries again until the caller-supplied budget runs
/// out, at which point the 429 surfaces through the ordinary non-200
/// path and is indistinguishable from any other status failure. Network
/// failures are never retried.
#[derive(Clone)]
pub struct Transport {
    http: Client,
    session: String,
    backoff: Duration,
}

impl Transport {
    pub fn new(session: impl Into<String>, backoff: Duration) -> Self {
        Self {
            http: Client::new(),
            session: session.into(),
            backoff,
        }
    }

    /// Fetch `uri` and return the response body.
    ///
    /// `budget` is the number of 429 retries allowed for this call; pick
    /// it per call site from the [`RetryPolicy`](crate::RetryPolicy).
    pub async fn fetch(&self, uri: &str, budget: u32) -> Result<Vec<u8>> {
        let mut budget = budget;
        loop {
            let response = self
                .http
                .get(uri)
                .header(REFERER, REFERER_VALUE)
                .header(COOKIE, format!("{}={}", SESSION_COOKIE, self.session))
                .send()
                .await?;

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS && budget > 0 {
                warn!(uri, remaining = budget, "rate limited, backing off");
                tokio::time::sleep(self.backoff).await;
                budget -= 1;
                continue;
            }

            if status.as_u16() != 200 {
                return Err(MirrorError::Status {
                    uri: uri.to_string(),
                    status: status.as_u16(),
                });
            }

            return Ok(response.bytes().await?.to_vec());
        }
    }
}

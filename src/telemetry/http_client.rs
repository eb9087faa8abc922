use super::sink::SinkError;
use std::time::Duration;

/// A thin wrapper around `reqwest::Client` bound to one endpoint URL.
///
/// Used by the event log and the alert webhook. Requests time out after five
/// seconds so a dead endpoint never accumulates hanging dispatches.
#[derive(Debug, Clone)]
pub(crate) struct HTTPClient {
    /// The underlying `reqwest::Client` used to perform HTTP requests.
    client: reqwest::Client,
    /// Endpoint all requests are posted to.
    url: String,
}

impl HTTPClient {
    const TIMEOUT: Duration = Duration::from_secs(5);

    /// Constructs a new `HTTPClient` posting to `url`.
    ///
    /// # Errors
    /// Fails if the TLS/HTTP backend cannot be initialized.
    pub(crate) fn new(url: &str) -> Result<HTTPClient, SinkError> {
        Ok(HTTPClient {
            client: reqwest::Client::builder().timeout(Self::TIMEOUT).build()?,
            url: String::from(url),
        })
    }

    /// Returns the endpoint URL the client was initialized with.
    pub(crate) fn url(&self) -> &str { self.url.as_str() }

    /// Posts `body` as JSON and maps any non-success status to [`SinkError::Rejected`].
    pub(crate) async fn post_json<T: serde::Serialize + Sync>(&self, body: &T) -> Result<(), SinkError> {
        let response = self.client.post(self.url.as_str()).json(body).send().await?;
        if response.status().is_success() {
            Ok(())
        } else {
            Err(SinkError::Rejected(response.status().as_u16()))
        }
    }
}

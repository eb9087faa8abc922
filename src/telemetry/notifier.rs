use super::{
    dispatch::DispatchQueue,
    http_client::HTTPClient,
    sink::{Alert, Notifier, SinkError},
};
use async_trait::async_trait;

/// Delivers alerts as a JSON `{subject, body}` POST to a webhook.
pub(crate) struct WebhookNotifier {
    client: HTTPClient,
    queue: DispatchQueue,
}

impl WebhookNotifier {
    const MAX_IN_FLIGHT: usize = 4;

    pub(crate) fn new(url: &str) -> Result<Self, SinkError> {
        Ok(Self {
            client: HTTPClient::new(url)?,
            queue: DispatchQueue::new("alert webhook", Self::MAX_IN_FLIGHT),
        })
    }

    pub(crate) fn url(&self) -> &str { self.client.url() }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    fn send_alert(&mut self, alert: Alert) -> Result<(), SinkError> {
        let client = self.client.clone();
        self.queue.push(async move { client.post_json(&alert).await })
    }

    async fn drain(&mut self) -> usize { self.queue.drain().await }
}

use super::{
    dispatch::DispatchQueue,
    http_client::HTTPClient,
    sink::{EventLog, PhaseEvent, SinkError},
};
use async_trait::async_trait;

/// Posts every [`PhaseEvent`] as JSON to a REST endpoint (e.g. a `flight_operations`
/// table exposed over HTTP).
pub(crate) struct RestEventLog {
    client: HTTPClient,
    queue: DispatchQueue,
}

impl RestEventLog {
    /// Phase transitions are seconds apart, a handful in flight means the endpoint is stuck.
    const MAX_IN_FLIGHT: usize = 16;

    pub(crate) fn new(url: &str) -> Result<Self, SinkError> {
        Ok(Self {
            client: HTTPClient::new(url)?,
            queue: DispatchQueue::new("event log", Self::MAX_IN_FLIGHT),
        })
    }

    pub(crate) fn url(&self) -> &str { self.client.url() }
}

#[async_trait]
impl EventLog for RestEventLog {
    fn record_phase(&mut self, event: PhaseEvent) -> Result<(), SinkError> {
        let client = self.client.clone();
        self.queue.push(async move { client.post_json(&event).await })
    }

    async fn drain(&mut self) -> usize { self.queue.drain().await }
}

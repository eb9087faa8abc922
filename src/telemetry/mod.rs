//! Outward collaborators of the simulator. Every one of them is a one-way sink:
//! live snapshot feeds, the phase event log, the alert notifier and the durable
//! sample log. Failures are returned as [`SinkError`] and never retried.

mod dispatch;
mod event_log;
mod http_client;
mod notifier;
mod sample_log;
mod sink;
mod stats;
mod udp_feed;

pub(crate) use event_log::RestEventLog;
pub(crate) use notifier::WebhookNotifier;
pub(crate) use sample_log::CsvSampleLog;
pub use sink::{
    Alert, EventLog, Notifier, PhaseEvent, SampleRow, SampleStore, SinkError, Snapshot,
    SnapshotSink,
};
pub use stats::SinkStats;
pub(crate) use udp_feed::UdpFeed;

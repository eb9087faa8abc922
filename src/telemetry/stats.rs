use std::fmt::{Display, Formatter};

/// Delivery counters per collaborator. Failed sends are only counted, never retried.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SinkStats {
    pub snapshots_sent: u64,
    pub snapshots_dropped: u64,
    pub samples_written: u64,
    pub samples_dropped: u64,
    pub flushes: u64,
    pub flush_failures: u64,
    pub events_sent: u64,
    pub events_dropped: u64,
    pub alerts_sent: u64,
    pub alerts_dropped: u64,
}

impl SinkStats {
    pub fn total_dropped(&self) -> u64 {
        self.snapshots_dropped
            + self.samples_dropped
            + self.flush_failures
            + self.events_dropped
            + self.alerts_dropped
    }
}

impl Display for SinkStats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "snapshots {}/{} dropped, samples {}/{} dropped, flushes {}/{} failed, \
             events {}/{} dropped, alerts {}/{} dropped",
            self.snapshots_dropped,
            self.snapshots_sent + self.snapshots_dropped,
            self.samples_dropped,
            self.samples_written + self.samples_dropped,
            self.flush_failures,
            self.flushes + self.flush_failures,
            self.events_dropped,
            self.events_sent + self.events_dropped,
            self.alerts_dropped,
            self.alerts_sent + self.alerts_dropped,
        )
    }
}

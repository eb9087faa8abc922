use crate::config::SimConfig;
use crate::flight_control::AircraftState;
use crate::telemetry::{
    Alert, CsvSampleLog, EventLog, Notifier, PhaseEvent, RestEventLog, SampleRow, SampleStore,
    SinkStats, Snapshot, SnapshotSink, UdpFeed, WebhookNotifier,
};
use crate::{event, info, warn};
use chrono::{DateTime, Utc};

/// Struct holding every outward collaborator of a run, acquired once before the first
/// tick and released by [`Keychain::finalize`] after the last one.
///
/// A collaborator that could not be acquired is simply absent and the run proceeds
/// without it. Per-send failures are counted in [`SinkStats`] and discarded.
pub struct Keychain {
    /// Per-tick snapshot consumers.
    live: Vec<Box<dyn SnapshotSink>>,
    /// Receives one write per phase transition.
    events: Option<Box<dyn EventLog>>,
    /// Receives hard landing alerts.
    notifier: Option<Box<dyn Notifier>>,
    /// Durable once-per-second samples.
    samples: Option<Box<dyn SampleStore>>,
    aircraft_id: u32,
    stats: SinkStats,
}

impl Keychain {
    /// Creates a keychain without any collaborator attached.
    pub fn new(aircraft_id: u32) -> Self {
        Self {
            live: Vec::new(),
            events: None,
            notifier: None,
            samples: None,
            aircraft_id,
            stats: SinkStats::default(),
        }
    }

    /// Acquires all collaborators named in `config`. Failures degrade the run instead of
    /// aborting it.
    pub async fn connect(config: &SimConfig) -> Self {
        let mut keychain = Self::new(config.aircraft_id);

        match UdpFeed::visual(config.visual_addr).await {
            Ok(feed) => {
                info!("Visualization feed -> {}", feed.target());
                keychain = keychain.with_live_sink(Box::new(feed));
            }
            Err(e) => warn!("Visualization feed unavailable: {e:?}"),
        }
        match UdpFeed::metrics(config.metrics_addr).await {
            Ok(feed) => {
                info!("Metrics feed -> {}", feed.target());
                keychain = keychain.with_live_sink(Box::new(feed));
            }
            Err(e) => warn!("Metrics feed unavailable: {e:?}"),
        }
        if let Some(url) = config.event_log_url.as_deref() {
            match RestEventLog::new(url) {
                Ok(log) => {
                    info!("Event log -> {}", log.url());
                    keychain = keychain.with_event_log(Box::new(log));
                }
                Err(e) => warn!("Event log unavailable: {e:?}"),
            }
        }
        if let Some(url) = config.alert_url.as_deref() {
            match WebhookNotifier::new(url) {
                Ok(notifier) => {
                    info!("Alerts -> {}", notifier.url());
                    keychain = keychain.with_notifier(Box::new(notifier));
                }
                Err(e) => warn!("Alert webhook unavailable: {e:?}"),
            }
        }
        match CsvSampleLog::create(&config.sample_log_path) {
            Ok(log) => {
                info!("Sample log -> {}", config.sample_log_path.display());
                keychain = keychain.with_sample_store(Box::new(log));
            }
            Err(e) => warn!(
                "Cannot open sample log {}: {e:?}. Continuing without persistence!",
                config.sample_log_path.display()
            ),
        }
        keychain
    }

    pub fn with_live_sink(mut self, sink: Box<dyn SnapshotSink>) -> Self {
        self.live.push(sink);
        self
    }

    pub fn with_event_log(mut self, log: Box<dyn EventLog>) -> Self {
        self.events = Some(log);
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_sample_store(mut self, store: Box<dyn SampleStore>) -> Self {
        self.samples = Some(store);
        self
    }

    pub fn stats(&self) -> &SinkStats { &self.stats }
    pub fn has_sample_store(&self) -> bool { self.samples.is_some() }

    /// Hands the tick's snapshot to every live sink.
    pub fn emit_snapshot(&mut self, state: &AircraftState, at: DateTime<Utc>) {
        let snapshot = Snapshot { state, timestamp: at };
        for sink in &mut self.live {
            match sink.send_snapshot(&snapshot) {
                Ok(()) => self.stats.snapshots_sent += 1,
                Err(e) => {
                    self.stats.snapshots_dropped += 1;
                    event!("{} snapshot dropped: {e:?}", sink.name());
                }
            }
        }
    }

    /// Appends one row to the sample log, if there is one.
    pub fn persist_sample(&mut self, state: &AircraftState, at: DateTime<Utc>) {
        let Some(store) = self.samples.as_mut() else { return };
        match store.write_sample(&SampleRow::capture(state, at)) {
            Ok(()) => self.stats.samples_written += 1,
            Err(e) => {
                self.stats.samples_dropped += 1;
                event!("Sample dropped: {e:?}");
            }
        }
    }

    /// Writes the phase-entered record for the phase `state` is currently in.
    pub fn record_phase(&mut self, state: &AircraftState, at: DateTime<Utc>) {
        let Some(log) = self.events.as_mut() else { return };
        let Some(event) = PhaseEvent::capture(self.aircraft_id, state, at) else { return };
        match log.record_phase(event) {
            Ok(()) => self.stats.events_sent += 1,
            Err(e) => {
                self.stats.events_dropped += 1;
                event!("Phase event dropped: {e:?}");
            }
        }
    }

    /// Sends a hard landing alert carrying the impact G-force.
    pub fn dispatch_alert(&mut self, impact_g: f64) {
        let Some(notifier) = self.notifier.as_mut() else { return };
        match notifier.send_alert(Alert::hard_landing(impact_g)) {
            Ok(()) => self.stats.alerts_sent += 1,
            Err(e) => {
                self.stats.alerts_dropped += 1;
                event!("Alert dropped: {e:?}");
            }
        }
    }

    /// Pushes buffered samples to durable storage.
    pub fn flush_samples(&mut self) {
        let Some(store) = self.samples.as_mut() else { return };
        match store.flush() {
            Ok(()) => self.stats.flushes += 1,
            Err(e) => {
                self.stats.flush_failures += 1;
                warn!("Sample log flush failed: {e:?}");
            }
        }
    }

    /// Flushes the sample log, waits for outstanding HTTP dispatches and releases every
    /// collaborator. Returns the final delivery statistics.
    pub async fn finalize(mut self) -> SinkStats {
        self.flush_samples();
        let mut events = self.events.take();
        let mut notifier = self.notifier.take();
        let (events_failed, alerts_failed) = futures::join!(
            async {
                match events.as_mut() {
                    Some(log) => log.drain().await,
                    None => 0,
                }
            },
            async {
                match notifier.as_mut() {
                    Some(n) => n.drain().await,
                    None => 0,
                }
            }
        );
        let (failed_events, failed_alerts) = (events_failed as u64, alerts_failed as u64);
        self.stats.events_sent = self.stats.events_sent.saturating_sub(failed_events);
        self.stats.events_dropped += failed_events;
        self.stats.alerts_sent = self.stats.alerts_sent.saturating_sub(failed_alerts);
        self.stats.alerts_dropped += failed_alerts;
        self.stats
    }
}

use crate::flight_control::{AircraftState, FlightPhase};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use strum_macros::Display;

/// Failure of a single send or write to a collaborator. Never fatal to the tick loop.
#[derive(Debug, Display)]
pub enum SinkError {
    Io(std::io::Error),
    Csv(csv::Error),
    Http(reqwest::Error),
    /// The receiving endpoint answered with a non-success status code.
    Rejected(u16),
    /// Too many dispatches are still in flight; the new one was dropped.
    Backlog,
}

impl std::error::Error for SinkError {}

impl From<std::io::Error> for SinkError {
    fn from(value: std::io::Error) -> Self { SinkError::Io(value) }
}

impl From<csv::Error> for SinkError {
    fn from(value: csv::Error) -> Self { SinkError::Csv(value) }
}

impl From<reqwest::Error> for SinkError {
    fn from(value: reqwest::Error) -> Self { SinkError::Http(value) }
}

/// The full aircraft state at one tick, as handed to the live sinks.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub state: &'a AircraftState,
    pub timestamp: DateTime<Utc>,
}

/// Record written to the event log once per phase transition.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PhaseEvent {
    pub aircraft_id: u32,
    pub flight_number: String,
    pub phase: FlightPhase,
    pub arrival_time: DateTime<Utc>,
    pub main_strut_health: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub roll: f64,
    pub pitch: f64,
    pub gear_position: f64,
}

impl PhaseEvent {
    /// Captures the event for the phase `state` has just entered.
    /// Returns `None` while no phase is active.
    pub fn capture(aircraft_id: u32, state: &AircraftState, at: DateTime<Utc>) -> Option<Self> {
        Some(Self {
            aircraft_id,
            flight_number: state.flight_id().to_string(),
            phase: state.phase()?,
            arrival_time: at,
            main_strut_health: state.main_health(),
            latitude: state.lat(),
            longitude: state.lon(),
            roll: state.roll(),
            pitch: state.pitch(),
            gear_position: state.gear_position(),
        })
    }
}

/// Notification raised by a severe hard landing.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Alert {
    pub subject: String,
    pub body: String,
}

impl Alert {
    pub fn hard_landing(impact_g: f64) -> Self {
        Self {
            subject: String::from("HARD LANDING"),
            body: format!("G-Force: {impact_g}"),
        }
    }
}

/// One row of the durable sample log. Field order is the column order.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SampleRow {
    #[serde(rename = "Time")]
    pub time: DateTime<Utc>,
    #[serde(rename = "ID")]
    pub flight_id: String,
    #[serde(rename = "Phase")]
    pub phase: &'static str,
    #[serde(rename = "Alt")]
    pub alt: f64,
    #[serde(rename = "Speed")]
    pub speed: f64,
    #[serde(rename = "Lat")]
    pub lat: f64,
    #[serde(rename = "Lon")]
    pub lon: f64,
    #[serde(rename = "Roll")]
    pub roll: f64,
    #[serde(rename = "Pitch")]
    pub pitch: f64,
    #[serde(rename = "Hdg")]
    pub heading: f64,
    #[serde(rename = "Gear")]
    pub gear: f64,
    #[serde(rename = "G")]
    pub g_force: f64,
    #[serde(rename = "Hyd")]
    pub hyd_pressure: f64,
    #[serde(rename = "Stat")]
    pub status: String,
    #[serde(rename = "Brk")]
    pub brake_temp: f64,
    #[serde(rename = "Strut")]
    pub strut_pressure: f64,
    #[serde(rename = "Oil")]
    pub oil_temp: f64,
    #[serde(rename = "Vib")]
    pub vibration: f64,
    #[serde(rename = "Side")]
    pub side_load: f64,
    #[serde(rename = "Cyc")]
    pub gear_cycles: u32,
    #[serde(rename = "Seal")]
    pub seal_integrity: f64,
    #[serde(rename = "Rwy")]
    pub runway: String,
}

impl SampleRow {
    pub const HEADER: [&'static str; 22] = [
        "Time", "ID", "Phase", "Alt", "Speed", "Lat", "Lon", "Roll", "Pitch", "Hdg", "Gear", "G",
        "Hyd", "Stat", "Brk", "Strut", "Oil", "Vib", "Side", "Cyc", "Seal", "Rwy",
    ];

    pub fn capture(state: &AircraftState, at: DateTime<Utc>) -> Self {
        Self {
            time: at,
            flight_id: state.flight_id().to_string(),
            phase: state.phase_name(),
            alt: state.alt(),
            speed: state.speed(),
            lat: state.lat(),
            lon: state.lon(),
            roll: state.roll(),
            pitch: state.pitch(),
            heading: state.heading(),
            gear: state.gear_position(),
            g_force: state.g_force(),
            hyd_pressure: state.hyd_pressure(),
            status: state.gear_status().to_string(),
            brake_temp: state.brake_temp(),
            strut_pressure: state.strut_pressure(),
            oil_temp: state.oil_temp(),
            vibration: state.vibration(),
            side_load: state.side_load(),
            gear_cycles: state.gear_cycles(),
            seal_integrity: state.seal_integrity(),
            runway: state.runway_condition().to_string(),
        }
    }
}

/// Live, per-tick consumer of snapshots (visualization, metrics).
///
/// Implementations must return immediately; a send that cannot complete right away fails.
pub trait SnapshotSink: Send {
    fn name(&self) -> &'static str;
    fn send_snapshot(&mut self, snapshot: &Snapshot<'_>) -> Result<(), SinkError>;
}

/// Receives one record per phase transition.
#[async_trait]
pub trait EventLog: Send {
    fn record_phase(&mut self, event: PhaseEvent) -> Result<(), SinkError>;

    /// Waits for outstanding writes and returns how many of them failed.
    async fn drain(&mut self) -> usize { 0 }
}

/// Delivers alerts to a human.
#[async_trait]
pub trait Notifier: Send {
    fn send_alert(&mut self, alert: Alert) -> Result<(), SinkError>;

    /// Waits for outstanding deliveries and returns how many of them failed.
    async fn drain(&mut self) -> usize { 0 }
}

/// Durable, throttled sample storage.
pub trait SampleStore: Send {
    fn write_sample(&mut self, row: &SampleRow) -> Result<(), SinkError>;
    fn flush(&mut self) -> Result<(), SinkError>;
}

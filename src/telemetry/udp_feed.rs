use super::sink::{SinkError, Snapshot, SnapshotSink};
use itertools::Itertools;
use std::net::SocketAddr;
use tokio::net::UdpSocket;

/// Measurement name of the metrics line.
const MEASUREMENT: &str = "flight_telemetry";

/// Connectionless, best-effort datagram feed. One datagram per snapshot, no
/// acknowledgment and no retry.
pub(crate) struct UdpFeed {
    name: &'static str,
    socket: UdpSocket,
    target: SocketAddr,
    encode: fn(&Snapshot<'_>) -> String,
}

impl UdpFeed {
    /// Binds an ephemeral local socket sending `encode`d snapshots to `target`.
    pub(crate) async fn bind(
        name: &'static str,
        target: SocketAddr,
        encode: fn(&Snapshot<'_>) -> String,
    ) -> Result<Self, SinkError> {
        let local: SocketAddr = if target.is_ipv4() {
            SocketAddr::from(([0, 0, 0, 0], 0))
        } else {
            SocketAddr::from(([0u16; 8], 0))
        };
        let socket = UdpSocket::bind(local).await?;
        Ok(Self { name, socket, target, encode })
    }

    /// Feed for the 3D visualization.
    pub(crate) async fn visual(target: SocketAddr) -> Result<Self, SinkError> {
        Self::bind("visual", target, visual_record).await
    }

    /// Feed for the metrics/time-series collector.
    pub(crate) async fn metrics(target: SocketAddr) -> Result<Self, SinkError> {
        Self::bind("metrics", target, metrics_line).await
    }

    pub(crate) fn target(&self) -> SocketAddr { self.target }
}

impl SnapshotSink for UdpFeed {
    fn name(&self) -> &'static str { self.name }

    fn send_snapshot(&mut self, snapshot: &Snapshot<'_>) -> Result<(), SinkError> {
        let payload = (self.encode)(snapshot);
        // try_send_to never waits; a full socket buffer surfaces as WouldBlock
        self.socket.try_send_to(payload.as_bytes(), self.target)?;
        Ok(())
    }
}

/// `lat,lon,alt,roll,pitch,heading,gear,gear,gear` terminated by a newline; the gear
/// position is repeated for the nose, left and right legs.
pub(crate) fn visual_record(snapshot: &Snapshot<'_>) -> String {
    let s = snapshot.state;
    let gear = s.gear_position();
    let fields = [s.lat(), s.lon(), s.alt(), s.roll(), s.pitch(), s.heading(), gear, gear, gear];
    format!("{}\n", fields.iter().join(","))
}

/// Influx line protocol record tagged with flight id and phase, stamped in nanoseconds.
pub(crate) fn metrics_line(snapshot: &Snapshot<'_>) -> String {
    let s = snapshot.state;
    let fields = [
        ("altitude", s.alt()),
        ("speed", s.speed()),
        ("g_force", s.g_force()),
        ("gear_pos", s.gear_position()),
        ("hyd_pressure", s.hyd_pressure()),
        ("brake_temp", s.brake_temp()),
        ("vibration", s.vibration()),
        ("main_health", s.main_health()),
    ];
    let timestamp = snapshot.timestamp.timestamp_nanos_opt().unwrap_or_default();
    format!(
        "{MEASUREMENT},flight_id={},phase={} {} {timestamp}",
        escape_tag(s.flight_id()),
        s.phase_name(),
        fields.iter().map(|(k, v)| format!("{k}={v}")).join(","),
    )
}

/// Escapes the characters line protocol reserves in tag values.
fn escape_tag(value: &str) -> String {
    value.replace(',', "\\,").replace('=', "\\=").replace(' ', "\\ ")
}

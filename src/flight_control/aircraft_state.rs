use super::{
    common::{Waypoint, normalize_heading},
    flight_phase::{FlightPhase, RunwayCondition},
};
use strum_macros::Display;

/// Condition word reported in the `Stat` column of the sample log.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
pub enum GearStatus {
    #[strum(serialize = "NORMAL")]
    Normal,
    #[strum(serialize = "DEGRADED")]
    Degraded,
    #[strum(serialize = "CRITICAL")]
    Critical,
}

/// Complete mutable condition of the simulated aircraft.
///
/// Created once per run and exclusively owned by the [`FlightComputer`](super::FlightComputer).
/// All setters keep the domain invariants locally: the gear position stays in `[0, 1]`,
/// health values never rise and never drop below zero, vibration is non-negative and the
/// brakes never cool below ambient.
#[derive(Debug, Clone, PartialEq)]
pub struct AircraftState {
    position: Waypoint,
    heading: f64,
    roll: f64,
    pitch: f64,
    gear_position: f64,
    gear_cycles: u32,
    /// Main gear health in percent.
    main_health: f64,
    /// Nose gear health in percent.
    nose_health: f64,
    /// Seal integrity as a fraction.
    seal_integrity: f64,
    hyd_pressure: f64,
    brake_temp: f64,
    strut_pressure: f64,
    oil_temp: f64,
    vibration: f64,
    g_force: f64,
    side_load: f64,
    runway_condition: RunwayCondition,
    flight_id: String,
    phase: Option<FlightPhase>,
    speed: f64,
}

impl AircraftState {
    pub const FULL_HEALTH: f64 = 100.0;
    /// Lowest temperature the brakes can cool down to.
    pub const AMBIENT_BRAKE_TEMP: f64 = 20.0;
    const DEGRADED_HEALTH: f64 = 80.0;
    const CRITICAL_HEALTH: f64 = 50.0;
    const INIT_ID: &'static str = "INIT";

    /// Creates the parked, fully healthy aircraft at `origin`.
    pub fn new(origin: Waypoint) -> Self {
        Self {
            position: origin,
            heading: 90.0,
            roll: 0.0,
            pitch: 0.0,
            gear_position: 1.0,
            gear_cycles: 0,
            main_health: Self::FULL_HEALTH,
            nose_health: Self::FULL_HEALTH,
            seal_integrity: 1.0,
            hyd_pressure: 3000.0,
            brake_temp: 150.0,
            strut_pressure: 1800.0,
            oil_temp: 45.0,
            vibration: 0.1,
            g_force: 1.0,
            side_load: 0.0,
            runway_condition: RunwayCondition::Dry,
            flight_id: String::from(Self::INIT_ID),
            phase: None,
            speed: 0.0,
        }
    }

    pub fn position(&self) -> Waypoint { self.position }
    pub fn lat(&self) -> f64 { self.position.lat() }
    pub fn lon(&self) -> f64 { self.position.lon() }
    pub fn alt(&self) -> f64 { self.position.alt() }
    pub fn heading(&self) -> f64 { self.heading }
    pub fn roll(&self) -> f64 { self.roll }
    pub fn pitch(&self) -> f64 { self.pitch }
    pub fn gear_position(&self) -> f64 { self.gear_position }
    pub fn gear_cycles(&self) -> u32 { self.gear_cycles }
    pub fn main_health(&self) -> f64 { self.main_health }
    pub fn nose_health(&self) -> f64 { self.nose_health }
    pub fn seal_integrity(&self) -> f64 { self.seal_integrity }
    pub fn hyd_pressure(&self) -> f64 { self.hyd_pressure }
    pub fn brake_temp(&self) -> f64 { self.brake_temp }
    pub fn strut_pressure(&self) -> f64 { self.strut_pressure }
    pub fn oil_temp(&self) -> f64 { self.oil_temp }
    pub fn vibration(&self) -> f64 { self.vibration }
    pub fn g_force(&self) -> f64 { self.g_force }
    pub fn side_load(&self) -> f64 { self.side_load }
    pub fn runway_condition(&self) -> RunwayCondition { self.runway_condition }
    pub fn flight_id(&self) -> &str { &self.flight_id }
    pub fn phase(&self) -> Option<FlightPhase> { self.phase }
    pub fn speed(&self) -> f64 { self.speed }

    /// Active phase name, `INIT` before the first segment starts.
    pub fn phase_name(&self) -> &'static str { self.phase.map_or(Self::INIT_ID, Into::into) }

    pub fn gear_status(&self) -> GearStatus {
        if self.main_health >= Self::DEGRADED_HEALTH {
            GearStatus::Normal
        } else if self.main_health >= Self::CRITICAL_HEALTH {
            GearStatus::Degraded
        } else {
            GearStatus::Critical
        }
    }

    /// Makes `phase` the single active phase of flight `flight_id` at the commanded `speed`.
    pub fn enter_phase(&mut self, flight_id: &str, phase: FlightPhase, speed: f64) {
        if self.flight_id != flight_id {
            self.flight_id = String::from(flight_id);
        }
        self.phase = Some(phase);
        self.speed = speed;
    }

    pub fn translate(&mut self, d_lat: f64, d_lon: f64, d_alt: f64) {
        self.position = Waypoint::new(
            self.position.lat() + d_lat,
            self.position.lon() + d_lon,
            self.position.alt() + d_alt,
        );
    }

    pub fn set_position(&mut self, position: Waypoint) { self.position = position; }

    pub fn set_heading(&mut self, heading: f64) { self.heading = normalize_heading(heading); }

    pub fn set_pitch(&mut self, pitch: f64) { self.pitch = pitch; }

    /// Moves the gear by `delta`, saturating at fully retracted/extended.
    pub fn move_gear(&mut self, delta: f64) { self.set_gear_position(self.gear_position + delta); }

    pub fn set_gear_position(&mut self, position: f64) {
        self.gear_position = if position.is_nan() { self.gear_position } else { position.clamp(0.0, 1.0) };
    }

    /// Counts one completed gear cycle, saturating rather than wrapping.
    pub fn register_gear_cycle(&mut self) { self.gear_cycles = self.gear_cycles.saturating_add(1); }

    /// Removes `amount` percent of main gear health. Negative amounts are ignored.
    pub fn degrade_main_health(&mut self, amount: f64) {
        if amount.is_nan() || amount <= 0.0 {
            return;
        }
        self.main_health = (self.main_health - amount).max(0.0);
    }

    pub fn set_g_force(&mut self, g_force: f64) { self.g_force = g_force; }

    pub fn set_hyd_pressure(&mut self, pressure: f64) { self.hyd_pressure = pressure.max(0.0); }

    pub fn set_brake_temp(&mut self, temp: f64) {
        self.brake_temp = temp.max(Self::AMBIENT_BRAKE_TEMP);
    }

    pub fn set_vibration(&mut self, vibration: f64) { self.vibration = vibration.max(0.0); }
}

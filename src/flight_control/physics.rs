use super::{aircraft_state::AircraftState, common::RandomSource, flight_phase::FlightPhase};

/// Nominal hydraulic system pressure in psi.
const HYD_NOMINAL: f64 = 3000.0;
/// Pressure the pumps hold once the seals have worn.
const HYD_WORN_SEALS: f64 = 2500.0;
/// Seal integrity above which the nominal pressure is reachable.
const SEAL_THRESHOLD: f64 = 0.8;
/// Fraction of the pressure gap closed per tick at [`REFERENCE_TICK_RATE`].
const HYD_LAG_PER_TICK: f64 = 0.2;
/// Tick rate the per-tick hydraulic lag was tuned for.
pub const REFERENCE_TICK_RATE: f64 = 60.0;

/// Brake heating per knot of commanded speed, in °C/s.
const BRAKE_HEAT_PER_KT: f64 = 0.5;
/// Brake cooling while airborne or not braking, in °C/s.
const BRAKE_COOL_RATE: f64 = 2.0;

const VIB_BASELINE: f64 = 0.05;
/// Vibration added per percent of lost main gear health.
const VIB_PER_HEALTH_LOSS: f64 = 0.01;
/// Half-width of the symmetric vibration noise band.
const VIB_NOISE: f64 = 0.05;

/// Recomputes hydraulic pressure, brake temperature and vibration of `state` for one tick
/// of length `dt` seconds flown in `phase` at the commanded `speed`.
///
/// The vibration noise is drawn from `rng` on every call.
pub fn update_physics<R: RandomSource>(
    state: &mut AircraftState,
    phase: FlightPhase,
    speed: f64,
    dt: f64,
    rng: &mut R,
) {
    let target = hydraulic_target(state.seal_integrity(), phase);
    let p = state.hyd_pressure();
    state.set_hyd_pressure(p + (target - p) * hydraulic_lag(dt));

    let brake_delta = if phase.loads_brakes() {
        BRAKE_HEAT_PER_KT * speed * dt
    } else {
        -BRAKE_COOL_RATE * dt
    };
    state.set_brake_temp(state.brake_temp() + brake_delta);

    let noise = rng.uniform(-VIB_NOISE, VIB_NOISE);
    state.set_vibration(vibration_baseline(state.main_health()) + noise);
}

/// Pressure the hydraulic system settles towards in `phase` with the given seal integrity.
pub fn hydraulic_target(seal_integrity: f64, phase: FlightPhase) -> f64 {
    let base = if seal_integrity > SEAL_THRESHOLD { HYD_NOMINAL } else { HYD_WORN_SEALS };
    base - phase.hydraulic_demand()
}

/// Fraction of the pressure gap closed during a tick of `dt` seconds.
///
/// Equals [`HYD_LAG_PER_TICK`] for `dt = 1 / REFERENCE_TICK_RATE`, and compounds the
/// same per-tick lag for other tick rates.
pub fn hydraulic_lag(dt: f64) -> f64 {
    if dt <= 0.0 {
        return 0.0;
    }
    1.0 - (1.0 - HYD_LAG_PER_TICK).powf(dt * REFERENCE_TICK_RATE)
}

/// Noise-free vibration amplitude for a main gear health given in percent.
pub fn vibration_baseline(main_health: f64) -> f64 {
    VIB_BASELINE + (AircraftState::FULL_HEALTH - main_health) * VIB_PER_HEALTH_LOSS
}

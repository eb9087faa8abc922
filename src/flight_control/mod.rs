//! Simulation core: aircraft state, segment interpolation, per-tick physics and the
//! touchdown fault model, tied together by the [`FlightComputer`].

mod aircraft_state;
pub(crate) mod common;
mod fault_model;
mod flight_computer;
mod flight_phase;
mod flight_plan;
mod physics;
mod segment;
#[cfg(test)]
mod tests;

pub use aircraft_state::{AircraftState, GearStatus};
pub use fault_model::{LandingAssessment, assess_landing};
pub use flight_computer::FlightComputer;
pub use flight_phase::{FlightPhase, RunwayCondition};
pub use flight_plan::{ABJ, FlightPlan, SegmentPlan};
pub use physics::{hydraulic_lag, hydraulic_target, update_physics, vibration_baseline};
pub use segment::{SegmentStepper, pitch_for};

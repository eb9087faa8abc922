//! The simulation clock: cycle and phase sequencing, per-tick telemetry cadence,
//! wall-clock pacing and cancellation.

mod pacer;
mod run_state;
mod signal;
mod simulation;

pub use pacer::{Pacer, RealTimePacer, Unpaced};
pub use run_state::RunState;
pub use simulation::{RunSummary, Simulation};

use super::{
    aircraft_state::AircraftState,
    common::RandomSource,
    fault_model::{LandingAssessment, assess_landing},
    flight_plan::SegmentPlan,
    physics::update_physics,
    segment::SegmentStepper,
};
use std::time::Duration;

/// Result of one simulated tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Monotonic tick counter over the whole run, starting at 0.
    pub tick: u64,
    /// Index of the tick within the active segment.
    pub segment_tick: usize,
    /// Whether this tick is due for the durable sample log.
    pub persist_sample: bool,
}

/// The simulation engine: owns the aircraft state and the random source and advances
/// simulated time one fixed tick at a time.
///
/// Nothing in here waits on the wall clock; pacing is left to the caller.
#[derive(Debug)]
pub struct FlightComputer<R: RandomSource> {
    state: AircraftState,
    rng: R,
    tick_rate: u32,
    sample_interval: usize,
    ticks: u64,
}

impl<R: RandomSource> FlightComputer<R> {
    /// Creates an engine running `tick_rate` ticks per simulated second that marks one
    /// tick per simulated second for persistence. A zero `tick_rate` is raised to 1.
    pub fn new(state: AircraftState, rng: R, tick_rate: u32) -> Self {
        let tick_rate = tick_rate.max(1);
        Self {
            state,
            rng,
            tick_rate,
            sample_interval: tick_rate as usize,
            ticks: 0,
        }
    }

    pub fn state(&self) -> &AircraftState { &self.state }
    pub fn tick_rate(&self) -> u32 { self.tick_rate }
    pub fn ticks(&self) -> u64 { self.ticks }

    /// Length of one tick in seconds.
    pub fn dt(&self) -> f64 { 1.0 / f64::from(self.tick_rate) }

    /// Simulated time elapsed since the start of the run.
    #[allow(clippy::cast_precision_loss)]
    pub fn sim_time(&self) -> Duration {
        Duration::from_secs_f64(self.ticks as f64 / f64::from(self.tick_rate))
    }

    /// Makes `plan` the active segment of `flight_id` and returns its stepper.
    ///
    /// The stepper starts from the current state, not from the plan's nominal start.
    pub fn begin_segment(&mut self, flight_id: &str, plan: &SegmentPlan) -> SegmentStepper {
        self.state.enter_phase(flight_id, plan.phase(), plan.speed());
        let stepper = SegmentStepper::new(plan, &self.state, self.tick_rate);
        stepper.begin(&mut self.state);
        stepper
    }

    /// Advances the active segment by one tick and runs the physics update on the result.
    /// Returns `None` once the segment is complete.
    pub fn step(&mut self, stepper: &mut SegmentStepper) -> Option<TickReport> {
        let segment_tick = stepper.advance(&mut self.state)?;
        let dt = self.dt();
        update_physics(&mut self.state, stepper.phase(), stepper.speed(), dt, &mut self.rng);
        let report = TickReport {
            tick: self.ticks,
            segment_tick,
            persist_sample: segment_tick % self.sample_interval == 0,
        };
        self.ticks += 1;
        Some(report)
    }

    /// Counts the gear cycle of the upcoming touchdown, then decides and applies its outcome.
    pub fn touch_down(&mut self) -> LandingAssessment {
        self.state.register_gear_cycle();
        let assessment = assess_landing(self.state.gear_cycles(), &mut self.rng);
        assessment.apply(&mut self.state);
        assessment
    }
}

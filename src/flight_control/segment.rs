use super::{aircraft_state::AircraftState, common::Waypoint, flight_phase::FlightPhase, flight_plan::SegmentPlan};

/// Pitch held while climbing faster than [`SegmentStepper::LEVEL_BAND_FPS`].
const CLIMB_PITCH: f64 = 7.0;
/// Pitch held while descending faster than [`SegmentStepper::LEVEL_BAND_FPS`].
const DESCENT_PITCH: f64 = -5.0;

/// Per-tick interpolator for one [`SegmentPlan`].
///
/// The increments are computed once, when the stepper is created, from wherever the
/// aircraft *currently* is towards the segment's end waypoint. The nominal start waypoint
/// only determines the heading. Applying the increments `steps` times therefore reaches the
/// end waypoint up to floating point rounding; no final snap is done, so this residual
/// carries into the next segment, which again starts from the actual state.
#[derive(Debug, Clone)]
pub struct SegmentStepper {
    phase: FlightPhase,
    speed: f64,
    end: Waypoint,
    gear_target: f64,
    heading: f64,
    pitch: f64,
    steps: usize,
    done: usize,
    d_lat: f64,
    d_lon: f64,
    d_alt: f64,
    d_gear: f64,
}

impl SegmentStepper {
    /// Vertical speed in ft/s below which the attitude is held level.
    pub const LEVEL_BAND_FPS: f64 = 30.0;

    /// Plans `plan` from the current `state` at `tick_rate` ticks per second.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn new(plan: &SegmentPlan, state: &AircraftState, tick_rate: u32) -> Self {
        let steps = (plan.duration().as_secs_f64() * f64::from(tick_rate)).floor() as usize;
        let heading = plan.start().bearing_to(&plan.end());
        let end = plan.end();
        let (d_lat, d_lon, d_alt, d_gear) = if steps == 0 {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            let n = steps as f64;
            (
                (end.lat() - state.lat()) / n,
                (end.lon() - state.lon()) / n,
                (end.alt() - state.alt()) / n,
                (plan.gear_target() - state.gear_position()) / n,
            )
        };
        // a zero-step segment is an instantaneous jump and has no vertical speed
        let vertical_speed = d_alt * f64::from(tick_rate);
        Self {
            phase: plan.phase(),
            speed: plan.speed(),
            end,
            gear_target: plan.gear_target(),
            heading,
            pitch: pitch_for(vertical_speed),
            steps,
            done: 0,
            d_lat,
            d_lon,
            d_alt,
            d_gear,
        }
    }

    pub fn phase(&self) -> FlightPhase { self.phase }
    pub fn speed(&self) -> f64 { self.speed }
    /// Heading held for the whole segment, the bearing from nominal start to end.
    pub fn heading(&self) -> f64 { self.heading }
    pub fn pitch(&self) -> f64 { self.pitch }
    pub fn steps(&self) -> usize { self.steps }
    pub fn is_degenerate(&self) -> bool { self.steps == 0 }
    pub fn is_finished(&self) -> bool { self.done >= self.steps }

    /// Applies the segment's one-time attitude to `state`.
    ///
    /// A zero-step segment is resolved here: the state jumps straight to the end waypoint
    /// and gear target, and [`advance`](Self::advance) yields nothing.
    pub fn begin(&self, state: &mut AircraftState) {
        state.set_heading(self.heading);
        if self.is_degenerate() {
            state.set_position(self.end);
            state.set_gear_position(self.gear_target);
            state.set_pitch(self.pitch);
        }
    }

    /// Moves `state` by one tick and returns the index of that tick within the segment,
    /// or `None` once all steps have been flown.
    pub fn advance(&mut self, state: &mut AircraftState) -> Option<usize> {
        if self.is_finished() {
            return None;
        }
        state.translate(self.d_lat, self.d_lon, self.d_alt);
        state.move_gear(self.d_gear);
        state.set_pitch(self.pitch);
        let tick = self.done;
        self.done += 1;
        Some(tick)
    }
}

/// Attitude pitch in degrees for a vertical speed in ft/s.
pub fn pitch_for(vertical_speed: f64) -> f64 {
    if vertical_speed > SegmentStepper::LEVEL_BAND_FPS {
        CLIMB_PITCH
    } else if vertical_speed < -SegmentStepper::LEVEL_BAND_FPS {
        DESCENT_PITCH
    } else {
        0.0
    }
}

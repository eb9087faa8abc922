use super::{common::Waypoint, flight_phase::FlightPhase};
use std::time::Duration;

/// An airport the route alternates between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Airport {
    code: &'static str,
    position: Waypoint,
}

impl Airport {
    pub const fn new(code: &'static str, position: Waypoint) -> Self { Self { code, position } }

    pub fn code(&self) -> &'static str { self.code }
    pub fn position(&self) -> Waypoint { self.position }
}

/// Félix-Houphouët-Boigny International, Abidjan.
pub const ABJ: Airport = Airport::new("ABJ", Waypoint::new(5.2614, -3.9263, 21.0));
/// Murtala Muhammed International, Lagos.
pub const LOS: Airport = Airport::new("LOS", Waypoint::new(6.5774, 3.3212, 135.0));

/// Commanded parameters of a single phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPlan {
    phase: FlightPhase,
    start: Waypoint,
    end: Waypoint,
    duration: Duration,
    speed: f64,
    gear_target: f64,
}

impl SegmentPlan {
    pub fn new(
        phase: FlightPhase,
        start: Waypoint,
        end: Waypoint,
        duration: Duration,
        speed: f64,
        gear_target: f64,
    ) -> Self {
        Self { phase, start, end, duration, speed, gear_target }
    }

    pub fn phase(&self) -> FlightPhase { self.phase }
    /// Nominal start of the segment. Only the heading is derived from it.
    pub fn start(&self) -> Waypoint { self.start }
    pub fn end(&self) -> Waypoint { self.end }
    pub fn duration(&self) -> Duration { self.duration }
    /// Commanded speed in knots.
    pub fn speed(&self) -> f64 { self.speed }
    /// `0.0` for retracted, `1.0` for extended.
    pub fn gear_target(&self) -> f64 { self.gear_target }
}

/// The seven ordered segments flown in one cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightPlan {
    flight_id: String,
    origin: Airport,
    destination: Airport,
    segments: Vec<SegmentPlan>,
}

impl FlightPlan {
    const TAXI_OFFSET: f64 = 0.01;
    const DEPARTURE_OFFSET: f64 = 0.05;
    const CRUISE_EXIT_OFFSET: f64 = 0.1;
    const DESCENT_EXIT_OFFSET: f64 = 0.05;
    const TAKEOFF_ALT: f64 = 1500.0;
    const CRUISE_ALT: f64 = 5000.0;
    const DESCENT_ALT: f64 = 2000.0;

    /// Builds the plan of the 1-based `cycle`: odd cycles fly ABJ → LOS, even cycles LOS → ABJ.
    pub fn for_cycle(cycle: u32) -> Self {
        let (origin, destination) = if cycle % 2 == 1 { (ABJ, LOS) } else { (LOS, ABJ) };
        Self::between(format!("NG-{cycle:03}"), origin, destination)
    }

    /// Builds the standard seven-phase profile from `origin` to `destination`.
    pub fn between(flight_id: String, origin: Airport, destination: Airport) -> Self {
        let secs = Duration::from_secs;
        let o = origin.position();
        let d = destination.position();

        let taxi_end = o.offset(Self::TAXI_OFFSET, Self::TAXI_OFFSET);
        let takeoff_end = o
            .offset(Self::DEPARTURE_OFFSET, Self::DEPARTURE_OFFSET)
            .at_alt(Self::TAKEOFF_ALT);
        let climb_end = takeoff_end
            .offset(Self::DEPARTURE_OFFSET, Self::DEPARTURE_OFFSET)
            .at_alt(Self::CRUISE_ALT);
        let cruise_end = d
            .offset(-Self::CRUISE_EXIT_OFFSET, -Self::CRUISE_EXIT_OFFSET)
            .at_alt(Self::CRUISE_ALT);
        let descent_end = d
            .offset(-Self::DESCENT_EXIT_OFFSET, -Self::DESCENT_EXIT_OFFSET)
            .at_alt(Self::DESCENT_ALT);
        let rollout_end = d.offset(Self::TAXI_OFFSET, Self::TAXI_OFFSET);

        let segments = vec![
            SegmentPlan::new(FlightPhase::Taxi, o, taxi_end, secs(3), 20.0, 1.0),
            SegmentPlan::new(FlightPhase::Takeoff, taxi_end, takeoff_end, secs(8), 140.0, 0.0),
            SegmentPlan::new(FlightPhase::Climb, takeoff_end, climb_end, secs(4), 180.0, 0.0),
            SegmentPlan::new(FlightPhase::Cruise, climb_end, cruise_end, secs(4), 220.0, 0.0),
            SegmentPlan::new(FlightPhase::Descent, cruise_end, descent_end, secs(4), 180.0, 0.0),
            SegmentPlan::new(FlightPhase::Approach, descent_end, d, secs(8), 160.0, 1.0),
            SegmentPlan::new(FlightPhase::Landing, d, rollout_end, secs(5), 80.0, 1.0),
        ];
        Self { flight_id, origin, destination, segments }
    }

    pub fn flight_id(&self) -> &str { &self.flight_id }
    pub fn origin(&self) -> Airport { self.origin }
    pub fn destination(&self) -> Airport { self.destination }
    pub fn segments(&self) -> &[SegmentPlan] { &self.segments }

    /// Total scheduled flight time of all segments.
    pub fn block_time(&self) -> Duration { self.segments.iter().map(SegmentPlan::duration).sum() }
}

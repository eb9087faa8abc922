use strum_macros::{Display, EnumIter};

/// Named segment of a flight cycle. Declaration order is the fixed order in
/// which a cycle traverses the phases.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Display, EnumIter, serde::Serialize)]
pub enum FlightPhase {
    Taxi,
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Approach,
    Landing,
}

impl FlightPhase {
    /// Hydraulic pressure drawn down by gear and flap actuation during these phases.
    const HIGH_DEMAND_DROP: f64 = 200.0;

    /// Ground-roll phases where the brakes absorb energy.
    pub fn loads_brakes(self) -> bool { matches!(self, FlightPhase::Taxi | FlightPhase::Landing) }

    /// Fixed reduction of the hydraulic pressure target for this phase.
    pub fn hydraulic_demand(self) -> f64 {
        match self {
            FlightPhase::Takeoff | FlightPhase::Approach => Self::HIGH_DEMAND_DROP,
            _ => 0.0,
        }
    }

    /// Fault injection runs between `Approach` and this phase.
    pub fn is_touchdown(self) -> bool { self == FlightPhase::Landing }
}

impl From<FlightPhase> for &'static str {
    fn from(value: FlightPhase) -> Self {
        match value {
            FlightPhase::Taxi => "Taxi",
            FlightPhase::Takeoff => "Takeoff",
            FlightPhase::Climb => "Climb",
            FlightPhase::Cruise => "Cruise",
            FlightPhase::Descent => "Descent",
            FlightPhase::Approach => "Approach",
            FlightPhase::Landing => "Landing",
        }
    }
}

/// Runway surface reported with every persisted sample.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
pub enum RunwayCondition {
    #[strum(serialize = "DRY")]
    Dry,
}

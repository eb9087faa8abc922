use crate::flight_control::FlightPhase;
use std::fmt::{Display, Formatter};

/// Progress of a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Before the first tick.
    Init,
    /// Flying `phase` of the 1-based `cycle`.
    Flying { cycle: u32, phase: FlightPhase },
    /// All configured cycles completed.
    Finished,
    /// Stopped early on request.
    Cancelled,
}

impl RunState {
    pub fn is_terminal(self) -> bool { matches!(self, RunState::Finished | RunState::Cancelled) }
}

impl Display for RunState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RunState::Init => write!(f, "INIT"),
            RunState::Flying { cycle, phase } => write!(f, "cycle {cycle} {phase}"),
            RunState::Finished => write!(f, "FINISHED"),
            RunState::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

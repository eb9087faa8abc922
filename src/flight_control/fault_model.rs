use super::{aircraft_state::AircraftState, common::RandomSource};

/// Outcome of one touchdown as decided by [`assess_landing`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingAssessment {
    is_hard_landing: bool,
    g_force: f64,
    health_delta: f64,
    should_alert: bool,
}

impl LandingAssessment {
    /// Hard landing probability without any accumulated wear.
    const BASE_HARD_PROB: f64 = 0.1;
    /// Additional hard landing probability per unit of cycle risk.
    const RISK_WEIGHT: f64 = 0.2;
    /// Gear cycles that add one unit of risk.
    const CYCLES_PER_RISK: f64 = 100.0;
    const IMPACT_BASE_G: f64 = 1.3;
    const IMPACT_EXTRA_G: (f64, f64) = (0.5, 2.0);
    /// Main gear health lost per G of impact.
    const HEALTH_LOSS_PER_G: f64 = 0.5;
    /// Impacts above this G trigger an alert.
    pub const ALERT_THRESHOLD_G: f64 = 2.5;
    pub const NOMINAL_TOUCHDOWN_G: f64 = 1.1;

    pub fn is_hard_landing(&self) -> bool { self.is_hard_landing }
    pub fn g_force(&self) -> f64 { self.g_force }
    pub fn health_delta(&self) -> f64 { self.health_delta }
    pub fn should_alert(&self) -> bool { self.should_alert }

    /// Probability of a hard landing after `gear_cycles` cycles.
    pub fn hard_landing_probability(gear_cycles: u32) -> f64 {
        let risk = f64::from(gear_cycles) / Self::CYCLES_PER_RISK;
        Self::BASE_HARD_PROB + risk * Self::RISK_WEIGHT
    }

    /// Writes the touchdown load and the resulting wear into `state`.
    pub fn apply(&self, state: &mut AircraftState) {
        state.set_g_force(self.g_force);
        state.degrade_main_health(self.health_delta);
    }
}

/// Decides the touchdown outcome for an aircraft with `gear_cycles` accumulated cycles.
///
/// Draws one unit value to decide whether the landing is hard and, only for a hard
/// landing, one extra impact value. The result depends on nothing but the cycle count
/// and the draws, so a scripted `rng` makes it fully deterministic.
pub fn assess_landing<R: RandomSource>(gear_cycles: u32, rng: &mut R) -> LandingAssessment {
    let threshold = LandingAssessment::hard_landing_probability(gear_cycles);
    if rng.unit() < threshold {
        let (low, high) = LandingAssessment::IMPACT_EXTRA_G;
        let impact = LandingAssessment::IMPACT_BASE_G + rng.uniform(low, high);
        LandingAssessment {
            is_hard_landing: true,
            g_force: impact,
            health_delta: impact * LandingAssessment::HEALTH_LOSS_PER_G,
            should_alert: impact > LandingAssessment::ALERT_THRESHOLD_G,
        }
    } else {
        LandingAssessment {
            is_hard_landing: false,
            g_force: LandingAssessment::NOMINAL_TOUCHDOWN_G,
            health_delta: 0.0,
            should_alert: false,
        }
    }
}

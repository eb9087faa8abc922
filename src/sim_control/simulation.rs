use super::{pacer::Pacer, run_state::RunState, signal::RunExitSignal};
use crate::flight_control::{
    AircraftState, FlightComputer, FlightPlan, SegmentPlan, common::RandomSource,
};
use crate::keychain::Keychain;
use crate::telemetry::SinkStats;
use crate::{info, log, phase, warn};
use chrono::Utc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Outcome of a complete (or cancelled) run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub state: RunState,
    pub cycles_completed: u32,
    pub ticks: u64,
    pub sim_time: Duration,
    pub hard_landings: u32,
    pub alerts: u32,
    pub final_state: AircraftState,
    pub sinks: SinkStats,
}

/// Drives the [`FlightComputer`] through the configured number of flight cycles,
/// feeding every tick to the [`Keychain`] and pacing ticks with `P`.
///
/// Runs in a single task: ticks are strictly sequential, and cancellation is checked
/// once per tick, never inside a physics update.
pub struct Simulation<R: RandomSource, P: Pacer> {
    computer: FlightComputer<R>,
    keychain: Keychain,
    pacer: P,
    cycles: u32,
    run_state: RunState,
    cycles_completed: u32,
    hard_landings: u32,
    alerts: u32,
}

impl<R: RandomSource, P: Pacer> Simulation<R, P> {
    pub fn new(computer: FlightComputer<R>, keychain: Keychain, pacer: P, cycles: u32) -> Self {
        Self {
            computer,
            keychain,
            pacer,
            cycles,
            run_state: RunState::Init,
            cycles_completed: 0,
            hard_landings: 0,
            alerts: 0,
        }
    }

    /// Flies every cycle, then finalizes the sinks. Stops after the current tick once
    /// `c_tok` is cancelled; the sinks are finalized in that case as well.
    pub async fn run(mut self, c_tok: CancellationToken) -> RunSummary {
        info!("Starting {}-flight cycle at {} Hz", self.cycles, self.computer.tick_rate());
        if !self.keychain.has_sample_store() {
            warn!("No sample log attached, samples will not be persisted");
        }
        for cycle in 1..=self.cycles {
            if c_tok.is_cancelled() {
                self.run_state = RunState::Cancelled;
                break;
            }
            let plan = FlightPlan::for_cycle(cycle);
            info!(
                "Flight {} ({cycle}/{}) {} -> {}, block time {}s",
                plan.flight_id(),
                self.cycles,
                plan.origin().code(),
                plan.destination().code(),
                plan.block_time().as_secs()
            );
            let signal = self.fly_cycle(cycle, &plan, &c_tok).await;
            // samples reach durable storage once per cycle, including a cancelled one
            self.keychain.flush_samples();
            if signal == RunExitSignal::Cancelled {
                self.run_state = RunState::Cancelled;
                break;
            }
            self.cycles_completed += 1;
            let dropped = self.keychain.stats().total_dropped();
            if dropped > 0 {
                log!("{dropped} sink sends dropped after {cycle} cycles");
            }
        }
        if !self.run_state.is_terminal() {
            self.run_state = RunState::Finished;
        }
        if self.run_state == RunState::Cancelled {
            warn!("Run cancelled after {} completed cycles", self.cycles_completed);
        }

        let sinks = self.keychain.finalize().await;
        RunSummary {
            state: self.run_state,
            cycles_completed: self.cycles_completed,
            ticks: self.computer.ticks(),
            sim_time: self.computer.sim_time(),
            hard_landings: self.hard_landings,
            alerts: self.alerts,
            final_state: self.computer.state().clone(),
            sinks,
        }
    }

    async fn fly_cycle(
        &mut self,
        cycle: u32,
        plan: &FlightPlan,
        c_tok: &CancellationToken,
    ) -> RunExitSignal {
        for segment in plan.segments() {
            if segment.phase().is_touchdown() {
                self.touch_down(plan.flight_id());
            }
            let signal = self.fly_segment(cycle, plan.flight_id(), segment, c_tok).await;
            if signal == RunExitSignal::Cancelled {
                return signal;
            }
        }
        RunExitSignal::Continue
    }

    fn touch_down(&mut self, flight_id: &str) {
        let assessment = self.computer.touch_down();
        if assessment.is_hard_landing() {
            self.hard_landings += 1;
            warn!(
                "HARD LANDING: {:.2}G on {flight_id}, main gear health -{:.2}",
                assessment.g_force(),
                assessment.health_delta()
            );
        }
        if assessment.should_alert() {
            self.alerts += 1;
            self.keychain.dispatch_alert(assessment.g_force());
        }
    }

    async fn fly_segment(
        &mut self,
        cycle: u32,
        flight_id: &str,
        segment: &SegmentPlan,
        c_tok: &CancellationToken,
    ) -> RunExitSignal {
        let mut stepper = self.computer.begin_segment(flight_id, segment);
        self.run_state = RunState::Flying { cycle, phase: segment.phase() };
        self.keychain.record_phase(self.computer.state(), Utc::now());
        phase!("{flight_id} {} started ({} ticks)", segment.phase(), stepper.steps());

        while let Some(report) = self.computer.step(&mut stepper) {
            let now = Utc::now();
            self.keychain.emit_snapshot(self.computer.state(), now);
            if report.persist_sample {
                self.keychain.persist_sample(self.computer.state(), now);
            }
            if c_tok.is_cancelled() {
                return RunExitSignal::Cancelled;
            }
            self.pacer.pace().await;
        }
        RunExitSignal::Continue
    }
}

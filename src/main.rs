#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod config;
mod flight_control;
mod keychain;
mod logger;
mod sim_control;
mod telemetry;

use crate::config::SimConfig;
use crate::flight_control::{ABJ, AircraftState, FlightComputer, common::RngSource};
use crate::keychain::Keychain;
use crate::sim_control::{Pacer, RealTimePacer, RunSummary, Simulation, Unpaced};
use rand::{SeedableRng, rngs::StdRng};
use tokio_util::sync::CancellationToken;

type Computer = FlightComputer<RngSource<StdRng>>;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = match SimConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => fatal!("Invalid configuration: {e:?}"),
    };
    let rng = match config.seed {
        Some(seed) => {
            info!("Seeding random source with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    let computer = FlightComputer::new(
        AircraftState::new(ABJ.position()),
        RngSource::new(rng),
        config.tick_rate,
    );
    let keychain = Keychain::connect(&config).await;

    let c_tok = CancellationToken::new();
    let ctrl_c_tok = c_tok.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupt received, stopping after the current tick");
            ctrl_c_tok.cancel();
        }
    });

    let summary = if config.realtime {
        let pacer = RealTimePacer::new(config.tick_rate);
        info!("Pacing ticks every {:?}", pacer.period());
        fly(computer, keychain, pacer, &config, c_tok).await
    } else {
        fly(computer, keychain, Unpaced, &config, c_tok).await
    };
    report(&summary);
}

async fn fly<P: Pacer>(
    computer: Computer,
    keychain: Keychain,
    pacer: P,
    config: &SimConfig,
    c_tok: CancellationToken,
) -> RunSummary {
    Simulation::new(computer, keychain, pacer, config.cycles).run(c_tok).await
}

fn report(summary: &RunSummary) {
    let last = &summary.final_state;
    info!(
        "Run {}: {} cycles, {} ticks, {:.1}s simulated",
        summary.state,
        summary.cycles_completed,
        summary.ticks,
        summary.sim_time.as_secs_f64()
    );
    info!(
        "Gear: {} cycles, main health {:.2} ({}), nose health {:.2}, {} hard landings, {} alerts",
        last.gear_cycles(),
        last.main_health(),
        last.gear_status(),
        last.nose_health(),
        summary.hard_landings,
        summary.alerts
    );
    if summary.sinks.total_dropped() > 0 {
        warn!("Sinks: {}", summary.sinks);
    } else {
        log!("Sinks: {}", summary.sinks);
    }
}

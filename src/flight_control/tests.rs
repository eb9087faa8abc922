use super::common::{RngSource, Waypoint, random_source::ScriptedDraws};
use super::*;
use rand::{SeedableRng, rngs::StdRng};
use std::time::Duration;
use strum::IntoEnumIterator;

const EPS: f64 = 1e-9;
const RATE: u32 = 60;

fn parked_at_abj() -> AircraftState { AircraftState::new(ABJ.position()) }

fn computer(draws: ScriptedDraws) -> FlightComputer<ScriptedDraws> {
    FlightComputer::new(parked_at_abj(), draws, RATE)
}

#[test]
fn test_nominal_touchdown_without_wear() {
    let mut draws = ScriptedDraws::new(&[0.5], &[]);
    let outcome = assess_landing(0, &mut draws);
    assert!(!outcome.is_hard_landing());
    assert!((outcome.g_force() - LandingAssessment::NOMINAL_TOUCHDOWN_G).abs() < EPS);
    assert!(outcome.health_delta().abs() < EPS);
    assert!(!outcome.should_alert());
}

#[test]
fn test_hard_landing_with_alert() {
    let mut draws = ScriptedDraws::new(&[0.05], &[2.0]);
    let outcome = assess_landing(0, &mut draws);
    assert!(outcome.is_hard_landing());
    assert!((outcome.g_force() - 3.3).abs() < EPS);
    assert!((outcome.health_delta() - 1.65).abs() < EPS);
    assert!(outcome.should_alert());
}

#[test]
fn test_mild_hard_landing_stays_silent() {
    let mut draws = ScriptedDraws::new(&[0.05], &[0.5]);
    let outcome = assess_landing(0, &mut draws);
    assert!(outcome.is_hard_landing());
    assert!((outcome.g_force() - 1.8).abs() < EPS);
    assert!((outcome.health_delta() - 0.9).abs() < EPS);
    assert!(!outcome.should_alert());
}

#[test]
fn test_hard_landing_risk_grows_with_cycles() {
    assert!((LandingAssessment::hard_landing_probability(0) - 0.1).abs() < EPS);
    assert!((LandingAssessment::hard_landing_probability(100) - 0.3).abs() < EPS);

    let fresh = assess_landing(0, &mut ScriptedDraws::new(&[0.25], &[1.0]));
    let worn = assess_landing(100, &mut ScriptedDraws::new(&[0.25], &[1.0]));
    assert!(!fresh.is_hard_landing());
    assert!(worn.is_hard_landing());
}

#[test]
fn test_fault_model_is_deterministic_under_fixed_draws() {
    for cycles in [0, 1, 37, 75, 500] {
        for unit in [0.0, 0.05, 0.11, 0.3, 0.99] {
            let a = assess_landing(cycles, &mut ScriptedDraws::new(&[unit], &[1.7]));
            let b = assess_landing(cycles, &mut ScriptedDraws::new(&[unit], &[1.7]));
            assert_eq!(a, b);
        }
    }
    let mut x = RngSource::new(StdRng::seed_from_u64(3));
    let mut y = RngSource::new(StdRng::seed_from_u64(3));
    for cycles in 0..200 {
        assert_eq!(assess_landing(cycles, &mut x), assess_landing(cycles, &mut y));
    }
}

#[test]
fn test_touch_down_counts_cycle_before_assessing() {
    // 0.101 is above the 0-cycle threshold (0.1) but below the 1-cycle one (0.102)
    let mut fc = computer(ScriptedDraws::new(&[0.101], &[2.0]));
    let outcome = fc.touch_down();
    assert_eq!(fc.state().gear_cycles(), 1);
    assert!(outcome.is_hard_landing());
    assert!((fc.state().g_force() - 3.3).abs() < EPS);
    assert!((fc.state().main_health() - (100.0 - 1.65)).abs() < EPS);
}

#[test]
fn test_health_never_negative_or_rising() {
    let mut state = parked_at_abj();
    let hard = assess_landing(0, &mut ScriptedDraws::new(&[0.0], &[2.0]));
    let mut last = state.main_health();
    for _ in 0..200 {
        hard.apply(&mut state);
        assert!(state.main_health() <= last);
        assert!(state.main_health() >= 0.0);
        last = state.main_health();
    }
    assert!(state.main_health().abs() < EPS);
    state.degrade_main_health(-10.0);
    state.degrade_main_health(f64::NAN);
    assert!(state.main_health().abs() < EPS);
}

#[test]
fn test_initial_state() {
    let state = parked_at_abj();
    assert_eq!(state.position(), ABJ.position());
    assert_eq!(state.flight_id(), "INIT");
    assert_eq!(state.phase_name(), "INIT");
    assert_eq!(state.phase(), None);
    assert_eq!(state.gear_cycles(), 0);
    assert!((state.gear_position() - 1.0).abs() < EPS);
    assert!((state.main_health() - 100.0).abs() < EPS);
    assert!((state.nose_health() - 100.0).abs() < EPS);
    assert!((state.seal_integrity() - 1.0).abs() < EPS);
    assert!((state.hyd_pressure() - 3000.0).abs() < EPS);
    assert_eq!(state.runway_condition(), RunwayCondition::Dry);
    assert_eq!(state.gear_status(), GearStatus::Normal);
}

#[test]
fn test_gear_status_thresholds() {
    let mut state = parked_at_abj();
    state.degrade_main_health(20.0);
    assert_eq!(state.gear_status(), GearStatus::Normal);
    state.degrade_main_health(0.1);
    assert_eq!(state.gear_status(), GearStatus::Degraded);
    state.degrade_main_health(30.0);
    assert_eq!(state.gear_status(), GearStatus::Critical);
    assert_eq!(state.gear_status().to_string(), "CRITICAL");
}

#[test]
fn test_gear_position_is_clamped() {
    let mut state = parked_at_abj();
    state.move_gear(0.5);
    assert!((state.gear_position() - 1.0).abs() < EPS);
    state.move_gear(-5.0);
    assert!(state.gear_position().abs() < EPS);
    state.set_gear_position(1.7);
    assert!((state.gear_position() - 1.0).abs() < EPS);
    state.set_gear_position(f64::NAN);
    assert!((state.gear_position() - 1.0).abs() < EPS);
}

#[test]
fn test_heading_is_segment_bearing() {
    let start = Waypoint::new(5.0, -4.0, 100.0);
    let end = Waypoint::new(5.3, -3.6, 3000.0);
    let expected = start.bearing_to(&end);
    let state = parked_at_abj();
    for (secs, speed) in [(1, 20.0), (4, 180.0), (30, 400.0), (0, 0.0)] {
        let plan = SegmentPlan::new(
            FlightPhase::Climb,
            start,
            end,
            Duration::from_secs(secs),
            speed,
            0.0,
        );
        let stepper = SegmentStepper::new(&plan, &state, RATE);
        assert!((stepper.heading() - expected).abs() < EPS);
    }
}

#[test]
fn test_zero_duration_segment_jumps_to_end() {
    let mut fc = computer(ScriptedDraws::default());
    let end = Waypoint::new(6.0, 3.0, 4000.0);
    let plan = SegmentPlan::new(FlightPhase::Cruise, ABJ.position(), end, Duration::ZERO, 220.0, 0.0);
    let mut stepper = fc.begin_segment("NG-001", &plan);
    assert!(stepper.is_degenerate());
    assert!(fc.step(&mut stepper).is_none());
    assert_eq!(fc.state().position(), end);
    assert!(fc.state().gear_position().abs() < EPS);
    assert_eq!(fc.ticks(), 0);
    assert_eq!(fc.state().phase(), Some(FlightPhase::Cruise));
}

#[test]
fn test_sub_tick_duration_is_degenerate() {
    let plan = SegmentPlan::new(
        FlightPhase::Taxi,
        ABJ.position(),
        ABJ.position().offset(0.01, 0.01),
        Duration::from_millis(10),
        20.0,
        1.0,
    );
    let stepper = SegmentStepper::new(&plan, &parked_at_abj(), RATE);
    assert_eq!(stepper.steps(), 0);
}

#[test]
fn test_segment_reaches_end_from_actual_state() {
    let mut fc = computer(ScriptedDraws::default());
    // nominal start deliberately differs from where the aircraft is parked
    let nominal_start = Waypoint::new(0.0, 0.0, 0.0);
    let end = ABJ.position().offset(0.05, 0.05).at_alt(1500.0);
    let plan = SegmentPlan::new(FlightPhase::Takeoff, nominal_start, end, Duration::from_secs(8), 140.0, 0.0);
    let mut stepper = fc.begin_segment("NG-001", &plan);
    assert_eq!(stepper.steps(), 480);
    let mut ticks = 0;
    while fc.step(&mut stepper).is_some() {
        ticks += 1;
    }
    assert_eq!(ticks, 480);
    assert!((fc.state().lat() - end.lat()).abs() < 1e-9);
    assert!((fc.state().lon() - end.lon()).abs() < 1e-9);
    assert!((fc.state().alt() - end.alt()).abs() < 1e-6);
    assert!(fc.state().gear_position().abs() < 1e-9);
    assert!((fc.state().heading() - nominal_start.bearing_to(&end)).abs() < EPS);
}

#[test]
fn test_gear_stays_in_bounds_every_tick() {
    let mut fc = computer(ScriptedDraws::default());
    let plan = FlightPlan::for_cycle(1);
    for segment in plan.segments() {
        let mut stepper = fc.begin_segment(plan.flight_id(), segment);
        while fc.step(&mut stepper).is_some() {
            let gear = fc.state().gear_position();
            assert!((0.0..=1.0).contains(&gear), "gear {gear} out of bounds");
        }
    }
}

#[test]
fn test_pitch_follows_vertical_rate() {
    assert!((pitch_for(40.0) - 7.0).abs() < EPS);
    assert!((pitch_for(-40.0) + 5.0).abs() < EPS);
    assert!(pitch_for(30.0).abs() < EPS);
    assert!(pitch_for(0.0).abs() < EPS);

    let plan = FlightPlan::for_cycle(1);
    let state = parked_at_abj();
    let pitches: Vec<f64> = plan
        .segments()
        .iter()
        .map(|s| SegmentStepper::new(s, &state, RATE).pitch())
        .collect();
    assert!((pitches[1] - 7.0).abs() < EPS);
    assert!(pitches[0].abs() < EPS);
}

#[test]
fn test_sample_cadence_once_per_second() {
    let mut fc = computer(ScriptedDraws::default());
    let plan = FlightPlan::for_cycle(1);
    for segment in plan.segments() {
        let mut stepper = fc.begin_segment(plan.flight_id(), segment);
        let mut samples = 0;
        while let Some(report) = fc.step(&mut stepper) {
            if report.persist_sample {
                samples += 1;
            }
        }
        assert_eq!(samples, segment.duration().as_secs());
    }
    assert_eq!(fc.ticks(), 36 * u64::from(RATE));
    assert!((fc.sim_time().as_secs_f64() - 36.0).abs() < 1e-6);
}

#[test]
fn test_tick_counter_is_monotonic() {
    let mut fc = computer(ScriptedDraws::default());
    let plan = FlightPlan::for_cycle(2);
    let mut last = None;
    for segment in plan.segments() {
        let mut stepper = fc.begin_segment(plan.flight_id(), segment);
        while let Some(report) = fc.step(&mut stepper) {
            if let Some(prev) = last {
                assert_eq!(report.tick, prev + 1);
            }
            last = Some(report.tick);
        }
    }
}

#[test]
fn test_hydraulic_target() {
    assert!((hydraulic_target(1.0, FlightPhase::Taxi) - 3000.0).abs() < EPS);
    assert!((hydraulic_target(1.0, FlightPhase::Takeoff) - 2800.0).abs() < EPS);
    assert!((hydraulic_target(0.8, FlightPhase::Cruise) - 2500.0).abs() < EPS);
    assert!((hydraulic_target(0.5, FlightPhase::Approach) - 2300.0).abs() < EPS);
}

#[test]
fn test_hydraulic_lag_matches_per_tick_rate() {
    assert!((hydraulic_lag(1.0 / 60.0) - 0.2).abs() < 1e-12);
    assert!((hydraulic_lag(1.0 / 30.0) - 0.36).abs() < 1e-12);
    assert!(hydraulic_lag(0.0).abs() < EPS);

    let mut state = parked_at_abj();
    let mut draws = ScriptedDraws::default();
    update_physics(&mut state, FlightPhase::Takeoff, 140.0, 1.0 / 60.0, &mut draws);
    assert!((state.hyd_pressure() - 2960.0).abs() < 1e-9);
}

#[test]
fn test_brakes_heat_on_ground_and_cool_in_air() {
    let mut state = parked_at_abj();
    let mut draws = ScriptedDraws::default();
    let dt = 1.0 / 60.0;
    update_physics(&mut state, FlightPhase::Taxi, 20.0, dt, &mut draws);
    assert!((state.brake_temp() - (150.0 + 0.5 * 20.0 * dt)).abs() < 1e-9);

    let before = state.brake_temp();
    update_physics(&mut state, FlightPhase::Cruise, 220.0, dt, &mut draws);
    assert!((state.brake_temp() - (before - 2.0 * dt)).abs() < 1e-9);

    update_physics(&mut state, FlightPhase::Landing, 80.0, dt, &mut draws);
    assert!(state.brake_temp() > before - 2.0 * dt);
}

#[test]
fn test_brakes_never_cool_below_ambient() {
    let mut state = parked_at_abj();
    let mut draws = ScriptedDraws::default();
    for _ in 0..20_000 {
        update_physics(&mut state, FlightPhase::Cruise, 220.0, 1.0 / 60.0, &mut draws);
        assert!(state.brake_temp() >= AircraftState::AMBIENT_BRAKE_TEMP);
    }
    assert!((state.brake_temp() - AircraftState::AMBIENT_BRAKE_TEMP).abs() < EPS);
}

#[test]
fn test_vibration_baseline_plus_noise() {
    assert!((vibration_baseline(100.0) - 0.05).abs() < EPS);
    assert!((vibration_baseline(80.0) - 0.25).abs() < EPS);

    let mut state = parked_at_abj();
    let mut draws = ScriptedDraws::new(&[], &[0.05, -0.05]);
    update_physics(&mut state, FlightPhase::Cruise, 220.0, 1.0 / 60.0, &mut draws);
    assert!((state.vibration() - 0.1).abs() < EPS);
    update_physics(&mut state, FlightPhase::Cruise, 220.0, 1.0 / 60.0, &mut draws);
    assert!(state.vibration().abs() < EPS);
}

#[test]
fn test_vibration_is_never_negative() {
    let mut state = parked_at_abj();
    let mut rng = RngSource::new(StdRng::seed_from_u64(11));
    for _ in 0..5000 {
        update_physics(&mut state, FlightPhase::Landing, 80.0, 1.0 / 60.0, &mut rng);
        let vib = state.vibration();
        assert!(vib >= 0.0);
        assert!(vib <= vibration_baseline(state.main_health()) + 0.05 + EPS);
    }
}

#[test]
fn test_flight_plan_alternates_route() {
    let odd = FlightPlan::for_cycle(1);
    let even = FlightPlan::for_cycle(2);
    assert_eq!(odd.flight_id(), "NG-001");
    assert_eq!(even.flight_id(), "NG-002");
    assert_eq!(FlightPlan::for_cycle(75).flight_id(), "NG-075");
    assert_eq!((odd.origin().code(), odd.destination().code()), ("ABJ", "LOS"));
    assert_eq!((even.origin().code(), even.destination().code()), ("LOS", "ABJ"));
}

#[test]
fn test_flight_plan_covers_phases_in_order() {
    let plan = FlightPlan::for_cycle(3);
    let phases: Vec<FlightPhase> = plan.segments().iter().map(SegmentPlan::phase).collect();
    let expected: Vec<FlightPhase> = FlightPhase::iter().collect();
    assert_eq!(phases, expected);
    assert_eq!(plan.block_time(), Duration::from_secs(36));

    for pair in plan.segments().windows(2) {
        assert_eq!(pair[0].end(), pair[1].start());
    }
    let approach = &plan.segments()[5];
    assert_eq!(approach.end(), plan.destination().position());
    assert!((approach.gear_target() - 1.0).abs() < EPS);
}

#[test]
fn test_phase_predicates() {
    assert!(FlightPhase::Landing.is_touchdown());
    assert!(FlightPhase::Taxi.loads_brakes() && FlightPhase::Landing.loads_brakes());
    assert!(!FlightPhase::Approach.loads_brakes());
    assert_eq!(FlightPhase::Approach.to_string(), "Approach");
}

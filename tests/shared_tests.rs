//! Integration tests for SharedController
//!
//! Runs against critical-section's `std` implementation; on target hardware
//! the integrator's critical-section implementation takes its place.

mod common;
use common::*;

use pelican_crossing::{InputEvent, LampOutputs, SharedController, TrafficLightState};

#[test]
fn shared_operations_drive_the_same_cycle() {
    let shared = SharedController::new(reference_controller());

    shared.evaluate();
    assert_eq!(
        shared.read_outputs(),
        LampOutputs::VEHICLE_GREEN_PEDESTRIAN_RED
    );

    shared.on_button_press();
    for _ in 0..40 {
        shared.advance_tick();
        shared.evaluate();
    }

    assert_eq!(shared.evaluate(), TrafficLightState::VehicleFlashingGreen);
    assert_eq!(shared.with(|ctrl| ctrl.tick_count()), 0);
    assert!(!shared.with(|ctrl| ctrl.press_pending()));
}

#[test]
fn shared_event_dispatch_matches_direct_handlers() {
    let shared = SharedController::new(reference_controller());

    shared.handle_event(InputEvent::ButtonPress);
    assert!(shared.with(|ctrl| ctrl.press_pending()));

    shared.handle_event(InputEvent::TimerTick);
    assert_eq!(shared.with(|ctrl| ctrl.tick_count()), 1);
}

#[test]
fn into_inner_returns_the_controller() {
    let shared = SharedController::new(reference_controller());
    shared.on_button_press();

    let ctrl = shared.into_inner();
    assert!(ctrl.press_pending());
    assert_eq!(ctrl.state(), TrafficLightState::Idle);
}

//! The crossing controller: a tick-driven finite state machine.
//!
//! Provides [`CrossingController`] which owns the full FSM context (active
//! phase, previous phase, pedestrian call flag, tick count) together with
//! the lamp driver, and advances the crossing cycle from three entry points:
//! [`advance_tick`](CrossingController::advance_tick) from the periodic
//! timer, [`on_button_press`](CrossingController::on_button_press) from the
//! call button, and [`evaluate`](CrossingController::evaluate) from the main
//! loop.

use crate::event::InputEvent;
use crate::lamps::{LampDriver, LampOutputs};
use crate::state::TrafficLightState;
use crate::tick::TickRate;

/// How long the crossing must have been idle before a pedestrian call is
/// served.
const IDLE_HOLD_MS: u32 = 10_000;
/// Length of each flashing warning stage.
const FLASHING_STAGE_MS: u32 = 3_000;
/// Length of the all-red clearance interval.
const ALL_RED_HOLD_MS: u32 = 1_000;
/// Length of the pedestrian right-of-way stage.
const PEDESTRIAN_GREEN_MS: u32 = 10_000;
/// Flash half-period; the flashing lamp inverts at this interval.
const FLASH_TOGGLE_MS: u32 = 500;

/// Stage lengths converted to ticks, fixed at construction.
#[derive(Debug, Clone, Copy)]
struct StageTicks {
    idle_hold: u32,
    flashing_stage: u32,
    all_red_hold: u32,
    pedestrian_green: u32,
    flash_toggle: u32,
}

impl StageTicks {
    const fn from_rate(rate: TickRate) -> Self {
        assert!(
            rate.ticks_for_millis(FLASH_TOGGLE_MS) > 0,
            "tick period must not exceed the flash half-period"
        );

        Self {
            idle_hold: rate.ticks_for_millis(IDLE_HOLD_MS),
            flashing_stage: rate.ticks_for_millis(FLASHING_STAGE_MS),
            all_red_hold: rate.ticks_for_millis(ALL_RED_HOLD_MS),
            pedestrian_green: rate.ticks_for_millis(PEDESTRIAN_GREEN_MS),
            flash_toggle: rate.ticks_for_millis(FLASH_TOGGLE_MS),
        }
    }
}

/// Drives a pedestrian crossing signal head through its fixed cycle.
///
/// The controller is the sole writer of phase transitions. A transition
/// updates phase, previous phase, tick count and call flag as one unit; when
/// `advance_tick` and `on_button_press` run from interrupt handlers, wrap
/// the controller in [`SharedController`](crate::shared::SharedController)
/// so that unit can never be observed half-applied.
///
/// The active phase is stored as its raw discriminant: a read is one byte
/// wide (no torn reads) and a value clobbered by a runaway write shows up as
/// unrecognized data instead of an invalid enum. [`evaluate`] recovers such
/// a value to `Idle`.
///
/// # Type Parameters
/// * `L` - Lamp driver implementation type
///
/// [`evaluate`]: CrossingController::evaluate
pub struct CrossingController<L: LampDriver> {
    lamps: L,
    stage_ticks: StageTicks,
    state_raw: u8,
    previous_state: TrafficLightState,
    pressed: bool,
    tick_count: u32,
    outputs: LampOutputs,
    // Tick at which a flash toggle last fired. evaluate runs many times per
    // tick, so a flash boundary must fire exactly once per boundary tick.
    last_toggle_tick: u32,
}

impl<L: LampDriver> CrossingController<L> {
    /// Creates a controller in the `Idle` phase with all lamps off.
    ///
    /// The idle lamp pattern is driven on the first call to `evaluate`.
    pub fn new(mut lamps: L, rate: TickRate) -> Self {
        lamps.set_outputs(LampOutputs::ALL_OFF);

        Self {
            lamps,
            stage_ticks: StageTicks::from_rate(rate),
            state_raw: TrafficLightState::Idle.as_raw(),
            previous_state: TrafficLightState::Idle,
            pressed: false,
            tick_count: 0,
            outputs: LampOutputs::ALL_OFF,
            last_toggle_tick: 0,
        }
    }

    /// Handles an input event by dispatching to the matching handler.
    ///
    /// This is a convenience for integrations that funnel both interrupt
    /// sources through one queue or channel.
    pub fn handle_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::TimerTick => self.advance_tick(),
            InputEvent::ButtonPress => self.on_button_press(),
        }
    }

    /// Advances the tick counter. Call once per timer period.
    ///
    /// This is also where the one externally-gated transition lives: `Idle`
    /// has no run-to-completion exit, so the pedestrian call is checked here
    /// at tick granularity. Once the crossing has been idle for 10 s with a
    /// call latched, the cycle starts.
    pub fn advance_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);

        if self.state_raw == TrafficLightState::Idle.as_raw()
            && self.pressed
            && self.tick_count >= self.stage_ticks.idle_hold
        {
            self.transition(
                TrafficLightState::Idle,
                TrafficLightState::VehicleFlashingGreen,
            );
        }
    }

    /// Latches a pedestrian call. Call on a button press event.
    ///
    /// A press is only honored while idle; during the rest of the cycle it
    /// is dropped, not queued.
    pub fn on_button_press(&mut self) {
        if self.state_raw == TrafficLightState::Idle.as_raw() {
            self.pressed = true;
        }
    }

    /// Runs one pass of the FSM, driving the lamps for the active phase and
    /// taking any due transition. Call continuously from the main loop; the
    /// pass is non-blocking and safe to run any number of times per tick.
    ///
    /// Returns the phase that is active after the pass.
    pub fn evaluate(&mut self) -> TrafficLightState {
        let Some(state) = TrafficLightState::from_raw(self.state_raw) else {
            // Corrupted phase byte. Recover to Idle, deliberately without
            // resetting tick_count or the call flag - matching the reference
            // behavior, where the recovery arm is not a normal transition.
            #[cfg(feature = "defmt")]
            defmt::warn!("unrecognized phase {=u8}, recovering to Idle", self.state_raw);

            self.state_raw = TrafficLightState::Idle.as_raw();
            return TrafficLightState::Idle;
        };

        match state {
            TrafficLightState::Idle => {
                self.apply(LampOutputs::VEHICLE_GREEN_PEDESTRIAN_RED);
            }

            TrafficLightState::VehicleFlashingGreen => {
                if self.tick_count == self.stage_ticks.flashing_stage {
                    self.transition(state, TrafficLightState::AllRed);
                } else if self.at_flash_boundary() {
                    // Only the vehicle green commutes; the pedestrian head
                    // stays red from the idle pattern.
                    self.outputs.vehicle_green = !self.outputs.vehicle_green;
                    self.write_outputs();
                }
            }

            TrafficLightState::AllRed => {
                self.apply(LampOutputs::ALL_RED);

                if self.tick_count == self.stage_ticks.all_red_hold {
                    match self.previous_state {
                        TrafficLightState::VehicleFlashingGreen => {
                            self.transition(state, TrafficLightState::PedestrianGreen);
                        }
                        TrafficLightState::PedestrianFlashingGreen => {
                            self.transition(state, TrafficLightState::Idle);
                        }
                        // AllRed is only ever entered from the two flashing
                        // phases; anything else holds the clearance pattern.
                        _ => {}
                    }
                }
            }

            TrafficLightState::PedestrianGreen => {
                self.apply(LampOutputs::VEHICLE_RED_PEDESTRIAN_GREEN);

                if self.tick_count >= self.stage_ticks.pedestrian_green {
                    self.transition(state, TrafficLightState::PedestrianFlashingGreen);
                }
            }

            TrafficLightState::PedestrianFlashingGreen => {
                if self.tick_count == self.stage_ticks.flashing_stage {
                    self.transition(state, TrafficLightState::AllRed);
                } else if self.at_flash_boundary() {
                    self.outputs.pedestrian_green = !self.outputs.pedestrian_green;
                    self.write_outputs();
                }
            }
        }

        self.state()
    }

    /// Returns the active phase.
    ///
    /// Reports `Idle` if the phase byte is unrecognized; the actual recovery
    /// happens on the next `evaluate` pass.
    pub fn state(&self) -> TrafficLightState {
        TrafficLightState::from_raw(self.state_raw).unwrap_or(TrafficLightState::Idle)
    }

    /// Returns the phase the last transition came from.
    pub fn previous_state(&self) -> TrafficLightState {
        self.previous_state
    }

    /// Returns the number of ticks spent in the active phase.
    pub fn tick_count(&self) -> u32 {
        self.tick_count
    }

    /// Returns true if a pedestrian call is latched.
    pub fn press_pending(&self) -> bool {
        self.pressed
    }

    /// Returns the lamp outputs as last written to the driver.
    pub fn read_outputs(&self) -> LampOutputs {
        self.outputs
    }

    /// Returns a reference to the lamp driver.
    pub fn lamps(&self) -> &L {
        &self.lamps
    }

    /// Takes a transition: phase, previous phase, tick count and call flag
    /// are updated as one unit.
    fn transition(&mut self, from: TrafficLightState, to: TrafficLightState) {
        self.pressed = false;
        self.tick_count = 0;
        self.last_toggle_tick = 0;
        self.state_raw = to.as_raw();
        self.previous_state = from;
    }

    /// True exactly once per flash half-period, and never at phase entry.
    fn at_flash_boundary(&self) -> bool {
        self.tick_count != 0
            && self.tick_count % self.stage_ticks.flash_toggle == 0
            && self.tick_count != self.last_toggle_tick
    }

    /// Writes a steady lamp pattern, skipping the hardware when unchanged.
    fn apply(&mut self, outputs: LampOutputs) {
        if self.outputs != outputs {
            self.outputs = outputs;
            self.lamps.set_outputs(outputs);
        }
    }

    /// Writes the current (toggled) outputs and latches the boundary tick.
    fn write_outputs(&mut self) {
        self.last_toggle_tick = self.tick_count;
        self.lamps.set_outputs(self.outputs);
    }
}

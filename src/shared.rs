//! Interrupt-safe sharing of a controller between handlers and the main loop.
//!
//! The timer and button handlers preempt the main loop at any instruction
//! boundary, so every access to the controller goes through a critical
//! section. That makes a transition's multi-field update indivisible: no
//! reader ever sees the phase changed but the tick count not yet reset.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::controller::CrossingController;
use crate::event::InputEvent;
use crate::lamps::{LampDriver, LampOutputs};
use crate::state::TrafficLightState;

/// A [`CrossingController`] wrapped for shared access.
///
/// All operations take `&self`, so the wrapper can live in a `static` and be
/// reached from interrupt handlers. Each operation holds a critical section
/// for one bounded, non-blocking mutation and nothing more.
pub struct SharedController<L: LampDriver> {
    inner: Mutex<RefCell<CrossingController<L>>>,
}

impl<L: LampDriver> SharedController<L> {
    /// Wraps a controller for shared access.
    pub const fn new(controller: CrossingController<L>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(controller)),
        }
    }

    /// See [`CrossingController::advance_tick`]. Call from the timer handler.
    pub fn advance_tick(&self) {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).advance_tick());
    }

    /// See [`CrossingController::on_button_press`]. Call from the button
    /// handler.
    pub fn on_button_press(&self) {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).on_button_press());
    }

    /// See [`CrossingController::evaluate`]. Call from the main loop.
    pub fn evaluate(&self) -> TrafficLightState {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).evaluate())
    }

    /// See [`CrossingController::read_outputs`].
    pub fn read_outputs(&self) -> LampOutputs {
        critical_section::with(|cs| self.inner.borrow_ref(cs).read_outputs())
    }

    /// See [`CrossingController::handle_event`].
    pub fn handle_event(&self, event: InputEvent) {
        critical_section::with(|cs| self.inner.borrow_ref_mut(cs).handle_event(event));
    }

    /// Runs a closure with exclusive access to the controller.
    ///
    /// For queries not covered by the dedicated operations. Keep the closure
    /// short; it runs inside a critical section.
    pub fn with<R>(&self, f: impl FnOnce(&mut CrossingController<L>) -> R) -> R {
        critical_section::with(|cs| f(&mut self.inner.borrow_ref_mut(cs)))
    }

    /// Consumes the wrapper, returning the controller.
    pub fn into_inner(self) -> CrossingController<L> {
        self.inner.into_inner().into_inner()
    }
}

#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`TrafficLightState`**: The five phases of the crossing cycle
//! - **`CrossingController`**: The FSM engine owning the context and the lamp driver
//! - **`LampDriver`**: Trait to implement for your signal head hardware
//! - **`LampOutputs`**: Snapshot of the four lamps, applied as one write
//! - **`TickRate`**: The fixed timer period all durations are derived from
//! - **`InputEvent`**: Timer and button events as explicit values
//! - **`SharedController`**: Critical-section wrapper for interrupt handlers
//!
//! The controller never reads a clock and never blocks. The integrator owns
//! the timer and the button; the controller owns everything in between.

pub mod controller;
pub mod event;
pub mod lamps;
pub mod shared;
pub mod state;
pub mod tick;

pub use controller::CrossingController;
pub use event::InputEvent;
pub use lamps::{LampDriver, LampOutputs};
pub use shared::SharedController;
pub use state::TrafficLightState;
pub use tick::TickRate;

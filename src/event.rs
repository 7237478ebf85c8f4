//! Input events delivered to the controller by the hardware layer.

/// An input event from the outside world.
///
/// The two interrupt sources of the reference design map onto this enum, so
/// an interrupt handler forwards one bounded event instead of reaching into
/// shared globals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// One period of the fixed-rate timer has elapsed.
    TimerTick,
    /// The pedestrian call button was pressed.
    ButtonPress,
}

//! Lamp output types and the hardware abstraction for the signal heads.

/// Snapshot of all four lamp outputs.
///
/// Replaces a raw output register with four named fields so that integrators
/// map lamps to their own pins. A full snapshot is always written at once,
/// preserving the all-lamps-in-one-write semantics of a port register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LampOutputs {
    /// Vehicle signal head, green lamp.
    pub vehicle_green: bool,
    /// Vehicle signal head, red lamp.
    pub vehicle_red: bool,
    /// Pedestrian signal head, green lamp.
    pub pedestrian_green: bool,
    /// Pedestrian signal head, red lamp.
    pub pedestrian_red: bool,
}

impl LampOutputs {
    /// Every lamp off. The controller writes this once at construction,
    /// before the first evaluation drives the idle pattern.
    pub const ALL_OFF: Self = Self::new(false, false, false, false);

    /// Idle pattern: vehicle green, pedestrian red.
    pub const VEHICLE_GREEN_PEDESTRIAN_RED: Self = Self::new(true, false, false, true);

    /// Clearance pattern: both directions red.
    pub const ALL_RED: Self = Self::new(false, true, false, true);

    /// Pedestrian right-of-way pattern: vehicle red, pedestrian green.
    pub const VEHICLE_RED_PEDESTRIAN_GREEN: Self = Self::new(false, true, true, false);

    const fn new(
        vehicle_green: bool,
        vehicle_red: bool,
        pedestrian_green: bool,
        pedestrian_red: bool,
    ) -> Self {
        Self {
            vehicle_green,
            vehicle_red,
            pedestrian_green,
            pedestrian_red,
        }
    }
}

/// Trait for abstracting the lamp hardware.
///
/// Implement this for your signal head hardware (GPIO pins, a shift
/// register, a relay board, etc.) to let the controller drive it.
pub trait LampDriver {
    /// Applies all four lamp outputs at once.
    ///
    /// Handle any hardware errors internally - this method cannot fail. The
    /// controller only calls it when the outputs actually change.
    fn set_outputs(&mut self, outputs: LampOutputs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_patterns_light_exactly_one_lamp_per_head() {
        for pattern in [
            LampOutputs::VEHICLE_GREEN_PEDESTRIAN_RED,
            LampOutputs::ALL_RED,
            LampOutputs::VEHICLE_RED_PEDESTRIAN_GREEN,
        ] {
            assert_ne!(pattern.vehicle_green, pattern.vehicle_red);
            assert_ne!(pattern.pedestrian_green, pattern.pedestrian_red);
        }
    }

    #[test]
    fn default_is_all_off() {
        assert_eq!(LampOutputs::default(), LampOutputs::ALL_OFF);
    }
}

//! The signal phases of the crossing.

/// The five phases of the crossing cycle.
///
/// Each phase is one fixed combination of vehicle and pedestrian signal
/// heads. The cycle is `Idle` → `VehicleFlashingGreen` → `AllRed` →
/// `PedestrianGreen` → `PedestrianFlashingGreen` → `AllRed` → `Idle`, with
/// `AllRed` visited twice and disambiguated by the phase it was entered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum TrafficLightState {
    /// Vehicles have right of way; waiting for a pedestrian call.
    /// Vehicle green, pedestrian red.
    Idle = 0,

    /// Vehicle green flashing as a warning that vehicles are about to stop.
    /// Pedestrian stays red.
    VehicleFlashingGreen = 1,

    /// Clearance interval with both directions held at red.
    AllRed = 2,

    /// Pedestrians have right of way. Vehicle red, pedestrian green.
    PedestrianGreen = 3,

    /// Pedestrian green flashing as a warning that vehicles are about to
    /// resume. Vehicle stays red.
    PedestrianFlashingGreen = 4,
}

impl TrafficLightState {
    /// Returns the raw discriminant of this phase.
    ///
    /// The controller stores the active phase as this raw byte so that a
    /// corrupted value is detectable data rather than an invalid enum.
    #[inline]
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Decodes a raw discriminant, returning `None` for unrecognized values.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(TrafficLightState::Idle),
            1 => Some(TrafficLightState::VehicleFlashingGreen),
            2 => Some(TrafficLightState::AllRed),
            3 => Some(TrafficLightState::PedestrianGreen),
            4 => Some(TrafficLightState::PedestrianFlashingGreen),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_round_trips_for_all_phases() {
        let phases = [
            TrafficLightState::Idle,
            TrafficLightState::VehicleFlashingGreen,
            TrafficLightState::AllRed,
            TrafficLightState::PedestrianGreen,
            TrafficLightState::PedestrianFlashingGreen,
        ];

        for phase in phases {
            assert_eq!(TrafficLightState::from_raw(phase.as_raw()), Some(phase));
        }
    }

    #[test]
    fn out_of_range_raw_decodes_to_none() {
        assert_eq!(TrafficLightState::from_raw(5), None);
        assert_eq!(TrafficLightState::from_raw(0xFF), None);
    }
}

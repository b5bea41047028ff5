use crate::actuator::{ActuatorPolicy, ActuatorPolicyKind, ActuatorStatus, Power};
use crate::status::{ControlLogPage, LedState, StatusSnapshot};

/// BLUE means cooling, RED means heating, anything else means idle.
#[derive(Debug, Clone, Copy, Default)]
pub struct LedStatePolicy;

impl ActuatorPolicy for LedStatePolicy {
    fn kind(&self) -> ActuatorPolicyKind {
        ActuatorPolicyKind::Led
    }

    fn needs_control_log(&self) -> bool {
        false
    }

    fn resolve(
        &self,
        snapshot: &StatusSnapshot,
        _control_log: Option<&ControlLogPage>,
    ) -> ActuatorStatus {
        match snapshot.led_state {
            Some(LedState::Blue) => ActuatorStatus {
                air_conditioner: Power::On,
                heater: Power::Off,
            },
            Some(LedState::Red) => ActuatorStatus {
                air_conditioner: Power::Off,
                heater: Power::On,
            },
            _ => ActuatorStatus::ALL_OFF,
        }
    }
}

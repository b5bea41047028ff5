use crate::actuator::{ActuatorPolicy, ActuatorPolicyKind, ActuatorStatus, Power};
use crate::status::{ControlLogPage, Device, StatusSnapshot};

/// Takes the newest control log action recorded for each device.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogScanPolicy;

impl ActuatorPolicy for LogScanPolicy {
    fn kind(&self) -> ActuatorPolicyKind {
        ActuatorPolicyKind::Log
    }

    fn needs_control_log(&self) -> bool {
        true
    }

    fn resolve(
        &self,
        _snapshot: &StatusSnapshot,
        control_log: Option<&ControlLogPage>,
    ) -> ActuatorStatus {
        let Some(control_log) = control_log else {
            return ActuatorStatus::ALL_OFF;
        };

        let mut air_conditioner = None;
        let mut heater = None;

        for entry in control_log.entries() {
            match entry.device() {
                Some(Device::AirConditioner) if air_conditioner.is_none() => {
                    air_conditioner = Some(Power::from_action(&entry.action));
                }
                Some(Device::Heater) if heater.is_none() => {
                    heater = Some(Power::from_action(&entry.action));
                }
                _ => {}
            }

            // Older entries cannot change a device that is already resolved.
            if air_conditioner.is_some() && heater.is_some() {
                break;
            }
        }

        ActuatorStatus {
            air_conditioner: air_conditioner.unwrap_or(Power::Off),
            heater: heater.unwrap_or(Power::Off),
        }
    }
}

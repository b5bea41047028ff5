mod led;
mod log_scan;
mod power;

pub use led::*;
pub use log_scan::*;
pub use power::*;

use crate::status::{ControlLogPage, StatusSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorStatus {
    pub air_conditioner: Power,

    pub heater: Power,
}

impl ActuatorStatus {
    pub const ALL_OFF: ActuatorStatus = ActuatorStatus {
        air_conditioner: Power::Off,
        heater: Power::Off,
    };
}

/// Infers whether the air conditioner and the heater are running.
pub trait ActuatorPolicy: Send + Sync {
    fn kind(&self) -> ActuatorPolicyKind;

    /// Whether [`resolve`](ActuatorPolicy::resolve) reads the control log.
    fn needs_control_log(&self) -> bool;

    fn resolve(
        &self,
        snapshot: &StatusSnapshot,
        control_log: Option<&ControlLogPage>,
    ) -> ActuatorStatus;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ActuatorPolicyKind {
    /// Scan the control log for the latest action per device.
    Log,
    /// Read the LED color reported in the status snapshot.
    Led,
}

impl ActuatorPolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActuatorPolicyKind::Log => "log",
            ActuatorPolicyKind::Led => "led",
        }
    }

    pub fn into_policy(self) -> Box<dyn ActuatorPolicy> {
        match self {
            ActuatorPolicyKind::Log => Box::new(LogScanPolicy),
            ActuatorPolicyKind::Led => Box::new(LedStatePolicy),
        }
    }
}

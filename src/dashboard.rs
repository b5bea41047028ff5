use chrono::{DateTime, Utc};

use crate::deriver::{MotionMemory, StatusDeriver};
use crate::display::DisplayState;
use crate::status::{ControlLogPage, StatusSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Connecting,
    Online,
    Offline,
}

impl Connectivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Connectivity::Connecting => "connecting",
            Connectivity::Online => "online",
            Connectivity::Offline => "offline",
        }
    }
}

/// Everything one dashboard instance keeps between polls.
///
/// A failed poll only flips [`Connectivity`]; the last rendered display
/// stays visible.
pub struct Dashboard {
    deriver: StatusDeriver,
    memory: MotionMemory,
    display: DisplayState,
    connectivity: Connectivity,
    last_update: Option<DateTime<Utc>>,
}

impl Dashboard {
    pub fn new(deriver: StatusDeriver) -> Self {
        Self {
            deriver,
            memory: MotionMemory::default(),
            display: DisplayState::placeholder(),
            connectivity: Connectivity::Connecting,
            last_update: None,
        }
    }

    pub fn needs_control_log(&self) -> bool {
        self.deriver.policy().needs_control_log()
    }

    /// `control_log` is `None` when the log could not be fetched, in which
    /// case a log-driven dashboard keeps showing its previous actuator state.
    pub fn apply(
        &mut self,
        snapshot: &StatusSnapshot,
        control_log: Option<&ControlLogPage>,
        now: DateTime<Utc>,
    ) -> &DisplayState {
        let (mut display, memory) = self.deriver.derive(snapshot, control_log, self.memory, now);

        if control_log.is_none() && self.needs_control_log() {
            display.air_conditioner = self.display.air_conditioner;
            display.heater = self.display.heater;
        }

        self.display = display;
        self.memory = memory;
        self.connectivity = Connectivity::Online;
        self.last_update = Some(now);

        &self.display
    }

    pub fn mark_unavailable(&mut self) {
        self.connectivity = Connectivity::Offline;
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.last_update
    }

    pub fn memory(&self) -> MotionMemory {
        self.memory
    }
}

use crate::status::Device;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlLogEntry {
    pub device: String,

    pub action: String,
}

impl ControlLogEntry {
    pub fn new(device: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            device: device.into(),
            action: action.into(),
        }
    }

    /// `None` for devices the dashboard does not display.
    pub fn device(&self) -> Option<Device> {
        self.device.parse().ok()
    }
}

/// Control log rows, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlLogPage {
    entries: Vec<ControlLogEntry>,
}

impl ControlLogPage {
    pub fn new(entries: Vec<ControlLogEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[ControlLogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ControlLogEntry> for ControlLogPage {
    fn from_iter<I: IntoIterator<Item = ControlLogEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

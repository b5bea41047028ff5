#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Power {
    On,
    Off,
}

impl Power {
    pub fn as_str(&self) -> &'static str {
        match self {
            Power::On => "ON",
            Power::Off => "OFF",
        }
    }

    pub fn is_on(&self) -> bool {
        matches!(self, Power::On)
    }

    /// Anything other than an exact `ON` reads as off.
    pub fn from_action(action: &str) -> Self {
        if action == "ON" { Power::On } else { Power::Off }
    }
}

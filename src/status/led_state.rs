/// Color reported by the LED controller.
///
/// The central server drives BLUE when it is cooling and RED when it is
/// heating, so the color doubles as an actuator indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedState {
    Off,
    Red,
    Blue,
    Green,
    Unknown(String),
}

impl LedState {
    pub fn as_str(&self) -> &str {
        match self {
            LedState::Off => "OFF",
            LedState::Red => "RED",
            LedState::Blue => "BLUE",
            LedState::Green => "GREEN",
            LedState::Unknown(s) => s,
        }
    }
}

impl From<&str> for LedState {
    fn from(s: &str) -> Self {
        match s {
            "OFF" => LedState::Off,
            "RED" => LedState::Red,
            "BLUE" => LedState::Blue,
            "GREEN" => LedState::Green,
            _ => LedState::Unknown(s.to_string()),
        }
    }
}

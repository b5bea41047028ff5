use crate::actuator::{ActuatorStatus, Power};

pub const PLACEHOLDER: &str = "--";

/// What the dashboard shows for one poll. Rebuilt from scratch every time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    pub temperature: String,

    pub co2: Reading,

    pub noise: Reading,

    pub drowsiness: Drowsiness,

    pub air_conditioner: ActuatorDisplay,

    pub heater: ActuatorDisplay,
}

impl DisplayState {
    /// Shown before the first snapshot arrives.
    pub fn placeholder() -> Self {
        Self {
            temperature: PLACEHOLDER.to_string(),
            co2: Reading::absent(),
            noise: Reading::absent(),
            drowsiness: Drowsiness::waiting_for_data(),
            air_conditioner: ActuatorDisplay::from(Power::Off),
            heater: ActuatorDisplay::from(Power::Off),
        }
    }

    pub fn set_actuators(&mut self, status: ActuatorStatus) {
        self.air_conditioner = ActuatorDisplay::from(status.air_conditioner);
        self.heater = ActuatorDisplay::from(status.heater);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    pub value: String,

    pub alert: bool,
}

impl Reading {
    pub fn absent() -> Self {
        Self {
            value: PLACEHOLDER.to_string(),
            alert: false,
        }
    }

    /// Alerts only when `value` is strictly above `high`.
    pub fn with_threshold(value: Option<f64>, decimals: usize, high: f64) -> Self {
        match value {
            Some(v) => Self {
                value: format_fixed(v, decimals),
                alert: v > high,
            },
            None => Self::absent(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrowsinessState {
    Active,
    Waiting,
    Drowsy,
}

impl DrowsinessState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrowsinessState::Active => "ACTIVE",
            DrowsinessState::Waiting => "WAITING",
            DrowsinessState::Drowsy => "DROWSY",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drowsiness {
    pub state: DrowsinessState,

    pub status: String,

    pub time: String,

    pub alert: bool,
}

impl Drowsiness {
    pub fn active() -> Self {
        Self {
            state: DrowsinessState::Active,
            status: "motion detected, not drowsy".to_string(),
            time: "active".to_string(),
            alert: false,
        }
    }

    pub fn drowsy(elapsed_secs: i64) -> Self {
        Self {
            state: DrowsinessState::Drowsy,
            status: "drowsiness detected".to_string(),
            time: format!("{} minutes with no motion", elapsed_secs.div_euclid(60)),
            alert: true,
        }
    }

    pub fn not_drowsy_yet(remaining_secs: i64) -> Self {
        Self {
            state: DrowsinessState::Waiting,
            status: "not drowsy yet".to_string(),
            time: format!(
                "{} minutes until drowsiness flagged",
                remaining_secs.div_euclid(60)
            ),
            alert: false,
        }
    }

    pub fn waiting_for_data() -> Self {
        Self {
            state: DrowsinessState::Waiting,
            status: "waiting for data".to_string(),
            time: "-".to_string(),
            alert: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorDisplay {
    pub status: Power,

    pub on: bool,
}

impl From<Power> for ActuatorDisplay {
    fn from(status: Power) -> Self {
        Self {
            status,
            on: status.is_on(),
        }
    }
}

/// Fixed-point formatting that rounds halves away from zero, so `23.45`
/// renders as `23.5` rather than following the binary expansion down.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.decimals$}")
}

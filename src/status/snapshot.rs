use chrono::{DateTime, Utc};

use crate::status::LedState;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub co2_high: f64,

    pub noise_high: f64,
}

/// One polled reading of every sensor and actuator field.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub temperature: Option<f64>,

    pub co2_level: Option<f64>,

    pub noise_level: Option<f64>,

    pub motion_detected: bool,

    pub motion_timestamp: Option<DateTime<Utc>>,

    pub led_state: Option<LedState>,

    pub thresholds: Thresholds,
}

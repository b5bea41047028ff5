//! Turns a raw [`StatusSnapshot`] into the [`DisplayState`] the dashboard shows.
//!
//! Derivation is pure. The only state carried from one poll to the next is
//! the last motion instant, held in [`MotionMemory`] and handed back to the
//! caller alongside the display.

use chrono::{DateTime, TimeDelta, Utc};

use crate::actuator::ActuatorPolicy;
use crate::display::{DisplayState, Drowsiness, PLACEHOLDER, Reading, format_fixed};
use crate::status::{ControlLogPage, StatusSnapshot};

pub const DROWSY_TIMEOUT: TimeDelta = TimeDelta::seconds(300);

const TEMPERATURE_DECIMALS: usize = 1;
const CO2_DECIMALS: usize = 0;
const NOISE_DECIMALS: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MotionMemory {
    pub last_motion: Option<DateTime<Utc>>,
}

pub struct StatusDeriver {
    policy: Box<dyn ActuatorPolicy>,
}

impl StatusDeriver {
    pub fn new(policy: Box<dyn ActuatorPolicy>) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &dyn ActuatorPolicy {
        self.policy.as_ref()
    }

    pub fn derive(
        &self,
        snapshot: &StatusSnapshot,
        control_log: Option<&ControlLogPage>,
        memory: MotionMemory,
        now: DateTime<Utc>,
    ) -> (DisplayState, MotionMemory) {
        let (drowsiness, memory) = classify_drowsiness(snapshot, memory, now);

        let mut display = DisplayState {
            temperature: snapshot
                .temperature
                .map(|v| format_fixed(v, TEMPERATURE_DECIMALS))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            co2: Reading::with_threshold(
                snapshot.co2_level,
                CO2_DECIMALS,
                snapshot.thresholds.co2_high,
            ),
            noise: Reading::with_threshold(
                snapshot.noise_level,
                NOISE_DECIMALS,
                snapshot.thresholds.noise_high,
            ),
            drowsiness,
            ..DisplayState::placeholder()
        };
        display.set_actuators(self.policy.resolve(snapshot, control_log));

        (display, memory)
    }
}

pub fn classify_drowsiness(
    snapshot: &StatusSnapshot,
    memory: MotionMemory,
    now: DateTime<Utc>,
) -> (Drowsiness, MotionMemory) {
    if snapshot.motion_detected {
        let last_motion = snapshot.motion_timestamp.unwrap_or(now);
        return (
            Drowsiness::active(),
            MotionMemory {
                last_motion: Some(last_motion),
            },
        );
    }

    let Some(last_motion) = snapshot.motion_timestamp.or(memory.last_motion) else {
        return (Drowsiness::waiting_for_data(), memory);
    };

    let elapsed = elapsed_seconds(last_motion, now);
    let timeout = DROWSY_TIMEOUT.num_seconds();
    let drowsiness = if elapsed > timeout {
        Drowsiness::drowsy(elapsed)
    } else {
        Drowsiness::not_drowsy_yet(timeout - elapsed)
    };

    (
        drowsiness,
        MotionMemory {
            last_motion: Some(last_motion),
        },
    )
}

/// Whole seconds since `since`, floored.
fn elapsed_seconds(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - since).num_milliseconds().div_euclid(1000)
}

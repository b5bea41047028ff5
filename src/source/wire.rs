use chrono::{DateTime, LocalResult, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::Deserialize;
use serde_json::Value;

use crate::source::SourceError;
use crate::status::{ControlLogEntry, ControlLogPage, LedState, StatusSnapshot, Thresholds};

const CONTROL_LOG_DEVICE_INDEX: usize = 2;
const CONTROL_LOG_ACTION_INDEX: usize = 3;

#[derive(Debug, Deserialize)]
struct StatusResponse {
    sensor_data: SensorData,
    thresholds: WireThresholds,
}

#[derive(Debug, Deserialize)]
struct SensorData {
    #[serde(default)]
    temperature: Option<LenientNumber>,

    #[serde(default)]
    co2_level: Option<LenientNumber>,

    #[serde(default)]
    noise_level: Option<LenientNumber>,

    #[serde(default)]
    motion_detected: Option<bool>,

    #[serde(default)]
    motion_timestamp: Option<String>,

    #[serde(default)]
    led_state: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireThresholds {
    co2_high: f64,
    noise_high: f64,
}

#[derive(Debug, Deserialize)]
struct ControlLogResponse {
    #[serde(default)]
    logs: Vec<Vec<Value>>,
}

/// Sensors report some readings as JSON numbers and others as numeric strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
}

impl LenientNumber {
    fn into_f64(self) -> Result<f64, SourceError> {
        match self {
            LenientNumber::Number(v) => Ok(v),
            LenientNumber::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| SourceError::Number(s.clone())),
        }
    }
}

pub fn decode_status(body: &str, timezone: Tz) -> Result<StatusSnapshot, SourceError> {
    let response: StatusResponse = serde_json::from_str(body)?;
    let sensors = response.sensor_data;

    let motion_timestamp = sensors
        .motion_timestamp
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| parse_motion_timestamp(s, timezone))
        .transpose()?;

    Ok(StatusSnapshot {
        temperature: sensors.temperature.map(LenientNumber::into_f64).transpose()?,
        co2_level: sensors.co2_level.map(LenientNumber::into_f64).transpose()?,
        noise_level: sensors.noise_level.map(LenientNumber::into_f64).transpose()?,
        motion_detected: sensors.motion_detected.unwrap_or(false),
        motion_timestamp,
        led_state: sensors.led_state.as_deref().map(LedState::from),
        thresholds: Thresholds {
            co2_high: response.thresholds.co2_high,
            noise_high: response.thresholds.noise_high,
        },
    })
}

pub fn decode_control_log(body: &str) -> Result<ControlLogPage, SourceError> {
    let response: ControlLogResponse = serde_json::from_str(body)?;

    response
        .logs
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let device = row
                .get(CONTROL_LOG_DEVICE_INDEX)
                .and_then(Value::as_str)
                .ok_or(SourceError::ControlLogEntry {
                    index,
                    reason: "missing device",
                })?;
            let action = row
                .get(CONTROL_LOG_ACTION_INDEX)
                .and_then(Value::as_str)
                .ok_or(SourceError::ControlLogEntry {
                    index,
                    reason: "missing action",
                })?;

            Ok(ControlLogEntry::new(device, action))
        })
        .collect()
}

/// Accepts RFC 3339, or a naive ISO-8601 timestamp in the server's local zone.
pub fn parse_motion_timestamp(s: &str, timezone: Tz) -> Result<DateTime<Utc>, SourceError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|_| SourceError::Timestamp(s.to_string()))?;

    match naive.and_local_timezone(timezone) {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(dt, _) => Ok(dt.with_timezone(&Utc)),
        LocalResult::None => Err(SourceError::Timestamp(s.to_string())),
    }
}

use std::fmt::Write as _;

use chrono_tz::Tz;

use crate::dashboard::Dashboard;
use crate::display::ActuatorDisplay;

/// Plain-text rendition of the dashboard cards.
pub fn render(dashboard: &Dashboard, timezone: Tz) -> String {
    let display = dashboard.display();
    let mut out = String::new();

    let _ = writeln!(out, "● {}", dashboard.connectivity().as_str());
    let _ = writeln!(out, "temperature  {} °C", display.temperature);
    let _ = writeln!(
        out,
        "co2          {} ppm{}",
        display.co2.value,
        alert_marker(display.co2.alert)
    );
    let _ = writeln!(
        out,
        "noise        {} dB{}",
        display.noise.value,
        alert_marker(display.noise.alert)
    );
    let _ = writeln!(
        out,
        "drowsiness   {} ({}){}",
        display.drowsiness.status,
        display.drowsiness.time,
        alert_marker(display.drowsiness.alert)
    );
    let _ = writeln!(
        out,
        "aircon       {}",
        actuator_line(&display.air_conditioner)
    );
    let _ = writeln!(out, "heater       {}", actuator_line(&display.heater));

    match dashboard.last_update() {
        Some(at) => {
            let _ = write!(
                out,
                "last update: {}",
                at.with_timezone(&timezone).format("%H:%M:%S")
            );
        }
        None => {
            let _ = write!(out, "last update: -");
        }
    }

    out
}

fn alert_marker(alert: bool) -> &'static str {
    if alert { " [ALERT]" } else { "" }
}

fn actuator_line(actuator: &ActuatorDisplay) -> String {
    if actuator.on {
        format!("{} [ON]", actuator.status.as_str())
    } else {
        actuator.status.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeDelta, TimeZone, Utc};
    use chrono_tz::Asia::Seoul;

    use super::*;
    use crate::actuator::ActuatorPolicyKind;
    use crate::deriver::StatusDeriver;
    use crate::status::{LedState, StatusSnapshot, Thresholds};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 3, 9, 30, 0).unwrap()
    }

    #[test]
    fn renders_placeholder_before_first_poll() {
        let dashboard = Dashboard::new(StatusDeriver::new(ActuatorPolicyKind::Led.into_policy()));

        let text = render(&dashboard, Seoul);

        assert!(text.starts_with("● connecting\n"));
        assert!(text.contains("temperature  -- °C\n"));
        assert!(text.contains("drowsiness   waiting for data (-)\n"));
        assert!(text.ends_with("last update: -"));
    }

    #[test]
    fn renders_alerts_and_running_actuators() {
        let mut dashboard =
            Dashboard::new(StatusDeriver::new(ActuatorPolicyKind::Led.into_policy()));
        let snapshot = StatusSnapshot {
            temperature: Some(23.45),
            co2_level: Some(612.0),
            noise_level: Some(38.26),
            motion_detected: false,
            motion_timestamp: Some(now() - TimeDelta::seconds(400)),
            led_state: Some(LedState::Blue),
            thresholds: Thresholds {
                co2_high: 600.0,
                noise_high: 70.0,
            },
        };
        dashboard.apply(&snapshot, None, now());
        dashboard.mark_unavailable();

        let text = render(&dashboard, Seoul);

        assert_eq!(
            text,
            "● offline\n\
             temperature  23.5 °C\n\
             co2          612 ppm [ALERT]\n\
             noise        38.3 dB\n\
             drowsiness   drowsiness detected (6 minutes with no motion) [ALERT]\n\
             aircon       ON [ON]\n\
             heater       OFF\n\
             last update: 18:30:00"
        );
    }
}

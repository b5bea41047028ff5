use std::{collections::HashMap, sync::Once};

use anyhow::Result;
use axum::{
    Router,
    extract::Query,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::{TimeZone, Utc};
use chrono_tz::Asia::Seoul;
use room_dashboard::{
    actuator::{ActuatorPolicyKind, Power},
    dashboard::{Connectivity, Dashboard},
    deriver::StatusDeriver,
    source::{CONTROL_LOG_LIMIT, HttpStatusSource, SourceError},
    status::ControlLogEntry,
};
use tokio::net::TcpListener;

const STATUS_BODY: &str = r#"{
    "sensor_data": {
        "temperature": 17.2,
        "co2_level": 1340.0,
        "noise_level": null,
        "motion_detected": true,
        "motion_timestamp": "2025-11-03T18:29:58.500000",
        "led_state": "RED"
    },
    "thresholds": {"co2_high": 1000.0, "noise_high": 70.0}
}"#;

const CONTROL_LOG_BODY: &str = r#"{"logs": [
    [41, "2025-11-03T18:29:00", "heater", "ON", "Temperature too low: 17.2C"],
    [40, "2025-11-03T18:10:00", "ventilator", "ON", "CO2 too high"],
    [39, "2025-11-03T17:55:00", "airconditioner", "OFF", "Temperature normal"]
]}"#;

async fn status() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], STATUS_BODY)
}

async fn control_log(Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    if params.get("limit").map(String::as_str) != Some("20") {
        return (StatusCode::BAD_REQUEST, "limit required").into_response();
    }

    ([(header::CONTENT_TYPE, "application/json")], CONTROL_LOG_BODY).into_response()
}

fn bypass_proxy() {
    static ONCE: Once = Once::new();
    // SAFETY: set once, before any client in this process reads the environment.
    ONCE.call_once(|| unsafe { std::env::set_var("NO_PROXY", "127.0.0.1,localhost") });
}

async fn spawn_server(app: Router) -> Result<String> {
    bypass_proxy();
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{addr}"))
}

async fn spawn_central_server() -> Result<String> {
    spawn_server(
        Router::new()
            .route("/status", get(status))
            .route("/logs/control", get(control_log)),
    )
    .await
}

#[tokio::test]
async fn fetches_and_decodes_status() {
    let server_url = spawn_central_server().await.expect("spawn server");
    let source = HttpStatusSource::new(format!("{server_url}/"), Seoul).expect("source");

    let snapshot = source.fetch_status().await.expect("status");

    assert_eq!(source.server_url(), server_url);
    assert_eq!(snapshot.temperature, Some(17.2));
    assert_eq!(snapshot.co2_level, Some(1340.0));
    assert_eq!(snapshot.noise_level, None);
    assert!(snapshot.motion_detected);
    assert_eq!(
        snapshot.motion_timestamp,
        Some(
            Utc.with_ymd_and_hms(2025, 11, 3, 9, 29, 58).unwrap()
                + chrono::TimeDelta::milliseconds(500)
        )
    );
}

#[tokio::test]
async fn fetches_control_log_with_limit() {
    let server_url = spawn_central_server().await.expect("spawn server");
    let source = HttpStatusSource::new(server_url, Seoul).expect("source");

    let page = source
        .fetch_control_log(CONTROL_LOG_LIMIT)
        .await
        .expect("control log");

    assert_eq!(page.entries().len(), 3);
    assert_eq!(page.entries()[0], ControlLogEntry::new("heater", "ON"));
}

#[tokio::test]
async fn server_errors_are_source_unavailable() {
    let server_url = spawn_server(Router::new().route(
        "/status",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    ))
    .await
    .expect("spawn server");
    let source = HttpStatusSource::new(server_url, Seoul).expect("source");

    let err = source.fetch_status().await.unwrap_err();

    assert!(matches!(err, SourceError::Request { .. }));
}

#[tokio::test]
async fn unreachable_server_is_source_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);
    bypass_proxy();
    let source = HttpStatusSource::new(format!("http://{addr}"), Seoul).expect("source");

    let err = source.fetch_status().await.unwrap_err();

    assert!(matches!(err, SourceError::Request { .. }));
}

#[tokio::test]
async fn dashboard_polls_with_log_policy() {
    let server_url = spawn_central_server().await.expect("spawn server");
    let source = HttpStatusSource::new(server_url, Seoul).expect("source");
    let mut dashboard =
        Dashboard::new(StatusDeriver::new(ActuatorPolicyKind::Log.into_policy()));

    let snapshot = source.fetch_status().await.expect("status");
    let page = source
        .fetch_control_log(CONTROL_LOG_LIMIT)
        .await
        .expect("control log");
    let now = Utc.with_ymd_and_hms(2025, 11, 3, 9, 30, 0).unwrap();
    let display = dashboard.apply(&snapshot, Some(&page), now);

    assert_eq!(display.temperature, "17.2");
    assert_eq!(display.co2.value, "1340");
    assert!(display.co2.alert);
    assert_eq!(display.noise.value, "--");
    assert_eq!(display.drowsiness.time, "active");
    assert_eq!(display.air_conditioner.status, Power::Off);
    assert!(display.heater.on);
    assert_eq!(dashboard.connectivity(), Connectivity::Online);
}

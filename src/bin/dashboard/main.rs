mod args;

use std::process::ExitCode;

use anyhow::{Context as _, Result};
use args::Args;
use chrono::Utc;
use clap::Parser as _;
use room_dashboard::{
    dashboard::Dashboard,
    deriver::StatusDeriver,
    render::render,
    source::{CONTROL_LOG_LIMIT, HttpStatusSource},
};
use tokio::time::{Duration, sleep};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const POLL_INTERVAL: Duration = Duration::from_secs(2);

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("{e:#}");
        return ExitCode::from(1);
    }

    ExitCode::from(0)
}

async fn run() -> Result<()> {
    let args = Args::parse();

    let source = HttpStatusSource::new(&args.server_url, args.timezone)
        .context("failed to create status source")?;

    let deriver = StatusDeriver::new(args.actuator_policy.into_policy());

    info!(
        server_url = source.server_url(),
        policy = deriver.policy().kind().as_str(),
        timezone = %args.timezone,
        "dashboard: polling started"
    );

    let mut dashboard = Dashboard::new(deriver);

    loop {
        poll(&source, &mut dashboard).await;

        println!("{}\n", render(&dashboard, args.timezone));

        sleep(POLL_INTERVAL).await;
    }
}

async fn poll(source: &HttpStatusSource, dashboard: &mut Dashboard) {
    let snapshot = match source.fetch_status().await {
        Ok(s) => s,
        Err(err) => {
            warn!(error = %err, "dashboard: status source unavailable");
            dashboard.mark_unavailable();
            return;
        }
    };

    let control_log = if dashboard.needs_control_log() {
        match source.fetch_control_log(CONTROL_LOG_LIMIT).await {
            Ok(page) => Some(page),
            Err(err) => {
                warn!(error = %err, "dashboard: control log unavailable");
                None
            }
        }
    } else {
        None
    };

    dashboard.apply(&snapshot, control_log.as_ref(), Utc::now());
}

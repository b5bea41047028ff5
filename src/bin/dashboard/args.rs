use chrono_tz::Tz;
use clap::Parser;
use room_dashboard::actuator::ActuatorPolicyKind;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long, env = "SERVER_URL", default_value = "http://localhost:5000")]
    pub server_url: String,

    /// Time zone of the central server; naive timestamps are read in it.
    #[arg(long, env = "TZ")]
    pub timezone: Tz,

    #[arg(long, env = "ACTUATOR_POLICY", value_enum, default_value_t = ActuatorPolicyKind::Led)]
    pub actuator_policy: ActuatorPolicyKind,
}

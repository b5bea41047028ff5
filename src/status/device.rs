use std::str::FromStr;

use anyhow::{Error, bail};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    AirConditioner,
    Heater,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::AirConditioner => "airconditioner",
            Device::Heater => "heater",
        }
    }
}

impl FromStr for Device {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "airconditioner" => Ok(Device::AirConditioner),
            "heater" => Ok(Device::Heater),
            _ => bail!("unknown device: {}", s),
        }
    }
}

mod control_log;
mod device;
mod led_state;
mod snapshot;

pub use control_log::*;
pub use device::*;
pub use led_state::*;
pub use snapshot::*;

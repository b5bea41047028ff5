pub mod actuator;
pub mod dashboard;
pub mod deriver;
pub mod display;
pub mod render;
pub mod source;
pub mod status;

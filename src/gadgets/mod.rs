//! Stateless or lightly stateful visual gadgets driven by the update loop.

pub mod heartbeat;
pub mod log_rotator;
pub mod radar;
pub mod status;
pub mod telemetry;
pub mod warning;
pub mod waveform;

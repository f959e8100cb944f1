//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod heartbeat;
pub mod logs;
pub mod overlay;
pub mod radar;
pub mod readouts;
pub mod status;
pub mod waveform;

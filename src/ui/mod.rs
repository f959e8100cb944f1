// Module declarations
mod app;
pub mod dashboard;
mod magi;
pub mod splash;
// Re-exports for external use
pub use app::{App, Screen, UIConfig, run};

pub mod config;
pub mod content;
pub mod error;
pub mod forms;
pub mod intake;
pub mod render;
pub mod telemetry;
